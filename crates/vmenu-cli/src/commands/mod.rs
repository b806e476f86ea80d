//! Interactive command flows

pub mod brightness;
pub mod vm;
