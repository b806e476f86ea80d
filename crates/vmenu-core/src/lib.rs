//! vmenu core library
//!
//! This crate provides the non-interactive building blocks for the vmenu
//! menus: typed command specs, per-tool command builders, a shell-free
//! process runner, workspace (ISO/disk folder) scanning and the brightness
//! helper bindings. All user interaction lives in `vmenu-cli`.

pub mod brightness;
pub mod command;
pub mod error;
pub mod workspace;

// Re-export commonly used types
pub use brightness::BrightnessControl;
pub use command::{CommandRunner, CommandSpec, ExecutionResult, LaunchConfig, Tool};
pub use error::{VmenuError, VmenuResult};
pub use workspace::VmWorkspace;
