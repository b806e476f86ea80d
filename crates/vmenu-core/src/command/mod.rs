//! Command construction and execution
//!
//! Every external tool invocation goes through the same pipeline: a
//! [`LaunchConfig`] is mapped by a [`Tool`] builder into a [`CommandSpec`]
//! (an argv token vector, never a shell string), which the
//! [`CommandRunner`] spawns and waits on.

mod builders;
mod runner;
mod spec;

pub use builders::{LaunchConfig, Tool};
pub use runner::CommandRunner;
pub use spec::{CommandSpec, ExecutionResult};
