//! vmenu CLI application
//!
//! Interactive terminal menus around a handful of external system tools:
//!
//! - `vmenu` / `vmenu vm`: configure and boot a test VM via
//!   `qemu-system-x86_64` or `virt-install`, creating qcow2 images with
//!   `qemu-img` on the way.
//! - `vmenu brightness`: adjust or reset display brightness through an
//!   external xrandr helper script.
//!
//! Every external invocation is an argv vector executed without a shell;
//! a failing child's exit status becomes vmenu's own exit code.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(error) = router::route(cli).await {
        console::CliConsole::new(true).error(&format!("{error:#}"));
        std::process::exit(router::exit_code(&error));
    }
}
