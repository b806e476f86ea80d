//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vmenu")]
#[command(about = "Interactive menus for QEMU test VMs and display brightness")]
#[command(
    long_about = r#"Interactive menus for QEMU test VMs and display brightness

USAGE:
  vmenu                          # VM launcher menu (default)
  vmenu vm --root <dir>          # VM launcher with an explicit root
  vmenu brightness               # Brightness adjustment menu

The VM launcher looks for ISOs under <root>/out and qcow2 images under
<root>/qcow2. The root defaults to the current directory or $VMENU_ROOT."#
)]
#[command(version)]
pub struct Cli {
    /// Application root containing out/ (ISOs) and qcow2/ (disk images)
    #[arg(long, env = "VMENU_ROOT", global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure and boot a test VM (the default when no subcommand is given)
    Vm,

    /// Adjust or reset display brightness via the xrandr helper script
    Brightness {
        /// Path to the brightness helper script (default: ~/Utils/bin/brightness.sh)
        #[arg(long)]
        helper: Option<PathBuf>,
    },
}
