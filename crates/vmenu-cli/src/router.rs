//! Subcommand dispatch

use anyhow::Result;

use vmenu_core::VmenuError;

use crate::args::{Cli, Commands};
use crate::commands;

/// Route a parsed CLI invocation to its command flow.
pub async fn route(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Commands::Vm) => {
            let root = match cli.root {
                Some(root) => root,
                None => std::env::current_dir()?,
            };
            commands::vm::run(root).await
        }
        Some(Commands::Brightness { helper }) => commands::brightness::run(helper).await,
    }
}

/// The process exit code to mirror for a failed flow.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<VmenuError>()
        .map_or(1, VmenuError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_exit_code_is_mirrored() {
        let error = anyhow::Error::new(VmenuError::NonZeroExit {
            program: "qemu-img".to_string(),
            code: 3,
        });
        assert_eq!(exit_code(&error), 3);
    }

    #[test]
    fn other_errors_map_to_one() {
        let error = anyhow::Error::new(VmenuError::invalid_spec("empty"));
        assert_eq!(exit_code(&error), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("no ISO files")), 1);
    }
}
