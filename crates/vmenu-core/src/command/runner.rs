//! Shell-free process execution

use std::process::Stdio;

use tokio::process::Command;

use crate::error::{VmenuError, VmenuResult};

use super::spec::{CommandSpec, ExecutionResult};

/// Executes [`CommandSpec`]s as child processes.
///
/// The runner is a leaf: it borrows a spec for the duration of one
/// execution and holds no state afterwards. Exactly one child is spawned
/// per call and fully reaped before the call returns. There is no timeout;
/// VM sessions and image creation are expected to run as long as they
/// like.
#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a command with inherited stdio and wait for it to exit.
    ///
    /// The parent's standard streams are passed through so interactive
    /// output (QEMU console, qemu-img progress) is visible in real time.
    /// A nonzero exit is a normal [`ExecutionResult`], not an error; only
    /// failures to spawn at all are errors.
    pub async fn execute(&self, spec: &CommandSpec) -> VmenuResult<ExecutionResult> {
        let mut command = self.prepare(spec)?;
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(command = %spec, "executing");

        let status = command.status().await.map_err(|source| {
            VmenuError::SpawnFailure {
                program: spec.program().unwrap_or("<empty>").to_string(),
                source,
            }
        })?;

        // A signal-terminated child has no exit code; report failure as 1
        // so the surrounding flow still aborts with a nonzero status.
        Ok(ExecutionResult {
            success: status.success(),
            code: status.code().unwrap_or(1),
        })
    }

    /// Run a command with stdout piped and return the captured text.
    ///
    /// Used for short query commands (`xrandr --listmonitors`). A nonzero
    /// exit is an error here since there is no output contract to honor.
    pub async fn capture(&self, spec: &CommandSpec) -> VmenuResult<String> {
        let mut command = self.prepare(spec)?;
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        tracing::debug!(command = %spec, "capturing");

        let output = command.output().await.map_err(|source| {
            VmenuError::SpawnFailure {
                program: spec.program().unwrap_or("<empty>").to_string(),
                source,
            }
        })?;

        if !output.status.success() {
            return Err(VmenuError::NonZeroExit {
                program: spec.program().unwrap_or("<empty>").to_string(),
                code: output.status.code().unwrap_or(1),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn prepare(&self, spec: &CommandSpec) -> VmenuResult<Command> {
        let (program, args) = spec
            .tokens()
            .split_first()
            .ok_or_else(|| VmenuError::invalid_spec("command spec has no program name"))?;

        let mut command = Command::new(program);
        command.args(args);
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_spec_is_rejected_before_spawn() {
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(Vec::<String>::new());
        let err = runner.execute(&spec).await.unwrap_err();
        assert!(matches!(err, VmenuError::InvalidSpec(_)));
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_failure() {
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(["vmenu-test-no-such-binary-52861"]);
        let err = runner.execute(&spec).await.unwrap_err();
        match err {
            VmenuError::SpawnFailure { program, .. } => {
                assert_eq!(program, "vmenu-test-no-such-binary-52861");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_exit_reports_success() {
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(["true"]);
        let result = runner.execute(&spec).await.unwrap();
        assert_eq!(
            result,
            ExecutionResult {
                success: true,
                code: 0
            }
        );
    }

    #[tokio::test]
    async fn nonzero_exit_preserves_the_code() {
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(["sh", "-c", "exit 3"]);
        let result = runner.execute(&spec).await.unwrap();
        assert_eq!(
            result,
            ExecutionResult {
                success: false,
                code: 3
            }
        );
    }

    #[tokio::test]
    async fn arguments_are_not_shell_interpreted() {
        // A glob and a semicolon must arrive at the child verbatim.
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(["echo", "*.qcow2;", "$(hostname)"]);
        let output = runner.capture(&spec).await.unwrap();
        assert_eq!(output.trim(), "*.qcow2; $(hostname)");
    }

    #[tokio::test]
    async fn capture_returns_stdout() {
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(["echo", "hello"]);
        let output = runner.capture(&spec).await.unwrap();
        assert_eq!(output.trim(), "hello");
    }

    #[tokio::test]
    async fn capture_fails_on_nonzero_exit() {
        let runner = CommandRunner::new();
        let spec = CommandSpec::new(["sh", "-c", "exit 7"]);
        let err = runner.capture(&spec).await.unwrap_err();
        match err {
            VmenuError::NonZeroExit { code, .. } => assert_eq!(code, 7),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
