//! Command spec and execution result types

use std::fmt;

use crate::error::{VmenuError, VmenuResult};

/// An ordered token vector describing one program invocation.
///
/// Tokens are handed to the child process as `argv` entries exactly as
/// stored. No shell ever sees them, so paths and names that came from
/// free-text user input cannot be split, re-quoted or glob-expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    tokens: Vec<String>,
}

impl CommandSpec {
    /// Create a spec from a token sequence (program name first)
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// The program name, if the spec is non-empty
    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// All tokens, program name included
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for CommandSpec {
    /// Space-joined rendering for echoing to the user. Display only; the
    /// joined form is never what gets executed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Outcome of one completed child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    /// True iff the exit code was zero
    pub success: bool,
    /// The child's exit code; 1 when the child died to a signal and no
    /// code exists
    pub code: i32,
}

impl ExecutionResult {
    /// Turn a failed result into the matching [`VmenuError::NonZeroExit`].
    ///
    /// The calling flow uses this to abort the interactive session with
    /// the child's own exit code.
    pub fn require_success(&self, spec: &CommandSpec) -> VmenuResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(VmenuError::NonZeroExit {
                program: spec.program().unwrap_or("<empty>").to_string(),
                code: self.code,
            })
        }
    }
}
