//! Error types for vmenu

use thiserror::Error;

/// Result type alias for vmenu operations
pub type VmenuResult<T> = Result<T, VmenuError>;

/// Main error type for vmenu
#[derive(Error, Debug)]
pub enum VmenuError {
    /// Command spec is empty or otherwise unusable; nothing was spawned
    #[error("invalid command spec: {0}")]
    InvalidSpec(String),

    /// A builder was asked to produce a command from an incomplete config
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The OS could not create the child process; there is no exit code
    #[error("failed to spawn '{program}': {source}")]
    SpawnFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child ran and exited with a nonzero status
    #[error("'{program}' exited with status {code}")]
    NonZeroExit { program: String, code: i32 },

    /// Workspace scanning errors (missing folders, unreadable entries)
    #[error("workspace error: {0}")]
    Workspace(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),
}

impl VmenuError {
    /// Create a new invalid-spec error
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec(message.into())
    }

    /// Create a new missing-field error
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a new workspace error
    pub fn workspace(message: impl Into<String>) -> Self {
        Self::Workspace(message.into())
    }

    /// The process exit code the surrounding program should mirror.
    ///
    /// A failed child's status is propagated verbatim; every other error
    /// maps to 1 so shell scripting around vmenu can detect failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NonZeroExit { code, .. } => *code,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for VmenuError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
