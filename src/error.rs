//! Error types for repo-fuse

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the tool can surface.
///
/// There is deliberately one failure taxonomy: an external command that
/// exits non-zero aborts the whole run, whatever the underlying cause
/// (network, auth, merge conflict). The captured stderr is surfaced
/// verbatim and the process exits 1.
#[derive(Debug, Error)]
pub enum Error {
    /// An external command exited non-zero.
    #[error("`{invocation}` failed: {stderr}")]
    Command {
        /// The full invocation that failed (program plus arguments).
        invocation: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// An external command could not be launched at all.
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        /// The program that could not be spawned.
        program: String,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// Default-account resolution or persistence failed.
    #[error("account error: {0}")]
    Account(String),

    /// Invalid input caught during planning (bad or colliding short names).
    #[error("invalid input: {0}")]
    Plan(String),

    /// Filesystem trouble in the target working directory.
    #[error("workspace error: {0}")]
    Workspace(String),

    /// Anything that should not happen (prompt I/O failures and the like).
    #[error("internal error: {0}")]
    Internal(String),
}
