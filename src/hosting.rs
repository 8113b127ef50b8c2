//! Remote repository creation on GitHub.
//!
//! Goes through the `gh` CLI rather than the REST API, so the user's
//! existing `gh auth` session is reused and no token handling lives here.

use crate::command::CommandRunner;
use crate::error::Result;
use std::path::Path;

/// Visibility of the new repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Anyone can see the repository (the default).
    #[default]
    Public,
    /// Only the owner and collaborators can see it.
    Private,
}

impl Visibility {
    /// The `gh repo create` flag for this visibility.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Create the remote repository and clone it into `cwd`.
///
/// Runs `gh repo create <name> --public|--private --clone`. A non-zero
/// exit is fatal: the error carries gh's stderr verbatim and the caller
/// aborts before any merge step runs.
pub fn create_remote(
    runner: &dyn CommandRunner,
    cwd: &Path,
    name: &str,
    visibility: Visibility,
) -> Result<()> {
    runner.run(
        cwd,
        "gh",
        &["repo", "create", name, visibility.flag(), "--clone"],
    )?;
    Ok(())
}
