//! Default-account resolution.
//!
//! References like `libfoo` carry no owner, so the tool needs a default
//! GitHub account to fill in. It comes from `GIT_DEFAULT_USER`; when that
//! is unset the user is prompted once and the answer is persisted by
//! appending an `export` line to the shell startup file, so later
//! invocations inherit it without prompting.
//!
//! The resolved name is an explicit value passed to whoever needs it; the
//! process environment is never mutated.

use crate::error::{Error, Result};
use dialoguer::Input;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the default account name.
pub const ACCOUNT_ENV_VAR: &str = "GIT_DEFAULT_USER";

/// Shell startup file the export line is appended to.
const SHELL_PROFILE: &str = ".bashrc";

/// Resolve the default account name.
///
/// Reads [`ACCOUNT_ENV_VAR`]; when unset, prompts on the terminal and
/// appends the export line to `~/.bashrc`. The value is accepted as-is —
/// no validation, empty input included.
pub fn resolve_default_account() -> Result<String> {
    let profile = shell_profile_path()?;
    resolve_with(std::env::var(ACCOUNT_ENV_VAR).ok(), prompt_for_account, &profile)
}

/// Resolution logic with the environment read, the prompt, and the profile
/// location injected, so tests never touch the real environment or home
/// directory.
pub fn resolve_with(
    env_value: Option<String>,
    prompt: impl FnOnce() -> Result<String>,
    profile: &Path,
) -> Result<String> {
    if let Some(account) = env_value {
        debug!(account = %account, "default account from environment");
        return Ok(account);
    }

    let account = prompt()?;
    persist_account(profile, &account)?;
    debug!(account = %account, profile = %profile.display(), "default account persisted");
    Ok(account)
}

/// Path to the shell startup file (`~/.bashrc`).
pub fn shell_profile_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(SHELL_PROFILE))
        .ok_or_else(|| Error::Account("cannot determine home directory".to_string()))
}

/// Interactive prompt for the account name.
fn prompt_for_account() -> Result<String> {
    Input::<String>::new()
        .with_prompt("Enter the default GitHub username")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| Error::Internal(format!("Failed to read username: {e}")))
}

/// Append the export line to the shell startup file.
///
/// Append-only: the file is created if missing and never rewritten.
fn persist_account(profile: &Path, account: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(profile)
        .map_err(|e| Error::Account(format!("failed to open {}: {e}", profile.display())))?;

    writeln!(file, "\nexport {ACCOUNT_ENV_VAR}=\"{account}\"")
        .map_err(|e| Error::Account(format!("failed to write {}: {e}", profile.display())))?;

    Ok(())
}
