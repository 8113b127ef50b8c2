//! Synchronous external-command execution.
//!
//! Every `git` and `gh` call goes through the [`CommandRunner`] trait so
//! tests can substitute a recording mock. The real [`ShellRunner`] executes
//! a structured argument vector directly (no shell, no string
//! interpolation), blocking until the command completes.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Seam for external command execution.
///
/// `run` blocks until the command exits. On success the captured, trimmed
/// standard output is returned; on non-zero exit the captured standard
/// error becomes an [`Error::Command`]. No timeout, no retry.
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd`.
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<String>;
}

/// The real runner: spawns the process with [`std::process::Command`].
///
/// Always sets `GIT_TERMINAL_PROMPT=0` so a fetch against a repository that
/// needs credentials fails fast instead of hanging on a hidden prompt.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    envs: Vec<(String, String)>,
}

impl ShellRunner {
    /// Create a runner with the default environment overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer an extra environment variable onto every spawned command.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<String> {
        debug!(program, ?args, cwd = %cwd.display(), "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .env("GIT_TERMINAL_PROMPT", "0")
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|e| Error::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            debug!(program, code = ?output.status.code(), "command failed");
            Err(Error::Command {
                invocation: invocation_display(program, args),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Render a program + argument vector for error messages.
fn invocation_display(program: &str, args: &[&str]) -> String {
    let mut out = String::from(program);
    for arg in args {
        out.push(' ');
        out.push_str(arg);
    }
    out
}
