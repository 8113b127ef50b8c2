//! Merge execution - effectful operations.
//!
//! Takes a validated [`MergePlan`] and drives `git` through the
//! [`CommandRunner`] seam. Execution stops at the first failing command;
//! there is no rollback, the target repository is left in whatever state
//! the last successful command produced.

use crate::command::CommandRunner;
use crate::error::{Error, Result};
use crate::fuse::plan::MergePlan;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Message used for the empty commit that gives the new repository a
/// valid branch tip before the first merge.
const INITIAL_COMMIT_MESSAGE: &str = "Initial dummy commit";

/// Progress reporting seam for merge execution.
///
/// The binary backs this with an indicatif bar; tests use [`SilentProgress`].
pub trait ProgressSink {
    /// A human-readable status line.
    fn on_message(&self, message: &str);
    /// One source repository finished merging.
    fn on_source_merged(&self, short_name: &str);
}

/// No-op progress sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn on_message(&self, _message: &str) {}
    fn on_source_merged(&self, _short_name: &str) {}
}

/// Execute the merge plan (EFFECTFUL).
///
/// Once up front: ensure the target directory exists under `parent_dir`,
/// initialize a repository in it, and create an empty initial commit
/// (merging into a branch with no commits is disallowed by git).
///
/// Then, for each source in plan order: add it as a fetching remote, merge
/// its default branch allowing unrelated histories, and relocate every
/// pre-existing top-level entry into a subdirectory named after the source,
/// committing the move. Any command failure aborts the whole run.
pub fn execute_merge(
    plan: &MergePlan,
    runner: &dyn CommandRunner,
    parent_dir: &Path,
    progress: &dyn ProgressSink,
) -> Result<()> {
    let repo_dir = parent_dir.join(&plan.target);
    if !repo_dir.exists() {
        fs::create_dir_all(&repo_dir).map_err(|e| {
            Error::Workspace(format!("failed to create {}: {e}", repo_dir.display()))
        })?;
    }

    progress.on_message("Initializing new Git repository...");
    runner.run(&repo_dir, "git", &["init"])?;
    runner.run(
        &repo_dir,
        "git",
        &["commit", "--allow-empty", "-m", INITIAL_COMMIT_MESSAGE],
    )?;

    // Subdirectories created by earlier sources stay where they are; only
    // the entries the current merge brought in get relocated.
    let mut settled: Vec<String> = Vec::with_capacity(plan.sources.len());

    for source in &plan.sources {
        progress.on_message(&format!("Merging {}...", source.short_name));
        merge_one_source(runner, &repo_dir, &source.short_name, &source.url, &settled)?;
        settled.push(source.short_name.clone());
        progress.on_source_merged(&source.short_name);
    }

    Ok(())
}

/// The per-source sequence: remote-add + fetch, merge, move, commit.
fn merge_one_source(
    runner: &dyn CommandRunner,
    repo_dir: &Path,
    short_name: &str,
    url: &str,
    settled: &[String],
) -> Result<()> {
    runner.run(
        repo_dir,
        "git",
        &["remote", "add", "--fetch", short_name, url],
    )?;

    let branch = detect_default_branch(runner, repo_dir, short_name)?;
    debug!(remote = short_name, branch = %branch, "merging remote branch");
    runner.run(
        repo_dir,
        "git",
        &[
            "merge",
            &format!("{short_name}/{branch}"),
            "--allow-unrelated-histories",
        ],
    )?;

    let subdir = repo_dir.join(short_name);
    if subdir.exists() && !subdir.is_dir() {
        return Err(Error::Workspace(format!(
            "a file named '{short_name}' already exists at the top level \
             and blocks the subdirectory move"
        )));
    }
    fs::create_dir_all(&subdir)
        .map_err(|e| Error::Workspace(format!("failed to create {}: {e}", subdir.display())))?;

    let moved = relocate_into_subdir(runner, repo_dir, short_name, settled)?;
    if moved == 0 {
        // Nothing to relocate (empty source tree); the merge commit itself
        // already landed, a move commit would fail with an empty index.
        debug!(remote = short_name, "no top-level entries to relocate");
        return Ok(());
    }

    runner.run(
        repo_dir,
        "git",
        &[
            "commit",
            "-m",
            &format!("Move {short_name} files into subdir"),
        ],
    )?;

    Ok(())
}

/// Ask the remote which branch its HEAD points at.
///
/// `git ls-remote --symref <remote> HEAD` prints a line like
/// `ref: refs/heads/main\tHEAD` for any reasonably modern server. Falls
/// back to `master` when no symref is advertised.
fn detect_default_branch(
    runner: &dyn CommandRunner,
    repo_dir: &Path,
    remote: &str,
) -> Result<String> {
    let output = runner.run(repo_dir, "git", &["ls-remote", "--symref", remote, "HEAD"])?;

    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("ref: refs/heads/") {
            let branch = rest.split('\t').next().unwrap_or(rest).trim();
            if !branch.is_empty() {
                return Ok(branch.to_string());
            }
        }
    }

    Ok("master".to_string())
}

/// Move the entries the current merge brought in to the source's
/// subdirectory with one `git mv`, so per-file history follows.
///
/// Entries are read from the directory and filtered by exact name
/// comparison - no shell globbing, no pattern substitution. `.git`, the
/// target subdirectory itself, and the subdirectories of already-merged
/// sources are left in place. Returns the number of entries moved.
fn relocate_into_subdir(
    runner: &dyn CommandRunner,
    repo_dir: &Path,
    short_name: &str,
    settled: &[String],
) -> Result<usize> {
    let read = fs::read_dir(repo_dir)
        .map_err(|e| Error::Workspace(format!("failed to read {}: {e}", repo_dir.display())))?;

    let mut entries: Vec<String> = Vec::new();
    for entry in read {
        let entry = entry
            .map_err(|e| Error::Workspace(format!("failed to read {}: {e}", repo_dir.display())))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name != ".git" && name != short_name && !settled.iter().any(|s| s == &name) {
            entries.push(name);
        }
    }
    entries.sort();

    if entries.is_empty() {
        return Ok(0);
    }

    let destination = format!("{short_name}/");
    let mut args: Vec<&str> = vec!["mv"];
    args.extend(entries.iter().map(String::as_str));
    args.push(&destination);
    runner.run(repo_dir, "git", &args)?;

    Ok(entries.len())
}
