//! Shared test fixtures.

#![allow(dead_code)]

mod mock_runner;

pub use mock_runner::{MockRunner, RecordedCall};

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Run git in `dir` with a fixed test identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_NAME", "Test User")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test User")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");

    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a one-commit source repository under `parent` containing `file`.
pub fn make_source_repo(parent: &Path, name: &str, file: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).expect("create source dir");
    git(&dir, &["init"]);
    fs::write(dir.join(file), format!("contents of {file}\n")).expect("write file");
    git(&dir, &["add", "."]);
    git(&dir, &["commit", "-m", &format!("Add {file}")]);
    dir
}
