//! Mock command runner for testing.
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use repo_fuse::command::CommandRunner;
use repo_fuse::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub cwd: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl RecordedCall {
    /// Program and arguments joined with spaces, for substring assertions.
    pub fn invocation(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        out
    }
}

/// Recording mock with canned outputs and error injection.
///
/// Every call is recorded regardless of outcome. Responses are matched by
/// substring of the joined invocation; the first matching entry wins.
/// Unmatched invocations succeed with empty output.
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<Vec<(String, String)>>,
    fail_on: Mutex<Option<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any invocation containing `needle` fail with injected stderr.
    pub fn fail_on(self, needle: &str) -> Self {
        *self.fail_on.lock().unwrap() = Some(needle.to_string());
        self
    }

    /// Make any invocation containing `needle` succeed with `stdout`.
    pub fn respond(self, needle: &str, stdout: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push((needle.to_string(), stdout.to_string()));
        self
    }

    /// Snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Joined invocations, in call order.
    pub fn invocations(&self) -> Vec<String> {
        self.calls().iter().map(RecordedCall::invocation).collect()
    }

    /// Index of the first invocation containing `needle`, if any.
    pub fn position_of(&self, needle: &str) -> Option<usize> {
        self.invocations().iter().position(|i| i.contains(needle))
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<String> {
        let call = RecordedCall {
            cwd: cwd.to_path_buf(),
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        };
        let invocation = call.invocation();
        self.calls.lock().unwrap().push(call);

        if let Some(ref needle) = *self.fail_on.lock().unwrap() {
            if invocation.contains(needle.as_str()) {
                return Err(Error::Command {
                    invocation,
                    stderr: "injected failure".to_string(),
                });
            }
        }

        for (needle, stdout) in self.responses.lock().unwrap().iter() {
            if invocation.contains(needle.as_str()) {
                return Ok(stdout.clone());
            }
        }

        Ok(String::new())
    }
}
