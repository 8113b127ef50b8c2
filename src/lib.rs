//! repo-fuse: merge independent Git repositories into one.
//!
//! Combines any number of unrelated repositories into a single new
//! repository, preserving each source's full history under its own
//! subdirectory, then publishes the result to GitHub.
//!
//! The crate is split along a plan/execute boundary: planning
//! ([`fuse::create_merge_plan`]) is pure and validates input up front;
//! execution ([`fuse::execute_merge`]) drives `git` and `gh` through the
//! [`command::CommandRunner`] seam so the effectful path stays testable.

pub mod account;
pub mod command;
pub mod error;
pub mod fuse;
pub mod hosting;
pub mod reference;
