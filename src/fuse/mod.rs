//! Merge engine: fuse many repositories into one.
//!
//! Two-phase, matching the plan/execute split used everywhere else:
//! 1. Plan - derive and validate short names, fix the order (pure, testable)
//! 2. Execute - drive `git` through the runner seam (effectful)

mod execute;
mod plan;

pub use execute::{execute_merge, ProgressSink, SilentProgress};
pub use plan::{create_merge_plan, short_name_of, MergePlan, MergeSource};
