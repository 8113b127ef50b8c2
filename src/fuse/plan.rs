//! Merge planning - pure functions for building a validated merge plan.
//!
//! No I/O happens here. Planning turns the normalized URL list into an
//! ordered [`MergePlan`] and rejects inputs that would blow up mid-merge:
//! short names that collide with each other or that are unusable as
//! directory and remote names. Catching these before the remote repository
//! is created keeps a bad invocation side-effect free.

use crate::error::{Error, Result};
use url::Url;

/// One source repository scheduled for merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSource {
    /// Fully-qualified clone URL (or local path).
    pub url: String,
    /// Base name of the repository; doubles as the remote name and the
    /// subdirectory its files end up in.
    pub short_name: String,
}

/// Ordered, validated description of a whole merge run.
///
/// Sources are merged strictly in this order, one at a time.
#[derive(Debug, Clone)]
pub struct MergePlan {
    /// Name of the combined repository (also its directory on disk).
    pub target: String,
    /// Sources in input order.
    pub sources: Vec<MergeSource>,
}

impl MergePlan {
    /// Number of sources to merge.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

/// Derive a repository's short name from its URL: the final path segment,
/// with any `.git` suffix stripped.
///
/// Falls back to plain string splitting when the input is not a parseable
/// URL (local paths work as git remotes too).
#[must_use]
pub fn short_name_of(url: &str) -> String {
    let last_segment = Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last().map(String::from))
        })
        .unwrap_or_else(|| {
            url.trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(url)
                .to_string()
        });

    last_segment
        .strip_suffix(".git")
        .unwrap_or(&last_segment)
        .to_string()
}

/// Build the merge plan (PURE - no I/O).
///
/// Validates the target name and every derived short name, and rejects
/// duplicate short names: two sources with the same base name would merge
/// into the same subdirectory and silently interleave their files.
pub fn create_merge_plan(urls: &[String], target: &str) -> Result<MergePlan> {
    validate_name(target, "repository name")?;

    let mut sources: Vec<MergeSource> = Vec::with_capacity(urls.len());
    for url in urls {
        let short_name = short_name_of(url);
        validate_name(&short_name, "derived short name")?;

        if sources.iter().any(|s| s.short_name == short_name) {
            return Err(Error::Plan(format!(
                "two sources share the short name '{short_name}'; \
                 they would merge into the same subdirectory"
            )));
        }

        sources.push(MergeSource {
            url: url.clone(),
            short_name,
        });
    }

    Ok(MergePlan {
        target: target.to_string(),
        sources,
    })
}

/// Reject names unusable as a directory or git remote name.
fn validate_name(name: &str, what: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Plan(format!("{what} is empty")));
    }
    if name == "." || name == ".." || name == ".git" {
        return Err(Error::Plan(format!("{what} '{name}' is reserved")));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(Error::Plan(format!(
            "{what} '{name}' contains a path separator"
        )));
    }
    if name.starts_with('-') {
        return Err(Error::Plan(format!(
            "{what} '{name}' starts with '-' and would be read as a flag"
        )));
    }
    Ok(())
}
