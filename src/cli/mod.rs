//! Command-line interface for repofuse.

mod fuse;
pub mod style;

use clap::Parser;
use fuse::FuseOptions;
use repo_fuse::error::{Error, Result};
use repo_fuse::hosting::Visibility;

/// Merge multiple Git repositories into one, preserving each history as a subdirectory.
#[derive(Debug, Parser)]
#[command(
    name = "repofuse",
    version,
    override_usage = "repofuse [OPTIONS] <REPOS>... <NEW_REPO>"
)]
struct Cli {
    /// Source repositories (`name`, `owner/name`, or URL), followed by the
    /// name of the new repository to create
    #[arg(required = true, num_args = 2.., value_name = "REPO")]
    args: Vec<String>,

    /// Create the remote repository as public (the default)
    #[arg(long, overrides_with = "private")]
    public: bool,

    /// Create the remote repository as private
    #[arg(long, overrides_with = "public")]
    private: bool,

    /// Resolve, normalize, and show the merge plan without executing it
    #[arg(long)]
    dry_run: bool,
}

/// Parse arguments and run the tool.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // num_args(2..) guarantees at least one source plus the target name.
    let (new_repo_name, references) = cli
        .args
        .split_last()
        .ok_or_else(|| Error::Internal("argument parsing yielded no values".to_string()))?;

    let visibility = if cli.private {
        Visibility::Private
    } else {
        Visibility::Public
    };

    fuse::run_fuse(
        references,
        new_repo_name,
        &FuseOptions {
            visibility,
            dry_run: cli.dry_run,
        },
    )
}
