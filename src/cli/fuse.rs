//! The fuse flow: resolve, normalize, plan, create the remote, merge.

use crate::cli::style::{bar_style, check, spinner_style, Stylize};
use anstream::println;
use indicatif::ProgressBar;
use repo_fuse::account::resolve_default_account;
use repo_fuse::command::ShellRunner;
use repo_fuse::error::Result;
use repo_fuse::fuse::{create_merge_plan, execute_merge, MergePlan, ProgressSink};
use repo_fuse::hosting::{create_remote, Visibility};
use repo_fuse::reference::normalize_references;
use std::path::Path;
use std::time::Duration;

/// Options for the fuse flow.
#[derive(Debug, Clone, Copy)]
pub struct FuseOptions {
    /// Visibility of the new remote repository.
    pub visibility: Visibility,
    /// Show the plan without executing.
    pub dry_run: bool,
}

/// Run the whole flow.
///
/// Strictly sequential: resolve identity, normalize inputs, plan and
/// validate, display the plan, create the remote, merge each source in
/// input order. Planning happens before the remote is created so invalid
/// input never leaves a half-made repository behind.
pub fn run_fuse(references: &[String], new_repo_name: &str, options: &FuseOptions) -> Result<()> {
    // =========================================================================
    // Phase 1: GATHER - resolve identity, normalize references
    // =========================================================================

    let account = resolve_default_account()?;
    let urls = normalize_references(references, &account);

    // =========================================================================
    // Phase 2: PLAN - pure validation, no side effects yet
    // =========================================================================

    let plan = create_merge_plan(&urls, new_repo_name)?;
    print_plan(&plan, options.visibility);

    if options.dry_run {
        println!("{}", "Run without --dry-run to execute.".muted());
        return Ok(());
    }

    // =========================================================================
    // Phase 3: EXECUTE - remote creation, then the merges
    // =========================================================================

    let runner = ShellRunner::new();
    let workdir = Path::new(".");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Creating remote repository {}...",
        new_repo_name.emphasis()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    create_remote(&runner, workdir, new_repo_name, options.visibility)?;

    spinner.finish_with_message(format!(
        "{} Remote repository {} created on GitHub",
        check(),
        new_repo_name.accent()
    ));

    let progress = CliProgress::new(plan.source_count());
    execute_merge(&plan, &runner, workdir, &progress)?;
    progress.finish();

    println!(
        "{} Repositories merged successfully into {}",
        check(),
        new_repo_name.accent()
    );

    Ok(())
}

/// Print the merge plan: one line per source, then the target.
fn print_plan(plan: &MergePlan, visibility: Visibility) {
    println!("{}:", "Repositories to merge".emphasis());
    for source in &plan.sources {
        println!(
            "  {}  {}",
            source.url.accent(),
            format!("-> {}/", source.short_name).muted()
        );
    }
    println!();
    println!(
        "New repository: {} ({})",
        plan.target.emphasis(),
        visibility.to_string().muted()
    );
    println!();
}

/// Progress sink backed by an indicatif bar over the source list.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(bar_style());
        bar.set_message("Merging repositories...");
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for CliProgress {
    fn on_message(&self, message: &str) {
        self.bar.println(message.accent());
    }

    fn on_source_merged(&self, short_name: &str) {
        self.bar.println(format!("{} Merged {}", check(), short_name.accent()));
        self.bar.inc(1);
    }
}
