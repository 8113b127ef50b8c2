//! Terminal styling helpers.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Checkmark glyph used in success lines.
pub const CHECK: &str = "✓";

/// Convenience styling for displayable values.
pub trait Stylize {
    /// Bold, for the important word in a line.
    fn emphasis(&self) -> String;
    /// Cyan, for names and values.
    fn accent(&self) -> String;
    /// Dimmed, for secondary detail.
    fn muted(&self) -> String;
    /// Red bold, for error prefixes.
    fn error(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn error(&self) -> String {
        self.red().bold().to_string()
    }
}

/// Green checkmark.
pub fn check() -> String {
    CHECK.green().to_string()
}

/// Spinner style for indeterminate steps.
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("static template is valid")
}

/// Bar style for the per-repository merge progress.
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
        .expect("static template is valid")
}
