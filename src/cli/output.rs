//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::application::ApplicationError;
use crate::cli::CliResult;
use crate::domain::Brightness;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Write a plain report line (no color) to `out`
pub fn line(out: &mut impl Write, msg: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
    writeln!(out, "{}", msg).map_err(|source| {
        ApplicationError::Io {
            context: "failed to write report".to_string(),
            source,
        }
        .into()
    })
}

/// "Current brightness is N%" with the percentage rounded for display.
pub fn current_line(brightness: &Brightness) -> String {
    format!("Current brightness is {:.0}%", brightness.percent())
}

/// "Set brightness to N%" with the percentage rounded for display.
pub fn set_line(brightness: &Brightness) -> String {
    format!("Set brightness to {:.0}%", brightness.percent())
}
