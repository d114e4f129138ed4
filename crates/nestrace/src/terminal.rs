//! Console output for the CLI.
//!
//! Scan reports are the tool's product and go to stdout unstyled, so they
//! can be redirected and diffed. Status lines go to stderr with a marker.

use std::fmt::Display;
use std::path::Path;

use console::style;

/// Print a scan report (divergence window or match summary) to stdout.
pub fn report(report: &impl Display) {
    let text = report.to_string();
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("→").cyan(), message);
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print a file the command read or wrote, tagged with its role
/// (`candidate`, `reference`, `dispatch`).
pub fn output_path(role: &str, path: &Path) {
    eprintln!(
        "  {} {} {}",
        style("→").dim(),
        style(format!("{role}:")).dim(),
        style(path.display()).dim()
    );
}
