//! Terminal styling helpers
//!
//! Functions here build styled strings instead of printing them, so the
//! output can go through a [`crate::menu::Console`] like everything else.

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static TRASH: Emoji<'_, '_> = Emoji("🗑️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("filedeck").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!("    {}", style("─".repeat(40)).dim());
    println!();
}

/// Header shown above the top-level menu
pub fn header_lines(cwd: &Path) -> Vec<String> {
    vec![
        format!(
            "{}Current directory: {}",
            FOLDER,
            style(cwd.display()).cyan()
        ),
        String::new(),
        style("Choose an action:").bold().to_string(),
        String::new(),
    ]
}

/// Title line for a sub-screen, e.g. `Main › Remove files`
pub fn title_line(crumbs: &[&str]) -> String {
    style(crumbs.join(" › ")).white().bold().to_string()
}

/// Heading above a file list
pub fn listing_heading(exts: Option<&str>) -> String {
    match exts {
        Some(exts) => format!("Files with extension {} in this directory", exts),
        None => "Files in this directory".to_string(),
    }
}

/// Confirmation printed for every removed file
pub fn removed_line(name: &str) -> String {
    format!("{}File \"{}\" removed successfully!", TRASH, name)
}

pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green().bold(), style(message).green())
}

pub fn info_line(message: &str) -> String {
    format!("{} {}", style("ℹ").cyan(), message)
}

pub fn error_line(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), style(message).red())
}

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
