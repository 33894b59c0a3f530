//! CLI output formatting for both build stages.
//!
//! Output is **information-centric**: every entity leads with its positional
//! index and title, and paths follow as indented context. Directories are
//! listed in visible-path order, pages in walk order.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Directories
//! 001 My Notes (/)
//!     /about/ → About Me
//!     /travel/ → Filed in /travel/
//! 002 Filed in /travel/ (/travel/)
//!     /travel/japan/ → Japan 2023
//!
//! Pages
//! 001 About Me
//!     Filed in: /
//!
//! Assets
//!     logo.svg
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 My Notes → index.html
//! 002 Filed in /travel/ → travel/index.html
//!
//! Pages
//! 001 About Me → about/index.html
//!
//! Generated 2 index pages, 1 page
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::generate::GenerateReport;
use crate::types::Site;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `1 page`, `2 pages`
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format the discovered site structure.
pub fn format_scan_output(site: &Site) -> Vec<String> {
    let mut lines = vec!["Directories".to_string()];

    for (i, (visible_path, index)) in site.indices.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            index.title,
            visible_path
        ));
        for (path, title) in &index.nav_items {
            lines.push(format!("    {} → {}", path, title));
        }
    }

    if !site.items.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, item) in site.items.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), item.title));
            lines.push(format!("    Filed in: {}", item.visible_path));
        }
    }

    if !site.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &site.assets {
            lines.push(format!("    {}", asset));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(site: &Site) {
    for line in format_scan_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format the list of written pages plus a summary line.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.indices.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            page.title,
            page.output_path
        ));
    }

    if !report.items.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in report.items.iter().enumerate() {
            lines.push(format!(
                "{} {} → {}",
                format_index(i + 1),
                page.title,
                page.output_path
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(report.indices.len(), "index page"),
        plural(report.items.len(), "page")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
