//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every chapter and
//! artwork leads with its positional index and title; ids, image paths and
//! output pages follow as indented context lines. The listing doubles as a
//! content inventory for the author.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Chapters
//! 001 I Am Only Passing Through the Woods (2 works)
//!     Id: woods
//!     001 I am only passing through the woods.
//!         Id: passing-through
//!         Image: images/works/passing-through.png
//!     002 Birch Morning
//!         Id: birch-morning
//!         Image: images/works/birch-morning.png
//!
//! Not shown (no matching chapter)
//!     stray-sketch → chapter "sketches"
//!
//! Artist
//!     Lim Hyejung (임혜정)
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 I Am Only Passing Through the Woods → index.html#woods
//!     001 I am only passing through the woods. → works/passing-through/index.html
//!
//! Generated 1 page, 5 viewer pages, 7 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Warnings are
//! formatted the same way and printed to stderr.

use crate::catalog::Catalog;
use crate::data::SiteData;
use crate::generate::BuildReport;
use crate::imaging::ProbeWarning;
use crate::types::Artwork;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 Utopia = Reality (2 works)
/// 001 Glass Garden
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 work)", format_index(index), title),
        Some(n) => format!("{} {} ({} works)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the catalog inventory shown by `check`.
pub fn format_check_output(data: &SiteData, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Chapters".to_string());
    for (i, group) in data.catalog.groups().iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            &group.chapter.title,
            Some(group.artworks.len()),
        ));
        lines.push(format!("{}Id: {}", indent(1), group.chapter.id));
        let question = truncate_desc(&group.chapter.question, 60);
        if !question.is_empty() {
            lines.push(format!("{}\u{201C}{}\u{201D}", indent(1), question));
        }
        for (j, artwork) in group.artworks.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(j + 1, &artwork.details.title, None)
            ));
            lines.push(format!("{}Id: {}", indent(2), artwork.id));
            lines.push(format!("{}Image: {}", indent(2), artwork.details.image));
        }
    }

    lines.extend(format_orphans(&data.catalog));

    lines.push(String::new());
    lines.push("Artist".to_string());
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        data.artist.name,
        data.artist.name_kr
    ));
    if !data.artist.education.is_empty() {
        lines.push(format!(
            "{}{}",
            indent(1),
            plural(data.artist.education.len(), "education entry", "education entries")
        ));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }

    lines
}

/// Artworks dropped from the works section, with the chapter they name.
fn format_orphans(catalog: &Catalog) -> Vec<String> {
    let orphans: Vec<&Artwork> = catalog.orphans();
    if orphans.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Not shown (no matching chapter)".to_string()];
    for artwork in orphans {
        lines.push(format!(
            "{}{} \u{2192} chapter \"{}\"",
            indent(1),
            artwork.id,
            artwork.chapter
        ));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(data: &SiteData, source_root: &Path) {
    for line in format_check_output(data, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the list of generated pages.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Home \u{2192} index.html".to_string()];

    for (i, chapter) in report.chapters.iter().enumerate() {
        lines.push(format!(
            "{} \u{2192} index.html#{}",
            entity_header(i + 1, &chapter.title, None),
            chapter.anchor
        ));
        for (j, work) in chapter.works.iter().enumerate() {
            lines.push(format!(
                "{}{} \u{2192} {}",
                indent(1),
                entity_header(j + 1, &work.title, None),
                work.path
            ));
        }
    }

    if !report.orphans.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Skipped {} (no matching chapter): {}",
            plural(report.orphans.len(), "artwork", "artworks"),
            report.orphans.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}, {}",
        plural(report.viewer_pages(), "viewer page", "viewer pages"),
        plural(report.assets_copied, "asset", "assets")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// Format image probe failures.
pub fn format_warnings(warnings: &[ProbeWarning]) -> Vec<String> {
    warnings
        .iter()
        .map(|w| format!("warning: {}: {}", w.image, w.reason))
        .collect()
}

/// Print warnings to stderr.
pub fn print_warnings(warnings: &[ProbeWarning]) {
    for line in format_warnings(warnings) {
        eprintln!("{}", line);
    }
}
