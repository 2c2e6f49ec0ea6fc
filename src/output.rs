//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Tree
//!
//! ```text
//! 001 Home → /
//! 002 About → /about/ >
//!     001 Our Team → /about/our-team/ *
//!     002 History → /about/history/
//! 003 Contact → /contact/
//! ```
//!
//! Indices are positional within each sibling list, after display ordering.
//! `*` marks the current node and `>` each of its ancestors.
//!
//! ## Check
//!
//! ```text
//! 5 nodes, 3 roots
//! Orphans
//!     blog/2024 (missing blog)
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::collection::Collection;
use crate::types::NavRecord;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn marker(record: &NavRecord) -> &'static str {
    if record.is_current {
        " *"
    } else if record.is_current_ancestor {
        " >"
    } else {
        ""
    }
}

// ============================================================================
// Tree walker
// ============================================================================

/// A flattened record from walking the prepared tree.
struct TreeLine<'a> {
    depth: usize,
    position: usize,
    record: &'a NavRecord,
}

/// Walk the prepared tree, assigning positional indices per sibling level.
fn walk_nav_tree(nav: &[NavRecord]) -> Vec<TreeLine<'_>> {
    let mut lines = Vec::new();
    walk_nav_tree_recursive(nav, 0, &mut lines);
    lines
}

fn walk_nav_tree_recursive<'a>(records: &'a [NavRecord], depth: usize, lines: &mut Vec<TreeLine<'a>>) {
    for (i, record) in records.iter().enumerate() {
        lines.push(TreeLine {
            depth,
            position: i + 1,
            record,
        });
        walk_nav_tree_recursive(&record.children, depth + 1, lines);
    }
}

// ============================================================================
// Tree view
// ============================================================================

/// Format a prepared navigation tree as an indented outline.
pub fn format_nav_tree(nav: &[NavRecord]) -> Vec<String> {
    if nav.is_empty() {
        return vec!["(empty navigation)".to_string()];
    }
    walk_nav_tree(nav)
        .into_iter()
        .map(|line| {
            format!(
                "{}{} {} → {}{}",
                indent(line.depth),
                format_index(line.position),
                line.record.display_name,
                line.record.url,
                marker(line.record)
            )
        })
        .collect()
}

pub fn print_nav_tree(nav: &[NavRecord]) {
    for line in format_nav_tree(nav) {
        println!("{}", line);
    }
}

// ============================================================================
// Check view
// ============================================================================

/// Summarize a collection: node and root counts, then any orphans with the
/// parent path they are missing.
pub fn format_check_summary(collection: &Collection) -> Vec<String> {
    let mut lines = vec![format!(
        "{} nodes, {} roots",
        collection.len(),
        collection.root_nodes().len()
    )];
    let orphans = collection.orphan_nodes();
    if !orphans.is_empty() {
        lines.push("Orphans".to_string());
        for orphan in orphans {
            let missing = orphan.parent_path().unwrap_or_default();
            lines.push(format!("{}{} (missing {})", indent(1), orphan.path(), missing));
        }
    }
    lines
}

pub fn print_check_summary(collection: &Collection) {
    for line in format_check_summary(collection) {
        println!("{}", line);
    }
}
