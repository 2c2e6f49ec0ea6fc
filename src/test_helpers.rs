//! Shared test utilities for the navtree test suite.
//!
//! Provides collection builders, record lookups, and navigation tree
//! assertions that work with prepared [`NavRecord`] trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let c = collection_from_paths(&["travel", "travel/japan", "travel/italy", "minimal"]);
//! let nav = c.prepare_for_nav_template(Current::None, None).unwrap();
//!
//! let japan = find_record(&nav, "travel/japan");
//! assert_eq!(japan.display_name, "Japan");
//!
//! assert_nav_shape(&nav, &[
//!     ("travel", &["travel/japan", "travel/italy"]),
//!     ("minimal", &[]),
//! ]);
//! ```

use crate::collection::{Collection, Placement};
use crate::node::Node;
use crate::types::NavRecord;

// =========================================================================
// Builders
// =========================================================================

/// Build a node. Panics on an invalid path.
pub fn node(path: &str) -> Node {
    Node::new(path).unwrap_or_else(|e| panic!("bad test path '{path}': {e}"))
}

/// Build a collection by adding each path in order with default placement.
pub fn collection_from_paths(paths: &[&str]) -> Collection {
    let mut c = Collection::new();
    for path in paths {
        c.add_node(node(path), Placement::default())
            .unwrap_or_else(|e| panic!("adding '{path}' failed: {e}"));
    }
    c
}

// =========================================================================
// Record lookups, panics with a clear message on miss
// =========================================================================

/// Paths of a record list, in order.
pub fn record_paths(records: &[NavRecord]) -> Vec<&str> {
    records.iter().map(|r| r.path.as_str()).collect()
}

fn find_in<'a>(records: &'a [NavRecord], path: &str) -> Option<&'a NavRecord> {
    records.iter().find_map(|r| {
        if r.path == path {
            Some(r)
        } else {
            find_in(&r.children, path)
        }
    })
}

fn collect_paths<'a>(records: &'a [NavRecord], out: &mut Vec<&'a str>) {
    for r in records {
        out.push(&r.path);
        collect_paths(&r.children, out);
    }
}

/// Find a record anywhere in the tree by path. Panics if not found.
pub fn find_record<'a>(records: &'a [NavRecord], path: &str) -> &'a NavRecord {
    find_in(records, path).unwrap_or_else(|| {
        let mut paths = Vec::new();
        collect_paths(records, &mut paths);
        panic!("record '{path}' not found. Available: {paths:?}")
    })
}

// =========================================================================
// Navigation helpers
// =========================================================================

/// Assert that the top two levels of a navigation tree match an expected shape.
///
/// Each entry is `(path, child_paths)`. Use `&[]` for leaf nodes.
///
/// ```rust
/// assert_nav_shape(&nav, &[
///     ("travel", &["travel/japan", "travel/italy"]),
///     ("minimal", &[]),
/// ]);
/// ```
pub fn assert_nav_shape(records: &[NavRecord], expected: &[(&str, &[&str])]) {
    let expected_roots: Vec<&str> = expected.iter().map(|(p, _)| *p).collect();
    assert_eq!(record_paths(records), expected_roots, "nav top-level paths mismatch");

    for (path, children) in expected {
        let record = find_record(records, path);
        assert_eq!(
            record_paths(&record.children),
            children.to_vec(),
            "nav children of '{path}' mismatch"
        );
    }
}
