//! Shared types handed to renderers.
//!
//! [`NavRecord`] is the render-ready shape a menu or breadcrumb template
//! consumes. Its serialized field names are fixed: templates depend on them.

use crate::collection::Collection;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Opaque key-value bag carried from a node to its record untouched.
pub type TemplateData = serde_json::Map<String, serde_json::Value>;

/// Caller-supplied predicate deciding whether a node (and its whole subtree)
/// appears in the prepared output.
///
/// Arguments: the node, its record as computed so far (children not yet
/// filled in), the collection, the display-ordered sibling list the node was
/// prepared from, the current node, and the current node's ancestor paths.
pub type NodeFilter<'f> =
    dyn Fn(&Node, &NavRecord, &Collection, &[&Node], Option<&Node>, &[String]) -> bool + 'f;

/// One node of a prepared navigation tree or breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRecord {
    pub url: String,
    pub path: String,
    pub display_name: String,
    pub template_data: TemplateData,
    pub depth: usize,
    /// First of its display-ordered sibling list.
    pub is_first_child: bool,
    /// Last of its display-ordered sibling list.
    pub is_last_child: bool,
    /// Root node on the way to the current node.
    pub is_current_root: bool,
    pub is_current: bool,
    pub is_current_ancestor: bool,
    pub display_order: i64,
    /// Always present; empty for leaves and for every breadcrumb entry.
    pub children: Vec<NavRecord>,
}
