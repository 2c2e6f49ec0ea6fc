//! The node collection: storage, display order, URL matching and validation.
//!
//! A [`Collection`] owns its nodes keyed by path and keeps a separate
//! path → display-order map in lockstep with them. Insertion order is
//! preserved; it decides iteration order and breaks ties wherever two
//! candidates are otherwise equal.
//!
//! ## Display Order
//!
//! Display order is an integer per node, compared only within a sibling
//! group. On insert with automatic assignment:
//!
//! - no requested order → one past the largest sibling order (1 for the first sibling)
//! - requested order free among siblings → used as-is
//! - requested order taken → the smallest integer above it that no sibling holds
//!
//! ```text
//! siblings [1, 2, 5] + request 2  →  3
//! siblings [1]       + request 1  →  2
//! siblings [3, 4]    + request 3  →  5
//! ```
//!
//! A requested order of 0 is the same as no request. Without automatic
//! assignment the requested order is stored verbatim, collisions included.

use crate::error::NavError;
use crate::node::{Node, NodeRef, NodeSpec};
use std::collections::HashMap;
use std::ops::Index;

/// How a node's display order is chosen on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Requested order. Falls back to the node's own `display_order` hint.
    pub display_order: Option<i64>,
    /// Resolve collisions and fill in missing orders among siblings.
    pub auto: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            display_order: None,
            auto: true,
        }
    }
}

impl Placement {
    /// Request `order`, moving past it if a sibling already holds it.
    pub fn at(order: i64) -> Self {
        Self {
            display_order: Some(order),
            auto: true,
        }
    }

    /// Store `order` verbatim.
    pub fn exact(order: i64) -> Self {
        Self {
            display_order: Some(order),
            auto: false,
        }
    }
}

/// Options for [`Collection::filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Re-run automatic display-order assignment in the new collection.
    pub auto_display_order: bool,
    /// Drop descendants of excluded nodes even if they pass the predicate.
    pub remove_descendants: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            auto_display_order: true,
            remove_descendants: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Collection {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    display_order: HashMap<String, i64>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from structured records, each added with its own
    /// `display_order` as the requested order.
    pub fn from_specs<I>(specs: I, auto_display_order: bool) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = NodeSpec>,
    {
        let mut collection = Self::new();
        for spec in specs {
            let placement = Placement {
                display_order: spec.display_order,
                auto: auto_display_order,
            };
            collection.add_node(Node::from_spec(spec)?, placement)?;
        }
        Ok(collection)
    }

    // =========================================================================
    // Storage
    // =========================================================================

    /// Insert a node. Fails if its path is already present.
    pub fn add_node(&mut self, node: Node, placement: Placement) -> Result<(), NavError> {
        if self.has_node(&node) {
            return Err(NavError::DuplicatePath(node.path().to_string()));
        }
        self.insert_and_place(node, placement);
        Ok(())
    }

    /// Insert a node unless its path is already present. Returns whether it was inserted.
    pub fn add_node_if_not_exists(&mut self, node: Node, placement: Placement) -> bool {
        if self.has_node(&node) {
            return false;
        }
        self.insert_and_place(node, placement);
        true
    }

    /// Insert or replace the node at its path. A replaced node keeps its
    /// position in iteration order; its display order is assigned afresh.
    pub fn set_node(&mut self, node: Node, placement: Placement) {
        self.insert_and_place(node, placement);
    }

    /// Remove a node and its display order. Absent paths are ignored.
    pub fn remove_node<'a>(&mut self, node: impl Into<NodeRef<'a>>) {
        let path = node.into().path();
        let Some(pos) = self.index.remove(path) else {
            return;
        };
        self.nodes.remove(pos);
        self.display_order.remove(path);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
    }

    pub fn has_node<'a>(&self, node: impl Into<NodeRef<'a>>) -> bool {
        self.index.contains_key(node.into().path())
    }

    /// Look up a node that must exist.
    pub fn get_node<'a>(&self, node: impl Into<NodeRef<'a>>) -> Result<&Node, NavError> {
        let path = node.into().path();
        self.get(path).ok_or_else(|| NavError::NodeNotFound(path.to_string()))
    }

    /// Look up a node that may be absent.
    pub fn get(&self, path: &str) -> Option<&Node> {
        self.index.get(path).map(|&pos| &self.nodes[pos])
    }

    /// Every node, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-1 nodes in insertion order.
    pub fn root_nodes(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.depth() == 1).collect()
    }

    fn insert_and_place(&mut self, node: Node, placement: Placement) {
        let path = node.path().to_string();
        let hint = node.display_order;
        match self.index.get(&path) {
            Some(&pos) => self.nodes[pos] = node,
            None => {
                self.index.insert(path.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
        self.place(&path, requested_order(placement, hint), placement.auto);
    }

    // =========================================================================
    // Display order
    // =========================================================================

    /// (Re)assign the display order of a node already in the collection.
    ///
    /// The requested order is `placement.display_order`, else the
    /// `display_order` hint of the node passed in (for a path, the stored node).
    pub fn set_node_display_order<'a>(
        &mut self,
        node: impl Into<NodeRef<'a>>,
        placement: Placement,
    ) -> Result<(), NavError> {
        let node = node.into();
        let path = node.path();
        let stored = self.get_node(path)?;
        let hint = match node {
            NodeRef::Node(given) => given.display_order,
            NodeRef::Path(_) => stored.display_order,
        };
        let path = path.to_string();
        self.place(&path, requested_order(placement, hint), placement.auto);
        Ok(())
    }

    pub fn get_node_display_order<'a>(&self, node: impl Into<NodeRef<'a>>) -> Option<i64> {
        self.display_order.get(node.into().path()).copied()
    }

    /// Display orders of `nodes`, in the same order. Nodes not in this
    /// collection are skipped.
    pub fn display_orders(&self, nodes: &[&Node]) -> Vec<i64> {
        nodes
            .iter()
            .filter_map(|n| self.get_node_display_order(*n))
            .collect()
    }

    /// Stable sort by display order; equal orders keep their input order.
    pub fn sort_nodes<'n>(&self, mut nodes: Vec<&'n Node>) -> Vec<&'n Node> {
        nodes.sort_by_key(|n| self.get_node_display_order(*n).unwrap_or_default());
        nodes
    }

    fn place(&mut self, path: &str, requested: Option<i64>, auto: bool) {
        let order = if auto {
            self.resolve_display_order(path, requested)
        } else {
            // An absent order sorts like zero.
            requested.unwrap_or_default()
        };
        self.display_order.insert(path.to_string(), order);
    }

    fn resolve_display_order(&self, path: &str, requested: Option<i64>) -> i64 {
        let mut taken = match self.get(path) {
            Some(node) => self.display_orders(&node.siblings(self, false)),
            None => Vec::new(),
        };

        let Some(requested) = requested else {
            return taken.iter().max().map_or(1, |max| max.saturating_add(1));
        };
        if !taken.contains(&requested) {
            return requested;
        }
        if requested == 1 && taken.len() == 1 {
            return 2;
        }

        taken.sort_unstable();
        taken.dedup();
        let mut last_taken = requested;
        for order in taken.into_iter().filter(|&o| o > requested) {
            if order != last_taken + 1 {
                break;
            }
            last_taken = order;
        }
        // Orders top out at i64::MAX, where a collision is kept as is.
        let order = last_taken.saturating_add(1);
        log::debug!("display order {requested} for '{path}' is taken by a sibling, using {order}");
        order
    }

    // =========================================================================
    // Matching and validation
    // =========================================================================

    /// Find the node a URL designates.
    ///
    /// An exact `url` match wins outright (first in insertion order).
    /// Otherwise the deepest node whose URL is a prefix of `url` wins, with
    /// ties going to the node inserted first. Nodes flagged
    /// `exact_match_only`, or every node when `exact_match_only` is passed,
    /// only match exactly.
    pub fn node_matching_url(&self, url: &str, exact_match_only: bool) -> Option<&Node> {
        let mut best: Option<&Node> = None;
        for node in &self.nodes {
            if node.url == url {
                return Some(node);
            }
            if exact_match_only || node.exact_match_only || !url.starts_with(node.url.as_str()) {
                continue;
            }
            if best.is_none_or(|b| node.depth() > b.depth()) {
                best = Some(node);
            }
        }
        if let Some(node) = best {
            log::debug!("url '{url}' matched '{}' by prefix", node.path());
        }
        best
    }

    /// Nodes below depth 1 whose parent path is not in the collection.
    pub fn orphan_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.parent_path().is_some_and(|parent| !self.index.contains_key(parent)))
            .collect()
    }

    /// Fail with every orphan path if any node lacks its parent.
    pub fn validate_nodes(&self) -> Result<(), NavError> {
        let orphans: Vec<String> = self
            .orphan_nodes()
            .iter()
            .map(|n| n.path().to_string())
            .collect();
        if orphans.is_empty() {
            return Ok(());
        }
        log::warn!("{} orphaned node(s) in collection", orphans.len());
        Err(NavError::OrphanNodes(orphans))
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// New collection holding the nodes `predicate` accepts.
    ///
    /// Kept nodes request their current display order in the new collection.
    /// With `remove_descendants`, every descendant of a rejected node (as
    /// found in this collection) is left out too, so the result has no
    /// orphans the original did not have.
    pub fn filter<F>(&self, predicate: F, options: FilterOptions) -> Collection
    where
        F: Fn(&Node, &Collection) -> bool,
    {
        let mut excluded: Vec<&str> = Vec::new();
        let mut filtered = Collection::new();

        for node in &self.nodes {
            if excluded.contains(&node.path()) {
                continue;
            }
            if predicate(node, self) {
                let placement = Placement {
                    display_order: self.get_node_display_order(node),
                    auto: options.auto_display_order,
                };
                filtered.insert_and_place(node.clone(), placement);
            } else if options.remove_descendants {
                excluded.extend(node.descendants(self).iter().map(|d| d.path()));
            }
        }

        for path in excluded {
            filtered.remove_node(path);
        }
        log::debug!("filter kept {} of {} node(s)", filtered.len(), self.len());
        filtered
    }
}

/// The order a placement asks for: its own, else the node's hint.
/// Zero counts as no request on either side.
fn requested_order(placement: Placement, hint: Option<i64>) -> Option<i64> {
    let nonzero = |order: &i64| *order != 0;
    placement.display_order.filter(nonzero).or(hint.filter(nonzero))
}

impl Index<&str> for Collection {
    type Output = Node;

    /// Panics if no node has this path; use [`Collection::get`] otherwise.
    fn index(&self, path: &str) -> &Node {
        match self.get(path) {
            Some(node) => node,
            None => panic!("no node with path \"{path}\" in collection"),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
