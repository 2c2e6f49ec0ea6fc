//! Materializing a collection into render-ready records.
//!
//! Two views are produced from the same recursive walk:
//!
//! - **Navigation**: every root node, sorted by display order, each with its
//!   display-ordered children nested below it.
//! - **Breadcrumb**: the trail from the current node's root down to the
//!   current node, as a flat list.
//!
//! ```text
//! collection            navigation                      breadcrumb (current = alpha/beta/gamma)
//! alpha                 alpha  [first, last, ancestor]  alpha
//! alpha/beta            ├── beta  [first, ancestor]     alpha/beta
//! alpha/beta/gamma      │   └── gamma  [current]        alpha/beta/gamma
//! alpha/beta-2          └── beta-2  [last]
//! ```
//!
//! First/last flags come from the sibling list a node was prepared from.
//! That list is sorted once by the caller and handed down, so a node never
//! re-sorts its own siblings.

use crate::collection::Collection;
use crate::error::NavError;
use crate::node::{Node, NodeRef};
use crate::types::{NavRecord, NodeFilter};

/// How the current node is designated.
#[derive(Debug, Clone, Copy, Default)]
pub enum Current<'a> {
    /// No current node; no record is flagged current.
    #[default]
    None,
    /// Resolve by URL: exact match first, then deepest URL-prefix match.
    Url(&'a str),
    /// Resolve by exact URL match only.
    ExactUrl(&'a str),
    /// Given directly.
    Node(NodeRef<'a>),
}

impl Node {
    /// Build this node's record and, recursively, its children's.
    ///
    /// `sorted_siblings` is the display-ordered list this node belongs to;
    /// `is_first_child`/`is_last_child` compare against its ends. Returns
    /// `None` when `filter` rejects the node, in which case its subtree is
    /// skipped as well.
    pub fn prepare_for_template(
        &self,
        collection: &Collection,
        sorted_siblings: &[&Node],
        current: Option<&Node>,
        current_ancestor_paths: &[String],
        filter: Option<&NodeFilter<'_>>,
    ) -> Option<NavRecord> {
        let is_current_ancestor = current_ancestor_paths.iter().any(|p| p == self.path());
        let mut record = NavRecord {
            url: self.url.clone(),
            path: self.path().to_string(),
            display_name: self.display_name.clone(),
            template_data: self.template_data.clone(),
            depth: self.depth(),
            is_first_child: sorted_siblings.first().is_some_and(|n| n.path() == self.path()),
            is_last_child: sorted_siblings.last().is_some_and(|n| n.path() == self.path()),
            is_current_root: self.depth() == 1 && is_current_ancestor,
            is_current: current.is_some_and(|n| n.path() == self.path()),
            is_current_ancestor,
            display_order: collection.get_node_display_order(self).unwrap_or_default(),
            children: Vec::new(),
        };

        let rejected = filter.is_some_and(|keep| {
            !keep(
                self,
                &record,
                collection,
                sorted_siblings,
                current,
                current_ancestor_paths,
            )
        });
        if rejected {
            return None;
        }

        let children = collection.sort_nodes(self.children(collection));
        record.children = children
            .iter()
            .filter_map(|child| {
                child.prepare_for_template(
                    collection,
                    &children,
                    current,
                    current_ancestor_paths,
                    filter,
                )
            })
            .collect();
        Some(record)
    }
}

impl Collection {
    /// Resolve the current node. A path that is not in the collection is an error.
    pub fn resolve_current<'a>(&'a self, current: Current<'a>) -> Result<Option<&'a Node>, NavError> {
        match current {
            Current::None => Ok(None),
            Current::Url(url) => Ok(self.node_matching_url(url, false)),
            Current::ExactUrl(url) => Ok(self.node_matching_url(url, true)),
            Current::Node(NodeRef::Node(node)) => Ok(Some(node)),
            Current::Node(NodeRef::Path(path)) => self.get_node(path).map(Some),
        }
    }

    /// The full navigation tree, roots first in display order.
    ///
    /// Fails if any node is orphaned.
    pub fn prepare_for_nav_template(
        &self,
        current: Current<'_>,
        filter: Option<&NodeFilter<'_>>,
    ) -> Result<Vec<NavRecord>, NavError> {
        self.validate_nodes()?;
        let current = self.resolve_current(current)?;
        let ancestor_paths = current.map(Node::ancestor_paths).unwrap_or_default();

        let roots = self.sort_nodes(self.root_nodes());
        Ok(roots
            .iter()
            .filter_map(|root| root.prepare_for_template(self, &roots, current, &ancestor_paths, filter))
            .collect())
    }

    /// The trail from the current node's root down to the current node.
    ///
    /// Every record has empty `children`. Empty when no current node resolves.
    pub fn prepare_for_breadcrumb_template(
        &self,
        current: Current<'_>,
    ) -> Result<Vec<NavRecord>, NavError> {
        self.validate_nodes()?;
        let Some(current) = self.resolve_current(current)? else {
            return Ok(Vec::new());
        };

        let (root, ancestor_paths) = if current.depth() == 1 {
            (current, Vec::new())
        } else {
            match current.root_parent(self) {
                Some(root) => (root, current.ancestor_paths()),
                None => return Ok(Vec::new()),
            }
        };

        let keep: &NodeFilter<'_> = &on_current_trail;
        let tree = root.prepare_for_template(self, &[root], Some(current), &ancestor_paths, Some(keep));
        Ok(flatten_trail(tree))
    }
}

fn on_current_trail(
    _node: &Node,
    record: &NavRecord,
    _collection: &Collection,
    _sorted_siblings: &[&Node],
    _current: Option<&Node>,
    _current_ancestor_paths: &[String],
) -> bool {
    record.is_current || record.is_current_root || record.is_current_ancestor
}

/// Unnest a single-path tree: each level holds at most one record.
fn flatten_trail(root: Option<NavRecord>) -> Vec<NavRecord> {
    let mut trail = Vec::new();
    let mut next = root;
    while let Some(mut record) = next {
        let children = std::mem::take(&mut record.children);
        trail.push(record);
        next = children.into_iter().next();
    }
    trail
}
