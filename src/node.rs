//! Path-identified navigation nodes.
//!
//! A node knows nothing about its neighbours. Everything hierarchical is
//! derived from its slash-delimited path:
//!
//! ```text
//! path              depth  parent       ancestor paths
//! about             1      -            []
//! about/team        2      about        [about]
//! about/team/jobs   3      about/team   [about, about/team]
//! ```
//!
//! Relationship queries (`children`, `siblings`, ...) take the
//! [`Collection`] to search. Each one is a linear scan over the collection
//! and returns nodes in collection (insertion) order.

use crate::collection::Collection;
use crate::error::NavError;
use crate::naming::{humanize, is_below};
use crate::types::TemplateData;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    path: String,
    /// Link text shown in menus and breadcrumbs.
    pub display_name: String,
    /// Link target. Defaults to `/path/`.
    pub url: String,
    pub template_data: TemplateData,
    /// Display-order hint, read only when the node is inserted into a collection.
    pub display_order: Option<i64>,
    /// Only an exact URL match can make this node current.
    pub exact_match_only: bool,
}

/// Structured construction record for a [`Node`].
///
/// This is the shape node entries take in `navigation.toml`. Unknown keys are
/// ignored. `path` may be written as a string or an integer (`path = 90`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    #[serde(deserialize_with = "deserialize_path")]
    pub path: Option<String>,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub template_data: TemplateData,
    pub display_order: Option<i64>,
    pub exact_match_only: bool,
}

impl NodeSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathScalar {
    Text(String),
    Integer(i64),
}

fn deserialize_path<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<PathScalar>::deserialize(d)?;
    Ok(raw.map(|p| match p {
        PathScalar::Text(s) => s,
        PathScalar::Integer(n) => n.to_string(),
    }))
}

/// A node argument given either by path or by node.
///
/// Collection methods accept `&str`, `&String` or `&Node` through this type.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Path(&'a str),
    Node(&'a Node),
}

impl<'a> NodeRef<'a> {
    pub fn path(&self) -> &'a str {
        match *self {
            NodeRef::Path(path) => path,
            NodeRef::Node(node) => node.path(),
        }
    }
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(path: &'a str) -> Self {
        NodeRef::Path(path)
    }
}

impl<'a> From<&'a String> for NodeRef<'a> {
    fn from(path: &'a String) -> Self {
        NodeRef::Path(path.as_str())
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        NodeRef::Node(node)
    }
}

/// Trim whitespace, then leading and trailing slashes.
pub(crate) fn normalize_path(raw: &str) -> Result<String, NavError> {
    let path = raw.trim().trim_matches('/');
    if path.is_empty() {
        return Err(NavError::InvalidPath(raw.to_string()));
    }
    Ok(path.to_string())
}

impl Node {
    /// Create a node from a path, deriving display name and URL from it.
    pub fn new(path: &str) -> Result<Self, NavError> {
        let path = normalize_path(path)?;
        let url = format!("/{path}/");
        let mut node = Self {
            path,
            display_name: String::new(),
            url,
            template_data: TemplateData::new(),
            display_order: None,
            exact_match_only: false,
        };
        node.display_name = humanize(node.last_path_segment());
        Ok(node)
    }

    /// Create a node from a structured record, filling unset or empty
    /// fields with the same defaults as [`Node::new`].
    pub fn from_spec(spec: NodeSpec) -> Result<Self, NavError> {
        let Some(path) = spec.path else {
            return Err(NavError::MissingRequiredField(vec!["path".to_string()]));
        };
        let mut node = Self::new(&path)?;
        if let Some(name) = spec.display_name.filter(|n| !n.is_empty()) {
            node.display_name = name;
        }
        if let Some(url) = spec.url.filter(|u| !u.is_empty()) {
            node.url = url;
        }
        node.template_data = spec.template_data;
        node.display_order = spec.display_order;
        node.exact_match_only = spec.exact_match_only;
        Ok(node)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the path. Display name and URL are left as they are.
    pub fn set_path(&mut self, path: &str) -> Result<(), NavError> {
        self.path = normalize_path(path)?;
        Ok(())
    }

    pub fn path_segments(&self) -> Vec<&str> {
        self.path.split('/').collect()
    }

    pub fn depth(&self) -> usize {
        self.path.split('/').count()
    }

    pub fn last_path_segment(&self) -> &str {
        self.path.rsplit_once('/').map_or(&self.path, |(_, last)| last)
    }

    /// `None` for depth-1 nodes.
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once('/').map(|(parent, _)| parent)
    }

    /// All proper prefixes of the path, shallowest first.
    ///
    /// `a/b/c` → `["a", "a/b"]`.
    pub fn ancestor_paths(&self) -> Vec<String> {
        self.path
            .match_indices('/')
            .map(|(i, _)| self.path[..i].to_string())
            .collect()
    }

    pub fn parent<'c>(&self, collection: &'c Collection) -> Option<&'c Node> {
        collection.get(self.parent_path()?)
    }

    /// The depth-1 node this node hangs from. `None` for root nodes
    /// themselves and when the root is not in the collection.
    pub fn root_parent<'c>(&self, collection: &'c Collection) -> Option<&'c Node> {
        let (root, _) = self.path.split_once('/')?;
        collection.get(root)
    }

    pub fn has_children(&self, collection: &Collection) -> bool {
        collection.iter().any(|n| self.is_parent_of(n))
    }

    pub fn children<'c>(&self, collection: &'c Collection) -> Vec<&'c Node> {
        collection.iter().filter(|n| self.is_parent_of(n)).collect()
    }

    pub fn descendants<'c>(&self, collection: &'c Collection) -> Vec<&'c Node> {
        collection
            .iter()
            .filter(|n| is_below(&self.path, &n.path))
            .collect()
    }

    /// Nodes sharing this node's parent path; for depth-1 nodes, all root nodes.
    pub fn siblings<'c>(&self, collection: &'c Collection, include_self: bool) -> Vec<&'c Node> {
        let depth = self.depth();
        let parent = self.parent_path();
        collection
            .iter()
            .filter(|n| include_self || n.path != self.path)
            .filter(|n| match parent {
                None => n.depth() == 1,
                Some(parent) => n.depth() == depth && is_below(parent, &n.path),
            })
            .collect()
    }

    /// Parent, grandparent, ... up to the first missing link or a root.
    pub fn ancestors<'c>(&self, collection: &'c Collection) -> Vec<&'c Node> {
        let mut ancestors = Vec::new();
        let mut cursor = self.parent(collection);
        while let Some(node) = cursor {
            ancestors.push(node);
            cursor = node.parent(collection);
        }
        ancestors
    }

    fn is_parent_of(&self, other: &Node) -> bool {
        other.depth() == self.depth() + 1 && is_below(&self.path, &other.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::collection_from_paths;

    const FAMILY: &[&str] = &[
        "alpha",
        "alpha-2",
        "alpha/beta",
        "alpha/beta-2",
        "alpha/beta/gamma",
        "alpha/beta/gamma-2",
        "alpha/beta/gamma/delta",
        "alpha/beta/gamma/delta-2",
        "foo",
        "foo-2",
        "foo/bar",
        "foo/bar-2",
        "foo/bar/baz",
        "foo/bar/baz-2",
    ];

    fn paths<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().map(|n| n.path()).collect()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn new_derives_path_facts() {
        let n = Node::new("alpha/beta/gamma").unwrap();
        assert_eq!(n.path(), "alpha/beta/gamma");
        assert_eq!(n.url, "/alpha/beta/gamma/");
        assert_eq!(n.path_segments(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(n.parent_path(), Some("alpha/beta"));
        assert_eq!(n.depth(), 3);
        assert_eq!(n.ancestor_paths(), vec!["alpha", "alpha/beta"]);
        assert_eq!(n.display_name, "Gamma");
        assert_eq!(n.last_path_segment(), "gamma");
    }

    #[test]
    fn new_root_node_has_no_parent_path() {
        let n = Node::new("alpha").unwrap();
        assert_eq!(n.depth(), 1);
        assert_eq!(n.parent_path(), None);
        assert!(n.ancestor_paths().is_empty());
        assert_eq!(n.display_name, "Alpha");
    }

    #[test]
    fn new_normalizes_whitespace_and_slashes() {
        let n = Node::new("  /alpha/beta/ ").unwrap();
        assert_eq!(n.path(), "alpha/beta");
        assert_eq!(n.url, "/alpha/beta/");
    }

    #[test]
    fn new_rejects_empty_path() {
        assert_eq!(Node::new(""), Err(NavError::InvalidPath(String::new())));
        assert!(matches!(Node::new("   "), Err(NavError::InvalidPath(_))));
        assert!(matches!(Node::new("//"), Err(NavError::InvalidPath(_))));
    }

    #[test]
    fn humanized_display_name_from_slug() {
        let n = Node::new("about/our-team").unwrap();
        assert_eq!(n.display_name, "Our Team");
    }

    #[test]
    fn set_path_revalidates() {
        let mut n = Node::new("alpha").unwrap();
        n.set_path("/beta/gamma/").unwrap();
        assert_eq!(n.path(), "beta/gamma");
        assert!(matches!(n.set_path(" "), Err(NavError::InvalidPath(_))));
        assert_eq!(n.path(), "beta/gamma");
    }

    #[test]
    fn from_spec_with_only_path_uses_defaults() {
        let n = Node::from_spec(NodeSpec::new("alpha")).unwrap();
        assert_eq!(n.path(), "alpha");
        assert_eq!(n.display_name, "Alpha");
        assert_eq!(n.url, "/alpha/");
        assert!(n.template_data.is_empty());
        assert_eq!(n.display_order, None);
        assert!(!n.exact_match_only);
    }

    #[test]
    fn from_spec_keeps_given_fields() {
        let mut data = TemplateData::new();
        data.insert("icon".to_string(), serde_json::json!("star"));
        let spec = NodeSpec {
            path: Some("alpha".to_string()),
            display_name: Some("alpha-display-name".to_string()),
            url: Some("/alpha-url/".to_string()),
            template_data: data.clone(),
            display_order: Some(4),
            exact_match_only: true,
        };
        let n = Node::from_spec(spec).unwrap();
        assert_eq!(n.display_name, "alpha-display-name");
        assert_eq!(n.url, "/alpha-url/");
        assert_eq!(n.template_data, data);
        assert_eq!(n.display_order, Some(4));
        assert!(n.exact_match_only);
    }

    #[test]
    fn from_spec_empty_strings_fall_back_to_defaults() {
        let spec = NodeSpec {
            display_name: Some(String::new()),
            url: Some(String::new()),
            ..NodeSpec::new("contact-us")
        };
        let n = Node::from_spec(spec).unwrap();
        assert_eq!(n.display_name, "Contact Us");
        assert_eq!(n.url, "/contact-us/");
    }

    #[test]
    fn from_spec_without_path_is_missing_field() {
        let err = Node::from_spec(NodeSpec::default()).unwrap_err();
        assert_eq!(err, NavError::MissingRequiredField(vec!["path".to_string()]));
    }

    #[test]
    fn spec_deserializes_numeric_path_and_drops_unknown_keys() {
        let spec: NodeSpec = serde_json::from_value(serde_json::json!({
            "path": 90,
            "colour": "red",
        }))
        .unwrap();
        let n = Node::from_spec(spec).unwrap();
        assert_eq!(n.path(), "90");
        assert_eq!(n.display_name, "90");
        assert_eq!(n.url, "/90/");
    }

    #[test]
    fn spec_deserializes_zero_path() {
        let spec: NodeSpec = serde_json::from_value(serde_json::json!({ "path": 0 })).unwrap();
        assert_eq!(Node::from_spec(spec).unwrap().path(), "0");
    }

    // =========================================================================
    // Relationships
    // =========================================================================

    #[test]
    fn parent_lookup() {
        let c = collection_from_paths(FAMILY);
        assert!(c["alpha"].parent(&c).is_none());
        assert_eq!(c["alpha/beta"].parent(&c).unwrap().path(), "alpha");
        assert_eq!(c["alpha/beta/gamma"].parent(&c).unwrap().path(), "alpha/beta");
        assert_eq!(
            c["alpha/beta/gamma/delta"].parent(&c).unwrap().path(),
            "alpha/beta/gamma"
        );
        assert!(c["foo"].parent(&c).is_none());
        assert_eq!(c["foo/bar/baz"].parent(&c).unwrap().path(), "foo/bar");
    }

    #[test]
    fn parent_missing_from_collection_is_none() {
        let c = collection_from_paths(&["alpha/beta"]);
        assert!(c["alpha/beta"].parent(&c).is_none());
        assert!(c["alpha/beta"].root_parent(&c).is_none());
    }

    #[test]
    fn root_parent_lookup() {
        let c = collection_from_paths(FAMILY);
        assert!(c["alpha"].root_parent(&c).is_none());
        assert_eq!(c["alpha/beta"].root_parent(&c).unwrap().path(), "alpha");
        assert_eq!(c["alpha/beta/gamma/delta"].root_parent(&c).unwrap().path(), "alpha");
        assert!(c["foo"].root_parent(&c).is_none());
        assert_eq!(c["foo/bar/baz"].root_parent(&c).unwrap().path(), "foo");
    }

    #[test]
    fn has_children() {
        let c = collection_from_paths(FAMILY);
        assert!(c["alpha"].has_children(&c));
        assert!(c["alpha/beta"].has_children(&c));
        assert!(c["alpha/beta/gamma"].has_children(&c));
        assert!(!c["alpha/beta/gamma/delta"].has_children(&c));
        assert!(!c["alpha-2"].has_children(&c));
        assert!(!c["foo/bar/baz"].has_children(&c));
    }

    #[test]
    fn children_are_direct_only() {
        let c = collection_from_paths(FAMILY);
        assert_eq!(paths(&c["alpha"].children(&c)), vec!["alpha/beta", "alpha/beta-2"]);
        assert_eq!(
            paths(&c["alpha/beta"].children(&c)),
            vec!["alpha/beta/gamma", "alpha/beta/gamma-2"]
        );
        assert_eq!(paths(&c["foo"].children(&c)), vec!["foo/bar", "foo/bar-2"]);
        assert!(c["alpha-2"].children(&c).is_empty());
    }

    #[test]
    fn descendants_span_all_depths() {
        let c = collection_from_paths(FAMILY);
        assert_eq!(
            paths(&c["alpha/beta"].descendants(&c)),
            vec![
                "alpha/beta/gamma",
                "alpha/beta/gamma-2",
                "alpha/beta/gamma/delta",
                "alpha/beta/gamma/delta-2",
            ]
        );
        assert_eq!(
            paths(&c["foo"].descendants(&c)),
            vec!["foo/bar", "foo/bar-2", "foo/bar/baz", "foo/bar/baz-2"]
        );
    }

    #[test]
    fn siblings_share_parent_path() {
        let c = collection_from_paths(FAMILY);
        assert_eq!(paths(&c["alpha/beta"].siblings(&c, false)), vec!["alpha/beta-2"]);
        assert_eq!(
            paths(&c["alpha/beta"].siblings(&c, true)),
            vec!["alpha/beta", "alpha/beta-2"]
        );
        assert_eq!(
            paths(&c["foo/bar/baz"].siblings(&c, false)),
            vec!["foo/bar/baz-2"]
        );
    }

    #[test]
    fn root_siblings_are_root_nodes() {
        let c = collection_from_paths(FAMILY);
        assert_eq!(
            paths(&c["alpha"].siblings(&c, false)),
            vec!["alpha-2", "foo", "foo-2"]
        );
    }

    #[test]
    fn ancestors_walk_to_root() {
        let c = collection_from_paths(FAMILY);
        let node = &c["alpha/beta/gamma/delta"];
        assert_eq!(
            paths(&node.ancestors(&c)),
            vec!["alpha/beta/gamma", "alpha/beta", "alpha"]
        );
        assert!(c["alpha"].ancestors(&c).is_empty());
    }

    #[test]
    fn ancestors_match_ancestor_paths() {
        let c = collection_from_paths(FAMILY);
        for node in &c {
            let mut walked: Vec<String> = node
                .ancestors(&c)
                .iter()
                .map(|n| n.path().to_string())
                .collect();
            walked.reverse();
            assert_eq!(walked, node.ancestor_paths(), "ancestors of {}", node.path());
        }
    }

    #[test]
    fn every_child_lists_under_its_parent() {
        let c = collection_from_paths(FAMILY);
        for node in &c {
            if let Some(parent) = node.parent(&c) {
                assert!(
                    parent.children(&c).iter().any(|n| n.path() == node.path()),
                    "{} missing from children of {}",
                    node.path(),
                    parent.path()
                );
            }
        }
    }

    #[test]
    fn node_ref_resolves_path() {
        let n = Node::new("alpha/beta").unwrap();
        let owned = "alpha".to_string();
        assert_eq!(NodeRef::from(&n).path(), "alpha/beta");
        assert_eq!(NodeRef::from("x/y").path(), "x/y");
        assert_eq!(NodeRef::from(&owned).path(), "alpha");
    }
}
