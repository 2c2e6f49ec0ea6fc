//! # Navtree
//!
//! A path-keyed navigation tree for menus and breadcrumbs. Nodes are
//! identified by slash-delimited paths (`about/our-team`); the tree shape is
//! implied by those paths, so there are no parent pointers to keep in sync.
//!
//! # Architecture
//!
//! ```text
//! navigation.toml  →  Collection        (nodes + per-node display order)
//! Collection       →  Vec<NavRecord>    (render-ready tree or breadcrumb)
//! ```
//!
//! A [`Collection`] owns its [`Node`]s and a display-order mapping keyed by
//! path. Relationship queries (`children`, `siblings`, `ancestors`) are
//! resolved against a collection on demand. Preparing for a template walks the
//! tree from the roots, marks the current node and its ancestors, and hands
//! back plain serializable [`NavRecord`]s.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`node`] | `Node`, path normalization, relationship queries |
//! | [`collection`] | Storage, display-order assignment, URL matching, orphan checks, filtering |
//! | [`template`] | Nav-tree and breadcrumb preparation, current-node resolution |
//! | [`types`] | `NavRecord` and the filter predicate type handed to renderers |
//! | [`config`] | `navigation.toml` loading and validation |
//! | [`naming`] | Slug humanizing and path prefix helpers |
//! | [`error`] | `NavError` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Display Orders Live On The Collection
//!
//! A node carries only a requested `display_order`. The effective order is
//! assigned by the collection at insert time, because resolving a collision
//! needs the sibling set. The same node can therefore sit at different
//! positions in a collection and in a filtered copy of it.
//!
//! ## Gap Filling
//!
//! When a requested order is taken by a sibling, the node moves to the first
//! free integer after the run of taken orders starting at the request. A node
//! with no request goes after the highest sibling. Passing
//! [`Placement::exact`] bypasses this and stores the number verbatim.
//!
//! ## Explicit Current Node
//!
//! There is no ambient request state. Callers say which node is current
//! through [`Current`]: by URL, by exact URL, by path or not at all.

pub mod collection;
pub mod config;
pub mod error;
pub mod naming;
pub mod node;
pub mod output;
pub mod template;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use collection::{Collection, FilterOptions, Placement};
pub use error::NavError;
pub use node::{Node, NodeRef, NodeSpec};
pub use template::Current;
pub use types::{NavRecord, NodeFilter, TemplateData};
