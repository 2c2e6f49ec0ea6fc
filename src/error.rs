//! The single domain error raised for every navigation contract violation.
//!
//! Absence is not an error: parent, root-parent and current-node lookups
//! return `Option` because a root node simply has no parent. `NavError` is
//! reserved for programmer or data mistakes (bad paths, duplicate inserts,
//! dangling references, orphaned nodes).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Attempting to set an invalid node path \"{0}\". A node path must be a non-empty string.")]
    InvalidPath(String),
    #[error(
        "Attempting to create a node from an invalid record. The required field(s) were not found: {}",
        .0.join(", ")
    )]
    MissingRequiredField(Vec<String>),
    #[error(
        "A node with the path \"{0}\" is already assigned to this collection. Use add_node_if_not_exists(), remove_node() or set_node() to change it."
    )]
    DuplicatePath(String),
    #[error("A node with the path \"{0}\" was not found in this collection.")]
    NodeNotFound(String),
    #[error(
        "The following node(s) do not have a parent node in this collection : {}",
        quote_paths(.0)
    )]
    OrphanNodes(Vec<String>),
}

/// Orphan listing format: `'a', 'b/c'`.
fn quote_paths(paths: &[String]) -> String {
    paths
        .iter()
        .map(|p| format!("'{p}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orphan_message_quotes_and_joins_paths() {
        let err = NavError::OrphanNodes(vec!["a/b".to_string(), "c/d/e".to_string()]);
        assert_eq!(
            err.to_string(),
            "The following node(s) do not have a parent node in this collection : 'a/b', 'c/d/e'"
        );
    }

    #[test]
    fn missing_field_message_lists_fields() {
        let err = NavError::MissingRequiredField(vec!["path".to_string()]);
        assert!(err.to_string().ends_with("were not found: path"));
    }

    #[test]
    fn invalid_path_message_echoes_input() {
        let err = NavError::InvalidPath("  ".to_string());
        assert_eq!(
            err.to_string(),
            "Attempting to set an invalid node path \"  \". A node path must be a non-empty string."
        );
    }
}
