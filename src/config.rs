//! Navigation definition loading.
//!
//! A site's navigation is described in a single `navigation.toml`: a
//! `[settings]` table and a list of `[[nodes]]`. Node order in the file is
//! insertion order, which matters for display-order assignment and for
//! URL-match tie-breaks.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [settings]
//! auto_display_order = true   # Resolve display-order collisions among siblings
//! exact_match_only = false    # Only exact URL matches select the current node
//!
//! [[nodes]]
//! path = "about/team"         # Required. Slash-delimited, unique
//! display_name = "Our Team"   # Defaults to the humanized last path segment
//! url = "/about/team/"        # Defaults to "/<path>/"
//! display_order = 2           # Requested position among siblings
//! exact_match_only = false    # Never current through a URL-prefix match
//!
//! [nodes.template_data]       # Passed to renderers untouched
//! icon = "people"
//! ```
//!
//! Unknown keys under `[settings]` are rejected to catch typos early. Node
//! entries ignore keys they do not know, so renderer-specific annotations can
//! live next to them.

use crate::collection::Collection;
use crate::error::NavError;
use crate::node::{NodeSpec, normalize_path};
use crate::template::Current;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Nav(#[from] NavError),
}

/// The contents of a `navigation.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub settings: NavSettings,
    pub nodes: Vec<NodeSpec>,
}

/// Collection-wide behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavSettings {
    /// Run gap-filling display-order assignment on insert.
    /// When false, requested orders are stored verbatim.
    pub auto_display_order: bool,
    /// Select the current node by exact URL only, never by prefix.
    pub exact_match_only: bool,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            auto_display_order: true,
            exact_match_only: false,
        }
    }
}

impl NavSettings {
    /// Designate the current node by `url` under these settings.
    pub fn current_for_url<'a>(&self, url: &'a str) -> Current<'a> {
        if self.exact_match_only {
            Current::ExactUrl(url)
        } else {
            Current::Url(url)
        }
    }
}

impl NavConfig {
    /// Check every node entry has a usable, unique path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, spec) in self.nodes.iter().enumerate() {
            let Some(raw) = spec.path.as_deref() else {
                log::warn!("nodes[{i}] has no `path` key");
                return Err(NavError::MissingRequiredField(vec!["path".to_string()]).into());
            };
            let path = normalize_path(raw)?;
            if !seen.insert(path.clone()) {
                return Err(ConfigError::Validation(format!(
                    "nodes[{i}]: duplicate node path \"{path}\""
                )));
            }
        }
        Ok(())
    }

    /// Build the collection, adding nodes in file order.
    pub fn build_collection(&self) -> Result<Collection, ConfigError> {
        let collection =
            Collection::from_specs(self.nodes.iter().cloned(), self.settings.auto_display_order)?;
        log::debug!("built collection with {} node(s)", collection.len());
        Ok(collection)
    }
}

/// Parse and validate a navigation definition from TOML text.
pub fn parse_config(content: &str) -> Result<NavConfig, ConfigError> {
    let config: NavConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a navigation definition from a file.
///
/// A missing file yields an empty navigation with default settings.
pub fn load_config(path: &Path) -> Result<NavConfig, ConfigError> {
    if !path.exists() {
        log::debug!("{} not found, using an empty navigation", path.display());
        return Ok(NavConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Returns a fully-commented stock `navigation.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Navigation Definition
# =====================
# Each [[nodes]] entry is one menu item. Its path places it in the tree:
# "about" is a top-level item, "about/team" sits under it.
# A node whose parent path has no entry is an orphan and is rejected
# when navigation is prepared.

# ---------------------------------------------------------------------------
# Settings
# ---------------------------------------------------------------------------
[settings]
# Resolve display-order collisions among siblings by moving a node to the
# first free position after the one it asked for. Nodes without a
# display_order go after their existing siblings.
# When false, display_order values are used verbatim (missing = 0).
auto_display_order = true

# Only an exact URL match selects the current node.
# When false, the deepest node whose URL prefixes the request URL is used.
exact_match_only = false

# ---------------------------------------------------------------------------
# Nodes
# ---------------------------------------------------------------------------
[[nodes]]
path = "home"
display_name = "Home"
url = "/"
exact_match_only = true

[[nodes]]
path = "about"
# display_name defaults to "About", url to "/about/".

[[nodes]]
path = "about/our-team"
display_order = 1

[nodes.template_data]
# Free-form values handed to templates.
icon = "people"
"##
}
