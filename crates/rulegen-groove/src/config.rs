//! Declarative configuration for a graph transformation system.

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// TOML-loadable settings for a [`crate::GtsBuilder`].
///
/// ```toml
/// name = "philosophers"
/// layout = true
///
/// [properties]
/// typeGraph = "types"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GtsConfig {
    /// Grammar name; the output directory becomes `<name>.gps`.
    pub name: String,

    /// Whether to assign grid layout coordinates to generated nodes.
    #[serde(default)]
    pub layout: bool,

    /// Extra entries for `system.properties`, written in key order.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl GtsConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
