//! Configuration for the fixture tool.
//!
//! Loads config from:
//! 1. Global: ~/.config/zobject/config.toml
//! 2. Per-project: .zobject/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [output]
//! format = "json"
//! write = true
//!
//! [element_types]
//! Z40K1 = "Z6"
//! ```

use crate::FixtureError;
use crate::document::Format;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use zobject_core::ElementTypes;

/// Output defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format for files whose extension does not say.
    pub format: Option<Format>,
    /// Overwrite files instead of printing them.
    pub write: Option<bool>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ZObjectConfig {
    pub output: OutputConfig,
    /// Extra or replacement fixed element types, field name to type tag.
    pub element_types: BTreeMap<String, String>,
}

impl ZObjectConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config, then merges per-project config from
    /// `.zobject/config.toml` under `root`. Unreadable files are skipped
    /// with a warning.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_optional(&global_path) {
                config = config.merge(global);
            }
        }

        let project_path = root.join(".zobject").join("config.toml");
        if let Some(project) = Self::load_optional(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Load a config file that must exist and parse.
    pub fn load_file(path: &Path) -> Result<Self, FixtureError> {
        let content = crate::document::read_text(path)?;
        toml::from_str(&content).map_err(|source| FixtureError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("zobject").join("config.toml"))
    }

    fn load_optional(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        match Self::load_file(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("ignoring config: {e}");
                None
            }
        }
    }

    /// Merge another config into this one; values set in `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        self.output.format = other.output.format.or(self.output.format);
        self.output.write = other.output.write.or(self.output.write);
        self.element_types.extend(other.element_types);
        self
    }

    /// The built-in fixed element types with configured entries applied.
    pub fn element_types(&self) -> ElementTypes {
        let mut table = ElementTypes::default();
        table.extend(self.element_types.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        table
    }

    /// Format for `path`: explicit extension first, then config, then YAML.
    pub fn format_for(&self, path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => self.output.format.unwrap_or_default(),
        }
    }

    pub fn write(&self) -> bool {
        self.output.write.unwrap_or(false)
    }
}
