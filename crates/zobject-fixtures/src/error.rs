//! Errors raised while loading, editing or writing fixtures.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to render YAML: {0}")]
    RenderYaml(#[source] serde_yaml::Error),

    #[error("failed to render JSON: {0}")]
    RenderJson(#[source] serde_json::Error),

    #[error("no type id in file name {}", .0.display())]
    NoTypeId(PathBuf),

    #[error("missing field {0}")]
    MissingField(String),

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}
