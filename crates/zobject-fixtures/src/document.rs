//! Reading and writing fixture files.
//!
//! A fixture is loaded whole, edited in memory and rendered whole. The
//! rendered text is complete before the destination is opened, so a failed
//! operation never leaves a half-written file behind.
//!
//! A single leading `#` comment line is carried across a rewrite; YAML
//! serializers drop comments, and fixture files use that line for their
//! license or provenance note.

use crate::FixtureError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// On-disk serialization of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Format {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown fixture format: {s}")),
        }
    }
}

/// Where a rendered fixture goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Print to stdout, leave the file alone.
    DryRun,
    /// Replace the source file.
    Write,
}

impl Output {
    pub fn from_write_flag(write: bool) -> Self {
        if write { Output::Write } else { Output::DryRun }
    }
}

/// A fixture file held in memory.
#[derive(Debug, Clone)]
pub struct FixtureDocument {
    path: PathBuf,
    format: Format,
    comment: Option<String>,
    tree: Value,
}

impl FixtureDocument {
    /// Read and parse `path`.
    pub fn load(path: impl Into<PathBuf>, format: Format) -> Result<Self, FixtureError> {
        let path = path.into();
        let text = read_text(&path)?;
        tracing::debug!(path = %path.display(), %format, bytes = text.len(), "loaded fixture");
        Self::parse(path, format, &text)
    }

    /// Parse fixture `text` as if it had been read from `path`.
    pub fn parse(
        path: impl Into<PathBuf>,
        format: Format,
        text: &str,
    ) -> Result<Self, FixtureError> {
        let path = path.into();
        let comment = leading_comment(text);
        let tree = match format {
            Format::Yaml => serde_yaml::from_str(text).map_err(|source| FixtureError::Yaml {
                path: path.clone(),
                source,
            })?,
            Format::Json => {
                // JSON has no comment syntax; skip the carried line before parsing.
                let body = match comment {
                    Some(_) => text.split_once('\n').map_or("", |(_, rest)| rest),
                    None => text,
                };
                serde_json::from_str(body).map_err(|source| FixtureError::Json {
                    path: path.clone(),
                    source,
                })?
            }
        };
        Ok(Self {
            path,
            format,
            comment,
            tree,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Value {
        &mut self.tree
    }

    /// Render the document: the carried comment line, then the tree.
    ///
    /// JSON is indented by four spaces and has no trailing newline.
    pub fn render(&self) -> Result<String, FixtureError> {
        let body = match self.format {
            Format::Yaml => serde_yaml::to_string(&self.tree).map_err(FixtureError::RenderYaml)?,
            Format::Json => {
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                self.tree
                    .serialize(&mut ser)
                    .map_err(FixtureError::RenderJson)?;
                String::from_utf8_lossy(&buf).into_owned()
            }
        };
        Ok(match &self.comment {
            Some(comment) => format!("{comment}\n{body}"),
            None => body,
        })
    }

    /// Render and route the document. Returns the rendered text.
    pub fn emit(&self, output: Output) -> Result<String, FixtureError> {
        let rendered = self.render()?;
        match output {
            Output::DryRun => println!("{rendered}"),
            Output::Write => {
                write_text(&self.path, &rendered)?;
                tracing::debug!(
                    path = %self.path.display(),
                    bytes = rendered.len(),
                    "wrote fixture"
                );
            }
        }
        Ok(rendered)
    }
}

/// The first line, trimmed, if it is a `#` comment.
fn leading_comment(text: &str) -> Option<String> {
    let first = text.lines().next()?.trim();
    first.starts_with('#').then(|| first.to_string())
}

pub(crate) fn read_text(path: &Path) -> Result<String, FixtureError> {
    std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_text(path: &Path, text: &str) -> Result<(), FixtureError> {
    std::fs::write(path, text).map_err(|source| FixtureError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/Z6.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a/Z6.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("Z6")), Format::Yaml);
        assert_eq!("yml".parse::<Format>(), Ok(Format::Yaml));
        assert!("toml".parse::<Format>().is_err());
    }

    #[test]
    fn test_yaml_comment_carried() {
        let text = "# Copyright holders\ntest_objects:\n  success: []\n";
        let doc = FixtureDocument::parse("Z6.yaml", Format::Yaml, text).unwrap();
        assert_eq!(doc.comment(), Some("# Copyright holders"));
        assert_eq!(doc.tree(), &json!({"test_objects": {"success": []}}));

        let rendered = doc.render().unwrap();
        assert!(rendered.starts_with("# Copyright holders\ntest_objects:"));
    }

    #[test]
    fn test_no_comment() {
        let doc = FixtureDocument::parse("Z6.yaml", Format::Yaml, "a: 1\n").unwrap();
        assert_eq!(doc.comment(), None);
        assert_eq!(doc.render().unwrap(), "a: 1\n");
    }

    #[test]
    fn test_yaml_keeps_key_order() {
        let doc = FixtureDocument::parse("x.yaml", Format::Yaml, "b: 1\na: 2\n").unwrap();
        assert_eq!(doc.render().unwrap(), "b: 1\na: 2\n");
    }

    #[test]
    fn test_json_four_space_indent() {
        let doc = FixtureDocument::parse("x.json", Format::Json, r#"{"a": [1]}"#).unwrap();
        assert_eq!(doc.format(), Format::Json);
        assert_eq!(doc.render().unwrap(), "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_json_with_comment_line() {
        let text = "# generated\n{\"a\": 1}\n";
        let doc = FixtureDocument::parse("x.json", Format::Json, text).unwrap();
        assert_eq!(doc.comment(), Some("# generated"));
        assert_eq!(doc.render().unwrap(), "# generated\n{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_parse_error() {
        let err = FixtureDocument::parse("bad.json", Format::Json, "{").unwrap_err();
        assert!(matches!(err, FixtureError::Json { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
