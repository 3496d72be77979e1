//! Fixed edits to fixture and schema files.

use crate::FixtureError;
use regex::Regex;
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// `.../Z6.yaml` -> `Z6`, `.../Z14_literal.json` -> `Z14_literal`.
static TYPE_ID_IN_PATH: OnceLock<Regex> = OnceLock::new();

/// Append the stock reference and `Z18` cases to `test_objects.success`.
pub fn add_test_cases(doc: &mut Value) -> Result<(), FixtureError> {
    let success = doc
        .get_mut("test_objects")
        .and_then(|t| t.get_mut("success"))
        .and_then(Value::as_array_mut)
        .ok_or_else(|| FixtureError::MissingField("test_objects.success".to_string()))?;

    success.push(json!({
        "name": "can be a Z9",
        "object": {"Z1K1": "Z9", "Z9K1": "Z1000"}
    }));
    success.push(json!({
        "name": "can be a Z18",
        "object": {
            "Z1K1": {"Z1K1": "Z9", "Z9K1": "Z18"},
            "Z18K1": {"Z1K1": "Z6", "Z6K1": "Z1000K1"}
        }
    }));
    Ok(())
}

/// The type a schema file describes, from its file name.
pub fn type_id_from_path(path: &Path) -> Result<String, FixtureError> {
    let text = path.to_string_lossy().replace('\\', "/");
    TYPE_ID_IN_PATH
        .get_or_init(|| {
            Regex::new(r"(?:^|/)(Z[0-9]*[^/]*?)\.(?:ya?ml|json)$")
                .expect("type id pattern is valid")
        })
        .captures(&text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| FixtureError::NoTypeId(PathBuf::from(path)))
}

/// Constrain `<zid>_literal`'s `Z1K1` property to a reference to `zid`.
pub fn canonicalize_type_field(doc: &mut Value, zid: &str) -> Result<(), FixtureError> {
    let literal_name = format!("{zid}_literal");
    let properties = descend(
        doc,
        &["definitions", "objects", literal_name.as_str(), "properties"],
    )?;
    let properties = properties
        .as_object_mut()
        .ok_or_else(|| {
            missing(&["definitions", "objects", literal_name.as_str(), "properties"])
        })?;

    properties.insert(
        "Z1K1".to_string(),
        json!({
            "allOf": [
                {"$ref": "Z9#/definitions/objects/Z9"},
                {"enum": [zid], "type": "string"}
            ]
        }),
    );
    Ok(())
}

fn descend<'a>(mut node: &'a mut Value, path: &[&str]) -> Result<&'a mut Value, FixtureError> {
    for (depth, key) in path.iter().enumerate() {
        node = node
            .as_object_mut()
            .and_then(|map: &mut Map<String, Value>| map.get_mut(*key))
            .ok_or_else(|| missing(&path[..=depth]))?;
    }
    Ok(node)
}

fn missing(path: &[&str]) -> FixtureError {
    FixtureError::MissingField(path.join("."))
}
