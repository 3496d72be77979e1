//! Canonical form.
//!
//! Canonicalization collapses reference and string wrappers to bare strings
//! and flattens cons-lists into arrays. A wrapper whose payload looks like
//! an identifier is kept: in canonical form a bare `"Z1000"` must not be
//! confused with the literal text `"Z1000"`.

use crate::lists::cons_chain_members;
use crate::predicates::{Shape, classify, looks_like_identifier};
use serde_json::{Map, Value};

/// Reduce `node` to canonical form. Idempotent.
pub fn canonicalize(node: &Value) -> Value {
    match (classify(node), node) {
        (Shape::Opaque, _) => node.clone(),
        (Shape::Reference(_) | Shape::StringLiteral(_), _) => {
            collapsed(node).unwrap_or_else(|| node.clone())
        }
        (Shape::ConsList, Value::Object(map)) => match cons_chain_members(node) {
            Some(heads) => Value::Array(heads.into_iter().map(canonicalize).collect()),
            // Malformed chain: keep the node, canonicalize inside it.
            None => canonical_fields(map),
        },
        (_, Value::Array(items)) => Value::Array(items.iter().map(canonicalize).collect()),
        (_, Value::Object(map)) => canonical_fields(map),
        _ => node.clone(),
    }
}

/// Each field canonicalized. A wrapper whose payload only became a string
/// here is collapsed too, so a second pass finds nothing left to do.
fn canonical_fields(map: &Map<String, Value>) -> Value {
    let fields = Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), canonicalize(value)))
            .collect(),
    );
    collapsed(&fields).unwrap_or(fields)
}

/// The bare string for a reference or string literal with a non-identifier
/// payload.
fn collapsed(node: &Value) -> Option<Value> {
    match classify(node) {
        Shape::Reference(payload) | Shape::StringLiteral(payload)
            if !looks_like_identifier(payload) =>
        {
            Some(Value::String(payload.to_owned()))
        }
        _ => None,
    }
}
