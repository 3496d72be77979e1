//! Shape recognition for ZObject nodes.
//!
//! Every transform in this crate starts by asking what a node *is*. The
//! answer is computed from the node's type field (`Z1K1`), which may be a
//! bare tag (`"Z10"`) or a reference node naming the tag
//! (`{"Z1K1": "Z9", "Z9K1": "Z10"}`). [`resolve_tag`] handles both, and
//! [`classify`] folds the individual predicates into a closed [`Shape`].

use crate::tags::*;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Global IDs (`Z1000`), global keys (`Z1000K1`) and bare local keys (`K1`).
static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

/// Whether `text` reads as a ZID or key rather than free text.
///
/// The whole string must match; `"Zebra"` or `"see Z1"` do not.
pub fn looks_like_identifier(text: &str) -> bool {
    IDENTIFIER
        .get_or_init(|| {
            Regex::new(r"^(?:Z[1-9][0-9]*(?:K[1-9][0-9]*)?|K[1-9][0-9]*)$")
                .expect("identifier pattern is valid")
        })
        .is_match(text)
}

/// What a node is, as far as the encodings are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `{Z1K1: Z9, Z9K1: <id>}`
    Reference(&'a str),
    /// `{Z1K1: Z6, Z6K1: <text>}`
    StringLiteral(&'a str),
    /// Node typed `Z10`.
    ConsList,
    /// Node typed `Z7(Z881, <element type>)`.
    TypedList,
    /// Node typed `Z13`; never touched.
    Opaque,
    /// Any other mapping.
    Mapping,
    /// Native array.
    Sequence,
    /// String, number, bool or null.
    Scalar,
}

/// Classify a node. Opaque wins over every other interpretation.
pub fn classify(node: &Value) -> Shape<'_> {
    let map = match node {
        Value::Object(map) => map,
        Value::Array(_) => return Shape::Sequence,
        _ => return Shape::Scalar,
    };
    let ty = map.get(TYPE_KEY);
    if ty.and_then(resolve_tag) == Some(UNKNOWN) {
        return Shape::Opaque;
    }
    if let Some(id) = wrapped_payload(map, REFERENCE, REFERENCE_ID) {
        return Shape::Reference(id);
    }
    if let Some(text) = wrapped_payload(map, STRING, STRING_VALUE) {
        return Shape::StringLiteral(text);
    }
    match ty {
        Some(ty) if is_cons_list_type(ty) => Shape::ConsList,
        Some(ty) if is_typed_list_type(ty) => Shape::TypedList,
        _ => Shape::Mapping,
    }
}

/// Resolve a type field to its tag: a bare string, or the identifier a
/// reference node points at.
pub fn resolve_tag(ty: &Value) -> Option<&str> {
    match ty {
        Value::String(tag) => Some(tag),
        Value::Object(map) => wrapped_payload(map, REFERENCE, REFERENCE_ID),
        _ => None,
    }
}

/// The resolved tag of a node's own type field.
pub fn type_tag(node: &Value) -> Option<&str> {
    node.get(TYPE_KEY).and_then(resolve_tag)
}

/// Payload of a wrapper node: exactly a type field resolving to `tag` and
/// one string-valued `payload_key`.
fn wrapped_payload<'a>(
    map: &'a Map<String, Value>,
    tag: &str,
    payload_key: &str,
) -> Option<&'a str> {
    if map.len() != 2 {
        return None;
    }
    if map.get(TYPE_KEY).and_then(resolve_tag) != Some(tag) {
        return None;
    }
    map.get(payload_key).and_then(Value::as_str)
}

/// `ty` is the bare list tag or a reference to it.
pub fn is_cons_list_type(ty: &Value) -> bool {
    resolve_tag(ty) == Some(LIST)
}

/// `ty` is a mapping whose own type is a function call (`Z7`).
pub fn is_generic_application(ty: &Value) -> bool {
    ty.is_object() && type_tag(ty) == Some(FUNCTION_CALL)
}

/// `ty` applies the typed-list constructor (`Z881`).
pub fn is_list_constructor(ty: &Value) -> bool {
    ty.get(CALL_FUNCTION).and_then(resolve_tag) == Some(TYPED_LIST)
}

/// `ty` is `Z7(Z881, _)`.
pub fn is_typed_list_type(ty: &Value) -> bool {
    is_generic_application(ty) && is_list_constructor(ty)
}

/// `ty` is either list encoding.
pub fn is_list_shaped(ty: &Value) -> bool {
    is_cons_list_type(ty) || is_typed_list_type(ty)
}

pub fn is_reference(node: &Value) -> bool {
    matches!(classify(node), Shape::Reference(_))
}

pub fn is_string_literal(node: &Value) -> bool {
    matches!(classify(node), Shape::StringLiteral(_))
}

pub fn is_opaque(node: &Value) -> bool {
    classify(node) == Shape::Opaque
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_pattern() {
        for id in ["Z1", "Z1000", "Z1000K1", "K1", "K12"] {
            assert!(looks_like_identifier(id), "{id}");
        }
        for text in ["", "Z", "Z0", "Zebra", "K0", "a Z1", "Z1K", "Z1K1 ", "hello"] {
            assert!(!looks_like_identifier(text), "{text}");
        }
    }

    #[test]
    fn test_resolve_tag_through_reference() {
        assert_eq!(resolve_tag(&json!("Z10")), Some("Z10"));
        assert_eq!(resolve_tag(&json!({"Z1K1": "Z9", "Z9K1": "Z10"})), Some("Z10"));
        assert_eq!(resolve_tag(&json!({"Z1K1": "Z6", "Z6K1": "Z10"})), None);
        assert_eq!(resolve_tag(&json!(10)), None);
    }

    #[test]
    fn test_reference_typed_by_reference() {
        let node = json!({"Z1K1": {"Z1K1": "Z9", "Z9K1": "Z9"}, "Z9K1": "Z18"});
        assert_eq!(classify(&node), Shape::Reference("Z18"));
    }

    #[test]
    fn test_wrapper_with_extra_field_is_plain_mapping() {
        let node = json!({"Z1K1": "Z6", "Z6K1": "x", "extra": 1});
        assert_eq!(classify(&node), Shape::Mapping);
        assert!(!is_string_literal(&node));
    }

    #[test]
    fn test_list_types() {
        let cons = json!({"Z1K1": "Z9", "Z9K1": "Z10"});
        let typed = json!({
            "Z1K1": {"Z1K1": "Z9", "Z9K1": "Z7"},
            "Z7K1": "Z881",
            "Z881K1": "Z6"
        });
        let other_call = json!({"Z1K1": "Z7", "Z7K1": "Z882"});

        assert!(is_cons_list_type(&json!("Z10")));
        assert!(is_cons_list_type(&cons));
        assert!(is_list_shaped(&cons));
        assert!(is_typed_list_type(&typed));
        assert!(is_list_shaped(&typed));
        assert!(is_generic_application(&other_call));
        assert!(!is_list_constructor(&other_call));
        assert!(!is_list_shaped(&other_call));
        assert!(!is_generic_application(&json!("Z7")));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&json!({"Z1K1": "Z13"})), Shape::Opaque);
        assert_eq!(classify(&json!({"Z1K1": "Z10"})), Shape::ConsList);
        assert_eq!(classify(&json!({"Z1K1": "Z6", "Z6K1": "hi"})), Shape::StringLiteral("hi"));
        assert_eq!(classify(&json!({"Z1K1": "Z18"})), Shape::Mapping);
        assert_eq!(classify(&json!([])), Shape::Sequence);
        assert_eq!(classify(&json!(null)), Shape::Scalar);
        assert!(is_opaque(&json!({"Z1K1": {"Z1K1": "Z9", "Z9K1": "Z13"}, "x": [1]})));
        assert!(is_reference(&json!({"Z1K1": "Z9", "Z9K1": "Z1"})));
    }
}
