//! Conversions between the three list encodings.
//!
//! - cons-list: `{Z1K1: Z10, Z10K1: head, Z10K2: tail}`
//! - typed list: `{Z1K1: Z7(Z881, T), K1: head, K2: tail}`
//! - native array: `[head, ...]`, only ever an intermediate
//!
//! [`delist`] flattens both linked encodings to arrays, [`relist`] wraps
//! arrays into typed lists. [`normalize_list_shapes`] runs the two whole-tree
//! passes back to back; `relist` infers element types from array contents
//! and would mis-infer on a tree that still holds linked lists.

use crate::predicates::{
    is_cons_list_type, is_list_shaped, is_opaque, looks_like_identifier, resolve_tag,
};
use crate::tags::*;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Fields whose array value always holds elements of one known type.
///
/// The element type recorded for such a field overrides whatever would be
/// inferred from the array's first element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTypes {
    fields: BTreeMap<String, String>,
}

impl ElementTypes {
    /// A table with no fixed fields; every element type is inferred.
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Fix the element type of `field`, returning the previous entry.
    pub fn insert(&mut self, field: impl Into<String>, tag: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), tag.into())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for ElementTypes {
    /// Multilingual texts, argument declarations, testers,
    /// implementations and nested errors.
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("Z12K1", "Z11");
        table.insert("Z8K1", "Z17");
        table.insert("Z8K3", "Z20");
        table.insert("Z8K4", "Z14");
        table.insert("Z5K2", "Z5");
        table
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ElementTypes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (field, tag) in iter {
            self.insert(field, tag);
        }
    }
}

/// Which linked encodings a flattening pass recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Linked {
    Any,
    ConsOnly,
}

impl Linked {
    fn matches(self, node: &Value) -> bool {
        let Some(ty) = node.get(TYPE_KEY) else {
            return false;
        };
        match self {
            Linked::Any => is_list_shaped(ty),
            Linked::ConsOnly => is_cons_list_type(ty),
        }
    }

    fn head(self, link: &Value) -> Option<&Value> {
        present(link, LIST_HEAD).or_else(|| match self {
            Linked::Any => present(link, TYPED_LIST_HEAD),
            Linked::ConsOnly => None,
        })
    }

    fn tail(self, link: &Value) -> Option<&Value> {
        present(link, LIST_TAIL).or_else(|| match self {
            Linked::Any => present(link, TYPED_LIST_TAIL),
            Linked::ConsOnly => None,
        })
    }
}

/// Field value, treating an explicit null as absent.
fn present<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key).filter(|value| !value.is_null())
}

/// Replace every cons-list and typed list in the tree with a native array.
pub fn delist(node: &Value) -> Value {
    flatten(node, Linked::Any)
}

/// Like [`delist`], but only `Z10` cons-lists are flattened; typed lists
/// are kept as mappings.
pub fn delist_cons_only(node: &Value) -> Value {
    flatten(node, Linked::ConsOnly)
}

fn flatten(node: &Value, linked: Linked) -> Value {
    match node {
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| flatten(item, linked)).collect())
        }
        Value::Object(map) => {
            if is_opaque(node) {
                return node.clone();
            }
            if linked.matches(node) {
                if let Some(members) = chain_members(node, linked) {
                    return Value::Array(
                        members
                            .into_iter()
                            .map(|member| flatten(member, linked))
                            .collect(),
                    );
                }
            }
            Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), flatten(value, linked)))
                    .collect(),
            )
        }
        _ => node.clone(),
    }
}

/// Heads of the `Z10` chain starting at `node`, or `None` if some tail is
/// neither another `Z10` link nor an end marker. An array tail supplies the
/// remaining heads.
pub(crate) fn cons_chain_members(node: &Value) -> Option<Vec<&Value>> {
    chain_members(node, Linked::ConsOnly)
}

/// Members of a linked chain starting at `node`, or `None` if some tail is
/// neither another link nor an end marker.
fn chain_members(node: &Value, linked: Linked) -> Option<Vec<&Value>> {
    let mut members = Vec::new();
    let mut link = node;
    loop {
        if let Some(head) = linked.head(link) {
            members.push(head);
        }
        match linked.tail(link) {
            None => return Some(members),
            Some(Value::Object(tail)) if tail.is_empty() => return Some(members),
            Some(Value::Array(rest)) => {
                members.extend(rest);
                return Some(members);
            }
            Some(tail) if linked.matches(tail) && !is_opaque(tail) => link = tail,
            Some(_) => return None,
        }
    }
}

/// Element type of an array, from its first element.
///
/// Empty arrays hold `Z1`. Strings are references when they look like
/// identifiers and string literals otherwise; mappings declare their type
/// in `Z1K1`.
pub fn infer_element_type(items: &[Value]) -> Value {
    let tag = match items.first() {
        None => OBJECT,
        Some(Value::String(text)) if looks_like_identifier(text) => REFERENCE,
        Some(Value::String(_)) => STRING,
        Some(Value::Object(map)) => match map.get(TYPE_KEY) {
            Some(ty) => return ty.clone(),
            None => OBJECT,
        },
        Some(_) => OBJECT,
    };
    Value::String(tag.to_owned())
}

/// `{Z1K1: Z9, Z9K1: id}`
pub fn reference(id: &str) -> Value {
    let mut map = Map::new();
    map.insert(TYPE_KEY.to_owned(), Value::String(REFERENCE.to_owned()));
    map.insert(REFERENCE_ID.to_owned(), Value::String(id.to_owned()));
    Value::Object(map)
}

/// The type `Z7(Z881, element_type)`. A bare tag is wrapped in a reference.
pub fn typed_list_type(element_type: Value) -> Value {
    let element_type = match element_type {
        Value::String(tag) => reference(&tag),
        other => other,
    };
    let mut map = Map::new();
    map.insert(TYPE_KEY.to_owned(), reference(FUNCTION_CALL));
    map.insert(CALL_FUNCTION.to_owned(), reference(TYPED_LIST));
    map.insert(TYPED_LIST_ELEMENT_TYPE.to_owned(), element_type);
    Value::Object(map)
}

/// Build a typed list from already-converted items.
///
/// Every link, including the empty terminator, carries the same header.
pub fn typed_list(items: Vec<Value>, element_type: Option<&Value>) -> Value {
    let element_type = match element_type {
        Some(ty) => ty.clone(),
        None => infer_element_type(&items),
    };
    let header = typed_list_type(element_type);

    let mut terminator = Map::new();
    terminator.insert(TYPE_KEY.to_owned(), header.clone());
    let mut list = Value::Object(terminator);
    for item in items.into_iter().rev() {
        let mut link = Map::new();
        link.insert(TYPE_KEY.to_owned(), header.clone());
        link.insert(TYPED_LIST_HEAD.to_owned(), item);
        link.insert(TYPED_LIST_TAIL.to_owned(), list);
        list = Value::Object(link);
    }
    list
}

/// Replace every native array in the tree with a typed list.
///
/// `element_type` applies to `node` itself when it is an array. Elements
/// are converted without an inherited type; mapping fields listed in
/// `table` pass their fixed type to their value.
pub fn relist(node: &Value, element_type: Option<&Value>, table: &ElementTypes) -> Value {
    match node {
        Value::Array(items) => {
            let items = items.iter().map(|item| relist(item, None, table)).collect();
            typed_list(items, element_type)
        }
        Value::Object(map) if !is_opaque(node) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let fixed = table.get(key).map(|tag| Value::String(tag.to_owned()));
                    (key.clone(), relist(value, fixed.as_ref(), table))
                })
                .collect(),
        ),
        _ => node.clone(),
    }
}

/// Rewrite every list in the tree, whatever its encoding, as a typed list.
pub fn normalize_list_shapes(root: &Value, table: &ElementTypes) -> Value {
    let flat = delist(root);
    relist(&flat, None, table)
}

/// Whether two trees hold the same lists once linked encodings are
/// flattened.
pub fn same_list_shape(a: &Value, b: &Value) -> bool {
    delist(a) == delist(b)
}

/// Element type recorded in a typed list's header, if `node` is one.
pub fn typed_list_element_type(node: &Value) -> Option<&Value> {
    let ty = node.get(TYPE_KEY)?;
    if resolve_tag(ty.get(CALL_FUNCTION)?) != Some(TYPED_LIST) {
        return None;
    }
    ty.get(TYPED_LIST_ELEMENT_TYPE)
}
