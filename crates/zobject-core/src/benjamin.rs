//! "Benjamin" fixture encoding.
//!
//! Every array gets the type of its elements pushed to the front, so a
//! human reading a fixture sees what each list is expected to hold:
//!
//! ```text
//! ["a", "b"]      ->  ["Z6", "a", "b"]
//! ["Z1000"]       ->  ["Z9", "Z1000"]
//! []              ->  ["Z1"]
//! ```
//!
//! There is no decoder; the annotation is one-way.

use crate::lists::infer_element_type;
use crate::predicates::is_opaque;
use serde_json::Value;

/// Annotate every array in `node`, in place.
pub fn to_benjamin_form(node: &mut Value) {
    if is_opaque(node) {
        return;
    }
    match node {
        Value::Array(items) => {
            let tag = infer_element_type(items);
            items.insert(0, tag);
            for item in items.iter_mut() {
                to_benjamin_form(item);
            }
        }
        Value::Object(map) => {
            for value in map.values_mut() {
                to_benjamin_form(value);
            }
        }
        _ => {}
    }
}
