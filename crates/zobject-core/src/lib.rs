//! Encoding transforms for ZObject trees.
//!
//! A ZObject is a tagged tree: every mapping names its type in `Z1K1`,
//! either as a bare tag or through a reference node. The same value can be
//! written several ways, and this crate converts between them:
//!
//! ```text
//!   normal form ──canonicalize──> canonical form
//!   (wrappers, Z10)               (bare strings, arrays)
//!        │
//!      delist
//!        v
//!   native arrays ──relist──> typed lists, Z7(Z881, T)
//! ```
//!
//! Trees are plain [`serde_json::Value`]s. Nothing here fails: a node that
//! matches no known shape is carried through unchanged, and `Z13` (unknown)
//! nodes are never looked inside.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use zobject_core::{ElementTypes, canonicalize, delist, relist};
//!
//! let cons = json!({
//!     "Z1K1": "Z10",
//!     "Z10K1": "a",
//!     "Z10K2": {"Z1K1": "Z10", "Z10K1": "b"}
//! });
//! assert_eq!(delist(&cons), json!(["a", "b"]));
//!
//! let typed = relist(&json!([]), None, &ElementTypes::default());
//! assert_eq!(typed["Z1K1"]["Z881K1"]["Z9K1"], "Z1");
//!
//! let label = json!({"Z1K1": "Z6", "Z6K1": "hello"});
//! assert_eq!(canonicalize(&label), json!("hello"));
//! ```

pub mod benjamin;
pub mod canonical;
pub mod lists;
pub mod predicates;
pub mod tags;

pub use benjamin::to_benjamin_form;
pub use canonical::canonicalize;
pub use lists::{
    ElementTypes, delist, delist_cons_only, infer_element_type, normalize_list_shapes, reference,
    relist, same_list_shape, typed_list, typed_list_element_type, typed_list_type,
};
pub use predicates::{
    Shape, classify, is_cons_list_type, is_generic_application, is_list_constructor,
    is_list_shaped, is_opaque, is_reference, is_string_literal, is_typed_list_type,
    looks_like_identifier, resolve_tag, type_tag,
};
