//! Type tags and field keys of the ZObject model.

/// The type field every mapping node carries.
pub const TYPE_KEY: &str = "Z1K1";

/// Universal base type.
pub const OBJECT: &str = "Z1";
/// String literal.
pub const STRING: &str = "Z6";
/// Function call (generic-type application).
pub const FUNCTION_CALL: &str = "Z7";
/// Reference.
pub const REFERENCE: &str = "Z9";
/// Cons-list.
pub const LIST: &str = "Z10";
/// Unknown type marker.
pub const UNKNOWN: &str = "Z13";
/// Generic list type constructor.
pub const TYPED_LIST: &str = "Z881";

pub const STRING_VALUE: &str = "Z6K1";
pub const REFERENCE_ID: &str = "Z9K1";
pub const CALL_FUNCTION: &str = "Z7K1";
pub const TYPED_LIST_ELEMENT_TYPE: &str = "Z881K1";

pub const LIST_HEAD: &str = "Z10K1";
pub const LIST_TAIL: &str = "Z10K2";
pub const TYPED_LIST_HEAD: &str = "K1";
pub const TYPED_LIST_TAIL: &str = "K2";
