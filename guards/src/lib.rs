//! Algebraic role classification for asod values.
//!
//! Generic operator code asks "is this the neutral element for my operator?"
//! without knowing the operand's concrete type. The answer comes from three
//! layers, each only calling downward:
//!
//! ```text
//! operand     is_falsy_operand / is_neutral_operand / is_identity_operand
//!    │
//! capability  is_comparable_operand, capability slot lookup
//!    │
//! built_in    primitive kind guards, structural checks, truthiness
//! ```
//!
//! Nothing here performs an algebraic operation or checks that a value's
//! self-reported role is lawful. No result is cached; every call recomputes.

mod built_in;
mod capability;
mod operand;
mod report;

pub use built_in::{
    is_array, is_array_of, is_bigint, is_boolean, is_falsy, is_function, is_null, is_number,
    is_object, is_primitive, is_string, is_symbol, is_truthy, is_undefined, primitive_kind,
};
pub use capability::{as_comparable, capability_methods, is_comparable_operand};
pub use operand::{is_falsy_operand, is_identity_operand, is_neutral_operand};
pub use report::{Classification, StructuralKind, ValueKind, classify, kind_of};
