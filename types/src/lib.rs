//! Value model for asod operands.
//!
//! This crate contains the closed value universe the classifiers in
//! `asod-guards` operate on. It has no IO and makes no classification
//! decisions; it only describes what a value *is* and which self-describing
//! capability methods it carries.
//!
//! ```text
//! Value
//! ├── Primitive ── Text | Number | BigInt | Boolean | Symbol | Null | Undefined
//! ├── Function  ── Callable
//! ├── Array     ── Vec<Value>
//! └── Object    ── CapabilityObject { fields, Capabilities }
//! ```

mod callable;
mod capability;
mod error;
mod primitive;
mod symbol;
mod value;

pub use callable::Callable;
pub use capability::{
    Capabilities, CapabilityMethod, CapabilityObject, Comparator, Probe, Producer, ProducerMethod,
};
pub use error::{BoxError, CapabilityError};
pub use num_bigint::BigInt;
pub use primitive::{Primitive, PrimitiveKind};
pub use symbol::Symbol;
pub use value::Value;
