//! One-shot classification of a value against every guard.

use std::fmt;

use asod_types::{CapabilityError, CapabilityMethod, PrimitiveKind, Value};
use serde::Serialize;

use crate::built_in::is_truthy;
use crate::capability::{capability_methods, is_comparable_operand};
use crate::operand::{is_falsy_operand, is_identity_operand, is_neutral_operand};

/// Coarse runtime kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ValueKind {
    Primitive(PrimitiveKind),
    Structural(StructuralKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuralKind {
    Function,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Primitive(kind) => kind.as_str(),
            ValueKind::Structural(StructuralKind::Function) => "function",
            ValueKind::Structural(StructuralKind::Array) => "array",
            ValueKind::Structural(StructuralKind::Object) => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[must_use]
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Primitive(p) => ValueKind::Primitive(p.kind()),
        Value::Function(_) => ValueKind::Structural(StructuralKind::Function),
        Value::Array(_) => ValueKind::Structural(StructuralKind::Array),
        Value::Object(_) => ValueKind::Structural(StructuralKind::Object),
    }
}

/// Every role of a single value, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub kind: ValueKind,
    pub truthy: bool,
    pub falsy_operand: bool,
    pub neutral_operand: bool,
    pub identity_operand: bool,
    pub comparable_operand: bool,
    pub capabilities: Vec<CapabilityMethod>,
}

/// Classify `value` against all guards.
///
/// Capability-backed roles are evaluated in the order falsy, neutral,
/// identity; the first capability method that fails aborts classification
/// with its error.
pub fn classify(value: &Value) -> Result<Classification, CapabilityError> {
    Ok(Classification {
        kind: kind_of(value),
        truthy: is_truthy(value),
        falsy_operand: is_falsy_operand(value)?,
        neutral_operand: is_neutral_operand(value)?,
        identity_operand: is_identity_operand(value)?,
        comparable_operand: is_comparable_operand(value),
        capabilities: capability_methods(value),
    })
}
