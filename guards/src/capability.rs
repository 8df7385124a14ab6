//! Capability probing: which protocol methods an object-like value exposes.

use asod_types::{Capabilities, CapabilityMethod, Comparator, Value};

/// Capability slots of an object-like value.
///
/// Only `Value::Object` carries slots. Arrays are object-like but have none,
/// and primitives and callables are never probed.
pub(crate) fn capabilities_of(value: &Value) -> Option<&Capabilities> {
    match value {
        Value::Object(obj) => Some(obj.capabilities()),
        Value::Primitive(_) | Value::Function(_) | Value::Array(_) => None,
    }
}

/// True iff `value` is object-like and exposes a `compare` method.
///
/// A comparator always takes exactly one operand, so presence of the slot is
/// sufficient; a parameterless stub cannot be stored in it.
#[must_use]
pub fn is_comparable_operand(value: &Value) -> bool {
    as_comparable(value).is_some()
}

/// Narrowing form of [`is_comparable_operand`].
#[must_use]
pub fn as_comparable(value: &Value) -> Option<&Comparator> {
    capabilities_of(value).and_then(Capabilities::comparator)
}

/// Protocol methods exposed by `value`, in protocol order. Empty for
/// anything that is not a capability object.
#[must_use]
pub fn capability_methods(value: &Value) -> Vec<CapabilityMethod> {
    capabilities_of(value).map_or_else(Vec::new, Capabilities::methods)
}
