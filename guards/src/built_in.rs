//! Primitive kind guards, structural checks and native truthiness.
//!
//! Every function here is total and pure: it inspects the value's variant and
//! nothing else, and never invokes a capability method.

use asod_types::{Primitive, PrimitiveKind, Value};
use num_traits::Zero;

/// The primitive kind of `value`, or `None` if it is not a primitive.
///
/// All seven kind guards and [`is_primitive`] are answered from this one
/// exhaustive match.
#[must_use]
pub fn primitive_kind(value: &Value) -> Option<PrimitiveKind> {
    match value {
        Value::Primitive(p) => Some(p.kind()),
        Value::Function(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_kind(value: &Value, kind: PrimitiveKind) -> bool {
    primitive_kind(value) == Some(kind)
}

#[must_use]
pub fn is_string(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::Text)
}

#[must_use]
pub fn is_symbol(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::Symbol)
}

#[must_use]
pub fn is_number(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::Number)
}

#[must_use]
pub fn is_bigint(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::BigInt)
}

#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::Boolean)
}

#[must_use]
pub fn is_null(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::Null)
}

#[must_use]
pub fn is_undefined(value: &Value) -> bool {
    is_kind(value, PrimitiveKind::Undefined)
}

#[must_use]
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Object-like: a sequence or an object. Callables, `null` and the other
/// primitives are not objects.
#[must_use]
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

#[must_use]
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Sequence check with an element predicate.
///
/// Elements are tested in order; the first failing element stops evaluation.
#[must_use]
pub fn is_array_of<P>(value: &Value, predicate: P) -> bool
where
    P: FnMut(&Value) -> bool,
{
    match value {
        Value::Array(items) => items.iter().all(predicate),
        _ => false,
    }
}

#[must_use]
pub fn is_primitive(value: &Value) -> bool {
    primitive_kind(value).is_some()
}

/// Native truthiness.
///
/// Falsy: `false`, `0`, `-0`, `NaN`, `0n`, `""`, `null`, `undefined`.
/// Everything else is truthy, including empty arrays, symbols and every
/// callable or object.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Primitive(p) => match p {
            Primitive::Text(s) => !s.is_empty(),
            Primitive::Number(n) => !(*n == 0.0 || n.is_nan()),
            Primitive::BigInt(n) => !n.is_zero(),
            Primitive::Boolean(b) => *b,
            Primitive::Symbol(_) => true,
            Primitive::Null | Primitive::Undefined => false,
        },
        Value::Function(_) | Value::Array(_) | Value::Object(_) => true,
    }
}

#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    !is_truthy(value)
}
