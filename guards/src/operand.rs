//! Operand role classification.
//!
//! Each classifier answers from the value's primitive kind when it can and
//! only falls back to the value's own capability method for object-like
//! values. A capability method that fails is reported as
//! `Err(CapabilityError)` carrying the method's own error; it is never read
//! as `false`.

use asod_types::{CapabilityError, CapabilityMethod, Primitive, Value};
use num_traits::{One, Zero};

use crate::built_in::{is_falsy, is_truthy};
use crate::capability::capabilities_of;

/// Invoke the `method` probe on `value`, if it has one, and read the result
/// with native truthiness.
fn delegate(value: &Value, method: CapabilityMethod) -> Option<Result<bool, CapabilityError>> {
    let probe = capabilities_of(value)?.probe(method)?;
    tracing::trace!(method = method.as_str(), "delegating to capability method");

    Some(match probe.call() {
        Ok(result) => Ok(is_truthy(&result)),
        Err(source) => {
            tracing::debug!(method = method.as_str(), error = %source, "capability method failed");
            Err(CapabilityError::new(method, source))
        }
    })
}

/// True iff `value` is a falsy primitive, or an object whose `isFalsy`
/// method returns a truthy result.
pub fn is_falsy_operand(value: &Value) -> Result<bool, CapabilityError> {
    if is_falsy(value) {
        return Ok(true);
    }
    delegate(value, CapabilityMethod::IsFalsy).unwrap_or(Ok(false))
}

/// The additive-style neutral element.
///
/// `0`, `-0`, `0n` and `""` are neutral. Booleans and symbols never are, so
/// `false` is a falsy operand but not a neutral one. Objects answer through
/// `isNeutral`.
pub fn is_neutral_operand(value: &Value) -> Result<bool, CapabilityError> {
    match value {
        Value::Primitive(Primitive::Number(n)) => Ok(*n == 0.0),
        Value::Primitive(Primitive::BigInt(n)) => Ok(n.is_zero()),
        Value::Primitive(Primitive::Text(s)) => Ok(s.is_empty()),
        Value::Primitive(_) | Value::Function(_) => Ok(false),
        Value::Array(_) | Value::Object(_) => {
            delegate(value, CapabilityMethod::IsNeutral).unwrap_or(Ok(false))
        }
    }
}

/// The multiplicative-style identity element.
///
/// `1` and `1n` are identities; text never is, not even `""`. Objects answer
/// through `isIdentity`.
pub fn is_identity_operand(value: &Value) -> Result<bool, CapabilityError> {
    match value {
        Value::Primitive(Primitive::Number(n)) => Ok(*n == 1.0),
        Value::Primitive(Primitive::BigInt(n)) => Ok(n.is_one()),
        Value::Primitive(_) | Value::Function(_) => Ok(false),
        Value::Array(_) | Value::Object(_) => {
            delegate(value, CapabilityMethod::IsIdentity).unwrap_or(Ok(false))
        }
    }
}
