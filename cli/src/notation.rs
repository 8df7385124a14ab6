//! JSON notation for asod values.
//!
//! Plain JSON maps onto the obvious primitives, arrays and objects. Values
//! JSON cannot spell are written as single-key objects tagged with `$`:
//!
//! ```text
//! {"$bigint": "123"}      {"$number": "NaN" | "Infinity" | "-Infinity" | "-0"}
//! {"$symbol": "desc"}     {"$undefined": null}      {"$function": 2}
//! ```
//!
//! Any other object is a capability object. A key named after a protocol
//! method fills that slot: `is*`, `to*`, `inverse` and `oppose` return the
//! decoded value, `compare` returns the sign of its number (`null` for
//! unordered). `{"$throw": "message"}` as a method value makes the method
//! fail. Remaining keys are data fields.

use std::cmp::Ordering;
use std::str::FromStr;

use asod_types::{
    BigInt, BoxError, Callable, Capabilities, CapabilityMethod, CapabilityObject, Primitive,
    ProducerMethod, Value,
};
use serde_json::{Map, Value as Json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotationError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("number {0} is not representable as f64")]
    UnrepresentableNumber(String),
    #[error("invalid $bigint literal: {0}")]
    InvalidBigInt(String),
    #[error("unknown $number literal: {0} (expected NaN, Infinity, -Infinity or -0)")]
    UnknownNumberLiteral(String),
    #[error("$symbol expects a string description or null")]
    InvalidSymbol,
    #[error("$function expects a non-negative integer arity or null")]
    InvalidArity,
    #[error("unknown tag ${0}")]
    UnknownTag(String),
    #[error("$throw is only valid as the value of a capability method")]
    ThrowOutsideMethod,
    #[error("compare expects a number, null or $throw")]
    InvalidComparator,
}

/// What a decoded capability method does when invoked.
#[derive(Debug, Clone)]
enum Behavior {
    Return(Value),
    Throw(String),
}

impl Behavior {
    fn invoke(&self) -> Result<Value, BoxError> {
        match self {
            Behavior::Return(value) => Ok(value.clone()),
            Behavior::Throw(message) => Err(message.clone().into()),
        }
    }
}

/// Parse a single value written in JSON notation.
pub fn parse(input: &str) -> Result<Value, NotationError> {
    let json: Json = serde_json::from_str(input)?;
    decode(&json)
}

pub fn decode(json: &Json) -> Result<Value, NotationError> {
    match json {
        Json::Null => Ok(Value::null()),
        Json::Bool(b) => Ok(Value::from(*b)),
        Json::Number(n) => n
            .as_f64()
            .map(Value::from)
            .ok_or_else(|| NotationError::UnrepresentableNumber(n.to_string())),
        Json::String(s) => Ok(Value::from(s.as_str())),
        Json::Array(items) => items
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Json::Object(map) => decode_object(map),
    }
}

fn single_tag(map: &Map<String, Json>) -> Option<(&str, &Json)> {
    if map.len() != 1 {
        return None;
    }
    let (key, inner) = map.iter().next()?;
    key.strip_prefix('$').map(|tag| (tag, inner))
}

fn decode_object(map: &Map<String, Json>) -> Result<Value, NotationError> {
    if let Some((tag, inner)) = single_tag(map) {
        return decode_tagged(tag, inner);
    }

    let mut capabilities = Capabilities::new();
    let mut fields = Vec::new();
    for (key, inner) in map {
        match CapabilityMethod::parse(key) {
            Some(method) => capabilities = attach(capabilities, method, inner)?,
            None => fields.push((key.clone(), decode(inner)?)),
        }
    }

    let object = fields
        .into_iter()
        .fold(CapabilityObject::new(capabilities), |obj, (key, value)| {
            obj.with_field(key, value)
        });
    Ok(Value::Object(object))
}

fn decode_tagged(tag: &str, inner: &Json) -> Result<Value, NotationError> {
    match tag {
        "bigint" => decode_bigint(inner).map(Value::from),
        "number" => decode_number_literal(inner).map(Value::from),
        "symbol" => match inner {
            Json::Null => Ok(Value::symbol(None)),
            Json::String(description) => Ok(Value::symbol(Some(description.as_str()))),
            _ => Err(NotationError::InvalidSymbol),
        },
        "undefined" => Ok(Value::undefined()),
        "function" => {
            let arity = match inner {
                Json::Null => 0,
                Json::Number(n) => n
                    .as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or(NotationError::InvalidArity)?,
                _ => return Err(NotationError::InvalidArity),
            };
            Ok(Value::from(Callable::new(arity, |_| Ok(Value::undefined()))))
        }
        "throw" => Err(NotationError::ThrowOutsideMethod),
        other => Err(NotationError::UnknownTag(other.to_string())),
    }
}

fn decode_bigint(inner: &Json) -> Result<BigInt, NotationError> {
    match inner {
        Json::String(s) => {
            BigInt::from_str(s.trim()).map_err(|_| NotationError::InvalidBigInt(s.clone()))
        }
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(BigInt::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(BigInt::from(u))
            } else {
                Err(NotationError::InvalidBigInt(n.to_string()))
            }
        }
        other => Err(NotationError::InvalidBigInt(other.to_string())),
    }
}

fn decode_number_literal(inner: &Json) -> Result<f64, NotationError> {
    match inner {
        Json::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" | "+Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            "-0" => Ok(-0.0),
            other => Err(NotationError::UnknownNumberLiteral(other.to_string())),
        },
        other => Err(NotationError::UnknownNumberLiteral(other.to_string())),
    }
}

fn behavior(inner: &Json) -> Result<Behavior, NotationError> {
    if let Json::Object(map) = inner {
        if let Some(("throw", message)) = single_tag(map) {
            let message = match message {
                Json::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Behavior::Throw(message));
        }
    }
    decode(inner).map(Behavior::Return)
}

fn attach(
    capabilities: Capabilities,
    method: CapabilityMethod,
    inner: &Json,
) -> Result<Capabilities, NotationError> {
    let producer = match method {
        CapabilityMethod::Compare => return attach_comparator(capabilities, inner),
        CapabilityMethod::IsFalsy => return Ok(capabilities.with_is_falsy(method_body(inner)?)),
        CapabilityMethod::IsNeutral => {
            return Ok(capabilities.with_is_neutral(method_body(inner)?));
        }
        CapabilityMethod::IsIdentity => {
            return Ok(capabilities.with_is_identity(method_body(inner)?));
        }
        CapabilityMethod::ToFalsy => ProducerMethod::ToFalsy,
        CapabilityMethod::ToNeutral => ProducerMethod::ToNeutral,
        CapabilityMethod::ToIdentity => ProducerMethod::ToIdentity,
        CapabilityMethod::Inverse => ProducerMethod::Inverse,
        CapabilityMethod::Oppose => ProducerMethod::Oppose,
    };
    Ok(capabilities.with_producer(producer, method_body(inner)?))
}

fn method_body(
    inner: &Json,
) -> Result<impl Fn() -> Result<Value, BoxError> + Send + Sync + 'static, NotationError> {
    let outcome = behavior(inner)?;
    Ok(move || outcome.invoke())
}

fn attach_comparator(
    capabilities: Capabilities,
    inner: &Json,
) -> Result<Capabilities, NotationError> {
    let ordering = match behavior(inner)? {
        Behavior::Throw(message) => Err(message),
        Behavior::Return(Value::Primitive(Primitive::Null)) => Ok(None),
        Behavior::Return(value) => {
            let n = value.as_number().ok_or(NotationError::InvalidComparator)?;
            Ok(n.partial_cmp(&0.0))
        }
    };

    Ok(capabilities.with_compare(move |_other: &Value| -> Result<Option<Ordering>, BoxError> {
        ordering.clone().map_err(Into::into)
    }))
}
