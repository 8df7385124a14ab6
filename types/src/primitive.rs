//! The seven primitive kinds.

use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// A value with no internal structure relevant to classification.
///
/// # Invariants
///
/// - Exactly seven variants; every primitive belongs to exactly one kind.
/// - `Number` follows IEEE-754 semantics, so `NaN` and `-0.0` are representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(f64),
    BigInt(BigInt),
    Boolean(bool),
    Symbol(Symbol),
    Null,
    Undefined,
}

impl Primitive {
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Text(_) => PrimitiveKind::Text,
            Primitive::Number(_) => PrimitiveKind::Number,
            Primitive::BigInt(_) => PrimitiveKind::BigInt,
            Primitive::Boolean(_) => PrimitiveKind::Boolean,
            Primitive::Symbol(_) => PrimitiveKind::Symbol,
            Primitive::Null => PrimitiveKind::Null,
            Primitive::Undefined => PrimitiveKind::Undefined,
        }
    }
}

/// Discriminant of [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    #[serde(rename = "string")]
    Text,
    Number,
    BigInt,
    Boolean,
    Symbol,
    Null,
    Undefined,
}

impl PrimitiveKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Text => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::BigInt => "bigint",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Null => "null",
            PrimitiveKind::Undefined => "undefined",
        }
    }

    /// Parse a kind from its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.as_str() == s)
    }

    #[must_use]
    pub const fn all() -> &'static [PrimitiveKind] {
        &[
            PrimitiveKind::Text,
            PrimitiveKind::Number,
            PrimitiveKind::BigInt,
            PrimitiveKind::Boolean,
            PrimitiveKind::Symbol,
            PrimitiveKind::Null,
            PrimitiveKind::Undefined,
        ]
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(value.to_owned())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Text(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(f64::from(value))
    }
}

impl From<BigInt> for Primitive {
    fn from(value: BigInt) -> Self {
        Primitive::BigInt(value)
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Boolean(value)
    }
}

impl From<Symbol> for Primitive {
    fn from(value: Symbol) -> Self {
        Primitive::Symbol(value)
    }
}
