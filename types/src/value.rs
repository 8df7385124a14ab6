use num_bigint::BigInt;

use crate::{Callable, Capabilities, CapabilityObject, Primitive, Symbol};

/// Any datum a classifier can be asked about.
///
/// The universe is closed: a value is a primitive, a callable, a sequence, or
/// an object. Arrays count as objects for structural checks but never carry
/// capability methods.
#[derive(Debug, Clone)]
pub enum Value {
    Primitive(Primitive),
    Function(Callable),
    Array(Vec<Value>),
    Object(CapabilityObject),
}

impl Value {
    #[must_use]
    pub const fn null() -> Self {
        Value::Primitive(Primitive::Null)
    }

    #[must_use]
    pub const fn undefined() -> Self {
        Value::Primitive(Primitive::Undefined)
    }

    #[must_use]
    pub const fn nan() -> Self {
        Value::Primitive(Primitive::Number(f64::NAN))
    }

    #[must_use]
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Primitive(Primitive::Symbol(Symbol::new(description)))
    }

    /// An object carrying the given capability slots and no data fields.
    #[must_use]
    pub fn object(capabilities: Capabilities) -> Self {
        Value::Object(CapabilityObject::new(capabilities))
    }

    #[must_use]
    pub const fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Primitive(Primitive::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Primitive(Primitive::Number(n)) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::Primitive(Primitive::BigInt(n)) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Primitive(Primitive::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Primitive(Primitive::Symbol(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_function(&self) -> Option<&Callable> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&CapabilityObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Primitive(Primitive::from(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<CapabilityObject> for Value {
    fn from(obj: CapabilityObject) -> Self {
        Value::Object(obj)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Value::Function(f)
    }
}
