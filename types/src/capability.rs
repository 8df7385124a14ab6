//! Capability objects and their optional protocol methods.
//!
//! A value reports its own algebraic role by carrying one of a fixed set of
//! methods. Each method is an explicit optional slot on [`Capabilities`];
//! presence of the slot is the only signal classification uses.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{BoxError, Value};

/// Names of the capability protocol methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CapabilityMethod {
    Compare,
    IsFalsy,
    ToFalsy,
    IsNeutral,
    ToNeutral,
    IsIdentity,
    ToIdentity,
    Inverse,
    Oppose,
}

impl CapabilityMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CapabilityMethod::Compare => "compare",
            CapabilityMethod::IsFalsy => "isFalsy",
            CapabilityMethod::ToFalsy => "toFalsy",
            CapabilityMethod::IsNeutral => "isNeutral",
            CapabilityMethod::ToNeutral => "toNeutral",
            CapabilityMethod::IsIdentity => "isIdentity",
            CapabilityMethod::ToIdentity => "toIdentity",
            CapabilityMethod::Inverse => "inverse",
            CapabilityMethod::Oppose => "oppose",
        }
    }

    /// Parse a protocol method from its exact (case-sensitive) name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|method| method.as_str() == s)
    }

    #[must_use]
    pub const fn all() -> &'static [CapabilityMethod] {
        &[
            CapabilityMethod::Compare,
            CapabilityMethod::IsFalsy,
            CapabilityMethod::ToFalsy,
            CapabilityMethod::IsNeutral,
            CapabilityMethod::ToNeutral,
            CapabilityMethod::IsIdentity,
            CapabilityMethod::ToIdentity,
            CapabilityMethod::Inverse,
            CapabilityMethod::Oppose,
        ]
    }
}

impl fmt::Display for CapabilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The protocol methods that yield a related value instead of a verdict.
///
/// Only these fill a [`Producer`] slot, so handing a `compare` or `is*`
/// method to [`Capabilities::with_producer`] does not type-check:
///
/// ```compile_fail
/// use asod_types::{Capabilities, CapabilityMethod, Value};
///
/// let caps = Capabilities::new()
///     .with_producer(CapabilityMethod::IsNeutral, || Ok(Value::null()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProducerMethod {
    ToFalsy,
    ToNeutral,
    ToIdentity,
    Inverse,
    Oppose,
}

impl ProducerMethod {
    #[must_use]
    pub const fn method(self) -> CapabilityMethod {
        match self {
            ProducerMethod::ToFalsy => CapabilityMethod::ToFalsy,
            ProducerMethod::ToNeutral => CapabilityMethod::ToNeutral,
            ProducerMethod::ToIdentity => CapabilityMethod::ToIdentity,
            ProducerMethod::Inverse => CapabilityMethod::Inverse,
            ProducerMethod::Oppose => CapabilityMethod::Oppose,
        }
    }

    /// The producer behind `method`, or `None` for `compare` and the `is*` probes.
    #[must_use]
    pub const fn from_method(method: CapabilityMethod) -> Option<Self> {
        match method {
            CapabilityMethod::ToFalsy => Some(ProducerMethod::ToFalsy),
            CapabilityMethod::ToNeutral => Some(ProducerMethod::ToNeutral),
            CapabilityMethod::ToIdentity => Some(ProducerMethod::ToIdentity),
            CapabilityMethod::Inverse => Some(ProducerMethod::Inverse),
            CapabilityMethod::Oppose => Some(ProducerMethod::Oppose),
            CapabilityMethod::Compare
            | CapabilityMethod::IsFalsy
            | CapabilityMethod::IsNeutral
            | CapabilityMethod::IsIdentity => None,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [ProducerMethod] {
        &[
            ProducerMethod::ToFalsy,
            ProducerMethod::ToNeutral,
            ProducerMethod::ToIdentity,
            ProducerMethod::Inverse,
            ProducerMethod::Oppose,
        ]
    }
}

impl From<ProducerMethod> for CapabilityMethod {
    fn from(method: ProducerMethod) -> Self {
        method.method()
    }
}

impl fmt::Display for ProducerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method().as_str())
    }
}

type CompareFn = dyn Fn(&Value) -> Result<Option<Ordering>, BoxError> + Send + Sync;
type ThunkFn = dyn Fn() -> Result<Value, BoxError> + Send + Sync;

/// The `compare` slot: orders the receiver against one other operand.
///
/// The closure takes exactly one parameter, so a parameterless stub that
/// would satisfy presence without being usable cannot be stored here.
/// `Ok(None)` means the two operands are unordered.
///
/// ```
/// use std::cmp::Ordering;
/// use asod_types::{Comparator, Value};
///
/// let cmp = Comparator::new(|other: &Value| {
///     Ok(other.as_number().and_then(|n| 0.0_f64.partial_cmp(&n)))
/// });
/// assert_eq!(cmp.compare(&Value::from(1)).unwrap(), Some(Ordering::Less));
/// ```
///
/// ```compile_fail
/// use asod_types::Comparator;
///
/// let stub = Comparator::new(|| Ok(None));
/// ```
#[derive(Clone)]
pub struct Comparator(Arc<CompareFn>);

impl Comparator {
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&Value) -> Result<Option<Ordering>, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(compare))
    }

    pub fn compare(&self, other: &Value) -> Result<Option<Ordering>, BoxError> {
        (self.0)(other)
    }
}

/// An `is*` slot. The returned value is read with native truthiness.
#[derive(Clone)]
pub struct Probe(Arc<ThunkFn>);

impl Probe {
    pub fn new<F>(probe: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(probe))
    }

    pub fn call(&self) -> Result<Value, BoxError> {
        (self.0)()
    }
}

/// A `to*`, `inverse` or `oppose` slot: yields a related value.
#[derive(Clone)]
pub struct Producer(Arc<ThunkFn>);

impl Producer {
    pub fn new<F>(produce: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(produce))
    }

    pub fn call(&self) -> Result<Value, BoxError> {
        (self.0)()
    }
}

/// Optional protocol methods exposed by a capability object.
///
/// No slot is required. An empty `Capabilities` describes a plain object.
#[derive(Clone, Default)]
pub struct Capabilities {
    compare: Option<Comparator>,
    is_falsy: Option<Probe>,
    to_falsy: Option<Producer>,
    is_neutral: Option<Probe>,
    to_neutral: Option<Producer>,
    is_identity: Option<Probe>,
    to_identity: Option<Producer>,
    inverse: Option<Producer>,
    oppose: Option<Producer>,
}

impl Capabilities {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compare<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Value) -> Result<Option<Ordering>, BoxError> + Send + Sync + 'static,
    {
        self.compare = Some(Comparator::new(compare));
        self
    }

    pub fn with_is_falsy<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.is_falsy = Some(Probe::new(probe));
        self
    }

    pub fn with_is_neutral<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.is_neutral = Some(Probe::new(probe));
        self
    }

    pub fn with_is_identity<F>(mut self, probe: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.is_identity = Some(Probe::new(probe));
        self
    }

    /// Attach a `to*`, `inverse` or `oppose` producer.
    pub fn with_producer<F>(mut self, method: ProducerMethod, produce: F) -> Self
    where
        F: Fn() -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        let slot = match method {
            ProducerMethod::ToFalsy => &mut self.to_falsy,
            ProducerMethod::ToNeutral => &mut self.to_neutral,
            ProducerMethod::ToIdentity => &mut self.to_identity,
            ProducerMethod::Inverse => &mut self.inverse,
            ProducerMethod::Oppose => &mut self.oppose,
        };
        *slot = Some(Producer::new(produce));
        self
    }

    #[must_use]
    pub fn comparator(&self) -> Option<&Comparator> {
        self.compare.as_ref()
    }

    /// The `is*` slot for `method`, if the method is a probe and is present.
    #[must_use]
    pub fn probe(&self, method: CapabilityMethod) -> Option<&Probe> {
        match method {
            CapabilityMethod::IsFalsy => self.is_falsy.as_ref(),
            CapabilityMethod::IsNeutral => self.is_neutral.as_ref(),
            CapabilityMethod::IsIdentity => self.is_identity.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn producer(&self, method: ProducerMethod) -> Option<&Producer> {
        match method {
            ProducerMethod::ToFalsy => self.to_falsy.as_ref(),
            ProducerMethod::ToNeutral => self.to_neutral.as_ref(),
            ProducerMethod::ToIdentity => self.to_identity.as_ref(),
            ProducerMethod::Inverse => self.inverse.as_ref(),
            ProducerMethod::Oppose => self.oppose.as_ref(),
        }
    }

    #[must_use]
    pub fn has(&self, method: CapabilityMethod) -> bool {
        match method {
            CapabilityMethod::Compare => self.compare.is_some(),
            CapabilityMethod::IsFalsy
            | CapabilityMethod::IsNeutral
            | CapabilityMethod::IsIdentity => self.probe(method).is_some(),
            CapabilityMethod::ToFalsy
            | CapabilityMethod::ToNeutral
            | CapabilityMethod::ToIdentity
            | CapabilityMethod::Inverse
            | CapabilityMethod::Oppose => {
                ProducerMethod::from_method(method).and_then(|p| self.producer(p)).is_some()
            }
        }
    }

    /// Present methods, in protocol order.
    #[must_use]
    pub fn methods(&self) -> Vec<CapabilityMethod> {
        CapabilityMethod::all()
            .iter()
            .copied()
            .filter(|method| self.has(*method))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods().is_empty()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.methods()).finish()
    }
}

/// An object-like value: plain data fields plus optional capability slots.
///
/// Capability lookup only ever consults [`Capabilities`]. A data field named
/// after a protocol method is just data.
#[derive(Debug, Clone, Default)]
pub struct CapabilityObject {
    fields: BTreeMap<String, Value>,
    capabilities: Capabilities,
}

impl CapabilityObject {
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            fields: BTreeMap::new(),
            capabilities,
        }
    }

    /// An object with no capability methods.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

impl From<Capabilities> for CapabilityObject {
    fn from(capabilities: Capabilities) -> Self {
        Self::new(capabilities)
    }
}
