//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cmp::Ordering;

use asod_types::{
    BoxError, Capabilities, CapabilityMethod, CapabilityObject, ProducerMethod, Value,
};

/// A 2x2 matrix that reports its own roles, the way a domain type would.
pub fn matrix(cells: [f64; 4]) -> Value {
    let zero = cells.iter().all(|c| *c == 0.0);
    let identity = cells == [1.0, 0.0, 0.0, 1.0];
    let trace = cells[0] + cells[3];

    let capabilities = Capabilities::new()
        .with_is_neutral(move || Ok(Value::from(zero)))
        .with_is_identity(move || Ok(Value::from(identity)))
        .with_is_falsy(move || Ok(Value::from(zero)))
        .with_producer(ProducerMethod::ToNeutral, || Ok(matrix([0.0; 4])))
        .with_producer(ProducerMethod::ToIdentity, || Ok(matrix([1.0, 0.0, 0.0, 1.0])))
        .with_compare(move |other| {
            Ok(other
                .as_object()
                .and_then(|obj| obj.field("trace"))
                .and_then(Value::as_number)
                .and_then(|theirs| trace.partial_cmp(&theirs)))
        });

    Value::from(CapabilityObject::new(capabilities).with_field("trace", trace))
}

/// An object whose `method` probe fails with `message`.
pub fn failing(method: CapabilityMethod, message: &'static str) -> Value {
    let fail = move || -> Result<Value, BoxError> { Err(message.into()) };
    let caps = Capabilities::new();
    let caps = match method {
        CapabilityMethod::Compare => caps.with_compare(move |_| Err(message.into())),
        CapabilityMethod::IsFalsy => caps.with_is_falsy(fail),
        CapabilityMethod::IsNeutral => caps.with_is_neutral(fail),
        CapabilityMethod::IsIdentity => caps.with_is_identity(fail),
        CapabilityMethod::ToFalsy => caps.with_producer(ProducerMethod::ToFalsy, fail),
        CapabilityMethod::ToNeutral => caps.with_producer(ProducerMethod::ToNeutral, fail),
        CapabilityMethod::ToIdentity => caps.with_producer(ProducerMethod::ToIdentity, fail),
        CapabilityMethod::Inverse => caps.with_producer(ProducerMethod::Inverse, fail),
        CapabilityMethod::Oppose => caps.with_producer(ProducerMethod::Oppose, fail),
    };
    Value::object(caps)
}

pub fn ordering_of(a: &Value, b: &Value) -> Option<Ordering> {
    asod_guards::as_comparable(a).and_then(|cmp| cmp.compare(b).ok().flatten())
}
