//! Operand role tests over a self-describing domain type

use std::cmp::Ordering;

use asod_guards::{
    is_comparable_operand, is_falsy_operand, is_identity_operand, is_neutral_operand,
};
use asod_types::{BigInt, CapabilityMethod, ProducerMethod, Value};

use crate::common::{failing, matrix, ordering_of};

#[test]
fn matrix_reports_its_own_roles() {
    let zero = matrix([0.0; 4]);
    let one = matrix([1.0, 0.0, 0.0, 1.0]);
    let other = matrix([2.0, 1.0, 0.0, 3.0]);

    assert!(is_neutral_operand(&zero).unwrap());
    assert!(!is_identity_operand(&zero).unwrap());
    assert!(is_falsy_operand(&zero).unwrap());

    assert!(is_identity_operand(&one).unwrap());
    assert!(!is_neutral_operand(&one).unwrap());

    assert!(!is_neutral_operand(&other).unwrap());
    assert!(!is_identity_operand(&other).unwrap());
    assert!(!is_falsy_operand(&other).unwrap());
}

#[test]
fn matrix_is_comparable_by_trace() {
    let one = matrix([1.0, 0.0, 0.0, 1.0]);
    let other = matrix([2.0, 1.0, 0.0, 3.0]);

    assert!(is_comparable_operand(&one));
    assert_eq!(ordering_of(&one, &other), Some(Ordering::Less));
    assert_eq!(ordering_of(&other, &one), Some(Ordering::Greater));
    assert_eq!(ordering_of(&one, &Value::from(2)), None);
}

#[test]
fn produced_neutral_is_neutral() {
    let m = matrix([5.0, 0.0, 0.0, 5.0]);
    let produced = m
        .as_object()
        .unwrap()
        .capabilities()
        .producer(ProducerMethod::ToNeutral)
        .unwrap()
        .call()
        .unwrap();
    assert!(is_neutral_operand(&produced).unwrap());
}

#[test]
fn primitive_roles_match_operator_families() {
    // additive: 0, 0n, ""
    assert!(is_neutral_operand(&Value::from(0)).unwrap());
    assert!(is_neutral_operand(&Value::from(BigInt::from(0))).unwrap());
    assert!(is_neutral_operand(&Value::from("")).unwrap());
    // multiplicative: 1, 1n
    assert!(is_identity_operand(&Value::from(1)).unwrap());
    assert!(is_identity_operand(&Value::from(BigInt::from(1))).unwrap());
    // asymmetries kept as-is
    assert!(!is_neutral_operand(&Value::from(false)).unwrap());
    assert!(!is_identity_operand(&Value::from("")).unwrap());
    assert!(!is_neutral_operand(&Value::from(1)).unwrap());
}

#[test]
fn capability_errors_surface_unchanged() {
    let err = is_neutral_operand(&failing(CapabilityMethod::IsNeutral, "x")).unwrap_err();
    assert_eq!(err.to_string(), "x");

    let err = is_falsy_operand(&failing(CapabilityMethod::IsFalsy, "falsy")).unwrap_err();
    assert_eq!(err.method(), CapabilityMethod::IsFalsy);

    let err = is_identity_operand(&failing(CapabilityMethod::IsIdentity, "id")).unwrap_err();
    assert_eq!(err.into_source().to_string(), "id");
}

#[test]
fn unrelated_failing_methods_are_not_invoked() {
    let v = failing(CapabilityMethod::IsNeutral, "never");
    assert!(!is_identity_operand(&v).unwrap());
    assert!(!is_falsy_operand(&v).unwrap());
    assert!(!is_comparable_operand(&v));

    let v = failing(CapabilityMethod::Compare, "never");
    assert!(is_comparable_operand(&v));
    assert!(!is_neutral_operand(&v).unwrap());
}
