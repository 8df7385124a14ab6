//! JSON notation decoding through the classifiers

use asod_cli::notation::{NotationError, parse};
use asod_guards::{
    is_array_of, is_comparable_operand, is_falsy, is_falsy_operand, is_function,
    is_identity_operand, is_neutral_operand, is_number, is_object, is_primitive,
};

#[test]
fn decoded_primitives_classify_like_natives() {
    assert!(is_falsy(&parse("0").unwrap()));
    assert!(is_falsy(&parse(r#"{"$number": "NaN"}"#).unwrap()));
    assert!(is_falsy(&parse(r#""""#).unwrap()));
    assert!(!is_falsy(&parse(r#""a""#).unwrap()));
    assert!(is_neutral_operand(&parse(r#"{"$bigint": "0"}"#).unwrap()).unwrap());
    assert!(is_identity_operand(&parse(r#"{"$bigint": "1"}"#).unwrap()).unwrap());
    assert!(is_primitive(&parse(r#"{"$symbol": null}"#).unwrap()));
}

#[test]
fn decoded_arrays() {
    assert!(is_array_of(&parse("[1, 2, 3]").unwrap(), is_number));
    assert!(!is_array_of(&parse(r#"[1, "a"]"#).unwrap(), is_number));
    assert!(is_object(&parse("[]").unwrap()));
}

#[test]
fn decoded_functions_are_not_objects() {
    let f = parse(r#"{"$function": 1}"#).unwrap();
    assert!(is_function(&f));
    assert!(!is_object(&f));
    assert!(!is_comparable_operand(&f));
}

#[test]
fn decoded_capability_objects() {
    assert!(is_comparable_operand(&parse(r#"{"compare": 0}"#).unwrap()));
    assert!(!is_comparable_operand(&parse("{}").unwrap()));
    assert!(is_falsy_operand(&parse(r#"{"isFalsy": true}"#).unwrap()).unwrap());
    assert!(!is_falsy_operand(&parse(r#"{"isFalsy": false}"#).unwrap()).unwrap());
    assert!(!is_falsy_operand(&parse("{}").unwrap()).unwrap());
    assert!(is_neutral_operand(&parse(r#"{"isNeutral": 1}"#).unwrap()).unwrap());
}

#[test]
fn decoded_throw_propagates() {
    let v = parse(r#"{"isNeutral": {"$throw": "x"}}"#).unwrap();
    let err = is_neutral_operand(&v).unwrap_err();
    assert_eq!(err.to_string(), "x");
}

#[test]
fn malformed_input_is_a_notation_error() {
    assert!(matches!(parse("not json"), Err(NotationError::Json(_))));
    assert!(matches!(parse(r#"{"$bigint": true}"#), Err(NotationError::InvalidBigInt(_))));
}
