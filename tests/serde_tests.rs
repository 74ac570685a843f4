#![cfg(feature = "serde")]

//! Integration tests for serde support.

use monadic::control::{Either, Just, Left, List, Maybe, Nothing, Optional, Outcome, Right};
use monadic::effect::Writer;
use monadic::list;
use monadic::typeclass::{Max, Sum, WithIdentity};
use rstest::rstest;

// =============================================================================
// Control Instances
// =============================================================================

#[rstest]
#[case(Just(42))]
#[case(Nothing)]
fn maybe_json_roundtrip(#[case] value: Maybe<i32>) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn either_json_roundtrip() {
    let values: Vec<Either<String, i32>> = vec![Left(String::from("error")), Right(7)];
    let json = serde_json::to_string(&values).unwrap();
    let restored: Vec<Either<String, i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}

#[rstest]
fn list_serializes_as_plain_array() {
    let values: List<i32> = list![1, 2, 3];
    assert_eq!(serde_json::to_string(&values).unwrap(), "[1,2,3]");
    let restored: List<i32> = serde_json::from_str("[4,5]").unwrap();
    assert_eq!(restored, list![4, 5]);
}

#[rstest]
fn alias_views_serialize_as_their_inner_value() {
    let optional = Optional::some(3);
    let outcome: Outcome<String, i32> = Outcome::result(3);
    assert_eq!(serde_json::to_string(&optional).unwrap(), serde_json::to_string(&Just(3)).unwrap());
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        serde_json::to_string(&Right::<String, i32>(3)).unwrap()
    );
}

// =============================================================================
// Writer and Monoids
// =============================================================================

#[rstest]
fn writer_json_roundtrip() {
    let writer = Writer::new(2, String::from("inc dbl "));
    let json = serde_json::to_string(&writer).unwrap();
    let restored: Writer<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, writer);
}

#[rstest]
fn numeric_wrappers_are_transparent() {
    assert_eq!(serde_json::to_string(&Sum(5)).unwrap(), "5");
    let restored: Max<u8> = serde_json::from_str("9").unwrap();
    assert_eq!(restored, Max(9));
}

#[rstest]
fn with_identity_roundtrip() {
    let values = vec![WithIdentity::Identity, WithIdentity::Value(Sum(3))];
    let json = serde_json::to_string(&values).unwrap();
    let restored: Vec<WithIdentity<Sum<i32>>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, values);
}
