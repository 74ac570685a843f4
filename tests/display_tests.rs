//! Integration tests for Display implementations.
//!
//! Data instances render their contents; function-carrying instances render
//! a fixed tag because their payload only exists once they are run.

use monadic::control::{Either, Just, Left, List, Maybe, Nothing, Optional, Outcome, Right};
use monadic::effect::{Compose, IO, Pipe, Reader, State, Writer};
use monadic::list;
use monadic::typeclass::{Max, Sum};
use rstest::rstest;

// =============================================================================
// Control Module Display Tests
// =============================================================================

#[rstest]
#[case(Just(7), "Just 7")]
#[case(Nothing, "Nothing")]
fn maybe_display(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
#[case(Right(7), "Right 7")]
#[case(Left(String::from("boom")), "Left boom")]
fn either_display(#[case] value: Either<String, i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[rstest]
fn alias_views_use_their_own_tags() {
    assert_eq!(Optional::some(3).to_string(), "Some 3");
    assert_eq!(Optional::<i32>::nothing().to_string(), "Nothing");
    assert_eq!(Outcome::<String, i32>::result(3).to_string(), "Result: 3");
    assert_eq!(Outcome::<&str, i32>::error("bad input").to_string(), "Error: bad input");
}

#[rstest]
fn list_display_is_bracketed_and_comma_joined() {
    assert_eq!(list![1, 2, 3].to_string(), "[1, 2, 3]");
    assert_eq!(List::<i32>::empty().to_string(), "[]");
}

// =============================================================================
// Effect Module Display Tests
// =============================================================================

#[rstest]
fn writer_display_is_value_then_log() {
    assert_eq!(Writer::new(2, String::from("inc dbl ")).to_string(), "(2, inc dbl )");
    assert_eq!(Writer::new("x", Sum(5_i64)).to_string(), "(x, 5)");
    assert_eq!(Writer::new(1, Max(9)).to_string(), "(1, 9)");
}

#[rstest]
fn function_carriers_display_a_tag() {
    assert_eq!(Reader::new(|e: i32| e).to_string(), "<Reader>");
    assert_eq!(State::new(|s: i32| (s, s)).to_string(), "<State>");
    assert_eq!(IO::new(|| 1).to_string(), "<IO>");
    assert_eq!(Compose::new(|x: i32| x).to_string(), "<Compose>");
    assert_eq!(Pipe::new(1).to_string(), "<Pipe>");
}

#[cfg(feature = "promise")]
#[rstest]
fn promise_displays_a_tag() {
    assert_eq!(monadic::effect::Promise::resolved(1).to_string(), "<Promise>");
}
