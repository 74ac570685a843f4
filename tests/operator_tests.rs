//! Integration tests for the infix operator sugar.

#![cfg(feature = "operators")]

use monadic::control::{Either, Just, Left, List, Maybe, Nothing, Optional, Right};
use monadic::effect::{IO, Reader, State, Writer};
use monadic::list;
use monadic::typeclass::{Min, Product, Sum};
use rstest::rstest;

fn safe_root(value: f64) -> Maybe<f64> {
    if value < 0.0 {
        Nothing
    } else {
        Just(value.sqrt())
    }
}

// =============================================================================
// Map / Bind / Amap
// =============================================================================

#[rstest]
#[case(Just(16.0), Just(5.0))]
#[case(Just(-1.0), Nothing)]
#[case(Nothing, Nothing)]
fn maybe_bind_then_map(#[case] input: Maybe<f64>, #[case] expected: Maybe<f64>) {
    assert_eq!((input >> safe_root) | (|x: f64| x + 1.0), expected);
}

#[rstest]
fn optional_map_operator() {
    assert_eq!(Optional::some(2) | (|x: i32| x * 3), Optional::some(6));
}

#[rstest]
fn either_amap_operator_keeps_first_failure() {
    let function: Either<&str, fn(i32) -> i32> = Left("no function");
    let argument: Either<&str, i32> = Left("no argument");
    assert_eq!(function & argument, Left("no function"));
    assert_eq!(Right::<&str, _>(|x: i32| x + 1) & Right(1), Right(2));
}

#[rstest]
fn list_operators_build_cross_product() {
    let pairs = list![1, 2] >> (|x: i32| list![(x, 'a'), (x, 'b')]);
    assert_eq!(pairs, list![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    let functions: List<fn(i32) -> i32> = list![(|x: i32| x + 1) as fn(i32) -> i32];
    assert_eq!(functions & list![1, 2], list![2, 3]);
}

#[rstest]
fn deferred_operators_compose_before_running() {
    let reader = (Reader::new(|e: i32| e + 1) >> (|x: i32| Reader::new(move |e: i32| x * e)))
        | (|x: i32| x - 1);
    assert_eq!(reader.run(3), 11);

    let state = State::new(|s: i32| (s * 2, s)) | (|x: i32| x + 1);
    assert_eq!(state.run(4), (9, 4));

    let io = (IO::new(|| 20) | (|x: i32| x + 1)) >> (|x: i32| IO::insert(x * 2));
    assert_eq!(io.run(), 42);
}

#[rstest]
fn writer_operators_combine_logs() {
    let step = |x: i32| Writer::new(x + 1, list!["step"]);
    let logged = (Writer::new(0, list!["start"]) >> step) >> step;
    assert_eq!(logged.run(), (2, list!["start", "step", "step"]));
}

// =============================================================================
// Monoid Addition
// =============================================================================

#[rstest]
fn add_combines_monoids() {
    assert_eq!(Sum(1) + Sum(2) + Sum(3), Sum(6));
    assert_eq!(Product(2) + Product(5), Product(10));
    assert_eq!(Min('q') + Min('c'), Min('c'));
    assert_eq!(list![1] + List::empty() + list![2], list![1, 2]);
}

#[cfg(feature = "promise")]
#[rstest]
fn promise_operators_stay_deferred() {
    use monadic::effect::Promise;

    let promise = (Promise::resolved(3) | (|x: i32| x + 1)) >> (|x: i32| Promise::resolved(x * 2));
    assert_eq!(promise.block_on(), Ok(8));
}
