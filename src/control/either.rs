//! Either - a success value or an explained failure.
//!
//! `Either<L, R>` is `Left(failure)` or `Right(value)`. Operations act on the
//! `Right` payload and leave a `Left` untouched, so the first failure in a
//! chain is the one that survives.
//!
//! Failures raised by a step are kept rather than dropped:
//! [`Either::try_map`] and [`Either::try_bind`] accept fallible functions and
//! convert their error into the `Left` payload through `From`, preserving the
//! failure's type.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Either, Left, Right};
//!
//! let x = 7;
//! let result: Either<&str, f64> = Right(x)
//!     .bind(|x| Right(x + 7))
//!     .bind(|y| if y == 0 { Left("boom") } else { Right(f64::from(x) / f64::from(y)) });
//! assert_eq!(result, Right(0.5));
//!
//! let description = result.either(|error| error.to_string(), |value| format!("ok {value}"));
//! assert_eq!(description, "ok 0.5");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

pub use Either::{Left, Right};

/// A value that is either a failure (`Left`) or a success (`Right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Lifts a value; the same as `Right(value)`.
    #[inline]
    pub const fn insert(value: R) -> Self {
        Right(value)
    }

    /// Returns `true` for `Left`.
    pub const fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    /// Returns `true` for `Right`.
    pub const fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// Returns the failure, if any.
    pub fn left(self) -> Option<L> {
        self.either(Some, |_| None)
    }

    /// Returns the success value, if any.
    pub fn right(self) -> Option<R> {
        self.either(|_| None, Some)
    }

    /// Applies `function` to a `Right` payload.
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Left(failure) => Left(failure),
            Right(value) => Right(function(value)),
        }
    }

    /// Applies `function` to a `Left` payload.
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Left(failure) => Left(function(failure)),
            Right(value) => Right(value),
        }
    }

    /// Sequences a computation that may fail.
    pub fn bind<T, F>(self, continuation: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Left(failure) => Left(failure),
            Right(value) => continuation(value),
        }
    }

    /// Sequences a step producing either a bare value or an `Either`.
    pub fn then<T, F>(self, step: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Continuation<Either<L, T>, T>,
    {
        self.bind(|value| step(value).into_context(Right))
    }

    /// Applies a fallible function; its error becomes the `Left` payload.
    pub fn try_map<T, E, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Result<T, E>,
        L: From<E>,
    {
        self.bind(|value| function(value).map_err(L::from).into())
    }

    /// Sequences a fallible computation; its error becomes the `Left` payload.
    pub fn try_bind<T, E, F>(self, continuation: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Result<Either<L, T>, E>,
        L: From<E>,
    {
        self.bind(|value| continuation(value).unwrap_or_else(|error| Left(L::from(error))))
    }

    /// Eliminates the `Either`, applying exactly one of the two functions.
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Left(failure) => on_left(failure),
            Right(value) => on_right(value),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// A `Left` becomes `Err` carrying the same value.
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<L, F> Either<L, F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// If both operands are `Left`, the function operand's failure wins.
    pub fn amap<R, T>(self, argument: Either<L, R>) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match (self, argument) {
            (Left(failure), _) | (Right(_), Left(failure)) => Left(failure),
            (Right(function), Right(value)) => Right(function(value)),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flattens one level of nesting.
    pub fn join(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Right(value),
            Err(failure) => Left(failure),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.either(Err, Ok)
    }
}

impl<L, R> From<Either<L, R>> for Continuation<Either<L, R>, R> {
    fn from(either: Either<L, R>) -> Self {
        Self::Wrapped(either)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Left(failure) => write!(formatter, "Left {failure}"),
            Right(value) => write!(formatter, "Right {value}"),
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`Either`] with a fixed failure type `L`.
pub struct EitherFamily<L>(PhantomData<L>);

impl<L> Kind for EitherFamily<L> {
    type Of<R> = Either<L, R>;
}

impl<L: Clone + 'static> Functor for EitherFamily<L> {
    fn map<A, B, F>(value: Either<L, A>, function: F) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<L: Clone + 'static> Applicative for EitherFamily<L> {
    fn insert<A>(value: A) -> Either<L, A>
    where
        A: Clone + 'static,
    {
        Right(value)
    }

    fn amap<A, B, F>(functions: Either<L, F>, values: Either<L, A>) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl<L: Clone + 'static> Monad for EitherFamily<L> {
    fn bind<A, B, F>(value: Either<L, A>, continuation: F) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Either<L, B> + 'static,
    {
        value.bind(continuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::num::ParseIntError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum InputError {
        NotANumber(String),
        Negative(i64),
    }

    impl From<ParseIntError> for InputError {
        fn from(error: ParseIntError) -> Self {
            Self::NotANumber(error.to_string())
        }
    }

    #[rstest]
    fn bind_chain_divides() {
        let x = 7;
        let result: Either<&str, f64> = Right(x)
            .bind(|x| Right(x + 7))
            .bind(|y: i32| {
                if y == 0 {
                    Left("boom")
                } else {
                    Right(f64::from(x) / f64::from(y))
                }
            });
        assert_eq!(result, Right(0.5));
    }

    #[rstest]
    fn bind_does_not_call_continuation_on_left() {
        let failed: Either<&str, i32> = Left("early");
        let result = failed.bind(|_| -> Either<&str, i32> { panic!("must not run") });
        assert_eq!(result, Left("early"));
    }

    #[rstest]
    fn try_map_preserves_failure_type() {
        let parsed: Either<InputError, i64> = Right("12x").try_map(str::parse::<i64>);
        assert!(matches!(parsed, Left(InputError::NotANumber(_))));
    }

    #[rstest]
    fn try_bind_converts_error() {
        let non_negative = |value: i64| -> Result<Either<InputError, i64>, InputError> {
            if value < 0 {
                Err(InputError::Negative(value))
            } else {
                Ok(Right(value))
            }
        };
        let accepted: Either<InputError, i64> = Right(3).try_bind(non_negative);
        let rejected: Either<InputError, i64> = Right(-3).try_bind(non_negative);
        assert_eq!(accepted, Right(3));
        assert_eq!(rejected, Left(InputError::Negative(-3)));
    }

    #[rstest]
    #[case(Left("function"), Left("argument"), Left("function"))]
    #[case(Right(2), Left("argument"), Left("argument"))]
    #[case(Left("function"), Right(5), Left("function"))]
    #[case(Right(2), Right(5), Right(7))]
    fn amap_gives_function_failure_precedence(
        #[case] addend: Either<&'static str, i32>,
        #[case] argument: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        let function = addend.map(|a| move |b: i32| a + b);
        assert_eq!(function.amap(argument), expected);
    }

    #[rstest]
    #[case(Right(9), "Right 9")]
    #[case(Left(9), "Left 9")]
    fn display_uses_variant_tag(#[case] value: Either<i32, i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn either_applies_exactly_one_function() {
        let left: Either<i32, i32> = Left(2);
        let right: Either<i32, i32> = Right(2);
        assert_eq!(left.either(|l| l * 100, |r| r), 200);
        assert_eq!(right.either(|l| l * 100, |r| r), 2);
    }

    #[rstest]
    fn result_round_trip() {
        let from_result: Either<String, u8> = Ok(4).into();
        assert_eq!(from_result, Right(4));
        assert_eq!(from_result.into_result(), Ok(4));
        assert_eq!(Either::<&str, u8>::Left("e").left(), Some("e"));
        assert_eq!(Either::<&str, u8>::Left("e").right(), None);
    }
}
