//! Outcome - `Either` rendered with the `Error` / `Result` tags.
//!
//! ```rust
//! use monadic::control::Outcome;
//!
//! let ok: Outcome<String, i32> = Outcome::result(9);
//! let failed: Outcome<String, i32> = Outcome::error(String::from("disk full"));
//! assert_eq!(ok.to_string(), "Result: 9");
//! assert_eq!(failed.to_string(), "Error: disk full");
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::either::{Either, Left, Right};
use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

/// An [`Either`] whose failure is called an error and whose success is
/// called a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Outcome<E, A>(Either<E, A>);

impl<E, A> Outcome<E, A> {
    /// A successful result.
    pub const fn result(value: A) -> Self {
        Self(Right(value))
    }

    /// A failed computation.
    pub const fn error(error: E) -> Self {
        Self(Left(error))
    }

    /// Borrows the underlying `Either`.
    pub const fn as_either(&self) -> &Either<E, A> {
        &self.0
    }

    /// Returns the underlying `Either`.
    pub fn into_either(self) -> Either<E, A> {
        self.0
    }

    /// Returns `true` for a failed computation.
    pub const fn is_error(&self) -> bool {
        self.0.is_left()
    }

    /// See [`Either::map`].
    pub fn map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Outcome(self.0.map(function))
    }

    /// See [`Either::bind`].
    pub fn bind<B, F>(self, continuation: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        Outcome(self.0.bind(|value| continuation(value).0))
    }

    /// See [`Either::then`].
    pub fn then<B, F>(self, step: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Continuation<Outcome<E, B>, B>,
    {
        self.bind(|value| step(value).into_context(Outcome::result))
    }

    /// See [`Either::try_map`].
    pub fn try_map<B, X, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Result<B, X>,
        E: From<X>,
    {
        Outcome(self.0.try_map(function))
    }

    /// See [`Either::either`].
    pub fn either<T, F, G>(self, on_error: F, on_result: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        self.0.either(on_error, on_result)
    }
}

impl<E, F> Outcome<E, F> {
    /// See [`Either::amap`].
    pub fn amap<A, B>(self, argument: Outcome<E, A>) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Outcome(self.0.amap(argument.0))
    }
}

impl<E, A> Outcome<E, Outcome<E, A>> {
    /// Flattens one level of nesting.
    pub fn join(self) -> Outcome<E, A> {
        self.bind(|inner| inner)
    }
}

impl<E, A> From<Either<E, A>> for Outcome<E, A> {
    fn from(either: Either<E, A>) -> Self {
        Self(either)
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    fn from(result: Result<A, E>) -> Self {
        Self(result.into())
    }
}

impl<E, A> From<Outcome<E, A>> for Continuation<Outcome<E, A>, A> {
    fn from(outcome: Outcome<E, A>) -> Self {
        Self::Wrapped(outcome)
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Outcome<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Left(error) => write!(formatter, "Error: {error}"),
            Right(value) => write!(formatter, "Result: {value}"),
        }
    }
}

/// Family marker for [`Outcome`] with a fixed error type `E`.
pub struct OutcomeFamily<E>(PhantomData<E>);

impl<E> Kind for OutcomeFamily<E> {
    type Of<A> = Outcome<E, A>;
}

impl<E: Clone + 'static> Functor for OutcomeFamily<E> {
    fn map<A, B, F>(value: Outcome<E, A>, function: F) -> Outcome<E, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<E: Clone + 'static> Applicative for OutcomeFamily<E> {
    fn insert<A>(value: A) -> Outcome<E, A>
    where
        A: Clone + 'static,
    {
        Outcome::result(value)
    }

    fn amap<A, B, F>(functions: Outcome<E, F>, values: Outcome<E, A>) -> Outcome<E, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl<E: Clone + 'static> Monad for OutcomeFamily<E> {
    fn bind<A, B, F>(value: Outcome<E, A>, continuation: F) -> Outcome<E, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Outcome<E, B> + 'static,
    {
        value.bind(continuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::result(9), "Result: 9")]
    #[case(Outcome::error(9), "Error: 9")]
    fn display_uses_error_and_result_tags(
        #[case] value: Outcome<i32, i32>,
        #[case] expected: &str,
    ) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn forwards_to_either() {
        let outcome: Outcome<String, i32> = Outcome::result(4)
            .bind(|x| {
                if x > 0 {
                    Outcome::result(x * 2)
                } else {
                    Outcome::error(String::from("zero"))
                }
            })
            .map(|x| x + 1);
        assert_eq!(outcome.into_either(), Right(9));
    }

    #[rstest]
    fn error_short_circuits_amap() {
        let function: Outcome<&str, fn(i32) -> i32> = Outcome::error("no function");
        let result = function.amap(Outcome::result(1));
        assert!(result.is_error());
    }
}
