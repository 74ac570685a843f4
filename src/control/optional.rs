//! Optional - `Maybe` rendered with the `Some` tag.
//!
//! `Optional<A>` owns a [`Maybe<A>`] and forwards every operation to it. Only
//! the textual rendering differs: `Some 9` instead of `Just 9`.
//!
//! ```rust
//! use monadic::control::Optional;
//!
//! let value = Optional::some(4).map(|x: i32| x * 2);
//! assert_eq!(value.to_string(), "Some 8");
//! assert_eq!(Optional::<i32>::nothing().to_string(), "Nothing");
//! ```

use std::fmt;

use super::maybe::{Just, Maybe, Nothing};
use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

/// A [`Maybe`] displayed as `Some <value>` / `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Optional<A>(Maybe<A>);

impl<A> Optional<A> {
    /// A present value.
    pub const fn some(value: A) -> Self {
        Self(Just(value))
    }

    /// No value.
    pub const fn nothing() -> Self {
        Self(Nothing)
    }

    /// Borrows the underlying `Maybe`.
    pub const fn as_maybe(&self) -> &Maybe<A> {
        &self.0
    }

    /// Returns the underlying `Maybe`.
    pub fn into_maybe(self) -> Maybe<A> {
        self.0
    }

    /// Returns `true` when a value is present.
    pub const fn is_some(&self) -> bool {
        self.0.is_just()
    }

    /// See [`Maybe::map`].
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        Optional(self.0.map(function))
    }

    /// See [`Maybe::bind`].
    pub fn bind<B, F>(self, continuation: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Optional(self.0.bind(|value| continuation(value).0))
    }

    /// See [`Maybe::then`].
    pub fn then<B, F>(self, step: F) -> Optional<B>
    where
        F: FnOnce(A) -> Continuation<Optional<B>, B>,
    {
        self.bind(|value| step(value).into_context(Optional::some))
    }

    /// See [`Maybe::try_map`].
    pub fn try_map<B, E, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        Optional(self.0.try_map(function))
    }

    /// See [`Maybe::maybe`].
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        self.0.maybe(default, function)
    }
}

impl<F> Optional<F> {
    /// See [`Maybe::amap`].
    pub fn amap<A, B>(self, argument: Optional<A>) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        Optional(self.0.amap(argument.0))
    }
}

impl<A> Optional<Optional<A>> {
    /// Flattens one level of nesting.
    pub fn join(self) -> Optional<A> {
        self.bind(|inner| inner)
    }
}

impl<A> From<Maybe<A>> for Optional<A> {
    fn from(maybe: Maybe<A>) -> Self {
        Self(maybe)
    }
}

impl<A> From<Option<A>> for Optional<A> {
    fn from(option: Option<A>) -> Self {
        Self(option.into())
    }
}

impl<A> From<Optional<A>> for Continuation<Optional<A>, A> {
    fn from(optional: Optional<A>) -> Self {
        Self::Wrapped(optional)
    }
}

impl<A: fmt::Display> fmt::Display for Optional<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Just(value) => write!(formatter, "Some {value}"),
            Nothing => formatter.write_str("Nothing"),
        }
    }
}

/// Family marker for [`Optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionalFamily;

impl Kind for OptionalFamily {
    type Of<A> = Optional<A>;
}

impl Functor for OptionalFamily {
    fn map<A, B, F>(value: Optional<A>, function: F) -> Optional<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for OptionalFamily {
    fn insert<A>(value: A) -> Optional<A>
    where
        A: Clone + 'static,
    {
        Optional::some(value)
    }

    fn amap<A, B, F>(functions: Optional<F>, values: Optional<A>) -> Optional<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl Monad for OptionalFamily {
    fn bind<A, B, F>(value: Optional<A>, continuation: F) -> Optional<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Optional<B> + 'static,
    {
        value.bind(continuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::some(9), "Some 9")]
    #[case(Optional::nothing(), "Nothing")]
    fn display_uses_some_tag(#[case] value: Optional<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn behaves_like_maybe() {
        let optional = Optional::some(10)
            .bind(|x| {
                if x > 5 {
                    Optional::some(x - 5)
                } else {
                    Optional::nothing()
                }
            })
            .map(|x| x * 3);
        let maybe = Just(10)
            .bind(|x| if x > 5 { Just(x - 5) } else { Nothing })
            .map(|x| x * 3);
        assert_eq!(optional.into_maybe(), maybe);
    }

    #[rstest]
    fn converts_from_standard_option() {
        assert!(Optional::from(Some('x')).is_some());
        assert_eq!(Optional::<char>::from(None), Optional::nothing());
    }

    #[rstest]
    fn then_flattens_wrapped_step() {
        let result = Optional::some(2).then(|x| Optional::some(x + 1).into());
        assert_eq!(result, Optional::some(3));
    }
}
