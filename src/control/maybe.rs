//! Maybe - an optional value.
//!
//! `Maybe<A>` is either `Just(value)` or `Nothing`. Every operation is the
//! identity on `Nothing`, so a chain stops contributing as soon as a step
//! produces no value.
//!
//! # Failures
//!
//! `map` and `bind` propagate failures: a panic in the supplied function
//! unwinds through the call like any other function call. Converting a
//! failure into absence is a separate, explicitly named operation,
//! [`Maybe::try_map`] / [`Maybe::try_bind`], whose functions return a
//! `Result` and whose `Err` becomes `Nothing`. Use
//! [`Either`](crate::control::Either) to keep the failure instead.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Just, Maybe, Nothing};
//!
//! assert_eq!(Just(7).map(|x: i32| -x), Just(-7));
//! assert_eq!(Nothing.map(|x: i32| -x), Nothing);
//!
//! let parsed: Maybe<u8> = Just("300").try_map(str::parse::<u8>);
//! assert_eq!(parsed, Nothing);
//!
//! assert_eq!(Just(9).to_string(), "Just 9");
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

pub use Maybe::{Just, Nothing};

/// An optional value: `Just(value)` or `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    #[default]
    Nothing,
}

impl<A> Maybe<A> {
    /// Lifts a value; the same as `Just(value)`.
    #[inline]
    pub const fn insert(value: A) -> Self {
        Just(value)
    }

    /// Returns `true` for `Just`.
    pub const fn is_just(&self) -> bool {
        matches!(self, Just(_))
    }

    /// Returns `true` for `Nothing`.
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Nothing)
    }

    /// Borrows the payload.
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Just(value) => Just(value),
            Nothing => Nothing,
        }
    }

    /// Applies `function` to the payload of a `Just`.
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Just(value) => Just(function(value)),
            Nothing => Nothing,
        }
    }

    /// Sequences a computation that may itself produce `Nothing`.
    pub fn bind<B, F>(self, continuation: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Just(value) => continuation(value),
            Nothing => Nothing,
        }
    }

    /// Sequences a step producing either a bare value or a `Maybe`.
    pub fn then<B, F>(self, step: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Continuation<Maybe<B>, B>,
    {
        self.bind(|value| step(value).into_context(Just))
    }

    /// Applies a fallible function, turning `Err` into `Nothing`.
    pub fn try_map<B, E, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Result<B, E>,
    {
        self.bind(|value| function(value).ok().into())
    }

    /// Sequences a fallible computation, turning `Err` into `Nothing`.
    pub fn try_bind<B, E, F>(self, continuation: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Result<Maybe<B>, E>,
    {
        self.bind(|value| continuation(value).unwrap_or(Nothing))
    }

    /// Eliminates the `Maybe`: `default` for `Nothing`, `function(value)`
    /// otherwise.
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Just(value) => function(value),
            Nothing => default,
        }
    }

    /// Returns the payload or `default`.
    pub fn unwrap_or(self, default: A) -> A {
        self.maybe(default, |value| value)
    }

    /// Converts into a standard `Option`.
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped argument; `Nothing` if either
    /// is absent.
    pub fn amap<A, B>(self, argument: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Just(function), Just(value)) => Just(function(value)),
            _ => Nothing,
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Flattens one level of nesting.
    pub fn join(self) -> Maybe<A> {
        self.bind(|inner| inner)
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Nothing, Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.maybe(None, Some)
    }
}

impl<A> From<Maybe<A>> for Continuation<Maybe<A>, A> {
    fn from(maybe: Maybe<A>) -> Self {
        Self::Wrapped(maybe)
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Just(value) => write!(formatter, "Just {value}"),
            Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`Maybe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaybeFamily;

impl Kind for MaybeFamily {
    type Of<A> = Maybe<A>;
}

impl Functor for MaybeFamily {
    fn map<A, B, F>(value: Maybe<A>, function: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for MaybeFamily {
    fn insert<A>(value: A) -> Maybe<A>
    where
        A: Clone + 'static,
    {
        Just(value)
    }

    fn amap<A, B, F>(functions: Maybe<F>, values: Maybe<A>) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl Monad for MaybeFamily {
    fn bind<A, B, F>(value: Maybe<A>, continuation: F) -> Maybe<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Maybe<B> + 'static,
    {
        value.bind(continuation)
    }
}
