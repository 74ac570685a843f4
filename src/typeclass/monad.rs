//! Monad type class - dependent sequencing of computations.
//!
//! A monad extends [`Applicative`] with `bind`, where each step may inspect the
//! previous payload and choose the next computation. Every instance decides
//! how contexts merge: `Maybe` and `Either` short-circuit, `List` concatenates
//! the branches, `Writer` appends logs, `State` threads its state, `Reader`
//! hands the same environment to both steps, and `Promise` defers the chain.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::bind(M::insert(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! M::bind(m, M::insert) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! M::bind(M::bind(m, f), g) == M::bind(m, |x| M::bind(f(x), g))
//! ```
//!
//! # Mixed Steps
//!
//! [`Monad::then`] accepts steps that either produce a bare value or a new
//! context. The step says which one it produced through [`Continuation`], so
//! the choice between `insert` and flattening is made by pattern matching:
//!
//! ```rust
//! use monadic::typeclass::{Continuation, Monad};
//! use monadic::control::{Just, MaybeFamily, Nothing};
//!
//! let halved = MaybeFamily::then(Just(10), |x: i32| {
//!     if x % 2 == 0 {
//!         Continuation::Plain(x / 2)
//!     } else {
//!         Continuation::Wrapped(Nothing)
//!     }
//! });
//! assert_eq!(halved, Just(5));
//! ```

use super::applicative::Applicative;

/// The result of a step passed to `then`.
///
/// `Plain` carries a bare value that is lifted with `insert`; `Wrapped`
/// carries a context of the same family that is flattened into the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continuation<M, A> {
    /// A bare value, produced by a plain transformation.
    Plain(A),
    /// A context of the same family, produced by a Kleisli step.
    Wrapped(M),
}

impl<M, A> Continuation<M, A> {
    /// Resolves the continuation into a context, lifting a plain value with
    /// `insert`.
    pub fn into_context(self, insert: impl FnOnce(A) -> M) -> M {
        match self {
            Self::Plain(value) => insert(value),
            Self::Wrapped(context) => context,
        }
    }

    /// Returns `true` if the step produced a context.
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }
}

/// A type class for applicatives supporting dependent sequencing.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Monad;
/// use monadic::control::{EitherFamily, Left, Right};
///
/// let checked = EitherFamily::<String>::bind(Right(7), |x: i32| {
///     if x > 0 { Right(x * 2) } else { Left(String::from("negative")) }
/// });
/// assert_eq!(checked, Right(14));
/// ```
pub trait Monad: Applicative {
    /// Sequences a dependent computation.
    fn bind<A, B, F>(value: Self::Of<A>, continuation: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Self::Of<B> + 'static;

    /// Sequences a step that produces either a bare value or a context.
    fn then<A, B, F>(value: Self::Of<A>, step: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Continuation<Self::Of<B>, B> + 'static,
    {
        Self::bind::<A, B, _>(value, move |a: A| step(a).into_context(Self::insert))
    }

    /// Flattens one level of nesting.
    fn join<A>(nested: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: Clone + 'static,
        Self::Of<A>: Clone + 'static,
    {
        Self::bind::<Self::Of<A>, A, _>(nested, |inner| inner)
    }

    /// Sequences two contexts, keeping only the second payload.
    fn followed_by<A, B>(first: Self::Of<A>, second: Self::Of<B>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Self::Of<B>: Clone + 'static,
    {
        Self::bind::<A, B, _>(first, move |_| second.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Just, List, ListFamily, Maybe, MaybeFamily, Nothing};
    use crate::list;
    use crate::typeclass::Functor;
    use rstest::rstest;

    #[rstest]
    fn join_flattens_one_level() {
        assert_eq!(MaybeFamily::join(Just(Just(3))), Just(3));
        assert_eq!(MaybeFamily::join(Just(Nothing::<i32>)), Nothing);
        assert_eq!(MaybeFamily::join(Nothing::<Maybe<i32>>), Nothing);
    }

    #[rstest]
    fn join_twice_flattens_doubly_nested() {
        let nested: List<List<List<i32>>> = list![list![list![1], list![2, 3]], list![list![4]]];
        let outer_first = ListFamily::join(ListFamily::join(nested.clone()));
        let inner_first = ListFamily::join(ListFamily::map(nested, ListFamily::join));
        assert_eq!(outer_first, list![1, 2, 3, 4]);
        assert_eq!(outer_first, inner_first);
    }

    #[rstest]
    fn then_lifts_plain_values() {
        let result = ListFamily::then(list![1, 2], |x: i32| Continuation::Plain(x * 10));
        assert_eq!(result, list![10, 20]);
    }

    #[rstest]
    fn then_flattens_wrapped_values() {
        let result = ListFamily::then(list![1, 2], |x: i32| Continuation::Wrapped(list![x, -x]));
        assert_eq!(result, list![1, -1, 2, -2]);
    }

    #[rstest]
    fn followed_by_discards_first_payload() {
        assert_eq!(MaybeFamily::followed_by(Just(1), Just("b")), Just("b"));
        assert_eq!(MaybeFamily::followed_by(Nothing::<i32>, Just("b")), Nothing);
    }

    #[rstest]
    fn into_context_uses_insert_for_plain() {
        let plain: Continuation<Maybe<i32>, i32> = Continuation::Plain(4);
        assert!(!plain.is_wrapped());
        assert_eq!(plain.into_context(Just), Just(4));
    }
}
