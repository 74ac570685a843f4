//! Functor type class - mapping over a context.
//!
//! A functor transforms the payload of a context while leaving the context
//! itself untouched: a `Nothing` stays `Nothing`, a list keeps its length, a
//! writer keeps its log, a state computation keeps threading its state.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::map(value, |x| x) == value
//! ```
//!
//! ## Composition
//!
//! ```text
//! F::map(F::map(value, f), g) == F::map(value, |x| g(f(x)))
//! ```

use super::higher::Kind;

/// A type class for contexts that support mapping over their payload.
///
/// Implemented on family markers (see [`Kind`]). Payloads must be
/// `Clone + 'static` and functions `Fn + 'static` so that the same signature
/// fits eager instances (`Maybe`, `List`) and deferred ones (`Reader`,
/// `State`, `Promise`), which store the function and may call it on every run.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Functor;
/// use monadic::control::ListFamily;
/// use monadic::list;
///
/// let lengths = ListFamily::map(list!["a", "bb", "ccc"], str::len);
/// assert_eq!(lengths, list![1, 2, 3]);
/// ```
pub trait Functor: Kind {
    /// Applies `function` to the payload, preserving the context.
    ///
    /// The function is invoked at most once per payload element.
    fn map<A, B, F>(value: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static;

    /// Replaces every payload with `replacement`.
    fn replace<A, B>(value: Self::Of<A>, replacement: B) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map::<A, B, _>(value, move |_| replacement.clone())
    }

    /// Discards the payload, keeping only the context.
    fn void<A>(value: Self::Of<A>) -> Self::Of<()>
    where
        A: Clone + 'static,
    {
        Self::replace::<A, ()>(value, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Just, MaybeFamily, Nothing};
    use rstest::rstest;

    #[rstest]
    fn replace_keeps_context() {
        assert_eq!(MaybeFamily::replace(Just(1), "x"), Just("x"));
        assert_eq!(MaybeFamily::replace(Nothing::<i32>, "x"), Nothing);
    }

    #[rstest]
    fn void_discards_payload() {
        assert_eq!(MaybeFamily::void(Just(5)), Just(()));
    }
}
