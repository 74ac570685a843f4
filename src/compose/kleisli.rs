//! Kleisli composition.
//!
//! A Kleisli function has the shape `A -> M<B>` for some monad family `M`.
//! Two of them compose by binding the second over the result of the first:
//!
//! ```text
//! kleisli_compose(f, g)(a) == M::bind(f(a), g)
//! ```
//!
//! Composition is associative, and `M::insert` is its identity on both sides.

use std::rc::Rc;

use crate::typeclass::Monad;

/// Composes two Kleisli functions of the same family `M`, left to right.
///
/// The family cannot be inferred from the functions' return types, so it is
/// named with a turbofish.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::kleisli_compose;
/// use monadic::control::{Just, Maybe, MaybeFamily, Nothing};
///
/// let parse = |text: String| text.parse::<i32>().map_or(Nothing, Just);
/// let reciprocal = |value: i32| if value == 0 { Nothing } else { Just(100 / value) };
///
/// let pipeline = kleisli_compose::<MaybeFamily, _, _, _>(parse, reciprocal);
/// assert_eq!(pipeline(String::from("4")), Just(25));
/// assert_eq!(pipeline(String::from("0")), Nothing);
/// assert_eq!(pipeline(String::from("x")), Nothing);
/// ```
pub fn kleisli_compose<M, A, B, C>(
    first: impl Fn(A) -> M::Of<B> + 'static,
    second: impl Fn(B) -> M::Of<C> + 'static,
) -> impl Fn(A) -> M::Of<C> + 'static
where
    M: Monad,
    A: 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let second = Rc::new(second);
    move |argument: A| {
        let second = Rc::clone(&second);
        M::bind::<B, C, _>(first(argument), move |intermediate: B| second(intermediate))
    }
}
