//! Applicative type class - lifting values and applying wrapped functions.
//!
//! An applicative functor adds two operations to [`Functor`]:
//!
//! - `insert`: lift a bare value into the minimal context.
//! - `amap`: apply a wrapped function to a wrapped argument, combining both
//!   contexts (short-circuit, cross-product, log concatenation, state
//!   threading, concurrent awaiting) according to the instance.
//!
//! `map2`, `map3` and `product` are derived from those two and provide
//! multi-argument lifting.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! F::amap(F::insert(|x| x), v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! F::amap(F::insert(f), F::insert(x)) == F::insert(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! F::amap(u, F::insert(y)) == F::amap(F::insert(|f| f(y)), u)
//! ```
//!
//! ## Composition
//!
//! ```text
//! F::amap(F::amap(F::amap(F::insert(compose), u), v), w) == F::amap(u, F::amap(v, w))
//! ```

use std::rc::Rc;

use super::functor::Functor;

/// A type class for functors that can lift values and apply wrapped functions.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::Applicative;
/// use monadic::control::{Just, MaybeFamily, Nothing};
///
/// let sum = MaybeFamily::map2(Just(2), Just(3), |a, b| a + b);
/// assert_eq!(sum, Just(5));
///
/// let missing = MaybeFamily::map2(Just(2), Nothing, |a: i32, b: i32| a + b);
/// assert_eq!(missing, Nothing);
/// ```
pub trait Applicative: Functor {
    /// Lifts a bare value into the minimal context.
    fn insert<A>(value: A) -> Self::Of<A>
    where
        A: Clone + 'static;

    /// Applies the wrapped function(s) to the wrapped argument(s).
    fn amap<A, B, F>(functions: Self::Of<F>, values: Self::Of<A>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static;

    /// Lifts a binary function over two contexts.
    fn map2<A, B, C, F>(first: Self::Of<A>, second: Self::Of<B>, function: F) -> Self::Of<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let function = Rc::new(function);
        let partially_applied = Self::map::<A, _, _>(first, move |a: A| {
            let function = Rc::clone(&function);
            move |b: B| function(a.clone(), b)
        });
        Self::amap::<B, C, _>(partially_applied, second)
    }

    /// Lifts a ternary function over three contexts.
    fn map3<A, B, C, D, F>(
        first: Self::Of<A>,
        second: Self::Of<B>,
        third: Self::Of<C>,
        function: F,
    ) -> Self::Of<D>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        F: Fn(A, B, C) -> D + 'static,
    {
        let function = Rc::new(function);
        let partially_applied = Self::map2::<A, B, _, _>(first, second, move |a: A, b: B| {
            let function = Rc::clone(&function);
            move |c: C| function(a.clone(), b.clone(), c)
        });
        Self::amap::<C, D, _>(partially_applied, third)
    }

    /// Pairs the payloads of two contexts.
    fn product<A, B>(first: Self::Of<A>, second: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, (A, B), _>(first, second, |a, b| (a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Just, ListFamily, MaybeFamily, Nothing};
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn map3_short_circuits_on_any_absence() {
        let present = MaybeFamily::map3(Just(1), Just(2), Just(3), |a, b, c| a + b + c);
        let absent = MaybeFamily::map3(Just(1), Nothing, Just(3), |a: i32, b: i32, c: i32| {
            a + b + c
        });
        assert_eq!(present, Just(6));
        assert_eq!(absent, Nothing);
    }

    #[rstest]
    fn product_of_lists_is_cross_product() {
        let pairs = ListFamily::product(list![1, 2], list!['a', 'b']);
        assert_eq!(pairs, list![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }
}
