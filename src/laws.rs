//! Executable functor, applicative, monad and monoid laws.
//!
//! Every law is a function generic over a family `M` that returns
//! `Ok(())` when both sides agree and a [`LawViolation`] describing the two
//! sides otherwise. Values holding functions (readers, state transitions,
//! deferred effects) cannot be compared directly, so each family says how to
//! *observe* a value through [`Observe`]: data instances are observed as
//! themselves, a `Reader` by running it against an environment, a `State` by
//! running it from an initial state, a `Promise` by blocking on it.
//!
//! [`law_tests!`](crate::law_tests) instantiates the whole suite for one
//! family as proptest properties.
//!
//! ```rust
//! use monadic::control::{Just, MaybeFamily};
//! use monadic::laws;
//!
//! assert_eq!(laws::functor_identity::<MaybeFamily, i32>(Just(3), &()), Ok(()));
//! assert_eq!(
//!     laws::monad_associativity::<MaybeFamily, i32, i32, i32, _, _>(
//!         Just(3),
//!         |x| Just(x + 1),
//!         |y| Just(y * 2),
//!         &(),
//!     ),
//!     Ok(())
//! );
//! ```

use std::fmt::Debug;

use thiserror::Error;

use crate::control::{EitherFamily, ListFamily, MaybeFamily, OptionalFamily, OutcomeFamily};
#[cfg(feature = "promise")]
use crate::effect::{PromiseFamily, Settlement};
use crate::effect::{IoFamily, ReaderFamily, StateFamily, WriterFamily};
use crate::typeclass::{Monad, Monoid, Semigroup};

/// Two sides of a law that should have been equal but were not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{law} law violated: {left} != {right}")]
pub struct LawViolation {
    /// Name of the law.
    pub law: &'static str,
    /// Debug rendering of the left-hand side.
    pub left: String,
    /// Debug rendering of the right-hand side.
    pub right: String,
}

fn check<T: PartialEq + Debug>(law: &'static str, left: T, right: T) -> Result<(), LawViolation> {
    if left == right {
        Ok(())
    } else {
        Err(LawViolation {
            law,
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

/// How the values of a family are compared in the laws.
pub trait Observe: Monad {
    /// What a value needs to be observed: an environment, an initial state,
    /// or `()`.
    type Input: Clone + Debug;

    /// The comparable result of observing an `Of<A>`.
    type Observation<A>;

    /// Observes `value` under `input`.
    fn observe<A: Clone + 'static>(
        value: &Self::Of<A>,
        input: &Self::Input,
    ) -> Self::Observation<A>;
}

// =============================================================================
// Functor laws
// =============================================================================

/// `map(v, |x| x) == v`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn functor_identity<M, A>(value: M::Of<A>, input: &M::Input) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    M::Of<A>: Clone,
    M::Observation<A>: PartialEq + Debug,
{
    let mapped = M::map::<A, A, _>(value.clone(), |x: A| x);
    check("functor identity", M::observe(&mapped, input), M::observe(&value, input))
}

/// `map(map(v, f), g) == map(v, |x| g(f(x)))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn functor_composition<M, A, B, C, F, G>(
    value: M::Of<A>,
    first: F,
    second: G,
    input: &M::Input,
) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
    G: Fn(B) -> C + Clone + 'static,
    M::Of<A>: Clone,
    M::Observation<C>: PartialEq + Debug,
{
    let stepwise =
        M::map::<B, C, _>(M::map::<A, B, _>(value.clone(), first.clone()), second.clone());
    let fused = M::map::<A, C, _>(value, move |x: A| second(first(x)));
    check("functor composition", M::observe(&stepwise, input), M::observe(&fused, input))
}

// =============================================================================
// Applicative laws
// =============================================================================

/// `amap(insert(|x| x), v) == v`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn applicative_identity<M, A>(value: M::Of<A>, input: &M::Input) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    M::Of<A>: Clone,
    M::Observation<A>: PartialEq + Debug,
{
    let applied = M::amap::<A, A, _>(M::insert(|x: A| x), value.clone());
    check("applicative identity", M::observe(&applied, input), M::observe(&value, input))
}

/// `amap(insert(f), insert(x)) == insert(f(x))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn applicative_homomorphism<M, A, B, F>(
    function: F,
    value: A,
    input: &M::Input,
) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
    M::Observation<B>: PartialEq + Debug,
{
    let expected = M::insert(function(value.clone()));
    let applied = M::amap::<A, B, F>(M::insert(function), M::insert(value));
    check("applicative homomorphism", M::observe(&applied, input), M::observe(&expected, input))
}

/// `amap(u, insert(y)) == amap(insert(|f| f(y)), u)`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn applicative_interchange<M, A, B, F>(
    functions: M::Of<F>,
    value: A,
    input: &M::Input,
) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
    M::Of<F>: Clone,
    M::Observation<B>: PartialEq + Debug,
{
    let left = M::amap::<A, B, F>(functions.clone(), M::insert(value.clone()));
    let apply_to_value = move |function: F| function(value.clone());
    let right = M::amap::<F, B, _>(M::insert(apply_to_value), functions);
    check("applicative interchange", M::observe(&left, input), M::observe(&right, input))
}

/// `amap(amap(amap(insert(compose), u), v), w) == amap(u, amap(v, w))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn applicative_composition<M, A, B, C, F, G>(
    outer: M::Of<G>,
    inner: M::Of<F>,
    values: M::Of<A>,
    input: &M::Input,
) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
    G: Fn(B) -> C + Clone + 'static,
    M::Of<A>: Clone,
    M::Of<F>: Clone,
    M::Of<G>: Clone,
    M::Observation<C>: PartialEq + Debug,
{
    let compose = |g: G| {
        move |f: F| {
            let g = g.clone();
            move |a: A| g(f(a))
        }
    };
    let staged = M::amap::<G, _, _>(M::insert(compose), outer.clone());
    let composed = M::amap::<F, _, _>(staged, inner.clone());
    let left = M::amap::<A, C, _>(composed, values.clone());
    let right = M::amap::<B, C, G>(outer, M::amap::<A, B, F>(inner, values));
    check("applicative composition", M::observe(&left, input), M::observe(&right, input))
}

// =============================================================================
// Monad laws
// =============================================================================

/// `bind(insert(a), k) == k(a)`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn monad_left_identity<M, A, B, K>(
    value: A,
    kleisli: K,
    input: &M::Input,
) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    B: Clone + 'static,
    K: Fn(A) -> M::Of<B> + Clone + 'static,
    M::Observation<B>: PartialEq + Debug,
{
    let expected = kleisli(value.clone());
    let bound = M::bind::<A, B, K>(M::insert(value), kleisli);
    check("monad left identity", M::observe(&bound, input), M::observe(&expected, input))
}

/// `bind(m, insert) == m`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn monad_right_identity<M, A>(value: M::Of<A>, input: &M::Input) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    M::Of<A>: Clone,
    M::Observation<A>: PartialEq + Debug,
{
    let bound = M::bind::<A, A, _>(value.clone(), |x: A| M::insert(x));
    check("monad right identity", M::observe(&bound, input), M::observe(&value, input))
}

/// `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn monad_associativity<M, A, B, C, F, G>(
    value: M::Of<A>,
    first: F,
    second: G,
    input: &M::Input,
) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
    F: Fn(A) -> M::Of<B> + Clone + 'static,
    G: Fn(B) -> M::Of<C> + Clone + 'static,
    M::Of<A>: Clone,
    M::Observation<C>: PartialEq + Debug,
{
    let left = M::bind::<B, C, G>(M::bind::<A, B, F>(value.clone(), first.clone()), second.clone());
    let right = M::bind::<A, C, _>(value, move |x: A| M::bind::<B, C, G>(first(x), second.clone()));
    check("monad associativity", M::observe(&left, input), M::observe(&right, input))
}

/// `join(insert(m)) == m` and `join(map(m, insert)) == m`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn monad_join<M, A>(value: M::Of<A>, input: &M::Input) -> Result<(), LawViolation>
where
    M: Observe,
    A: Clone + 'static,
    M::Of<A>: Clone + 'static,
    M::Observation<A>: PartialEq + Debug,
{
    let outer = M::join::<A>(M::insert(value.clone()));
    check("join of insert", M::observe(&outer, input), M::observe(&value, input))?;
    let inner = M::join::<A>(M::map::<A, M::Of<A>, _>(value.clone(), |x: A| M::insert(x)));
    check("join of mapped insert", M::observe(&inner, input), M::observe(&value, input))
}

// =============================================================================
// Monoid laws
// =============================================================================

/// `identity <> v == v`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn monoid_left_identity<T>(value: T) -> Result<(), LawViolation>
where
    T: Monoid + Clone + PartialEq + Debug,
{
    check("monoid left identity", T::identity_element().addition_operation(value.clone()), value)
}

/// `v <> identity == v`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn monoid_right_identity<T>(value: T) -> Result<(), LawViolation>
where
    T: Monoid + Clone + PartialEq + Debug,
{
    check("monoid right identity", value.clone().addition_operation(T::identity_element()), value)
}

/// `(a <> b) <> c == a <> (b <> c)`
///
/// # Errors
///
/// Returns a [`LawViolation`] when the two sides differ.
pub fn semigroup_associativity<T>(first: T, second: T, third: T) -> Result<(), LawViolation>
where
    T: Semigroup + Clone + PartialEq + Debug,
{
    let left = first.clone().addition_operation(second.clone()).addition_operation(third.clone());
    let right = first.addition_operation(second.addition_operation(third));
    check("semigroup associativity", left, right)
}

// =============================================================================
// Observations
// =============================================================================

macro_rules! observe_as_value {
    ($([$($generic:tt)*] $family:ty),* $(,)?) => {
        $(
            impl<$($generic)*> Observe for $family {
                type Input = ();
                type Observation<A> = <$family as crate::typeclass::Kind>::Of<A>;

                fn observe<A: Clone + 'static>(
                    value: &Self::Of<A>,
                    _: &(),
                ) -> Self::Observation<A> {
                    value.clone()
                }
            }
        )*
    };
}

observe_as_value!(
    [] MaybeFamily,
    [] OptionalFamily,
    [] ListFamily,
    [L: Clone + 'static] EitherFamily<L>,
    [E: Clone + 'static] OutcomeFamily<E>,
    [W: Monoid + Clone + 'static] WriterFamily<W>,
);

impl<R: Clone + Debug + 'static> Observe for ReaderFamily<R> {
    type Input = R;
    type Observation<A> = A;

    fn observe<A: Clone + 'static>(value: &Self::Of<A>, environment: &R) -> A {
        value.run(environment.clone())
    }
}

impl<S: Clone + Debug + 'static> Observe for StateFamily<S> {
    type Input = S;
    type Observation<A> = (A, S);

    fn observe<A: Clone + 'static>(value: &Self::Of<A>, initial_state: &S) -> (A, S) {
        value.run(initial_state.clone())
    }
}

impl Observe for IoFamily {
    type Input = ();
    type Observation<A> = A;

    fn observe<A: Clone + 'static>(value: &Self::Of<A>, _: &()) -> A {
        value.run()
    }
}

#[cfg(feature = "promise")]
impl Observe for PromiseFamily {
    type Input = ();
    type Observation<A> = Settlement<A>;

    fn observe<A: Clone + 'static>(value: &Self::Of<A>, _: &()) -> Settlement<A> {
        value.block_on()
    }
}

/// Generates proptest properties checking every functor, applicative and
/// monad law for one family.
///
/// - `family`: the family marker
/// - `input`: a proptest strategy for [`Observe::Input`]
/// - `sample`: builds an `Of<i32>` from an arbitrary `i32`
/// - `kleisli`: an `i32 -> Of<i32>` step used by the monad laws
///
/// The caller must depend on `proptest`; the strategies and closures are
/// resolved at the call site.
///
/// ```rust,ignore
/// use monadic::control::{Just, MaybeFamily, Nothing};
///
/// monadic::law_tests! {
///     maybe,
///     family: MaybeFamily,
///     input: proptest::prelude::any::<()>(),
///     sample: |n: i32| if n % 5 == 0 { Nothing } else { Just(n) },
///     kleisli: |n: i32| if n % 2 == 0 { Just(n / 2) } else { Nothing },
/// }
/// ```
#[macro_export]
macro_rules! law_tests {
    (
        $name:ident,
        family: $family:ty,
        input: $input:expr,
        sample: $sample:expr,
        kleisli: $kleisli:expr $(,)?
    ) => {
        $crate::paste::paste! {
            $crate::proptest::proptest! {
                #[test]
                fn [<$name _functor_identity>](n in -10_000i32..10_000, input in $input) {
                    let sample = $sample;
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::functor_identity::<$family, i32>(sample(n), &input),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _functor_composition>](n in -10_000i32..10_000, input in $input) {
                    let sample = $sample;
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::functor_composition::<$family, i32, i32, String, _, _>(
                            sample(n),
                            |x: i32| x.wrapping_mul(3),
                            |y: i32| y.to_string(),
                            &input,
                        ),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _applicative_identity>](n in -10_000i32..10_000, input in $input) {
                    let sample = $sample;
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::applicative_identity::<$family, i32>(sample(n), &input),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _applicative_homomorphism>](n in -10_000i32..10_000, input in $input) {
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::applicative_homomorphism::<$family, i32, i64, _>(
                            |x: i32| i64::from(x) * 7,
                            n,
                            &input,
                        ),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _applicative_interchange>](
                    n in -10_000i32..10_000,
                    y in -10_000i32..10_000,
                    input in $input,
                ) {
                    let sample = $sample;
                    let adders = <$family as $crate::typeclass::Functor>::map(
                        sample(n),
                        |k: i32| move |x: i32| x.wrapping_add(k),
                    );
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::applicative_interchange::<$family, i32, i32, _>(
                            adders, y, &input,
                        ),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _applicative_composition>](
                    n in -10_000i32..10_000,
                    m in -10_000i32..10_000,
                    k in -10_000i32..10_000,
                    input in $input,
                ) {
                    let sample = $sample;
                    let outer = <$family as $crate::typeclass::Functor>::map(
                        sample(n),
                        |a: i32| move |x: i32| x.wrapping_add(a),
                    );
                    let inner = <$family as $crate::typeclass::Functor>::map(
                        sample(m),
                        |b: i32| move |x: i32| x.wrapping_mul(b),
                    );
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::applicative_composition::<$family, i32, i32, i32, _, _>(
                            outer,
                            inner,
                            sample(k),
                            &input,
                        ),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _monad_left_identity>](n in -10_000i32..10_000, input in $input) {
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::monad_left_identity::<$family, i32, i32, _>(
                            n, $kleisli, &input,
                        ),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _monad_right_identity>](n in -10_000i32..10_000, input in $input) {
                    let sample = $sample;
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::monad_right_identity::<$family, i32>(sample(n), &input),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _monad_associativity>](n in -10_000i32..10_000, input in $input) {
                    let sample = $sample;
                    let kleisli = $kleisli;
                    let shifted = move |x: i32| kleisli(x.wrapping_sub(1));
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::monad_associativity::<$family, i32, i32, i32, _, _>(
                            sample(n),
                            $kleisli,
                            shifted,
                            &input,
                        ),
                        Ok(())
                    );
                }

                #[test]
                fn [<$name _monad_join>](n in -10_000i32..10_000, input in $input) {
                    let sample = $sample;
                    $crate::proptest::prop_assert_eq!(
                        $crate::laws::monad_join::<$family, i32>(sample(n), &input),
                        Ok(())
                    );
                }
            }
        }
    };
}
