//! Monoid type class - semigroups with a two-sided identity.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::identity_element().addition_operation(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.addition_operation(T::identity_element()) == a
//! ```
//!
//! Associativity is inherited from [`Semigroup`].
//!
//! # The Universal Identity
//!
//! [`WithIdentity`] adjoins an identity to any semigroup. Its `Identity`
//! variant combines with every value, in either order, and yields that value
//! unchanged. A bare `S` combined with a `WithIdentity<S>` through `+` is
//! wrapped first:
//!
//! ```rust
//! use monadic::typeclass::WithIdentity;
//!
//! let log = WithIdentity::Identity + String::from("started");
//! assert_eq!(log, WithIdentity::Value(String::from("started")));
//!
//! let done = String::from("done") + WithIdentity::Identity;
//! assert_eq!(done, WithIdentity::Value(String::from("done")));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Monoid, Semigroup};
///
/// let word = String::from("monad");
/// assert_eq!(String::identity_element().addition_operation(word.clone()), word);
/// assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn identity_element() -> Self;

    /// Folds an iterator, starting from the identity element.
    ///
    /// An empty iterator yields the identity element.
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(Self::identity_element(), Semigroup::addition_operation)
    }

    /// Returns whether this value equals the identity element.
    fn is_identity(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::identity_element()
    }
}

/// Left-folds a non-empty sequence, seeding the accumulator with its first
/// element.
///
/// Returns `None` for an empty sequence. No identity element is required, so
/// this works for any [`Semigroup`].
///
/// # Examples
///
/// ```rust
/// use monadic::typeclass::{Sum, mconcat};
///
/// assert_eq!(mconcat(vec![Sum(1), Sum(2), Sum(3)]), Some(Sum(6)));
/// assert_eq!(mconcat(Vec::<Sum<i32>>::new()), None);
/// ```
pub fn mconcat<S, I>(values: I) -> Option<S>
where
    S: Semigroup,
    I: IntoIterator<Item = S>,
{
    values.into_iter().reduce(Semigroup::addition_operation)
}

impl Monoid for String {
    fn identity_element() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn identity_element() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn identity_element() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn identity_element() -> Self {
        Self(A::default())
    }
}

macro_rules! impl_product_identity {
    ($one:literal => $($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn identity_element() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

impl_product_identity!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_product_identity!(1.0 => f32, f64);

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn identity_element() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn identity_element() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn identity_element() -> Self {
        (A::identity_element(), B::identity_element())
    }
}

// =============================================================================
// WithIdentity
// =============================================================================

/// A semigroup extended with a universal identity element.
///
/// `Identity` is a plain unit variant: equality is structural and there is no
/// shared instance to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WithIdentity<S> {
    /// The identity element; absorbed by every combination.
    #[default]
    Identity,
    /// A value of the underlying semigroup.
    Value(S),
}

impl<S> WithIdentity<S> {
    /// Returns the underlying value, or `None` for the identity.
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Identity => None,
            Self::Value(value) => Some(value),
        }
    }

    /// Returns the underlying value, or `fallback` for the identity.
    pub fn value_or(self, fallback: S) -> S {
        self.into_value().unwrap_or(fallback)
    }

    /// Returns `true` for the identity element.
    pub const fn is_identity_element(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

impl<S: Monoid> WithIdentity<S> {
    /// Collapses into the underlying monoid, mapping `Identity` to its own
    /// identity element.
    pub fn into_monoid(self) -> S {
        self.into_value().unwrap_or_else(S::identity_element)
    }
}

impl<S> From<S> for WithIdentity<S> {
    fn from(value: S) -> Self {
        Self::Value(value)
    }
}

impl<S: Semigroup> Semigroup for WithIdentity<S> {
    fn addition_operation(self, other: Self) -> Self {
        match (self, other) {
            (Self::Identity, other) => other,
            (this, Self::Identity) => this,
            (Self::Value(left), Self::Value(right)) => Self::Value(left.addition_operation(right)),
        }
    }
}

impl<S: Semigroup> Monoid for WithIdentity<S> {
    fn identity_element() -> Self {
        Self::Identity
    }
}

impl<S: Semigroup> Add for WithIdentity<S> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.addition_operation(other)
    }
}

impl<S: Semigroup> Add<S> for WithIdentity<S> {
    type Output = Self;

    fn add(self, other: S) -> Self {
        self.addition_operation(Self::Value(other))
    }
}

// A bare value on the left is wrapped before combining. Coherence only
// allows these for concrete left-hand types.
impl Add<WithIdentity<String>> for String {
    type Output = WithIdentity<String>;

    fn add(self, other: WithIdentity<String>) -> WithIdentity<String> {
        WithIdentity::Value(self).addition_operation(other)
    }
}

macro_rules! impl_bare_identity_add {
    ($($type:ident),* $(,)?) => {
        $(
            impl<A> Add<WithIdentity<$type<A>>> for $type<A>
            where
                $type<A>: Semigroup,
            {
                type Output = WithIdentity<$type<A>>;

                fn add(self, other: WithIdentity<$type<A>>) -> WithIdentity<$type<A>> {
                    WithIdentity::Value(self).addition_operation(other)
                }
            }
        )*
    };
}

impl_bare_identity_add!(Vec, Sum, Product, Max, Min);
