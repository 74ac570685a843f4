//! Numeric wrappers selecting a monoid for a bare type.
//!
//! A bare integer is not a monoid on its own: it could be combined by
//! addition, multiplication, maximum or minimum. These newtypes make the choice
//! explicit:
//!
//! | Wrapper      | Combine        | Identity          |
//! |--------------|----------------|-------------------|
//! | [`Sum`]      | `a + b`        | `0`               |
//! | [`Product`]  | `a * b`        | `1`               |
//! | [`Max`]      | `max(a, b)`    | [`Bounded::MIN_VALUE`] |
//! | [`Min`]      | `min(a, b)`    | [`Bounded::MAX_VALUE`] |
//!
//! Every wrapper renders as its inner value, so a `Writer` logging into
//! `Sum<i64>` displays as `(value, 42)`.

use std::fmt;

macro_rules! define_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Wraps `value` in [`", stringify!($name), "`].")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Returns the wrapped value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }

        impl<A: fmt::Display> fmt::Display for $name<A> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(formatter)
            }
        }
    };
}

define_wrapper!(
    /// The additive monoid: combine is `+`, identity is zero.
    ///
    /// ```rust
    /// use monadic::typeclass::{Monoid, Semigroup, Sum};
    ///
    /// assert_eq!(Sum(3).addition_operation(Sum(5)), Sum(8));
    /// assert_eq!(Sum::<i32>::identity_element(), Sum(0));
    /// ```
    Sum
);

define_wrapper!(
    /// The multiplicative monoid: combine is `*`, identity is one.
    ///
    /// ```rust
    /// use monadic::typeclass::{Monoid, Product, Semigroup};
    ///
    /// assert_eq!(Product(3).addition_operation(Product(5)), Product(15));
    /// assert_eq!(Product::<i32>::identity_element(), Product(1));
    /// ```
    Product
);

define_wrapper!(
    /// The maximum monoid; its identity is the type's minimum.
    Max
);

define_wrapper!(
    /// The minimum monoid; its identity is the type's maximum.
    Min
);

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// Gives [`Max`] and [`Min`] their identity elements.
///
/// ```rust
/// use monadic::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Percent(u8);
///
/// impl Bounded for Percent {
///     const MIN_VALUE: Self = Percent(0);
///     const MAX_VALUE: Self = Percent(100);
/// }
///
/// assert_eq!(Percent::MAX_VALUE, Percent(100));
/// ```
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;

    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char
);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wrappers_expose_inner_value() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(*Product::new(5).as_inner(), 5);
        assert_eq!(Max::from('z').into_inner(), 'z');
        assert_eq!(Min::from(-1).0, -1);
    }

    #[rstest]
    #[case(Sum(12).to_string(), "12")]
    #[case(Product(3).to_string(), "3")]
    #[case(Max("high").to_string(), "high")]
    fn wrappers_display_inner_value(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn bounded_matches_primitive_limits() {
        assert_eq!(<i64 as Bounded>::MIN_VALUE, i64::MIN);
        assert_eq!(<u8 as Bounded>::MAX_VALUE, u8::MAX);
        assert!(<bool as Bounded>::MAX_VALUE);
    }
}
