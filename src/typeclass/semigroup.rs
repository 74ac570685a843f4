//! Semigroup type class - an associative combine operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.addition_operation(b).addition_operation(c)
//!     == a.addition_operation(b.addition_operation(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::typeclass::Semigroup;
//!
//! let greeting = String::from("Hello, ").addition_operation(String::from("World!"));
//! assert_eq!(greeting, "Hello, World!");
//!
//! assert_eq!(vec![1, 2].addition_operation(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// Only explicit implementations count: a bare `i32` is not a semigroup,
/// choose [`Sum`], [`Product`], [`Max`] or [`Min`] instead.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn addition_operation(self, other: Self) -> Self;

    /// Combines two borrowed values, cloning both.
    #[must_use]
    fn addition_operation_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().addition_operation(other.clone())
    }
}

impl Semigroup for String {
    fn addition_operation(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn addition_operation(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn addition_operation(self, (): Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn addition_operation(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn addition_operation(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn addition_operation(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn addition_operation(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn addition_operation(self, other: Self) -> Self {
        (
            self.0.addition_operation(other.0),
            self.1.addition_operation(other.1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_concatenates_in_order() {
        let combined = String::from("inc ").addition_operation(String::from("dbl "));
        assert_eq!(combined, "inc dbl ");
    }

    #[rstest]
    #[case(Max(3), Max(9), Max(9))]
    #[case(Max(-1), Max(-7), Max(-1))]
    fn max_keeps_greater(
        #[case] left: Max<i32>,
        #[case] right: Max<i32>,
        #[case] expected: Max<i32>,
    ) {
        assert_eq!(left.addition_operation(right), expected);
    }

    #[rstest]
    fn min_keeps_lesser() {
        assert_eq!(Min('q').addition_operation(Min('c')), Min('c'));
    }

    #[rstest]
    fn pair_combines_componentwise() {
        let left = (Sum(1), String::from("a"));
        let right = (Sum(2), String::from("b"));
        assert_eq!(left.addition_operation(right), (Sum(3), String::from("ab")));
    }

    #[rstest]
    fn ref_variant_leaves_operands_intact() {
        let left = vec![1];
        let right = vec![2];
        assert_eq!(left.addition_operation_ref(&right), vec![1, 2]);
        assert_eq!(left, vec![1]);
    }
}
