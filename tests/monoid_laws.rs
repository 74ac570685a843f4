//! Property-based tests for the Semigroup and Monoid laws.
//!
//! ## Monoid Laws
//! - Left Identity: identity <> a == a
//! - Right Identity: a <> identity == a
//! - Associativity: (a <> b) <> c == a <> (b <> c)

#![cfg(feature = "laws")]

use monadic::control::List;
use monadic::laws::{monoid_left_identity, monoid_right_identity, semigroup_associativity};
use monadic::typeclass::{Max, Min, Monoid, Product, Sum, WithIdentity, mconcat};
use proptest::prelude::*;

// =============================================================================
// Strings and Lists
// =============================================================================

proptest! {
    #[test]
    fn prop_string_monoid(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        prop_assert_eq!(monoid_left_identity(a.clone()), Ok(()));
        prop_assert_eq!(monoid_right_identity(b.clone()), Ok(()));
        prop_assert_eq!(semigroup_associativity(a, b, c), Ok(()));
    }

    #[test]
    fn prop_list_monoid(
        a in prop::collection::vec(any::<i16>(), 0..5),
        b in prop::collection::vec(any::<i16>(), 0..5),
        c in prop::collection::vec(any::<i16>(), 0..5),
    ) {
        let (a, b, c) = (List::from(a), List::from(b), List::from(c));
        prop_assert_eq!(monoid_left_identity(a.clone()), Ok(()));
        prop_assert_eq!(monoid_right_identity(a.clone()), Ok(()));
        prop_assert_eq!(semigroup_associativity(a, b, c), Ok(()));
    }
}

// =============================================================================
// Numeric wrappers
// =============================================================================

proptest! {
    #[test]
    fn prop_sum_monoid(a in -10_000i64..10_000, b in -10_000i64..10_000, c in -10_000i64..10_000) {
        prop_assert_eq!(monoid_left_identity(Sum(a)), Ok(()));
        prop_assert_eq!(monoid_right_identity(Sum(a)), Ok(()));
        prop_assert_eq!(semigroup_associativity(Sum(a), Sum(b), Sum(c)), Ok(()));
    }

    #[test]
    fn prop_product_monoid(a in -100i64..100, b in -100i64..100, c in -100i64..100) {
        prop_assert_eq!(monoid_left_identity(Product(a)), Ok(()));
        prop_assert_eq!(monoid_right_identity(Product(a)), Ok(()));
        prop_assert_eq!(semigroup_associativity(Product(a), Product(b), Product(c)), Ok(()));
    }

    #[test]
    fn prop_max_min_monoid(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert_eq!(monoid_left_identity(Max(a)), Ok(()));
        prop_assert_eq!(monoid_right_identity(Min(a)), Ok(()));
        prop_assert_eq!(semigroup_associativity(Max(a), Max(b), Max(c)), Ok(()));
        prop_assert_eq!(semigroup_associativity(Min(a), Min(b), Min(c)), Ok(()));
    }

    #[test]
    fn prop_with_identity_monoid(a in any::<i32>(), b in any::<i32>()) {
        let a = WithIdentity::Value(Max(a));
        prop_assert_eq!(monoid_left_identity(a), Ok(()));
        prop_assert_eq!(monoid_right_identity(a), Ok(()));
        prop_assert_eq!(
            semigroup_associativity(a, WithIdentity::Identity, WithIdentity::Value(Max(b))),
            Ok(())
        );
    }

    #[test]
    fn prop_identity_absorbs_bare_value_from_either_side(word in ".{0,8}", n in any::<i16>()) {
        prop_assert_eq!(word.clone() + WithIdentity::Identity, WithIdentity::Value(word.clone()));
        prop_assert_eq!(WithIdentity::Identity + word.clone(), WithIdentity::Value(word));
        prop_assert_eq!(Sum(n) + WithIdentity::Identity, WithIdentity::Value(Sum(n)));
    }
}

// =============================================================================
// mconcat / combine_all
// =============================================================================

proptest! {
    #[test]
    fn prop_mconcat_agrees_with_combine_all(values in prop::collection::vec(-1_000i64..1_000, 1..8)) {
        let sums: Vec<Sum<i64>> = values.iter().copied().map(Sum).collect();
        prop_assert_eq!(mconcat(sums.clone()), Some(Sum::combine_all(sums)));
    }

    #[test]
    fn prop_mconcat_of_empty_is_none(_seed in any::<u8>()) {
        prop_assert_eq!(mconcat(Vec::<Sum<i64>>::new()), None);
    }
}
