//! Small combinators shared by the rest of the crate.

/// Returns its argument unchanged.
///
/// ```rust
/// use monadic::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and yields `value`.
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Builds a context from an optional value.
///
/// Returns `if_none` when `value` is `None`, otherwise applies `if_value` to
/// the contained value. Pairs naturally with a constructor, for example
/// `from_none_or_value(Nothing, Just, lookup)`.
///
/// ```rust
/// use monadic::compose::from_none_or_value;
/// use monadic::control::{Just, Nothing};
///
/// assert_eq!(from_none_or_value(Nothing, Just, Some(3)), Just(3));
/// assert_eq!(from_none_or_value(Nothing, Just, None::<i32>), Nothing);
/// ```
pub fn from_none_or_value<T, M>(if_none: M, if_value: impl FnOnce(T) -> M, value: Option<T>) -> M {
    match value {
        Some(value) => if_value(value),
        None => if_none,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Left, Right};
    use rstest::rstest;

    #[rstest]
    fn identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn constant_ignores_argument() {
        let always_seven = constant(7);
        assert_eq!(always_seven("anything"), 7);
    }

    #[rstest]
    fn flip_swaps_arguments() {
        let subtract = |left: i32, right: i32| left - right;
        assert_eq!(flip(subtract)(1, 10), 9);
    }

    #[rstest]
    #[case(Some(5), Right(5))]
    #[case(None, Left("missing"))]
    fn from_none_or_value_builds_either(
        #[case] value: Option<i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        assert_eq!(from_none_or_value(Left("missing"), Right, value), expected);
    }
}
