//! Infix operators for the monad instances.
//!
//! | operator | meaning                                  |
//! |----------|------------------------------------------|
//! | `m \| f` | `m.map(f)`                               |
//! | `m >> k` | `m.bind(k)`                              |
//! | `f & m`  | `f.amap(m)` (wrapped function on the left) |
//! | `a + b`  | monoid combination (`addition_operation`)  |
//!
//! Each operator forwards to the named method, so bounds and behaviour are
//! exactly those of the method.
//!
//! ```rust
//! use monadic::control::{Just, Maybe, Nothing};
//!
//! fn reciprocal(value: i32) -> Maybe<i32> {
//!     if value == 0 { Nothing } else { Just(100 / value) }
//! }
//!
//! assert_eq!(Just(7) | (|x: i32| -x), Just(-7));
//! assert_eq!(Just(4) >> reciprocal, Just(25));
//! assert_eq!(Just(0) >> reciprocal | (|x: i32| x + 1), Nothing);
//! assert_eq!(Just(|x: i32| x * 2) & Just(21), Just(42));
//! ```
//!
//! `>>` binds tighter than `|`, so mixed chains read left to right only when
//! every `|` comes after the last `>>`. Parenthesize otherwise.

use std::ops::{Add, BitAnd, BitOr, Shr};

use crate::control::{Either, List, Maybe, Optional, Outcome};
use crate::effect::{IO, Reader, State, Writer};
#[cfg(feature = "promise")]
use crate::effect::Promise;
use crate::typeclass::{Max, Min, Product, Semigroup, Sum};

macro_rules! impl_data_operators {
    ($type:ident<$($fixed:ident),*>) => {
        impl<$($fixed,)* A, B, F> BitOr<F> for $type<$($fixed,)* A>
        where
            F: FnOnce(A) -> B,
        {
            type Output = $type<$($fixed,)* B>;

            fn bitor(self, function: F) -> Self::Output {
                self.map(function)
            }
        }

        impl<$($fixed,)* A, B, F> Shr<F> for $type<$($fixed,)* A>
        where
            F: FnOnce(A) -> $type<$($fixed,)* B>,
        {
            type Output = $type<$($fixed,)* B>;

            fn shr(self, continuation: F) -> Self::Output {
                self.bind(continuation)
            }
        }

        impl<$($fixed,)* A, B, F> BitAnd<$type<$($fixed,)* A>> for $type<$($fixed,)* F>
        where
            F: FnOnce(A) -> B,
        {
            type Output = $type<$($fixed,)* B>;

            fn bitand(self, argument: $type<$($fixed,)* A>) -> Self::Output {
                self.amap(argument)
            }
        }
    };
}

macro_rules! impl_deferred_operators {
    ($type:ident<$($fixed:ident),*> where [$($bounds:tt)*]) => {
        impl<$($fixed,)* A, B, F> BitOr<F> for $type<$($fixed,)* A>
        where
            F: Fn(A) -> B + 'static,
            A: 'static,
            B: 'static,
            $($bounds)*
        {
            type Output = $type<$($fixed,)* B>;

            fn bitor(self, function: F) -> Self::Output {
                self.map(function)
            }
        }

        impl<$($fixed,)* A, B, F> Shr<F> for $type<$($fixed,)* A>
        where
            F: Fn(A) -> $type<$($fixed,)* B> + 'static,
            A: 'static,
            B: 'static,
            $($bounds)*
        {
            type Output = $type<$($fixed,)* B>;

            fn shr(self, continuation: F) -> Self::Output {
                self.bind(continuation)
            }
        }

        impl<$($fixed,)* A, B, F> BitAnd<$type<$($fixed,)* A>> for $type<$($fixed,)* F>
        where
            F: Fn(A) -> B + 'static,
            A: 'static,
            B: 'static,
            $($bounds)*
        {
            type Output = $type<$($fixed,)* B>;

            fn bitand(self, argument: $type<$($fixed,)* A>) -> Self::Output {
                self.amap(argument)
            }
        }
    };
}

impl_data_operators!(Maybe<>);
impl_data_operators!(Optional<>);
impl_data_operators!(Either<L>);
impl_data_operators!(Outcome<E>);

impl_deferred_operators!(Reader<R> where [R: Clone + 'static,]);
impl_deferred_operators!(State<S> where [S: 'static,]);
impl_deferred_operators!(IO<> where []);
#[cfg(feature = "promise")]
impl_deferred_operators!(Promise<> where []);

// List calls its functions once per element.

impl<A, B, F> BitOr<F> for List<A>
where
    F: FnMut(A) -> B,
{
    type Output = List<B>;

    fn bitor(self, function: F) -> List<B> {
        self.map(function)
    }
}

impl<A, B, F> Shr<F> for List<A>
where
    F: FnMut(A) -> List<B>,
{
    type Output = List<B>;

    fn shr(self, continuation: F) -> List<B> {
        self.bind(continuation)
    }
}

impl<A: Clone, B, F> BitAnd<List<A>> for List<F>
where
    F: Fn(A) -> B,
{
    type Output = List<B>;

    fn bitand(self, arguments: List<A>) -> List<B> {
        self.amap(arguments)
    }
}

// Writer combines logs, so it needs a semigroup for `>>` and `&`.

impl<W, A, B, F> BitOr<F> for Writer<W, A>
where
    F: FnOnce(A) -> B,
{
    type Output = Writer<W, B>;

    fn bitor(self, function: F) -> Writer<W, B> {
        self.map(function)
    }
}

impl<W: Semigroup, A, B, F> Shr<F> for Writer<W, A>
where
    F: FnOnce(A) -> Writer<W, B>,
{
    type Output = Writer<W, B>;

    fn shr(self, continuation: F) -> Writer<W, B> {
        self.bind(continuation)
    }
}

impl<W: Semigroup, A, B, F> BitAnd<Writer<W, A>> for Writer<W, F>
where
    F: FnOnce(A) -> B,
{
    type Output = Writer<W, B>;

    fn bitand(self, argument: Writer<W, A>) -> Writer<W, B> {
        self.amap(argument)
    }
}

macro_rules! impl_monoid_add {
    ($($type:ident),* $(,)?) => {
        $(
            impl<A> Add for $type<A>
            where
                Self: Semigroup,
            {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    self.addition_operation(other)
                }
            }
        )*
    };
}

impl_monoid_add!(List, Sum, Product, Max, Min);

#[cfg(test)]
mod tests {
    use crate::control::{Just, Left, Maybe, Nothing, Right};
    use crate::effect::{IO, Reader, State, Writer};
    use crate::list;
    use crate::typeclass::{Max, Sum};
    use rstest::rstest;

    fn reciprocal(value: i32) -> Maybe<i32> {
        if value == 0 {
            Nothing
        } else {
            Just(100 / value)
        }
    }

    #[rstest]
    #[case(Just(4), Just(26))]
    #[case(Just(0), Nothing)]
    #[case(Nothing, Nothing)]
    fn maybe_operators_match_methods(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!((input >> reciprocal) | (|x: i32| x + 1), expected);
    }

    #[rstest]
    fn either_bind_operator_short_circuits() {
        let checked = |x: i32| {
            if x > 0 {
                Right(x)
            } else {
                Left("not positive")
            }
        };
        assert_eq!(Right(3) >> checked, Right(3));
        assert_eq!(Right(-3) >> checked, Left("not positive"));
    }

    #[rstest]
    fn list_operators_follow_list_semantics() {
        let branched = list![1, 2] >> (|x: i32| list![x, x * 10]);
        assert_eq!(branched, list![1, 10, 2, 20]);
        let functions = list![(|x: i32| x + 1) as fn(i32) -> i32, |x: i32| x - 1];
        assert_eq!(functions & list![0], list![1, -1]);
        assert_eq!(list![1] + list![2, 3], list![1, 2, 3]);
    }

    #[rstest]
    fn deferred_operators_stay_lazy() {
        let reader = Reader::new(|e: i32| e) | (|x: i32| x * 2);
        assert_eq!(reader.run(5), 10);
        let state =
            State::new(|s: i32| (s, s + 1)) >> (|v: i32| State::new(move |s: i32| (v + s, s)));
        assert_eq!(state.run(1), (3, 2));
        let io = IO::insert(|x: i32| x + 1) & IO::insert(1);
        assert_eq!(io.run(), 2);
    }

    #[rstest]
    fn writer_bind_operator_appends_log() {
        let logged =
            Writer::new(2, String::from("a")) >> (|x: i32| Writer::new(x * 2, String::from("b")));
        assert_eq!(logged.run(), (4, String::from("ab")));
    }

    #[rstest]
    fn add_combines_wrappers() {
        assert_eq!(Sum(2) + Sum(3), Sum(5));
        assert_eq!(Max(2) + Max(9) + Max(4), Max(9));
    }
}
