//! Compose and Pipe - readers used for point-free function composition.
//!
//! [`Compose<A, B>`] is a [`Reader`] whose environment is the argument of the
//! composed function. Steps are appended with `then`, and the function runs
//! them left to right:
//!
//! ```rust
//! use monadic::effect::Compose;
//!
//! let increment = |x: i32| x + 1;
//! let pipeline = Compose::new(increment).then(increment).then(|x| x * 10);
//! assert_eq!(pipeline.call(0), 20);
//! ```
//!
//! Composition has no meaningful way to lift a bare value without an
//! argument, so `Compose` deliberately has no `insert` or `amap` and its
//! family implements only [`Functor`]. Reaching for them does not compile.
//!
//! [`Pipe<A>`] starts from a value instead of a function and is collapsed with
//! [`Pipe::flush`]:
//!
//! ```rust
//! use monadic::effect::Pipe;
//!
//! let total = Pipe::new(vec![1, 2, 3])
//!     .then(|values| values.into_iter().sum::<i32>())
//!     .then(|sum| sum * 2)
//!     .flush();
//! assert_eq!(total, 12);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::reader::Reader;
use crate::typeclass::{Applicative, Functor, Kind};

/// A composable function from `A` to `B`.
pub struct Compose<A, B> {
    reader: Reader<A, B>,
}

impl<A: 'static, B: 'static> Compose<A, B> {
    /// Starts a composition with `function`.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            reader: Reader::new(function),
        }
    }

    /// Calls the composed function.
    pub fn call(&self, argument: A) -> B {
        self.reader.run(argument)
    }

    /// Appends `function` as the next step.
    pub fn then<C, F>(self, function: F) -> Compose<A, C>
    where
        F: Fn(B) -> C + 'static,
        C: 'static,
    {
        self.map(function)
    }

    /// Post-composes `function`; the same as [`Compose::then`].
    pub fn map<C, F>(self, function: F) -> Compose<A, C>
    where
        F: Fn(B) -> C + 'static,
        C: 'static,
    {
        Compose {
            reader: self.reader.map(function),
        }
    }

    /// Chains a step that needs both the intermediate result and the original
    /// argument.
    ///
    /// ```rust
    /// use monadic::effect::Compose;
    ///
    /// let offset = Compose::new(|x: i32| x * 2)
    ///     .bind(|doubled| Compose::new(move |original: i32| doubled - original));
    /// assert_eq!(offset.call(5), 5);
    /// ```
    pub fn bind<C, F>(self, continuation: F) -> Compose<A, C>
    where
        F: Fn(B) -> Compose<A, C> + 'static,
        C: 'static,
        A: Clone,
    {
        Compose {
            reader: self.reader.bind(move |value| continuation(value).reader),
        }
    }

    /// Returns the underlying reader.
    pub fn into_reader(self) -> Reader<A, B> {
        self.reader
    }
}

impl<A, B> From<Reader<A, B>> for Compose<A, B> {
    fn from(reader: Reader<A, B>) -> Self {
        Self { reader }
    }
}

impl<A, B> Clone for Compose<A, B> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
        }
    }
}

impl<A, B> fmt::Display for Compose<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Compose>")
    }
}

/// A left-to-right pipeline over a starting value.
pub struct Pipe<A> {
    reader: Reader<(), A>,
}

impl<A: 'static> Pipe<A> {
    /// Starts a pipeline from `value`.
    pub fn new(value: A) -> Self
    where
        A: Clone,
    {
        Self {
            reader: Reader::insert(value),
        }
    }

    /// Appends `function` as the next stage.
    pub fn then<B, F>(self, function: F) -> Pipe<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    /// Post-composes `function`; the same as [`Pipe::then`].
    pub fn map<B, F>(self, function: F) -> Pipe<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Pipe {
            reader: self.reader.map(function),
        }
    }

    /// Continues with a pipeline chosen from the current value.
    pub fn bind<B, F>(self, continuation: F) -> Pipe<B>
    where
        F: Fn(A) -> Pipe<B> + 'static,
        B: 'static,
    {
        Pipe {
            reader: self.reader.bind(move |value| continuation(value).reader),
        }
    }

    /// Runs every stage and returns the final value.
    ///
    /// A pipeline can be flushed more than once; each flush reruns the stages.
    pub fn flush(&self) -> A {
        self.reader.run(())
    }
}

impl<A> Clone for Pipe<A> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
        }
    }
}

impl<A> fmt::Display for Pipe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Pipe>")
    }
}

/// Family marker for [`Compose`] with a fixed argument type `A`.
///
/// Only [`Functor`] is implemented.
pub struct ComposeFamily<A>(PhantomData<A>);

impl<A> Kind for ComposeFamily<A> {
    type Of<B> = Compose<A, B>;
}

impl<A: 'static> Functor for ComposeFamily<A> {
    fn map<B, C, F>(value: Compose<A, B>, function: F) -> Compose<A, C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(B) -> C + 'static,
    {
        value.map(function)
    }
}

static_assertions::assert_not_impl_any!(ComposeFamily<i32>: Applicative);
static_assertions::assert_not_impl_any!(Compose<i32, i32>: PartialEq);
static_assertions::assert_not_impl_any!(Pipe<i32>: PartialEq);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn increment(x: i32) -> i32 {
        x + 1
    }

    fn decrement(x: i32) -> i32 {
        x - 1
    }

    #[rstest]
    #[case(0, 1)]
    #[case(10, 11)]
    fn compose_runs_steps_left_to_right(#[case] input: i32, #[case] expected: i32) {
        let composed = Compose::new(increment).then(increment).then(decrement);
        assert_eq!(composed.call(input), expected);
    }

    #[rstest]
    fn compose_order_is_observable() {
        let add_then_double = Compose::new(increment).then(|x| x * 2);
        let double_then_add = Compose::new(|x: i32| x * 2).then(increment);
        assert_eq!(add_then_double.call(3), 8);
        assert_eq!(double_then_add.call(3), 7);
    }

    #[rstest]
    fn compose_family_maps() {
        let composed = ComposeFamily::map(Compose::new(increment), |x: i32| x.to_string());
        assert_eq!(composed.call(41), "42");
    }

    #[rstest]
    fn pipe_flush_returns_bare_value() {
        let pipe = Pipe::new(3).then(increment).then(|x| x * x);
        assert_eq!(pipe.flush(), 16);
        assert_eq!(pipe.flush(), 16);
    }

    #[rstest]
    fn pipe_bind_continues_with_new_pipeline() {
        let pipe = Pipe::new(String::from("a,b,c"))
            .bind(|text| Pipe::new(text.split(',').count()))
            .then(|count| count * 100);
        assert_eq!(pipe.flush(), 300);
    }

    #[rstest]
    fn converts_to_and_from_reader() {
        let reader = Compose::new(increment).into_reader();
        assert_eq!(reader.run(1), 2);
        assert_eq!(Compose::from(reader).to_string(), "<Compose>");
    }
}
