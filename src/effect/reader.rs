//! Reader - a computation that reads a shared environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. The function itself is the
//! payload: `map` post-composes, and `bind` hands the *same* environment to
//! both the original function and the continuation's reader, so every step
//! of a chain sees the environment unchanged.
//!
//! # Laws
//!
//! Besides the functor, applicative and monad laws (compared through `run`),
//! the environment operations satisfy:
//!
//! - `Reader::ask().run(r) == r`
//! - `Reader::local(|r| r, m).run(r) == m.run(r)`
//! - `Reader::local(f, Reader::local(g, m)).run(r) == m.run(g(f(r)))`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let address = Reader::asks(|config: Config| config.host)
//!     .bind(|host| Reader::asks(move |config: Config| format!("{host}:{}", config.port)));
//!
//! let config = Config { host: String::from("localhost"), port: 8080 };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

/// A computation of type `A` that depends on an environment of type `R`.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::Reader;
///
/// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
/// let described = doubled.map(|value| format!("value = {value}"));
/// assert_eq!(described.run(21), "value = 42");
/// ```
pub struct Reader<R, A> {
    /// Shared so that a reader can be cloned into several continuations.
    function: Rc<dyn Fn(R) -> A>,
}

impl<R: 'static, A: 'static> Reader<R, A> {
    /// Creates a reader from a function of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    ///
    /// A reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.function)(environment)
    }

    /// Creates a reader that ignores the environment and returns `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::insert("constant");
    /// assert_eq!(reader.run(0), "constant");
    /// assert_eq!(reader.run(100), "constant");
    /// ```
    pub fn insert(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Post-composes `function` with this reader.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.function;
        Reader::new(move |environment| function(original(environment)))
    }

    /// Chains a reader-producing continuation.
    ///
    /// The continuation's reader runs against the same environment as this
    /// one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 10);
    /// let chained = reader.bind(|value| Reader::new(move |environment| value + environment));
    /// assert_eq!(chained.run(3), 33);
    /// ```
    pub fn bind<B, F>(self, continuation: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.function;
        Reader::new(move |environment: R| {
            let value = original(environment.clone());
            continuation(value).run(environment)
        })
    }

    /// Sequences a step producing either a bare value or a reader.
    pub fn then<B, F>(self, step: F) -> Reader<R, B>
    where
        F: Fn(A) -> Continuation<Reader<R, B>, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.function;
        Reader::new(move |environment: R| {
            match step(original(environment.clone())) {
                Continuation::Plain(value) => value,
                Continuation::Wrapped(next) => next.run(environment),
            }
        })
    }

    /// Creates a reader that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment transformed by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let shifted = Reader::local(|environment| environment + 10, reader);
    /// assert_eq!(shifted.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let inner = computation.function;
        Self::new(move |environment| inner(modifier(environment)))
    }
}

impl<R: Clone + 'static> Reader<R, R> {
    /// Creates a reader that returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R: 'static, F: 'static> Reader<R, F> {
    /// Applies the function produced by this reader to the value produced by
    /// `argument`; both run against the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::effect::Reader;
    ///
    /// let scale = Reader::new(|factor: i32| move |value: i32| value * factor);
    /// let base = Reader::new(|factor: i32| factor + 1);
    /// assert_eq!(scale.amap(base).run(3), 12);
    /// ```
    pub fn amap<A, B>(self, argument: Reader<R, A>) -> Reader<R, B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
        R: Clone,
    {
        let functions = self.function;
        let values = argument.function;
        Reader::new(move |environment: R| {
            let function = functions(environment.clone());
            function(values(environment))
        })
    }
}

impl<R: Clone + 'static, A: 'static> Reader<R, Reader<R, A>> {
    /// Flattens one level of nesting; both layers read the same environment.
    pub fn join(self) -> Reader<R, A> {
        self.bind(|inner| inner)
    }
}

impl<R, A> Clone for Reader<R, A> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<R, A> fmt::Display for Reader<R, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Reader>")
    }
}

impl<R, A> From<Reader<R, A>> for Continuation<Reader<R, A>, A> {
    fn from(reader: Reader<R, A>) -> Self {
        Self::Wrapped(reader)
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`Reader`] with a fixed environment type `R`.
pub struct ReaderFamily<R>(PhantomData<R>);

impl<R> Kind for ReaderFamily<R> {
    type Of<A> = Reader<R, A>;
}

impl<R: Clone + 'static> Functor for ReaderFamily<R> {
    fn map<A, B, F>(value: Reader<R, A>, function: F) -> Reader<R, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<R: Clone + 'static> Applicative for ReaderFamily<R> {
    fn insert<A>(value: A) -> Reader<R, A>
    where
        A: Clone + 'static,
    {
        Reader::insert(value)
    }

    fn amap<A, B, F>(functions: Reader<R, F>, values: Reader<R, A>) -> Reader<R, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl<R: Clone + 'static> Monad for ReaderFamily<R> {
    fn bind<A, B, F>(value: Reader<R, A>, continuation: F) -> Reader<R, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Reader<R, B> + 'static,
    {
        value.bind(continuation)
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: PartialEq);
