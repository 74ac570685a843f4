//! Writer - a value paired with an accumulated log.
//!
//! `Writer<W, A>` holds a result of type `A` and a log of type `W`. Sequencing
//! two writers combines their logs with [`Semigroup::addition_operation`],
//! earlier contributions first, so the log reads in the order the steps ran.
//! [`Writer::insert`] pairs a value with the log's
//! [`Monoid::identity_element`].
//!
//! A log type that is only a semigroup can still be lifted into by wrapping it
//! in [`WithIdentity`](crate::typeclass::WithIdentity), whose `Identity`
//! variant is absorbed by every combination.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{StringWriter, Writer};
//!
//! let computation: StringWriter<i32> = Writer::insert(0)
//!     .then(|x| Writer::new(x + 1, String::from("inc ")).into())
//!     .then(|x| Writer::new(x * 2, String::from("dbl ")).into());
//!
//! assert_eq!(computation.value(), &2);
//! assert_eq!(computation.log(), "inc dbl ");
//! assert_eq!(computation.to_string(), "(2, inc dbl )");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::control::List;
use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad, Monoid, Semigroup, Sum};

/// A result of type `A` with a log of type `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

/// A writer logging to a `String`.
pub type StringWriter<A> = Writer<String, A>;

/// A writer logging a [`List`] of entries.
pub type ListWriter<T, A> = Writer<List<T>, A>;

/// A writer accumulating a running total.
pub type NumberWriter<A> = Writer<Sum<i64>, A>;

impl<W, A> Writer<W, A> {
    /// Pairs `value` with `log`.
    pub const fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Pairs `value` with an empty log.
    pub fn insert(value: A) -> Self
    where
        W: Monoid,
    {
        Self::new(value, W::identity_element())
    }

    /// Borrows the result.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Borrows the log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Returns the result and the log.
    pub fn run(self) -> (A, W) {
        (self.value, self.log)
    }

    /// Transforms the result; the log is unchanged.
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.value), self.log)
    }

    /// Runs `continuation` on the result and appends its log after this one.
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let logged = Writer::new(3, vec!["three"])
    ///     .bind(|x| Writer::new(x * x, vec!["squared"]));
    /// assert_eq!(logged.run(), (9, vec!["three", "squared"]));
    /// ```
    pub fn bind<B, F>(self, continuation: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        W: Semigroup,
    {
        let next = continuation(self.value);
        Writer::new(next.value, self.log.addition_operation(next.log))
    }

    /// Sequences a step producing either a bare value or a writer.
    ///
    /// A plain value keeps the current log as is.
    pub fn then<B, F>(self, step: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Continuation<Writer<W, B>, B>,
        W: Semigroup,
    {
        match step(self.value) {
            Continuation::Plain(value) => Writer::new(value, self.log),
            Continuation::Wrapped(next) => {
                Writer::new(next.value, self.log.addition_operation(next.log))
            }
        }
    }

    /// Replaces the log with `modifier(log)`.
    ///
    /// ```rust
    /// use monadic::effect::Writer;
    ///
    /// let quiet = Writer::censor(
    ///     |log: String| log.to_uppercase(),
    ///     Writer::new(1, String::from("hi")),
    /// );
    /// assert_eq!(quiet.log(), "HI");
    /// ```
    pub fn censor<F>(modifier: F, computation: Self) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self::new(computation.value, modifier(computation.log))
    }

    /// Exposes the log produced so far as part of the result.
    pub fn listen(computation: Self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let captured = computation.log.clone();
        Writer::new((computation.value, captured), computation.log)
    }

    /// Applies the log modifier carried in the result.
    pub fn pass<F>(computation: Writer<W, (A, F)>) -> Self
    where
        F: FnOnce(W) -> W,
    {
        let (value, modifier) = computation.value;
        Self::new(value, modifier(computation.log))
    }
}

impl<W> Writer<W, ()> {
    /// Appends `log` without producing a result.
    pub const fn tell(log: W) -> Self {
        Self::new((), log)
    }
}

impl<W: Semigroup, F> Writer<W, F> {
    /// Applies the wrapped function to the wrapped argument; the function's
    /// log precedes the argument's.
    pub fn amap<A, B>(self, argument: Writer<W, A>) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new((self.value)(argument.value), self.log.addition_operation(argument.log))
    }
}

impl<W: Semigroup, A> Writer<W, Writer<W, A>> {
    /// Flattens one level of nesting, outer log first.
    pub fn join(self) -> Writer<W, A> {
        self.bind(|inner| inner)
    }
}

impl<W, A> From<Writer<W, A>> for Continuation<Writer<W, A>, A> {
    fn from(writer: Writer<W, A>) -> Self {
        Self::Wrapped(writer)
    }
}

impl<W: fmt::Display, A: fmt::Display> fmt::Display for Writer<W, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.value, self.log)
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`Writer`] with a fixed log type `W`.
pub struct WriterFamily<W>(PhantomData<W>);

impl<W> Kind for WriterFamily<W> {
    type Of<A> = Writer<W, A>;
}

impl<W: Monoid + Clone + 'static> Functor for WriterFamily<W> {
    fn map<A, B, F>(value: Writer<W, A>, function: F) -> Writer<W, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<W: Monoid + Clone + 'static> Applicative for WriterFamily<W> {
    fn insert<A>(value: A) -> Writer<W, A>
    where
        A: Clone + 'static,
    {
        Writer::insert(value)
    }

    fn amap<A, B, F>(functions: Writer<W, F>, values: Writer<W, A>) -> Writer<W, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl<W: Monoid + Clone + 'static> Monad for WriterFamily<W> {
    fn bind<A, B, F>(value: Writer<W, A>, continuation: F) -> Writer<W, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Writer<W, B> + 'static,
    {
        value.bind(continuation)
    }
}
