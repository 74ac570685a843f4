//! IO - a re-runnable description of a synchronous side effect.
//!
//! `IO<A>` wraps a zero-argument procedure. Building an `IO` performs nothing;
//! the effect happens each time [`IO::run`] is called, so the same value can
//! describe an effect that is performed many times.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use monadic::effect::IO;
//!
//! let counter = Rc::new(Cell::new(0));
//! let tick = {
//!     let counter = Rc::clone(&counter);
//!     IO::new(move || {
//!         counter.set(counter.get() + 1);
//!         counter.get()
//!     })
//! };
//! let doubled = tick.map(|n| n * 2);
//!
//! assert_eq!(counter.get(), 0);
//! assert_eq!(doubled.run(), 2);
//! assert_eq!(doubled.run(), 4);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use super::error::panic_message;
use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

/// A deferred synchronous effect producing an `A`.
pub struct IO<A> {
    action: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Describes the effect performed by `action`.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            action: Rc::new(action),
        }
    }

    /// Performs the effect and returns its result.
    pub fn run(&self) -> A {
        (self.action)()
    }

    /// An effect that does nothing and returns `value`.
    pub fn insert(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Transforms the result of the effect.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || function(action()))
    }

    /// Performs this effect, then the one chosen from its result.
    pub fn bind<B, F>(self, continuation: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || continuation(action()).run())
    }

    /// Sequences a step producing either a bare value or another effect.
    pub fn then<B, F>(self, step: F) -> IO<B>
    where
        F: Fn(A) -> Continuation<IO<B>, B> + 'static,
        B: 'static,
    {
        let action = self.action;
        IO::new(move || match step(action()) {
            Continuation::Plain(value) => value,
            Continuation::Wrapped(next) => next.run(),
        })
    }

    /// Recovers from a panic raised while running `self`.
    ///
    /// `handler` receives the panic message and produces the replacement
    /// result. It is not called when the effect completes normally.
    ///
    /// ```rust
    /// use monadic::effect::IO;
    ///
    /// let fragile: IO<String> = IO::new(|| panic!("disk unplugged"));
    /// let recovered = fragile.catch(|message| format!("recovered from {message}"));
    /// assert_eq!(recovered.run(), "recovered from disk unplugged");
    /// ```
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        let action = self.action;
        Self::new(move || {
            catch_unwind(AssertUnwindSafe(|| action()))
                .unwrap_or_else(|payload| handler(panic_message(payload.as_ref())))
        })
    }
}

impl<F: 'static> IO<F> {
    /// Performs this effect, then `argument`, and applies the first result to
    /// the second.
    pub fn amap<A, B>(self, argument: IO<A>) -> IO<B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        let functions = self.action;
        let values = argument.action;
        IO::new(move || {
            let function = functions();
            function(values())
        })
    }
}

impl<A: 'static> IO<IO<A>> {
    /// Performs the outer effect, then the effect it produced.
    pub fn join(self) -> IO<A> {
        self.bind(|inner| inner)
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            action: Rc::clone(&self.action),
        }
    }
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<IO>")
    }
}

impl<A> From<IO<A>> for Continuation<IO<A>, A> {
    fn from(io: IO<A>) -> Self {
        Self::Wrapped(io)
    }
}

/// Family marker for [`IO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IoFamily;

impl Kind for IoFamily {
    type Of<A> = IO<A>;
}

impl Functor for IoFamily {
    fn map<A, B, F>(value: IO<A>, function: F) -> IO<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for IoFamily {
    fn insert<A>(value: A) -> IO<A>
    where
        A: Clone + 'static,
    {
        IO::insert(value)
    }

    fn amap<A, B, F>(functions: IO<F>, values: IO<A>) -> IO<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl Monad for IoFamily {
    fn bind<A, B, F>(value: IO<A>, continuation: F) -> IO<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> IO<B> + 'static,
    {
        value.bind(continuation)
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: PartialEq);
