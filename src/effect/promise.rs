//! Promise - a deferred asynchronous computation that may fail.
//!
//! A `Promise<A>` describes how to produce a future settling with
//! `Result<A, PromiseError>`. Nothing runs when a promise is built or chained;
//! work starts when the promise is awaited (it implements [`IntoFuture`]) or
//! forced with [`Promise::block_on`]. Each run starts from scratch, so a
//! promise can be awaited more than once.
//!
//! Failures never travel through the payload. An explicit rejection, a panic
//! inside the executor or inside a `map`/`bind` function, and an expired
//! [`Promise::timeout`] all become a [`PromiseError`] that skips every later
//! stage until a [`Promise::catch`] turns it back into a value.
//!
//! Promises are single-threaded: they are driven by a current-thread tokio
//! runtime and hold their stages behind `Rc`.
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::{Promise, PromiseError};
//!
//! let parsed = Promise::new(|resolve, reject| match "21".parse::<i32>() {
//!     Ok(value) => resolve(value),
//!     Err(error) => reject(PromiseError::rejected(error)),
//! });
//!
//! let doubled = parsed.map(|x| x * 2).bind(|x| Promise::resolved(x + 0));
//! assert_eq!(doubled.block_on(), Ok(42));
//!
//! let failed: Promise<i32> = Promise::rejected(PromiseError::rejected("offline"));
//! assert_eq!(failed.catch(|_| -1).block_on(), Ok(-1));
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};

use super::error::PromiseError;
use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

/// The outcome a promise settles with.
pub type Settlement<A> = Result<A, PromiseError>;

/// The success callback handed to a [`Promise::new`] executor.
pub type Resolve<A> = fn(A) -> Settlement<A>;

/// The failure callback handed to a [`Promise::new`] executor.
pub type Reject<A> = fn(PromiseError) -> Settlement<A>;

type Pending<A> = LocalBoxFuture<'static, Settlement<A>>;

/// A deferred, possibly failing, asynchronous computation.
pub struct Promise<A> {
    start: Rc<dyn Fn() -> Pending<A>>,
}

/// Runs `function`, converting a panic into [`PromiseError::Panicked`].
fn guard<B>(function: impl FnOnce() -> B) -> Settlement<B> {
    catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let error = PromiseError::from_panic(payload.as_ref());
        tracing::debug!(%error, "panic captured in promise stage");
        error
    })
}

impl<A: 'static> Promise<A> {
    fn from_pending<F>(start: F) -> Self
    where
        F: Fn() -> Pending<A> + 'static,
    {
        Self { start: Rc::new(start) }
    }

    /// Creates a promise from an executor receiving `resolve` and `reject`.
    ///
    /// The executor runs each time the promise is started, not when it is
    /// created. A panic inside it rejects the promise.
    ///
    /// ```rust
    /// use monadic::effect::{Promise, PromiseError};
    ///
    /// let checked = |input: i32| {
    ///     Promise::new(move |resolve, reject| {
    ///         if input >= 0 { resolve(input) } else { reject(PromiseError::rejected("negative")) }
    ///     })
    /// };
    /// assert_eq!(checked(4).block_on(), Ok(4));
    /// assert!(checked(-4).block_on().is_err());
    /// ```
    pub fn new<F>(executor: F) -> Self
    where
        F: Fn(Resolve<A>, Reject<A>) -> Settlement<A> + 'static,
    {
        let executor = Rc::new(executor);
        Self::from_pending(move || {
            let executor = Rc::clone(&executor);
            async move {
                let settlement = guard(|| executor(Ok, Err)).and_then(|settled| settled);
                if let Err(error) = &settlement {
                    tracing::trace!(%error, "promise executor settled with an error");
                }
                settlement
            }
            .boxed_local()
        })
    }

    /// Creates a promise from a factory of futures.
    ///
    /// The factory is called each time the promise is started. A panic while
    /// polling the future rejects the promise.
    ///
    /// ```rust
    /// use monadic::effect::Promise;
    ///
    /// let answer = Promise::from_future(|| async { Ok(6 * 7) });
    /// assert_eq!(answer.block_on(), Ok(42));
    /// ```
    pub fn from_future<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Settlement<A>> + 'static,
    {
        Self::from_pending(move || {
            let started = guard(&factory);
            async move {
                match started {
                    Ok(pending) => AssertUnwindSafe(pending)
                        .catch_unwind()
                        .await
                        .unwrap_or_else(|payload| {
                            let error = PromiseError::from_panic(payload.as_ref());
                            tracing::debug!(%error, "panic captured while polling promise");
                            Err(error)
                        }),
                    Err(error) => Err(error),
                }
            }
            .boxed_local()
        })
    }

    /// A promise that settles immediately with `value`.
    pub fn resolved(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_pending(move || future::ready(Ok(value.clone())).boxed_local())
    }

    /// The same as [`Promise::resolved`].
    pub fn insert(value: A) -> Self
    where
        A: Clone,
    {
        Self::resolved(value)
    }

    /// A promise that fails immediately with `error`.
    pub fn rejected(error: PromiseError) -> Self {
        Self::from_pending(move || future::ready(Err(error.clone())).boxed_local())
    }

    /// Starts the computation and returns the future of its settlement.
    pub fn run(&self) -> LocalBoxFuture<'static, Settlement<A>> {
        (self.start)()
    }

    /// Drives the promise to completion on a fresh current-thread runtime.
    ///
    /// Must not be called from inside an async context: tokio refuses to
    /// start a runtime from within another one. Await the promise there
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns the [`PromiseError`] the chain settled with, or
    /// [`PromiseError::Runtime`] if no runtime could be started.
    pub fn block_on(&self) -> Settlement<A> {
        match tokio::runtime::Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime.block_on(self.run()),
            Err(error) => {
                tracing::warn!(%error, "could not build runtime for promise");
                Err(PromiseError::Runtime(error.to_string()))
            }
        }
    }

    /// Sequences a step producing either a bare value or another promise.
    ///
    /// The step is skipped when this promise fails.
    pub fn then<B, F>(self, step: F) -> Promise<B>
    where
        F: Fn(A) -> Continuation<Promise<B>, B> + 'static,
        B: 'static,
    {
        let source = self.start;
        let step = Rc::new(step);
        Promise::from_pending(move || {
            let pending = source();
            let step = Rc::clone(&step);
            async move {
                match pending.await.and_then(|value| guard(|| step(value))) {
                    Ok(Continuation::Plain(value)) => Ok(value),
                    Ok(Continuation::Wrapped(next)) => next.run().await,
                    Err(error) => Err(error),
                }
            }
            .boxed_local()
        })
    }

    /// Transforms the eventual value.
    ///
    /// A panic in `function` rejects the resulting promise.
    pub fn map<B, F>(self, function: F) -> Promise<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.then(move |value| Continuation::Plain(function(value)))
    }

    /// Transforms the eventual value with a fallible function.
    ///
    /// ```rust
    /// use monadic::effect::Promise;
    ///
    /// let parsed = Promise::resolved("x7").try_map(|text| text.parse::<u8>());
    /// assert!(parsed.block_on().unwrap_err().is_rejected());
    /// ```
    pub fn try_map<B, E, F>(self, function: F) -> Promise<B>
    where
        F: Fn(A) -> Result<B, E> + 'static,
        E: Into<PromiseError>,
        B: 'static,
    {
        self.then(move |value| match function(value) {
            Ok(mapped) => Continuation::Plain(mapped),
            Err(error) => Continuation::Wrapped(Promise::rejected(error.into())),
        })
    }

    /// Awaits this promise, then the promise chosen from its value.
    pub fn bind<B, F>(self, continuation: F) -> Promise<B>
    where
        F: Fn(A) -> Promise<B> + 'static,
        B: 'static,
    {
        self.then(move |value| Continuation::Wrapped(continuation(value)))
    }

    /// Recovers from any earlier failure with `handler`.
    ///
    /// The handler runs at most once per run and never when the chain
    /// succeeded.
    pub fn catch<F>(self, handler: F) -> Self
    where
        F: Fn(PromiseError) -> A + 'static,
    {
        let source = self.start;
        let handler = Rc::new(handler);
        Self::from_pending(move || {
            let pending = source();
            let handler = Rc::clone(&handler);
            async move {
                pending.await.or_else(|error| {
                    tracing::debug!(%error, "promise failure recovered");
                    guard(|| handler(error))
                })
            }
            .boxed_local()
        })
    }

    /// Fails with [`PromiseError::TimedOut`] unless the promise settles
    /// within `duration`.
    pub fn timeout(self, duration: Duration) -> Self {
        let source = self.start;
        Self::from_pending(move || {
            let pending = source();
            async move {
                tokio::time::timeout(duration, pending).await.unwrap_or_else(|_| {
                    tracing::debug!(?duration, "promise timed out");
                    Err(PromiseError::TimedOut(duration))
                })
            }
            .boxed_local()
        })
    }
}

impl Promise<()> {
    /// A promise that settles after `duration`.
    pub fn sleep(duration: Duration) -> Self {
        Self::from_future(move || async move {
            tokio::time::sleep(duration).await;
            Ok(())
        })
    }
}

impl<F: 'static> Promise<F> {
    /// Awaits the function and the argument concurrently, then applies one
    /// to the other.
    ///
    /// No order is guaranteed between the two operands. If both fail, the
    /// function's failure is reported.
    pub fn amap<A, B>(self, argument: Promise<A>) -> Promise<B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        let functions = self.start;
        let values = argument.start;
        Promise::from_pending(move || {
            let both = future::join(functions(), values());
            async move {
                match both.await {
                    (Ok(function), Ok(value)) => guard(move || function(value)),
                    (Err(error), _) | (Ok(_), Err(error)) => Err(error),
                }
            }
            .boxed_local()
        })
    }
}

impl<A: 'static> Promise<Promise<A>> {
    /// Awaits the outer promise, then the promise it produced.
    pub fn join(self) -> Promise<A> {
        self.bind(|inner| inner)
    }
}

impl<A: 'static> IntoFuture for Promise<A> {
    type Output = Settlement<A>;
    type IntoFuture = LocalBoxFuture<'static, Settlement<A>>;

    fn into_future(self) -> Self::IntoFuture {
        self.run()
    }
}

impl<A> Clone for Promise<A> {
    fn clone(&self) -> Self {
        Self {
            start: Rc::clone(&self.start),
        }
    }
}

impl<A> fmt::Display for Promise<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Promise>")
    }
}

impl<A> From<Promise<A>> for Continuation<Promise<A>, A> {
    fn from(promise: Promise<A>) -> Self {
        Self::Wrapped(promise)
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`Promise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromiseFamily;

impl Kind for PromiseFamily {
    type Of<A> = Promise<A>;
}

impl Functor for PromiseFamily {
    fn map<A, B, F>(value: Promise<A>, function: F) -> Promise<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for PromiseFamily {
    fn insert<A>(value: A) -> Promise<A>
    where
        A: Clone + 'static,
    {
        Promise::resolved(value)
    }

    fn amap<A, B, F>(functions: Promise<F>, values: Promise<A>) -> Promise<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl Monad for PromiseFamily {
    fn bind<A, B, F>(value: Promise<A>, continuation: F) -> Promise<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> Promise<B> + 'static,
    {
        value.bind(continuation)
    }
}

static_assertions::assert_not_impl_any!(Promise<i32>: PartialEq, Send, Sync);
