//! Instances whose payload is a function or a deferred computation.
//!
//! # Pure function carriers
//!
//! - [`Reader`]: reads a shared environment; [`Compose`] and [`Pipe`] reuse
//!   it for point-free composition and left-to-right pipelines
//! - [`State`]: threads a state value through a chain of transitions
//! - [`Writer`]: pairs a value with a log combined through
//!   [`Semigroup`](crate::typeclass::Semigroup)
//!
//! # Deferred effects
//!
//! - [`IO`]: a re-runnable synchronous effect
//! - [`Promise`] (feature `promise`): an asynchronous computation whose
//!   failures travel as [`PromiseError`]
//!
//! Reader, State, IO and Promise hold functions and therefore cannot be
//! compared with `==`; compare what they produce when run instead.
//!
//! ```rust
//! use monadic::effect::{IO, State};
//!
//! let io = IO::insert(10).map(|x| x * 2).bind(|x| IO::insert(x + 1));
//! assert_eq!(io.run(), 21);
//!
//! let state = State::new(|s: i32| (s, s + 1)).bind(|v| State::new(move |s: i32| (v + 10, s + 1)));
//! assert_eq!(state.run(0), (10, 2));
//! ```

mod composition;
mod error;
mod io;
#[cfg(feature = "promise")]
mod promise;
mod reader;
mod state;
mod writer;

pub use composition::{Compose, ComposeFamily, Pipe};
pub use error::PromiseError;
pub use io::{IO, IoFamily};
#[cfg(feature = "promise")]
pub use promise::{Promise, PromiseFamily, Reject, Resolve, Settlement};
pub use reader::{Reader, ReaderFamily};
pub use state::{State, StateFamily};
pub use writer::{ListWriter, NumberWriter, StringWriter, Writer, WriterFamily};
