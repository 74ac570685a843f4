//! Pure data instances of the monad contract.
//!
//! - [`Maybe`] (`Just` / `Nothing`) and its `Some`-tagged view [`Optional`]
//! - [`Either`] (`Left` / `Right`) and its `Error` / `Result`-tagged view
//!   [`Outcome`]
//! - [`List`], the non-deterministic computation, built with [`list!`](crate::list)
//!
//! Each type offers `insert`, `map`, `amap`, `bind`, `then` and `join` as
//! inherent methods, and a family marker (`MaybeFamily`, `EitherFamily<L>`,
//! ...) implementing the [`typeclass`](crate::typeclass) traits for generic
//! code.

mod either;
mod list;
mod maybe;
mod optional;
mod outcome;

pub use either::{Either, EitherFamily, Left, Right};
pub use list::{List, ListFamily};
pub use maybe::{Just, Maybe, MaybeFamily, Nothing};
pub use optional::{Optional, OptionalFamily};
pub use outcome::{Outcome, OutcomeFamily};
