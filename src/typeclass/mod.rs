//! Type classes for functional programming.
//!
//! - [`Kind`]: higher-kinded type emulation through family markers
//! - [`Functor`], [`Applicative`], [`Monad`]: the shared polymorphic contract
//!   every monadic instance implements
//! - [`Continuation`]: the typed result of a `then` step
//! - [`Semigroup`], [`Monoid`], [`WithIdentity`], [`mconcat`]: combining values
//! - [`Sum`], [`Product`], [`Max`], [`Min`], [`Bounded`]: monoid selectors for
//!   bare numeric types

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::Kind;
pub use monad::{Continuation, Monad};
pub use monoid::{Monoid, WithIdentity, mconcat};
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Product, Sum};
