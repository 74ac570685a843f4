//! # monadic
//!
//! Functor, Applicative and Monad abstractions for Rust with a set of
//! ready-made instances and the tooling to check them.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative), [`Monad`](typeclass::Monad),
//!   [`Semigroup`](typeclass::Semigroup) and [`Monoid`](typeclass::Monoid),
//!   expressed over type families through [`Kind`](typeclass::Kind)
//! - **Function Composition**: identity, Kleisli composition, currying
//! - **Control Structures**: [`Maybe`](control::Maybe),
//!   [`Optional`](control::Optional), [`Either`](control::Either),
//!   [`Outcome`](control::Outcome), [`List`](control::List)
//! - **Effects**: [`Reader`](effect::Reader) with `Compose`/`Pipe`,
//!   [`State`](effect::State), [`Writer`](effect::Writer),
//!   [`IO`](effect::IO) and the asynchronous `Promise`
//! - **Operators**: `|` for map, `>>` for bind, `&` for amap, `+` for monoids
//! - **Laws**: executable functor, applicative and monad laws
//!
//! ## Feature Flags
//!
//! - `derive`: the `curry!` procedural macro
//! - `operators`: infix operator sugar
//! - `promise`: the tokio-driven `Promise` type
//! - `laws`: the law harness and the `law_tests!` macro
//! - `serde`: `Serialize`/`Deserialize` for the data instances
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! fn half(value: i32) -> Maybe<i32> {
//!     if value % 2 == 0 { Just(value / 2) } else { Nothing }
//! }
//!
//! assert_eq!(Just(12).bind(half).bind(half), Just(3));
//! assert_eq!(Just(12).bind(half).bind(half).bind(half), Nothing);
//! assert_eq!(MaybeFamily::map2(Just(2), Just(5), |a, b| a * b), Just(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::control::*;
    pub use crate::effect::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "laws")]
    pub use crate::laws::{LawViolation, Observe};
}

pub mod compose;
pub mod control;
pub mod effect;
pub mod typeclass;

#[cfg(feature = "operators")]
pub mod operators;

#[cfg(feature = "laws")]
pub mod laws;

#[doc(hidden)]
pub use paste;

#[cfg(feature = "laws")]
#[doc(hidden)]
pub use proptest;
