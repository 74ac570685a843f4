//! Function composition utilities.
//!
//! - [`identity`], [`constant`], [`flip`]: basic combinators
//! - [`kleisli_compose`]: composition of effectful functions `A -> M<B>`
//! - [`curry`] / [`Curried`]: run-time arity currying over same-typed arguments
//! - `curry!` (feature `derive`): compile-time currying of closures and
//!   functions of any fixed arity
//! - [`from_none_or_value`]: building a context from an `Option`
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::curry;
//!
//! fn volume(width: u32, height: u32, depth: u32) -> u32 {
//!     width * height * depth
//! }
//!
//! let by_floor = curry!(volume, 3)(10)(3);
//! assert_eq!(by_floor(2), 60);
//! assert_eq!(by_floor(4), 120);
//! ```

mod currying;
mod kleisli;
mod utils;

pub use currying::{Application, Curried, CurryError, curry};
pub use kleisli::kleisli_compose;
pub use utils::{constant, flip, from_none_or_value, identity};

#[cfg(feature = "derive")]
pub use monadic_derive::curry;
