//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! Instead, every monadic type has a zero-sized *family* marker implementing
//! [`Kind`]; the marker's generic associated type `Of<A>` names the type
//! constructor applied to `A`.
//!
//! Type classes ([`Functor`](super::Functor), [`Applicative`](super::Applicative),
//! [`Monad`](super::Monad)) are implemented on the family markers with
//! associated functions, which keeps generic code free of self-type juggling:
//!
//! ```rust
//! use monadic::typeclass::{Functor, Kind};
//! use monadic::control::{Just, Maybe, MaybeFamily};
//!
//! fn double_all<M: Functor>(value: M::Of<i32>) -> M::Of<i32> {
//!     M::map(value, |number| number * 2)
//! }
//!
//! assert_eq!(double_all::<MaybeFamily>(Just(21)), Just(42));
//! ```
//!
//! Because every instance has its own family, mixing two instances in one
//! expression (comparing a `List` with a `State`, binding a `Maybe` with a
//! function that returns an `Either`) is a type error rather than a runtime
//! condition.

/// A type constructor, named by a zero-sized family marker.
///
/// # Laws
///
/// `Of<A>` must be the same type constructor for every `A`; a family never
/// changes shape depending on its payload.
pub trait Kind {
    /// The type constructor applied to `A`.
    type Of<A>;
}
