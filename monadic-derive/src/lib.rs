//! Procedural macros for the `monadic` crate.
//!
//! Only one macro lives here: [`curry!`], which turns a closure or a function
//! of fixed arity into a chain of single-argument closures. It is re-exported
//! from `monadic::compose` when the `derive` feature is enabled.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a closure or a function of known arity into curried form.
///
/// # Forms
///
/// - `curry!(|a, b, c| body)`: the arity is read from the closure parameters.
/// - `curry!(function_path, arity)`: the arity is given explicitly.
///
/// Arity `0` returns the function itself as a thunk called with no arguments
/// (`thunk()`). Arity `1` also returns the function unchanged. Any larger arity
/// produces nested closures that can be partially applied and reused.
///
/// # Examples
///
/// ```rust,ignore
/// use monadic::compose::curry;
///
/// fn volume(width: i32, height: i32, depth: i32) -> i32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let flat = curried(2)(3);
/// assert_eq!(flat(4), 24);
/// assert_eq!(flat(5), 30);
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
