//! Failures carried by the deferred-effect types.
//!
//! A [`Promise`](crate::effect::Promise) never reports failure through its
//! payload. Whatever goes wrong while it runs (an explicit rejection, a panic
//! in a user function, an expired deadline, a runtime that could not be
//! started) is converted into a [`PromiseError`] and travels on the error
//! channel of the `Result` the promise settles with.

use std::any::Any;
use std::time::Duration;

use thiserror::Error;

/// The failure channel of a [`Promise`](crate::effect::Promise).
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use monadic::effect::PromiseError;
///
/// assert_eq!(PromiseError::rejected("no route").to_string(), "promise rejected: no route");
/// assert_eq!(
///     PromiseError::TimedOut(Duration::from_millis(5)).to_string(),
///     "promise timed out after 5ms"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromiseError {
    /// The computation rejected itself with a message.
    #[error("promise rejected: {0}")]
    Rejected(String),
    /// A function inside the chain panicked.
    #[error("promise panicked: {0}")]
    Panicked(String),
    /// The computation did not settle within its deadline.
    #[error("promise timed out after {0:?}")]
    TimedOut(Duration),
    /// The runtime driving the promise could not be built.
    #[error("promise runtime unavailable: {0}")]
    Runtime(String),
}

impl PromiseError {
    /// Builds a [`PromiseError::Rejected`] from anything displayable.
    pub fn rejected(reason: impl std::fmt::Display) -> Self {
        Self::Rejected(reason.to_string())
    }

    /// Returns `true` for [`PromiseError::Rejected`].
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns `true` for [`PromiseError::Panicked`].
    pub const fn is_panicked(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    #[cfg(feature = "promise")]
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::Panicked(panic_message(payload))
    }
}

impl From<std::io::Error> for PromiseError {
    fn from(error: std::io::Error) -> Self {
        Self::rejected(error)
    }
}

impl From<std::num::ParseIntError> for PromiseError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::rejected(error)
    }
}

impl From<std::num::ParseFloatError> for PromiseError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::rejected(error)
    }
}

impl From<String> for PromiseError {
    fn from(reason: String) -> Self {
        Self::Rejected(reason)
    }
}

impl From<&str> for PromiseError {
    fn from(reason: &str) -> Self {
        Self::rejected(reason)
    }
}

/// Extracts the message of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic")
    }
}
