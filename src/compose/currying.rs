//! Arity-tracking partial application for homogeneous functions.
//!
//! The `curry!` macro handles functions whose
//! parameters are fixed at compile time. [`Curried`] covers the remaining
//! case: a function over a *list* of same-typed arguments whose arity is
//! chosen at run time, such as a variadic sum.
//!
//! Every application returns a fresh value; a partial application can be
//! reused with different continuations.
//!
//! ```rust
//! use monadic::compose::{Application, curry};
//!
//! let sum = curry(3, |numbers: Vec<i32>| numbers.iter().sum::<i32>());
//! let partial = sum.apply(1).unwrap().into_partial().unwrap();
//!
//! let first = partial.apply_all([2, 3]).unwrap();
//! let second = partial.apply_all([20, 30]).unwrap();
//!
//! assert_eq!(first, Application::Complete(6));
//! assert_eq!(second, Application::Complete(51));
//! ```

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Failure of a curried application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurryError {
    /// More arguments were supplied than the function accepts.
    #[error("function of arity {arity} received {supplied} arguments")]
    TooManyArguments {
        /// The declared arity.
        arity: usize,
        /// The number of arguments supplied so far, including the rejected ones.
        supplied: usize,
    },
    /// The function was forced before all of its arguments were supplied.
    #[error("function of arity {arity} forced with only {supplied} arguments")]
    MissingArguments {
        /// The declared arity.
        arity: usize,
        /// The number of arguments supplied so far.
        supplied: usize,
    },
}

/// The outcome of applying an argument to a [`Curried`] function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Application<T, R> {
    /// More arguments are needed.
    Partial(Curried<T, R>),
    /// All arguments were supplied and the function has been called.
    Complete(R),
}

impl<T, R> Application<T, R> {
    /// Returns the result if the application completed.
    pub fn into_complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the partially applied function if more arguments are needed.
    pub fn into_partial(self) -> Option<Curried<T, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }
}

/// A function of `arity` same-typed arguments with the arguments supplied so
/// far.
pub struct Curried<T, R> {
    arity: usize,
    arguments: Vec<T>,
    function: Rc<dyn Fn(Vec<T>) -> R>,
}

impl<T: Clone, R> Curried<T, R> {
    /// Wraps `function`, which will be called once `arity` arguments have been
    /// supplied.
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<T>) -> R + 'static,
    {
        Self {
            arity,
            arguments: Vec::with_capacity(arity),
            function: Rc::new(function),
        }
    }

    /// The total number of arguments the function takes.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The number of arguments still missing.
    pub fn remaining(&self) -> usize {
        self.arity - self.arguments.len()
    }

    /// Supplies one argument.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] if no argument is missing.
    pub fn apply(&self, argument: T) -> Result<Application<T, R>, CurryError> {
        self.apply_all([argument])
    }

    /// Supplies several arguments at once.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] if the arguments exceed the
    /// remaining arity; the function is not called in that case.
    pub fn apply_all<I>(&self, arguments: I) -> Result<Application<T, R>, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut accumulated = self.arguments.clone();
        accumulated.extend(arguments);

        if accumulated.len() > self.arity {
            return Err(CurryError::TooManyArguments {
                arity: self.arity,
                supplied: accumulated.len(),
            });
        }

        if accumulated.len() == self.arity {
            return Ok(Application::Complete((self.function)(accumulated)));
        }

        Ok(Application::Partial(Self {
            arity: self.arity,
            arguments: accumulated,
            function: Rc::clone(&self.function),
        }))
    }

    /// Calls the function if no argument is missing.
    ///
    /// This is how a function of arity zero is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::MissingArguments`] while arguments are missing.
    pub fn force(&self) -> Result<R, CurryError> {
        if self.remaining() > 0 {
            return Err(CurryError::MissingArguments {
                arity: self.arity,
                supplied: self.arguments.len(),
            });
        }
        Ok((self.function)(self.arguments.clone()))
    }
}

/// Curries `function` over `arity` same-typed arguments.
pub fn curry<T, R, F>(arity: usize, function: F) -> Curried<T, R>
where
    T: Clone,
    F: Fn(Vec<T>) -> R + 'static,
{
    Curried::new(arity, function)
}

impl<T: Clone, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            arguments: self.arguments.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<T: PartialEq, R> PartialEq for Curried<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.arity == other.arity
            && self.arguments == other.arguments
            && Rc::ptr_eq(&self.function, &other.function)
    }
}

impl<T: Eq, R> Eq for Curried<T, R> {}

impl<T: fmt::Debug, R> fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn concatenate(parts: Vec<String>) -> String {
        parts.concat()
    }

    #[rstest]
    fn completes_when_arity_is_reached() {
        let joined = curry(2, concatenate);
        let partial = joined
            .apply(String::from("a"))
            .unwrap()
            .into_partial()
            .unwrap();
        assert_eq!(partial.remaining(), 1);

        let result = partial.apply(String::from("b")).unwrap();
        assert_eq!(result.into_complete(), Some(String::from("ab")));
    }

    #[rstest]
    fn partial_application_is_reusable() {
        let product = curry(2, |values: Vec<i64>| values.iter().product::<i64>());
        let double = product.apply(2).unwrap().into_partial().unwrap();

        assert_eq!(double.apply(5).unwrap().into_complete(), Some(10));
        assert_eq!(double.apply(7).unwrap().into_complete(), Some(14));
    }

    #[rstest]
    fn arity_zero_is_forced_directly() {
        let thunk = curry(0, |_: Vec<()>| "ready");
        assert_eq!(thunk.force(), Ok("ready"));
        assert_eq!(
            thunk.apply(()),
            Err(CurryError::TooManyArguments { arity: 0, supplied: 1 })
        );
    }

    #[rstest]
    fn forcing_early_reports_missing_arguments() {
        let sum = curry(3, |values: Vec<i32>| values.iter().sum::<i32>());
        let partial = sum.apply(1).unwrap().into_partial().unwrap();
        assert_eq!(
            partial.force(),
            Err(CurryError::MissingArguments { arity: 3, supplied: 1 })
        );
    }

    #[rstest]
    fn excess_arguments_are_rejected_without_calling() {
        let sum = curry(2, |values: Vec<i32>| values.iter().sum::<i32>());
        let error = sum.apply_all([1, 2, 3]).unwrap_err();
        assert_eq!(error.to_string(), "function of arity 2 received 3 arguments");
    }
}
