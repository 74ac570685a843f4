//! State - computations that thread a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. `bind` runs the first
//! transition, hands its result to the continuation, and runs the resulting
//! transition against the *new* state. Nothing is mutated in place: running
//! the same `State` twice from the same initial state gives the same answer.
//!
//! States hold functions, so they cannot be compared with `==`. Compare the
//! output of [`State::run`] for the same initial state instead.
//!
//! # Laws
//!
//! On top of the monad laws:
//!
//! - `State::get().bind(State::put)` leaves the state unchanged
//! - `State::put(s).bind(|()| State::get())` returns `s`
//! - `State::put(s1).bind(move |()| State::put(s2))` is `State::put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use monadic::effect::State;
//!
//! let counter = State::new(|s: i32| (s, s + 1))
//!     .bind(|v| State::new(move |s: i32| (v + 10, s + 1)));
//! assert_eq!(counter.run(0), (10, 2));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::typeclass::{Applicative, Continuation, Functor, Kind, Monad};

/// A stateful computation producing an `A` from a state of type `S`.
///
/// # Examples
///
/// ```rust
/// use monadic::effect::State;
///
/// fn next_ticket() -> State<u32, String> {
///     State::get()
///         .bind(|current: u32| State::put(current + 1).map(move |()| format!("T-{current}")))
/// }
///
/// let two = next_ticket().bind(|first| next_ticket().map(move |second| (first.clone(), second)));
/// let ((first, second), next) = two.run(7);
/// assert_eq!(first, "T-7");
/// assert_eq!(second, "T-8");
/// assert_eq!(next, 9);
/// ```
pub struct State<S, A> {
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Creates a state computation from a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Runs the computation, returning the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the computation and keeps only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// A computation returning `value` and leaving the state untouched.
    pub fn insert(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result; the state passes through unchanged.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next) = transition(state);
            (function(value), next)
        })
    }

    /// Runs this transition, then the one chosen by `continuation` against
    /// the new state.
    pub fn bind<B, F>(self, continuation: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next) = transition(state);
            continuation(value).run(next)
        })
    }

    /// Sequences a step producing either a bare value or a state computation.
    pub fn then<B, F>(self, step: F) -> State<S, B>
    where
        F: Fn(A) -> Continuation<State<S, B>, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next) = transition(state);
            match step(value) {
                Continuation::Plain(result) => (result, next),
                Continuation::Wrapped(computation) => computation.run(next),
            }
        })
    }

    /// A computation returning a projection of the current state.
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let length: State<Vec<u8>, usize> = State::gets(Vec::len);
    /// assert_eq!(length.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// A computation returning the current state.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> State<S, ()> {
    /// A computation replacing the state with `new_state`.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// A computation transforming the state with `modifier`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S: 'static, F: 'static> State<S, F> {
    /// Applies the function produced by this computation to the value
    /// produced by `argument`.
    ///
    /// The state flows left to right: this computation runs first and its
    /// final state is the initial state of `argument`.
    ///
    /// ```rust
    /// use monadic::effect::State;
    ///
    /// let function = State::new(|s: i32| (move |x: i32| x * s, s + 1));
    /// let argument = State::new(|s: i32| (s, s * 10));
    /// assert_eq!(function.amap(argument).run(2), (6, 30));
    /// ```
    pub fn amap<A, B>(self, argument: State<S, A>) -> State<S, B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        let functions = self.transition;
        let values = argument.transition;
        State::new(move |state| {
            let (function, intermediate) = functions(state);
            let (value, next) = values(intermediate);
            (function(value), next)
        })
    }
}

impl<S: 'static, A: 'static> State<S, State<S, A>> {
    /// Flattens one level of nesting.
    pub fn join(self) -> State<S, A> {
        self.bind(|inner| inner)
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<State>")
    }
}

impl<S, A> From<State<S, A>> for Continuation<State<S, A>, A> {
    fn from(state: State<S, A>) -> Self {
        Self::Wrapped(state)
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`State`] with a fixed state type `S`.
pub struct StateFamily<S>(PhantomData<S>);

impl<S> Kind for StateFamily<S> {
    type Of<A> = State<S, A>;
}

impl<S: 'static> Functor for StateFamily<S> {
    fn map<A, B, F>(value: State<S, A>, function: F) -> State<S, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl<S: 'static> Applicative for StateFamily<S> {
    fn insert<A>(value: A) -> State<S, A>
    where
        A: Clone + 'static,
    {
        State::insert(value)
    }

    fn amap<A, B, F>(functions: State<S, F>, values: State<S, A>) -> State<S, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl<S: 'static> Monad for StateFamily<S> {
    fn bind<A, B, F>(value: State<S, A>, continuation: F) -> State<S, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        value.bind(continuation)
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: PartialEq);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_is_opaque() {
        let state: State<i32, i32> = State::new(|s| (s, s));
        assert_eq!(format!("{state}"), "<State>");
    }

    #[rstest]
    fn bind_runs_continuation_against_new_state() {
        let computation =
            State::new(|s: i32| (s, s + 1)).bind(|v| State::new(move |s: i32| (v + 10, s + 1)));
        assert_eq!(computation.run(0), (10, 2));
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn runs_do_not_share_state(#[case] initial: i32) {
        let computation = State::modify(|s: i32| s + 1).bind(|()| State::get());
        assert_eq!(computation.run(initial), (initial + 1, initial + 1));
        assert_eq!(computation.run(initial), (initial + 1, initial + 1));
    }

    #[rstest]
    fn map_leaves_state_alone() {
        let computation = State::new(|s: i32| (s * 2, s + 100)).map(|v| v.to_string());
        assert_eq!(computation.run(4), (String::from("8"), 104));
    }

    #[rstest]
    fn then_accepts_plain_and_wrapped_steps() {
        let plain = State::get().then(|s: i32| Continuation::Plain(s * 3));
        let wrapped = State::get().then(|s: i32| State::put(s * 3).into());
        assert_eq!(plain.run(2), (6, 2));
        assert_eq!(wrapped.run(2), ((), 6));
    }

    #[rstest]
    fn put_then_get_returns_put_value() {
        let computation = State::put(9).bind(|()| State::get());
        assert_eq!(computation.run(0), (9, 9));
    }

    #[rstest]
    fn eval_and_exec_split_the_pair() {
        let computation = State::new(|s: u8| (char::from(b'a' + s), s + 1));
        assert_eq!(computation.eval(2), 'c');
        assert_eq!(computation.exec(2), 3);
    }

    #[rstest]
    fn join_runs_inner_after_outer() {
        let nested = State::new(|s: i32| (State::new(move |t: i32| (s + t, t * 2)), s + 1));
        assert_eq!(nested.join().run(1), (3, 4));
    }

    #[rstest]
    fn amap_threads_state_left_to_right() {
        let function = State::new(|s: Vec<&str>| {
            let mut next = s;
            next.push("function");
            (|x: usize| x + 1, next)
        });
        let argument = State::new(|s: Vec<&str>| {
            let length = s.len();
            let mut next = s;
            next.push("argument");
            (length, next)
        });
        let (value, log) = function.amap(argument).run(Vec::new());
        assert_eq!(value, 2);
        assert_eq!(log, vec!["function", "argument"]);
    }
}
