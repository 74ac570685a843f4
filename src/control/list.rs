//! List - a non-deterministic computation.
//!
//! A `List<A>` holds zero or more simultaneous results. `map` transforms each
//! of them, `bind` runs the continuation once per element and concatenates
//! the resulting lists in element order, and `amap` takes the cross product of
//! functions and arguments.
//!
//! # Cross-product order
//!
//! `amap` iterates the functions in the outer loop and the arguments in the
//! inner loop, so the result is laid out row by row:
//!
//! ```rust
//! use monadic::list;
//!
//! let functions = list![(|x: i32| x + 1) as fn(i32) -> i32, |x: i32| x * 10];
//! assert_eq!(functions.amap(list![1, 2]), list![2, 3, 10, 20]);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::list;
//!
//! let branches = list![1, 2, 3].bind(|x| list![x, -x]);
//! assert_eq!(branches, list![1, -1, 2, -2, 3, -3]);
//! assert_eq!(branches.slice(1..3), list![-1, 2]);
//! assert_eq!(branches[4], 3);
//! assert_eq!(branches.to_string(), "[1, -1, 2, -2, 3, -3]");
//! ```

use std::fmt;
use std::ops::{Add, Bound, Index, RangeBounds};

use crate::typeclass::{
    Applicative, Continuation, Functor, Kind, Monad, Monoid, Semigroup, WithIdentity,
};

/// Builds a [`List`] from its elements.
///
/// ```rust
/// use monadic::list;
/// use monadic::control::List;
///
/// let empty: List<u8> = list![];
/// assert!(empty.is_empty());
/// assert_eq!(list![1, 2, 3].len(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::control::List::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::control::List::from(::std::vec![$($element),+])
    };
}

/// An ordered collection of alternative results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<A>(Vec<A>);

impl<A> List<A> {
    /// The list with no results.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// A list with exactly one result.
    pub fn insert(value: A) -> Self {
        Self(vec![value])
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no results.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&A> {
        self.0.get(index)
    }

    /// Iterates over the results in order.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.0.iter()
    }

    /// Borrows the results as a slice.
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }

    /// Returns the underlying vector.
    pub fn into_vec(self) -> Vec<A> {
        self.0
    }

    /// Transforms every result, preserving order and length.
    pub fn map<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> B,
    {
        List(self.0.into_iter().map(function).collect())
    }

    /// Runs `continuation` on every result and concatenates the produced
    /// lists in element order.
    pub fn bind<B, F>(self, mut continuation: F) -> List<B>
    where
        F: FnMut(A) -> List<B>,
    {
        List(
            self.0
                .into_iter()
                .flat_map(|value| continuation(value).0)
                .collect(),
        )
    }

    /// Sequences a step producing either a bare value or a `List`.
    pub fn then<B, F>(self, mut step: F) -> List<B>
    where
        F: FnMut(A) -> Continuation<List<B>, B>,
    {
        self.bind(|value| step(value).into_context(List::insert))
    }
}

impl<A: Clone> List<A> {
    /// Returns the results in `range` as a new list.
    ///
    /// Bounds past the end are clamped, so the result may be shorter than the
    /// range, or empty.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let length = self.0.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(length);
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => length,
        }
        .min(length);

        if start >= end {
            return Self::empty();
        }
        Self(self.0[start..end].to_vec())
    }
}

impl<F> List<F> {
    /// Applies every function to every argument; functions outer, arguments
    /// inner.
    pub fn amap<A, B>(self, arguments: List<A>) -> List<B>
    where
        F: Fn(A) -> B,
        A: Clone,
    {
        List(
            self.0
                .iter()
                .flat_map(|function| arguments.0.iter().cloned().map(function))
                .collect(),
        )
    }
}

impl<A> List<List<A>> {
    /// Concatenates the inner lists.
    pub fn join(self) -> List<A> {
        self.bind(|inner| inner)
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(values: Vec<A>) -> Self {
        Self(values)
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<A> Index<usize> for List<A> {
    type Output = A;

    fn index(&self, index: usize) -> &A {
        &self.0[index]
    }
}

impl<A> Semigroup for List<A> {
    fn addition_operation(self, other: Self) -> Self {
        Self(self.0.addition_operation(other.0))
    }
}

impl<A> Monoid for List<A> {
    fn identity_element() -> Self {
        Self::empty()
    }
}

impl<A> Add<WithIdentity<List<A>>> for List<A> {
    type Output = WithIdentity<List<A>>;

    fn add(self, other: WithIdentity<List<A>>) -> WithIdentity<List<A>> {
        WithIdentity::Value(self).addition_operation(other)
    }
}

impl<A> From<List<A>> for Continuation<List<A>, A> {
    fn from(list: List<A>) -> Self {
        Self::Wrapped(list)
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for (position, element) in self.0.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("]")
    }
}

// =============================================================================
// Type class instances
// =============================================================================

/// Family marker for [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFamily;

impl Kind for ListFamily {
    type Of<A> = List<A>;
}

impl Functor for ListFamily {
    fn map<A, B, F>(value: List<A>, function: F) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        value.map(function)
    }
}

impl Applicative for ListFamily {
    fn insert<A>(value: A) -> List<A>
    where
        A: Clone + 'static,
    {
        List::insert(value)
    }

    fn amap<A, B, F>(functions: List<F>, values: List<A>) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        functions.amap(values)
    }
}

impl Monad for ListFamily {
    fn bind<A, B, F>(value: List<A>, continuation: F) -> List<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> List<B> + 'static,
    {
        value.bind(continuation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_concatenates_in_element_order() {
        let result = list![1, 2, 3].bind(|x| list![x, -x]);
        assert_eq!(result, list![1, -1, 2, -2, 3, -3]);
    }

    #[rstest]
    fn map_preserves_length_and_order() {
        let result = list!["c", "a", "b"].map(str::to_uppercase);
        assert_eq!(result.into_vec(), vec!["C", "A", "B"]);
    }

    #[rstest]
    fn amap_is_row_major_cross_product() {
        let functions: List<fn(i32) -> i32> = list![|x: i32| x + 100, |x: i32| x * 2];
        let result = functions.amap(list![1, 2, 3]);
        assert_eq!(result, list![101, 102, 103, 2, 4, 6]);
        assert_eq!(result.len(), 2 * 3);
    }

    #[rstest]
    fn empty_list_stays_empty() {
        let empty: List<i32> = list![];
        assert!(empty.clone().map(|x| x + 1).is_empty());
        assert!(empty.clone().bind(|x| list![x, x]).is_empty());
        let no_functions: List<fn(i32) -> i32> = list![];
        assert!(no_functions.amap(list![1, 2]).is_empty());
        let functions = list![(|x: i32| x) as fn(i32) -> i32];
        assert!(functions.amap(empty).is_empty());
    }

    #[rstest]
    fn bind_with_empty_branches_drops_elements() {
        let evens = list![1, 2, 3, 4].bind(|x| if x % 2 == 0 { list![x] } else { list![] });
        assert_eq!(evens, list![2, 4]);
    }

    #[rstest]
    fn slice_returns_clamped_list() {
        let values = list![10, 20, 30];
        assert_eq!(values.slice(0..2), list![10, 20]);
        assert_eq!(values.slice(1..), list![20, 30]);
        assert_eq!(values.slice(..=0), list![10]);
        assert_eq!(values.slice(2..10), list![30]);
        assert_eq!(values.slice(5..9), List::empty());
    }

    #[rstest]
    fn index_returns_bare_element() {
        let values = list!['x', 'y'];
        assert_eq!(values[1], 'y');
        assert_eq!(values.get(2), None);
    }

    #[rstest]
    fn concatenation_is_the_monoid() {
        let combined = list![1, 2].addition_operation(list![3]);
        assert_eq!(combined, list![1, 2, 3]);
        assert_eq!(List::<i32>::identity_element(), list![]);
    }

    #[rstest]
    fn bare_list_on_the_left_absorbs_identity() {
        assert_eq!(list![1] + WithIdentity::Identity, WithIdentity::Value(list![1]));
        assert_eq!(list![1] + WithIdentity::Value(list![2]), WithIdentity::Value(list![1, 2]));
    }

    #[rstest]
    fn display_is_bracketed() {
        assert_eq!(list![1, 2, 3].to_string(), "[1, 2, 3]");
        assert_eq!(List::<u8>::empty().to_string(), "[]");
    }

    #[rstest]
    fn collects_from_iterator() {
        let squares: List<u32> = (1..=3).map(|x| x * x).collect();
        assert_eq!(squares, list![1, 4, 9]);
        assert_eq!((&squares).into_iter().sum::<u32>(), 14);
    }
}
