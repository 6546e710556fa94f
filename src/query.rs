//! The [`SequenceQuery`] type and its element-wise transforms.
//!
//! A query owns a `Vec<T>`. Chainable methods consume the query, rewrite the
//! vector and hand the query back, so a pipeline reads top to bottom:
//!
//! ```
//! use sequery::*;
//!
//! let squares = from_vec((1..=10).collect::<Vec<i32>>())
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .take(3)
//!     .into_vec();
//! assert_eq!(squares, vec![4, 16, 36]);
//! ```
//!
//! Ordering, grouping, joins, aggregates and serialization live in
//! [`crate::helpers`] as further `impl` blocks on the same type.

use std::slice::Iter;

/// An eager query over an owned, ordered sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceQuery<T> {
    pub(crate) data: Vec<T>,
}

impl<T> SequenceQuery<T> {
    /// Wrap an existing vector. The vector moves into the query unchanged.
    #[must_use]
    pub const fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Wrap a single element as a one-element sequence.
    #[must_use]
    pub fn from_item(item: T) -> Self {
        Self { data: vec![item] }
    }

    /// Keep the elements for which `pred` holds, in their original order.
    #[must_use]
    pub fn filter<P>(mut self, mut pred: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.data.retain(|t| pred(t));
        self
    }

    /// Replace every element with `f(element)`. Length and order are unchanged.
    #[must_use]
    pub fn map<O, F>(self, f: F) -> SequenceQuery<O>
    where
        F: FnMut(&T) -> O,
    {
        SequenceQuery {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Replace every element with zero or more outputs, concatenated in order.
    #[must_use]
    pub fn flat_map<O, I, F>(self, mut f: F) -> SequenceQuery<O>
    where
        I: IntoIterator<Item = O>,
        F: FnMut(&T) -> I,
    {
        let mut out: Vec<O> = Vec::new();
        for t in &self.data {
            out.extend(f(t));
        }
        SequenceQuery { data: out }
    }

    /// Keep at most the first `n` elements.
    #[must_use]
    pub fn take(mut self, n: usize) -> Self {
        self.data.truncate(n);
        self
    }

    /// Drop the first `n` elements. Skipping past the end leaves the query empty.
    #[must_use]
    pub fn skip(mut self, n: usize) -> Self {
        let n = n.min(self.data.len());
        self.data.drain(..n);
        self
    }

    /// Append the elements of `other` after the current data.
    #[must_use]
    pub fn concat<I>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.data.extend(other);
        self
    }

    /// Append several sequences, each in turn, in argument order.
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let all = from_vec(vec![1, 2])
    ///     .concat_all([vec![3], vec![], vec![4, 5]])
    ///     .into_vec();
    /// assert_eq!(all, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn concat_all<S, I>(mut self, others: S) -> Self
    where
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        for other in others {
            self.data.extend(other);
        }
        self
    }

    /// Run `f` over every element without changing the data.
    #[must_use]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnMut(&T),
    {
        self.data.iter().for_each(f);
        self
    }

    /// The live underlying sequence.
    pub fn to_array(&self) -> &[T] {
        &self.data
    }

    /// Same as [`to_array`](Self::to_array).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Give up the query and return its data.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Clone the data out, leaving the query usable.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> From<Vec<T>> for SequenceQuery<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for SequenceQuery<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for SequenceQuery<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceQuery<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
