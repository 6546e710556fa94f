//! Stable ordering for [`SequenceQuery`].
//!
//! - [`SequenceQuery::order_by`] -- ascending by a selected key.
//! - [`SequenceQuery::order_by_descending`] -- descending by a selected key.
//! - [`SequenceQuery::order_by_with`] -- either direction, chosen at runtime.
//!
//! All three are stable: elements whose keys compare equal keep the relative
//! order they had before the sort, in both directions. The key selector is
//! evaluated once per element.
//!
//! Keys must be totally ordered (`K: Ord`). Wrap floating point keys in
//! [`OrderedFloat`](crate::OrderedFloat), which orders `NaN` above every
//! number, or in [`NotNan`](crate::NotNan) when `NaN` should be rejected up
//! front.
//!
//! ## Example
//! ```
//! use sequery::*;
//!
//! let people = from_vec(vec![("ann", 31), ("bob", 25), ("cid", 31), ("dee", 19)]);
//! let by_age = people.order_by_descending(|p| p.1).map(|p| p.0).into_vec();
//! assert_eq!(by_age, vec!["ann", "cid", "bob", "dee"]);
//! ```

use crate::SequenceQuery;
use std::cmp::Reverse;

/// Sort direction for [`SequenceQuery::order_by_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl<T> SequenceQuery<T> {
    /// Sort ascending by `key`. Ties keep their original order.
    #[must_use]
    pub fn order_by<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        // sort_by_cached_key is stable and calls `key` once per element.
        self.data.sort_by_cached_key(key);
        self
    }

    /// Sort descending by `key`. Ties keep their original order.
    #[must_use]
    pub fn order_by_descending<K, F>(mut self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.data.sort_by_cached_key(|t| Reverse(key(t)));
        self
    }

    /// Sort by `key` in the given direction.
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let q = from_vec(vec![2, 3, 1]).order_by_with(|x| *x, SortOrder::Descending);
    /// assert_eq!(q.into_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn order_by_with<K, F>(self, key: F, order: SortOrder) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        match order {
            SortOrder::Ascending => self.order_by(key),
            SortOrder::Descending => self.order_by_descending(key),
        }
    }
}
