//! Order-preserving deduplication.
//!
//! # Overview
//! - [`SequenceQuery::distinct`] - drop elements equal to an earlier element
//! - [`SequenceQuery::distinct_by`] - drop elements whose selected key was already seen
//!
//! Both keep the **first** element seen for every key and leave the survivors
//! in their original relative order.

use crate::SequenceQuery;
use std::collections::HashSet;
use std::hash::Hash;

impl<T: Eq + Hash> SequenceQuery<T> {
    /// Exact distinct on the elements themselves.
    ///
    /// # Example
    /// ```
    /// use sequery::*;
    /// let v = from_vec(vec![3, 1, 3, 2, 1]).distinct().into_vec();
    /// assert_eq!(v, vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn distinct(mut self) -> Self {
        let keep: Vec<bool> = {
            let mut seen: HashSet<&T> = HashSet::with_capacity(self.data.len());
            self.data.iter().map(|t| seen.insert(t)).collect()
        };
        let mut keep = keep.into_iter();
        self.data.retain(|_| keep.next().unwrap_or(false));
        self
    }
}

impl<T> SequenceQuery<T> {
    /// Distinct on a key projected from each element.
    ///
    /// # Example
    /// ```
    /// use sequery::*;
    /// let v = from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry"])
    ///     .distinct_by(|s| s.chars().next())
    ///     .into_vec();
    /// assert_eq!(v, vec!["apple", "banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(mut self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen: HashSet<K> = HashSet::new();
        self.data.retain(|t| seen.insert(key(t)));
        self
    }
}
