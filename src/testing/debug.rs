//! Debug taps for inspecting a query pipeline during test execution.
//!
//! Each tap writes `[Debug: <label>] ...` lines to stderr and hands the query
//! back unchanged, so it can be dropped between any two chained calls.

use crate::SequenceQuery;
use std::fmt::Debug;

/// Elements printed by [`SequenceQuery::debug_inspect`] before it summarizes the rest.
const INSPECT_LIMIT: usize = 10;

impl<T: Debug> SequenceQuery<T> {
    /// Print the element count and the first few elements.
    ///
    /// # Example
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let doubled = from_vec(vec![1, 2, 3])
    ///     .debug_inspect("after source")
    ///     .map(|x| x * 2)
    ///     .debug_inspect("after map")
    ///     .into_vec();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn debug_inspect(self, label: &str) -> Self {
        eprintln!("[Debug: {label}] Processing {} elements", self.data.len());
        for (i, item) in self.data.iter().take(INSPECT_LIMIT).enumerate() {
            eprintln!("[Debug: {label}] [{i}]: {item:?}");
        }
        if self.data.len() > INSPECT_LIMIT {
            eprintln!(
                "[Debug: {label}] ... ({} more elements)",
                self.data.len() - INSPECT_LIMIT
            );
        }
        self
    }

    /// Print the first `n` elements.
    #[must_use]
    pub fn debug_sample(self, label: &str, n: usize) -> Self {
        eprintln!(
            "[Debug: {label}] Sampling first {} of {} elements:",
            n.min(self.data.len()),
            self.data.len()
        );
        for (i, item) in self.data.iter().take(n).enumerate() {
            eprintln!("[Debug: {label}] [{i}]: {item:?}");
        }
        self
    }
}

impl<T> SequenceQuery<T> {
    /// Print only the element count.
    #[must_use]
    pub fn debug_count(self, label: &str) -> Self {
        eprintln!("[Debug: {label}] Count: {} elements", self.data.len());
        self
    }
}
