//! Standard library helpers for constructing [`SequenceQuery`]s.
//!
//! These wrap native Rust data (a `Vec<T>`, any iterator, or a lone value)
//! into a query, ready for chaining.
//!
//! ### Overview
//! - [`from_vec`] -- moves a `Vec<T>` into a query.
//! - [`from_iter`] -- collects any `IntoIterator<Item = T>` into a query.
//! - [`from_item`] -- wraps a single value as a one-element query.
//!
//! ### Example
//! ```
//! use sequery::*;
//!
//! let words = from_vec(vec!["alpha", "beta", "gamma"]);
//! assert_eq!(words.count(), 3);
//!
//! let squared = from_iter(1..=5).map(|n| n * n);
//! assert_eq!(squared.into_vec(), vec![1, 4, 9, 16, 25]);
//!
//! assert_eq!(from_item(42).into_vec(), vec![42]);
//! ```

use crate::SequenceQuery;

/// Create a [`SequenceQuery<T>`] from a pre-existing [`Vec<T>`].
///
/// The vector is moved, not copied; element order is kept as given.
///
/// ### Example
/// ```
/// use sequery::*;
///
/// let q = from_vec(vec![10, 20, 30]);
/// assert_eq!(q.to_array(), &[10, 20, 30]);
/// ```
pub fn from_vec<T>(data: Vec<T>) -> SequenceQuery<T> {
    SequenceQuery::new(data)
}

/// Create a [`SequenceQuery<T>`] from any iterator or collection implementing [`IntoIterator`].
///
/// The iterator is drained eagerly; it must be finite.
pub fn from_iter<T, I>(iter: I) -> SequenceQuery<T>
where
    I: IntoIterator<Item = T>,
{
    from_vec(iter.into_iter().collect::<Vec<T>>())
}

/// Create a one-element [`SequenceQuery<T>`] from a single value.
pub fn from_item<T>(item: T) -> SequenceQuery<T> {
    SequenceQuery::from_item(item)
}
