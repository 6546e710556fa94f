//! Key-based joins against a second sequence.
//!
//! Both joins first index the inner sequence into a `HashMap<K, Vec<U>>`
//! (keeping each key's inner elements in their original order), then walk the
//! outer sequence in order and probe the index.
//!
//! ## Available operations
//! - [`SequenceQuery::join`] - inner join; unmatched outer elements are dropped
//! - [`SequenceQuery::left_join`] - left outer join; unmatched outer elements emit once with `None`
//!
//! ### Notes
//! - Output is outer-major: all rows for the first outer element, then the second, and so on.
//!   Within one outer element, rows follow the inner elements' original order.
//! - Multiple inner matches fan out, so the output length of [`join`](SequenceQuery::join)
//!   is the sum over outer elements of their matching inner count.
//!
//! ## Example
//! ```
//! use sequery::*;
//!
//! let users = from_vec(vec![(1u32, "Alice"), (2, "Bob"), (3, "Cy")]);
//! let scores = vec![(1u32, 95u32), (2, 87), (1, 70), (4, 60)];
//!
//! let joined = users
//!     .join(scores, |u| u.0, |s: &(u32, u32)| s.0, |u, s| (u.1, s.1))
//!     .into_vec();
//! assert_eq!(joined, vec![("Alice", 95), ("Alice", 70), ("Bob", 87)]);
//! ```

use crate::SequenceQuery;
use std::collections::HashMap;
use std::hash::Hash;

/// Index `inner` by key, preserving the encounter order of each key's elements.
fn build_lookup<U, K, F>(inner: impl IntoIterator<Item = U>, mut key: F) -> HashMap<K, Vec<U>>
where
    K: Eq + Hash,
    F: FnMut(&U) -> K,
{
    let mut lookup: HashMap<K, Vec<U>> = HashMap::new();
    for u in inner {
        lookup.entry(key(&u)).or_default().push(u);
    }
    lookup
}

impl<T> SequenceQuery<T> {
    /// Inner join with `other` on `outer_key(t) == inner_key(u)`, emitting
    /// `result(&t, &u)` for every matching pair.
    #[must_use]
    pub fn join<U, K, R, I, OK, IK, RF>(
        self,
        other: I,
        mut outer_key: OK,
        inner_key: IK,
        mut result: RF,
    ) -> SequenceQuery<R>
    where
        I: IntoIterator<Item = U>,
        K: Eq + Hash,
        OK: FnMut(&T) -> K,
        IK: FnMut(&U) -> K,
        RF: FnMut(&T, &U) -> R,
    {
        let lookup = build_lookup(other, inner_key);
        let mut out: Vec<R> = Vec::new();
        for t in &self.data {
            if let Some(us) = lookup.get(&outer_key(t)) {
                for u in us {
                    out.push(result(t, u));
                }
            }
        }
        SequenceQuery { data: out }
    }

    /// Left outer join with `other`. Every outer element appears at least once;
    /// elements without a match are emitted once as `result(&t, None)`.
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let users = from_vec(vec![(1u32, "Alice"), (3, "Cy")]);
    /// let scores = vec![(1u32, 95u32)];
    ///
    /// let rows = users
    ///     .left_join(scores, |u| u.0, |s: &(u32, u32)| s.0, |u, s| (u.1, s.map(|s| s.1)))
    ///     .into_vec();
    /// assert_eq!(rows, vec![("Alice", Some(95)), ("Cy", None)]);
    /// ```
    #[must_use]
    pub fn left_join<U, K, R, I, OK, IK, RF>(
        self,
        other: I,
        mut outer_key: OK,
        inner_key: IK,
        mut result: RF,
    ) -> SequenceQuery<R>
    where
        I: IntoIterator<Item = U>,
        K: Eq + Hash,
        OK: FnMut(&T) -> K,
        IK: FnMut(&U) -> K,
        RF: FnMut(&T, Option<&U>) -> R,
    {
        let lookup = build_lookup(other, inner_key);
        let mut out: Vec<R> = Vec::new();
        for t in &self.data {
            match lookup.get(&outer_key(t)) {
                Some(us) => {
                    for u in us {
                        out.push(result(t, Some(u)));
                    }
                }
                None => out.push(result(t, None)),
            }
        }
        SequenceQuery { data: out }
    }
}
