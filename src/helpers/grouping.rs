//! Grouping and per-key aggregation.
//!
//! - [`SequenceQuery::group_by`] - partition elements into [`Group`]s by key
//! - [`SequenceQuery::combine_by`] - reduce the values of each key with a [`CombineFn`]
//!
//! Groups come out in the order their key was first seen, and each group's
//! members keep their original relative order. Concatenating every group's
//! `values` therefore yields each input element exactly once.
//!
//! ## Example
//! ```
//! use sequery::*;
//!
//! let words = from_vec(vec!["ant", "bee", "asp", "cat", "bat"]);
//! let groups = words.group_by(|w| w.chars().next().unwrap_or(' ')).into_vec();
//!
//! assert_eq!(groups[0], Group { key: 'a', values: vec!["ant", "asp"] });
//! assert_eq!(groups[1], Group { key: 'b', values: vec!["bee", "bat"] });
//! assert_eq!(groups[2], Group { key: 'c', values: vec!["cat"] });
//! ```

use crate::combiners::CombineFn;
use crate::SequenceQuery;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// One key and the elements that mapped to it, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group<K, T> {
    pub key: K,
    pub values: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T> SequenceQuery<T> {
    /// Group elements by `key`, producing one [`Group`] per distinct key.
    #[must_use]
    pub fn group_by<K, F>(self, mut key: F) -> SequenceQuery<Group<K, T>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Group<K, T>> = Vec::new();
        for t in self.data {
            let k = key(&t);
            match slots.get(&k) {
                Some(&i) => groups[i].values.push(t),
                None => {
                    slots.insert(k.clone(), groups.len());
                    groups.push(Group {
                        key: k,
                        values: vec![t],
                    });
                }
            }
        }
        SequenceQuery { data: groups }
    }

    /// Reduce the values of each key with `comb`, producing `(key, output)` pairs
    /// in first-seen key order.
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let sales = from_vec(vec![("a", 100u64), ("b", 200), ("a", 150)]);
    /// let totals = sales
    ///     .combine_by(|s| s.0, |s| s.1, Sum::<u64>::new())
    ///     .into_vec();
    /// assert_eq!(totals, vec![("a", 250), ("b", 200)]);
    /// ```
    #[must_use]
    pub fn combine_by<K, V, A, O, KF, VF, C>(
        self,
        mut key: KF,
        mut value: VF,
        comb: C,
    ) -> SequenceQuery<(K, O)>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
        C: CombineFn<V, A, O>,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut accs: Vec<(K, A)> = Vec::new();
        for t in &self.data {
            let k = key(t);
            let i = match slots.get(&k) {
                Some(&i) => i,
                None => {
                    slots.insert(k.clone(), accs.len());
                    accs.push((k, comb.create()));
                    accs.len() - 1
                }
            };
            comb.add_input(&mut accs[i].1, value(t));
        }
        SequenceQuery {
            data: accs
                .into_iter()
                .map(|(k, acc)| (k, comb.finish(acc)))
                .collect(),
        }
    }
}
