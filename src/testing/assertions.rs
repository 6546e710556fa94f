//! Assertions over query contents.
//!
//! Failures panic with both the expected and the actual data in the message,
//! so a failing test shows what the query actually produced.

use crate::{Group, SequenceQuery};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that a query holds exactly `expected`, in order.
///
/// # Panics
///
/// Panics if the lengths differ or any position holds a different element.
///
/// # Example
///
/// ```
/// use sequery::*;
/// use sequery::testing::assert_query_eq;
///
/// assert_query_eq(&from_vec(vec![1, 2, 3]), &[1, 2, 3]);
/// ```
pub fn assert_query_eq<T: Debug + PartialEq>(query: &SequenceQuery<T>, expected: &[T]) {
    let actual = query.as_slice();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Query length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "Query mismatch at index {i}:\n  Expected: {:?}\n  Actual: {:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}",
            expected[i], actual[i]
        );
    }
}

/// Assert that a query holds the same elements as `expected`, with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if any element occurs a different number of times.
pub fn assert_query_unordered_eq<T: Debug + Eq + Hash>(query: &SequenceQuery<T>, expected: &[T]) {
    fn tally<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut counts = HashMap::new();
        for t in items {
            *counts.entry(t).or_insert(0) += 1;
        }
        counts
    }

    let actual = query.as_slice();
    let (have, want) = (tally(actual), tally(expected));
    if have != want {
        let missing: Vec<_> = want
            .iter()
            .filter(|(t, n)| have.get(*t).copied().unwrap_or(0) < **n)
            .map(|(t, _)| t)
            .collect();
        let extra: Vec<_> = have
            .iter()
            .filter(|(t, n)| want.get(*t).copied().unwrap_or(0) < **n)
            .map(|(t, _)| t)
            .collect();
        panic!(
            "Query content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that grouped output matches `expected` exactly: same keys, in the
/// same first-seen order, with the same members in the same order.
///
/// # Panics
///
/// Panics on the first group whose key or values differ.
///
/// # Example
///
/// ```
/// use sequery::*;
/// use sequery::testing::assert_groups_eq;
///
/// let groups = from_vec(vec![1, 2, 3, 4]).group_by(|x| x % 2);
/// assert_groups_eq(&groups, &[(1, vec![1, 3]), (0, vec![2, 4])]);
/// ```
pub fn assert_groups_eq<K, T>(groups: &SequenceQuery<Group<K, T>>, expected: &[(K, Vec<T>)])
where
    K: Debug + PartialEq,
    T: Debug + PartialEq,
{
    let actual = groups.as_slice();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
    for (i, (g, (ek, ev))) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            &g.key, ek,
            "Key mismatch at group {i}:\n  Expected: {ek:?}\n  Actual: {:?}",
            g.key
        );
        assert_eq!(
            &g.values, ev,
            "Value mismatch for key {ek:?} at group {i}:\n  Expected values: {ev:?}\n  Actual values: {:?}",
            g.values
        );
    }
}

/// Assert that all elements satisfy a predicate.
///
/// # Panics
///
/// Panics on the first element that does not satisfy the predicate.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no element satisfies a predicate.
///
/// # Panics
///
/// Panics on the first element that satisfies the predicate.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that a query holds `expected_len` elements.
///
/// # Panics
///
/// Panics if the length differs.
pub fn assert_query_len<T>(query: &SequenceQuery<T>, expected_len: usize) {
    assert_eq!(
        query.len(),
        expected_len,
        "Query size mismatch:\n  Expected: {expected_len}\n  Actual: {}",
        query.len()
    );
}
