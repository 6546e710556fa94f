//! Terminal operations: element lookup, counting, quantifiers and numeric aggregates.
//!
//! None of these consume or modify the query. Every predicate/selector form has
//! an argument-free twin that uses the element itself (`count` / `count_where`,
//! `sum` / `sum_of`, ...).
//!
//! Empty-sequence results are fixed per operation:
//!
//! | operation | empty result |
//! |---|---|
//! | `first`, `last`, `max`, `min` | `None` |
//! | `count` | `0` |
//! | `any` | `false` |
//! | `all` | `true` |
//! | `sum` | `N::default()` (zero) |
//! | `average` | `0.0` |
//!
//! The numeric aggregates are thin wrappers over [`SequenceQuery::aggregate`]
//! with the built-in [`combiners`](crate::combiners).

use crate::combiners::{AverageF64, CombineFn, Max, Min, Sum};
use crate::SequenceQuery;
use std::ops::Add;

impl<T> SequenceQuery<T> {
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// First element satisfying `pred`.
    pub fn first_where<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().find(|t| pred(t))
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Last element satisfying `pred`.
    pub fn last_where<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().rev().find(|t| pred(t))
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn count_where<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().filter(|t| pred(t)).count()
    }

    /// True when the query holds at least one element.
    pub fn any(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn any_where<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().any(pred)
    }

    /// True when every element satisfies `pred`; vacuously true when empty.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().all(pred)
    }

    /// Fold the projected values through `comb`.
    ///
    /// ```
    /// use sequery::*;
    ///
    /// let q = from_vec(vec!["a", "bb", "ccc"]);
    /// assert_eq!(q.aggregate(Sum::<usize>::new(), |s| s.len()), 6);
    /// ```
    pub fn aggregate<V, A, O, C, F>(&self, comb: C, selector: F) -> O
    where
        C: CombineFn<V, A, O>,
        F: FnMut(&T) -> V,
    {
        let mut acc = comb.create();
        for v in self.data.iter().map(selector) {
            comb.add_input(&mut acc, v);
        }
        comb.finish(acc)
    }

    /// Sum of `selector(element)`; zero for an empty query.
    ///
    /// Uses `+` on `N`, so integer overflow panics in debug builds and wraps in
    /// release builds, like [`Iterator::sum`]. Project into a wider type
    /// (`|x| i64::from(*x)`) when the total may not fit.
    pub fn sum_of<N, F>(&self, selector: F) -> N
    where
        N: Add<Output = N> + Default,
        F: FnMut(&T) -> N,
    {
        self.aggregate(Sum::<N>::new(), selector)
    }

    /// Mean of `selector(element)` as `f64`; `0.0` for an empty query.
    ///
    /// `N` must implement `Into<f64>`. `i64`, `u64`, `usize` and `i128` do not,
    /// so cast them in the selector: `average_of(|x| *x as f64)`.
    pub fn average_of<N, F>(&self, selector: F) -> f64
    where
        N: Into<f64>,
        F: FnMut(&T) -> N,
    {
        self.aggregate(AverageF64, selector)
    }

    /// Largest `selector(element)`; `None` for an empty query.
    pub fn max_of<N, F>(&self, selector: F) -> Option<N>
    where
        N: Ord,
        F: FnMut(&T) -> N,
    {
        self.aggregate(Max::<N>::new(), selector)
    }

    /// Smallest `selector(element)`; `None` for an empty query.
    pub fn min_of<N, F>(&self, selector: F) -> Option<N>
    where
        N: Ord,
        F: FnMut(&T) -> N,
    {
        self.aggregate(Min::<N>::new(), selector)
    }
}

impl<T> SequenceQuery<T>
where
    T: Clone + Add<Output = T> + Default,
{
    /// Sum of the elements; zero for an empty query.
    ///
    /// Integer overflow panics in debug builds and wraps in release builds,
    /// as with [`Iterator::sum`]. See [`sum_of`](Self::sum_of) for widening.
    pub fn sum(&self) -> T {
        self.sum_of(T::clone)
    }
}

impl<T> SequenceQuery<T>
where
    T: Clone + Into<f64>,
{
    /// Mean of the elements as `f64`; `0.0` for an empty query.
    ///
    /// Only available when `T: Into<f64>` (`i32`, `u32`, `f32`, `f64`, and
    /// narrower). For `i64`, `u64`, `usize` or `i128` use
    /// [`average_of`](Self::average_of) with a cast.
    pub fn average(&self) -> f64 {
        self.average_of(T::clone)
    }
}

impl<T> SequenceQuery<T>
where
    T: Clone + Ord,
{
    pub fn max(&self) -> Option<T> {
        self.max_of(T::clone)
    }

    pub fn min(&self) -> Option<T> {
        self.min_of(T::clone)
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_vec, OrderedFloat};

    #[test]
    fn empty_policies() {
        let q = from_vec(Vec::<i32>::new());
        assert_eq!(q.first(), None);
        assert_eq!(q.last(), None);
        assert_eq!(q.max(), None);
        assert_eq!(q.min(), None);
        assert_eq!(q.sum(), 0);
        assert_eq!(q.average(), 0.0);
        assert!(q.all(|_| false));
        assert!(!q.any());
    }

    #[test]
    fn float_extremes_through_ordered_float() {
        let q = from_vec(vec![2.5f64, -1.0, 9.75]);
        assert_eq!(q.max_of(|x| OrderedFloat(*x)), Some(OrderedFloat(9.75)));
        assert_eq!(q.min_of(|x| OrderedFloat(*x)), Some(OrderedFloat(-1.0)));
    }
}
