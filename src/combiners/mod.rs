//! Built-in combiners for [`SequenceQuery::aggregate`](crate::SequenceQuery::aggregate)
//! and [`SequenceQuery::combine_by`](crate::SequenceQuery::combine_by).
//!
//! A combiner folds a stream of values into an accumulator and then turns the
//! accumulator into an output:
//!
//! - [`Sum<T>`] -- sum of values (zero when empty).
//! - [`Min<T>`] / [`Max<T>`] -- smallest / largest value, `None` when empty.
//! - [`AverageF64`] -- arithmetic mean as `f64`, `0.0` when empty.
//! - [`Count`] -- number of values.
//!
//! Each combiner specifies its accumulator type (`A`) and output type (`O`).
//! Implement [`CombineFn`] for your own reductions.
//!
//! # Examples
//! ```
//! use sequery::*;
//!
//! let q = from_vec(vec![3u32, 1, 4, 1, 5]);
//!
//! assert_eq!(q.aggregate(Sum::<u32>::new(), |v| *v), 14);
//! assert_eq!(q.aggregate(Max::<u32>::new(), |v| *v), Some(5));
//! assert_eq!(q.aggregate(Count, |v| *v), 5);
//! assert!((q.aggregate(AverageF64, |v| *v) - 2.8).abs() < 1e-9);
//! ```

mod basic;
mod statistical;

pub use basic::{Count, Max, Min, Sum};
pub use statistical::AverageF64;

/// A reduction over a stream of `V` values with accumulator `A` and output `O`.
///
/// `create` is called once per reduction (once per key in
/// [`combine_by`](crate::SequenceQuery::combine_by)), `add_input` once per
/// value in sequence order, and `finish` once at the end.
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}
