//! # Sequery
//!
//! An **eager, fluent query library** over in-memory sequences. Wrap a
//! `Vec<T>` in a [`SequenceQuery`], chain filtering, projection, ordering,
//! grouping, joining and aggregation, then take the result out as a vector or
//! as JSON.
//!
//! ## Key Features
//!
//! - **Fluent chaining** - every transform consumes the query and returns it
//! - **Eager evaluation** - each step runs to completion before the next starts
//! - **Stable ordering** - `order_by` never reorders elements with equal keys
//! - **Order-preserving grouping and dedup** - first-seen order everywhere
//! - **Joins** - inner and left outer, keyed by any `Eq + Hash` value
//! - **Combiners** - Sum, Min, Max, AverageF64, Count, or your own [`CombineFn`]
//! - **JSON output** - `to_json` / `from_json` (feature `json`)
//!
//! ## Quick Start
//!
//! ```
//! use sequery::*;
//!
//! let result = from_vec((1..=10).collect::<Vec<i32>>())
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .take(3)
//!     .into_vec();
//!
//! assert_eq!(result, vec![4, 16, 36]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Chainable transforms
//! - [`filter`](SequenceQuery::filter), [`map`](SequenceQuery::map),
//!   [`flat_map`](SequenceQuery::flat_map)
//! - [`take`](SequenceQuery::take), [`skip`](SequenceQuery::skip),
//!   [`concat`](SequenceQuery::concat), [`concat_all`](SequenceQuery::concat_all)
//! - [`order_by`](SequenceQuery::order_by),
//!   [`order_by_descending`](SequenceQuery::order_by_descending),
//!   [`order_by_with`](SequenceQuery::order_by_with)
//! - [`distinct`](SequenceQuery::distinct), [`distinct_by`](SequenceQuery::distinct_by)
//! - [`group_by`](SequenceQuery::group_by), [`combine_by`](SequenceQuery::combine_by)
//! - [`join`](SequenceQuery::join), [`left_join`](SequenceQuery::left_join)
//! - [`try_map`](SequenceQuery::try_map), [`try_filter`](SequenceQuery::try_filter)
//!
//! ### Terminal operations
//! - [`first`](SequenceQuery::first) / [`last`](SequenceQuery::last) and their `_where` forms
//! - [`count`](SequenceQuery::count), [`any`](SequenceQuery::any), [`all`](SequenceQuery::all)
//! - [`sum`](SequenceQuery::sum), [`average`](SequenceQuery::average),
//!   [`max`](SequenceQuery::max), [`min`](SequenceQuery::min) and their `_of` forms
//! - [`partition`](SequenceQuery::partition)
//! - [`to_array`](SequenceQuery::to_array), [`into_vec`](SequenceQuery::into_vec)
//!
//! ### Empty sequences
//!
//! `first`, `last`, `max` and `min` return `None`; `sum` returns zero and
//! `average` returns `0.0`.
//!
//! ## Feature Flags
//!
//! - `json` (default) - `to_json`, `to_json_pretty` and `from_json` via `serde_json`
//!
//! ## Module Overview
//!
//! - [`query`] - the `SequenceQuery` type and element-wise transforms
//! - [`combiners`] - built-in reductions (Sum, Min, Max, ...)
//! - [`helpers`] - constructors, ordering, grouping, joins, aggregates, JSON
//! - [`testing`] - assertions, debug taps and fixtures for tests

pub mod combiners;
pub mod helpers;
pub mod query;
pub mod testing;

// General re-exports
pub use combiners::{AverageF64, CombineFn, Count, Max, Min, Sum};
pub use helpers::*;
pub use ordered_float::{NotNan, OrderedFloat};
pub use query::SequenceQuery;
