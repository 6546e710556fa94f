//! Testing utilities for query pipelines.
//!
//! This module gives end-users a small toolkit for writing tests against
//! their own queries:
//!
//! - **Assertions**: compare query contents with expected results
//! - **Debug utilities**: print what flows through a pipeline
//! - **Fixtures**: small ready-made datasets (products, categories)
//!
//! # Quick Start
//!
//! ```
//! use sequery::*;
//! use sequery::testing::*;
//!
//! let q = from_vec(vec![1, 2, 3])
//!     .debug_count("source")
//!     .map(|x| x * 2);
//!
//! assert_query_eq(&q, &[2, 4, 6]);
//! assert_all(q.as_slice(), |x| x % 2 == 0);
//! ```

pub mod assertions;
pub mod debug;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
