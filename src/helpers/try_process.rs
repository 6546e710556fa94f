//! Fallible transforms with fail-fast semantics.
//!
//! The selector or predicate returns `anyhow::Result`. The first error aborts
//! the whole call: no partial output is produced, and the error is returned
//! with the index of the offending element attached as context.
//!
//! ```
//! use sequery::*;
//! use anyhow::anyhow;
//!
//! let parsed = from_vec(vec!["1", "2", "3"])
//!     .try_map(|s| s.parse::<i32>().map_err(|e| anyhow!(e)))?
//!     .into_vec();
//! assert_eq!(parsed, vec![1, 2, 3]);
//!
//! let err = from_vec(vec!["1", "x"])
//!     .try_map(|s| s.parse::<i32>().map_err(|e| anyhow!(e)))
//!     .unwrap_err();
//! assert!(err.to_string().contains("index 1"));
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::SequenceQuery;
use anyhow::{Context, Result};

impl<T> SequenceQuery<T> {
    /// Fallible [`map`](SequenceQuery::map).
    ///
    /// # Errors
    /// Returns the first error produced by `f`, with the element index as context.
    pub fn try_map<O, F>(self, mut f: F) -> Result<SequenceQuery<O>>
    where
        F: FnMut(&T) -> Result<O>,
    {
        let mut out: Vec<O> = Vec::with_capacity(self.data.len());
        for (i, t) in self.data.iter().enumerate() {
            out.push(f(t).with_context(|| format!("try_map failed at index {i}"))?);
        }
        Ok(SequenceQuery { data: out })
    }

    /// Fallible [`filter`](SequenceQuery::filter).
    ///
    /// # Errors
    /// Returns the first error produced by `pred`, with the element index as context.
    pub fn try_filter<P>(self, mut pred: P) -> Result<Self>
    where
        P: FnMut(&T) -> Result<bool>,
    {
        let mut out: Vec<T> = Vec::with_capacity(self.data.len());
        for (i, t) in self.data.into_iter().enumerate() {
            if pred(&t).with_context(|| format!("try_filter failed at index {i}"))? {
                out.push(t);
            }
        }
        Ok(SequenceQuery { data: out })
    }
}
