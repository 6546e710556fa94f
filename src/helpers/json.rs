//! JSON conversion for [`SequenceQuery`] (feature `json`).
//!
//! - [`SequenceQuery::to_json`] -- compact JSON array of the current data
//! - [`SequenceQuery::to_json_pretty`] -- indented variant
//! - [`SequenceQuery::from_json`] -- parse a JSON array (or a lone value) into a query
//!
//! Struct fields are written in declaration order, and `serde_json::Value`
//! objects keep their insertion order (`serde_json/preserve_order`). Serialization failures
//! (for example a map keyed by a non-string type) come back as `Err`, never as
//! truncated text.
//!
//! ```
//! use sequery::*;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Item { name: &'static str, price: u32 }
//!
//! let q = from_vec(vec![Item { name: "Desk", price: 300 }]);
//! assert_eq!(q.to_json()?, r#"[{"name":"Desk","price":300}]"#);
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::SequenceQuery;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Either shape accepted by [`SequenceQuery::from_json`].
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T: Serialize> SequenceQuery<T> {
    /// Serialize the current data as a compact JSON array.
    ///
    /// # Errors
    /// Returns an error if any element cannot be represented as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.data).context("failed to serialize query data to JSON")
    }

    /// Serialize the current data as an indented JSON array.
    ///
    /// # Errors
    /// Returns an error if any element cannot be represented as JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.data).context("failed to serialize query data to JSON")
    }
}

impl<T: DeserializeOwned> SequenceQuery<T> {
    /// Build a query from JSON text. An array becomes the sequence; any other
    /// value that deserializes as `T` becomes a one-element sequence.
    ///
    /// The array form is tried first. When `T` is itself a sequence type this
    /// matters: for `T = Vec<u32>`, `"[]"` is an empty query and `"[[1,2]]"` a
    /// one-element query, while `"[1,2]"` only fits the single-value form and
    /// also yields one element.
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or does not match `T`.
    pub fn from_json(text: &str) -> Result<Self> {
        let parsed: OneOrMany<T> =
            serde_json::from_str(text).context("failed to parse query data from JSON")?;
        Ok(match parsed {
            OneOrMany::Many(data) => Self::new(data),
            OneOrMany::One(item) => Self::from_item(item),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::from_vec;
    use std::collections::HashMap;

    #[test]
    fn non_string_map_keys_fail_loudly() {
        let mut m: HashMap<(u8, u8), u8> = HashMap::new();
        m.insert((1, 2), 3);
        let err = from_vec(vec![m]).to_json().unwrap_err();
        assert!(err.to_string().contains("serialize"));
    }
}
