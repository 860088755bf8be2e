//! [`Navigate`] support for [`serde_json::Value`].

use serde_json::Value;

use crate::{Navigate, parse_index};

impl Navigate for Value {
    /// Objects are looked up by key and arrays by canonical index.
    /// Scalars have no children.
    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(list) => list.get(parse_index(key)?),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
