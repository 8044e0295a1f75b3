//! Raw record wrapper: immutable, loosely structured upstream data.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};
use crate::resolve::resolve;

/// An immutable record of arbitrary shape, as returned by an upstream ERP API.
///
/// No invariants are assumed about the shape: accessors tolerate missing
/// keys, wrong types, and sequence-vs-mapping mismatches at any path segment.
/// The record is never mutated after construction, so it can be shared across
/// threads without coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a record from JSON text.
    pub fn from_json_str(text: &str) -> DomainResult<Self> {
        serde_json::from_str(text)
            .map(Self)
            .map_err(|e| DomainError::validation(format!("malformed record JSON: {e}")))
    }

    /// The whole record.
    pub fn root(&self) -> &Value {
        &self.0
    }

    /// Resolve a dotted path; `None` when any segment misses.
    ///
    /// A stored null is a hit (`Some(&Value::Null)`), not a miss.
    pub fn get(&self, path: &str) -> Option<&Value> {
        resolve(&self.0, path)
    }

    /// Resolve a dotted path, falling back to `default` on a miss.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Resolve a dotted path with a deferred default.
    ///
    /// `default` is invoked exactly once, and only on a miss — a hit must not
    /// trigger the fallback's side effects.
    pub fn get_or_else<F>(&self, path: &str, default: F) -> Cow<'_, Value>
    where
        F: FnOnce() -> Value,
    {
        match self.get(path) {
            Some(found) => Cow::Borrowed(found),
            None => Cow::Owned(default()),
        }
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
