//! # Capabilities
//!
//! Structural checkers only descend into values that expose the capability
//! they need. A value lacking the capability fails at the checker's own path
//! rather than somewhere below it.
//!
//! | Capability | Used by | Implemented for |
//! |------------|---------|-----------------|
//! | `Lengthable` | length checks | strings, arrays, objects |
//! | `Iterable` | sequence checks | arrays |
//! | `KeyedContainer` | mapping and record checks | objects |
//!
//! Strings are deliberately not `Iterable`: a sequence of characters is not
//! a sequence of values.

use serde_json::map;
use serde_json::Value;

use crate::slot::Slot;

/// Values with a length.
pub trait Lengthable {
    /// Returns the length, or `None` when the value has no notion of length.
    fn length(&self) -> Option<usize>;
}

/// Values whose elements can be visited in a stable order.
pub trait Iterable {
    /// Returns the elements in order, or `None` when not iterable.
    fn elements(&self) -> Option<&[Value]>;
}

/// Values that map keys to values.
pub trait KeyedContainer {
    /// Iterates key/value pairs in document order, or `None` when the value
    /// is not keyed.
    fn pairs(&self) -> Option<map::Iter<'_>>;

    /// Looks up `key`. Returns `None` when the value is not keyed, and
    /// `Some(Slot::Absent)` when it is keyed but has no such entry.
    fn lookup(&self, key: &str) -> Option<Slot<'_>>;

    /// Total number of keys, or `None` when the value is not keyed.
    fn key_count(&self) -> Option<usize>;
}

impl Lengthable for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            Value::Object(entries) => Some(entries.len()),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }
}

impl Iterable for Value {
    fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl KeyedContainer for Value {
    fn pairs(&self) -> Option<map::Iter<'_>> {
        self.as_object().map(|entries| entries.iter())
    }

    fn lookup(&self, key: &str) -> Option<Slot<'_>> {
        self.as_object().map(|entries| Slot::from(entries.get(key)))
    }

    fn key_count(&self) -> Option<usize> {
        self.as_object().map(|entries| entries.len())
    }
}
