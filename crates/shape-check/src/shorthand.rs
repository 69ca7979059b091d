//! Short constructors for building checker trees inline.
//!
//! ```
//! use shape_check::prelude::*;
//! use serde_json::json;
//!
//! let point = record()
//!     .field("x", type_of(Kind::Number))
//!     .field("y", type_of(Kind::Number))
//!     .field("label", optional(nullable(type_of(Kind::String))))
//!     .deny_extra();
//! let polygon = length(3).and(sequence(point));
//!
//! let v = polygon.verify(&json!([{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 0, "y": "1"}]));
//! assert_eq!(v.to_string(), "path: /2/y, error: not an instance of number");
//! ```

use serde_json::Value;
use shape_core::Kind;

use crate::checker::Checker;
use crate::optional::{Nullable, OptionalField};
use crate::structure::{Mapping, Record, Sequence};
use crate::terminal::{IsNull, LengthEquals, OneOf, Predicate, TypeOf};

pub fn predicate<F>(test: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Predicate::new(test)
}

pub fn type_of(kind: Kind) -> TypeOf {
    TypeOf::new(kind)
}

pub fn length(length: usize) -> LengthEquals {
    LengthEquals::new(length)
}

pub fn one_of<I, V>(options: I) -> OneOf
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    OneOf::new(options)
}

pub fn null() -> IsNull {
    IsNull
}

pub fn sequence<C: Checker>(element: C) -> Sequence<C> {
    Sequence::new(element)
}

pub fn mapping<K: Checker, V: Checker>(key: K, value: V) -> Mapping<K, V> {
    Mapping::new(key, value)
}

/// An empty record that allows extra keys. Add fields with [`Record::field`].
pub fn record() -> Record {
    Record::new()
}

pub fn nullable<C: Checker>(inner: C) -> Nullable<C> {
    Nullable::new(inner)
}

/// Accept an absent record field. Use only as a [`Record`] field checker.
pub fn optional<C: Checker>(inner: C) -> OptionalField<C> {
    OptionalField::new(inner)
}
