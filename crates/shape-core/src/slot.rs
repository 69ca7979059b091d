//! # Slots
//!
//! A `Slot` is what a checker is handed: either a borrowed value, or the
//! marker that a record field was not present at all. Only record field
//! lookup produces `Slot::Absent`; every other descent hands out
//! `Slot::Present`.

use std::fmt;

use serde_json::Value;

/// A value under inspection, or the absence of one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Present(&'a Value),
    /// The record being checked has no entry for this field.
    Absent,
}

impl<'a> Slot<'a> {
    /// Returns the value, or `None` when absent.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true only for a present JSON `null`. An absent slot is not null.
    pub fn is_null(self) -> bool {
        matches!(self, Self::Present(Value::Null))
    }
}

impl<'a> From<&'a Value> for Slot<'a> {
    fn from(value: &'a Value) -> Self {
        Self::Present(value)
    }
}

impl<'a> From<Option<&'a Value>> for Slot<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "{value}"),
            Self::Absent => f.write_str("<missing>"),
        }
    }
}
