//! # shape-core — Foundational Types for Shape Checking
//!
//! This crate is the leaf of the shape workspace. It defines the value-level
//! vocabulary every checker speaks: where a failure happened, why it
//! happened, and what a checker is allowed to ask of a value.
//!
//! ## Key Design Principles
//!
//! 1. **`Verdict` is the only failure channel.** A malformed value is never an
//!    `Err` and never a panic. Checkers return a `Verdict` whose `path` and
//!    `error` describe the first failure found.
//!
//! 2. **Paths are values.** `ShapePath::child()` returns a new path; the
//!    parent's path is never mutated, so sibling descents cannot observe each
//!    other.
//!
//! 3. **Absent is not null.** `Slot::Absent` marks a record field that was
//!    not present in the input. It is distinct from `Slot::Present(&Value::Null)`.
//!
//! 4. **Capabilities instead of duck typing.** `Lengthable`, `Iterable` and
//!    `KeyedContainer` state exactly which values a structural checker can
//!    descend into.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shape-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod capability;
pub mod document;
pub mod error;
pub mod kind;
pub mod path;
pub mod slot;
pub mod verdict;

// Re-export primary types for ergonomic imports.
pub use capability::{Iterable, KeyedContainer, Lengthable};
pub use document::{load_document, parse_yaml_str, yaml_to_json_value};
pub use error::ShapeError;
pub use kind::Kind;
pub use path::{PathSegment, ShapePath};
pub use slot::Slot;
pub use verdict::Verdict;
