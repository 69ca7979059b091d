//! # shape-check — Composable Shape Checkers
//!
//! Builds checker trees that verify `serde_json::Value`s and report the path
//! and reason of the first failure.
//!
//! ## Checker kinds
//!
//! - **Terminal** ([`terminal`]): predicate, type membership, length, enum
//!   membership, null.
//! - **Combinators** ([`combinator`]): `and` / `or` over any two checkers,
//!   available as methods through [`CheckerExt`].
//! - **Structural** ([`structure`]): sequences, mappings with arbitrary keys,
//!   and records with a fixed set of fields.
//! - **Optionality** ([`optional`]): accept `null`, or accept an absent
//!   record field.
//!
//! ## Verification protocol
//!
//! `verify` is called once on the root. Structural checkers append one path
//! segment per descent and return the first failing child verdict unchanged.
//! Combinators return the verdict of whichever child decided the outcome.
//! Nothing is mutated during verification; a tree may be shared across
//! threads and verified concurrently.
//!
//! ```
//! use shape_check::prelude::*;
//! use serde_json::json;
//!
//! let scores = mapping(type_of(Kind::String), sequence(type_of(Kind::Integer)));
//! let v = scores.verify(&json!({"ann": [3, 4], "bob": [5, "six"]}));
//! assert!(v.is_failure());
//! assert_eq!(v.path().to_string(), "/bob/1");
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `shape-core` internally.
//! - Checkers never panic and never return `Err` for any input value.

pub mod checker;
pub mod combinator;
pub mod optional;
pub mod shorthand;
pub mod structure;
pub mod terminal;

pub use checker::{Checker, CheckerExt};
pub use combinator::{And, Or};
pub use optional::{Nullable, OptionalField};
pub use structure::{Mapping, Record, Sequence};
pub use terminal::{IsNull, LengthEquals, OneOf, Predicate, TypeOf};

/// Everything needed to build and run checker trees.
pub mod prelude {
    pub use crate::checker::{Checker, CheckerExt};
    pub use crate::shorthand::*;
    pub use shape_core::{Kind, ShapePath, Slot, Verdict};
}
