//! # Optionality Checkers
//!
//! Wrappers that let a value be missing in one specific way and otherwise
//! defer to the wrapped checker.
//!
//! - [`Nullable`] accepts `null`.
//! - [`OptionalField`] accepts an absent record field. It only makes sense as
//!   a field checker inside a [`Record`](crate::structure::Record), the only
//!   place that produces absent slots.
//!
//! The two do not overlap: a present `null` is not absent, and an absent
//! field is not `null`.

use shape_core::{ShapePath, Slot, Verdict};

use crate::checker::Checker;

#[derive(Debug, Clone)]
pub struct Nullable<C> {
    inner: C,
}

impl<C: Checker> Nullable<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Checker> Checker for Nullable<C> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        if slot.is_null() {
            return Verdict::pass();
        }
        self.inner.check(slot, path)
    }
}

#[derive(Debug, Clone)]
pub struct OptionalField<C> {
    inner: C,
}

impl<C: Checker> OptionalField<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Checker> Checker for OptionalField<C> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        if slot.is_absent() {
            return Verdict::pass();
        }
        self.inner.check(slot, path)
    }
}
