//! # The Checker Trait
//!
//! Every checker answers one question: does the value in this slot, found at
//! this path, have the expected shape? Callers use [`Checker::verify`] on the
//! root of a checker tree. Structural checkers call [`Checker::check`] on
//! their children with an extended path.
//!
//! Checkers are immutable once built and must be `Send + Sync`, so a tree can
//! be verified from many threads at once. Boxed, `Arc`-shared and borrowed
//! checkers are checkers themselves, which lets trees mix concrete types and
//! share sub-trees.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use shape_core::{ShapePath, Slot, Verdict};

use crate::combinator::{And, Or};

pub trait Checker: Send + Sync + fmt::Debug {
    /// Check `slot`, reporting any failure at or below `path`.
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict;

    /// Verify a root value. Equivalent to `check` with an empty path.
    fn verify(&self, value: &Value) -> Verdict {
        self.check(Slot::Present(value), &ShapePath::root())
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        (**self).check(slot, path)
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        (**self).check(slot, path)
    }
}

impl<C: Checker + ?Sized> Checker for &C {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        (**self).check(slot, path)
    }
}

/// Composition methods available on every checker.
pub trait CheckerExt: Checker + Sized {
    /// `self` and then `other`. See [`And`] for which verdict is reported.
    fn and<C: Checker>(self, other: C) -> And<Self, C> {
        And::new(self, other)
    }

    /// `self` or else `other`. See [`Or`] for which verdict is reported.
    fn or<C: Checker>(self, other: C) -> Or<Self, C> {
        Or::new(self, other)
    }

    /// Erase the concrete type, e.g. to store checkers of different types
    /// side by side.
    fn boxed(self) -> Box<dyn Checker>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Erase the concrete type behind an `Arc` so the tree can be shared.
    fn shared(self) -> Arc<dyn Checker>
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: Checker> CheckerExt for T {}
