//! # Combinators
//!
//! Conjunction and disjunction of two checkers. Both evaluate left to right
//! and stop as soon as the outcome is known. Whichever checker decided the
//! outcome supplies the verdict, unchanged:
//!
//! | | left fails | left passes |
//! |---|---|---|
//! | `And` | left's verdict | right's verdict |
//! | `Or` | right's verdict | left's verdict |
//!
//! `And` is right-biased: once the left side passes, the right side's verdict
//! is returned whether it passes or fails. This is what lets
//! `length(2).and(sequence(..))` surface the element index of a bad item.
//!
//! Grouping does not change the boolean outcome but can change which
//! diagnostic is reported.

use shape_core::{ShapePath, Slot, Verdict};

use crate::checker::Checker;

/// Passes when both checkers pass.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A: Checker, B: Checker> And<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Checker, B: Checker> Checker for And<A, B> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        let first = self.left.check(slot, path);
        if first.is_failure() {
            return first;
        }
        self.right.check(slot, path)
    }
}

/// Passes when either checker passes.
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A: Checker, B: Checker> Or<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Checker, B: Checker> Checker for Or<A, B> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        let first = self.left.check(slot, path);
        if first.is_success() {
            return first;
        }
        self.right.check(slot, path)
    }
}
