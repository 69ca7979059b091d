//! # Terminal Checkers
//!
//! Leaf checkers that look at a single value without descending into it.
//! Each one reports failure at the path it was handed.
//!
//! | Checker | Passes when | Failure message |
//! |---------|-------------|-----------------|
//! | [`Predicate`] | the function returns true | `predicate failed` |
//! | [`TypeOf`] | the value's kind is or inherits from the configured kind | `not an instance of <kind>` |
//! | [`LengthEquals`] | the value has exactly the configured length | `has no length` / `not length of <n>` |
//! | [`OneOf`] | the value equals one of the options | `<value> not in options` |
//! | [`IsNull`] | the value is `null` | `is not none` |
//!
//! An absent record field fails every terminal checker. The predicate
//! function is never called with an absent field.

use std::fmt;

use serde_json::Value;
use shape_core::{Kind, Lengthable, ShapePath, Slot, Verdict};

use crate::checker::Checker;

/// Passes when a user-supplied function accepts the value.
pub struct Predicate<F> {
    test: F,
}

impl<F> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    pub fn new(test: F) -> Self {
        Self { test }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<F> Checker for Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        match slot.value() {
            Some(value) if (self.test)(value) => Verdict::pass(),
            _ => Verdict::fail(path.clone(), "predicate failed"),
        }
    }
}

/// Passes when the value is an instance of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOf {
    kind: Kind,
}

impl TypeOf {
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl Checker for TypeOf {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        match slot.value() {
            Some(value) if self.kind.admits(value) => Verdict::pass(),
            _ => Verdict::fail(path.clone(), format!("not an instance of {}", self.kind)),
        }
    }
}

/// Passes when the value has a length equal to `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthEquals {
    length: usize,
}

impl LengthEquals {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Checker for LengthEquals {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        match slot.value().and_then(|value| value.length()) {
            None => Verdict::fail(path.clone(), "has no length"),
            Some(n) if n == self.length => Verdict::pass(),
            Some(_) => Verdict::fail(path.clone(), format!("not length of {}", self.length)),
        }
    }
}

/// Passes when the value equals one of a fixed list of options.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    options: Vec<Value>,
}

impl OneOf {
    pub fn new<I, V>(options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl Checker for OneOf {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        match slot.value() {
            Some(value) if self.options.contains(value) => Verdict::pass(),
            _ => Verdict::fail(path.clone(), format!("{slot} not in options")),
        }
    }
}

/// Passes only for `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsNull;

impl Checker for IsNull {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        if slot.is_null() {
            Verdict::pass()
        } else {
            Verdict::fail(path.clone(), "is not none")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_predicate_error_path() {
        let v = Predicate::new(|x: &Value| x == 6).verify(&json!(4));
        assert!(v.is_failure());
        assert!(v.path().is_root());
        assert_eq!(v.error(), "predicate failed");
        assert!(Predicate::new(|x: &Value| x == 6).verify(&json!(6)).is_success());
    }

    #[test]
    fn test_predicate_not_called_for_absent_field() {
        let calls = AtomicUsize::new(0);
        let checker = Predicate::new(|_: &Value| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        });
        let v = checker.check(Slot::Absent, &ShapePath::root().child("key"));
        assert!(v.is_failure());
        assert_eq!(v.path().to_string(), "/key");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_type_of_error_path() {
        let v = TypeOf::new(Kind::Integer).verify(&json!(8.9));
        assert!(v.is_failure());
        assert!(v.path().is_root());
        assert_eq!(v.error(), "not an instance of integer");
    }

    #[test]
    fn test_type_of_inheritance() {
        assert!(TypeOf::new(Kind::Number).verify(&json!(5)).is_success());
        assert!(TypeOf::new(Kind::Number).verify(&json!(5.5)).is_success());
        assert!(TypeOf::new(Kind::Any).verify(&json!(null)).is_success());
        assert!(TypeOf::new(Kind::Any)
            .check(Slot::Absent, &ShapePath::root())
            .is_failure());
    }

    #[test]
    fn test_length_error_path() {
        let v = LengthEquals::new(1).verify(&json!([]));
        assert!(v.is_failure());
        assert!(v.path().is_root());
        assert_eq!(v.error(), "not length of 1");
    }

    #[test]
    fn test_length_of_value_without_length() {
        let v = LengthEquals::new(1).verify(&json!(42));
        assert!(v.is_failure());
        assert!(v.path().is_root());
        assert_eq!(v.error(), "has no length");
    }

    #[test]
    fn test_length_of_strings_and_objects() {
        assert!(LengthEquals::new(3).verify(&json!("abc")).is_success());
        assert!(LengthEquals::new(2).verify(&json!({"a": 1, "b": 2})).is_success());
    }

    #[test]
    fn test_one_of() {
        let subjects = OneOf::new(["sport", "maths"]);
        assert!(subjects.verify(&json!("maths")).is_success());
        let v = subjects.verify(&json!("physics"));
        assert!(v.is_failure());
        assert_eq!(v.error(), "\"physics\" not in options");
    }

    #[test]
    fn test_one_of_compares_by_json_equality() {
        let levels = OneOf::new([json!(1), json!(null), json!([1, 2])]);
        assert!(levels.verify(&json!(null)).is_success());
        assert!(levels.verify(&json!([1, 2])).is_success());
        assert!(levels.verify(&json!("1")).is_failure());
    }

    #[test]
    fn test_one_of_absent_field() {
        let v = OneOf::new([1, 2]).check(Slot::Absent, &ShapePath::root().child("level"));
        assert_eq!(v.error(), "<missing> not in options");
    }

    #[test]
    fn test_empty_options_reject_everything() {
        assert!(OneOf::new(Vec::<Value>::new()).verify(&json!(null)).is_failure());
    }

    #[test]
    fn test_is_null() {
        assert!(IsNull.verify(&json!(null)).is_success());
        let v = IsNull.verify(&json!("None"));
        assert!(v.is_failure());
        assert_eq!(v.error(), "is not none");
        assert!(IsNull.check(Slot::Absent, &ShapePath::root()).is_failure());
    }
}
