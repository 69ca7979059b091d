//! # Structural Checkers
//!
//! Checkers that descend into containers. Each descent extends the path by
//! exactly one segment before handing the child value to a child checker.
//! A value that lacks the needed capability fails at the structural
//! checker's own path, with no segment appended.
//!
//! All three stop at the first failing child and return its verdict as is.

use serde_json::Value;
use shape_core::{Iterable, KeyedContainer, ShapePath, Slot, Verdict};

use crate::checker::Checker;

/// Every element of an array satisfies `element`.
#[derive(Debug, Clone)]
pub struct Sequence<C> {
    element: C,
}

impl<C: Checker> Sequence<C> {
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<C: Checker> Checker for Sequence<C> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        let Some(elements) = slot.value().and_then(|value| value.elements()) else {
            return Verdict::fail(path.clone(), "not iterable");
        };

        for (index, element) in elements.iter().enumerate() {
            let verdict = self.element.check(Slot::Present(element), &path.child(index));
            if verdict.is_failure() {
                tracing::trace!(path = %verdict.path(), "sequence element rejected");
                return verdict;
            }
        }
        Verdict::pass()
    }
}

/// Every key of an object satisfies `key` and every value satisfies `value`.
///
/// Pairs are visited in document order. For each pair the key is checked
/// first; a bad key is reported without looking at its value. Both checks
/// report under the pair's key.
#[derive(Debug, Clone)]
pub struct Mapping<K, V> {
    key: K,
    value: V,
}

impl<K: Checker, V: Checker> Mapping<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K: Checker, V: Checker> Checker for Mapping<K, V> {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        let Some(pairs) = slot.value().and_then(|value| value.pairs()) else {
            return Verdict::fail(path.clone(), "not a mapping");
        };

        for (key, value) in pairs {
            let pair_path = path.child(key.as_str());
            let key_value = Value::String(key.clone());

            let verdict = self.key.check(Slot::Present(&key_value), &pair_path);
            if verdict.is_failure() {
                tracing::trace!(path = %pair_path, "mapping key rejected");
                return verdict;
            }

            let verdict = self.value.check(Slot::Present(value), &pair_path);
            if verdict.is_failure() {
                tracing::trace!(path = %verdict.path(), "mapping value rejected");
                return verdict;
            }
        }
        Verdict::pass()
    }
}

/// A fixed set of named fields, each with its own checker.
///
/// Fields are checked in declaration order. A field missing from the input is
/// handed to its checker as [`Slot::Absent`], which fails every checker except
/// [`OptionalField`](crate::optional::OptionalField).
///
/// Extra keys are allowed by default. With extra keys denied, the record fails
/// at its own path with `has extra keys` once every declared field has passed
/// and the input holds more keys than there are declared fields.
#[derive(Debug)]
pub struct Record {
    fields: Vec<(String, Box<dyn Checker>)>,
    allow_extra: bool,
}

impl Record {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            allow_extra: true,
        }
    }

    /// Declare a field. Declaring the same name again replaces its checker
    /// and keeps its original position.
    pub fn field(mut self, name: impl Into<String>, checker: impl Checker + 'static) -> Self {
        let name = name.into();
        let checker: Box<dyn Checker> = Box::new(checker);
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = checker,
            None => self.fields.push((name, checker)),
        }
        self
    }

    pub fn allow_extra(mut self, allow: bool) -> Self {
        self.allow_extra = allow;
        self
    }

    /// Shorthand for `allow_extra(false)`.
    pub fn deny_extra(self) -> Self {
        self.allow_extra(false)
    }

    pub fn allows_extra(&self) -> bool {
        self.allow_extra
    }

    /// Declared field names in check order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>> FromIterator<(N, Box<dyn Checker>)> for Record {
    fn from_iter<I: IntoIterator<Item = (N, Box<dyn Checker>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Record::new(), |record, (name, checker)| record.field(name, checker))
    }
}

impl Checker for Record {
    fn check(&self, slot: Slot<'_>, path: &ShapePath) -> Verdict {
        let Some((container, key_count)) = slot
            .value()
            .and_then(|value| value.key_count().map(|count| (value, count)))
        else {
            return Verdict::fail(path.clone(), "not a record");
        };

        for (name, checker) in &self.fields {
            let field = container.lookup(name).unwrap_or(Slot::Absent);
            let verdict = checker.check(field, &path.child(name.as_str()));
            if verdict.is_failure() {
                tracing::trace!(path = %verdict.path(), "record field rejected");
                return verdict;
            }
        }

        if !self.allow_extra && key_count > self.fields.len() {
            return Verdict::fail(path.clone(), "has extra keys");
        }
        Verdict::pass()
    }
}
