//! # Failure Paths
//!
//! A `ShapePath` is the route from the verification root to the value a
//! checker is currently looking at. Structural checkers extend it by exactly
//! one `PathSegment` per descent: an array index or an object key.
//!
//! Paths render slash-separated with a leading slash. The root renders as a
//! single `/`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step in a failure path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position of an element inside an array.
    Index(usize),
    /// Key of an entry inside an object (mapping or record).
    Key(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// Ordered, root-first sequence of path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapePath(Vec<PathSegment>);

impl ShapePath {
    /// The empty path of the verification root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path with `segment` appended. `self` is left untouched.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment.into());
        Self(segments)
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments (descent depth).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.0.iter()
    }
}

impl fmt::Display for ShapePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for ShapePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<PathSegment>> for ShapePath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl<'a> IntoIterator for &'a ShapePath {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
