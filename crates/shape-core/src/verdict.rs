//! # Verdicts
//!
//! The outcome of one verification. A failing verdict carries the path of the
//! value that failed and a human-readable reason; a passing verdict carries
//! neither.
//!
//! Verdicts are built once at the checker that decides them and then handed
//! up the call chain unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::path::ShapePath;

/// Rendering of a passing verdict.
pub const VALID_MARKER: &str = "valid";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    success: bool,
    path: ShapePath,
    error: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            success: true,
            path: ShapePath::root(),
            error: String::new(),
        }
    }

    pub fn fail(path: ShapePath, error: impl Into<String>) -> Self {
        Self {
            success: false,
            path,
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Where the failure happened. Root for passing verdicts.
    pub fn path(&self) -> &ShapePath {
        &self.path
    }

    /// Why the failure happened. Empty for passing verdicts.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Converts a failing verdict into `ShapeError::Rejected`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::Rejected` carrying the failure path and reason.
    pub fn into_result(self) -> Result<(), ShapeError> {
        if self.success {
            Ok(())
        } else {
            Err(ShapeError::Rejected {
                path: self.path,
                error: self.error,
            })
        }
    }
}

impl From<&Verdict> for bool {
    fn from(verdict: &Verdict) -> bool {
        verdict.success
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            f.write_str(VALID_MARKER)
        } else {
            write!(f, "path: {}, error: {}", self.path, self.error)
        }
    }
}
