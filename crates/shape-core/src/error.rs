//! # Error Types
//!
//! A value that does not match its shape is a failing `Verdict`, not an
//! error. The types here cover everything around verification: loading the
//! documents to check, parsing configuration, and callers that prefer `?`
//! over inspecting a verdict.

use thiserror::Error;

use crate::path::ShapePath;

#[derive(Error, Debug)]
pub enum ShapeError {
    /// A failing verdict converted with [`Verdict::into_result`](crate::Verdict::into_result).
    #[error("shape rejected at {path}: {error}")]
    Rejected {
        /// Path of the value that failed.
        path: ShapePath,
        /// Reason reported by the deciding checker.
        error: String,
    },

    /// The document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// A kind name that is not part of the taxonomy.
    #[error("unknown kind: {0:?}")]
    UnknownKind(String),
}
