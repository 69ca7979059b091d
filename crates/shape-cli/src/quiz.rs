//! # Quiz Subcommand
//!
//! Verifies a question bank document. A bank maps subjects to questions,
//! and questions are keyed by ids starting with `q`:
//!
//! ```yaml
//! maths:
//!   q1:
//!     question: "5+7?"
//!     options: ["10", "12"]
//!     answer: "12"      # optional
//! ```
//!
//! Exits with status 0 when the bank is valid and 1 otherwise.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use shape_check::prelude::*;

use crate::{render, OutputFormat};

/// Subjects accepted when none are given on the command line.
pub const DEFAULT_SUBJECTS: &[&str] = &["sport", "maths"];

/// Arguments for the quiz subcommand.
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Question bank document (`.json`, `.yaml` or `.yml`).
    pub path: PathBuf,

    /// Accepted subject. Repeat to accept several; defaults to sport and maths.
    #[arg(long = "subject")]
    pub subjects: Vec<String>,

    /// Output format for the verdict.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// The shape of one question, keyed by its id.
pub fn question_shape() -> impl Checker {
    mapping(
        type_of(Kind::String)
            .and(predicate(|id: &Value| id.as_str().is_some_and(|s| s.starts_with('q')))),
        record()
            .field("question", type_of(Kind::String))
            .field("options", sequence(type_of(Kind::String)))
            .field("answer", optional(type_of(Kind::String))),
    )
}

/// The shape of a whole bank restricted to `subjects`.
pub fn quiz_bank_shape<S: AsRef<str>>(subjects: &[S]) -> impl Checker {
    let subject = type_of(Kind::String).and(one_of(subjects.iter().map(|s| s.as_ref())));
    mapping(subject, question_shape())
}

/// Execute the quiz subcommand.
pub fn run_quiz(args: &QuizArgs) -> Result<u8> {
    let document = shape_core::load_document(&args.path)
        .with_context(|| format!("failed to load question bank {}", args.path.display()))?;

    let verdict = if args.subjects.is_empty() {
        quiz_bank_shape(DEFAULT_SUBJECTS).verify(&document)
    } else {
        quiz_bank_shape(&args.subjects).verify(&document)
    };

    tracing::info!(
        path = %args.path.display(),
        success = verdict.is_success(),
        "question bank verified"
    );
    println!("{}", render(&verdict, args.format)?);

    Ok(if verdict.is_success() { 0 } else { 1 })
}
