//! # shape-cli — Command-Line Front End
//!
//! Provides the `shape` binary. Argument parsing lives here; all checking is
//! delegated to `shape-check`.
//!
//! ## Subcommands
//!
//! - `shape demo` — run the built-in sample checks and print each verdict.
//! - `shape quiz <FILE>` — verify a question bank document (JSON or YAML).
//!
//! ```bash
//! shape demo
//! shape quiz bank.yaml --format json
//! shape quiz bank.json --subject sport --subject maths --subject history
//! ```

pub mod demo;
pub mod quiz;

use clap::ValueEnum;
use shape_core::Verdict;

/// How verdicts are printed.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `valid` or `path: /a/b, error: ...`
    #[default]
    Text,
    /// The verdict serialized as a JSON object.
    Json,
}

/// Render a verdict in the requested format.
pub fn render(verdict: &Verdict, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(verdict.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(verdict)?),
    }
}
