//! # Demo Subcommand
//!
//! Runs a fixed set of sample checks that exercise terminals, combinators
//! and structural checkers, and prints one verdict per case.

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};
use shape_check::prelude::*;

use crate::{render, OutputFormat};

/// Arguments for the demo subcommand.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Output format for each verdict.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// A named checker paired with the value it is run against.
#[derive(Debug)]
pub struct DemoCase {
    pub name: &'static str,
    pub checker: Box<dyn Checker>,
    pub value: Value,
}

impl DemoCase {
    fn new(name: &'static str, checker: impl Checker + 'static, value: Value) -> Self {
        Self {
            name,
            checker: checker.boxed(),
            value,
        }
    }

    pub fn run(&self) -> Verdict {
        self.checker.verify(&self.value)
    }
}

/// The built-in sample cases. Every one of them is expected to pass.
pub fn demo_cases() -> Vec<DemoCase> {
    vec![
        DemoCase::new("integer", type_of(Kind::Integer), json!(3)),
        DemoCase::new(
            "integer sequence",
            sequence(type_of(Kind::Integer)),
            json!([1, 2, 4]),
        ),
        DemoCase::new(
            "string to integer mapping",
            mapping(type_of(Kind::String), type_of(Kind::Integer)),
            json!({"2": 2, "3": 3}),
        ),
        DemoCase::new(
            "pair of integers",
            length(2).and(sequence(type_of(Kind::Integer))),
            json!([1, 4]),
        ),
        DemoCase::new(
            "numeric records",
            sequence(
                record()
                    .field("number", type_of(Kind::Integer).or(type_of(Kind::Float)))
                    .field("int", type_of(Kind::Integer))
                    .field("float", type_of(Kind::Float)),
            ),
            json!([
                {"number": 5, "int": 10, "float": 10.0},
                {"number": 33.1, "int": 2, "float": 2.2}
            ]),
        ),
    ]
}

/// Execute the demo subcommand.
pub fn run_demo(args: &DemoArgs) -> Result<u8> {
    let mut failures = 0usize;
    for case in demo_cases() {
        let verdict = case.run();
        if verdict.is_failure() {
            failures += 1;
        }
        println!("{:<28} {}", case.name, render(&verdict, args.format)?);
    }

    if failures > 0 {
        tracing::warn!(failures, "demo cases failed");
        return Ok(1);
    }
    Ok(0)
}
