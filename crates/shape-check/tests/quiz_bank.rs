//! Integration test: a question bank keyed by subject, then by question id.
//!
//! Exercises every checker kind together: enum-constrained subject keys,
//! predicate-constrained question ids, records with an optional field, and
//! sequences of options.

use serde_json::{json, Value};
use shape_check::prelude::*;
use shape_core::PathSegment;

fn subject() -> impl Checker {
    type_of(Kind::String).and(one_of(["sport", "maths"]))
}

fn questions() -> impl Checker {
    mapping(
        type_of(Kind::String)
            .and(predicate(|k: &Value| k.as_str().is_some_and(|s| s.starts_with('q')))),
        record()
            .field("question", type_of(Kind::String))
            .field("options", sequence(type_of(Kind::String)))
            .field("answer", optional(type_of(Kind::String))),
    )
}

fn bank() -> impl Checker {
    mapping(subject(), questions())
}

fn sample() -> Value {
    json!({
        "maths": {
            "q1": {
                "question": "5+7?",
                "options": ["10", "12"],
                "answer": "12"
            }
        }
    })
}

#[test]
fn test_valid_bank_passes() {
    let v = bank().verify(&sample());
    assert!(v.is_success(), "expected success, got {v}");
    assert_eq!(v.to_string(), "valid");
}

#[test]
fn test_bad_question_id_reported_under_subject() {
    let doc = json!({
        "maths": {
            "x1": {
                "question": "5+7?",
                "options": ["10", "12"],
                "answer": "12"
            }
        }
    });
    let v = bank().verify(&doc);
    assert!(v.is_failure());
    assert_eq!(
        v.path().segments(),
        &[
            PathSegment::Key("maths".to_string()),
            PathSegment::Key("x1".to_string())
        ]
    );
    assert_eq!(v.error(), "predicate failed");
    assert_eq!(v.to_string(), "path: /maths/x1, error: predicate failed");
}

#[test]
fn test_unknown_subject_reported_at_subject() {
    let mut doc = sample();
    let entries = doc.as_object_mut().unwrap();
    let questions = entries.remove("maths").unwrap();
    entries.insert("physics".to_string(), questions);

    let v = bank().verify(&doc);
    assert_eq!(v.path().to_string(), "/physics");
    assert_eq!(v.error(), "\"physics\" not in options");
}

#[test]
fn test_missing_answer_is_allowed() {
    let mut doc = sample();
    doc["maths"]["q1"].as_object_mut().unwrap().remove("answer");
    assert!(bank().verify(&doc).is_success());
}

#[test]
fn test_missing_question_is_rejected() {
    let mut doc = sample();
    doc["maths"]["q1"].as_object_mut().unwrap().remove("question");
    let v = bank().verify(&doc);
    assert_eq!(v.path().to_string(), "/maths/q1/question");
    assert_eq!(v.error(), "not an instance of string");
}

#[test]
fn test_bad_option_reports_full_path() {
    let mut doc = sample();
    doc["maths"]["q1"]["options"][1] = json!(12);
    let v = bank().verify(&doc);
    assert_eq!(v.path().to_string(), "/maths/q1/options/1");
}

#[test]
fn test_options_must_be_a_list() {
    let mut doc = sample();
    doc["maths"]["q1"]["options"] = json!("10, 12");
    let v = bank().verify(&doc);
    assert_eq!(v.path().to_string(), "/maths/q1/options");
    assert_eq!(v.error(), "not iterable");
}

#[test]
fn test_bank_must_be_a_mapping() {
    let v = bank().verify(&json!(["maths"]));
    assert!(v.path().is_root());
    assert_eq!(v.error(), "not a mapping");
}

#[test]
fn test_verdict_is_deterministic() {
    let checker = bank();
    let mut doc = sample();
    doc["maths"]["q1"]["answer"] = json!(12);
    let first = checker.verify(&doc);
    for _ in 0..10 {
        assert_eq!(checker.verify(&doc), first);
    }
}
