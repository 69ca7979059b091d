//! Integration test: `shape quiz` against question bank files on disk.

use std::path::{Path, PathBuf};
use std::process::Command;

use shape_cli::quiz::{run_quiz, QuizArgs};
use shape_cli::OutputFormat;

/// Fresh scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shape-cli-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn args(path: &Path) -> QuizArgs {
    QuizArgs {
        path: path.to_path_buf(),
        subjects: Vec::new(),
        format: OutputFormat::Text,
    }
}

const VALID_YAML: &str = r#"
maths:
  q1:
    question: "5+7?"
    options: ["10", "12"]
    answer: "12"
sport:
  q7:
    question: "Players in a football team?"
    options: ["9", "11"]
"#;

#[test]
fn test_valid_yaml_bank_exits_zero() {
    let dir = scratch_dir("valid-yaml");
    let path = dir.join("bank.yaml");
    std::fs::write(&path, VALID_YAML).unwrap();
    assert_eq!(run_quiz(&args(&path)).unwrap(), 0);
}

#[test]
fn test_invalid_json_bank_exits_one() {
    let dir = scratch_dir("invalid-json");
    let path = dir.join("bank.json");
    std::fs::write(
        &path,
        r#"{"maths": {"x1": {"question": "5+7?", "options": ["10", "12"]}}}"#,
    )
    .unwrap();
    assert_eq!(run_quiz(&args(&path)).unwrap(), 1);
}

#[test]
fn test_custom_subjects_widen_the_bank() {
    let dir = scratch_dir("subjects");
    let path = dir.join("bank.json");
    std::fs::write(&path, r#"{"history": {}}"#).unwrap();

    assert_eq!(run_quiz(&args(&path)).unwrap(), 1);

    let mut widened = args(&path);
    widened.subjects = vec!["history".to_string()];
    assert_eq!(run_quiz(&widened).unwrap(), 0);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = scratch_dir("missing");
    let err = run_quiz(&args(&dir.join("nope.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("failed to load question bank"));
}

#[test]
fn test_binary_prints_failure_path() {
    let dir = scratch_dir("binary");
    let path = dir.join("bank.json");
    std::fs::write(
        &path,
        r#"{"maths": {"q1": {"question": "5+7?", "options": ["10", 12]}}}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_shape"))
        .arg("quiz")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim(),
        "path: /maths/q1/options/1, error: not an instance of string"
    );
}

#[test]
fn test_binary_demo_passes() {
    let output = Command::new(env!("CARGO_BIN_EXE_shape"))
        .arg("demo")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.lines().all(|l| l.ends_with(r#"{"success":true,"path":[],"error":""}"#)));
}
