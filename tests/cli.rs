use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn fixture(dictionary: &str, input: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let dict_path = dir.path().join("words.txt");
    let input_path = dir.path().join("input.txt");
    fs::write(&dict_path, dictionary).unwrap();
    fs::write(&input_path, input).unwrap();
    (dir, dict_path, input_path)
}

fn spellscan() -> Command {
    let mut cmd = Command::cargo_bin("spellscan").unwrap();
    cmd.env_remove("SPELLSCAN_MAX_DISTANCE")
        .env_remove("SPELLSCAN_CONTEXT_WORDS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_reports_misspellings_as_table() {
    let (_dir, dict, input) = fixture("The\nquick\nbrown\nfox\n", "The quikc fox.\nA dog ran.\n");

    spellscan()
        .arg(&dict)
        .arg(&input)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("(index) | word"))
        .stdout(predicate::str::contains("quikc | quick"))
        .stdout(predicate::str::contains("The quikc fox"))
        .stdout(predicate::str::contains("3 misspellings found"));
}

#[test]
fn test_clean_input_exits_zero() {
    let (_dir, dict, input) = fixture("hello\nworld\n", "Hello world.\n");

    spellscan()
        .arg(&dict)
        .arg(&input)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));
}

#[test]
fn test_json_output() {
    let (_dir, dict, input) = fixture("cat\n", "Cxt\n");

    let output = spellscan()
        .arg(&dict)
        .arg(&input)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totalErrors"], 1);
    assert_eq!(json["errors"][0]["word"], "cxt");
    assert_eq!(json["errors"][0]["suggestions"][0], "cat");
    assert_eq!(json["errors"][0]["lineNumber"], 1);
    assert_eq!(json["errors"][0]["columnNumber"], 1);
}

#[test]
fn test_known_words_are_injected_by_default() {
    let (_dir, dict, input) = fixture("dog\n", "a dog\n");

    spellscan()
        .arg(&dict)
        .arg(&input)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spelling errors found"));

    spellscan()
        .arg(&dict)
        .arg(&input)
        .args(["--no-color", "--no-known-words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 misspelling found"));
}

#[test]
fn test_max_distance_from_environment() {
    let (_dir, dict, input) = fixture("cat\n", "cxt\n");

    spellscan()
        .arg(&dict)
        .arg(&input)
        .args(["--format", "json"])
        .env("SPELLSCAN_MAX_DISTANCE", "0")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""suggestions": []"#));
}

#[test]
fn test_missing_dictionary_fails_with_usage() {
    let (dir, _dict, input) = fixture("", "text\n");

    spellscan()
        .arg(dir.path().join("missing.txt"))
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("dictionary file not found"))
        .stderr(predicate::str::contains("usage: spellscan"));
}

#[test]
fn test_missing_input_fails_with_usage() {
    let (dir, dict, _input) = fixture("word\n", "");

    spellscan()
        .arg(&dict)
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn test_negative_max_distance_is_rejected() {
    let (_dir, dict, input) = fixture("cat\n", "cxt\n");

    spellscan()
        .arg(&dict)
        .arg(&input)
        .args(["--max-distance", "-1"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));

    spellscan()
        .arg(&dict)
        .arg(&input)
        .env("SPELLSCAN_MAX_DISTANCE", "-1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value '-1'"));
}

#[test]
fn test_arguments_are_required() {
    spellscan().assert().failure().stderr(predicate::str::contains("Usage"));
}
