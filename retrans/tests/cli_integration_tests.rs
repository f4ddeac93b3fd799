// retrans/tests/cli_integration_tests.rs
//! Command-line integration tests for the `retrans` binary.
//!
//! The tests run the compiled executable with `assert_cmd`, feed words through
//! arguments, files and stdin, and write mapping files with `tempfile` so no
//! artifacts are left behind.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use test_log::test;

const CYRILLIC_MAPPINGS: &str = r#"
mappings:
  - name: digraphs
    rules:
      "shch": "щ"
      "sh": "ш"
      "ch": "ч"
  - name: letters
    rules:
      "a": "а"
      "k": "к"
      "u": "у"
"#;

fn mapping_file(content: &str, suffix: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn retrans() -> Command {
    let mut cmd = Command::cargo_bin("retrans").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd
}

#[test]
fn test_apply_words_from_arguments() -> Result<()> {
    let mappings = mapping_file(CYRILLIC_MAPPINGS, ".yaml")?;
    retrans()
        .args(["apply", "--mappings"])
        .arg(mappings.path())
        .args(["shchuka", "chashka"])
        .assert()
        .success()
        .stdout("щука\nчашка\n");
    Ok(())
}

#[test]
fn test_apply_words_from_stdin() -> Result<()> {
    let mappings = mapping_file(CYRILLIC_MAPPINGS, ".yaml")?;
    retrans()
        .arg("apply")
        .arg("-m")
        .arg(mappings.path())
        .write_stdin("shchuka\n\nkasha\n")
        .assert()
        .success()
        .stdout("щука\n\nкаша\n");
    Ok(())
}

#[test]
fn test_apply_input_and_output_files() -> Result<()> {
    let mappings = mapping_file(CYRILLIC_MAPPINGS, ".yml")?;
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("words.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "kasha\nchaka\n")?;

    retrans()
        .arg("apply")
        .arg("--mappings")
        .arg(mappings.path())
        .arg("--input-file")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output)?, "каша\nчака\n");
    Ok(())
}

#[test]
fn test_apply_invalid_pattern_fails_without_output() -> Result<()> {
    let mappings = mapping_file("mappings:\n  - name: broken\n    rules:\n      \"(\": \"x\"\n", ".yaml")?;
    retrans()
        .args(["apply", "--mappings"])
        .arg(mappings.path())
        .arg("abc")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid substitution pattern '('"));
    Ok(())
}

#[test]
fn test_apply_rejects_word_spanning_lines() -> Result<()> {
    let mappings = mapping_file(CYRILLIC_MAPPINGS, ".yaml")?;
    retrans()
        .args(["apply", "--mappings"])
        .arg(mappings.path())
        .args(["kasha", "shchuka\nchashka"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("contains a line break"));
    Ok(())
}

#[test]
fn test_check_reports_counts() -> Result<()> {
    let mappings = mapping_file(CYRILLIC_MAPPINGS, ".yaml")?;
    retrans()
        .args(["check", "--mappings"])
        .arg(mappings.path())
        .assert()
        .success()
        .stdout("OK: 2 mapping(s), 6 rule(s)\n");
    Ok(())
}

#[test]
fn test_check_reports_unknown_group_reference() -> Result<()> {
    let mappings = mapping_file(
        "mappings:\n  - rules:\n      - pattern: \"(a)\"\n        replace_with: \"$2\"\n",
        ".yaml",
    )?;
    retrans()
        .args(["check", "-m"])
        .arg(mappings.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-existent capture group '2'"));
    Ok(())
}

#[test]
fn test_quiet_suppresses_logging() -> Result<()> {
    let mappings = mapping_file(CYRILLIC_MAPPINGS, ".yaml")?;
    retrans()
        .args(["--quiet", "apply", "--mappings"])
        .arg(mappings.path())
        .arg("kasha")
        .assert()
        .success()
        .stdout("каша\n")
        .stderr(predicate::str::is_empty());
    Ok(())
}
