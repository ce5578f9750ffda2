// Builds katas produced by `kata-cli init` with cargo and runs their suites
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

const CORRECT_ENTRY: &str = r#"
pub fn your_function(input: &str) -> String {
    match input {
        "test_input" => "expected_output",
        "edge_input" => "edge_output",
        "another_input" => "another_output",
        "complex_input" => "complex_output",
        "performance_input" => "performance_output",
        "tricky_input" => "tricky_output",
        _ => "",
    }
    .to_string()
}
"#;

// Second case is wrong; the third must never be reached
const WRONG_ENTRY: &str = r#"
pub fn your_function(input: &str) -> String {
    match input {
        "test_input" => "expected_output".to_string(),
        "edge_input" => "wrong".to_string(),
        other => panic!("later case reached with {}", other),
    }
}
"#;

fn generate_kata(root: &Path, entry_source: &str) -> PathBuf {
    let kata = root.join("sample-kata");

    Command::cargo_bin("kata-cli")
        .unwrap()
        .env_remove("KATA_CASES")
        .args(["init", "--path"])
        .arg(&kata)
        .assert()
        .success();

    fs::write(kata.join("src/lib.rs"), entry_source).unwrap();
    kata
}

fn cargo_test(kata: &Path, target: &str) -> Command {
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);
    cmd.current_dir(kata)
        .env("CARGO_TARGET_DIR", kata.join("target"))
        .args(["test", "--quiet", "--offline", "--test", target]);
    cmd
}

#[test]
fn generated_public_suite_prints_single_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let kata = generate_kata(dir.path(), CORRECT_ENTRY);

    let output = cargo_test(&kata, "public_tests").assert().success().get_output().clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("All public tests passed!").count(), 1, "stdout: {}", stdout);
    assert!(!stdout.contains("hidden"));
}

#[test]
fn generated_hidden_suite_passes_with_correct_entry() {
    let dir = tempfile::tempdir().unwrap();
    let kata = generate_kata(dir.path(), CORRECT_ENTRY);

    let output = cargo_test(&kata, "hidden_tests").assert().success().get_output().clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("All hidden tests passed!").count(), 1, "stdout: {}", stdout);
}

#[test]
fn generated_suite_fails_fast_on_wrong_entry() {
    let dir = tempfile::tempdir().unwrap();
    let kata = generate_kata(dir.path(), WRONG_ENTRY);

    let output = cargo_test(&kata, "public_tests").assert().failure().get_output().clone();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("passed"), "stdout: {}", stdout);
    assert!(stderr.contains("Expected \"edge_output\", got \"wrong\""), "stderr: {}", stderr);
    assert!(!stderr.contains("later case reached"), "stderr: {}", stderr);
}
