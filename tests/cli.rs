use std::io::Write;

use assert_cmd::Command;

fn b2url() -> Command {
    Command::cargo_bin("b2url").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = b2url().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn help_works() {
    b2url().arg("--help").assert().success();
}

#[test]
fn encodes_argument() {
    assert_eq!(stdout_of(&["encode", "sparky's dog.pdf"]), "sparky's%20dog.pdf\n");
}

#[test]
fn decodes_argument() {
    assert_eq!(stdout_of(&["decode", "sparky's+dog.pdf"]), "sparky's dog.pdf\n");
}

#[test]
fn decode_failure_exits_non_zero() {
    let assert = b2url().args(["decode", "%4a"]).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("position 2"), "stderr was: {}", stderr);
}

#[test]
fn decode_prints_hex_for_binary_payloads() {
    assert_eq!(stdout_of(&["decode", "--hex", "%00%FFa"]), "00ff61\n");
}

#[test]
fn non_utf8_payload_is_rejected_without_hex() {
    b2url().args(["decode", "%FF"]).assert().failure();
}

#[test]
fn prints_json() {
    let out = stdout_of(&["encode", "--json", "a b"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["input"], "a b");
    assert_eq!(value["output"], "a%20b");
}

#[test]
fn reads_input_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "100% done").unwrap();
    let path = file.path().to_str().unwrap();

    assert_eq!(stdout_of(&["encode", "--file", path]), "100%25%20done\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let assert = b2url()
        .args(["decode", "--file", path.to_str().unwrap()])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("failed to read"));
}

#[test]
fn requires_a_value_or_file() {
    b2url().arg("encode").assert().failure();
}

#[test]
fn verbose_logs_to_stderr_only() {
    let assert = b2url().args(["-v", "encode", "x y"]).assert().success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8(output.stdout.clone()).unwrap(), "x%20y\n");
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("[DEBUG]"), "stderr was: {}", stderr);
    assert!(stderr.contains("[encode] encoding 3 bytes"));
}

#[test]
fn rejected_input_is_logged_as_warning() {
    let assert = b2url().args(["decode", "a b"]).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("[WARN]"));
    assert!(stderr.contains("rejected input at position 1"));
}
