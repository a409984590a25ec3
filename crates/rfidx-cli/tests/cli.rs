use assert_cmd::Command;
use predicates::prelude::*;

const BIN: &str = "rfidx";

#[test]
fn correct_output_help_arg() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn correct_output_version_arg() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_input_without_type_and_transform_fails() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["-F", "binary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input-type"));
}

#[test]
fn generate_ntag215_prints_uppercase_hex() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    let is_hex = predicate::str::is_match("^[0-9A-F]+\\n$").unwrap();
    cmd.args(["-I", "ntag215", "-t", "generate", "-F", "binary"])
        .assert()
        .success()
        .stdout(is_hex);
}

#[test]
fn output_flag_without_format_is_rejected_by_clap() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["-o", "/tmp/rfidx-cli-test-out.bin"])
        .assert()
        .failure();
}

#[test]
fn generate_to_file_then_round_trip_via_json() {
    let dir = tempfile::tempdir().unwrap();
    let bin_path = dir.path().join("dump.bin");
    let json_path = dir.path().join("dump.json");

    Command::cargo_bin(BIN)
        .unwrap()
        .args([
            "-I",
            "ntag215",
            "-t",
            "generate",
            "-F",
            "binary",
            "-o",
            bin_path.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert!(bin_path.exists());

    Command::cargo_bin(BIN)
        .unwrap()
        .args([
            "-i",
            bin_path.to_str().unwrap(),
            "-I",
            "ntag215",
            "-F",
            "json",
            "-o",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert!(json_path.exists());
    let contents = std::fs::read_to_string(&json_path).unwrap();
    assert!(contents.contains("\"blocks\""));
}

#[test]
fn amiibo_wipe_without_retail_key_fails() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["-I", "amiibo", "-t", "wipe", "-F", "binary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("retail-key"));
}

#[test]
fn generate_without_output_format_succeeds_silently() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["-I", "ntag215", "-t", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
