#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;
use std::process::Command;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pincode32"))
}

fn temp_config(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pincode32_cli_{name}.toml"));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn quiet_verbose_conflict_is_user_facing() {
    let mut cmd = bin();
    cmd.args(["--quiet", "--verbose", "encode", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "--quiet and --verbose cannot be used together",
        ));
}

#[test]
fn encode_pads_to_two_symbols() {
    let mut cmd = bin();
    cmd.args(["encode", "0"]);
    cmd.assert().success().stdout("00\n");

    let mut cmd = bin();
    cmd.args(["encode", "27"]);
    cmd.assert().success().stdout("0u\n");
}

#[test]
fn encode_rejects_negative() {
    let mut cmd = bin();
    cmd.args(["encode", "--", "-5"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("ERROR: Invalid input"));
}

#[test]
fn convert_dispatches_per_input() {
    let mut cmd = bin();
    cmd.args(["convert", "10", "0ab32", "31", "0A"]);
    cmd.assert().success().stdout("0A\n10\n0Y\n10\n");
}

#[test]
fn decode_then_recover_is_lossy_but_stable() {
    let output = bin().args(["decode", "Help me!"]).output().unwrap();
    assert!(output.status.success());
    let number = String::from_utf8(output.stdout).unwrap();

    let mut cmd = bin();
    cmd.args(["recover", number.trim()]);
    cmd.assert().success().stdout("HE1P ME!\n");
}

#[test]
fn invalid_character_is_reported_with_position() {
    let mut cmd = bin();
    cmd.args(["convert", "1-2b32"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character '-' at position 1"))
        .stderr(predicate::str::contains("1 of 1 input(s) could not be converted"));
}

#[test]
fn policy_override_skips_invalid_characters() {
    let mut cmd = bin();
    cmd.args(["--policy", "skip", "convert", "1-2b32"]);
    cmd.assert().success().stdout("34\n");

    let mut cmd = bin();
    cmd.args(["--policy", "zero", "decode", "--code", "1-2"]);
    cmd.assert().success().stdout("1026\n");
}

#[test]
fn empty_payload_is_an_error() {
    let mut cmd = bin();
    cmd.args(["decode", " / "]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Nothing left to decode"));
}

#[test]
fn convert_json_output() {
    let mut cmd = bin();
    cmd.args(["convert", "--json", "10", "hello"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"encode\""))
        .stdout(predicate::str::contains("\"output\": \"0A\""))
        .stdout(predicate::str::contains("\"payload\": \"HE110\""));
}

#[test]
fn convert_reads_stdin_lines() {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("pincode32"));
    cmd.arg("convert").write_stdin("10\n\n  0  \n");
    cmd.assert().success().stdout("0A\n00\n");
}

#[test]
fn escape_and_unescape() {
    let mut cmd = bin();
    cmd.args(["escape", "Q & A"]);
    cmd.assert().success().stdout("QQQXQEQXA\n");

    let mut cmd = bin();
    cmd.args(["unescape", "QQQXQEQXA"]);
    cmd.assert().success().stdout("Q & A\n");
}

#[test]
fn normalize_url_verbose_shows_stages() {
    let mut cmd = bin();
    cmd.args(["--verbose", "normalize", "http://example.com/Hello World!"]);
    cmd.assert()
        .success()
        .stdout("EXAMP1EQDC0MHE110QXW0R1DQB\n")
        .stderr(predicate::str::contains("DIAG: payload: example.com/Hello World!"))
        .stderr(predicate::str::contains(
            "DIAG: escaped: exampleQDcom/HelloQXWorldQB",
        ));
}

#[test]
fn convert_failures_are_reported_even_when_quiet() {
    let mut cmd = bin();
    cmd.args(["--quiet", "convert", "10", "~~~"]);
    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("ERROR: ~~~: "))
        .stderr(predicate::str::contains("1 of 2 input(s) could not be converted"));
}

#[test]
fn missing_explicit_config_fails() {
    let mut cmd = bin();
    cmd.args(["--config", "/nonexistent/pincode32.toml", "encode", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn explicit_config_is_applied() {
    let path = temp_config(
        "last_segment",
        "[normalize]\nurl_mode = \"last_segment\"\n",
    );
    let mut cmd = bin();
    cmd.arg("--config")
        .arg(&path)
        .args(["normalize", "https://example.com/docs/Hi"]);
    // 只剩最后一段，I 仍按形近字符折叠为 1
    cmd.assert().success().stdout("H1\n");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_config_table_is_rejected() {
    let path = temp_config(
        "bad_escapes",
        "[[escapes]]\nliteral = \" \"\ntoken = \"QX\"\n",
    );
    let mut cmd = bin();
    cmd.arg("--config").arg(&path).args(["encode", "1"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid escape table"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn config_show_prints_effective_toml() {
    let mut cmd = bin();
    cmd.args(["--policy", "skip", "config", "show"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "alphabet = \"0123456789ABCDEFGHJKMNPQRSTuVWXY\"",
        ))
        .stdout(predicate::str::contains("policy = \"skip\""));
}
