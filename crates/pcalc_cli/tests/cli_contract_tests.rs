//! CLI contract tests for the pcalc_cli binary.
//!
//! These tests validate:
//! - stdout/stderr split and exact output format
//! - exit status stays 0 on per-line errors
//! - config file and flag handling

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

/// Get the CLI command
#[allow(deprecated)]
fn cli() -> Command {
    Command::cargo_bin("pcalc_cli").unwrap()
}

#[test]
fn test_help_lists_options() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-level"))
        .stdout(predicate::str::contains("--max-nesting"));
}

#[test]
fn test_is_coeff() {
    cli()
        .write_stdin("2\nIS_COEFF\n")
        .assert()
        .success()
        .stdout("1\n")
        .stderr("");
}

#[test]
fn test_print_ascending() {
    cli()
        .write_stdin("(1,2)+(2,0)\nPRINT\n")
        .assert()
        .success()
        .stdout("(2,0)+(1,2)\n");
}

#[test]
fn test_add_then_print() {
    cli()
        .write_stdin("1\n1\nADD\nPRINT\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_errors_go_to_stderr_and_exit_zero() {
    cli()
        .write_stdin("(1,2\nPRINT\n")
        .assert()
        .success()
        .stdout("")
        .stderr("ERROR 1 WRONG POLY\nERROR 2 STACK UNDERFLOW\n");
}

#[test]
fn test_deg_by() {
    cli()
        .write_stdin("((1,3),2)\nDEG_BY 0\nDEG_BY 1\nDEG_BY -1\nDEG_BY 5\n")
        .assert()
        .success()
        .stdout("2\n3\n0\n")
        .stderr("ERROR 4 DEG BY WRONG VARIABLE\n");
}

#[test]
fn test_last_line_without_newline() {
    cli()
        .write_stdin("(5,1)\nAT 2\nPRINT")
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_nul_byte_lines() {
    cli()
        .write_stdin(&b"#x\0y\nPR\0INT\n3\nPRINT\n"[..])
        .assert()
        .success()
        .stdout("3\n")
        .stderr("ERROR 1 WRONG POLY\nERROR 2 WRONG COMMAND\n");
}

#[test]
fn test_max_nesting_flag() {
    cli()
        .args(["--max-nesting", "1"])
        .write_stdin("(1,1)\n((1,1),1)\nDEG\n")
        .assert()
        .success()
        .stdout("1\n")
        .stderr("ERROR 2 WRONG POLY\n");
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_nesting = 1").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .write_stdin("((1,1),1)\n")
        .assert()
        .success()
        .stderr("ERROR 1 WRONG POLY\n");
}

#[test]
fn test_flag_overrides_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_nesting = 1").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .args(["--max-nesting", "4"])
        .write_stdin("((1,1),1)\nDEG\n")
        .assert()
        .success()
        .stdout("2\n")
        .stderr("");
}

#[test]
fn test_missing_config_file_fails() {
    cli()
        .args(["--config", "/nonexistent/pcalc.toml"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_invalid_config_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "unknown_key = 3").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn test_unknown_flag_fails() {
    cli().arg("--bogus").assert().failure();
}
