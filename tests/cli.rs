//! End-to-end tests for the `adder` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn adder() -> Command {
    Command::cargo_bin("adder").unwrap()
}

#[test]
fn test_adds_two_numbers() {
    adder()
        .args(["5", "7"])
        .assert()
        .success()
        .stdout("Sum: 12\n");
}

#[test]
fn test_adds_negative_number() {
    adder()
        .args(["-3", "10"])
        .assert()
        .success()
        .stdout("Sum: 7\n");
}

#[test]
fn test_adds_large_numbers() {
    adder()
        .args(["9223372036854775807", "9223372036854775807"])
        .assert()
        .success()
        .stdout("Sum: 18446744073709551614\n");
}

#[test]
fn test_no_arguments_prints_usage() {
    adder()
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Usage: ")
                .and(predicate::str::ends_with(" <num1> <num2>\n")),
        );
}

#[test]
fn test_one_argument_prints_usage() {
    adder()
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: ").and(predicate::str::contains("Sum:").not()));
}

#[test]
fn test_extra_arguments_are_ignored() {
    adder()
        .args(["1", "2", "3"])
        .assert()
        .success()
        .stdout("Sum: 3\n");
}

#[test]
fn test_non_integer_fails() {
    adder()
        .args(["foo", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Sum:").not())
        .stderr(predicate::str::contains("'foo' is not a valid integer"));
}

#[test]
fn test_non_integer_second_operand_fails() {
    adder()
        .args(["2", "1.5"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_adds_numbers_beyond_native_width() {
    adder()
        .args(["170141183460469231731687303715884105727", "1"])
        .assert()
        .success()
        .stdout("Sum: 170141183460469231731687303715884105728\n");

    adder()
        .args([
            "123456789012345678901234567890123456789012345678901234567890",
            "-987654321098765432109876543210987654321098765432109876543210",
        ])
        .assert()
        .success()
        .stdout("Sum: -864197532086419753208641975320864197532086419753208641975320\n");
}

#[test]
fn test_strict_usage_fails() {
    adder()
        .args(["--strict-usage", "5"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<num1> <num2>"));
}

#[test]
fn test_debug_logs_to_stderr() {
    adder()
        .args(["--debug", "5", "7"])
        .assert()
        .success()
        .stdout("Sum: 12\n")
        .stderr(
            predicate::str::contains("Parsed operands: a=5, b=7")
                .and(predicate::str::contains("5 + 7 = 12")),
        );
}

#[test]
fn test_no_logs_without_debug() {
    adder()
        .args(["5", "7"])
        .assert()
        .success()
        .stdout("Sum: 12\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help_flag_after_operand_prints_help() {
    adder()
        .args(["5", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("Sum:").not()));
}

#[test]
fn test_version_flag_after_operand_prints_version() {
    adder()
        .args(["5", "--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("adder "));
}

#[test]
fn test_debug_flag_is_not_an_operand() {
    adder()
        .args(["--debug", "5"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" <num1> <num2>\n"));
}

#[test]
fn test_flag_tokens_after_separator_are_operands() {
    adder()
        .args(["--", "5", "-h"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'-h' is not a valid integer"));
}
