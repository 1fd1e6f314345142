//! CLI end-to-end tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn matchline() -> Command {
    Command::new(assert_cmd::cargo_bin!("matchline"))
}

#[test]
fn test_help() {
    matchline().arg("--help").assert().success();
}

#[test]
fn test_version() {
    matchline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("matchline"));
}

// --- replace-match ---

#[test]
fn test_replace_first_match_only() {
    matchline()
        .args(["replace-match", "a", "b"])
        .write_stdin("aaa\n")
        .assert()
        .success()
        .stdout("baa\n");
}

#[test]
fn test_replace_unmatched_lines_pass_through() {
    matchline()
        .args(["replace-match", r"\d+", "NUM"])
        .write_stdin("hello\n123 456\nworld\n")
        .assert()
        .success()
        .stdout("hello\nNUM 456\nworld\n");
}

#[test]
fn test_replace_with_backreferences() {
    matchline()
        .args(["replace-match", r"(\d+)-(\d+)", r"\2-\1"])
        .write_stdin("call 12-34 now\n")
        .assert()
        .success()
        .stdout("call 34-12 now\n");
}

#[test]
fn test_replace_with_dollar_captures() {
    matchline()
        .args(["replace-match", r"(\w+)@(\w+)", "$2.$1"])
        .write_stdin("mail me@example please\n")
        .assert()
        .success()
        .stdout("mail example.me please\n");
}

#[test]
fn test_replace_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("input.txt");
    fs::write(&file_path, "one fish\ntwo fish\n").unwrap();

    matchline()
        .args(["replace-match", "fish", "bird", file_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("one bird\ntwo bird\n");

    // the input file is never modified
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "one fish\ntwo fish\n");
}

// --- print-match ---

#[test]
fn test_print_match_default_group_prefers_first_capture() {
    matchline()
        .args(["print-match", r"(\d+)-(\d+)"])
        .write_stdin("12-34\n")
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_print_match_group_zero_is_whole_match() {
    matchline()
        .args(["print-match", r"(\d+)-(\d+)", "-", "-g", "0"])
        .write_stdin("12-34\n")
        .assert()
        .success()
        .stdout("12-34\n");
}

#[test]
fn test_print_match_default_without_captures() {
    matchline()
        .args(["print-match", r"\d+-\d+"])
        .write_stdin("ab 12-34 cd\n")
        .assert()
        .success()
        .stdout("12-34\n");
}

#[test]
fn test_print_match_explicit_group() {
    matchline()
        .args(["print-match", r"(\d+)-(\d+)", "--group", "2"])
        .write_stdin("12-34\n")
        .assert()
        .success()
        .stdout("34\n");
}

#[test]
fn test_print_match_skips_unmatched_lines() {
    matchline()
        .args(["print-match", r"\d+"])
        .write_stdin("abc\n42\nxyz\n7\n")
        .assert()
        .success()
        .stdout("42\n7\n");
}

#[test]
fn test_print_match_out_of_range_group_fails() {
    matchline()
        .args(["print-match", r"(\d+)", "--group", "3"])
        .write_stdin("12\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("no capture group 3"));
}

// --- print-line ---

#[test]
fn test_print_line_emits_whole_lines() {
    matchline()
        .args(["print-line", "b"])
        .write_stdin("abc\nxyz\n")
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_print_line_no_match_is_still_success() {
    matchline()
        .args(["print-line", r"\d+"])
        .write_stdin("abc\ndef\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_print_line_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("log.txt");
    fs::write(&file_path, "ok: started\nerror: boom\nok: done\n").unwrap();

    matchline()
        .args(["print-line", "^error:", file_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("error: boom\n");
}

#[test]
fn test_print_line_idempotent() {
    let first = matchline()
        .args(["print-line", "b"])
        .write_stdin("abc\nxyz\nbcd\n")
        .assert()
        .success();
    let once = String::from_utf8(first.get_output().stdout.clone()).unwrap();

    matchline()
        .args(["print-line", "b"])
        .write_stdin(once.clone())
        .assert()
        .success()
        .stdout(once);
}

// --- shared behavior ---

#[test]
fn test_explicit_dash_equals_omitted_input() {
    for args in [
        vec!["print-line", "b"],
        vec!["print-line", "b", "-"],
    ] {
        matchline()
            .args(&args)
            .write_stdin("abc\nxyz\n")
            .assert()
            .success()
            .stdout("abc\n");
    }
}

#[test]
fn test_invalid_pattern_fails_with_no_output() {
    for cmd in [
        vec!["replace-match", "(foo", "bar"],
        vec!["print-match", "(foo"],
        vec!["print-line", "(foo"],
    ] {
        matchline()
            .args(&cmd)
            .write_stdin("foo\n")
            .assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::contains("invalid pattern"));
    }
}

#[test]
fn test_missing_file_fails() {
    matchline()
        .args(["print-line", "x", "/no/such/file"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn test_fancy_pattern_end_to_end() {
    // backreference in the match pattern routes to fancy-regex
    matchline()
        .args(["print-line", r"(\w+) \1"])
        .write_stdin("hello hello\nhello world\n")
        .assert()
        .success()
        .stdout("hello hello\n");
}
