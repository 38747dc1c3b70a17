//! Binary-level tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn trivia_quiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("trivia-quiz").unwrap()
}

#[test]
fn test_closed_stdin_says_farewell() {
    trivia_quiz()
        .args(["--api-url", "http://127.0.0.1:1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Any-Topic Quiz (Open Trivia DB)"))
        .stdout(predicate::str::contains("Enter a topic"))
        .stdout(predicate::str::contains("👋 Quiz cancelled."));
}

#[test]
fn test_closed_stdin_mid_settings() {
    trivia_quiz()
        .args(["--api-url", "http://127.0.0.1:1"])
        .write_stdin("history\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Difficulty? ['any', 'easy', 'medium', 'hard'] [any]: "))
        .stdout(predicate::str::contains("Quiz cancelled."));
}

#[test]
fn test_piped_output_is_unstyled() {
    trivia_quiz()
        .args(["--api-url", "http://127.0.0.1:1", "--seed", "7"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_offline_run_to_completion() {
    trivia_quiz()
        .args(["--api-url", "http://127.0.0.1:1", "--seed", "7"])
        .write_stdin("science\n2\n\n\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using a tiny offline set."))
        .stdout(predicate::str::is_match(r"Your Score: [0-2]/2").unwrap())
        .stdout(predicate::str::contains("\u{1b}[").not());
}
