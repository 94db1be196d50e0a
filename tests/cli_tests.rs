//! End-to-end tests for the `interval-timer` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn interval_timer() -> Command {
    Command::cargo_bin("interval-timer").unwrap()
}

#[test]
fn help_lists_subcommands() {
    interval_timer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn run_rejects_zero_workout() {
    interval_timer()
        .args(["run", "--workout", "0", "--rest", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn run_rejects_negative_rest() {
    interval_timer()
        .args(["run", "-w", "5", "-r", "-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn run_rejects_non_numeric_duration() {
    interval_timer()
        .args(["run", "--workout", "abc"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn run_text_session_from_stdin() {
    interval_timer()
        .args(["run", "--workout", "60", "--rest", "10", "--no-bell"])
        .write_stdin("status\nstop\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout: 01:00"))
        .stdout(predicate::str::contains("Status: workout"))
        .stdout(predicate::str::contains("Workout Complete ["))
        .stdout(predicate::str::contains("Status: idle"));
}

#[test]
fn run_json_session_from_stdin() {
    interval_timer()
        .args(["run", "-w", "60", "-r", "10", "--format", "json"])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"event":"time_updated","phase":"workout","remainingSeconds":60,"progressPercent":0}"#,
        ))
        .stdout(predicate::str::contains(r#""workoutSeconds":60"#))
        .stdout(predicate::str::contains(r#"{"event":"completed"}"#));
}

#[test]
fn console_reports_unknown_command() {
    interval_timer()
        .args(["run", "-w", "60", "-r", "10"])
        .write_stdin("pause\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command: pause"));
}

#[test]
fn console_strict_start_reports_running() {
    interval_timer()
        .args(["run", "-w", "60", "-r", "10", "--strict"])
        .write_stdin("start\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("already running"));
}

#[test]
fn completions_for_bash() {
    interval_timer()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval-timer"));
}
