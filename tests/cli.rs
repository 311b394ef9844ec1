use assert_cmd::Command;
use predicates::prelude::*;

fn agecalc() -> Command {
    Command::cargo_bin("agecalc").unwrap()
}

#[test]
fn test_age_text_output() {
    agecalc()
        .args(["1995-12-31", "--on", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("28 years, 1 month, 0 days"))
        .stdout(predicate::str::contains("337 months"))
        .stdout(predicate::str::contains("Capricorn"))
        .stdout(predicate::str::contains("2024-12-31, turning 29"));
}

#[test]
fn test_birthday_today() {
    agecalc()
        .args(["1990-06-15", "--on", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Happy birthday (turning 34)"))
        .stdout(predicate::str::contains("a Friday"));
}

#[test]
fn test_countdown_after_birthday() {
    agecalc()
        .args(["1990-06-15", "--on", "1990-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in 11 months, 30 days (1991-06-15, turning 1)"));
}

#[test]
fn test_free_text_birth_date() {
    agecalc()
        .args(["June 15, 1990", "--on", "2000-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 years, 0 months, 0 days"));
}

#[test]
fn test_json_output() {
    agecalc()
        .args(["1995-12-31", "--on", "2024-01-31", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""birth": "1995-12-31""#))
        .stdout(predicate::str::contains(r#""total_months": 337"#))
        .stdout(predicate::str::contains(r#""is_today": false"#))
        .stdout(predicate::str::contains(r#""sign": "Capricorn""#));
}

#[test]
fn test_format_override() {
    agecalc()
        .args(["04/05/2020", "--on", "2024-01-01", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""birth": "2020-04-05""#));

    agecalc()
        .args([
            "04/05/2020",
            "--on",
            "2024-01-01",
            "--format",
            "iso",
            "--format",
            "day-first",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""birth": "2020-05-04""#));
}

#[test]
fn test_unknown_format_is_rejected() {
    agecalc()
        .args(["1990-06-15", "--format", "yyyymmdd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown date format"));
}

#[test]
fn test_birth_after_target_fails() {
    agecalc()
        .args(["2024-01-02", "--on", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be after the comparison date"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unparseable_birth_date_fails() {
    agecalc()
        .args(["not a date", "--on", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read birth date"))
        .stderr(predicate::str::contains("Unrecognized date"));
}

#[test]
fn test_nonexistent_birth_date_fails() {
    agecalc()
        .args(["2023-02-30", "--on", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day 30 for month 2023-02"));
}

#[test]
fn test_defaults_to_today() {
    agecalc()
        .arg("2000-01-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("Born:      2000-01-01 (a Saturday)"));
}
