//! Rotation specs
//!
//! The built-in schedule is anchored on Sunday 2025-05-04 at step 0 and runs
//! to 2026-01-04.

use crate::prelude::*;

#[test]
fn anchor_sunday_full_view() {
    let project = Project::empty();
    project
        .rota()
        .args(&["show", "--date", "2025-05-04"])
        .passes()
        .stdout_eq(
            "\
Sunday, May 4, 2025

Frontline
  A  Adenle Jeptha
  B  Adenle Iyewunmi

Backline
  C  Adegbola Olamilekan
  D  Bakare Toyosi
  E  Oloyede Dare

Off
  F  Orishile Gideon
  G  Shomulu Kehinde

Same team works on Monday

Display: Full Names
",
        );
}

#[test]
fn second_week_runs_step_one() {
    let project = Project::empty();
    project
        .rota()
        .args(&["show", "--date", "2025-05-11"])
        .passes()
        .stdout_has("Frontline\n  C  Adegbola Olamilekan\n  D  Bakare Toyosi\n");
}

#[test]
fn monday_repeats_sunday_team() {
    let project = Project::empty();
    let sunday = project
        .rota()
        .args(&["--format", "json", "show", "--date", "2025-08-03"])
        .passes();
    let monday = project
        .rota()
        .args(&["--format", "json", "show", "--date", "2025-08-04"])
        .passes();

    let sunday: serde_json::Value = serde_json::from_str(sunday.stdout()).unwrap();
    let monday: serde_json::Value = serde_json::from_str(monday.stdout()).unwrap();
    assert_eq!(sunday["frontline"], monday["frontline"]);
    assert_eq!(sunday["backline"], monday["backline"]);
    assert_eq!(sunday["off"], monday["off"]);
}

#[test]
fn cycle_wraps_after_seven_weeks() {
    let project = Project::empty();
    project
        .rota()
        .args(&["days", "--from", "2025-06-15", "--to", "2025-06-23"])
        .passes()
        .stdout_has("2025-06-15 Sun  step 6")
        .stdout_has("2025-06-22 Sun  step 0")
        .stdout_has("2025-06-23 Mon  step 0");
}

#[test]
fn schedule_ends_with_monday_after_cutoff() {
    let project = Project::empty();
    project
        .rota()
        .args(&["days", "--from", "2025-12-28"])
        .passes()
        .stdout_has("2026-01-04 Sun")
        .stdout_has("2026-01-05 Mon")
        .stdout_lacks("2026-01-11");
}

#[test]
fn only_sundays_and_mondays_are_listed() {
    let project = Project::empty();
    let run = project
        .rota()
        .args(&["days", "--from", "2025-05-01", "--to", "2025-05-31"])
        .passes();
    let weekdays: Vec<&str> = run
        .stdout()
        .lines()
        .filter_map(|l| l.split_whitespace().nth(1))
        .collect();
    assert_eq!(
        weekdays,
        vec!["Sun", "Mon", "Sun", "Mon", "Sun", "Mon", "Sun", "Mon"]
    );
}

#[test]
fn reanchoring_a_later_week_gives_the_same_schedule() {
    let project = Project::empty();
    // 2025-06-01 is four weeks after the built-in anchor
    project.file(
        "rota.toml",
        "[anchor]\ndate = \"2025-06-01\"\nindex = 4\n",
    );
    let reanchored = project
        .rota()
        .args(&["days", "--from", "2025-05-04", "--to", "2025-09-01"])
        .passes();

    let fresh = Project::empty();
    fresh
        .rota()
        .args(&["days", "--from", "2025-05-04", "--to", "2025-09-01"])
        .passes()
        .stdout_eq(reanchored.stdout());
}
