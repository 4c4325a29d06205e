// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for schedule generation and navigation.
//!
//! Builds the day list from a config the way the CLI does, then walks it.

use chrono::{Datelike, NaiveDate, Weekday};
use rota_core::{
    format_name, generate_work_days, Clock, DayNavigator, DisplayMode, FakeClock, NavOutcome,
    ScheduleConfig, WorkDayEntry,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn days_for(config: &ScheduleConfig) -> Vec<WorkDayEntry> {
    generate_work_days(
        &config.anchor,
        config.start_date,
        config.end_date,
        &config.cycle,
        &config.roster,
    )
}

fn ids(workers: &[rota_core::Worker]) -> Vec<&str> {
    workers.iter().map(|w| w.id.as_str()).collect()
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn builtin_schedule_covers_every_week_in_range() {
    let config = ScheduleConfig::builtin().unwrap();
    let days = days_for(&config);

    // 2025-05-04 through 2026-01-04 is 36 Sundays
    assert_eq!(days.len(), 72);
    assert_eq!(days.first().unwrap().date, date(2025, 5, 4));
    assert_eq!(days.last().unwrap().date, date(2026, 1, 5));
    assert!(days
        .iter()
        .all(|d| matches!(d.date.weekday(), Weekday::Sun | Weekday::Mon)));
}

#[test]
fn week_pairs_share_teams_and_weeks_advance() {
    let config = ScheduleConfig::builtin().unwrap();
    let days = days_for(&config);

    for pair in days.chunks(2) {
        assert_eq!(pair[0].step_index, pair[1].step_index);
        assert_eq!(pair[0].rotation, pair[1].rotation);
    }
    for weeks in days.chunks(2).collect::<Vec<_>>().windows(2) {
        let expected = (weeks[0][0].step_index + 1) % config.cycle.len();
        assert_eq!(weeks[1][0].step_index, expected);
    }
}

#[test]
fn config_file_roster_and_cycle_drive_generation() {
    let config = ScheduleConfig::from_toml_str(
        r#"
start_date = "2025-05-04"
end_date = "2025-05-11"

[anchor]
date = "2025-05-04"
index = 1

[[roster]]
id = "X"
name = "Ade Bola"

[[roster]]
id = "Y"
name = "Tolu Ayo"

[[cycle]]
frontline = ["X"]
backline = ["Y"]
off = []

[[cycle]]
frontline = ["Y"]
backline = ["X"]
off = []
"#,
    )
    .unwrap();
    let days = days_for(&config);

    assert_eq!(days.len(), 4);
    assert_eq!(ids(&days[0].rotation.frontline), vec!["Y"]);
    assert_eq!(ids(&days[2].rotation.frontline), vec!["X"]);
    assert_eq!(
        format_name(&days[2].rotation.frontline[0], DisplayMode::Initials),
        "AB"
    );
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn navigator_starts_at_next_work_day_and_walks_weeks() {
    let config = ScheduleConfig::builtin().unwrap();
    let clock = FakeClock::at(date(2025, 7, 2));
    let mut nav = DayNavigator::new(days_for(&config), clock.today());

    assert_eq!(nav.current().unwrap().date, date(2025, 7, 6));

    assert!(matches!(nav.next_week(), NavOutcome::Moved { .. }));
    assert_eq!(nav.current().unwrap().date, date(2025, 7, 13));
    assert!(matches!(nav.previous_week(), NavOutcome::Moved { .. }));
    assert_eq!(nav.current().unwrap().date, date(2025, 7, 6));
}

#[test]
fn navigator_after_schedule_end_falls_back_to_first_day() {
    let config = ScheduleConfig::builtin().unwrap();
    let mut nav = DayNavigator::new(days_for(&config), date(2026, 3, 1));

    assert_eq!(nav.position(), 0);
    assert_eq!(nav.previous_day(), NavOutcome::AtBoundary);
    assert_eq!(nav.previous_week(), NavOutcome::NotFound);
    assert_eq!(nav.current().unwrap().date, date(2025, 5, 4));
}
