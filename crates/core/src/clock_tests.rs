// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn system_clock_today_matches_now() {
    let clock = SystemClock;
    let now = clock.now();
    let today = clock.today();
    // Allow for a midnight rollover between the two calls
    assert!(today == now.date() || today == now.date() + Duration::days(1));
}

#[test]
fn fake_clock_starts_at_midnight() {
    let clock = FakeClock::at(date(2025, 5, 4));
    assert_eq!(clock.today(), date(2025, 5, 4));
    assert_eq!(clock.now().time(), Default::default());
}

#[test]
fn fake_clock_can_be_advanced_past_midnight() {
    let clock = FakeClock::at(date(2025, 5, 4));
    clock.advance(Duration::hours(23));
    assert_eq!(clock.today(), date(2025, 5, 4));
    clock.advance(Duration::hours(1));
    assert_eq!(clock.today(), date(2025, 5, 5));
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::at(date(2025, 5, 4));
    let clock2 = clock1.clone();
    clock2.advance(Duration::days(7));
    assert_eq!(clock1.today(), date(2025, 5, 11));
}

#[test]
fn fake_clock_epoch_millis_tracks_time() {
    let clock = FakeClock::at(date(1970, 1, 1));
    assert_eq!(clock.epoch_millis(), 0);
    clock.advance(Duration::milliseconds(1500));
    assert_eq!(clock.epoch_millis(), 1500);
}
