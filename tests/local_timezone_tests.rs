// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local-timezone day handling with `TZ` pinned to a zone that observes DST.
//!
//! Kept in its own test binary: `TZ` is process-wide and is set before the
//! first `Local` lookup.

use chrono::{DateTime, Local, Offset, TimeZone, Utc};
use streak_tracker::{calculate_streak_on, days_between, CalendarDay, StreakState};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn day(s: &str) -> CalendarDay {
    CalendarDay::parse(s).unwrap()
}

#[test]
fn test_from_local_across_new_york_dst() {
    std::env::set_var("TZ", "America/New_York");

    // Without zoneinfo chrono falls back to UTC; nothing to check then.
    let winter = utc(2025, 1, 15, 12, 0).with_timezone(&Local);
    if winter.offset().fix().local_minus_utc() != -5 * 3600 {
        eprintln!("⚠️  Skipping: America/New_York zone data not available");
        return;
    }

    // Spring forward (2025-03-09): 23:30 EST on the 8th, 23:30 EDT on the 9th.
    let before_spring = CalendarDay::from_local(&utc(2025, 3, 9, 4, 30));
    let after_spring = CalendarDay::from_local(&utc(2025, 3, 10, 3, 30));
    assert_eq!(before_spring, day("2025-03-08"));
    assert_eq!(after_spring, day("2025-03-09"));
    assert_eq!(days_between(before_spring, after_spring), 1);

    // Fall back (2025-11-02): 23:30 EDT on the 1st, 23:30 EST on the 2nd.
    // The first instant is already Nov 2 in UTC.
    let before_fall = CalendarDay::from_local(&utc(2025, 11, 2, 3, 30));
    let after_fall = CalendarDay::from_local(&utc(2025, 11, 3, 4, 30));
    assert_eq!(before_fall, day("2025-11-01"));
    assert_eq!(after_fall, day("2025-11-02"));
    assert_eq!(days_between(before_fall, after_fall), 1);

    // A late-night login on each side of the change continues the streak.
    let previous = StreakState {
        current_streak: 4,
        streak_date: before_fall,
        streak_high: 4,
    };
    let result = calculate_streak_on(Some(&previous), after_fall);
    assert_eq!(result.state.current_streak, 5);
    assert!(!result.is_streak_broken);
}
