// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar-day handling for streak tracking.
//!
//! Streaks count local calendar days, not 24-hour intervals. Everything here
//! works on `NaiveDate` so that a day never passes through a UTC instant,
//! which is what produces off-by-one days near midnight.

use crate::error::{Result, StreakError};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A local calendar day with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Build a day from year, month and day-of-month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| StreakError::InvalidDateFormat(format!("{year}-{month}-{day}")))
    }

    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// The date is built from its components in the local calendar; no
    /// timezone conversion is involved.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || StreakError::InvalidDateFormat(input.to_string());

        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(input, DAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// The calendar day of a date-time in its own timezone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }

    /// The calendar day of an instant, as seen in the process's local timezone.
    pub fn from_local(instant: &DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&Local).date_naive())
    }

    /// Today in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDay {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CalendarDay {
    type Err = StreakError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Whole days from `from` to `to` (negative if `to` is earlier).
pub fn days_between(from: CalendarDay, to: CalendarDay) -> i64 {
    (to.0 - from.0).num_days()
}
