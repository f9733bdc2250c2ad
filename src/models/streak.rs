//! Streak state as stored on the user record and sent to the API.

use crate::time_utils::CalendarDay;
use serde::{Deserialize, Serialize};

/// A user's login streak.
///
/// Serialized as `{"current_streak", "streak_date", "streak_high"}` with the
/// date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive days with activity, including `streak_date`
    pub current_streak: u32,
    /// Local day the streak was last credited
    pub streak_date: CalendarDay,
    /// Best streak ever reached (never below `current_streak`)
    pub streak_high: u32,
}

impl StreakState {
    /// First day of a brand-new streak.
    pub fn first_day(today: CalendarDay) -> Self {
        Self {
            current_streak: 1,
            streak_date: today,
            streak_high: 1,
        }
    }

    /// Raise `streak_high` to `current_streak` if a stored record has them
    /// out of order.
    pub fn normalized(self) -> Self {
        Self {
            streak_high: self.streak_high.max(self.current_streak),
            ..self
        }
    }
}

/// Streak fields as they appear on a user profile.
///
/// Accounts that never logged in have no date; some have nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    #[serde(default)]
    pub current_streak: Option<u32>,
    #[serde(default)]
    pub streak_date: Option<CalendarDay>,
    #[serde(default)]
    pub streak_high: Option<u32>,
}

impl StreakRecord {
    /// Interpret the record as a previous state, if it has one.
    pub fn into_state(self) -> Option<StreakState> {
        let streak_date = self.streak_date?;
        Some(
            StreakState {
                current_streak: self.current_streak.unwrap_or(0),
                streak_date,
                streak_high: self.streak_high.unwrap_or(0),
            }
            .normalized(),
        )
    }
}

impl From<StreakState> for StreakRecord {
    fn from(state: StreakState) -> Self {
        Self {
            current_streak: Some(state.current_streak),
            streak_date: Some(state.streak_date),
            streak_high: Some(state.streak_high),
        }
    }
}

/// Outcome of applying today's login to a streak.
///
/// The flags only drive which celebration the UI shows; they are never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakUpdateResult {
    pub state: StreakState,
    pub is_new_streak: bool,
    pub is_streak_broken: bool,
    pub is_new_record: bool,
}

impl StreakUpdateResult {
    /// A result that changes nothing.
    pub fn unchanged(state: StreakState) -> Self {
        Self {
            state,
            is_new_streak: false,
            is_streak_broken: false,
            is_new_record: false,
        }
    }

    /// True if any flag is set.
    pub fn is_eventful(&self) -> bool {
        self.is_new_streak || self.is_streak_broken || self.is_new_record
    }
}
