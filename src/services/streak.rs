// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily streak transition.
//!
//! Given the stored streak and today's local day, compute the next streak.
//! Pure and synchronous; calling it again on the same day is a no-op.

use crate::models::{StreakState, StreakUpdateResult};
use crate::time_utils::{days_between, CalendarDay};

/// Apply a login on the current local day.
pub fn calculate_streak(previous: Option<&StreakState>) -> StreakUpdateResult {
    calculate_streak_on(previous, CalendarDay::today())
}

/// Apply a login on `today`.
pub fn calculate_streak_on(
    previous: Option<&StreakState>,
    today: CalendarDay,
) -> StreakUpdateResult {
    let Some(previous) = previous.map(|p| p.normalized()) else {
        return StreakUpdateResult {
            state: StreakState::first_day(today),
            is_new_streak: true,
            is_streak_broken: false,
            is_new_record: true,
        };
    };

    let gap = days_between(previous.streak_date, today);

    match gap {
        0 => StreakUpdateResult::unchanged(previous),
        1 => {
            let current_streak = previous.current_streak.saturating_add(1);
            StreakUpdateResult {
                state: StreakState {
                    current_streak,
                    streak_date: today,
                    streak_high: current_streak.max(previous.streak_high),
                },
                is_new_streak: false,
                is_streak_broken: false,
                is_new_record: current_streak > previous.streak_high,
            }
        }
        gap if gap > 1 => {
            tracing::debug!(
                gap_days = gap,
                lost_streak = previous.current_streak,
                "Streak broken"
            );
            StreakUpdateResult {
                state: StreakState {
                    current_streak: 1,
                    streak_date: today,
                    // A stored `{0, d, 0}` must not come out as `{1, today, 0}`.
                    streak_high: previous.streak_high.max(1),
                },
                is_new_streak: true,
                is_streak_broken: true,
                is_new_record: false,
            }
        }
        _ => {
            // Stored day is in the future: clock skew or a backdated device.
            tracing::warn!(
                streak_date = %previous.streak_date,
                today = %today,
                "Streak date is after today; leaving streak unchanged"
            );
            StreakUpdateResult::unchanged(previous)
        }
    }
}
