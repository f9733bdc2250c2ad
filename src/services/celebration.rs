// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Celebration messages and visual tiers for streaks.

use crate::models::{StreakState, StreakUpdateResult};
use serde::Serialize;

/// Visual intensity of a streak badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTier {
    Baseline,
    Warm,
    Hot,
    Blazing,
    Legendary,
}

impl StreakTier {
    pub fn for_streak(current_streak: u32) -> Self {
        match current_streak {
            30.. => Self::Legendary,
            14.. => Self::Blazing,
            7.. => Self::Hot,
            3.. => Self::Warm,
            _ => Self::Baseline,
        }
    }

    /// Badge color (CSS hex).
    pub fn color(&self) -> &'static str {
        match self {
            Self::Legendary => "#a855f7",
            Self::Blazing => "#ef4444",
            Self::Hot => "#f97316",
            Self::Warm => "#eab308",
            Self::Baseline => "#9ca3af",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Legendary => "Legendary",
            Self::Blazing => "Blazing",
            Self::Hot => "On fire",
            Self::Warm => "Warming up",
            Self::Baseline => "Getting started",
        }
    }
}

/// Message to show after a login.
///
/// A first day outranks a new record, which outranks a broken streak.
pub fn celebration_message(result: &StreakUpdateResult) -> String {
    let days = result.state.current_streak;
    if result.is_new_streak && !result.is_streak_broken {
        "Day one! Come back tomorrow to start a streak.".to_string()
    } else if result.is_new_record {
        format!("New personal best: {days} days in a row!")
    } else if result.is_streak_broken {
        "Welcome back! Your streak starts fresh today.".to_string()
    } else {
        format!("{days}-day streak. Keep it going!")
    }
}

/// One-line summary, e.g. "5-day streak (best: 10)".
pub fn streak_summary(state: &StreakState) -> String {
    match (state.current_streak, state.streak_high) {
        (0, 0) => "No active streak".to_string(),
        (0, best) => format!("No active streak (best: {best})"),
        (current, best) if current >= best => {
            format!("{current}-day streak (personal best)")
        }
        (current, best) => format!("{current}-day streak (best: {best})"),
    }
}
