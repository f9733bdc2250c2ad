// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Streak-Tracker: daily login streaks for the student dashboard
//!
//! This crate computes a user's consecutive-day streak from their stored
//! streak and today's local date, picks the matching celebration, and saves
//! the result to the user API on a best-effort basis.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

pub use error::{PersistenceError, PersistenceWarning, StreakError};
pub use models::{StreakRecord, StreakState, StreakUpdateResult};
pub use services::{calculate_streak, calculate_streak_on, ApiSession, StreakApiClient};
pub use time_utils::{days_between, CalendarDay};
