// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - streak logic and API access.

pub mod celebration;
pub mod streak;
pub mod user_api;

pub use celebration::{celebration_message, streak_summary, StreakTier};
pub use streak::{calculate_streak, calculate_streak_on};
pub use user_api::{ApiSession, StreakApiClient};
