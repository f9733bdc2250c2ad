// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for streak calculation and persistence.

use crate::models::StreakUpdateResult;

/// Errors from interpreting streak input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreakError {
    #[error("Invalid date format (expected YYYY-MM-DD): {0:?}")]
    InvalidDateFormat(String),
}

/// Why a streak write to the user API did not land.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Streak endpoint not found (HTTP 404)")]
    EndpointMissing,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Streak update timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

impl PersistenceError {
    /// Map a transport-level reqwest failure.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PersistenceError::Timeout
        } else {
            PersistenceError::Network(err.to_string())
        }
    }
}

/// A streak that was computed but not saved.
///
/// The locally computed result is still authoritative for the current
/// session, so it travels with the warning.
#[derive(Debug, thiserror::Error)]
#[error("Streak not saved: {kind}")]
pub struct PersistenceWarning {
    pub kind: PersistenceError,
    pub result: StreakUpdateResult,
}

impl PersistenceWarning {
    /// Discard the warning and keep the computed result.
    pub fn into_result(self) -> StreakUpdateResult {
        self.result
    }

    /// True when the backend simply has no streak endpoint.
    pub fn is_endpoint_missing(&self) -> bool {
        matches!(self.kind, PersistenceError::EndpointMissing)
    }
}

/// Result type alias for streak input handling
pub type Result<T> = std::result::Result<T, StreakError>;
