// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User API client for persisting streaks.
//!
//! Writes are best-effort: one attempt, bounded by the configured timeout.
//! The streak is always computed locally first, and the caller gets it back
//! whether or not the write succeeded.

use crate::config::{Config, ConfigError};
use crate::error::{PersistenceError, PersistenceWarning};
use crate::models::{StreakState, StreakUpdateResult};
use crate::services::streak::calculate_streak_on;
use crate::time_utils::CalendarDay;
use std::fmt;

const STREAK_PATH: &str = "/users/streak";

/// Longest error body kept in a warning or log line.
pub const MAX_ERROR_BODY_BYTES: usize = 256;

/// Credentials for one signed-in user.
#[derive(Clone)]
pub struct ApiSession {
    access_token: String,
}

impl ApiSession {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

// Tokens stay out of logs.
impl fmt::Debug for ApiSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSession")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// User API client.
#[derive(Clone)]
pub struct StreakApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StreakApiClient {
    /// Create a client with the configured base URL and request timeout.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Record today's login and try to save the new streak.
    pub async fn update_user_streak(
        &self,
        session: &ApiSession,
        previous: Option<&StreakState>,
    ) -> Result<StreakUpdateResult, PersistenceWarning> {
        self.update_user_streak_on(session, previous, CalendarDay::today())
            .await
    }

    /// Record a login on `today` and try to save the new streak.
    ///
    /// On failure the computed result is returned inside the warning.
    pub async fn update_user_streak_on(
        &self,
        session: &ApiSession,
        previous: Option<&StreakState>,
        today: CalendarDay,
    ) -> Result<StreakUpdateResult, PersistenceWarning> {
        let result = calculate_streak_on(previous, today);

        match self.save_streak(session, &result.state).await {
            Ok(()) => {
                tracing::debug!(
                    current_streak = result.state.current_streak,
                    streak_high = result.state.streak_high,
                    "Streak saved"
                );
                Ok(result)
            }
            Err(kind) => {
                match &kind {
                    PersistenceError::EndpointMissing => {
                        tracing::warn!("Streak endpoint not available; streak kept locally")
                    }
                    other => tracing::error!(error = %other, "Failed to save streak"),
                }
                Err(PersistenceWarning { kind, result })
            }
        }
    }

    /// PATCH the streak fields on the user record.
    pub async fn save_streak(
        &self,
        session: &ApiSession,
        state: &StreakState,
    ) -> Result<(), PersistenceError> {
        let url = format!("{}{}", self.base_url, STREAK_PATH);

        let response = self
            .http
            .patch(&url)
            .bearer_auth(session.access_token())
            .json(state)
            .send()
            .await
            .map_err(PersistenceError::from_reqwest)?;

        self.check_response(response).await
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), PersistenceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PersistenceError::EndpointMissing);
        }

        Err(PersistenceError::Status {
            status: status.as_u16(),
            body: read_error_body(response).await,
        })
    }
}

/// Read at most `MAX_ERROR_BODY_BYTES` of an error response.
async fn read_error_body(mut response: reqwest::Response) -> String {
    let mut buf = Vec::new();
    while let Ok(Some(chunk)) = response.chunk().await {
        buf.extend_from_slice(&chunk);
        if buf.len() > MAX_ERROR_BODY_BYTES {
            break;
        }
    }
    truncate_body(&buf)
}

fn truncate_body(bytes: &[u8]) -> String {
    if bytes.len() <= MAX_ERROR_BODY_BYTES {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    // A cut through a multi-byte character leaves a trailing U+FFFD.
    let head = String::from_utf8_lossy(&bytes[..MAX_ERROR_BODY_BYTES]);
    format!("{}...", head.trim_end_matches('\u{FFFD}'))
}
