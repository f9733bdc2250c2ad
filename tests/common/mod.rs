// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::patch,
    Json, Router,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use streak_tracker::config::Config;
use streak_tracker::{CalendarDay, StreakApiClient, StreakState};

/// A request captured by the fake user API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

#[derive(Clone)]
struct FakeApi {
    status: StatusCode,
    delay: Duration,
    requests: Recorded,
}

async fn patch_streak(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    api.requests
        .lock()
        .unwrap()
        .push(RecordedRequest {
            authorization,
            body,
        });

    if !api.delay.is_zero() {
        tokio::time::sleep(api.delay).await;
    }
    api.status
}

/// Serve `router` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Start a fake user API whose `PATCH /users/streak` answers with `status`
/// after `delay`.
#[allow(dead_code)]
pub async fn spawn_streak_api(status: StatusCode, delay: Duration) -> (String, Recorded) {
    let requests: Recorded = Arc::new(Mutex::new(Vec::new()));
    let api = FakeApi {
        status,
        delay,
        requests: requests.clone(),
    };
    let router = Router::new()
        .route("/users/streak", patch(patch_streak))
        .with_state(api);

    (serve(router).await, requests)
}

/// Base URL of a port that nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn client_for(base_url: &str, timeout: Duration) -> StreakApiClient {
    streak_tracker::logging::init_logging();
    let config = Config {
        api_base_url: base_url.to_string(),
        request_timeout: timeout,
    };
    StreakApiClient::new(&config).expect("Failed to build client")
}

#[allow(dead_code)]
pub fn day(s: &str) -> CalendarDay {
    CalendarDay::parse(s).expect("valid test date")
}

#[allow(dead_code)]
pub fn state(current: u32, date: &str, high: u32) -> StreakState {
    StreakState {
        current_streak: current,
        streak_date: day(date),
        streak_high: high,
    }
}
