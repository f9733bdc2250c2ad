// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Structured JSON logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "streak_tracker=debug,info";

/// Install a JSON subscriber filtered by `RUST_LOG`.
///
/// Falls back to `streak_tracker=debug,info` when `RUST_LOG` is unset or
/// unparsable. Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }
}
