// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Stats API Server
//!
//! Fetches an athlete's activity history from Strava and serves
//! aggregated lifetime statistics.

use std::sync::Arc;
use strava_stats::{
    config::Config,
    services::{FileStore, ReportCache, StravaClient},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Strava-Stats API");

    let strava = StravaClient::new(config.strava_api_base.clone());
    tracing::info!(base = %config.strava_api_base, "Strava client initialized");

    let cache = ReportCache::new(FileStore::new(&config.cache_dir));
    tracing::info!(dir = %config.cache_dir.display(), "Report cache initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        strava,
        cache,
    });

    // Build router
    let app = strava_stats::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_stats=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
