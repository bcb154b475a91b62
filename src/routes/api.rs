// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics API routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::TOKEN_COOKIE;
use crate::middleware::AccessToken;
use crate::models::{Activity, ActivityType, Athlete, Statistics};
use crate::services::aggregator;
use crate::services::strava::fetch_all_activities;
use crate::time_utils::unix_seconds;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Routes that only compute and need no token.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/statistics/generate", post(generate_statistics))
}

/// API routes (require a Strava access token).
/// The token middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/athlete", get(get_athlete))
        .route("/api/logout", post(logout))
        .route("/api/statistics", get(get_statistics))
        .route(
            "/api/statistics/cached",
            get(get_cached_statistics).delete(clear_cached_statistics),
        )
}

// ─── Pure Aggregation ────────────────────────────────────────

/// Activities to aggregate, plus an optional type filter.
#[derive(Deserialize)]
pub struct GenerateRequest {
    pub activities: Vec<Activity>,
    /// Exact activity type tag to keep
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
}

/// Aggregate caller-supplied activities.
async fn generate_statistics(
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Statistics>> {
    let Json(request) = payload?;
    let filter = parse_activity_type(request.activity_type.as_deref())?;

    Ok(Json(aggregator::generate(&request.activities, filter)))
}

// ─── Athlete ─────────────────────────────────────────────────

/// Get the athlete owning the access token.
async fn get_athlete(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<AccessToken>,
) -> Result<Json<Athlete>> {
    let athlete = state.strava.get_athlete(&token.0).await?;
    Ok(Json(athlete))
}

/// Revoke the application's access upstream.
///
/// The token cookie is dropped whether or not Strava accepted the request.
async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<AccessToken>,
    jar: CookieJar,
) -> std::result::Result<(CookieJar, StatusCode), (CookieJar, AppError)> {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));

    match state.strava.deauthorize(&token.0).await {
        Ok(()) => Ok((jar, StatusCode::NO_CONTENT)),
        Err(e) => {
            tracing::warn!(error = %e, "Deauthorization failed");
            Err((jar, e))
        }
    }
}

// ─── Statistics ──────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct StatisticsQuery {
    /// Range start (RFC3339), defaults to the epoch
    #[validate(length(max = 64))]
    after: Option<String>,
    /// Range end (RFC3339), defaults to now
    #[validate(length(max = 64))]
    before: Option<String>,
    /// Exact activity type tag to keep
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 32))]
    activity_type: Option<String>,
}

fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<DateTime<Utc>>> {
    raw.map(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid '{}' parameter: must be RFC3339 datetime",
                    name
                ))
            })
    })
    .transpose()
}

fn parse_activity_type(raw: Option<&str>) -> Result<Option<ActivityType>> {
    raw.map(|tag| {
        tag.parse::<ActivityType>()
            .map_err(|e| AppError::BadRequest(e.to_string()))
    })
    .transpose()
}

/// Fetch the athlete's activities in range, aggregate them and cache the report.
async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<AccessToken>,
    Query(params): Query<StatisticsQuery>,
) -> Result<Json<Statistics>> {
    params
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let filter = parse_activity_type(params.activity_type.as_deref())?;
    let after = parse_bound(params.after.as_deref(), "after")?.unwrap_or_default();
    let before = parse_bound(params.before.as_deref(), "before")?.unwrap_or_else(Utc::now);

    if after > before {
        return Err(AppError::BadRequest(
            "'after' must not be later than 'before'".to_string(),
        ));
    }

    let athlete = state.strava.get_athlete(&token.0).await?;

    tracing::info!(
        athlete_id = athlete.id,
        %after,
        %before,
        filter = ?filter,
        "Generating statistics"
    );

    let activities = fetch_all_activities(
        &state.strava,
        &token.0,
        unix_seconds(after),
        unix_seconds(before),
        state.config.activities_per_page,
    )
    .await?;

    let stats = aggregator::generate(&activities, filter);

    // A failed cache write only costs a recomputation later
    if let Err(e) = state.cache.persist(athlete.id, &stats) {
        tracing::warn!(error = %e, athlete_id = athlete.id, "Failed to cache statistics");
    }

    Ok(Json(stats))
}

/// Return the cached report if it belongs to the current athlete.
async fn get_cached_statistics(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<AccessToken>,
) -> Result<Json<Statistics>> {
    let athlete = state.strava.get_athlete(&token.0).await?;

    state
        .cache
        .read_for_owner(athlete.id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No cached statistics".to_string()))
}

async fn clear_cached_statistics(State(state): State<Arc<AppState>>) -> Result<StatusCode> {
    state.cache.clear()?;
    tracing::info!("Cached statistics cleared");
    Ok(StatusCode::NO_CONTENT)
}
