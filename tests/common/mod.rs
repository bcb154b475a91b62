// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use strava_stats::config::Config;
use strava_stats::routes::create_router;
use strava_stats::services::{ReportCache, StravaClient};
use strava_stats::AppState;

/// Token accepted by the fake Strava server.
pub const VALID_TOKEN: &str = "valid-token";

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    build_app(Config::default())
}

/// Create a test app talking to a fake Strava server at `strava_api_base`.
pub fn create_test_app_with_strava(strava_api_base: &str) -> (axum::Router, Arc<AppState>) {
    build_app(Config {
        strava_api_base: strava_api_base.to_string(),
        activities_per_page: 2,
        ..Config::default()
    })
}

fn build_app(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        strava: StravaClient::new(config.strava_api_base.clone()),
        cache: ReportCache::in_memory(),
        config,
    });

    (create_router(state.clone()), state)
}

/// Activity as Strava serializes it.
pub fn activity_json(id: u64, activity_type: &str, distance: f64, start_date_local: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Activity {}", id),
        "type": activity_type,
        "distance": distance,
        "moving_time": 1800,
        "total_elevation_gain": 50.0,
        "start_date_local": start_date_local,
        "achievement_count": 1,
        "kudos_count": 2,
        "comment_count": 0,
        "athlete_count": 1,
        "average_speed": 3.0,
        "max_speed": 5.0,
        "pr_count": 0,
        "has_kudoed": false,
        "average_heartrate": 140.0,
        "max_heartrate": 170.0
    })
}

/// Canned behavior of the fake Strava server.
#[derive(Clone, Default)]
pub struct FakeStrava {
    pub athlete_id: u64,
    pub activities: Vec<Value>,
    /// Serve activity pages that fail schema validation
    pub malformed: bool,
    /// Every `(page, per_page)` requested from the activities endpoint
    pub pages_requested: Arc<Mutex<Vec<(u32, u32)>>>,
    pub deauthorized: Arc<Mutex<bool>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|h| h == format!("Bearer {}", VALID_TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Authorization Error"})),
    )
        .into_response()
}

async fn fake_athlete(State(fake): State<FakeStrava>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "id": fake.athlete_id,
        "firstname": "Test",
        "lastname": "Athlete",
        "city": null,
        "created_at": "2015-06-01T12:00:00Z",
        "profile": "https://example.com/avatar.png"
    }))
    .into_response()
}

async fn fake_activities(
    State(fake): State<FakeStrava>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if fake.malformed {
        return Json(json!([{"id": "not-a-number"}])).into_response();
    }

    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let per_page: u32 = params
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(30);
    fake.pages_requested.lock().unwrap().push((page, per_page));

    let batch: Vec<Value> = fake
        .activities
        .iter()
        .skip(((page - 1) * per_page) as usize)
        .take(per_page as usize)
        .cloned()
        .collect();
    Json(batch).into_response()
}

async fn fake_deauthorize(State(fake): State<FakeStrava>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    *fake.deauthorized.lock().unwrap() = true;
    Json(json!({"access_token": VALID_TOKEN})).into_response()
}

/// Serve `fake` on an ephemeral port. Returns the API base URL.
pub async fn spawn_fake_strava(fake: FakeStrava) -> String {
    let app = Router::new()
        .route("/api/v3/athlete", get(fake_athlete))
        .route("/api/v3/athlete/activities", get(fake_activities))
        .route("/oauth/deauthorize", post(fake_deauthorize))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api/v3", addr)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
