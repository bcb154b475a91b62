// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching an athlete's activity history.
//!
//! Handles:
//! - Paged activity listing between two unix-second bounds
//! - Athlete profile lookup (owner id of cached reports)
//! - Deauthorization
//! - Mapping upstream failures onto access/parsing/default errors

use crate::error::AppError;
use crate::models::{Activity, Athlete};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

/// Query parameters of `GET /athlete/activities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityQuery {
    /// Only activities that started after this unix timestamp
    pub after: i64,
    /// Only activities that started before this unix timestamp
    pub before: i64,
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
}

/// A paged source of activities.
pub trait ActivitySource {
    fn list_activities(
        &self,
        access_token: &str,
        query: &ActivityQuery,
    ) -> impl Future<Output = Result<Vec<Activity>, AppError>> + Send;
}

/// Fetch every activity between `after` and `before`.
///
/// Pages are requested one at a time starting at 1 until a page comes back
/// shorter than `per_page`. Any failing page aborts the whole fetch, so the
/// caller never aggregates a partial history.
pub async fn fetch_all_activities<S: ActivitySource>(
    source: &S,
    access_token: &str,
    after: i64,
    before: i64,
    per_page: u32,
) -> Result<Vec<Activity>, AppError> {
    if per_page == 0 {
        return Err(AppError::BadRequest(
            "per_page must be greater than 0".to_string(),
        ));
    }

    let mut activities = Vec::new();
    let mut page = 1;

    loop {
        let query = ActivityQuery {
            after,
            before,
            page,
            per_page,
        };
        let batch = source.list_activities(access_token, &query).await?;
        let received = batch.len();

        tracing::debug!(page, received, "Fetched activity page");
        activities.extend(batch);

        if received < per_page as usize {
            break;
        }
        page += 1;
    }

    tracing::info!(
        pages = page,
        count = activities.len(),
        "Fetched activity history"
    );

    Ok(activities)
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
}

impl StravaClient {
    /// Create a client for the given API base (e.g. `https://www.strava.com/api/v3`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Get the authenticated athlete.
    pub async fn get_athlete(&self, access_token: &str) -> Result<Athlete, AppError> {
        let url = format!("{}/athlete", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Deauthorize the application for the token's athlete.
    pub async fn deauthorize(&self, access_token: &str) -> Result<(), AppError> {
        let url = format!("{}/oauth/deauthorize", self.oauth_base());

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Deauthorization request failed: {}", e)))?;

        self.check_response(response).await?;
        tracing::info!("Strava deauthorization successful");
        Ok(())
    }

    /// `https://www.strava.com/api/v3` -> `https://www.strava.com`
    fn oauth_base(&self) -> &str {
        self.base_url
            .strip_suffix("/api/v3")
            .unwrap_or(&self.base_url)
    }

    /// Check response status and return error if not successful.
    async fn check_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => {
                tracing::info!("Strava rejected access token (401)");
                Err(AppError::InvalidToken)
            }
            429 => {
                tracing::warn!("Strava rate limit hit (429)");
                Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()))
            }
            _ => Err(AppError::StravaApi(format!("HTTP {}: {}", status, body))),
        }
    }

    /// Check response and parse JSON body against the expected schema.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let response = self.check_response(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| AppError::Parsing(e.to_string()))
    }
}

impl ActivitySource for StravaClient {
    async fn list_activities(
        &self,
        access_token: &str,
        query: &ActivityQuery,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }
}
