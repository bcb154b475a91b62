// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Stats: lifetime statistics over a Strava athlete's activities
//!
//! This crate provides the aggregation engine that folds an activity
//! history into per-sport and overall statistics, plus the backend API
//! that fetches the history from Strava and caches the last report.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{ReportCache, StravaClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub strava: StravaClient,
    pub cache: ReportCache,
}
