// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Athlete profile model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Authenticated athlete as returned by `GET /athlete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Athlete {
    /// Strava athlete ID (owner id of cached reports)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub firstname: String,
    pub lastname: String,
    pub city: Option<String>,
    /// Account creation date (ISO 8601)
    pub created_at: String,
    /// Profile picture URL
    pub profile: String,
}
