// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.

use crate::models::{DayOfWeek, TimeOfDay};
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

/// Parse Strava's `start_date_local` into wall-clock time.
///
/// Strava suffixes local times with `Z` even though they are not UTC, so the
/// written fields are used as-is. Offsets are accepted but not applied.
pub fn parse_local_start(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Time-of-day bucket of a local start timestamp, `None` if unparseable.
pub fn time_of_day(raw: &str) -> Option<TimeOfDay> {
    parse_local_start(raw).map(|dt| TimeOfDay::from_hour(dt.hour()))
}

/// Weekday of a local start timestamp, `None` if unparseable.
pub fn day_of_week(raw: &str) -> Option<DayOfWeek> {
    parse_local_start(raw)
        .map(|dt| DayOfWeek::from_days_from_sunday(dt.weekday().num_days_from_sunday()))
}

/// Unix seconds, as expected by the `after`/`before` activity query bounds.
pub fn unix_seconds(date: DateTime<Utc>) -> i64 {
    date.timestamp()
}
