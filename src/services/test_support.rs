// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity builders shared by unit tests.

use crate::models::Activity;

/// Build an activity with zeroed counters and no optional metrics.
///
/// `tag` is parsed leniently, so an unknown tag yields an untyped activity.
pub fn make_activity(id: u64, tag: &str, distance: f64) -> Activity {
    Activity {
        id,
        name: format!("Test Activity {}", id),
        activity_type: tag.parse().ok(),
        distance,
        moving_time: 0,
        total_elevation_gain: 0.0,
        start_date_local: "2024-01-15T10:00:00Z".to_string(),
        achievement_count: 0,
        kudos_count: 0,
        comment_count: 0,
        athlete_count: 1,
        average_speed: 0.0,
        max_speed: 0.0,
        pr_count: 0,
        has_kudoed: false,
        max_watts: None,
        average_watts: None,
        average_heartrate: None,
        max_heartrate: None,
        average_cadence: None,
        elev_high: None,
        elev_low: None,
    }
}
