// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Maps activity type tags onto the report buckets.

use crate::models::ActivityType;

/// Report bucket an activity is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Run,
    Ride,
    Swim,
    Other,
}

impl Sport {
    /// Display name of the bucket.
    pub fn name(&self) -> &'static str {
        match self {
            Sport::Run => "Running",
            Sport::Ride => "Cycling",
            Sport::Swim => "Swimming",
            Sport::Other => "Others",
        }
    }
}

/// Classify a raw type tag. Virtual variants share the outdoor bucket and
/// missing tags land in [`Sport::Other`].
pub fn classify(activity_type: Option<ActivityType>) -> Sport {
    match activity_type {
        Some(ActivityType::Run | ActivityType::VirtualRun) => Sport::Run,
        Some(ActivityType::Ride | ActivityType::VirtualRide) => Sport::Ride,
        Some(ActivityType::Swim) => Sport::Swim,
        _ => Sport::Other,
    }
}
