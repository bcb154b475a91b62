// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity model as returned by `GET /athlete/activities`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Activity type tags known to the Strava API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    AlpineSki,
    Canoeing,
    BackcountrySki,
    Crossfit,
    EBikeRide,
    Elliptical,
    Golf,
    Handcycle,
    Hike,
    IceSkate,
    InlineSkate,
    Kayaking,
    Kitesurf,
    NordicSki,
    Ride,
    RockClimbing,
    RollerSki,
    Rowing,
    Run,
    Sail,
    Skateboard,
    Snowboard,
    Snowshoe,
    Soccer,
    StairStepper,
    StandUpPaddling,
    Surfing,
    Swim,
    Velomobile,
    VirtualRide,
    VirtualRun,
    Walk,
    WeightTraining,
    Wheelchair,
    Windsurf,
    Workout,
    Yoga,
}

impl ActivityType {
    pub const ALL: [ActivityType; 37] = [
        ActivityType::AlpineSki,
        ActivityType::Canoeing,
        ActivityType::BackcountrySki,
        ActivityType::Crossfit,
        ActivityType::EBikeRide,
        ActivityType::Elliptical,
        ActivityType::Golf,
        ActivityType::Handcycle,
        ActivityType::Hike,
        ActivityType::IceSkate,
        ActivityType::InlineSkate,
        ActivityType::Kayaking,
        ActivityType::Kitesurf,
        ActivityType::NordicSki,
        ActivityType::Ride,
        ActivityType::RockClimbing,
        ActivityType::RollerSki,
        ActivityType::Rowing,
        ActivityType::Run,
        ActivityType::Sail,
        ActivityType::Skateboard,
        ActivityType::Snowboard,
        ActivityType::Snowshoe,
        ActivityType::Soccer,
        ActivityType::StairStepper,
        ActivityType::StandUpPaddling,
        ActivityType::Surfing,
        ActivityType::Swim,
        ActivityType::Velomobile,
        ActivityType::VirtualRide,
        ActivityType::VirtualRun,
        ActivityType::Walk,
        ActivityType::WeightTraining,
        ActivityType::Wheelchair,
        ActivityType::Windsurf,
        ActivityType::Workout,
        ActivityType::Yoga,
    ];

    /// Upstream tag, e.g. `"VirtualRide"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::AlpineSki => "AlpineSki",
            ActivityType::Canoeing => "Canoeing",
            ActivityType::BackcountrySki => "BackcountrySki",
            ActivityType::Crossfit => "Crossfit",
            ActivityType::EBikeRide => "EBikeRide",
            ActivityType::Elliptical => "Elliptical",
            ActivityType::Golf => "Golf",
            ActivityType::Handcycle => "Handcycle",
            ActivityType::Hike => "Hike",
            ActivityType::IceSkate => "IceSkate",
            ActivityType::InlineSkate => "InlineSkate",
            ActivityType::Kayaking => "Kayaking",
            ActivityType::Kitesurf => "Kitesurf",
            ActivityType::NordicSki => "NordicSki",
            ActivityType::Ride => "Ride",
            ActivityType::RockClimbing => "RockClimbing",
            ActivityType::RollerSki => "RollerSki",
            ActivityType::Rowing => "Rowing",
            ActivityType::Run => "Run",
            ActivityType::Sail => "Sail",
            ActivityType::Skateboard => "Skateboard",
            ActivityType::Snowboard => "Snowboard",
            ActivityType::Snowshoe => "Snowshoe",
            ActivityType::Soccer => "Soccer",
            ActivityType::StairStepper => "StairStepper",
            ActivityType::StandUpPaddling => "StandUpPaddling",
            ActivityType::Surfing => "Surfing",
            ActivityType::Swim => "Swim",
            ActivityType::Velomobile => "Velomobile",
            ActivityType::VirtualRide => "VirtualRide",
            ActivityType::VirtualRun => "VirtualRun",
            ActivityType::Walk => "Walk",
            ActivityType::WeightTraining => "WeightTraining",
            ActivityType::Wheelchair => "Wheelchair",
            ActivityType::Windsurf => "Windsurf",
            ActivityType::Workout => "Workout",
            ActivityType::Yoga => "Yoga",
        }
    }

    /// Human readable label ("VirtualRide" -> "Virtual Ride").
    pub fn label(&self) -> String {
        if *self == ActivityType::EBikeRide {
            return "Electro Bike".to_string();
        }

        let tag = self.as_str();
        let mut label = String::with_capacity(tag.len() + 4);
        for (i, c) in tag.chars().enumerate() {
            if i > 0 && c.is_ascii_uppercase() {
                label.push(' ');
            }
            label.push(c);
        }
        label
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag is not part of [`ActivityType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown activity type: {0}")]
pub struct UnknownActivityType(pub String);

impl FromStr for ActivityType {
    type Err = UnknownActivityType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownActivityType(s.to_string()))
    }
}

/// Summary activity returned by the athlete activities endpoint.
///
/// Optional metrics are `None` when the recording device did not capture
/// them; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    /// Missing or unrecognized tags deserialize to `None`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_lenient_type"
    )]
    pub activity_type: Option<ActivityType>,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u64,
    /// Elevation gain in meters
    pub total_elevation_gain: f64,
    /// Local start time as reported by Strava (ISO 8601, nominally `Z`-suffixed)
    pub start_date_local: String,
    pub achievement_count: u32,
    pub kudos_count: u32,
    pub comment_count: u32,
    pub athlete_count: u32,
    /// Meters per second
    pub average_speed: f64,
    /// Meters per second
    pub max_speed: f64,
    pub pr_count: u32,
    pub has_kudoed: bool,
    #[serde(default)]
    pub max_watts: Option<f64>,
    #[serde(default)]
    pub average_watts: Option<f64>,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub max_heartrate: Option<f64>,
    #[serde(default)]
    pub average_cadence: Option<f64>,
    #[serde(default)]
    pub elev_high: Option<f64>,
    #[serde(default)]
    pub elev_low: Option<f64>,
}

fn deserialize_lenient_type<'de, D>(deserializer: D) -> Result<Option<ActivityType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|tag| match tag.parse() {
        Ok(t) => Some(t),
        Err(e) => {
            tracing::debug!(error = %e, "Treating activity type as unknown");
            None
        }
    }))
}
