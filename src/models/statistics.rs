// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Statistics report produced by the aggregator.
//!
//! Field names are camelCase on the wire since the report is consumed
//! directly by the dashboard frontend and cached as opaque JSON.

use crate::models::{Activity, ActivityType};
use crate::services::classifier::Sport;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Minimal projection of the activity that holds an extremum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SingleActivity {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub title: String,
    pub distance: f64,
    pub elevation: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: u64,
    pub speed: f64,
    pub kudos: u32,
}

impl From<&Activity> for SingleActivity {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            title: activity.name.clone(),
            distance: activity.distance,
            elevation: activity.total_elevation_gain,
            time: activity.moving_time,
            speed: activity.average_speed,
            kudos: activity.kudos_count,
        }
    }
}

/// Local start hour bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TimeOfDay {
    /// hour < 13
    Morning,
    /// 13 <= hour < 19
    Day,
    /// hour >= 19
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 13 {
            TimeOfDay::Morning
        } else if hour < 19 {
            TimeOfDay::Day
        } else {
            TimeOfDay::Evening
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Map a days-from-Sunday index to a weekday.
    ///
    /// 1..=6 are Monday..Saturday; every other index falls back to Sunday.
    pub fn from_days_from_sunday(day: u32) -> Self {
        match day {
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            6 => DayOfWeek::Saturday,
            _ => DayOfWeek::Sunday,
        }
    }
}

/// Per-sport breakdown for Run, Ride and Swim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Category {
    /// Representative type tag (Run, Ride or Swim)
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub name: String,
    pub activities: u32,
    pub distance: f64,
    pub elevation: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub kudos: u64,
    pub farthest: Option<SingleActivity>,
    pub longest: Option<SingleActivity>,
    pub speed_average: f64,
    pub speed_max: f64,
    pub heartrate_average: f64,
    pub heartrate_max: f64,
    pub cadence_average: f64,
    /// Only populated for Ride
    pub watts_average: f64,
    pub watts_max: f64,
}

impl Category {
    pub fn new(activity_type: ActivityType, name: &str) -> Self {
        Self {
            activity_type,
            name: name.to_string(),
            activities: 0,
            distance: 0.0,
            elevation: 0.0,
            time: 0,
            kudos: 0,
            farthest: None,
            longest: None,
            speed_average: 0.0,
            speed_max: 0.0,
            heartrate_average: 0.0,
            heartrate_max: 0.0,
            cadence_average: 0.0,
            watts_average: 0.0,
            watts_max: 0.0,
        }
    }
}

/// Catch-all bucket for every type outside Run, Ride and Swim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Others {
    pub name: String,
    pub activities: u32,
    pub distance: f64,
    pub elevation: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub kudos: u64,
    pub farthest: Option<SingleActivity>,
    pub longest: Option<SingleActivity>,
}

impl Default for Others {
    fn default() -> Self {
        Self {
            name: Sport::Other.name().to_string(),
            activities: 0,
            distance: 0.0,
            elevation: 0.0,
            time: 0,
            kudos: 0,
            farthest: None,
            longest: None,
        }
    }
}

/// Totals over every filtered activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Total {
    pub name: String,
    pub activities: u32,
    pub distance: f64,
    pub elevation: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: u64,
    pub farthest: Option<SingleActivity>,
    pub longest: Option<SingleActivity>,
    pub elevatest: Option<SingleActivity>,
    pub kudoest: Option<SingleActivity>,
    /// Highest `elev_high` seen; `None` until a record reports one
    pub peak: Option<f64>,
    /// Lowest `elev_low` seen; `None` until a record reports one
    pub bottom: Option<f64>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub companions: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub achievements: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub comments: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub kudos: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub prs: u64,
    pub max_hr: f64,
    pub favorite_activity: Option<ActivityType>,
    pub time_of_day: Option<TimeOfDay>,
    pub favorite_day: Option<DayOfWeek>,
}

impl Default for Total {
    fn default() -> Self {
        Self {
            name: "Total".to_string(),
            activities: 0,
            distance: 0.0,
            elevation: 0.0,
            time: 0,
            farthest: None,
            longest: None,
            elevatest: None,
            kudoest: None,
            peak: None,
            bottom: None,
            companions: 0,
            achievements: 0,
            comments: 0,
            kudos: 0,
            prs: 0,
            max_hr: 0.0,
            favorite_activity: None,
            time_of_day: None,
            favorite_day: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatisticsData {
    pub total: Total,
    pub run: Category,
    pub ride: Category,
    pub swim: Category,
    pub others: Others,
}

impl Default for StatisticsData {
    fn default() -> Self {
        Self {
            total: Total::default(),
            run: Category::new(ActivityType::Run, Sport::Run.name()),
            ride: Category::new(ActivityType::Ride, Sport::Ride.name()),
            swim: Category::new(ActivityType::Swim, Sport::Swim.name()),
            others: Others::default(),
        }
    }
}

/// Final report: the filter that was applied plus the aggregated data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Statistics {
    #[serde(rename = "type")]
    pub activity_type: Option<ActivityType>,
    pub data: StatisticsData,
}

impl Statistics {
    /// All-zero report tagged with the requested filter.
    pub fn empty(activity_type: Option<ActivityType>) -> Self {
        Self {
            activity_type,
            data: StatisticsData::default(),
        }
    }
}
