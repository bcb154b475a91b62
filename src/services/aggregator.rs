// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Statistics aggregation.
//!
//! A single left-to-right fold over an athlete's activities:
//! 1. Drop activities whose raw type does not equal the filter
//! 2. Record type, time-of-day and weekday labels for the mode fields
//! 3. Update the total (sums, extrema, social counters, peak/bottom)
//! 4. Update the Run/Ride/Swim category or the Others bucket
//! 5. Finish: resolve modes and average the collected samples
//!
//! Averages are computed once from the collected samples instead of being
//! updated incrementally, so records lacking an optional metric are simply
//! not sampled.

use crate::models::{
    Activity, ActivityType, Category, DayOfWeek, Others, Statistics, TimeOfDay, Total,
};
use crate::services::classifier::{classify, Sport};
use crate::services::extremum::{
    lower_optional, raise, raise_optional, track_max, Metric,
};
use crate::services::mode::find_mode;
use crate::time_utils;

/// Aggregate `activities` into a report, optionally keeping only one type.
///
/// The filter compares raw tags: filtering by `Ride` drops `VirtualRide`.
pub fn generate(activities: &[Activity], filter: Option<ActivityType>) -> Statistics {
    let mut accumulator = Accumulator::new(filter);
    for activity in activities {
        accumulator.push(activity);
    }

    let stats = accumulator.finish();

    tracing::debug!(
        input = activities.len(),
        aggregated = stats.data.total.activities,
        filter = ?filter,
        "Statistics generated"
    );

    stats
}

/// Per-category samples for the averaged fields.
#[derive(Debug, Default)]
struct Samples {
    speed: Vec<f64>,
    heartrate: Vec<f64>,
    cadence: Vec<f64>,
    watts: Vec<f64>,
}

impl Samples {
    fn fill(&mut self, activity: &Activity, with_watts: bool) {
        self.speed.push(activity.average_speed);
        self.heartrate.extend(activity.average_heartrate);
        self.cadence.extend(activity.average_cadence);
        if with_watts {
            self.watts.extend(activity.average_watts);
        }
    }

    fn apply_averages(&self, category: &mut Category) {
        category.speed_average = average(&self.speed);
        category.heartrate_average = average(&self.heartrate);
        category.cadence_average = average(&self.cadence);
        category.watts_average = average(&self.watts);
    }
}

/// Fold state for one aggregation call.
///
/// Owns every side collection, so independent calls never share state.
#[derive(Debug)]
pub struct Accumulator {
    stats: Statistics,
    activity_types: Vec<Option<ActivityType>>,
    times_of_day: Vec<Option<TimeOfDay>>,
    weekdays: Vec<Option<DayOfWeek>>,
    run: Samples,
    ride: Samples,
    swim: Samples,
}

impl Accumulator {
    pub fn new(filter: Option<ActivityType>) -> Self {
        Self {
            stats: Statistics::empty(filter),
            activity_types: Vec::new(),
            times_of_day: Vec::new(),
            weekdays: Vec::new(),
            run: Samples::default(),
            ride: Samples::default(),
            swim: Samples::default(),
        }
    }

    /// Fold one activity in.
    ///
    /// Returns `false` if the activity was filtered out.
    pub fn push(&mut self, activity: &Activity) -> bool {
        if let Some(filter) = self.stats.activity_type {
            if activity.activity_type != Some(filter) {
                return false;
            }
        }

        self.activity_types.push(activity.activity_type);
        self.times_of_day
            .push(time_utils::time_of_day(&activity.start_date_local));
        self.weekdays
            .push(time_utils::day_of_week(&activity.start_date_local));

        update_total(&mut self.stats.data.total, activity);

        let data = &mut self.stats.data;
        match classify(activity.activity_type) {
            Sport::Run => {
                self.run.fill(activity, false);
                update_category(&mut data.run, activity);
            }
            Sport::Ride => {
                self.ride.fill(activity, true);
                update_category(&mut data.ride, activity);
            }
            Sport::Swim => {
                self.swim.fill(activity, false);
                update_category(&mut data.swim, activity);
            }
            Sport::Other => update_others(&mut data.others, activity),
        }

        true
    }

    /// Resolve the mode fields and averages and return the report.
    pub fn finish(self) -> Statistics {
        let mut stats = self.stats;

        let total = &mut stats.data.total;
        total.favorite_activity = find_mode(&self.activity_types);
        total.time_of_day = find_mode(&self.times_of_day);
        total.favorite_day = find_mode(&self.weekdays);

        self.run.apply_averages(&mut stats.data.run);
        self.ride.apply_averages(&mut stats.data.ride);
        self.swim.apply_averages(&mut stats.data.swim);

        stats
    }
}

fn update_total(total: &mut Total, activity: &Activity) {
    total.activities += 1;
    total.distance += activity.distance;
    total.elevation += activity.total_elevation_gain;
    total.time += activity.moving_time;

    track_max(&mut total.farthest, activity, Metric::Distance);
    track_max(&mut total.longest, activity, Metric::Time);
    track_max(&mut total.elevatest, activity, Metric::Elevation);
    track_max(&mut total.kudoest, activity, Metric::Kudos);

    total.companions += u64::from(activity.athlete_count);
    total.achievements += u64::from(activity.achievement_count);
    total.comments += u64::from(activity.comment_count);
    total.kudos += u64::from(activity.kudos_count);
    total.prs += u64::from(activity.pr_count);

    raise(&mut total.max_hr, activity.max_heartrate);
    raise_optional(&mut total.peak, activity.elev_high);
    lower_optional(&mut total.bottom, activity.elev_low);
}

fn update_category(category: &mut Category, activity: &Activity) {
    category.activities += 1;
    category.distance += activity.distance;
    category.elevation += activity.total_elevation_gain;
    category.time += activity.moving_time;
    category.kudos += u64::from(activity.kudos_count);

    track_max(&mut category.farthest, activity, Metric::Distance);
    track_max(&mut category.longest, activity, Metric::Time);

    raise(&mut category.speed_max, Some(activity.max_speed));
    raise(&mut category.heartrate_max, activity.max_heartrate);
    raise(&mut category.watts_max, activity.max_watts);
}

fn update_others(others: &mut Others, activity: &Activity) {
    others.activities += 1;
    others.distance += activity.distance;
    others.elevation += activity.total_elevation_gain;
    others.time += activity.moving_time;
    others.kudos += u64::from(activity.kudos_count);

    track_max(&mut others.farthest, activity, Metric::Distance);
    track_max(&mut others.longest, activity, Metric::Time);
}

/// Arithmetic mean, 0 for an empty slice.
fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}
