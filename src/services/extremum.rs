// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Running extrema used by the aggregator.
//!
//! Every comparison is strict, so on ties the record seen first is kept.

use crate::models::{Activity, SingleActivity};

/// Field an extremum is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Farthest
    Distance,
    /// Longest (moving time)
    Time,
    /// Most elevation gain
    Elevation,
    /// Most kudos
    Kudos,
}

impl Metric {
    fn of_activity(self, activity: &Activity) -> f64 {
        match self {
            Metric::Distance => activity.distance,
            Metric::Time => activity.moving_time as f64,
            Metric::Elevation => activity.total_elevation_gain,
            Metric::Kudos => f64::from(activity.kudos_count),
        }
    }

    fn of_single(self, single: &SingleActivity) -> f64 {
        match self {
            Metric::Distance => single.distance,
            Metric::Time => single.time as f64,
            Metric::Elevation => single.elevation,
            Metric::Kudos => f64::from(single.kudos),
        }
    }
}

/// Replace `best` with `candidate` if it ranks strictly higher by `metric`.
///
/// An empty `best` is always replaced. Returns whether a replacement happened.
pub fn track_max(best: &mut Option<SingleActivity>, candidate: &Activity, metric: Metric) -> bool {
    let replace = match best {
        Some(current) => metric.of_single(current) < metric.of_activity(candidate),
        None => true,
    };

    if replace {
        *best = Some(SingleActivity::from(candidate));
    }
    replace
}

/// Raise `max` to `sample` when the sample is present and strictly larger.
pub fn raise(max: &mut f64, sample: Option<f64>) {
    if let Some(value) = sample {
        if *max < value {
            *max = value;
        }
    }
}

/// Like [`raise`], but the first present sample always wins.
pub fn raise_optional(max: &mut Option<f64>, sample: Option<f64>) {
    if let Some(value) = sample {
        match max {
            Some(current) if *current >= value => {}
            _ => *max = Some(value),
        }
    }
}

/// Lower `min` to `sample`; the first present sample always wins.
pub fn lower_optional(min: &mut Option<f64>, sample: Option<f64>) {
    if let Some(value) = sample {
        match min {
            Some(current) if *current <= value => {}
            _ => *min = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::make_activity;

    #[test]
    fn test_first_candidate_always_wins() {
        let mut best = None;
        let a = make_activity(1, "Run", 0.0);

        assert!(track_max(&mut best, &a, Metric::Distance));
        assert_eq!(best.unwrap().id, 1);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let mut best = None;
        for (id, distance) in [(1, 5000.0), (2, 12000.0), (3, 12000.0), (4, 3000.0)] {
            track_max(&mut best, &make_activity(id, "Run", distance), Metric::Distance);
        }

        let best = best.unwrap();
        assert_eq!(best.id, 2);
        assert_eq!(best.distance, 12000.0);
    }

    #[test]
    fn test_metrics_are_independent() {
        let mut a = make_activity(1, "Ride", 10000.0);
        a.moving_time = 100;
        a.kudos_count = 9;
        let mut b = make_activity(2, "Ride", 5000.0);
        b.moving_time = 900;
        b.kudos_count = 1;

        let mut farthest = None;
        let mut longest = None;
        let mut kudoest = None;
        for activity in [&a, &b] {
            track_max(&mut farthest, activity, Metric::Distance);
            track_max(&mut longest, activity, Metric::Time);
            track_max(&mut kudoest, activity, Metric::Kudos);
        }

        assert_eq!(farthest.unwrap().id, 1);
        assert_eq!(longest.unwrap().id, 2);
        assert_eq!(kudoest.unwrap().id, 1);
    }

    #[test]
    fn test_single_activity_projection() {
        let mut a = make_activity(7, "Run", 4200.0);
        a.name = "Lunch Run".to_string();
        a.total_elevation_gain = 31.5;
        a.moving_time = 1260;
        a.average_speed = 3.33;
        a.kudos_count = 4;

        let mut best = None;
        track_max(&mut best, &a, Metric::Elevation);

        assert_eq!(
            best,
            Some(SingleActivity {
                id: 7,
                title: "Lunch Run".to_string(),
                distance: 4200.0,
                elevation: 31.5,
                time: 1260,
                speed: 3.33,
                kudos: 4,
            })
        );
    }

    #[test]
    fn test_raise_skips_absent() {
        let mut max = 150.0;
        raise(&mut max, None);
        assert_eq!(max, 150.0);
        raise(&mut max, Some(170.0));
        assert_eq!(max, 170.0);
        raise(&mut max, Some(160.0));
        assert_eq!(max, 170.0);
    }

    #[test]
    fn test_optional_extrema_accept_negative_first_value() {
        let mut peak = None;
        let mut bottom = None;

        raise_optional(&mut peak, Some(-2.0));
        lower_optional(&mut bottom, Some(-5.0));
        assert_eq!(peak, Some(-2.0));
        assert_eq!(bottom, Some(-5.0));

        raise_optional(&mut peak, None);
        lower_optional(&mut bottom, None);
        assert_eq!(peak, Some(-2.0));
        assert_eq!(bottom, Some(-5.0));

        raise_optional(&mut peak, Some(800.0));
        lower_optional(&mut bottom, Some(12.0));
        assert_eq!(peak, Some(800.0));
        assert_eq!(bottom, Some(-5.0));
    }
}
