// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display conversions for report values.
//!
//! The report keeps raw units (meters, seconds, m/s); these helpers turn them
//! into the strings shown on the dashboard.

use crate::services::classifier::Sport;

/// Print a rounded value without a trailing `.0` and without `-0`.
fn number(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Seconds as `HH:MM:SS`.
pub fn display_time(sec: u64) -> String {
    let hours = sec / 3600;
    let minutes = (sec - hours * 3600) / 60;
    let seconds = sec - hours * 3600 - minutes * 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Meters as kilometers with one decimal.
pub fn display_distance(meters: f64) -> String {
    number(round_half_up(meters / 1000.0 * 10.0) / 10.0)
}

/// Meters, rounded.
pub fn display_elevation(meters: f64) -> String {
    number(round_half_up(meters))
}

/// Meters per second as km/h with two decimals.
pub fn display_speed(meters_per_second: f64) -> String {
    number(round_half_up(meters_per_second * 3.6 * 100.0) / 100.0)
}

/// Running cadence is reported per leg, so it is doubled.
pub fn display_running_cadence(steps_per_minute: f64) -> String {
    number(round_half_up(steps_per_minute * 2.0))
}

pub fn display_round(value: f64) -> String {
    number(round_half_up(value))
}

/// Average cadence with the unit used for the sport.
pub fn display_cadence(sport: Sport, cadence: f64) -> String {
    match sport {
        Sport::Run => format!("{} spm", display_running_cadence(cadence)),
        Sport::Ride => format!("{} rpm", display_round(cadence)),
        Sport::Swim => format!("{} spm", display_round(cadence)),
        Sport::Other => display_round(cadence),
    }
}

/// Format `value` with `f`, or `-` when it is zero (not recorded).
pub fn display_positive(value: f64, f: impl FnOnce(f64) -> String) -> String {
    if value > 0.0 {
        f(value)
    } else {
        "-".to_string()
    }
}
