// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod statistics;

pub use activity::{Activity, ActivityType, UnknownActivityType};
pub use athlete::Athlete;
pub use statistics::{
    Category, DayOfWeek, Others, SingleActivity, Statistics, StatisticsData, TimeOfDay, Total,
};
