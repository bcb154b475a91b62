// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod cache;
pub mod classifier;
pub mod extremum;
pub mod format;
pub mod mode;
pub mod strava;

#[cfg(test)]
pub mod test_support;

pub use aggregator::generate;
pub use cache::{CachedReport, FileStore, KeyValueStore, MemoryStore, ReportCache};
pub use classifier::{classify, Sport};
pub use strava::{fetch_all_activities, ActivityQuery, ActivitySource, StravaClient};
