// ABOUTME: UTC calendar-day helpers shared by the insight analyzers
// ABOUTME: Day keys, floored whole-day spans, and trailing window membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::constants::windows::SECONDS_PER_DAY;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Calendar day (UTC) a timestamp falls on
#[must_use]
pub fn day_key(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

/// Whole days elapsed from `then` to `now`, floored, never negative
#[must_use]
pub fn whole_days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_seconds().div_euclid(SECONDS_PER_DAY).max(0)
}

/// Whether `timestamp` lies within the trailing `days`-day window ending at `now`
#[must_use]
pub fn within_trailing_days(timestamp: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    timestamp >= now - Duration::days(days)
}
