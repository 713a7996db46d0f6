// ABOUTME: Domain constants for the workout insight analyzers
// ABOUTME: Analysis windows, recovery thresholds, trend thresholds, and ranking limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Domain constants
//!
//! Constants are grouped by the analyzer that owns them. Values here are part of
//! the public contract with report consumers (for example the `999` sentinel), so
//! changing them is a breaking change.

/// Time windows shared by several analyzers
pub mod windows {
    /// Trailing window (days) for volume and frequency aggregates
    pub const TRAILING_WINDOW_DAYS: i64 = 7;

    /// Seconds in one calendar day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Recovery classification
pub mod recovery {
    /// `days_since` reported for a muscle group that was never trained
    pub const NEVER_TRAINED_DAYS: i64 = 999;

    /// Upper bound (inclusive) of days since training for `fresh`
    pub const FRESH_MAX_DAYS: i64 = 2;

    /// Upper bound (inclusive) of days since training for `recovering`
    pub const RECOVERING_MAX_DAYS: i64 = 4;

    /// Upper bound (inclusive) of days since training for `ready`
    pub const READY_MAX_DAYS: i64 = 7;
}

/// Progressive overload analysis
pub mod overload {
    /// Default number of exercises analyzed
    pub const DEFAULT_TOP_N: usize = 5;

    /// Most recent workout days kept per exercise
    pub const MAX_DATA_POINTS: usize = 10;

    /// Minimum workout days needed before a trend other than plateau is reported
    pub const MIN_POINTS_FOR_TREND: usize = 6;

    /// Workout days averaged on each side of the trend comparison
    pub const TREND_HALF_WINDOW: usize = 3;

    /// Volume change (percent) above which the trend is improving
    pub const IMPROVING_THRESHOLD_PERCENT: f64 = 5.0;

    /// Volume change (percent) below which the trend is declining
    pub const DECLINING_THRESHOLD_PERCENT: f64 = -5.0;
}

/// Focus suggestion ranking
pub mod focus {
    /// Default cap on returned suggestions
    pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

    /// Days without a set before an active exercise counts as neglected
    pub const NEGLECTED_EXERCISE_DAYS: i64 = 7;

    /// Volume ratio above which one side of a split is over-trained
    pub const IMBALANCE_HIGH_RATIO: f64 = 2.0;

    /// Volume ratio below which one side of a split is under-trained
    pub const IMBALANCE_LOW_RATIO: f64 = 0.5;
}
