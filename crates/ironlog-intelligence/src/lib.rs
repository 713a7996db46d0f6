// ABOUTME: Workout insight engine over logged sets and exercises
// ABOUTME: Pure analyzers for muscle groups, PRs, streaks, recovery, overload and focus suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Synchronous, side-effect-free analyzers. Every function takes the full input
//! collections plus an explicit `now`, so results are deterministic and callers
//! are free to run them for many users concurrently.
//!
//! - [`MuscleGroupMapper`]: exercise name to trained muscle groups
//! - [`PersonalRecordDetector`]: PR classification and PR timelines
//! - [`StreakCalculator`]: consecutive-day streaks and workout counts
//! - [`RecoveryClassifier`]: per-group recovery status
//! - [`ProgressiveOverloadAnalyzer`]: per-exercise workout history and trend
//! - [`FocusSuggestionRanker`]: prioritized training recommendations
//! - [`InsightReport`]: all of the above in one snapshot

pub use ironlog_core::{constants, errors, models};

/// UTC calendar-day helpers
pub mod calendar;

/// Report limits and configuration errors
pub mod config;

/// Focus suggestion ranking
pub mod focus_suggestions;

/// Composed insight report
pub mod insights;

/// Exercise name classification
pub mod muscle_groups;

/// Personal record detection
pub mod personal_records;

/// Progressive overload analysis
pub mod progressive_overload;

/// Muscle group recovery classification
pub mod recovery;

/// Workout streaks
pub mod streaks;

pub use config::{ConfigError, InsightConfig};
pub use focus_suggestions::{FocusSuggestion, FocusSuggestionRanker, Priority, SuggestionType};
pub use insights::InsightReport;
pub use muscle_groups::MuscleGroupMapper;
pub use personal_records::{
    PersonalRecord, PersonalRecordDetector, RecordEvent, RecordType, SetPerformance,
};
pub use progressive_overload::{
    OverloadDataPoint, OverloadSeries, ProgressiveOverloadAnalyzer, Trend,
};
pub use recovery::{RecoveryClassifier, RecoveryRecord, RecoveryStatus};
pub use streaks::{StreakCalculator, StreakStats};
