// ABOUTME: Composed insight report combining every analyzer into one snapshot
// ABOUTME: Streaks, recovery grid, overload series, focus suggestions and this week's records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::calendar::within_trailing_days;
use crate::config::InsightConfig;
use crate::constants::windows::TRAILING_WINDOW_DAYS;
use crate::focus_suggestions::{FocusSuggestion, FocusSuggestionRanker};
use crate::models::{Exercise, WorkoutSet};
use crate::personal_records::{PersonalRecordDetector, RecordEvent};
use crate::progressive_overload::{OverloadSeries, ProgressiveOverloadAnalyzer};
use crate::recovery::{RecoveryClassifier, RecoveryRecord};
use crate::streaks::{StreakCalculator, StreakStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the insight engine knows about one user at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Instant the report was computed for
    pub generated_at: DateTime<Utc>,
    /// Workout streaks
    pub streaks: StreakStats,
    /// One record per trainable muscle group, most overdue first
    pub recovery: Vec<RecoveryRecord>,
    /// Most recently trained exercises with their volume trend
    pub overload: Vec<OverloadSeries>,
    /// Ranked recommendations
    pub suggestions: Vec<FocusSuggestion>,
    /// Personal records set in the trailing week, newest first
    pub recent_records: Vec<RecordEvent>,
}

impl InsightReport {
    /// Run every analyzer over a user's history
    ///
    /// `exercises` should include soft-deleted exercises so historical sets keep
    /// their names; the focus ranker filters to active exercises itself.
    #[must_use]
    pub fn compute(
        sets: &[WorkoutSet],
        exercises: &[Exercise],
        now: DateTime<Utc>,
        config: &InsightConfig,
    ) -> Self {
        let mut recent_records: Vec<RecordEvent> = PersonalRecordDetector::timeline(sets)
            .into_iter()
            .filter(|event| within_trailing_days(event.performed_at, now, TRAILING_WINDOW_DAYS))
            .collect();
        recent_records.reverse();

        let report = Self {
            generated_at: now,
            streaks: StreakCalculator::compute(sets, now),
            recovery: RecoveryClassifier::classify(sets, exercises, now),
            overload: ProgressiveOverloadAnalyzer::analyze(sets, exercises, config.overload_top_n),
            suggestions: FocusSuggestionRanker::suggest(
                sets,
                exercises,
                now,
                config.max_suggestions,
            ),
            recent_records,
        };

        tracing::info!(
            sets = sets.len(),
            exercises = exercises.len(),
            suggestions = report.suggestions.len(),
            recent_records = report.recent_records.len(),
            "Generated insight report"
        );
        report
    }
}
