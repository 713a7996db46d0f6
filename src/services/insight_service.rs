// ABOUTME: Insight service fetching a user's history and running the insight engine
// ABOUTME: Generates full insight reports and checks single sets for personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::AppResult;
use crate::intelligence::{
    InsightConfig, InsightReport, PersonalRecord, PersonalRecordDetector, SetPerformance,
};
use crate::models::WorkoutSet;
use crate::store::{SetQuery, WorkoutStore};
use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Runs the insight engine over records fetched from a [`WorkoutStore`]
pub struct InsightService<S> {
    store: S,
    config: InsightConfig,
}

impl<S: WorkoutStore> InsightService<S> {
    /// Create a service over `store` with the given report limits
    #[must_use]
    pub const fn new(store: S, config: InsightConfig) -> Self {
        Self { store, config }
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Report limits in use
    #[must_use]
    pub const fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Build the full insight report for `user_id` as of `now`
    ///
    /// Soft-deleted exercises are fetched too so their historical sets keep
    /// contributing to recovery and overload analysis.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn generate_report(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<InsightReport> {
        let started = Instant::now();
        let sets = self.store.sets_for_user(user_id, &SetQuery::all()).await?;
        let exercises = self.store.exercises_for_user(user_id, true).await?;

        let report = InsightReport::compute(&sets, &exercises, now, &self.config);

        crate::logging::log_report_generated(
            &user_id.to_string(),
            sets.len(),
            started.elapsed().as_millis(),
        );
        Ok(report)
    }

    /// Decide whether `set` is a personal record for its exercise
    ///
    /// The set may already be stored; it is excluded from its own history by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the history fetch fails
    #[instrument(skip(self, set), fields(set_id = %set.id, exercise_id = %set.exercise_id))]
    pub async fn check_personal_record(&self, set: &WorkoutSet) -> AppResult<Option<PersonalRecord>> {
        let history = self
            .store
            .sets_for_user(set.user_id, &SetQuery::for_exercise(set.exercise_id))
            .await?;

        let previous: Vec<SetPerformance> = history
            .iter()
            .filter(|candidate| candidate.id != set.id)
            .map(SetPerformance::from)
            .collect();

        let record = PersonalRecordDetector::check_for_pr(&SetPerformance::from(set), &previous);
        debug!(
            history = previous.len(),
            is_record = record.is_some(),
            "Checked set for personal record"
        );
        Ok(record)
    }
}
