// ABOUTME: Workout store abstraction feeding the insight engine
// ABOUTME: Read-side collaborator trait with set filters, plus the SQLite implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Workout Store
//!
//! The insight engine never touches storage. Callers fetch a user's records
//! through [`WorkoutStore`] and hand the collections to the analyzers.

/// JSON bulk import
pub mod import;

/// `SQLite` implementation backed by `sqlx`
pub mod sqlite;

pub use import::{ImportSummary, WorkoutImport};
pub use sqlite::SqliteWorkoutStore;

use crate::errors::AppResult;
use crate::models::{Exercise, WorkoutSet};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Optional filters applied when fetching sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetQuery {
    /// Only sets of this exercise
    pub exercise_id: Option<Uuid>,
    /// Only sets performed at or after this instant
    pub performed_after: Option<DateTime<Utc>>,
    /// Only sets performed strictly before this instant
    pub performed_before: Option<DateTime<Utc>>,
}

impl SetQuery {
    /// Every set of the user
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Every set of one exercise
    #[must_use]
    pub fn for_exercise(exercise_id: Uuid) -> Self {
        Self {
            exercise_id: Some(exercise_id),
            ..Self::default()
        }
    }

    /// Restrict to `[after, before)`
    #[must_use]
    pub const fn between(mut self, after: DateTime<Utc>, before: DateTime<Utc>) -> Self {
        self.performed_after = Some(after);
        self.performed_before = Some(before);
        self
    }

    /// Whether a set passes every filter
    #[must_use]
    pub fn matches(&self, set: &WorkoutSet) -> bool {
        self.exercise_id.is_none_or(|id| set.exercise_id == id)
            && self.performed_after.is_none_or(|after| set.performed_at >= after)
            && self.performed_before.is_none_or(|before| set.performed_at < before)
    }
}

/// Read access to a user's logged training
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Sets of `user_id` passing `query`, ascending by `performed_at`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn sets_for_user(&self, user_id: Uuid, query: &SetQuery) -> AppResult<Vec<WorkoutSet>>;

    /// Exercises of `user_id`, optionally including soft-deleted ones
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn exercises_for_user(
        &self,
        user_id: Uuid,
        include_deleted: bool,
    ) -> AppResult<Vec<Exercise>>;
}
