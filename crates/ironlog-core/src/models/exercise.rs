// ABOUTME: Exercise record owned by a user, soft-deletable
// ABOUTME: Sets referencing a deleted exercise stay valid for historical aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named exercise a user logs sets against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name, also the input to muscle-group classification
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Exercise {
    /// Create an active exercise with a fresh id
    #[must_use]
    pub fn new(user_id: Uuid, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            created_at,
            deleted_at: None,
        }
    }

    /// Whether the exercise has not been soft-deleted
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Validate the record invariants before it is persisted
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the name is empty or whitespace
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            tracing::debug!(exercise_id = %self.id, "Rejected exercise with a blank name");
            return Err(AppError::invalid_input("exercise name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let exercise = Exercise::new(Uuid::new_v4(), "   ", Utc::now());
        assert!(exercise.validate().is_err());
    }

    #[test]
    fn test_soft_delete_marks_inactive() {
        let mut exercise = Exercise::new(Uuid::new_v4(), "Squat", Utc::now());
        assert!(exercise.is_active());
        exercise.deleted_at = Some(Utc::now());
        assert!(!exercise.is_active());
    }
}
