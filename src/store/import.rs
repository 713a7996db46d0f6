// ABOUTME: Bulk JSON import of exercises and sets into the SQLite workout store
// ABOUTME: Validates every record, then writes the whole document in one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::sqlite::{write_exercise, write_set};
use super::SqliteWorkoutStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, WorkoutSet};
use serde::{Deserialize, Serialize};
use sqlx::{Sqlite, Transaction};
use std::collections::HashSet;
use tracing::{info, warn};

/// Import document: `{ "exercises": [...], "sets": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutImport {
    /// Exercises to create, including soft-deleted ones
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Logged sets
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

/// Rows written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Exercises written
    pub exercises: usize,
    /// Sets written
    pub sets: usize,
}

impl WorkoutImport {
    /// Parse an import document
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every exercise and set in the document
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, naming the offending record
    pub fn validate(&self) -> AppResult<()> {
        for exercise in &self.exercises {
            exercise.validate().map_err(|e| {
                AppError::invalid_input(format!("Exercise {}: {}", exercise.id, e.message))
            })?;
        }
        for set in &self.sets {
            set.validate()
                .map_err(|e| AppError::invalid_input(format!("Set {}: {}", set.id, e.message)))?;
        }
        Ok(())
    }
}

impl SqliteWorkoutStore {
    /// Validate and write an import document, exercises first
    ///
    /// Sets whose exercise is neither in the document nor already stored are rejected.
    /// All rows are written in one transaction, so a failed import leaves the store
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a validation error before anything is written, or the first
    /// database error encountered while writing
    pub async fn import(&self, import: &WorkoutImport) -> AppResult<ImportSummary> {
        import.validate()?;

        let imported_ids: HashSet<_> = import.exercises.iter().map(|e| e.id).collect();
        for set in &import.sets {
            if !imported_ids.contains(&set.exercise_id)
                && self.get_exercise(set.exercise_id).await?.is_none()
            {
                return Err(AppError::invalid_input(format!(
                    "Set {} references unknown exercise {}",
                    set.id, set.exercise_id
                )));
            }
        }

        let mut tx = self.pool().begin().await?;
        let written = write_import(&mut tx, import).await;
        if let Err(error) = written {
            if let Err(rollback_error) = tx.rollback().await {
                warn!(error = %rollback_error, "Failed to roll back workout import");
            }
            return Err(error);
        }
        tx.commit().await?;

        let summary = ImportSummary {
            exercises: import.exercises.len(),
            sets: import.sets.len(),
        };
        info!(
            exercises = summary.exercises,
            sets = summary.sets,
            "Imported workout history"
        );
        Ok(summary)
    }
}

async fn write_import(tx: &mut Transaction<'_, Sqlite>, import: &WorkoutImport) -> AppResult<()> {
    for exercise in &import.exercises {
        write_exercise(&mut **tx, exercise).await?;
    }
    for set in &import.sets {
        write_set(&mut **tx, set).await?;
    }
    Ok(())
}
