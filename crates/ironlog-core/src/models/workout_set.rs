// ABOUTME: Logged set record (reps, optional load, timestamp) and weight units
// ABOUTME: Provides volume and calendar-day helpers plus record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unit a set's weight was logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds
    Lbs,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Convert to storage string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Kg => "kg",
        }
    }

    /// Parse from storage string representation
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `InvalidInput` for anything other than `lbs` or `kg`
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lbs" | "lb" => Ok(Self::Lbs),
            "kg" | "kgs" => Ok(Self::Kg),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: {other}"
            ))),
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged performance of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Exercise this set was performed for
    pub exercise_id: Uuid,
    /// Repetitions performed (always > 0)
    pub reps: u32,
    /// External load, absent for bodyweight work
    pub weight: Option<f64>,
    /// Unit of `weight`; present iff `weight` is present
    pub unit: Option<WeightUnit>,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
}

impl WorkoutSet {
    /// Create a bodyweight set with a fresh id
    #[must_use]
    pub fn bodyweight(
        user_id: Uuid,
        exercise_id: Uuid,
        reps: u32,
        performed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            exercise_id,
            reps,
            weight: None,
            unit: None,
            performed_at,
        }
    }

    /// Create a loaded set with a fresh id
    #[must_use]
    pub fn weighted(
        user_id: Uuid,
        exercise_id: Uuid,
        reps: u32,
        weight: f64,
        unit: WeightUnit,
        performed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            exercise_id,
            reps,
            weight: Some(weight),
            unit: Some(unit),
            performed_at,
        }
    }

    /// Load lifted, treating bodyweight sets as zero
    #[must_use]
    pub fn load(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    /// Volume of the set: `reps x weight`, zero for bodyweight sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.reps) * self.load()
    }

    /// UTC calendar day the set belongs to
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.performed_at.date_naive()
    }

    /// Validate the record invariants before it is persisted
    ///
    /// # Errors
    ///
    /// Returns `AppError` if reps are zero, the weight is not a positive finite
    /// number, or the unit is missing/present without a weight
    pub fn validate(&self) -> AppResult<()> {
        self.check_invariants().inspect_err(|error| {
            tracing::debug!(
                set_id = %self.id,
                exercise_id = %self.exercise_id,
                reason = %error.message,
                "Rejected workout set"
            );
        })
    }

    fn check_invariants(&self) -> AppResult<()> {
        if self.reps == 0 {
            return Err(AppError::out_of_range("reps must be greater than zero"));
        }

        match (self.weight, self.unit) {
            (Some(weight), Some(_)) => {
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(AppError::out_of_range(format!(
                        "weight must be a positive number, got {weight}"
                    )));
                }
                Ok(())
            }
            (Some(_), None) => Err(AppError::missing_field("unit")),
            (None, Some(_)) => Err(AppError::invalid_input(
                "unit must not be set for a bodyweight set",
            )),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use chrono::TimeZone;

    fn at_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_volume_uses_zero_for_bodyweight() {
        let user = Uuid::new_v4();
        let exercise = Uuid::new_v4();

        let loaded = WorkoutSet::weighted(user, exercise, 5, 100.0, WeightUnit::Kg, at_noon());
        let bodyweight = WorkoutSet::bodyweight(user, exercise, 12, at_noon());

        assert!((loaded.volume() - 500.0).abs() < f64::EPSILON);
        assert!(bodyweight.volume().abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_zero_reps() {
        let set = WorkoutSet::bodyweight(Uuid::new_v4(), Uuid::new_v4(), 0, at_noon());
        let err = set.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_validate_requires_unit_with_weight() {
        let mut set =
            WorkoutSet::weighted(Uuid::new_v4(), Uuid::new_v4(), 5, 60.0, WeightUnit::Kg, at_noon());
        assert!(set.validate().is_ok());

        set.unit = None;
        assert_eq!(
            set.validate().unwrap_err().code,
            ErrorCode::MissingRequiredField
        );

        set.weight = None;
        set.unit = Some(WeightUnit::Lbs);
        assert_eq!(set.validate().unwrap_err().code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_non_positive_weight() {
        let set =
            WorkoutSet::weighted(Uuid::new_v4(), Uuid::new_v4(), 5, -2.5, WeightUnit::Lbs, at_noon());
        assert_eq!(set.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_weight_unit_round_trips_through_storage_strings() {
        assert_eq!(WeightUnit::parse("LBS").unwrap(), WeightUnit::Lbs);
        assert_eq!(WeightUnit::parse("kg").unwrap(), WeightUnit::Kg);
        assert!(WeightUnit::parse("stone").is_err());
        assert_eq!(
            serde_json::to_string(&WeightUnit::Lbs).unwrap(),
            "\"lbs\""
        );
    }
}
