// ABOUTME: Personal record detection for a single set against prior sets of the same exercise
// ABOUTME: Weight beats volume beats reps; also replays a history into a PR timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Personal record detection
//!
//! A set is a PR when it strictly improves on every earlier set of the same
//! exercise in at least one dimension. Dimensions are checked in priority order:
//!
//! 1. **weight** - heaviest load lifted (must be non-zero)
//! 2. **volume** - `reps x weight` (must be non-zero)
//! 3. **reps** - the residual signal for bodyweight or fixed-load work
//!
//! Equal values never count. The first set ever logged for an exercise is
//! always a PR against a baseline of zero.

use crate::models::WorkoutSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The parts of a set that matter for record detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetPerformance {
    /// Repetitions performed
    pub reps: u32,
    /// External load, absent for bodyweight work
    pub weight: Option<f64>,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
}

impl SetPerformance {
    fn load(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }

    fn volume(&self) -> f64 {
        self.load() * f64::from(self.reps)
    }
}

impl From<&WorkoutSet> for SetPerformance {
    fn from(set: &WorkoutSet) -> Self {
        Self {
            reps: set.reps,
            weight: set.weight,
            performed_at: set.performed_at,
        }
    }
}

/// Dimension in which a record was set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Heavier load than ever before
    Weight,
    /// More repetitions than ever before
    Reps,
    /// More total work (`reps x weight`) than ever before
    Volume,
}

/// Classification of one set relative to its history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Dimension that improved
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Value achieved by the set
    pub current_value: f64,
    /// Best value before this set (0 for a first entry)
    pub previous_value: f64,
}

/// A set that was a personal record when it was logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordEvent {
    /// Set that achieved the record
    pub set_id: Uuid,
    /// Exercise the record belongs to
    pub exercise_id: Uuid,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
    /// What kind of record it was
    pub record: PersonalRecord,
}

/// Best values seen so far for one exercise
#[derive(Debug, Clone, Copy, Default)]
struct RunningBest {
    weight: f64,
    reps: u32,
    volume: f64,
}

impl RunningBest {
    fn absorb(&mut self, performance: &SetPerformance) {
        self.weight = self.weight.max(performance.load());
        self.reps = self.reps.max(performance.reps);
        self.volume = self.volume.max(performance.volume());
    }
}

/// Personal record detection engine
pub struct PersonalRecordDetector;

impl PersonalRecordDetector {
    /// Decide whether `current` is a record relative to `previous_sets`
    ///
    /// `previous_sets` must not contain `current` and should hold only sets of the
    /// same exercise and user, in any order.
    #[must_use]
    pub fn check_for_pr(
        current: &SetPerformance,
        previous_sets: &[SetPerformance],
    ) -> Option<PersonalRecord> {
        if previous_sets.is_empty() {
            return Some(Self::first_entry(current));
        }

        let mut best = RunningBest::default();
        for previous in previous_sets {
            best.absorb(previous);
        }
        Self::compare(current, &best)
    }

    /// Replay a history and report every set that was a record when logged
    ///
    /// Sets may span several exercises; each exercise is replayed independently in
    /// chronological order (ties keep input order). Events are returned in
    /// chronological order across all exercises.
    #[must_use]
    pub fn timeline(sets: &[WorkoutSet]) -> Vec<RecordEvent> {
        let mut ordered: Vec<&WorkoutSet> = sets.iter().collect();
        ordered.sort_by_key(|set| set.performed_at);

        let mut bests: HashMap<Uuid, RunningBest> = HashMap::new();
        let mut events = Vec::new();

        for set in ordered {
            let performance = SetPerformance::from(set);
            let record = match bests.get(&set.exercise_id) {
                None => Some(Self::first_entry(&performance)),
                Some(best) => Self::compare(&performance, best),
            };

            if let Some(record) = record {
                events.push(RecordEvent {
                    set_id: set.id,
                    exercise_id: set.exercise_id,
                    performed_at: set.performed_at,
                    record,
                });
            }

            bests
                .entry(set.exercise_id)
                .or_default()
                .absorb(&performance);
        }

        tracing::debug!(
            sets = sets.len(),
            records = events.len(),
            "Replayed personal record timeline"
        );
        events
    }

    fn first_entry(current: &SetPerformance) -> PersonalRecord {
        let (record_type, current_value) = if current.load() > 0.0 {
            (RecordType::Weight, current.load())
        } else if current.reps > 0 {
            (RecordType::Reps, f64::from(current.reps))
        } else {
            (RecordType::Volume, current.volume())
        };

        PersonalRecord {
            record_type,
            current_value,
            previous_value: 0.0,
        }
    }

    fn compare(current: &SetPerformance, best: &RunningBest) -> Option<PersonalRecord> {
        let weight = current.load();
        if weight > 0.0 && weight > best.weight {
            return Some(PersonalRecord {
                record_type: RecordType::Weight,
                current_value: weight,
                previous_value: best.weight,
            });
        }

        let volume = current.volume();
        if volume > 0.0 && volume > best.volume {
            return Some(PersonalRecord {
                record_type: RecordType::Volume,
                current_value: volume,
                previous_value: best.volume,
            });
        }

        if current.reps > best.reps {
            return Some(PersonalRecord {
                record_type: RecordType::Reps,
                current_value: f64::from(current.reps),
                previous_value: f64::from(best.reps),
            });
        }

        None
    }
}
