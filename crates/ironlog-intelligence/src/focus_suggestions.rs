// ABOUTME: Ranked training recommendations from neglect and volume-balance signals
// ABOUTME: Neglected exercises first, then push/pull, upper/lower and untrained-group hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Focus suggestions
//!
//! Candidates are generated by four rules, in this order, then stable-sorted by
//! priority and truncated:
//!
//! 1. active exercises not trained for a week or more (high)
//! 2. push/pull volume imbalance over the trailing week (medium)
//! 3. upper/lower volume imbalance over the trailing week (medium)
//! 4. trainable groups with no volume over the trailing week (medium)
//!
//! Only active exercises and their sets are considered.

use crate::calendar::{whole_days_since, within_trailing_days};
use crate::constants::focus::{IMBALANCE_HIGH_RATIO, IMBALANCE_LOW_RATIO, NEGLECTED_EXERCISE_DAYS};
use crate::constants::windows::TRAILING_WINDOW_DAYS;
use crate::models::{Exercise, MuscleGroup, WorkoutSet};
use crate::muscle_groups::MuscleGroupMapper;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// What a suggestion is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    /// A specific exercise that has been neglected
    Exercise,
    /// A muscle group without recent volume
    MuscleGroup,
    /// A volume imbalance between opposing groups
    Balance,
}

/// Suggestion urgency; orders `High < Medium < Low`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act on this first
    High,
    /// Worth addressing this week
    Medium,
    /// Nice to have
    Low,
}

/// One training recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSuggestion {
    /// Kind of recommendation
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    /// Urgency
    pub priority: Priority,
    /// Short headline
    pub title: String,
    /// Human-readable explanation
    pub reason: String,
    /// Example exercises to pick from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_exercises: Option<Vec<String>>,
    /// Exercise to deep-link to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<Uuid>,
}

impl FocusSuggestion {
    fn balance(title: &str, reason: String, groups: &[MuscleGroup]) -> Self {
        let suggested = groups
            .iter()
            .flat_map(|group| MuscleGroupMapper::sample_exercises(*group).iter().take(1))
            .map(|name| (*name).to_owned())
            .collect();
        Self {
            suggestion_type: SuggestionType::Balance,
            priority: Priority::Medium,
            title: title.to_owned(),
            reason,
            suggested_exercises: Some(suggested),
            exercise_id: None,
        }
    }
}

/// Focus suggestion ranker
pub struct FocusSuggestionRanker;

impl FocusSuggestionRanker {
    /// Produce at most `max_suggestions` recommendations, most urgent first
    ///
    /// Empty when the user has no active exercises or no sets.
    #[must_use]
    pub fn suggest(
        sets: &[WorkoutSet],
        exercises: &[Exercise],
        now: DateTime<Utc>,
        max_suggestions: usize,
    ) -> Vec<FocusSuggestion> {
        let active: Vec<&Exercise> = exercises.iter().filter(|e| e.is_active()).collect();
        if active.is_empty() || sets.is_empty() {
            return Vec::new();
        }

        let mut candidates = Self::neglected_exercises(sets, &active, now);

        let weekly_volume = Self::weekly_volume_by_group(sets, &active, now);
        candidates.extend(Self::push_pull_balance(&weekly_volume));
        candidates.extend(Self::upper_lower_balance(&weekly_volume));
        candidates.extend(Self::untrained_groups(&weekly_volume));

        let generated = candidates.len();
        candidates.sort_by_key(|suggestion| suggestion.priority);
        candidates.truncate(max_suggestions);

        tracing::debug!(
            generated,
            returned = candidates.len(),
            "Ranked focus suggestions"
        );
        candidates
    }

    /// Active exercises whose most recent set is at least a week old
    fn neglected_exercises(
        sets: &[WorkoutSet],
        active: &[&Exercise],
        now: DateTime<Utc>,
    ) -> Vec<FocusSuggestion> {
        let mut last_performed: HashMap<Uuid, DateTime<Utc>> = HashMap::new();
        for set in sets {
            last_performed
                .entry(set.exercise_id)
                .and_modify(|last| *last = (*last).max(set.performed_at))
                .or_insert(set.performed_at);
        }

        active
            .iter()
            .filter_map(|exercise| {
                let last = last_performed.get(&exercise.id)?;
                let days_since = whole_days_since(*last, now);
                (days_since >= NEGLECTED_EXERCISE_DAYS).then(|| FocusSuggestion {
                    suggestion_type: SuggestionType::Exercise,
                    priority: Priority::High,
                    title: format!("Train {}", exercise.name),
                    reason: format!("You haven't trained {} in {days_since} days", exercise.name),
                    suggested_exercises: None,
                    exercise_id: Some(exercise.id),
                })
            })
            .collect()
    }

    /// Trailing-week volume per trainable group, counting active exercises only
    fn weekly_volume_by_group(
        sets: &[WorkoutSet],
        active: &[&Exercise],
        now: DateTime<Utc>,
    ) -> HashMap<MuscleGroup, f64> {
        let groups_by_exercise = MuscleGroupMapper::index_exercises(active.iter().copied());
        let mut volume: HashMap<MuscleGroup, f64> = HashMap::new();

        for set in sets {
            if !within_trailing_days(set.performed_at, now, TRAILING_WINDOW_DAYS) {
                continue;
            }
            let Some(groups) = groups_by_exercise.get(&set.exercise_id) else {
                continue;
            };
            for group in groups.iter().filter(|group| group.is_trainable()) {
                *volume.entry(*group).or_default() += set.volume();
            }
        }

        volume
    }

    fn push_pull_balance(volume: &HashMap<MuscleGroup, f64>) -> Option<FocusSuggestion> {
        let push = sum_volume(volume, &MuscleGroup::PUSH);
        let pull = sum_volume(volume, &MuscleGroup::PULL);
        match imbalance(push, pull)? {
            Imbalance::FirstHeavy(ratio) => Some(FocusSuggestion::balance(
                "Add more pull work",
                format!("Push volume is {ratio:.1}x your pull volume this week"),
                &MuscleGroup::PULL,
            )),
            Imbalance::SecondHeavy(ratio) => Some(FocusSuggestion::balance(
                "Add more push work",
                format!("Pull volume is {:.1}x your push volume this week", ratio.recip()),
                &MuscleGroup::PUSH,
            )),
        }
    }

    fn upper_lower_balance(volume: &HashMap<MuscleGroup, f64>) -> Option<FocusSuggestion> {
        let upper = sum_volume(volume, &MuscleGroup::UPPER);
        let lower = sum_volume(volume, &MuscleGroup::LOWER);
        match imbalance(upper, lower)? {
            Imbalance::FirstHeavy(ratio) => Some(FocusSuggestion::balance(
                "Train your lower body",
                format!("Upper body volume is {ratio:.1}x your lower body volume this week"),
                &MuscleGroup::LOWER,
            )),
            Imbalance::SecondHeavy(ratio) => Some(FocusSuggestion::balance(
                "Train your upper body",
                format!(
                    "Lower body volume is {:.1}x your upper body volume this week",
                    ratio.recip()
                ),
                &MuscleGroup::UPPER,
            )),
        }
    }

    fn untrained_groups(volume: &HashMap<MuscleGroup, f64>) -> Vec<FocusSuggestion> {
        MuscleGroup::TRAINABLE
            .into_iter()
            .filter(|group| volume.get(group).copied().unwrap_or(0.0) <= 0.0)
            .map(|group| FocusSuggestion {
                suggestion_type: SuggestionType::MuscleGroup,
                priority: Priority::Medium,
                title: format!("Train {group}"),
                reason: format!("No {group} volume in the last {TRAILING_WINDOW_DAYS} days"),
                suggested_exercises: Some(
                    MuscleGroupMapper::sample_exercises(group)
                        .iter()
                        .map(|name| (*name).to_owned())
                        .collect(),
                ),
                exercise_id: None,
            })
            .collect()
    }
}

enum Imbalance {
    /// Ratio of first to second is above the high threshold
    FirstHeavy(f64),
    /// Ratio of first to second is below the low threshold
    SecondHeavy(f64),
}

fn imbalance(first: f64, second: f64) -> Option<Imbalance> {
    if first <= 0.0 || second <= 0.0 {
        return None;
    }
    let ratio = first / second;
    if ratio > IMBALANCE_HIGH_RATIO {
        Some(Imbalance::FirstHeavy(ratio))
    } else if ratio < IMBALANCE_LOW_RATIO {
        Some(Imbalance::SecondHeavy(ratio))
    } else {
        None
    }
}

fn sum_volume(volume: &HashMap<MuscleGroup, f64>, groups: &[MuscleGroup]) -> f64 {
    groups
        .iter()
        .filter_map(|group| volume.get(group))
        .sum()
}
