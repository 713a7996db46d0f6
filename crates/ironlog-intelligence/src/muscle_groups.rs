// ABOUTME: Keyword-based classifier mapping exercise names to the muscle groups they train
// ABOUTME: Exact match first, then longest contained keyword, falling back to Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Muscle group mapping
//!
//! Classification is a pure table lookup on the normalized (trimmed, uppercased)
//! exercise name:
//!
//! 1. exact match against the keyword table;
//! 2. otherwise the longest keyword contained in the name wins, so
//!    `"BARBELL BENCH PRESS"` resolves through `BENCH PRESS` rather than `BENCH`
//!    or `PRESS`;
//! 3. otherwise `[Other]`.
//!
//! Compound movements map to several groups, isolation movements to one.

use crate::models::{Exercise, MuscleGroup};
use std::collections::HashMap;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::models::MuscleGroup::{
    Back, Biceps, Calves, Chest, Core, Glutes, Hamstrings, Other, Quads, Shoulders, Triceps,
};

const OTHER_ONLY: &[MuscleGroup] = &[Other];

/// Keyword table (uppercase keyword -> trained groups)
const KEYWORD_TABLE: &[(&str, &[MuscleGroup])] = &[
    // Chest
    ("BENCH PRESS", &[Chest, Triceps, Shoulders]),
    ("INCLINE BENCH", &[Chest, Shoulders, Triceps]),
    ("DECLINE BENCH", &[Chest, Triceps]),
    ("BENCH", &[Chest, Triceps]),
    ("CHEST PRESS", &[Chest, Triceps]),
    ("CHEST FLY", &[Chest]),
    ("CABLE CROSSOVER", &[Chest]),
    ("PEC DECK", &[Chest]),
    ("FLY", &[Chest]),
    ("FLYE", &[Chest]),
    ("PUSH UP", &[Chest, Triceps, Shoulders]),
    ("PUSHUP", &[Chest, Triceps, Shoulders]),
    ("PUSH-UP", &[Chest, Triceps, Shoulders]),
    ("DIP", &[Chest, Triceps]),
    // Back
    ("DEADLIFT", &[Back, Hamstrings, Glutes]),
    ("ROMANIAN DEADLIFT", &[Hamstrings, Glutes, Back]),
    ("STIFF LEG DEADLIFT", &[Hamstrings, Glutes, Back]),
    ("RDL", &[Hamstrings, Glutes]),
    ("ROW", &[Back, Biceps]),
    ("PULL UP", &[Back, Biceps]),
    ("PULLUP", &[Back, Biceps]),
    ("PULL-UP", &[Back, Biceps]),
    ("CHIN UP", &[Back, Biceps]),
    ("CHINUP", &[Back, Biceps]),
    ("LAT PULLDOWN", &[Back, Biceps]),
    ("PULLDOWN", &[Back, Biceps]),
    ("SHRUG", &[Back]),
    ("BACK EXTENSION", &[Back, Glutes]),
    ("HYPEREXTENSION", &[Back, Glutes]),
    // Shoulders
    ("OVERHEAD PRESS", &[Shoulders, Triceps]),
    ("SHOULDER PRESS", &[Shoulders, Triceps]),
    ("MILITARY PRESS", &[Shoulders, Triceps]),
    ("ARNOLD PRESS", &[Shoulders, Triceps]),
    ("OHP", &[Shoulders, Triceps]),
    ("PRESS", &[Shoulders, Triceps]),
    ("LATERAL RAISE", &[Shoulders]),
    ("FRONT RAISE", &[Shoulders]),
    ("REAR DELT", &[Shoulders]),
    ("FACE PULL", &[Shoulders, Back]),
    ("UPRIGHT ROW", &[Shoulders, Back]),
    // Arms
    ("CURL", &[Biceps]),
    ("BICEP", &[Biceps]),
    ("HAMMER CURL", &[Biceps]),
    ("PREACHER CURL", &[Biceps]),
    ("TRICEP", &[Triceps]),
    ("SKULL CRUSHER", &[Triceps]),
    ("PUSHDOWN", &[Triceps]),
    ("CLOSE GRIP BENCH", &[Triceps, Chest]),
    // Legs
    ("SQUAT", &[Quads, Glutes, Hamstrings]),
    ("FRONT SQUAT", &[Quads, Glutes]),
    ("SPLIT SQUAT", &[Quads, Glutes]),
    ("LEG PRESS", &[Quads, Glutes]),
    ("LEG EXTENSION", &[Quads]),
    ("LUNGE", &[Quads, Glutes]),
    ("STEP UP", &[Quads, Glutes]),
    ("LEG CURL", &[Hamstrings]),
    ("HAMSTRING CURL", &[Hamstrings]),
    ("NORDIC", &[Hamstrings]),
    ("GOOD MORNING", &[Hamstrings, Back]),
    ("HIP THRUST", &[Glutes, Hamstrings]),
    ("GLUTE BRIDGE", &[Glutes, Hamstrings]),
    ("GLUTE", &[Glutes]),
    ("CALF", &[Calves]),
    ("CALF RAISE", &[Calves]),
    // Core
    ("PLANK", &[Core]),
    ("CRUNCH", &[Core]),
    ("SIT UP", &[Core]),
    ("SITUP", &[Core]),
    ("AB WHEEL", &[Core]),
    ("LEG RAISE", &[Core]),
    ("RUSSIAN TWIST", &[Core]),
    ("WOODCHOP", &[Core]),
];

/// Sample exercises suggested when a group goes untrained
const SAMPLE_EXERCISES: &[(MuscleGroup, &[&str])] = &[
    (Chest, &["Bench Press", "Incline Bench Press", "Push Up"]),
    (Back, &["Barbell Row", "Pull Up", "Lat Pulldown"]),
    (Shoulders, &["Overhead Press", "Lateral Raise", "Face Pull"]),
    (Biceps, &["Barbell Curl", "Hammer Curl"]),
    (Triceps, &["Tricep Pushdown", "Skull Crusher", "Dip"]),
    (Quads, &["Squat", "Leg Press", "Lunge"]),
    (Hamstrings, &["Romanian Deadlift", "Leg Curl"]),
    (Glutes, &["Hip Thrust", "Glute Bridge"]),
    (Calves, &["Standing Calf Raise", "Seated Calf Raise"]),
    (Core, &["Plank", "Hanging Leg Raise", "Ab Wheel"]),
];

/// Lookup structures derived once from `KEYWORD_TABLE`
struct KeywordIndex {
    exact: HashMap<&'static str, &'static [MuscleGroup]>,
    /// Keywords sorted by descending length, ties alphabetical
    by_length: Vec<(&'static str, &'static [MuscleGroup])>,
}

fn keyword_index() -> &'static KeywordIndex {
    static INDEX: OnceLock<KeywordIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let exact = KEYWORD_TABLE.iter().copied().collect();
        let mut by_length = KEYWORD_TABLE.to_vec();
        by_length.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));
        KeywordIndex { exact, by_length }
    })
}

/// Static exercise-name classifier
pub struct MuscleGroupMapper;

impl MuscleGroupMapper {
    /// Classify an exercise name into the muscle groups it trains
    ///
    /// Total and case-insensitive; unknown or empty names map to `[Other]`.
    #[must_use]
    pub fn classify(exercise_name: &str) -> &'static [MuscleGroup] {
        let normalized = exercise_name.trim().to_uppercase();
        if normalized.is_empty() {
            return OTHER_ONLY;
        }

        let index = keyword_index();
        if let Some(groups) = index.exact.get(normalized.as_str()) {
            return *groups;
        }

        index
            .by_length
            .iter()
            .find(|(keyword, _)| normalized.contains(*keyword))
            .map_or(OTHER_ONLY, |(_, groups)| *groups)
    }

    /// Sample exercises for a group (empty for `Other`)
    #[must_use]
    pub fn sample_exercises(group: MuscleGroup) -> &'static [&'static str] {
        SAMPLE_EXERCISES
            .iter()
            .find(|(candidate, _)| *candidate == group)
            .map(|(_, samples)| *samples)
            .unwrap_or_default()
    }

    /// Build an `exercise_id -> groups` lookup for a collection of exercises
    #[must_use]
    pub fn index_exercises<'a, I>(exercises: I) -> HashMap<Uuid, &'static [MuscleGroup]>
    where
        I: IntoIterator<Item = &'a Exercise>,
    {
        exercises
            .into_iter()
            .map(|exercise| (exercise.id, Self::classify(&exercise.name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trainable_group_has_two_or_three_samples() {
        for group in MuscleGroup::TRAINABLE {
            let samples = MuscleGroupMapper::sample_exercises(group);
            assert!(
                (2..=3).contains(&samples.len()),
                "{group} has {} samples",
                samples.len()
            );
        }
        assert!(MuscleGroupMapper::sample_exercises(Other).is_empty());
    }

    #[test]
    fn test_keywords_are_normalized_uppercase() {
        for (keyword, groups) in KEYWORD_TABLE {
            assert_eq!(*keyword, keyword.trim().to_uppercase());
            assert!(!groups.is_empty());
            assert!(!groups.contains(&Other));
        }
    }
}
