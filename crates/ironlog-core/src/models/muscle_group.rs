// ABOUTME: Fixed muscle-group classification buckets
// ABOUTME: Eleven groups, ten of which are trainable targets for recovery and focus analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Muscle group an exercise trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, rhomboids, spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gluteals
    Glutes,
    /// Calves
    Calves,
    /// Abdominals and obliques
    Core,
    /// Unclassified exercise
    Other,
}

impl MuscleGroup {
    /// Every group except `Other`, in declaration order
    pub const TRAINABLE: [Self; 10] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
        Self::Core,
    ];

    /// Pushing muscles used by the push/pull balance check
    pub const PUSH: [Self; 3] = [Self::Chest, Self::Shoulders, Self::Triceps];

    /// Pulling muscles used by the push/pull balance check
    pub const PULL: [Self; 2] = [Self::Back, Self::Biceps];

    /// Upper-body muscles used by the upper/lower balance check
    pub const UPPER: [Self; 5] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
    ];

    /// Lower-body muscles used by the upper/lower balance check
    pub const LOWER: [Self; 4] = [Self::Quads, Self::Hamstrings, Self::Glutes, Self::Calves];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Quads => "Quads",
            Self::Hamstrings => "Hamstrings",
            Self::Glutes => "Glutes",
            Self::Calves => "Calves",
            Self::Core => "Core",
            Self::Other => "Other",
        }
    }

    /// Whether the group is a real training target (not `Other`)
    #[must_use]
    pub const fn is_trainable(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
