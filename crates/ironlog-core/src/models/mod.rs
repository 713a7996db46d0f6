// ABOUTME: Core data models for logged workouts
// ABOUTME: Re-exports WorkoutSet, Exercise, WeightUnit, and MuscleGroup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Data Models
//!
//! Records fetched from the workout store. Sets are immutable once logged;
//! exercises are only ever soft-deleted, so a set never loses its owner.

mod exercise;
mod muscle_group;
mod workout_set;

pub use exercise::Exercise;
pub use muscle_group::MuscleGroup;
pub use workout_set::{WeightUnit, WorkoutSet};
