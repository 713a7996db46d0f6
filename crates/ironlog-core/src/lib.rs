// ABOUTME: Core types and constants for the Ironlog workout insight platform
// ABOUTME: Foundation crate with workout records, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types and constants for the Ironlog workout
//! insight platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Domain constants (analysis windows, thresholds, sentinels)
//! - **models**: Logged sets, exercises, weight units, and muscle groups

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by analyzer
pub mod constants;

/// Core data models (`WorkoutSet`, `Exercise`, `MuscleGroup`, ...)
pub mod models;
