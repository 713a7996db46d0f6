// ABOUTME: Tunable limits for insight report generation
// ABOUTME: Overload series count and focus suggestion cap, with range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::constants::focus::DEFAULT_MAX_SUGGESTIONS;
use crate::constants::overload::DEFAULT_TOP_N;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Accepted range for `overload_top_n`
pub const OVERLOAD_TOP_N_RANGE: RangeInclusive<usize> = 1..=50;

/// Accepted range for `max_suggestions`
pub const MAX_SUGGESTIONS_RANGE: RangeInclusive<usize> = 1..=20;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value could not be parsed
    #[error("Failed to parse {key}: {reason}")]
    Parse {
        /// Setting that failed
        key: String,
        /// Parser message
        reason: String,
    },

    /// A value parsed but is outside its accepted range
    #[error("{key} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        /// Setting that failed
        key: String,
        /// Rejected value
        value: usize,
        /// Inclusive lower bound
        min: usize,
        /// Inclusive upper bound
        max: usize,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string())
    }
}

/// Limits applied when composing an insight report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Number of exercises given an overload series
    pub overload_top_n: usize,
    /// Maximum number of focus suggestions returned
    pub max_suggestions: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            overload_top_n: DEFAULT_TOP_N,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl InsightConfig {
    /// Check every limit against its accepted range
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] for the first limit outside its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("IRONLOG_OVERLOAD_TOP_N", self.overload_top_n, &OVERLOAD_TOP_N_RANGE)?;
        check_range(
            "IRONLOG_MAX_SUGGESTIONS",
            self.max_suggestions,
            &MAX_SUGGESTIONS_RANGE,
        )
    }
}

fn check_range(key: &str, value: usize, range: &RangeInclusive<usize>) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_owned(),
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
