// ABOUTME: Environment-based application configuration
// ABOUTME: Database location, insight report limits, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Environment configuration
//!
//! | Variable | Default | Accepted |
//! |----------|---------|----------|
//! | `DATABASE_URL` | `sqlite:ironlog.db` | any `sqlite:` URL |
//! | `IRONLOG_OVERLOAD_TOP_N` | `5` | `1..=50` |
//! | `IRONLOG_MAX_SUGGESTIONS` | `5` | `1..=20` |
//!
//! Logging variables are documented on [`LoggingConfig::from_env`].

use crate::intelligence::{ConfigError, InsightConfig};
use crate::logging::LoggingConfig;
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Database URL used when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:ironlog.db";

/// Environment variable names
pub mod env_keys {
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Number of exercises given an overload series
    pub const OVERLOAD_TOP_N: &str = "IRONLOG_OVERLOAD_TOP_N";
    /// Maximum focus suggestions per report
    pub const MAX_SUGGESTIONS: &str = "IRONLOG_MAX_SUGGESTIONS";
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `SQLite` connection URL
    pub database_url: String,
    /// Report limits
    pub insights: InsightConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a numeric variable is not a number and
    /// [`ConfigError::ValueOutOfRange`] when it is outside its accepted range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = InsightConfig::default();
        let insights = InsightConfig {
            overload_top_n: parse_env_or(env_keys::OVERLOAD_TOP_N, defaults.overload_top_n)?,
            max_suggestions: parse_env_or(env_keys::MAX_SUGGESTIONS, defaults.max_suggestions)?,
        };
        insights.validate()?;

        let config = Self {
            database_url: env::var(env_keys::DATABASE_URL)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            insights,
            logging: LoggingConfig::from_env(),
        };

        debug!(
            database_url = %config.database_url,
            overload_top_n = config.insights.overload_top_n,
            max_suggestions = config.insights.max_suggestions,
            "Loaded configuration from environment"
        );
        Ok(config)
    }
}

/// Parse `key` from the environment, using `default` when unset or blank
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::Parse {
                key: key.to_owned(),
                reason: format!("'{raw}': {e}"),
            })
        }
        _ => Ok(default),
    }
}
