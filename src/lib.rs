// ABOUTME: Main library entry point for the Ironlog workout insight platform
// ABOUTME: Wires configuration, logging and storage around the insight engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Strength-training insights computed from logged sets: personal records,
//! streaks, muscle group recovery, progressive overload trends and focus
//! suggestions.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: records, errors, constants
//! - **`ironlog-intelligence`**: pure analyzers, no I/O
//! - **this crate**: environment config, logging, the [`store::WorkoutStore`]
//!   collaborator and [`services::InsightService`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ironlog::config::AppConfig;
//! use ironlog::errors::AppResult;
//! use ironlog::services::InsightService;
//! use ironlog::store::SqliteWorkoutStore;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let store = SqliteWorkoutStore::connect(&config.database_url).await?;
//!     let service = InsightService::new(store, config.insights);
//!
//!     let report = service
//!         .generate_report(uuid::Uuid::new_v4(), chrono::Utc::now())
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

pub use ironlog_core::{constants, errors, models};
pub use ironlog_intelligence as intelligence;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Insight services over the workout store
pub mod services;

/// Workout store trait and `SQLite` implementation
pub mod store;
