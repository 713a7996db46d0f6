// ABOUTME: Domain service layer connecting the workout store to the insight engine
// ABOUTME: Fetches a user's records and runs the analyzers over them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Domain service layer
//!
//! Services own the only asynchronous boundary in the system: the fetch from the
//! store. Everything after the fetch is a synchronous call into the analyzers.

/// Insight report generation and PR checks
pub mod insight_service;

pub use insight_service::InsightService;
