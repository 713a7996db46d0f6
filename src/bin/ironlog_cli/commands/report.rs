// ABOUTME: report subcommand printing a user's insight report as JSON
// ABOUTME: Fetches the full history through InsightService and serializes the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use anyhow::Result;
use chrono::{DateTime, Utc};
use ironlog::intelligence::InsightConfig;
use ironlog::services::InsightService;
use ironlog::store::SqliteWorkoutStore;
use uuid::Uuid;

/// Generate and print the report for `user_id` as of `now`
pub async fn run(
    store: SqliteWorkoutStore,
    config: InsightConfig,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<()> {
    let service = InsightService::new(store, config);
    let report = service.generate_report(user_id, now).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
