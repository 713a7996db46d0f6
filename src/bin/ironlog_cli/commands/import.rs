// ABOUTME: import subcommand loading exercises and sets from a JSON document
// ABOUTME: Validates the whole document before writing anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use anyhow::{Context, Result};
use ironlog::store::{SqliteWorkoutStore, WorkoutImport};
use std::path::Path;

/// Read `file` and write its contents to the store
pub async fn run(store: &SqliteWorkoutStore, file: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let import = WorkoutImport::from_json(&raw)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let summary = store.import(&import).await?;
    println!(
        "Imported {} exercises and {} sets from {}",
        summary.exercises,
        summary.sets,
        file.display()
    );
    Ok(())
}
