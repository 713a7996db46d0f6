// ABOUTME: classify subcommand printing the muscle groups an exercise name maps to
// ABOUTME: Pure lookup, no database access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use anyhow::Result;
use ironlog::intelligence::MuscleGroupMapper;

/// Print the classification of `name` as a JSON array
pub fn run(name: &str) -> Result<()> {
    let groups = MuscleGroupMapper::classify(name);
    println!("{}", serde_json::to_string(groups)?);
    Ok(())
}
