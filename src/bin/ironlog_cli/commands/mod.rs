// ABOUTME: Command modules for ironlog-cli
// ABOUTME: One module per subcommand: classify, import, report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

pub mod classify;
pub mod import;
pub mod report;
