// ABOUTME: Common benchmark utilities for the insight engine
// ABOUTME: Re-exports deterministic workout history generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Common benchmark utilities.

pub mod fixtures;
