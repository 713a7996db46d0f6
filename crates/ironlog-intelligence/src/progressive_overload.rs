// ABOUTME: Progressive overload analysis for the most recently trained exercises
// ABOUTME: Groups sets into workout days and classifies the volume trend of the last six workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Progressive overload analysis
//!
//! For each of the `top_n` most recently trained exercises the history is
//! collapsed into one data point per workout day (max weight, max reps, total
//! volume), keeping the ten most recent days in chronological order.
//!
//! The trend compares the average volume of the last three workouts with the
//! three before them:
//!
//! - change > +5%: improving
//! - change < -5%: declining
//! - otherwise plateau
//!
//! Fewer than six workouts is always a plateau. When the earlier average is zero
//! the trend is improving if the recent average is positive, plateau otherwise.

use crate::calendar::day_key;
use crate::constants::overload::{
    DECLINING_THRESHOLD_PERCENT, IMPROVING_THRESHOLD_PERCENT, MAX_DATA_POINTS,
    MIN_POINTS_FOR_TREND, TREND_HALF_WINDOW,
};
use crate::models::{Exercise, WorkoutSet};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Direction of an exercise's recent volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Recent volume is more than 5% above the previous workouts
    Improving,
    /// Volume within +/-5%, or not enough data
    Plateau,
    /// Recent volume is more than 5% below the previous workouts
    Declining,
}

/// One workout day for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadDataPoint {
    /// Calendar day of the workout
    pub date: NaiveDate,
    /// Heaviest weight used, `None` if every set was bodyweight
    pub max_weight: Option<f64>,
    /// Most reps in a single set
    pub max_reps: u32,
    /// Summed `reps x weight` over the day's sets
    pub volume: f64,
}

/// Workout-day history and trend for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverloadSeries {
    /// Exercise analyzed
    pub exercise_id: Uuid,
    /// Exercise display name
    pub exercise_name: String,
    /// Up to ten workout days, oldest first
    pub data_points: Vec<OverloadDataPoint>,
    /// Volume trend over the last six workout days
    pub trend: Trend,
}

/// Progressive overload analyzer
pub struct ProgressiveOverloadAnalyzer;

impl ProgressiveOverloadAnalyzer {
    /// Analyze the `top_n` most recently trained exercises
    ///
    /// Returns `min(top_n, exercises trained)` series ordered by most recent
    /// activity. Sets whose exercise is unknown are skipped; soft-deleted
    /// exercises are still analyzed.
    #[must_use]
    pub fn analyze(
        sets: &[WorkoutSet],
        exercises: &[Exercise],
        top_n: usize,
    ) -> Vec<OverloadSeries> {
        let exercises_by_id: HashMap<Uuid, &Exercise> =
            exercises.iter().map(|exercise| (exercise.id, exercise)).collect();

        let mut sets_by_exercise: HashMap<Uuid, Vec<&WorkoutSet>> = HashMap::new();
        for set in sets {
            if exercises_by_id.contains_key(&set.exercise_id) {
                sets_by_exercise.entry(set.exercise_id).or_default().push(set);
            }
        }

        let mut ranked: Vec<(&Exercise, DateTime<Utc>, Vec<&WorkoutSet>)> = sets_by_exercise
            .into_iter()
            .filter_map(|(exercise_id, exercise_sets)| {
                let exercise = exercises_by_id.get(&exercise_id)?;
                let latest = exercise_sets.iter().map(|set| set.performed_at).max()?;
                Some((*exercise, latest, exercise_sets))
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.name.cmp(&b.0.name))
                .then_with(|| a.0.id.cmp(&b.0.id))
        });

        let series: Vec<OverloadSeries> = ranked
            .into_iter()
            .take(top_n)
            .map(|(exercise, _, exercise_sets)| {
                let data_points = Self::build_data_points(&exercise_sets);
                let trend = Self::classify_trend(&data_points);
                OverloadSeries {
                    exercise_id: exercise.id,
                    exercise_name: exercise.name.clone(),
                    data_points,
                    trend,
                }
            })
            .collect();

        tracing::debug!(
            requested = top_n,
            analyzed = series.len(),
            "Computed progressive overload series"
        );
        series
    }

    /// Collapse one exercise's sets into its ten most recent workout days, oldest first
    #[must_use]
    pub fn build_data_points(sets: &[&WorkoutSet]) -> Vec<OverloadDataPoint> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&WorkoutSet>> = BTreeMap::new();
        for set in sets {
            by_day.entry(day_key(set.performed_at)).or_default().push(set);
        }

        let skip = by_day.len().saturating_sub(MAX_DATA_POINTS);
        by_day
            .into_iter()
            .skip(skip)
            .map(|(date, day_sets)| OverloadDataPoint {
                date,
                max_weight: day_sets
                    .iter()
                    .filter_map(|set| set.weight)
                    .reduce(f64::max),
                max_reps: day_sets.iter().map(|set| set.reps).max().unwrap_or(0),
                volume: day_sets.iter().map(|set| set.volume()).sum(),
            })
            .collect()
    }

    /// Classify the volume trend of chronologically ordered data points
    #[must_use]
    pub fn classify_trend(data_points: &[OverloadDataPoint]) -> Trend {
        if data_points.len() < MIN_POINTS_FOR_TREND {
            return Trend::Plateau;
        }

        let window = &data_points[data_points.len() - MIN_POINTS_FOR_TREND..];
        let (previous, recent) = window.split_at(TREND_HALF_WINDOW);
        let previous_avg = average_volume(previous);
        let recent_avg = average_volume(recent);

        if previous_avg <= 0.0 {
            return if recent_avg > 0.0 {
                Trend::Improving
            } else {
                Trend::Plateau
            };
        }

        let change_percent = (recent_avg - previous_avg) / previous_avg * 100.0;
        if change_percent > IMPROVING_THRESHOLD_PERCENT {
            Trend::Improving
        } else if change_percent < DECLINING_THRESHOLD_PERCENT {
            Trend::Declining
        } else {
            Trend::Plateau
        }
    }
}

fn average_volume(points: &[OverloadDataPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|point| point.volume).sum::<f64>() / points.len() as f64
}
