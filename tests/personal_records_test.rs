// ABOUTME: Integration tests for personal record detection and PR timelines
// ABOUTME: First entries, weight > volume > reps priority, strict improvement, and replay order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bodyweight, days_ago, exercise, lifted};
use ironlog::intelligence::{PersonalRecordDetector, RecordType, SetPerformance};

fn perf(reps: u32, weight: Option<f64>, days: i64) -> SetPerformance {
    SetPerformance {
        reps,
        weight,
        performed_at: days_ago(days),
    }
}

#[test]
fn test_first_entry_is_weight_record_when_loaded() {
    let record = PersonalRecordDetector::check_for_pr(&perf(5, Some(135.0), 0), &[]).unwrap();
    assert_eq!(record.record_type, RecordType::Weight);
    assert!((record.current_value - 135.0).abs() < f64::EPSILON);
    assert!(record.previous_value.abs() < f64::EPSILON);
}

#[test]
fn test_first_entry_is_reps_record_for_bodyweight() {
    let record = PersonalRecordDetector::check_for_pr(&perf(12, None, 0), &[]).unwrap();
    assert_eq!(record.record_type, RecordType::Reps);
    assert!((record.current_value - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_heavier_weight_wins_over_volume_and_reps() {
    let history = [perf(10, Some(100.0), 3), perf(12, Some(90.0), 2)];
    // Less volume and fewer reps than history, but heavier.
    let record = PersonalRecordDetector::check_for_pr(&perf(2, Some(105.0), 0), &history).unwrap();
    assert_eq!(record.record_type, RecordType::Weight);
    assert!((record.previous_value - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_volume_record_at_equal_weight() {
    let history = [perf(5, Some(100.0), 2)];
    let record = PersonalRecordDetector::check_for_pr(&perf(6, Some(100.0), 0), &history).unwrap();
    assert_eq!(record.record_type, RecordType::Volume);
    assert!((record.current_value - 600.0).abs() < f64::EPSILON);
    assert!((record.previous_value - 500.0).abs() < f64::EPSILON);
}

#[test]
fn test_reps_record_for_bodyweight_history() {
    let history = [perf(10, None, 4), perf(12, None, 2)];
    let record = PersonalRecordDetector::check_for_pr(&perf(13, None, 0), &history).unwrap();
    assert_eq!(record.record_type, RecordType::Reps);
    assert!((record.current_value - 13.0).abs() < f64::EPSILON);
    assert!((record.previous_value - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_reps_record_when_lighter_set_has_more_reps_but_less_volume() {
    let history = [perf(5, Some(200.0), 2)];
    let record = PersonalRecordDetector::check_for_pr(&perf(8, Some(50.0), 0), &history).unwrap();
    assert_eq!(record.record_type, RecordType::Reps);
}

#[test]
fn test_equal_values_are_not_records() {
    let history = [perf(5, Some(100.0), 2)];
    assert!(PersonalRecordDetector::check_for_pr(&perf(5, Some(100.0), 0), &history).is_none());
}

#[test]
fn test_history_order_does_not_matter() {
    let forward = [perf(5, Some(100.0), 5), perf(8, Some(80.0), 3)];
    let reversed = [forward[1], forward[0]];
    let current = perf(9, Some(80.0), 0);

    let a = PersonalRecordDetector::check_for_pr(&current, &forward);
    let b = PersonalRecordDetector::check_for_pr(&current, &reversed);
    assert_eq!(a, b);
    assert_eq!(a.unwrap().record_type, RecordType::Volume);
}

#[test]
fn test_timeline_replays_each_exercise_independently() {
    let bench = exercise("Bench Press");
    let pullup = exercise("Pull Up");

    let sets = vec![
        lifted(&bench, 5, 185.0, days_ago(3)),
        bodyweight(&pullup, 8, days_ago(10)),
        lifted(&bench, 5, 175.0, days_ago(6)),
        lifted(&bench, 5, 175.0, days_ago(5)),
        bodyweight(&pullup, 10, days_ago(2)),
        bodyweight(&pullup, 9, days_ago(1)),
    ];

    let events = PersonalRecordDetector::timeline(&sets);
    let summary: Vec<_> = events
        .iter()
        .map(|e| (e.exercise_id, e.record.record_type, e.performed_at))
        .collect();

    assert_eq!(
        summary,
        vec![
            (pullup.id, RecordType::Reps, days_ago(10)),
            (bench.id, RecordType::Weight, days_ago(6)),
            (bench.id, RecordType::Weight, days_ago(3)),
            (pullup.id, RecordType::Reps, days_ago(2)),
        ]
    );
}

#[test]
fn test_timeline_matches_check_for_pr_against_earlier_sets() {
    let squat = exercise("Squat");
    let sets = vec![
        lifted(&squat, 5, 225.0, days_ago(9)),
        lifted(&squat, 8, 205.0, days_ago(7)),
        lifted(&squat, 3, 245.0, days_ago(5)),
        lifted(&squat, 3, 245.0, days_ago(3)),
    ];

    let events = PersonalRecordDetector::timeline(&sets);
    for (index, set) in sets.iter().enumerate() {
        let earlier: Vec<SetPerformance> = sets[..index].iter().map(SetPerformance::from).collect();
        let expected = PersonalRecordDetector::check_for_pr(&SetPerformance::from(set), &earlier);
        let actual = events.iter().find(|e| e.set_id == set.id).map(|e| e.record);
        assert_eq!(actual, expected, "set {index}");
    }
}
