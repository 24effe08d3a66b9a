// ABOUTME: Integration tests for weekly snapshot merging and plan synthesis
// ABOUTME: Verifies week-prefixed day labels, order preservation, and log-shaped plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use milon_server::analytics::{
    exercise_history, merge_weekly_snapshots, synthesize_plan, weekly_volume, WeeklySnapshot,
};
use milon_server::models::{DayLog, ExerciseSets, ProgressLog, SetEntry};

fn snapshot(week: u32, days: &[(&str, &str, &str, &str)]) -> WeeklySnapshot {
    // days: (day label, exercise, weight, reps)
    let mut progress = ProgressLog::new();
    for (day, exercise, weight, reps) in days {
        let day_log = progress
            .entry((*day).to_owned())
            .or_insert_with(DayLog::new);
        let sets = day_log
            .entry((*exercise).to_owned())
            .or_insert_with(ExerciseSets::new);
        let index = sets.len().to_string();
        sets.insert(index, SetEntry::completed(weight, reps));
    }
    WeeklySnapshot { week, progress }
}

#[test]
fn test_merge_produces_week_prefixed_keys_in_order() {
    let merged = merge_weekly_snapshots(&[
        snapshot(1, &[("Lunes", "Press de Banca", "80", "8"), ("Jueves", "Sentadilla", "100", "5")]),
        snapshot(2, &[("Lunes", "Press de Banca", "82.5", "8")]),
    ]);

    let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["S1 Lunes", "S1 Jueves", "S2 Lunes"]);
}

#[test]
fn test_merged_weeks_bucket_the_same_weekday_separately() {
    let merged = merge_weekly_snapshots(&[
        snapshot(1, &[("Martes", "Press Militar", "50", "8")]),
        snapshot(2, &[("Martes", "Press Militar", "55", "8")]),
    ]);

    assert_eq!(merged.len(), 2);
    let points = exercise_history("Press Militar", &merged);
    // Prefixed labels rank unmatched, so insertion (week) order holds
    assert_eq!(points.len(), 2);
    assert!((points[0].max_weight - 50.0).abs() < 1e-9);
    assert!((points[1].max_weight - 55.0).abs() < 1e-9);
    assert_eq!(points[0].label, "Sem 1, Día 1");
    assert_eq!(points[1].label, "Sem 1, Día 2");
}

#[test]
fn test_synthesized_plan_mirrors_log_order() {
    let merged = merge_weekly_snapshots(&[snapshot(
        1,
        &[
            ("Lunes", "Press de Banca", "80", "8"),
            ("Lunes", "Remo con Barra", "70", "10"),
            ("Jueves", "Sentadilla", "100", "5"),
        ],
    )]);

    let plan = synthesize_plan(&merged);
    assert_eq!(plan.weekly_plan.len(), 2);
    assert_eq!(plan.weekly_plan[0].day, "S1 Lunes");
    assert_eq!(plan.weekly_plan[1].day, "S1 Jueves");

    let first_day: Vec<&str> = plan.weekly_plan[0]
        .exercises
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(first_day, vec!["Press de Banca", "Remo con Barra"]);
    assert!(plan.weekly_plan[0].focus.is_empty());
}

#[test]
fn test_synthesized_plan_feeds_volume_directly() {
    let merged = merge_weekly_snapshots(&[snapshot(
        1,
        &[
            ("Lunes", "Press de Banca", "80", "8"),
            ("Jueves", "Sentadilla", "100", "5"),
        ],
    )]);

    let plan = synthesize_plan(&merged);
    let points = weekly_volume(&plan, &merged);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].day, "S1 ");
    assert!((points[0].volume - 640.0).abs() < 1e-9);
    assert!((points[1].volume - 500.0).abs() < 1e-9);
}

#[test]
fn test_empty_snapshot_list_merges_to_empty_log() {
    let merged = merge_weekly_snapshots(&[]);
    assert!(merged.is_empty());
    assert!(synthesize_plan(&merged).weekly_plan.is_empty());
}
