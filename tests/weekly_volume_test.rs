// ABOUTME: Integration tests for weekly training-volume aggregation
// ABOUTME: Covers plan-order completeness, completed-set arithmetic, and parse safety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use milon_server::analytics::weekly_volume;
use milon_server::models::{
    DayLog, DayPlan, ExercisePrescription, ExerciseSets, ProgressLog, SetEntry, TrainingPlan,
};

fn prescription(name: &str) -> ExercisePrescription {
    ExercisePrescription {
        name: name.to_owned(),
        series: "4".to_owned(),
        reps: "8-10".to_owned(),
        rest: "90 s".to_owned(),
    }
}

fn plan(days: &[(&str, &[&str])]) -> TrainingPlan {
    TrainingPlan {
        weekly_plan: days
            .iter()
            .map(|(day, exercises)| DayPlan {
                day: (*day).to_owned(),
                focus: String::new(),
                exercises: exercises.iter().map(|name| prescription(name)).collect(),
            })
            .collect(),
    }
}

fn log_day(progress: &mut ProgressLog, day: &str, exercise: &str, sets: Vec<SetEntry>) {
    let day_log = progress.entry(day.to_owned()).or_insert_with(DayLog::new);
    let entries = day_log
        .entry(exercise.to_owned())
        .or_insert_with(ExerciseSets::new);
    for set in sets {
        let index = entries.len().to_string();
        entries.insert(index, set);
    }
}

#[test]
fn test_empty_progress_yields_zeroes_in_plan_order() {
    let plan = plan(&[
        ("Lunes", &["Press de Banca"]),
        ("Miércoles", &["Sentadilla"]),
        ("Viernes", &["Peso Muerto"]),
    ]);

    let points = weekly_volume(&plan, &ProgressLog::new());

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].day, "Lun");
    assert_eq!(points[1].day, "Mié");
    assert_eq!(points[2].day, "Vie");
    assert!(points.iter().all(|p| p.volume.abs() < f64::EPSILON));
}

#[test]
fn test_completed_sets_sum_and_incomplete_sets_are_excluded() {
    let plan = plan(&[("Lunes", &["Press de Banca"])]);

    let mut progress = ProgressLog::new();
    log_day(
        &mut progress,
        "Lunes",
        "Press de Banca",
        vec![
            SetEntry::completed("100", "5"),
            // Huge skipped set must not move the total
            SetEntry::skipped("990", "10"),
        ],
    );

    let points = weekly_volume(&plan, &progress);
    assert_eq!(points.len(), 1);
    assert!((points[0].volume - 500.0).abs() < 1e-9);
}

#[test]
fn test_unparseable_weight_contributes_zero_not_nan() {
    let plan = plan(&[("Lunes", &["Press de Banca"])]);

    let mut progress = ProgressLog::new();
    log_day(
        &mut progress,
        "Lunes",
        "Press de Banca",
        vec![
            SetEntry::completed("abc", "5"),
            SetEntry::completed("80", "x"),
            SetEntry::completed("60", "10"),
        ],
    );

    let points = weekly_volume(&plan, &progress);
    assert!(points[0].volume.is_finite());
    assert!((points[0].volume - 600.0).abs() < 1e-9);
}

#[test]
fn test_log_is_source_of_truth_for_logged_exercises() {
    // The day's log holds an exercise the plan never prescribed; it counts
    let plan = plan(&[("Lunes", &["Press de Banca"])]);

    let mut progress = ProgressLog::new();
    log_day(
        &mut progress,
        "Lunes",
        "Remo con Barra",
        vec![SetEntry::completed("70", "10")],
    );

    let points = weekly_volume(&plan, &progress);
    assert!((points[0].volume - 700.0).abs() < 1e-9);
}

#[test]
fn test_log_days_outside_the_plan_are_ignored() {
    let plan = plan(&[("Lunes", &["Press de Banca"])]);

    let mut progress = ProgressLog::new();
    log_day(
        &mut progress,
        "Sábado",
        "Press de Banca",
        vec![SetEntry::completed("100", "10")],
    );

    let points = weekly_volume(&plan, &progress);
    assert_eq!(points.len(), 1);
    assert!(points[0].volume.abs() < f64::EPSILON);
}

#[test]
fn test_end_to_end_scenario_volume() {
    let plan = TrainingPlan {
        weekly_plan: vec![DayPlan {
            day: "Lunes".to_owned(),
            focus: "Pecho".to_owned(),
            exercises: vec![prescription("Press de Banca")],
        }],
    };

    let mut progress = ProgressLog::new();
    log_day(
        &mut progress,
        "Lunes",
        "Press de Banca",
        vec![
            SetEntry::completed("80", "8"),
            SetEntry::completed("85", "6"),
        ],
    );

    let points = weekly_volume(&plan, &progress);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].day, "Lun");
    assert!((points[0].volume - 1150.0).abs() < 1e-9);
}
