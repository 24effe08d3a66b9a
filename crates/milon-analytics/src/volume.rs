// ABOUTME: Weekly training-volume aggregation over a plan's days
// ABOUTME: Sums weight x reps across every completed logged set per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Weekly volume aggregation
//!
//! Produces exactly one point per plan day, in plan order, whether or not
//! the day appears in the log. The log — not the plan's exercise list — is
//! the source of truth for what was performed: every exercise logged under
//! a day contributes, including ones the plan never prescribed.

use crate::numeric::{parse_reps_or_zero, parse_weight_or_zero};
use milon_core::models::{DayLog, ProgressLog, TrainingPlan};
use serde::{Deserialize, Serialize};

/// Number of characters kept when abbreviating a day label for charts
const DAY_ABBREV_CHARS: usize = 3;

/// One bar of the weekly volume chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyVolumePoint {
    /// Abbreviated day label ("Lun", "Mié")
    pub day: String,
    /// Total volume for the day, Σ weight x reps over completed sets
    pub volume: f64,
}

/// Compute per-day training volume for every day of a plan
///
/// Output length and order always match `plan.weekly_plan`; a day absent
/// from the log gets volume 0. Unparseable weight or rep strings
/// contribute 0, so the result is always finite.
#[must_use]
pub fn weekly_volume(plan: &TrainingPlan, progress: &ProgressLog) -> Vec<WeeklyVolumePoint> {
    plan.weekly_plan
        .iter()
        .map(|day_plan| WeeklyVolumePoint {
            day: abbreviate_day(&day_plan.day),
            volume: progress.get(&day_plan.day).map_or(0.0, day_volume),
        })
        .collect()
}

/// Total volume of one logged day across all its exercises
fn day_volume(day_log: &DayLog) -> f64 {
    day_log
        .values()
        .flat_map(|sets| sets.values())
        .filter(|set| set.completed)
        .map(|set| parse_weight_or_zero(&set.weight) * parse_reps_or_zero(&set.reps) as f64)
        .sum()
}

/// First characters of the day label, char-boundary safe
fn abbreviate_day(day: &str) -> String {
    day.chars().take(DAY_ABBREV_CHARS).collect()
}
