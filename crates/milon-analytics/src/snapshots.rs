// ABOUTME: Presentation-layer assembly of analytics inputs from persisted weekly snapshots
// ABOUTME: Merges per-week logs under week-prefixed day labels and synthesizes plans from logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Progress-log assembly helpers
//!
//! The platform persists one progress snapshot per training week. Before
//! the engine runs, those snapshots are merged into a single log whose day
//! labels carry a week prefix, so week 2's "Martes" buckets separately
//! from week 1's. The core functions stay week-agnostic: whatever keys
//! they receive are simply distinct days.
//!
//! When no formal plan exists (a user who only ever logged), a plan is
//! synthesized by grouping the log's own day and exercise keys.

use milon_core::models::{DayPlan, ExercisePrescription, ProgressLog, TrainingPlan};
use serde::{Deserialize, Serialize};

/// One persisted training week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySnapshot {
    /// Training week index (1-based)
    pub week: u32,
    /// The week's progress log
    #[serde(default)]
    pub progress: ProgressLog,
}

/// Merge weekly snapshots into a single log with week-prefixed day labels
///
/// Snapshot order is preserved; within a snapshot, day order is preserved.
/// A day label becomes `"S{week} {day}"`, which deliberately defeats the
/// weekday-name ordering in history extraction — merged logs rely on
/// insertion order instead.
#[must_use]
pub fn merge_weekly_snapshots(snapshots: &[WeeklySnapshot]) -> ProgressLog {
    let mut merged = ProgressLog::new();
    for snapshot in snapshots {
        for (day, day_log) in &snapshot.progress {
            merged.insert(format!("S{} {day}", snapshot.week), day_log.clone());
        }
    }
    merged
}

/// Synthesize a plan from a log's own day and exercise keys
///
/// One [`DayPlan`] per logged day in log order, one prescription per
/// logged exercise in log order, with empty focus and targets. Gives
/// plan-shaped inputs to users who have progress data but no active plan.
#[must_use]
pub fn synthesize_plan(progress: &ProgressLog) -> TrainingPlan {
    TrainingPlan {
        weekly_plan: progress
            .iter()
            .map(|(day, day_log)| DayPlan {
                day: day.clone(),
                focus: String::new(),
                exercises: day_log
                    .keys()
                    .map(|name| ExercisePrescription {
                        name: name.clone(),
                        ..ExercisePrescription::default()
                    })
                    .collect(),
            })
            .collect(),
    }
}
