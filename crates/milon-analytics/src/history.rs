// ABOUTME: Per-exercise max-weight history reconstruction for trend charting
// ABOUTME: Weekday-name ordering with synthetic week/day labels, no real timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Exercise history extraction
//!
//! Rebuilds a chronologically-ordered series of the max weight lifted per
//! logged day for a single exercise. The log carries no timestamps, so
//! ordering is inferred from weekday-name prefixes and the emitted labels
//! bucket every 7 processed days into a synthetic week.
//!
//! Ordering quirk, preserved on purpose: a day label that doesn't start
//! with a canonical weekday name ranks −1 — *before* every matched label —
//! and ties keep insertion order (the sort is stable). Downstream charts
//! were built against this behavior; do not "fix" it here.

use crate::numeric::parse_weight;
use milon_core::models::{ExerciseSets, ProgressLog};
use serde::{Deserialize, Serialize};

/// Canonical weekday sequence used to order day labels
///
/// Day labels on the platform are Spanish; matching is a case-insensitive
/// "starts with" against these exact spellings (accents included).
const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

/// Days per synthetic week bucket in history labels
const DAYS_PER_WEEK: usize = 7;

/// One point of an exercise's progression chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    /// Synthetic position label ("Sem 1, Día 3")
    pub label: String,
    /// Max weight across the day's completed sets of the exercise
    pub max_weight: f64,
}

/// Reconstruct the max-weight series for one exercise
///
/// Considers only days whose log holds at least one completed set of the
/// exercise with a positive parsed weight; incomplete and zero-weight sets
/// are ignored entirely, not zeroed. An exercise absent from the log
/// yields an empty series.
#[must_use]
pub fn exercise_history(exercise_name: &str, progress: &ProgressLog) -> Vec<HistoryPoint> {
    let mut days: Vec<(&str, &ExerciseSets)> = progress
        .iter()
        .filter_map(|(day, day_log)| {
            day_log
                .get(exercise_name)
                .map(|sets| (day.as_str(), sets))
        })
        .filter(|(_, sets)| {
            sets.values()
                .any(|set| set.completed && parse_weight(&set.weight).is_some_and(|w| w > 0.0))
        })
        .collect();

    // Stable sort: unmatched labels (-1) first, ties in insertion order
    days.sort_by_key(|(day, _)| weekday_rank(day));

    days.iter()
        .enumerate()
        .filter_map(|(index, (_, sets))| {
            let max_weight = day_max_weight(sets);
            (max_weight > 0.0).then(|| HistoryPoint {
                label: history_label(index),
                max_weight,
            })
        })
        .collect()
}

/// Max parsed weight over completed, positive-weight sets of one day
fn day_max_weight(sets: &ExerciseSets) -> f64 {
    sets.values()
        .filter(|set| set.completed)
        .filter_map(|set| parse_weight(&set.weight))
        .filter(|weight| *weight > 0.0)
        .fold(0.0_f64, f64::max)
}

/// Position of the first canonical weekday the label starts with, or −1
fn weekday_rank(label: &str) -> i32 {
    let lower = label.to_lowercase();
    WEEKDAYS
        .iter()
        .position(|weekday| lower.starts_with(weekday))
        .map_or(-1, |position| position as i32)
}

/// Synthetic "Sem {week}, Día {day}" label for a 0-indexed position
fn history_label(index: usize) -> String {
    format!(
        "Sem {}, Día {}",
        index / DAYS_PER_WEEK + 1,
        index % DAYS_PER_WEEK + 1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_rank_matches_prefix_case_insensitively() {
        assert_eq!(weekday_rank("Lunes"), 0);
        assert_eq!(weekday_rank("MIÉRCOLES (descarga)"), 2);
        assert_eq!(weekday_rank("domingo"), 6);
        // Week-prefixed and unrecognized labels rank -1
        assert_eq!(weekday_rank("S2 Martes"), -1);
        assert_eq!(weekday_rank("Día de empuje"), -1);
    }

    #[test]
    fn test_history_label_buckets_by_seven() {
        assert_eq!(history_label(0), "Sem 1, Día 1");
        assert_eq!(history_label(6), "Sem 1, Día 7");
        assert_eq!(history_label(7), "Sem 2, Día 1");
        assert_eq!(history_label(16), "Sem 3, Día 3");
    }
}
