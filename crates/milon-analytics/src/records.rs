// ABOUTME: Personal record calculation across the full progress history
// ABOUTME: Selects tracked lifts by keyword heuristic and keeps the best Epley-estimated set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Personal record calculation
//!
//! Scans the plan for lifts worth tracking, then searches the entire log
//! for the single best completed set of each, ranked by estimated one-rep
//! max. The tracked-lift heuristic is injectable; the search itself is
//! fixed.

use crate::algorithms::OneRmFormula;
use crate::numeric::{parse_reps, parse_weight};
use indexmap::IndexMap;
use milon_core::models::{ProgressLog, TrainingPlan};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Default compound-lift keywords, matched case-insensitively by containment
///
/// A deliberate heuristic surfacing the few lifts most meaningful for
/// strength tracking, not an exhaustive lift taxonomy.
pub const KEY_LIFT_KEYWORDS: [&str; 4] = ["press", "sentadilla", "peso muerto", "dominadas"];

/// Records keyed by exercise name, in candidate (plan scan) order
pub type PersonalRecordMap = IndexMap<String, PersonalRecord>;

/// The single best set found for an exercise across the entire log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Exercise the record belongs to
    pub exercise_name: String,
    /// Best estimated one-rep max
    pub one_rep_max: f64,
    /// Weight of the set that produced the estimate
    pub weight: f64,
    /// Reps of the set that produced the estimate
    pub reps: i64,
}

/// Predicate deciding which plan exercises are tracked for records
///
/// Holds a lowercase keyword list; an exercise is tracked when its name
/// contains any keyword, case-insensitively. Replace the keyword set via
/// [`TrackedLiftMatcher::new`] without touching the record algorithm.
#[derive(Debug, Clone)]
pub struct TrackedLiftMatcher {
    keywords: Vec<String>,
}

impl Default for TrackedLiftMatcher {
    fn default() -> Self {
        Self::new(KEY_LIFT_KEYWORDS)
    }
}

impl TrackedLiftMatcher {
    /// Build a matcher from a custom keyword set
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    /// Whether an exercise name is tracked for record calculation
    #[must_use]
    pub fn is_tracked(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }
}

/// Personal record calculator
///
/// Stateless apart from its matcher; safe to share and reuse across
/// requests.
#[derive(Debug, Clone, Default)]
pub struct RecordCalculator {
    matcher: TrackedLiftMatcher,
}

impl RecordCalculator {
    /// Create a calculator with the default tracked-lift keywords
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked-lift matcher
    #[must_use]
    pub fn with_matcher(mut self, matcher: TrackedLiftMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Compute the best record per tracked exercise
    ///
    /// Candidates come from the plan; the search covers the *entire* log,
    /// including days the plan doesn't know about. An exercise appears in
    /// the output only when its best estimate is strictly positive. Ties
    /// keep the earliest entry in log iteration order.
    #[must_use]
    pub fn personal_records(
        &self,
        plan: &TrainingPlan,
        progress: &ProgressLog,
    ) -> PersonalRecordMap {
        let candidates = self.candidates(plan);

        let mut records = PersonalRecordMap::new();
        for name in candidates {
            if let Some(record) = Self::best_set(&name, progress) {
                records.insert(name, record);
            }
        }
        records
    }

    /// Tracked exercise names in plan order, deduplicated
    fn candidates(&self, plan: &TrainingPlan) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for day in &plan.weekly_plan {
            for exercise in &day.exercises {
                if self.matcher.is_tracked(&exercise.name) && seen.insert(exercise.name.clone()) {
                    candidates.push(exercise.name.clone());
                }
            }
        }

        // No keyword hit: fall back to the plan's very first exercise so
        // the result is never trivially empty when exercise data exists.
        if candidates.is_empty() {
            if let Some(first) = plan.first_prescription() {
                debug!(exercise = %first.name, "no tracked lifts in plan, falling back to first exercise");
                candidates.push(first.name.clone());
            }
        }

        candidates
    }

    /// Best completed set of one exercise across the whole log
    ///
    /// Strict `>` against a zero baseline: the earliest maximal set wins
    /// ties, a zero-valued estimate is never emitted, and sets with
    /// unparseable weight or reps can never beat the baseline.
    fn best_set(exercise_name: &str, progress: &ProgressLog) -> Option<PersonalRecord> {
        let mut best: Option<PersonalRecord> = None;
        let mut best_one_rm = 0.0;

        for day_log in progress.values() {
            let Some(sets) = day_log.get(exercise_name) else {
                continue;
            };
            for set in sets.values() {
                if !set.completed {
                    continue;
                }
                let (Some(weight), Some(reps)) =
                    (parse_weight(&set.weight), parse_reps(&set.reps))
                else {
                    continue;
                };
                let one_rm = OneRmFormula::Epley.estimate(weight, reps);
                if one_rm > best_one_rm {
                    best_one_rm = one_rm;
                    best = Some(PersonalRecord {
                        exercise_name: exercise_name.to_owned(),
                        one_rep_max: one_rm,
                        weight,
                        reps,
                    });
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords_match_case_insensitively() {
        let matcher = TrackedLiftMatcher::default();
        assert!(matcher.is_tracked("Press de Banca"));
        assert!(matcher.is_tracked("SENTADILLA trasera"));
        assert!(matcher.is_tracked("Peso Muerto rumano"));
        assert!(matcher.is_tracked("dominadas lastradas"));
        assert!(!matcher.is_tracked("Curl de Bíceps"));
    }

    #[test]
    fn test_custom_keywords_replace_defaults() {
        let matcher = TrackedLiftMatcher::new(["curl"]);
        assert!(matcher.is_tracked("Curl de Bíceps"));
        assert!(!matcher.is_tracked("Press de Banca"));
    }
}
