// ABOUTME: Progress log models recording what was actually performed per set
// ABOUTME: Insertion-ordered maps keyed by day label, exercise name, and set index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Progress log structures
//!
//! The log is a three-level mapping: day label → exercise name → set index
//! → [`SetEntry`]. All levels use [`IndexMap`] so iteration follows the
//! order entries appear in the source document; the engine's first-wins
//! tie-break and history ordering depend on that.
//!
//! A log may reference day labels or exercise names absent from the current
//! plan (entries carried over from a prior or template plan). The engine
//! tolerates both.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One logged set
///
/// `weight` and `reps` are numeric strings as entered by the client and are
/// parsed defensively by the engine. Only entries with `completed == true`
/// ever contribute to a derived metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// Weight lifted, decimal string ("82.5")
    #[serde(default)]
    pub weight: String,
    /// Repetitions performed, integer string ("8")
    #[serde(default)]
    pub reps: String,
    /// Whether the set was actually performed
    #[serde(default)]
    pub completed: bool,
}

impl SetEntry {
    /// Convenience constructor for a completed set
    #[must_use]
    pub fn completed(weight: &str, reps: &str) -> Self {
        Self {
            weight: weight.to_owned(),
            reps: reps.to_owned(),
            completed: true,
        }
    }

    /// Convenience constructor for a skipped set
    #[must_use]
    pub fn skipped(weight: &str, reps: &str) -> Self {
        Self {
            weight: weight.to_owned(),
            reps: reps.to_owned(),
            completed: false,
        }
    }
}

/// Sets of one exercise, keyed by ordinal set index ("0", "1", …)
pub type ExerciseSets = IndexMap<String, SetEntry>;

/// One day's logged exercises, keyed by exercise name
pub type DayLog = IndexMap<String, ExerciseSets>;

/// Full progress log, keyed by day label
pub type ProgressLog = IndexMap<String, DayLog>;
