// ABOUTME: Training plan models describing the prescribed weekly structure
// ABOUTME: Day labels, focus text, and per-exercise set/rep/rest targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Training plan structures
//!
//! A [`TrainingPlan`] is an ordered sequence of [`DayPlan`] entries. Day
//! labels are free strings (weekday names or ordinals, not calendar dates)
//! and the targets on an [`ExercisePrescription`] are informational text
//! only; the analytics engine never does arithmetic on them.

use serde::{Deserialize, Serialize};

/// A single exercise prescription within a training day
///
/// `name` is the exercise identity: stored case-sensitively, but matched
/// case-insensitively by the record-tracking keyword heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePrescription {
    /// Exercise name (unique identifying string)
    pub name: String,
    /// Target number of sets, free text ("4", "3-4")
    #[serde(default)]
    pub series: String,
    /// Target repetitions, free text ("8-10", "AMRAP")
    #[serde(default)]
    pub reps: String,
    /// Prescribed rest between sets, free text ("90 s")
    #[serde(default)]
    pub rest: String,
}

/// One training day inside a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Label identifying the training day ("Lunes", "Día 1")
    pub day: String,
    /// Free-text training emphasis ("Pecho y tríceps")
    #[serde(default)]
    pub focus: String,
    /// Ordered exercise prescriptions for the day
    #[serde(default)]
    pub exercises: Vec<ExercisePrescription>,
}

/// The prescribed structure of a training program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlan {
    /// Ordered training days for one week
    #[serde(default)]
    pub weekly_plan: Vec<DayPlan>,
}

impl TrainingPlan {
    /// First prescription of the first day, if any
    ///
    /// Used as the record-tracking fallback candidate. An empty first day
    /// yields `None` even when later days hold exercises.
    #[must_use]
    pub fn first_prescription(&self) -> Option<&ExercisePrescription> {
        self.weekly_plan.first().and_then(|day| day.exercises.first())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_wire_format_is_camel_case() {
        let plan = TrainingPlan {
            weekly_plan: vec![DayPlan {
                day: "Lunes".to_owned(),
                focus: "Pecho".to_owned(),
                exercises: vec![ExercisePrescription {
                    name: "Press de Banca".to_owned(),
                    series: "4".to_owned(),
                    reps: "8".to_owned(),
                    rest: "120 s".to_owned(),
                }],
            }],
        };

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"weeklyPlan\""));

        let back: TrainingPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_first_prescription_requires_nonempty_first_day() {
        let plan = TrainingPlan {
            weekly_plan: vec![
                DayPlan {
                    day: "Lunes".to_owned(),
                    ..DayPlan::default()
                },
                DayPlan {
                    day: "Martes".to_owned(),
                    exercises: vec![ExercisePrescription {
                        name: "Sentadilla".to_owned(),
                        ..ExercisePrescription::default()
                    }],
                    ..DayPlan::default()
                },
            ],
        };

        assert!(plan.first_prescription().is_none());
    }
}
