// ABOUTME: One-rep-max estimation formulas for strength tracking
// ABOUTME: Implements Epley, Brzycki, and Lander models with shared degenerate-case handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

use serde::{Deserialize, Serialize};

/// One-rep-max estimation formula selection
///
/// Different models for estimating the theoretical maximum weight liftable
/// for a single repetition from a submaximal set:
///
/// - `Epley`: linear rep discount, the platform default
/// - `Brzycki`: hyperbolic model, close to Epley below ~10 reps
/// - `Lander`: linear-denominator model
///
/// All variants share the degenerate cases: one rep returns the weight
/// itself (an actual 1RM, no estimation), and zero reps returns 0 so a
/// rep-less entry can never become a record.
///
/// Estimation reliability degrades past roughly 15 reps for every model;
/// callers feeding high-rep sets should treat results as indicative only.
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage Chart". *Boyd Epley Workout*. Lincoln, NE.
/// - Brzycki, M. (1993). "Strength testing — predicting a one-rep max from
///   reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Lander, J. (1985). "Maximums based on reps." *NSCA Journal*, 6(6), 60-61.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OneRmFormula {
    /// Epley formula
    ///
    /// `1RM = weight x (1 + reps/30)`
    #[default]
    Epley,

    /// Brzycki formula
    ///
    /// `1RM = weight x 36 / (37 - reps)`
    Brzycki,

    /// Lander formula
    ///
    /// `1RM = weight x 100 / (101.3 - 2.67 x reps)`
    Lander,
}

impl OneRmFormula {
    /// Estimate the one-rep max for a performed set
    ///
    /// Degenerate cases apply to every variant: `reps == 1` returns
    /// `weight` exactly and `reps == 0` returns 0.
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: i64) -> f64 {
        match reps {
            1 => weight,
            0 => 0.0,
            r => {
                let r = r as f64;
                match self {
                    Self::Epley => weight * (1.0 + r / 30.0),
                    Self::Brzycki => weight * 36.0 / (37.0 - r),
                    Self::Lander => weight * 100.0 / (101.3 - 2.67 * r),
                }
            }
        }
    }

    /// Get formula name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lander => "lander",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "1RM = weight x (1 + reps/30)",
            Self::Brzycki => "1RM = weight x 36 / (37 - reps)",
            Self::Lander => "1RM = weight x 100 / (101.3 - 2.67 x reps)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_single_rep_is_the_weight_itself() {
        assert!(approx_eq(OneRmFormula::Epley.estimate(120.0, 1), 120.0, 1e-9));
        assert!(approx_eq(OneRmFormula::Brzycki.estimate(120.0, 1), 120.0, 1e-9));
        assert!(approx_eq(OneRmFormula::Lander.estimate(120.0, 1), 120.0, 1e-9));
    }

    #[test]
    fn test_zero_reps_estimates_zero() {
        assert!(approx_eq(OneRmFormula::Epley.estimate(100.0, 0), 0.0, 1e-9));
        assert!(approx_eq(OneRmFormula::Brzycki.estimate(100.0, 0), 0.0, 1e-9));
    }

    #[test]
    fn test_epley_ten_reps() {
        // 100 x (1 + 10/30) = 133.33
        assert!(approx_eq(OneRmFormula::Epley.estimate(100.0, 10), 133.33, 0.01));
    }

    #[test]
    fn test_brzycki_five_reps() {
        // 100 x 36 / 32 = 112.5
        assert!(approx_eq(OneRmFormula::Brzycki.estimate(100.0, 5), 112.5, 0.01));
    }

    #[test]
    fn test_lander_ten_reps() {
        // 100 x 100 / (101.3 - 26.7) = 134.05
        assert!(approx_eq(OneRmFormula::Lander.estimate(100.0, 10), 134.05, 0.01));
    }

    #[test]
    fn test_default_is_epley() {
        assert_eq!(OneRmFormula::default(), OneRmFormula::Epley);
        assert_eq!(OneRmFormula::default().name(), "epley");
    }
}
