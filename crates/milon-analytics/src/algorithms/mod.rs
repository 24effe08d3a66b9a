// ABOUTME: Strength-estimation algorithm selection for the analytics engine
// ABOUTME: Houses the one-rep-max formula family used by record calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Strength-estimation algorithms

/// One-rep-max estimation formulas
pub mod one_rm;

pub use one_rm::OneRmFormula;
