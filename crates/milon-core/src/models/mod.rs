// ABOUTME: Domain models for training plans and progress logs
// ABOUTME: Transient caller-owned structures passed by value into the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Core data models
//!
//! Every entity here is transient: constructed by the caller, passed as a
//! read-only input into the analytics engine, never mutated or retained by
//! it.

/// Prescribed training structure (what should be done)
pub mod plan;

/// Logged training data (what was actually performed)
pub mod progress;

pub use plan::{DayPlan, ExercisePrescription, TrainingPlan};
pub use progress::{DayLog, ExerciseSets, ProgressLog, SetEntry};
