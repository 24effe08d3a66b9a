// ABOUTME: Progress analytics engine computing volume, records, and history series
// ABOUTME: Pure, total functions over caller-owned plan and progress structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

#![deny(unsafe_code)]

//! # Milon Analytics
//!
//! The progress analytics engine for the Milon platform: pure functions
//! that transform a raw log of per-set training entries into chart- and
//! card-ready derived views.
//!
//! ## Components
//!
//! - [`volume`] — per-day total training volume for a week
//! - [`records`] — best estimated one-rep-max per tracked exercise
//! - [`history`] — chronological max-weight series for one exercise
//! - [`algorithms`] — strength-estimation formulas (Epley and friends)
//! - [`snapshots`] — presentation-layer input assembly (weekly snapshot
//!   merging, plan synthesis)
//!
//! Every function here is synchronous, side-effect-free, and total:
//! malformed numeric strings, absent days, and empty plans degrade to
//! zeros and empty series, never to errors. Inputs are borrowed
//! immutably and never retained.

/// Strength-estimation formulas
pub mod algorithms;

/// Per-exercise max-weight history for trend charting
pub mod history;

/// Defensive numeric-string parsing shared by all components
pub mod numeric;

/// Personal record calculation with tracked-lift selection
pub mod records;

/// Progress-log assembly helpers for the presentation layer
pub mod snapshots;

/// Weekly training-volume aggregation
pub mod volume;

pub use algorithms::OneRmFormula;
pub use history::{exercise_history, HistoryPoint};
pub use records::{PersonalRecord, PersonalRecordMap, RecordCalculator, TrackedLiftMatcher};
pub use snapshots::{merge_weekly_snapshots, synthesize_plan, WeeklySnapshot};
pub use volume::{weekly_volume, WeeklyVolumePoint};
