// ABOUTME: Analytics route handlers exposing volume, record, and history computations
// ABOUTME: Assembles request inputs (snapshot merging, plan synthesis) before calling the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Analytics computation routes
//!
//! Each endpoint is a thin assembly layer over the pure engine: the
//! request supplies either a ready progress log or a list of persisted
//! weekly snapshots to merge, and optionally a plan. A missing plan is
//! synthesized from the log's own keys, so a user with progress data but
//! no active plan still gets charts.

use axum::{routing::post, Json, Router};
use milon_analytics::{
    exercise_history, merge_weekly_snapshots, synthesize_plan, weekly_volume, HistoryPoint,
    PersonalRecordMap, RecordCalculator, WeeklySnapshot, WeeklyVolumePoint,
};
use milon_core::errors::AppError;
use milon_core::models::{ProgressLog, TrainingPlan};
use serde::Deserialize;
use tracing::debug;

/// Shared request body for analytics operations
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AnalyticsRequest {
    /// Active training plan, if the caller has one
    #[serde(default)]
    plan: Option<TrainingPlan>,
    /// Pre-assembled progress log
    #[serde(default)]
    progress: Option<ProgressLog>,
    /// Persisted weekly snapshots to merge instead of `progress`
    #[serde(default)]
    snapshots: Option<Vec<WeeklySnapshot>>,
}

impl AnalyticsRequest {
    /// Effective progress log: merged snapshots win over a plain log
    fn effective_progress(&self) -> ProgressLog {
        match (&self.snapshots, &self.progress) {
            (Some(snapshots), _) => merge_weekly_snapshots(snapshots),
            (None, Some(progress)) => progress.clone(),
            (None, None) => ProgressLog::new(),
        }
    }

    /// Effective plan: the caller's, or one synthesized from the log
    fn effective_plan(&self, progress: &ProgressLog) -> TrainingPlan {
        self.plan
            .clone()
            .unwrap_or_else(|| synthesize_plan(progress))
    }
}

/// Request body for exercise history
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRequest {
    /// Exercise to chart
    exercise_name: String,
    #[serde(flatten)]
    inputs: AnalyticsRequest,
}

/// Analytics routes implementation
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/analytics/weekly-volume", post(Self::handle_weekly_volume))
            .route(
                "/analytics/personal-records",
                post(Self::handle_personal_records),
            )
            .route(
                "/analytics/exercise-history",
                post(Self::handle_exercise_history),
            )
    }

    /// Handle weekly volume computation
    async fn handle_weekly_volume(
        Json(request): Json<AnalyticsRequest>,
    ) -> Json<Vec<WeeklyVolumePoint>> {
        let progress = request.effective_progress();
        let plan = request.effective_plan(&progress);
        debug!(
            plan_days = plan.weekly_plan.len(),
            log_days = progress.len(),
            "computing weekly volume"
        );
        Json(weekly_volume(&plan, &progress))
    }

    /// Handle personal record computation
    async fn handle_personal_records(
        Json(request): Json<AnalyticsRequest>,
    ) -> Json<PersonalRecordMap> {
        let progress = request.effective_progress();
        let plan = request.effective_plan(&progress);
        let records = RecordCalculator::new().personal_records(&plan, &progress);
        debug!(records = records.len(), "computed personal records");
        Json(records)
    }

    /// Handle exercise history extraction
    async fn handle_exercise_history(
        Json(request): Json<HistoryRequest>,
    ) -> Result<Json<Vec<HistoryPoint>>, AppError> {
        if request.exercise_name.trim().is_empty() {
            return Err(AppError::missing_field("exerciseName"));
        }

        let progress = request.inputs.effective_progress();
        let points = exercise_history(&request.exercise_name, &progress);
        debug!(
            exercise = %request.exercise_name,
            points = points.len(),
            "extracted exercise history"
        );
        Ok(Json(points))
    }
}
