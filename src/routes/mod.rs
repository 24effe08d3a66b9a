// ABOUTME: Route module organization for the Milon analytics HTTP surface
// ABOUTME: Assembles analytics and health routers with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! HTTP routes
//!
//! The API surface is deliberately small: three analytics operations plus
//! health endpoints. Charts are rendered by a browser frontend on another
//! origin, hence the permissive CORS layer.

/// Analytics computation endpoints
pub mod analytics;

/// Health and readiness endpoints
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full application router
#[must_use]
pub fn router() -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(analytics::AnalyticsRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
