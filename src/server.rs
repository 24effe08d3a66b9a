// ABOUTME: Server assembly and lifecycle for the analytics HTTP service
// ABOUTME: Binds the listener, serves the router, and handles graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Server lifecycle
//!
//! The service is stateless: handlers share nothing but the immutable
//! configuration, so startup is bind-and-serve with a ctrl-c shutdown
//! hook.

use crate::config::environment::ServerConfig;
use crate::routes;
use anyhow::{Context, Result};
use tracing::info;

/// The analytics HTTP server
pub struct AnalyticsServer {
    config: ServerConfig,
}

impl AnalyticsServer {
    /// Create a server from loaded configuration
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Run the server until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    /// while running.
    pub async fn run(&self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("Analytics API listening on http://{addr}");

        axum::serve(listener, routes::router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")?;

        info!("Server shut down cleanly");
        Ok(())
    }
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
    }
}
