// ABOUTME: Server binary for the Milon progress analytics API
// ABOUTME: Loads environment configuration, initializes logging, and serves the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! # Milon Analytics Server Binary
//!
//! Starts the HTTP service exposing weekly-volume, personal-record, and
//! exercise-history analytics over per-set training logs.

use anyhow::Result;
use clap::Parser;
use milon_server::{config::environment::ServerConfig, logging, server::AnalyticsServer};
use tracing::info;

#[derive(Parser)]
#[command(name = "milon-server")]
#[command(about = "Milon - Progress analytics API for strength training logs")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment, then apply CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting Milon analytics server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    AnalyticsServer::new(config).run().await
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Analytics:");
    info!("   Weekly Volume:     POST http://{host}:{port}/analytics/weekly-volume");
    info!("   Personal Records:  POST http://{host}:{port}/analytics/personal-records");
    info!("   Exercise History:  POST http://{host}:{port}/analytics/exercise-history");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
