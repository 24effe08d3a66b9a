// ABOUTME: Main library entry point for the Milon progress analytics service
// ABOUTME: Wires the analytics engine to an HTTP surface with config and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

#![deny(unsafe_code)]

//! # Milon Server
//!
//! HTTP service exposing the Milon progress analytics engine: weekly
//! training volume, estimated one-rep-max personal records, and
//! per-exercise progression history, computed from per-set training logs.
//!
//! The engine itself lives in the `milon-analytics` crate and is pure —
//! this crate adds the ambient layers: environment configuration,
//! structured logging, and the Axum routes that assemble request inputs
//! (weekly snapshot merging, plan synthesis) before calling it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use milon_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Milon analytics server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management from environment variables
pub mod config;

/// Logging configuration and structured logging setup
pub mod logging;

/// HTTP route handlers for the analytics API
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Re-export of the analytics engine
pub use milon_analytics as analytics;

/// Re-exports of foundation types
pub use milon_core::{constants, errors, models};
