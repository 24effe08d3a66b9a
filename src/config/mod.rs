// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven configuration with validation and startup summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

//! Configuration management
//!
//! Configuration is environment-only: no config files, every knob is an
//! environment variable with a sensible default.

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
