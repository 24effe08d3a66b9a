// ABOUTME: Core types and constants for the Milon progress analytics service
// ABOUTME: Foundation crate with error handling, domain models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Milon Fitness

#![deny(unsafe_code)]

//! # Milon Core
//!
//! Foundation crate providing shared types and constants for the Milon
//! progress analytics service. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain models (training plans, progress logs)
//! - **constants**: Application-wide constants

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and default configuration values
pub mod constants;

/// Core data models (`TrainingPlan`, `ProgressLog`, `SetEntry`)
pub mod models;
