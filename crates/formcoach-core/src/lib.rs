// ABOUTME: Core types and constants for the formcoach exercise evaluation engine
// ABOUTME: Foundation crate with landmark model, result types, errors, thresholds, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

#![deny(unsafe_code)]

//! # Formcoach Core
//!
//! Foundation crate shared by the evaluation engine and the session layer.
//! It changes rarely, so downstream crates rebuild incrementally.
//!
//! ## Modules
//!
//! - **models**: landmarks, frames, exercise phases, and evaluation results
//! - **errors**: `EngineError` and stable `ErrorCode`s
//! - **constants**: per-exercise thresholds and scoring boundaries
//! - **config**: engine-wide settings with environment overrides

/// Engine-wide configuration and configuration errors
pub mod config;

/// Thresholds and scoring constants organized by domain
pub mod constants;

/// Unified engine error handling
pub mod errors;

/// Pose input and evaluation output models
pub mod models;

pub use config::{ConfigError, EngineConfig};
pub use errors::{EngineError, EngineResult, ErrorCode};
