// ABOUTME: Configuration module for the formcoach-engine crate
// ABOUTME: Re-exports per-exercise threshold sets and the engine-wide config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

/// Per-exercise phase and form-check thresholds
pub mod thresholds;

pub use formcoach_core::config::{ConfigError, EngineConfig};
pub use thresholds::{
    ArmCurlThresholds, ExerciseThresholds, PushUpThresholds, ShoulderPressThresholds,
    SideRaiseThresholds, SquatThresholds,
};
