// ABOUTME: Engine constants organized by domain (landmarks, exercise thresholds, scoring)
// ABOUTME: Compile-time tuning surface replicated by every evaluator's default thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Constants module
//!
//! Per-exercise thresholds are the engine's only tuning surface. Each exercise
//! module lists forward triggers, regression triggers, and form-check windows.

/// Landmark model constants
pub mod landmarks {
    /// Number of landmarks produced by the pose model per frame
    pub const POSE_LANDMARK_COUNT: usize = 33;

    /// Minimum visibility for a required landmark to count as detected
    pub const DEFAULT_MIN_VISIBILITY: f64 = 0.5;
}

/// Per-exercise phase thresholds and form-check windows
pub mod thresholds;

/// Scoring and grading constants
pub mod scoring;
