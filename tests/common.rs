// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging plus frame-sequence builders for each exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `formcoach`
//!
//! Frame builders space frames 33 ms apart, matching a 30 fps camera.

use formcoach::synthetic::{
    arm_curl_pose, push_up_pose, shoulder_press_pose, side_raise_pose, squat_pose, PoseBuilder,
};
use formcoach_core::models::{FrameEvaluationResult, PoseFrame};
use formcoach_engine::ExerciseEvaluator;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Milliseconds between consecutive test frames
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Timestamp of the `index`-th frame
pub fn timestamp(index: usize) -> u64 {
    index as u64 * FRAME_INTERVAL_MS
}

/// Build frames from poses, assigning consecutive timestamps
pub fn frames(poses: impl IntoIterator<Item = PoseBuilder>) -> Vec<PoseFrame> {
    poses
        .into_iter()
        .enumerate()
        .map(|(index, pose)| pose.build(timestamp(index)))
        .collect()
}

/// Feed every frame to the evaluator, collecting the results
pub fn run(
    evaluator: &mut dyn ExerciseEvaluator,
    frames: &[PoseFrame],
) -> Vec<FrameEvaluationResult> {
    frames
        .iter()
        .map(|frame| evaluator.process_frame(frame))
        .collect()
}

/// Squat frames with an upright torso and a modest shin lean
pub fn squat_frames(knee_angles: &[f64]) -> Vec<PoseFrame> {
    frames(
        knee_angles
            .iter()
            .map(|&knee| squat_pose(knee, 160.0, 10.0)),
    )
}

/// Push-up frames with a straight body line
pub fn push_up_frames(elbow_angles: &[f64]) -> Vec<PoseFrame> {
    frames(elbow_angles.iter().map(|&elbow| push_up_pose(elbow, 2.0)))
}

/// Arm curl frames with the elbow pinned
pub fn arm_curl_frames(elbow_angles: &[f64]) -> Vec<PoseFrame> {
    frames(elbow_angles.iter().map(|&elbow| arm_curl_pose(elbow, 0.0)))
}

/// Side raise frames with both arms at the same elevation
pub fn side_raise_frames(deltas: &[f64]) -> Vec<PoseFrame> {
    frames(deltas.iter().map(|&delta| side_raise_pose(delta, delta)))
}

/// Shoulder press frames with both arms at the same angle
pub fn shoulder_press_frames(elbow_angles: &[f64]) -> Vec<PoseFrame> {
    frames(
        elbow_angles
            .iter()
            .map(|&elbow| shoulder_press_pose(elbow, elbow)),
    )
}
