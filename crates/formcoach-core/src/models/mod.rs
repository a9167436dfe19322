// ABOUTME: Core data models for pose input and evaluation output
// ABOUTME: Re-exports landmarks, exercise and phase types, and frame results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

/// Evaluation output types
pub mod evaluation;
/// Exercise identifiers and phase enums
pub mod exercise;
/// Landmark indices, points, and frames
pub mod landmark;

pub use evaluation::{FormCheckKind, FormCheckResult, FrameEvaluationResult, TrackedLandmark};
pub use exercise::{
    ArmCurlPhase, ExercisePhase, ExerciseType, Phase, PushUpPhase, ShoulderPressPhase,
    SideRaisePhase, SquatPhase,
};
pub use landmark::{BodySide, Landmark, Point2, PoseFrame, PoseLandmark};
