// ABOUTME: Form check and per-frame evaluation result types emitted by evaluators
// ABOUTME: These are the engine's only output contract with the hosting application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use super::exercise::{ExercisePhase, ExerciseType};
use super::landmark::{Landmark, PoseLandmark};
use serde::{Deserialize, Serialize};

/// Identifies one form rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormCheckKind {
    /// Squat knee angle inside the bottom window
    KneeAngle,
    /// Squat knee does not travel past the toe
    KneeOverToe,
    /// Squat torso stays open relative to the thigh
    BackAngle,
    /// Push-up elbow angle inside the bottom window
    ElbowAngle,
    /// Push-up shoulder-hip-ankle line stays straight
    BodyLine,
    /// Arm curl elbow angle inside the top window
    CurlAngle,
    /// Arm curl elbow stays where the rep started (no swinging)
    ElbowFixed,
    /// Side raise elbows reach shoulder height
    ElbowHeight,
    /// Side raise arms move together
    ArmSymmetry,
    /// Shoulder press arms fully extend overhead
    LockoutAngle,
    /// Shoulder press wrists finish above the head
    WristsOverhead,
}

impl FormCheckKind {
    /// What the check measures
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::KneeAngle => "Knee angle at the bottom is within the target depth window",
            Self::KneeOverToe => "Knee stays behind the toes",
            Self::BackAngle => "Torso stays upright relative to the thighs",
            Self::ElbowAngle => "Elbow angle at the bottom is within the target depth window",
            Self::BodyLine => "Shoulders, hips, and ankles form a straight line",
            Self::CurlAngle => "Elbow angle at the top is within the full-curl window",
            Self::ElbowFixed => "Elbow stays pinned at the side",
            Self::ElbowHeight => "Elbows reach shoulder height at the top",
            Self::ArmSymmetry => "Both arms rise at the same height",
            Self::LockoutAngle => "Arms reach full extension overhead",
            Self::WristsOverhead => "Wrists finish above the head",
        }
    }

    /// Corrective cue shown when the check fails
    #[must_use]
    pub const fn feedback(self) -> &'static str {
        match self {
            Self::KneeAngle => "Squat to roughly thigh-parallel depth",
            Self::KneeOverToe => "Sit your hips back so your knees stay behind your toes",
            Self::BackAngle => "Keep your chest up and avoid folding forward",
            Self::ElbowAngle => "Lower until your elbows reach about 90 degrees",
            Self::BodyLine => "Brace your core and keep your hips in line",
            Self::CurlAngle => "Curl the weight all the way up without over-squeezing",
            Self::ElbowFixed => "Keep your elbow still and avoid swinging the weight",
            Self::ElbowHeight => "Raise your elbows to shoulder height, no higher",
            Self::ArmSymmetry => "Lift both arms evenly",
            Self::LockoutAngle => "Press until your arms are fully straight",
            Self::WristsOverhead => "Finish with the weights directly over your head",
        }
    }
}

/// Outcome of one form rule against the current frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormCheckResult {
    /// Which rule was evaluated
    pub kind: FormCheckKind,
    /// Whether the rule passed
    pub passed: bool,
    /// Measured value (angle in degrees or normalized distance)
    pub value: f64,
    /// Human-readable description of the rule
    pub description: String,
    /// Corrective cue, present only on failure
    pub feedback: Option<String>,
}

impl FormCheckResult {
    /// Result of a rule that was judged on this frame
    #[must_use]
    pub fn evaluated(kind: FormCheckKind, passed: bool, value: f64) -> Self {
        Self {
            kind,
            passed,
            value,
            description: kind.description().to_owned(),
            feedback: (!passed).then(|| kind.feedback().to_owned()),
        }
    }

    /// Result of a rule outside the phase where it applies: always passes
    #[must_use]
    pub fn not_applicable(kind: FormCheckKind, value: f64) -> Self {
        Self::evaluated(kind, true, value)
    }

    /// Evaluate only when `active`, otherwise pass unconditionally
    #[must_use]
    pub fn gated(kind: FormCheckKind, active: bool, passed: bool, value: f64) -> Self {
        if active {
            Self::evaluated(kind, passed, value)
        } else {
            Self::not_applicable(kind, value)
        }
    }
}

/// Landmark position that fed a frame's evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedLandmark {
    /// Which landmark
    pub landmark: PoseLandmark,
    /// Its detected position and confidence
    pub position: Landmark,
}

/// Per-frame output of an evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvaluationResult {
    /// Exercise being evaluated
    pub exercise: ExerciseType,
    /// Capture timestamp of the frame
    pub timestamp_ms: u64,
    /// Percentage of passed checks (0-100)
    pub score: u32,
    /// Form checks run on this frame, in evaluator order
    pub checks: Vec<FormCheckResult>,
    /// Evaluator phase after processing this frame
    pub phase: ExercisePhase,
    /// Cumulative rep count after processing this frame
    pub rep_count: u32,
    /// Required landmarks as detected on this frame
    pub landmarks: Vec<TrackedLandmark>,
    /// Whether all required landmarks were present at sufficient confidence
    pub landmarks_detected: bool,
    /// Primary measurement driving the phase machine (angle or elevation delta)
    pub measurement: Option<f64>,
    /// Rate of change of the primary measurement per second
    pub velocity: Option<f64>,
}

impl FrameEvaluationResult {
    /// Look up a check by kind
    #[must_use]
    pub fn check(&self, kind: FormCheckKind) -> Option<&FormCheckResult> {
        self.checks.iter().find(|check| check.kind == kind)
    }

    /// Feedback cues from every failed check
    #[must_use]
    pub fn feedback(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter_map(|check| check.feedback.as_deref())
            .collect()
    }
}
