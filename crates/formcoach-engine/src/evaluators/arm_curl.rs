// ABOUTME: Arm curl evaluator driven by the shoulder-elbow-wrist angle, viewed from the side
// ABOUTME: Judges curl range at the top and flags elbow drift from the rep's starting position
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Arm Curl
//!
//! The elbow angle shrinks as the weight rises, so the phase thresholds run
//! downward. The anti-momentum check compares the elbow with where it sat on
//! the last rest frame before the curl began; an elbow that travels up or down
//! by more than the drift tolerance means the lifter is swinging the weight.
//! Drift costs score but never blocks rep counting.

use super::ExerciseEvaluator;
use crate::config::ArmCurlThresholds;
use crate::geometry::{calculate_angle, check_fixed_position, is_in_range};
use crate::state::{EvaluatorState, PhaseStep, RepTracker};
use formcoach_core::config::EngineConfig;
use formcoach_core::errors::EngineResult;
use formcoach_core::models::{
    ArmCurlPhase, BodySide, ExerciseType, FormCheckKind, FormCheckResult, FrameEvaluationResult,
    Point2, PoseFrame, PoseLandmark,
};

/// Arm curl form evaluator
#[derive(Debug, Clone)]
pub struct ArmCurlEvaluator {
    state: EvaluatorState<ArmCurlPhase>,
    thresholds: ArmCurlThresholds,
    side: BodySide,
    rep_start_elbow: Option<Point2>,
}

impl Default for ArmCurlEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArmCurlEvaluator {
    /// Evaluator with default thresholds and engine settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Evaluator with default thresholds
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: EvaluatorState::new(ExerciseType::ArmCurl, config),
            thresholds: ArmCurlThresholds::default(),
            side: BodySide::default(),
            rep_start_elbow: None,
        }
    }

    /// Evaluator with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: ArmCurlThresholds,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        thresholds.validate()?;
        config.validate()?;
        Ok(Self {
            thresholds,
            ..Self::with_config(config)
        })
    }

    /// Track the given arm instead of the left
    #[must_use]
    pub fn with_side(mut self, side: BodySide) -> Self {
        self.side = side;
        self
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &ArmCurlThresholds {
        &self.thresholds
    }

    /// Elbow position the current repetition is measured against
    #[must_use]
    pub const fn rep_start_elbow(&self) -> Option<Point2> {
        self.rep_start_elbow
    }

    fn next_step(&self, elbow_angle: f64) -> PhaseStep<ArmCurlPhase> {
        let t = &self.thresholds;
        match self.state.current_phase() {
            ArmCurlPhase::Down if elbow_angle < t.curl_start_angle => {
                PhaseStep::Enter(ArmCurlPhase::Curling)
            }
            ArmCurlPhase::Curling if elbow_angle <= t.top_enter_angle => {
                PhaseStep::Enter(ArmCurlPhase::Top)
            }
            ArmCurlPhase::Curling if elbow_angle >= t.down_min_angle => PhaseStep::Abort,
            ArmCurlPhase::Top if elbow_angle > t.lower_start_angle => {
                PhaseStep::Enter(ArmCurlPhase::Lowering)
            }
            ArmCurlPhase::Lowering if elbow_angle >= t.down_min_angle => PhaseStep::Complete,
            ArmCurlPhase::Lowering if elbow_angle <= t.top_enter_angle => {
                PhaseStep::Enter(ArmCurlPhase::Top)
            }
            ArmCurlPhase::Down
            | ArmCurlPhase::Curling
            | ArmCurlPhase::Top
            | ArmCurlPhase::Lowering => PhaseStep::Hold,
        }
    }
}

impl ExerciseEvaluator for ArmCurlEvaluator {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::ArmCurl
    }

    fn required_landmarks(&self) -> &'static [PoseLandmark] {
        ExerciseType::ArmCurl.required_landmarks(self.side)
    }

    fn process_frame(&mut self, frame: &PoseFrame) -> FrameEvaluationResult {
        let required = self.required_landmarks();
        if !self.state.has_required_landmarks(frame, required) {
            return self.state.undetected_result(frame, required);
        }

        let shoulder = frame.point(PoseLandmark::shoulder(self.side));
        let elbow = frame.point(PoseLandmark::elbow(self.side));
        let wrist = frame.point(PoseLandmark::wrist(self.side));

        let elbow_angle = calculate_angle(shoulder, elbow, wrist);
        let step = self.next_step(elbow_angle);
        if step == PhaseStep::Enter(ArmCurlPhase::Curling) {
            // The curl began on this frame; the elbow was last at rest on the previous one.
            self.rep_start_elbow = Some(
                self.state
                    .previous()
                    .and_then(|snapshot| snapshot.tracked_point)
                    .unwrap_or(elbow),
            );
        }
        self.state.apply(step);

        let phase = self.state.current_phase();
        if phase == ArmCurlPhase::Down {
            self.rep_start_elbow = None;
        }

        let t = &self.thresholds;
        let drift = self.rep_start_elbow.map_or_else(
            || check_fixed_position(elbow, elbow, t.elbow_drift_tolerance),
            |start| check_fixed_position(elbow, start, t.elbow_drift_tolerance),
        );
        let checks = vec![
            FormCheckResult::gated(
                FormCheckKind::CurlAngle,
                self.state.is_at_extremity(),
                is_in_range(elbow_angle, t.top_min_angle, t.top_max_angle),
                elbow_angle,
            ),
            FormCheckResult::gated(
                FormCheckKind::ElbowFixed,
                phase != ArmCurlPhase::Down,
                drift.passed,
                drift.value,
            ),
        ];

        self.state
            .finish_frame(frame, required, checks, elbow_angle, Some(elbow))
    }

    fn tracker(&self) -> &dyn RepTracker {
        &self.state
    }

    fn reset(&mut self) {
        self.state.reset();
        self.rep_start_elbow = None;
    }
}
