// ABOUTME: Shoulder press evaluator driven by the mean elbow angle of both arms, viewed frontally
// ABOUTME: Judges lockout and wrist position over the head at the top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use super::ExerciseEvaluator;
use crate::config::ShoulderPressThresholds;
use crate::geometry::{calculate_angle, check_wrist_above_head, is_in_range};
use crate::state::{EvaluatorState, PhaseStep, RepTracker};
use formcoach_core::config::EngineConfig;
use formcoach_core::errors::EngineResult;
use formcoach_core::models::{
    BodySide, ExerciseType, FormCheckKind, FormCheckResult, FrameEvaluationResult, PoseFrame,
    PoseLandmark, ShoulderPressPhase,
};

/// Standing overhead press form evaluator
#[derive(Debug, Clone)]
pub struct ShoulderPressEvaluator {
    state: EvaluatorState<ShoulderPressPhase>,
    thresholds: ShoulderPressThresholds,
}

impl Default for ShoulderPressEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoulderPressEvaluator {
    /// Evaluator with default thresholds and engine settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Evaluator with default thresholds
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: EvaluatorState::new(ExerciseType::ShoulderPress, config),
            thresholds: ShoulderPressThresholds::default(),
        }
    }

    /// Evaluator with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: ShoulderPressThresholds,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        thresholds.validate()?;
        config.validate()?;
        Ok(Self {
            thresholds,
            ..Self::with_config(config)
        })
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &ShoulderPressThresholds {
        &self.thresholds
    }

    fn next_step(&self, elbow_angle: f64) -> PhaseStep<ShoulderPressPhase> {
        let t = &self.thresholds;
        match self.state.current_phase() {
            ShoulderPressPhase::Down if elbow_angle > t.press_start_angle => {
                PhaseStep::Enter(ShoulderPressPhase::Pressing)
            }
            ShoulderPressPhase::Pressing if elbow_angle >= t.top_enter_angle => {
                PhaseStep::Enter(ShoulderPressPhase::Top)
            }
            ShoulderPressPhase::Pressing if elbow_angle <= t.down_max_angle => PhaseStep::Abort,
            ShoulderPressPhase::Top if elbow_angle < t.lower_start_angle => {
                PhaseStep::Enter(ShoulderPressPhase::Lowering)
            }
            ShoulderPressPhase::Lowering if elbow_angle <= t.down_max_angle => {
                PhaseStep::Complete
            }
            ShoulderPressPhase::Lowering if elbow_angle >= t.top_enter_angle => {
                PhaseStep::Enter(ShoulderPressPhase::Top)
            }
            ShoulderPressPhase::Down
            | ShoulderPressPhase::Pressing
            | ShoulderPressPhase::Top
            | ShoulderPressPhase::Lowering => PhaseStep::Hold,
        }
    }
}

impl ExerciseEvaluator for ShoulderPressEvaluator {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::ShoulderPress
    }

    fn required_landmarks(&self) -> &'static [PoseLandmark] {
        ExerciseType::ShoulderPress.required_landmarks(BodySide::default())
    }

    fn process_frame(&mut self, frame: &PoseFrame) -> FrameEvaluationResult {
        let required = self.required_landmarks();
        if !self.state.has_required_landmarks(frame, required) {
            return self.state.undetected_result(frame, required);
        }

        let nose = frame.point(PoseLandmark::Nose);
        let left_wrist = frame.point(PoseLandmark::LeftWrist);
        let right_wrist = frame.point(PoseLandmark::RightWrist);
        let left_angle = calculate_angle(
            frame.point(PoseLandmark::LeftShoulder),
            frame.point(PoseLandmark::LeftElbow),
            left_wrist,
        );
        let right_angle = calculate_angle(
            frame.point(PoseLandmark::RightShoulder),
            frame.point(PoseLandmark::RightElbow),
            right_wrist,
        );
        let elbow_angle = (left_angle + right_angle) / 2.0;

        let step = self.next_step(elbow_angle);
        self.state.apply(step);
        let at_top = self.state.is_at_extremity();

        let t = &self.thresholds;
        let locked_out = is_in_range(left_angle, t.top_min_angle, t.top_max_angle)
            && is_in_range(right_angle, t.top_min_angle, t.top_max_angle);
        let left_overhead = check_wrist_above_head(left_wrist, nose);
        let right_overhead = check_wrist_above_head(right_wrist, nose);
        let checks = vec![
            FormCheckResult::gated(
                FormCheckKind::LockoutAngle,
                at_top,
                locked_out,
                left_angle.min(right_angle),
            ),
            FormCheckResult::gated(
                FormCheckKind::WristsOverhead,
                at_top,
                left_overhead.passed && right_overhead.passed,
                left_overhead.value.min(right_overhead.value),
            ),
        ];

        self.state.finish_frame(
            frame,
            required,
            checks,
            elbow_angle,
            Some(left_wrist.midpoint(right_wrist)),
        )
    }

    fn tracker(&self) -> &dyn RepTracker {
        &self.state
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
