// ABOUTME: Squat evaluator driven by the hip-knee-ankle angle, viewed from the side
// ABOUTME: Judges depth, knee travel past the toe, and torso angle at the bottom
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use super::ExerciseEvaluator;
use crate::config::SquatThresholds;
use crate::geometry::{calculate_angle, check_knee_over_toe, check_line_straightness, is_in_range};
use crate::state::{EvaluatorState, PhaseStep, RepTracker};
use formcoach_core::config::EngineConfig;
use formcoach_core::errors::EngineResult;
use formcoach_core::models::{
    BodySide, ExerciseType, FormCheckKind, FormCheckResult, FrameEvaluationResult, PoseFrame,
    PoseLandmark, SquatPhase,
};

/// Squat form evaluator
#[derive(Debug, Clone)]
pub struct SquatEvaluator {
    state: EvaluatorState<SquatPhase>,
    thresholds: SquatThresholds,
    side: BodySide,
}

impl Default for SquatEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl SquatEvaluator {
    /// Evaluator with default thresholds and engine settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Evaluator with default thresholds
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: EvaluatorState::new(ExerciseType::Squat, config),
            thresholds: SquatThresholds::default(),
            side: BodySide::default(),
        }
    }

    /// Evaluator with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: SquatThresholds,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        thresholds.validate()?;
        config.validate()?;
        Ok(Self {
            thresholds,
            ..Self::with_config(config)
        })
    }

    /// Track the given body side instead of the left
    #[must_use]
    pub fn with_side(mut self, side: BodySide) -> Self {
        self.side = side;
        self
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &SquatThresholds {
        &self.thresholds
    }

    fn next_step(&self, knee_angle: f64) -> PhaseStep<SquatPhase> {
        let t = &self.thresholds;
        match self.state.current_phase() {
            SquatPhase::Standing if knee_angle < t.descent_start_angle => {
                PhaseStep::Enter(SquatPhase::Descending)
            }
            SquatPhase::Descending if knee_angle <= t.bottom_enter_angle => {
                PhaseStep::Enter(SquatPhase::Bottom)
            }
            SquatPhase::Descending if knee_angle >= t.standing_min_angle => PhaseStep::Abort,
            SquatPhase::Bottom if knee_angle > t.ascent_start_angle => {
                PhaseStep::Enter(SquatPhase::Ascending)
            }
            SquatPhase::Ascending if knee_angle >= t.standing_min_angle => PhaseStep::Complete,
            SquatPhase::Ascending if knee_angle <= t.bottom_enter_angle => {
                PhaseStep::Enter(SquatPhase::Bottom)
            }
            SquatPhase::Standing
            | SquatPhase::Descending
            | SquatPhase::Bottom
            | SquatPhase::Ascending => PhaseStep::Hold,
        }
    }
}

impl ExerciseEvaluator for SquatEvaluator {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Squat
    }

    fn required_landmarks(&self) -> &'static [PoseLandmark] {
        ExerciseType::Squat.required_landmarks(self.side)
    }

    fn process_frame(&mut self, frame: &PoseFrame) -> FrameEvaluationResult {
        let required = self.required_landmarks();
        if !self.state.has_required_landmarks(frame, required) {
            return self.state.undetected_result(frame, required);
        }

        let shoulder = frame.point(PoseLandmark::shoulder(self.side));
        let hip = frame.point(PoseLandmark::hip(self.side));
        let knee = frame.point(PoseLandmark::knee(self.side));
        let ankle = frame.point(PoseLandmark::ankle(self.side));
        let toe = frame.point(PoseLandmark::foot_index(self.side));

        let knee_angle = calculate_angle(hip, knee, ankle);
        let step = self.next_step(knee_angle);
        self.state.apply(step);
        let at_bottom = self.state.is_at_extremity();

        let t = &self.thresholds;
        let knee_over_toe = check_knee_over_toe(knee, toe, ankle, t.knee_toe_tolerance);
        let back = check_line_straightness(shoulder, hip, knee, t.min_back_angle);
        let checks = vec![
            FormCheckResult::gated(
                FormCheckKind::KneeAngle,
                at_bottom,
                is_in_range(knee_angle, t.bottom_min_angle, t.bottom_max_angle),
                knee_angle,
            ),
            FormCheckResult::gated(
                FormCheckKind::KneeOverToe,
                at_bottom,
                knee_over_toe.passed,
                knee_over_toe.value,
            ),
            FormCheckResult::gated(FormCheckKind::BackAngle, at_bottom, back.passed, back.value),
        ];

        self.state
            .finish_frame(frame, required, checks, knee_angle, Some(knee))
    }

    fn tracker(&self) -> &dyn RepTracker {
        &self.state
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
