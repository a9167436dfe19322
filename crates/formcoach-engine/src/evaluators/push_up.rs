// ABOUTME: Push-up evaluator driven by the shoulder-elbow-wrist angle, viewed from the side
// ABOUTME: Judges depth at the bottom and keeps the shoulder-hip-ankle line straight throughout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use super::ExerciseEvaluator;
use crate::config::PushUpThresholds;
use crate::geometry::{calculate_angle, check_line_straightness, is_in_range};
use crate::state::{EvaluatorState, PhaseStep, RepTracker};
use formcoach_core::config::EngineConfig;
use formcoach_core::errors::EngineResult;
use formcoach_core::models::{
    BodySide, ExerciseType, FormCheckKind, FormCheckResult, FrameEvaluationResult, PoseFrame,
    PoseLandmark, PushUpPhase,
};

/// Push-up form evaluator
#[derive(Debug, Clone)]
pub struct PushUpEvaluator {
    state: EvaluatorState<PushUpPhase>,
    thresholds: PushUpThresholds,
    side: BodySide,
}

impl Default for PushUpEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl PushUpEvaluator {
    /// Evaluator with default thresholds and engine settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Evaluator with default thresholds
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: EvaluatorState::new(ExerciseType::PushUp, config),
            thresholds: PushUpThresholds::default(),
            side: BodySide::default(),
        }
    }

    /// Evaluator with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: PushUpThresholds,
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
    pub const fn thresholds(&self) -> &PushUpThresholds {
        &self.thresholds
    }

    fn next_step(&self, elbow_angle: f64) -> PhaseStep<PushUpPhase> {
        let t = &self.thresholds;
        match self.state.current_phase() {
            PushUpPhase::Up if elbow_angle < t.descent_start_angle => {
                PhaseStep::Enter(PushUpPhase::Descending)
            }
            PushUpPhase::Descending if elbow_angle <= t.bottom_enter_angle => {
                PhaseStep::Enter(PushUpPhase::Bottom)
            }
            PushUpPhase::Descending if elbow_angle >= t.up_min_angle => PhaseStep::Abort,
            PushUpPhase::Bottom if elbow_angle > t.ascent_start_angle => {
                PhaseStep::Enter(PushUpPhase::Ascending)
            }
            PushUpPhase::Ascending if elbow_angle >= t.up_min_angle => PhaseStep::Complete,
            PushUpPhase::Ascending if elbow_angle <= t.bottom_enter_angle => {
                PhaseStep::Enter(PushUpPhase::Bottom)
            }
            PushUpPhase::Up
            | PushUpPhase::Descending
            | PushUpPhase::Bottom
            | PushUpPhase::Ascending => PhaseStep::Hold,
        }
    }
}

impl ExerciseEvaluator for PushUpEvaluator {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::PushUp
    }

    fn required_landmarks(&self) -> &'static [PoseLandmark] {
        ExerciseType::PushUp.required_landmarks(self.side)
    }

    fn process_frame(&mut self, frame: &PoseFrame) -> FrameEvaluationResult {
        let required = self.required_landmarks();
        if !self.state.has_required_landmarks(frame, required) {
            return self.state.undetected_result(frame, required);
        }

        let shoulder = frame.point(PoseLandmark::shoulder(self.side));
        let elbow = frame.point(PoseLandmark::elbow(self.side));
        let wrist = frame.point(PoseLandmark::wrist(self.side));
        let hip = frame.point(PoseLandmark::hip(self.side));
        let ankle = frame.point(PoseLandmark::ankle(self.side));

        let elbow_angle = calculate_angle(shoulder, elbow, wrist);
        let step = self.next_step(elbow_angle);
        self.state.apply(step);
        let at_bottom = self.state.is_at_extremity();

        let t = &self.thresholds;
        // Sagging or piking hips are a fault in every phase.
        let body_line = check_line_straightness(shoulder, hip, ankle, t.min_body_line_angle);
        let checks = vec![
            FormCheckResult::gated(
                FormCheckKind::ElbowAngle,
                at_bottom,
                is_in_range(elbow_angle, t.bottom_min_angle, t.bottom_max_angle),
                elbow_angle,
            ),
            FormCheckResult::evaluated(FormCheckKind::BodyLine, body_line.passed, body_line.value),
        ];

        self.state
            .finish_frame(frame, required, checks, elbow_angle, Some(shoulder))
    }

    fn tracker(&self) -> &dyn RepTracker {
        &self.state
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
