// ABOUTME: Side raise evaluator driven by elbow height relative to the shoulders, viewed frontally
// ABOUTME: Judges elbow height at the top and left/right symmetry throughout the raise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Side Raise
//!
//! Unlike the other evaluators the phase machine runs on a position, not an
//! angle: the mean of `shoulder.y - elbow.y` over both arms. It is negative
//! while the arms hang and approaches zero as the elbows reach shoulder height.

use super::ExerciseEvaluator;
use crate::config::SideRaiseThresholds;
use crate::geometry::{check_elevation, check_symmetry};
use crate::state::{EvaluatorState, PhaseStep, RepTracker};
use formcoach_core::config::EngineConfig;
use formcoach_core::errors::EngineResult;
use formcoach_core::models::{
    BodySide, ExerciseType, FormCheckKind, FormCheckResult, FrameEvaluationResult, PoseFrame,
    PoseLandmark, SideRaisePhase,
};

/// Side (lateral) raise form evaluator
#[derive(Debug, Clone)]
pub struct SideRaiseEvaluator {
    state: EvaluatorState<SideRaisePhase>,
    thresholds: SideRaiseThresholds,
}

impl Default for SideRaiseEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl SideRaiseEvaluator {
    /// Evaluator with default thresholds and engine settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Evaluator with default thresholds
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: EvaluatorState::new(ExerciseType::SideRaise, config),
            thresholds: SideRaiseThresholds::default(),
        }
    }

    /// Evaluator with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: SideRaiseThresholds,
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
    pub const fn thresholds(&self) -> &SideRaiseThresholds {
        &self.thresholds
    }

    fn next_step(&self, delta: f64) -> PhaseStep<SideRaisePhase> {
        let t = &self.thresholds;
        match self.state.current_phase() {
            SideRaisePhase::Down if delta > t.raise_start_delta => {
                PhaseStep::Enter(SideRaisePhase::Raising)
            }
            SideRaisePhase::Raising if delta >= t.top_enter_delta => {
                PhaseStep::Enter(SideRaisePhase::Top)
            }
            SideRaisePhase::Raising if delta <= t.down_max_delta => PhaseStep::Abort,
            SideRaisePhase::Top if delta < t.lower_start_delta => {
                PhaseStep::Enter(SideRaisePhase::Lowering)
            }
            SideRaisePhase::Lowering if delta <= t.down_max_delta => PhaseStep::Complete,
            SideRaisePhase::Lowering if delta >= t.top_enter_delta => {
                PhaseStep::Enter(SideRaisePhase::Top)
            }
            SideRaisePhase::Down
            | SideRaisePhase::Raising
            | SideRaisePhase::Top
            | SideRaisePhase::Lowering => PhaseStep::Hold,
        }
    }
}

impl ExerciseEvaluator for SideRaiseEvaluator {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::SideRaise
    }

    fn required_landmarks(&self) -> &'static [PoseLandmark] {
        ExerciseType::SideRaise.required_landmarks(BodySide::default())
    }

    fn process_frame(&mut self, frame: &PoseFrame) -> FrameEvaluationResult {
        let required = self.required_landmarks();
        if !self.state.has_required_landmarks(frame, required) {
            return self.state.undetected_result(frame, required);
        }

        let left_shoulder = frame.point(PoseLandmark::LeftShoulder);
        let right_shoulder = frame.point(PoseLandmark::RightShoulder);
        let left_elbow = frame.point(PoseLandmark::LeftElbow);
        let right_elbow = frame.point(PoseLandmark::RightElbow);

        let t = &self.thresholds;
        let left = check_elevation(left_elbow, left_shoulder, t.shoulder_height_tolerance);
        let right = check_elevation(right_elbow, right_shoulder, t.shoulder_height_tolerance);
        let delta = (left.delta + right.delta) / 2.0;

        let step = self.next_step(delta);
        self.state.apply(step);

        let at_height = left.level && right.level;
        let worst_offset = left.delta.abs().max(right.delta.abs());
        let symmetry = check_symmetry(left_elbow, right_elbow, t.symmetry_tolerance);
        let checks = vec![
            FormCheckResult::gated(
                FormCheckKind::ElbowHeight,
                self.state.is_at_extremity(),
                at_height,
                worst_offset,
            ),
            FormCheckResult::gated(
                FormCheckKind::ArmSymmetry,
                self.state.is_in_active_rep(),
                symmetry.passed,
                symmetry.value,
            ),
        ];

        self.state.finish_frame(
            frame,
            required,
            checks,
            delta,
            Some(left_elbow.midpoint(right_elbow)),
        )
    }

    fn tracker(&self) -> &dyn RepTracker {
        &self.state
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
