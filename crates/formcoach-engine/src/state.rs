// ABOUTME: Shared per-exercise lifecycle: phase, rep count, frame and rep score history
// ABOUTME: Each evaluator owns one EvaluatorState parameterized by its phase enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Evaluator State
//!
//! Evaluators compose an [`EvaluatorState`] rather than inheriting behavior.
//! Exercise-specific code decides a [`PhaseStep`] from the frame's primary
//! measurement and hands it to [`EvaluatorState::apply`], which owns rep
//! counting and score bookkeeping.

use crate::scoring::SessionScorer;
use formcoach_core::config::EngineConfig;
use formcoach_core::models::{
    ExercisePhase, ExerciseType, FormCheckResult, FrameEvaluationResult, Phase, Point2, PoseFrame,
    PoseLandmark, TrackedLandmark,
};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Data kept from the last evaluated frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSnapshot {
    /// Capture time of the frame
    pub timestamp_ms: u64,
    /// Primary measurement on that frame
    pub measurement: f64,
    /// Joint the evaluator follows between frames, if any
    pub tracked_point: Option<Point2>,
}

/// Outcome of one frame's phase update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStep<P> {
    /// No threshold crossed
    Hold,
    /// Move to another non-rest phase
    Enter(P),
    /// Incomplete repetition: return to rest without counting
    Abort,
    /// Repetition finished: count it and return to rest
    Complete,
}

/// Phase, rep, and score bookkeeping for one evaluator instance
#[derive(Debug, Clone)]
pub struct EvaluatorState<P: Phase> {
    exercise: ExerciseType,
    current_phase: P,
    rep_count: u32,
    frame_scores: Vec<u32>,
    rep_frame_scores: Vec<u32>,
    rep_scores: Vec<u32>,
    previous: Option<TransitionSnapshot>,
    min_visibility: f64,
}

impl<P: Phase> EvaluatorState<P> {
    /// Fresh state in the rest phase
    #[must_use]
    pub const fn new(exercise: ExerciseType, config: &EngineConfig) -> Self {
        Self {
            exercise,
            current_phase: P::REST,
            rep_count: 0,
            frame_scores: Vec::new(),
            rep_frame_scores: Vec::new(),
            rep_scores: Vec::new(),
            previous: None,
            min_visibility: config.min_visibility,
        }
    }

    /// Current phase
    #[must_use]
    pub const fn current_phase(&self) -> P {
        self.current_phase
    }

    /// Completed repetitions
    #[must_use]
    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Snapshot of the last evaluated frame
    #[must_use]
    pub const fn previous(&self) -> Option<&TransitionSnapshot> {
        self.previous.as_ref()
    }

    /// Set the current phase
    ///
    /// Entering rest discards the frames of any repetition in progress.
    pub fn transition_to(&mut self, phase: P) {
        if phase == self.current_phase {
            return;
        }
        debug!(
            exercise = %self.exercise,
            from = self.current_phase.label(),
            to = phase.label(),
            "phase transition"
        );
        self.current_phase = phase;
        if phase == P::REST {
            self.rep_frame_scores.clear();
        }
    }

    /// Count one completed repetition and close its score
    pub fn increment_rep(&mut self) {
        self.rep_count = self.rep_count.saturating_add(1);
        let rep_score = SessionScorer::calculate_rep_score(&self.rep_frame_scores);
        self.rep_scores.push(rep_score);
        self.rep_frame_scores.clear();
        info!(
            exercise = %self.exercise,
            rep = self.rep_count,
            score = rep_score,
            "repetition completed"
        );
    }

    /// Count the repetition and return to rest
    pub fn complete_rep(&mut self) {
        self.increment_rep();
        self.transition_to(P::REST);
    }

    /// Apply a phase decision; at most one transition happens per call
    pub fn apply(&mut self, step: PhaseStep<P>) {
        match step {
            PhaseStep::Hold => {}
            PhaseStep::Enter(phase) => self.transition_to(phase),
            PhaseStep::Abort => {
                debug!(
                    exercise = %self.exercise,
                    from = self.current_phase.label(),
                    "incomplete repetition, returning to rest"
                );
                self.transition_to(P::REST);
            }
            PhaseStep::Complete => self.complete_rep(),
        }
    }

    /// Record a frame score; frames inside a repetition also count toward it
    pub fn add_frame_score(&mut self, score: u32) {
        self.frame_scores.push(score);
        if self.is_in_active_rep() {
            self.rep_frame_scores.push(score);
        }
    }

    /// Frame score for a set of checks
    #[must_use]
    pub fn calculate_score(&self, checks: &[FormCheckResult]) -> u32 {
        SessionScorer::calculate_frame_score(checks)
    }

    /// Whether every required landmark is visible enough to evaluate
    #[must_use]
    pub fn has_required_landmarks(&self, frame: &PoseFrame, required: &[PoseLandmark]) -> bool {
        frame.has_visible(required, self.min_visibility)
    }

    /// True whenever the phase is not the rest phase
    #[must_use]
    pub fn is_in_active_rep(&self) -> bool {
        self.current_phase != P::REST
    }

    /// Whether the current phase is the extremity where form checks apply
    #[must_use]
    pub fn is_at_extremity(&self) -> bool {
        self.current_phase.is_extremity()
    }

    /// Rate of change of the primary measurement since the previous frame, per second
    #[must_use]
    pub fn velocity(&self, timestamp_ms: u64, measurement: f64) -> Option<f64> {
        let previous = self.previous?;
        let elapsed = timestamp_ms.checked_sub(previous.timestamp_ms)?;
        if elapsed == 0 {
            return None;
        }
        let seconds = Duration::from_millis(elapsed).as_secs_f64();
        Some((measurement - previous.measurement) / seconds)
    }

    /// Remember this frame for velocity and drift tracking
    pub fn record_snapshot(&mut self, snapshot: TransitionSnapshot) {
        self.previous = Some(snapshot);
    }

    /// Return to the initial state; used between sessions, not between frames
    pub fn reset(&mut self) {
        debug!(exercise = %self.exercise, "evaluator reset");
        self.current_phase = P::REST;
        self.rep_count = 0;
        self.frame_scores.clear();
        self.rep_frame_scores.clear();
        self.rep_scores.clear();
        self.previous = None;
    }

    /// Zero-score result for a frame missing required landmarks; state is untouched
    #[must_use]
    pub fn undetected_result(
        &self,
        frame: &PoseFrame,
        required: &[PoseLandmark],
    ) -> FrameEvaluationResult {
        trace!(
            exercise = %self.exercise,
            timestamp_ms = frame.timestamp_ms(),
            missing = ?frame.missing_landmarks(required, self.min_visibility),
            "required landmarks not detected"
        );
        FrameEvaluationResult {
            exercise: self.exercise,
            timestamp_ms: frame.timestamp_ms(),
            score: 0,
            checks: Vec::new(),
            phase: self.current_phase.into(),
            rep_count: self.rep_count,
            landmarks: tracked_landmarks(frame, required),
            landmarks_detected: false,
            measurement: None,
            velocity: None,
        }
    }

    /// Score an evaluated frame, record it, and build its result
    pub fn finish_frame(
        &mut self,
        frame: &PoseFrame,
        required: &[PoseLandmark],
        checks: Vec<FormCheckResult>,
        measurement: f64,
        tracked_point: Option<Point2>,
    ) -> FrameEvaluationResult {
        let score = self.calculate_score(&checks);
        self.add_frame_score(score);

        let timestamp_ms = frame.timestamp_ms();
        let velocity = self.velocity(timestamp_ms, measurement);
        self.record_snapshot(TransitionSnapshot {
            timestamp_ms,
            measurement,
            tracked_point,
        });

        trace!(
            exercise = %self.exercise,
            timestamp_ms,
            phase = self.current_phase.label(),
            measurement,
            score,
            "frame evaluated"
        );

        FrameEvaluationResult {
            exercise: self.exercise,
            timestamp_ms,
            score,
            checks,
            phase: self.current_phase.into(),
            rep_count: self.rep_count,
            landmarks: tracked_landmarks(frame, required),
            landmarks_detected: true,
            measurement: Some(measurement),
            velocity,
        }
    }
}

/// Object-safe view of an evaluator's bookkeeping, independent of its phase type
pub trait RepTracker {
    /// Current phase as the exercise-tagged sum type
    fn current_phase(&self) -> ExercisePhase;
    /// Completed repetitions
    fn rep_count(&self) -> u32;
    /// Scores of every evaluated frame, in order
    fn frame_scores(&self) -> &[u32];
    /// Score of every completed repetition, in order
    fn rep_scores(&self) -> &[u32];
    /// Whether a repetition is in progress
    fn is_in_active_rep(&self) -> bool;
    /// Visibility floor applied to required landmarks
    fn min_visibility(&self) -> f64;
}

impl<P: Phase> RepTracker for EvaluatorState<P> {
    fn current_phase(&self) -> ExercisePhase {
        self.current_phase.into()
    }

    fn rep_count(&self) -> u32 {
        self.rep_count
    }

    fn frame_scores(&self) -> &[u32] {
        &self.frame_scores
    }

    fn rep_scores(&self) -> &[u32] {
        &self.rep_scores
    }

    fn is_in_active_rep(&self) -> bool {
        Self::is_in_active_rep(self)
    }

    fn min_visibility(&self) -> f64 {
        self.min_visibility
    }
}

fn tracked_landmarks(frame: &PoseFrame, required: &[PoseLandmark]) -> Vec<TrackedLandmark> {
    required
        .iter()
        .map(|&landmark| TrackedLandmark {
            landmark,
            position: *frame.landmark(landmark),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcoach_core::models::SquatPhase;

    fn state() -> EvaluatorState<SquatPhase> {
        EvaluatorState::new(ExerciseType::Squat, &EngineConfig::default())
    }

    #[test]
    fn test_starts_at_rest() {
        let state = state();
        assert_eq!(state.current_phase(), SquatPhase::Standing);
        assert_eq!(state.rep_count(), 0);
        assert!(!state.is_in_active_rep());
    }

    #[test]
    fn test_extremity_follows_phase() {
        let mut state = state();
        assert!(!state.is_at_extremity());
        state.apply(PhaseStep::Enter(SquatPhase::Descending));
        assert!(!state.is_at_extremity());
        state.apply(PhaseStep::Enter(SquatPhase::Bottom));
        assert!(state.is_at_extremity());
        state.apply(PhaseStep::Enter(SquatPhase::Ascending));
        assert!(!state.is_at_extremity());
    }

    #[test]
    fn test_complete_scores_only_active_frames() {
        let mut state = state();
        state.add_frame_score(100);
        state.apply(PhaseStep::Enter(SquatPhase::Descending));
        state.add_frame_score(100);
        state.apply(PhaseStep::Enter(SquatPhase::Bottom));
        state.add_frame_score(50);
        state.apply(PhaseStep::Complete);
        state.add_frame_score(100);

        assert_eq!(state.rep_count(), 1);
        assert_eq!(state.rep_scores(), &[75]);
        assert_eq!(state.frame_scores(), &[100, 100, 50, 100]);
        assert_eq!(state.current_phase(), SquatPhase::Standing);
    }

    #[test]
    fn test_abort_drops_rep_frames_without_counting() {
        let mut state = state();
        state.apply(PhaseStep::Enter(SquatPhase::Descending));
        state.add_frame_score(0);
        state.apply(PhaseStep::Abort);
        state.apply(PhaseStep::Enter(SquatPhase::Descending));
        state.add_frame_score(100);
        state.apply(PhaseStep::Complete);

        assert_eq!(state.rep_count(), 1);
        assert_eq!(state.rep_scores(), &[100]);
    }

    #[test]
    fn test_velocity_uses_previous_snapshot() {
        let mut state = state();
        assert_eq!(state.velocity(0, 170.0), None);
        state.record_snapshot(TransitionSnapshot {
            timestamp_ms: 1_000,
            measurement: 170.0,
            tracked_point: None,
        });
        let velocity = state.velocity(1_500, 160.0).unwrap_or_default();
        assert!((velocity + 20.0).abs() < 1e-9);
        assert_eq!(state.velocity(1_000, 160.0), None);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut state = state();
        state.apply(PhaseStep::Enter(SquatPhase::Descending));
        state.add_frame_score(80);
        state.apply(PhaseStep::Complete);
        state.reset();

        assert_eq!(state.rep_count(), 0);
        assert!(state.frame_scores().is_empty());
        assert!(RepTracker::rep_scores(&state).is_empty());
        assert!(state.previous().is_none());
    }
}
