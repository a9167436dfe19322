// ABOUTME: Per-exercise evaluators and the object-safe trait the factory hands out
// ABOUTME: Each evaluator owns an EvaluatorState and its own threshold set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Exercise Evaluators
//!
//! Every evaluator follows the same per-frame order:
//!
//! 1. Gate on required landmarks; undetected frames leave state untouched
//! 2. Measure the primary joint angle or elevation
//! 3. Take at most one phase step (forward, abort, or complete)
//! 4. Run the form checks against the new phase
//! 5. Score, record, and report the frame

/// Arm curl evaluator
pub mod arm_curl;
/// Push-up evaluator
pub mod push_up;
/// Shoulder press evaluator
pub mod shoulder_press;
/// Side raise evaluator
pub mod side_raise;
/// Squat evaluator
pub mod squat;

pub use arm_curl::ArmCurlEvaluator;
pub use push_up::PushUpEvaluator;
pub use shoulder_press::ShoulderPressEvaluator;
pub use side_raise::SideRaiseEvaluator;
pub use squat::SquatEvaluator;

use crate::scoring::SessionScorer;
use crate::state::RepTracker;
use formcoach_core::models::{
    ExercisePhase, ExerciseType, FrameEvaluationResult, PoseFrame, PoseLandmark,
};

/// A stateful, session-scoped form evaluator for one exercise
pub trait ExerciseEvaluator: Send {
    /// Exercise this evaluator judges
    fn exercise(&self) -> ExerciseType;

    /// Landmarks that must be visible for a frame to be evaluated
    fn required_landmarks(&self) -> &'static [PoseLandmark];

    /// Evaluate one frame; frames must arrive in capture order
    fn process_frame(&mut self, frame: &PoseFrame) -> FrameEvaluationResult;

    /// Phase, rep, and score bookkeeping
    fn tracker(&self) -> &dyn RepTracker;

    /// Return to the initial state
    fn reset(&mut self);

    /// Current phase
    fn current_phase(&self) -> ExercisePhase {
        self.tracker().current_phase()
    }

    /// Completed repetitions
    fn rep_count(&self) -> u32 {
        self.tracker().rep_count()
    }

    /// Score of every evaluated frame
    fn frame_scores(&self) -> &[u32] {
        self.tracker().frame_scores()
    }

    /// Score of every completed repetition
    fn rep_scores(&self) -> &[u32] {
        self.tracker().rep_scores()
    }

    /// Whether a repetition is in progress
    fn is_in_active_rep(&self) -> bool {
        self.tracker().is_in_active_rep()
    }

    /// Whether every required landmark is visible enough on `frame`
    fn has_required_landmarks(&self, frame: &PoseFrame) -> bool {
        frame.has_visible(self.required_landmarks(), self.tracker().min_visibility())
    }

    /// Mean of all recorded frame scores
    fn overall_score(&self) -> u32 {
        SessionScorer::calculate_overall_score(self.frame_scores())
    }
}
