// ABOUTME: Session orchestration around one evaluator: frame ordering, pose-loss tracking, summary
// ABOUTME: The summary is the payload handed to the external session-save API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Workout Session
//!
//! A [`WorkoutSession`] owns exactly one evaluator for its lifetime. It adds
//! what the pure engine leaves to its caller: the unknown-exercise warning,
//! capture-order enforcement, and the "pose not detected" streak the UI uses
//! to prompt the athlete to reposition.

use chrono::{DateTime, Utc};
use formcoach_core::config::EngineConfig;
use formcoach_core::constants::scoring::DEFAULT_POSE_LOST_FRAMES;
use formcoach_core::errors::{EngineError, EngineResult};
use formcoach_core::models::{ExerciseType, FrameEvaluationResult, PoseFrame};
use formcoach_engine::scoring::{SessionScorer, SessionStats};
use formcoach_engine::{EvaluatorFactory, ExerciseEvaluator, ExerciseThresholds};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One continuous exercise-performance interval
pub struct WorkoutSession {
    id: Uuid,
    evaluator: Box<dyn ExerciseEvaluator>,
    started_at: DateTime<Utc>,
    first_timestamp_ms: Option<u64>,
    last_timestamp_ms: Option<u64>,
    frames_processed: u64,
    frames_detected: u64,
    undetected_streak: u32,
    pose_lost_after: u32,
}

impl WorkoutSession {
    /// Start a session for an exercise identifier or alias
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownExercise` if no evaluator matches
    pub fn new(exercise: &str) -> EngineResult<Self> {
        Self::with_config(exercise, &EngineConfig::default())
    }

    /// Start a session with explicit engine settings
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownExercise` if no evaluator matches, or
    /// `EngineError::Config` if `config` is invalid
    pub fn with_config(exercise: &str, config: &EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let Some(evaluator) = EvaluatorFactory::create_with_config(exercise, config) else {
            warn!(exercise = %exercise, "unknown exercise type requested, no evaluator created");
            return Err(EngineError::unknown_exercise(exercise.trim()));
        };
        Ok(Self::from_evaluator(evaluator))
    }

    /// Start a session whose evaluator uses custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: ExerciseThresholds,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        EvaluatorFactory::with_thresholds(thresholds, config).map(Self::from_evaluator)
    }

    /// Wrap an already constructed evaluator
    #[must_use]
    pub fn from_evaluator(evaluator: Box<dyn ExerciseEvaluator>) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            evaluator,
            started_at: Utc::now(),
            first_timestamp_ms: None,
            last_timestamp_ms: None,
            frames_processed: 0,
            frames_detected: 0,
            undetected_streak: 0,
            pose_lost_after: DEFAULT_POSE_LOST_FRAMES,
        };
        info!(
            session.id = %session.id,
            session.exercise = %session.exercise(),
            "session started"
        );
        session
    }

    /// Consecutive undetected frames after which the pose counts as lost
    #[must_use]
    pub fn with_pose_lost_after(mut self, frames: u32) -> Self {
        self.pose_lost_after = frames;
        self
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Exercise being evaluated
    #[must_use]
    pub fn exercise(&self) -> ExerciseType {
        self.evaluator.exercise()
    }

    /// Wall-clock start of the session
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The session's evaluator
    #[must_use]
    pub fn evaluator(&self) -> &dyn ExerciseEvaluator {
        self.evaluator.as_ref()
    }

    /// Completed repetitions so far
    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.evaluator.rep_count()
    }

    /// Frames accepted so far
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Accepted frames with every required landmark visible
    #[must_use]
    pub const fn frames_detected(&self) -> u64 {
        self.frames_detected
    }

    /// Current run of consecutive undetected frames
    #[must_use]
    pub const fn undetected_streak(&self) -> u32 {
        self.undetected_streak
    }

    /// Whether the athlete has been out of view long enough to prompt them
    #[must_use]
    pub const fn pose_lost(&self) -> bool {
        self.pose_lost_after > 0 && self.undetected_streak >= self.pose_lost_after
    }

    /// Evaluate the next frame in capture order
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfOrderFrame` if the frame is older than the
    /// previous one; the session is left untouched
    pub fn process_frame(&mut self, frame: &PoseFrame) -> EngineResult<FrameEvaluationResult> {
        let current_ms = frame.timestamp_ms();
        if let Some(previous_ms) = self.last_timestamp_ms {
            if current_ms < previous_ms {
                return Err(EngineError::OutOfOrderFrame {
                    previous_ms,
                    current_ms,
                });
            }
        }

        let result = self.evaluator.process_frame(frame);

        self.first_timestamp_ms.get_or_insert(current_ms);
        self.last_timestamp_ms = Some(current_ms);
        self.frames_processed += 1;
        if result.landmarks_detected {
            if self.pose_lost() {
                debug!(session.id = %self.id, "pose reacquired");
            }
            self.frames_detected += 1;
            self.undetected_streak = 0;
        } else {
            self.undetected_streak = self.undetected_streak.saturating_add(1);
            if self.pose_lost_after > 0 && self.undetected_streak == self.pose_lost_after {
                warn!(
                    session.id = %self.id,
                    frames = self.undetected_streak,
                    "pose lost, athlete out of view"
                );
            }
        }

        Ok(result)
    }

    /// End the session and build its summary
    #[must_use]
    pub fn finish(self) -> SessionSummary {
        let rep_scores = self.evaluator.rep_scores().to_vec();
        let stats = SessionScorer::calculate_session_stats(&rep_scores);
        let summary = SessionSummary {
            session_id: self.id,
            exercise: self.evaluator.exercise(),
            started_at: self.started_at,
            ended_at: Utc::now(),
            stream_duration_ms: self
                .first_timestamp_ms
                .zip(self.last_timestamp_ms)
                .map_or(0, |(first, last)| last.saturating_sub(first)),
            frames_processed: self.frames_processed,
            frames_detected: self.frames_detected,
            total_reps: self.evaluator.rep_count(),
            overall_score: self.evaluator.overall_score(),
            rep_scores,
            stats,
        };
        info!(
            session.id = %summary.session_id,
            session.exercise = %summary.exercise,
            session.reps = summary.total_reps,
            session.score = summary.overall_score,
            session.grade = %summary.stats.grade,
            "session finished"
        );
        summary
    }
}

/// Completed-session payload for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercise performed
    pub exercise: ExerciseType,
    /// Wall-clock start
    pub started_at: DateTime<Utc>,
    /// Wall-clock end
    pub ended_at: DateTime<Utc>,
    /// Span between the first and last frame timestamps
    pub stream_duration_ms: u64,
    /// Frames evaluated
    pub frames_processed: u64,
    /// Frames with every required landmark visible
    pub frames_detected: u64,
    /// Completed repetitions
    pub total_reps: u32,
    /// Score of each completed repetition
    pub rep_scores: Vec<u32>,
    /// Mean of all evaluated frame scores
    pub overall_score: u32,
    /// Aggregated rep statistics
    pub stats: SessionStats,
}
