// ABOUTME: Maps exercise identifiers to freshly constructed evaluators
// ABOUTME: Unknown identifiers yield None; callers decide whether to log and how to fall back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use crate::config::ExerciseThresholds;
use crate::evaluators::{
    ArmCurlEvaluator, ExerciseEvaluator, PushUpEvaluator, ShoulderPressEvaluator,
    SideRaiseEvaluator, SquatEvaluator,
};
use formcoach_core::config::EngineConfig;
use formcoach_core::errors::EngineResult;
use formcoach_core::models::ExerciseType;

/// Constructs session-scoped evaluators
pub struct EvaluatorFactory;

impl EvaluatorFactory {
    /// Evaluator for an exercise identifier or alias, with default settings
    ///
    /// Matching trims whitespace and ignores case. Returns `None` for an
    /// unrecognized identifier.
    #[must_use]
    pub fn create(exercise: &str) -> Option<Box<dyn ExerciseEvaluator>> {
        Self::create_with_config(exercise, &EngineConfig::default())
    }

    /// Evaluator for an exercise identifier or alias
    #[must_use]
    pub fn create_with_config(
        exercise: &str,
        config: &EngineConfig,
    ) -> Option<Box<dyn ExerciseEvaluator>> {
        exercise
            .parse::<ExerciseType>()
            .ok()
            .map(|exercise| Self::for_exercise(exercise, config))
    }

    /// Evaluator for a known exercise with default thresholds
    #[must_use]
    pub fn for_exercise(
        exercise: ExerciseType,
        config: &EngineConfig,
    ) -> Box<dyn ExerciseEvaluator> {
        match exercise {
            ExerciseType::Squat => Box::new(SquatEvaluator::with_config(config)),
            ExerciseType::PushUp => Box::new(PushUpEvaluator::with_config(config)),
            ExerciseType::ArmCurl => Box::new(ArmCurlEvaluator::with_config(config)),
            ExerciseType::SideRaise => Box::new(SideRaiseEvaluator::with_config(config)),
            ExerciseType::ShoulderPress => Box::new(ShoulderPressEvaluator::with_config(config)),
        }
    }

    /// Evaluator using custom thresholds; the exercise follows the threshold set
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the thresholds or config fail validation
    pub fn with_thresholds(
        thresholds: ExerciseThresholds,
        config: &EngineConfig,
    ) -> EngineResult<Box<dyn ExerciseEvaluator>> {
        Ok(match thresholds {
            ExerciseThresholds::Squat(t) => Box::new(SquatEvaluator::with_thresholds(t, config)?),
            ExerciseThresholds::PushUp(t) => {
                Box::new(PushUpEvaluator::with_thresholds(t, config)?)
            }
            ExerciseThresholds::ArmCurl(t) => {
                Box::new(ArmCurlEvaluator::with_thresholds(t, config)?)
            }
            ExerciseThresholds::SideRaise(t) => {
                Box::new(SideRaiseEvaluator::with_thresholds(t, config)?)
            }
            ExerciseThresholds::ShoulderPress(t) => {
                Box::new(ShoulderPressEvaluator::with_thresholds(t, config)?)
            }
        })
    }
}

/// Evaluator for an exercise identifier or alias, or `None` if unrecognized
#[must_use]
pub fn create_evaluator(exercise: &str) -> Option<Box<dyn ExerciseEvaluator>> {
    EvaluatorFactory::create(exercise)
}
