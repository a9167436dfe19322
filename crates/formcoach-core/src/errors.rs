// ABOUTME: Unified error types for the formcoach evaluation engine
// ABOUTME: Defines EngineError, stable error codes, and the EngineResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! # Engine Error Handling
//!
//! The evaluation engine degrades gracefully: missing landmarks and unknown
//! exercise types are ordinary values, not errors. The variants below cover the
//! remaining cases, which are caller defects or malformed input at the boundary
//! (frame decoding, custom check weights, session frame ordering, configuration).

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes for every engine failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Frame did not contain the expected landmark count
    InvalidFrame = 3000,
    /// Exercise identifier is not recognised
    UnknownExercise = 3001,
    /// Check weights do not line up with the checks they weight
    WeightsMismatch = 3002,
    /// A check weight is negative or not finite
    InvalidWeight = 3003,
    /// Frame timestamp precedes the previous frame of the session
    OutOfOrderFrame = 3004,
    /// Threshold or engine configuration is invalid
    ConfigInvalid = 6000,
}

impl ErrorCode {
    /// Human-readable description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFrame => "The pose frame does not contain exactly 33 landmarks",
            Self::UnknownExercise => "The exercise type is not supported",
            Self::WeightsMismatch => "Check weights must match the number of form checks",
            Self::InvalidWeight => "Check weights must be finite and non-negative",
            Self::OutOfOrderFrame => "Frames must be supplied in capture order",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Errors raised by the evaluation engine and its session layer
#[derive(Debug, Error)]
pub enum EngineError {
    /// Frame landmark count differs from the pose model's 33 points
    #[error("Invalid frame: expected {expected} landmarks, got {actual}")]
    InvalidFrame {
        /// Landmark count the pose model produces
        expected: usize,
        /// Landmark count actually supplied
        actual: usize,
    },

    /// No evaluator exists for the requested exercise type
    #[error("Unknown exercise type: {0}")]
    UnknownExercise(String),

    /// Custom weights array length differs from the checks array length
    #[error("Weights mismatch: {weights} weights supplied for {checks} checks")]
    WeightsMismatch {
        /// Number of form checks
        checks: usize,
        /// Number of weights supplied
        weights: usize,
    },

    /// A custom weight is negative, NaN, or infinite
    #[error("Invalid check weight: {0}")]
    InvalidWeight(f64),

    /// Frame arrived with a timestamp earlier than its predecessor
    #[error("Out of order frame: {current_ms}ms follows {previous_ms}ms")]
    OutOfOrderFrame {
        /// Timestamp of the previously accepted frame
        previous_ms: u64,
        /// Timestamp of the rejected frame
        current_ms: u64,
    },

    /// Threshold or engine configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidFrame { .. } => ErrorCode::InvalidFrame,
            Self::UnknownExercise(_) => ErrorCode::UnknownExercise,
            Self::WeightsMismatch { .. } => ErrorCode::WeightsMismatch,
            Self::InvalidWeight(_) => ErrorCode::InvalidWeight,
            Self::OutOfOrderFrame { .. } => ErrorCode::OutOfOrderFrame,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// Create an unknown exercise error
    pub fn unknown_exercise(name: impl Into<String>) -> Self {
        Self::UnknownExercise(name.into())
    }
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
