// ABOUTME: Exercise form evaluation engine: geometry, evaluator state machines, and scoring
// ABOUTME: Pure, synchronous, single-threaded; no I/O happens inside the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

#![deny(unsafe_code)]

//! # Formcoach Engine
//!
//! Consumes 33-point pose frames one at a time and produces rep counts,
//! phase-gated form checks, and frame, rep, and session scores.
//!
//! ## Modules
//!
//! - **geometry**: joint angles, symmetry, elevation, and alignment primitives
//! - **state**: the phase and score lifecycle every evaluator composes
//! - **evaluators**: squat, push-up, arm curl, side raise, shoulder press
//! - **config**: runtime-overridable threshold sets
//! - **factory**: exercise identifier to evaluator mapping
//! - **scoring**: frame, rep, and session aggregation
//!
//! ```
//! use formcoach_engine::create_evaluator;
//!
//! let evaluator = create_evaluator("squat");
//! assert!(evaluator.is_some());
//! assert!(create_evaluator("unknown_exercise").is_none());
//! ```

/// Runtime threshold configuration
pub mod config;

/// Per-exercise evaluators
pub mod evaluators;

/// Evaluator construction
pub mod factory;

/// Geometry primitives over 2D landmark points
pub mod geometry;

/// Score aggregation
pub mod scoring;

/// Shared evaluator lifecycle
pub mod state;

pub use config::ExerciseThresholds;
pub use evaluators::{
    ArmCurlEvaluator, ExerciseEvaluator, PushUpEvaluator, ShoulderPressEvaluator,
    SideRaiseEvaluator, SquatEvaluator,
};
pub use factory::{create_evaluator, EvaluatorFactory};
pub use scoring::{Grade, PerformanceTrend, SessionScorer, SessionStats};
pub use state::{EvaluatorState, PhaseStep, RepTracker, TransitionSnapshot};
