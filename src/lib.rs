// ABOUTME: Main library entry point for the formcoach exercise form evaluation toolkit
// ABOUTME: Sessions, logging, synthetic poses, and frame-stream replay on top of the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

#![deny(unsafe_code)]

//! # Formcoach
//!
//! Evaluates exercise form from a stream of 33-point pose frames. The
//! algorithms live in `formcoach-engine`; this crate wraps them in a
//! session that produces the summary payload a backend persists.
//!
//! ```
//! use formcoach::session::WorkoutSession;
//! use formcoach::synthetic::SyntheticSession;
//! use formcoach_core::models::ExerciseType;
//!
//! let mut session = WorkoutSession::new("squat").unwrap();
//! for frame in SyntheticSession::new(ExerciseType::Squat).with_reps(3).frames() {
//!     session.process_frame(&frame).unwrap();
//! }
//! let summary = session.finish();
//! assert_eq!(summary.total_reps, 3);
//! ```

/// Structured logging setup
pub mod logging;

/// JSON Lines frame-stream replay
pub mod replay;

/// Session orchestration and the session-save payload
pub mod session;

/// Synthetic pose and session generation
pub mod synthetic;

pub use formcoach_core::{EngineConfig, EngineError, EngineResult};
pub use formcoach_engine::{create_evaluator, EvaluatorFactory, ExerciseEvaluator};
pub use session::{SessionSummary, WorkoutSession};
