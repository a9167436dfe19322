// ABOUTME: Benchmark fixtures producing deterministic synthetic frame streams
// ABOUTME: Session lengths model a short set, a typical set, and a long endurance set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Benchmark fixtures for reproducible performance measurements.

use formcoach::synthetic::SyntheticSession;
use formcoach_core::models::{ExerciseType, PoseFrame};

/// Predefined session lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SetLength {
    /// 3 reps, about 240 frames
    Short,
    /// 10 reps, about 765 frames
    Typical,
    /// 30 reps, about 2265 frames
    Endurance,
}

impl SetLength {
    /// Every set length, shortest first
    pub const ALL: [Self; 3] = [Self::Short, Self::Typical, Self::Endurance];

    #[must_use]
    pub const fn reps(self) -> u32 {
        match self {
            Self::Short => 3,
            Self::Typical => 10,
            Self::Endurance => 30,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Typical => "typical",
            Self::Endurance => "endurance",
        }
    }
}

/// Frames for a set of the given exercise, seeded so every run sees the same noise
#[must_use]
pub fn session_frames(exercise: ExerciseType, length: SetLength) -> Vec<PoseFrame> {
    SyntheticSession::new(exercise)
        .with_reps(length.reps())
        .with_jitter(0.0015, 7)
        .frames()
}
