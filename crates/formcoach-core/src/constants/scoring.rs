// ABOUTME: Scoring constants for frame, rep, and session aggregation
// ABOUTME: Letter grade boundaries, consistency penalty, and trend sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

/// Maximum score for a frame, rep, or session
pub const MAX_SCORE: u32 = 100;

/// Minimum score for grade S
pub const GRADE_S_MIN: u32 = 95;
/// Minimum score for grade A
pub const GRADE_A_MIN: u32 = 85;
/// Minimum score for grade B
pub const GRADE_B_MIN: u32 = 70;
/// Minimum score for grade C
pub const GRADE_C_MIN: u32 = 55;
/// Minimum score for grade D
pub const GRADE_D_MIN: u32 = 40;

/// Consistency points lost per point of rep-score standard deviation
pub const CONSISTENCY_PENALTY_PER_STD_DEV: f64 = 2.0;

/// Minimum rep count before a performance trend is reported
pub const MIN_REPS_FOR_TREND: usize = 3;

/// Half-to-half mean difference (score points) that counts as a trend
pub const TREND_THRESHOLD: f64 = 5.0;

/// Consecutive undetected frames before a session reports the pose as lost
/// (about half a second at 30 fps)
pub const DEFAULT_POSE_LOST_FRAMES: u32 = 15;
