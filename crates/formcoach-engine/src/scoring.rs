// ABOUTME: Score aggregation from form checks to frames, reps, and whole sessions
// ABOUTME: Letter grades, rep consistency, and first-half versus second-half performance trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors
#![allow(clippy::cast_precision_loss)] // Safe: score lists are far below 2^52 entries

use formcoach_core::constants::scoring::{
    CONSISTENCY_PENALTY_PER_STD_DEV, GRADE_A_MIN, GRADE_B_MIN, GRADE_C_MIN, GRADE_D_MIN,
    GRADE_S_MIN, MAX_SCORE, MIN_REPS_FOR_TREND, TREND_THRESHOLD,
};
use formcoach_core::errors::{EngineError, EngineResult};
use formcoach_core::models::FormCheckResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// 95 and above
    S,
    /// 85 to 94
    A,
    /// 70 to 84
    B,
    /// 55 to 69
    C,
    /// 40 to 54
    D,
    /// Below 40
    F,
}

impl Grade {
    /// Grade a 0-100 score
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            s if s >= GRADE_S_MIN => Self::S,
            s if s >= GRADE_A_MIN => Self::A,
            s if s >= GRADE_B_MIN => Self::B,
            s if s >= GRADE_C_MIN => Self::C,
            s if s >= GRADE_D_MIN => Self::D,
            _ => Self::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Direction of rep quality across a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTrend {
    /// Later reps score noticeably higher
    Improving,
    /// No meaningful change, or too few reps to tell
    Stable,
    /// Later reps score noticeably lower
    Declining,
}

impl fmt::Display for PerformanceTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        })
    }
}

/// Aggregated report over every completed rep of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Completed reps
    pub total_reps: u32,
    /// Mean rep score
    pub average_score: u32,
    /// Highest rep score
    pub best_score: u32,
    /// Lowest rep score
    pub worst_score: u32,
    /// Grade of the average score
    pub grade: Grade,
    /// Rep-to-rep consistency (0-100)
    pub consistency: u32,
    /// Quality trend across the session
    pub trend: PerformanceTrend,
}

impl SessionStats {
    /// Stats for a session with no completed reps
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_reps: 0,
            average_score: 0,
            best_score: 0,
            worst_score: 0,
            grade: Grade::F,
            consistency: 0,
            trend: PerformanceTrend::Stable,
        }
    }
}

/// Stateless score aggregation
pub struct SessionScorer;

impl SessionScorer {
    /// Percentage of passed checks, equally weighted; 0 for no checks
    #[must_use]
    pub fn calculate_frame_score(checks: &[FormCheckResult]) -> u32 {
        if checks.is_empty() {
            return 0;
        }
        let passed = checks.iter().filter(|check| check.passed).count();
        Self::to_score(passed as f64 / checks.len() as f64 * 100.0)
    }

    /// Percentage of passed check weight
    ///
    /// `weights[i]` weighs `checks[i]`. Weights are relative; they need not sum
    /// to any particular total. A zero total yields 0.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WeightsMismatch` if the slices differ in length and
    /// `EngineError::InvalidWeight` for a negative or non-finite weight
    pub fn calculate_weighted_frame_score(
        checks: &[FormCheckResult],
        weights: &[f64],
    ) -> EngineResult<u32> {
        if checks.len() != weights.len() {
            return Err(EngineError::WeightsMismatch {
                checks: checks.len(),
                weights: weights.len(),
            });
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(EngineError::InvalidWeight(*bad));
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Ok(0);
        }
        let passed: f64 = checks
            .iter()
            .zip(weights)
            .filter(|(check, _)| check.passed)
            .map(|(_, weight)| weight)
            .sum();
        Ok(Self::to_score(passed / total * 100.0))
    }

    /// Mean of all recorded frame scores; 0 for no frames
    #[must_use]
    pub fn calculate_overall_score(frame_scores: &[u32]) -> u32 {
        Self::mean(frame_scores).map_or(0, Self::to_score)
    }

    /// Mean of the frame scores belonging to one repetition; 0 for no frames
    #[must_use]
    pub fn calculate_rep_score(rep_frame_scores: &[u32]) -> u32 {
        Self::mean(rep_frame_scores).map_or(0, Self::to_score)
    }

    /// Letter grade for a score
    #[must_use]
    pub const fn grade(score: u32) -> Grade {
        Grade::from_score(score)
    }

    /// Consistency of rep scores: 100 minus a penalty per point of standard deviation
    ///
    /// Fewer than two reps, or identical scores, yield exactly 100.
    #[must_use]
    pub fn calculate_consistency_score(rep_scores: &[u32]) -> u32 {
        if rep_scores.len() < 2 {
            return MAX_SCORE;
        }
        let std_dev = Self::std_dev(rep_scores);
        let penalty = (std_dev * CONSISTENCY_PENALTY_PER_STD_DEV).round();
        Self::to_score(f64::from(MAX_SCORE) - penalty)
    }

    /// Compare the first half of rep scores with the second half
    ///
    /// Requires at least three reps; with an odd count the middle rep belongs
    /// to neither half.
    #[must_use]
    pub fn calculate_trend(rep_scores: &[u32]) -> PerformanceTrend {
        if rep_scores.len() < MIN_REPS_FOR_TREND {
            return PerformanceTrend::Stable;
        }
        let half = rep_scores.len() / 2;
        let (Some(first), Some(second)) = (
            Self::mean(&rep_scores[..half]),
            Self::mean(&rep_scores[rep_scores.len() - half..]),
        ) else {
            return PerformanceTrend::Stable;
        };

        let change = second - first;
        if change > TREND_THRESHOLD {
            PerformanceTrend::Improving
        } else if change < -TREND_THRESHOLD {
            PerformanceTrend::Declining
        } else {
            PerformanceTrend::Stable
        }
    }

    /// Bundle rep scores into a session report
    #[must_use]
    pub fn calculate_session_stats(rep_scores: &[u32]) -> SessionStats {
        let (Some(best_score), Some(worst_score)) =
            (rep_scores.iter().max(), rep_scores.iter().min())
        else {
            return SessionStats::empty();
        };

        let average_score = Self::calculate_overall_score(rep_scores);
        SessionStats {
            total_reps: u32::try_from(rep_scores.len()).unwrap_or(u32::MAX),
            average_score,
            best_score: (*best_score).min(MAX_SCORE),
            worst_score: (*worst_score).min(MAX_SCORE),
            grade: Grade::from_score(average_score),
            consistency: Self::calculate_consistency_score(rep_scores),
            trend: Self::calculate_trend(rep_scores),
        }
    }

    fn mean(scores: &[u32]) -> Option<f64> {
        if scores.is_empty() {
            return None;
        }
        let sum: f64 = scores.iter().map(|s| f64::from(*s)).sum();
        Some(sum / scores.len() as f64)
    }

    fn std_dev(scores: &[u32]) -> f64 {
        let Some(mean) = Self::mean(scores) else {
            return 0.0;
        };
        let variance = scores
            .iter()
            .map(|s| {
                let diff = f64::from(*s) - mean;
                diff * diff
            })
            .sum::<f64>()
            / scores.len() as f64;
        variance.sqrt()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_score(value: f64) -> u32 {
        value.round().clamp(0.0, f64::from(MAX_SCORE)) as u32
    }
}
