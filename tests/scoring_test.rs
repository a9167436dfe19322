// ABOUTME: Tests for frame, rep, and session score aggregation
// ABOUTME: Grade boundaries, weighted scoring errors, consistency, and trend detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::too_many_lines,
    clippy::similar_names,
    clippy::unreadable_literal,
    clippy::missing_panics_doc
)]

use formcoach_core::errors::{EngineError, ErrorCode};
use formcoach_core::models::{FormCheckKind, FormCheckResult};
use formcoach_engine::{Grade, PerformanceTrend, SessionScorer, SessionStats};

fn check(passed: bool) -> FormCheckResult {
    FormCheckResult::evaluated(FormCheckKind::KneeAngle, passed, 0.0)
}

#[test]
fn test_grade_boundaries() {
    let cases = [
        (100, Grade::S),
        (95, Grade::S),
        (94, Grade::A),
        (85, Grade::A),
        (84, Grade::B),
        (70, Grade::B),
        (69, Grade::C),
        (55, Grade::C),
        (54, Grade::D),
        (40, Grade::D),
        (39, Grade::F),
        (0, Grade::F),
    ];
    for (score, grade) in cases {
        assert_eq!(SessionScorer::grade(score), grade, "score {score}");
    }
    assert_eq!(Grade::B.to_string(), "B");
}

#[test]
fn test_frame_score_is_pass_percentage() {
    assert_eq!(SessionScorer::calculate_frame_score(&[]), 0);
    assert_eq!(
        SessionScorer::calculate_frame_score(&[check(true), check(true), check(false)]),
        67
    );
    assert_eq!(
        SessionScorer::calculate_frame_score(&[check(false), check(false)]),
        0
    );
}

#[test]
fn test_weighted_frame_score() {
    let checks = [check(true), check(false)];
    assert_eq!(
        SessionScorer::calculate_weighted_frame_score(&checks, &[3.0, 1.0]).unwrap(),
        75
    );
    assert_eq!(
        SessionScorer::calculate_weighted_frame_score(&checks, &[0.0, 0.0]).unwrap(),
        0
    );
}

#[test]
fn test_weighted_frame_score_rejects_bad_weights() {
    let checks = [check(true), check(false)];

    let mismatch = SessionScorer::calculate_weighted_frame_score(&checks, &[1.0]).unwrap_err();
    assert!(matches!(
        mismatch,
        EngineError::WeightsMismatch {
            checks: 2,
            weights: 1
        }
    ));
    assert_eq!(mismatch.code(), ErrorCode::WeightsMismatch);

    let negative =
        SessionScorer::calculate_weighted_frame_score(&checks, &[1.0, -0.5]).unwrap_err();
    assert!(matches!(negative, EngineError::InvalidWeight(_)));

    let nan = SessionScorer::calculate_weighted_frame_score(&checks, &[f64::NAN, 1.0]);
    assert!(nan.is_err());
}

#[test]
fn test_overall_and_rep_scores_round_the_mean() {
    assert_eq!(SessionScorer::calculate_overall_score(&[]), 0);
    assert_eq!(SessionScorer::calculate_overall_score(&[100, 50]), 75);
    assert_eq!(SessionScorer::calculate_overall_score(&[100, 99]), 100);
    assert_eq!(SessionScorer::calculate_rep_score(&[]), 0);
    assert_eq!(SessionScorer::calculate_rep_score(&[100, 100, 50]), 83);
}

#[test]
fn test_consistency_penalizes_spread() {
    assert_eq!(SessionScorer::calculate_consistency_score(&[]), 100);
    assert_eq!(SessionScorer::calculate_consistency_score(&[42]), 100);
    assert_eq!(SessionScorer::calculate_consistency_score(&[88, 88, 88]), 100);
    assert_eq!(SessionScorer::calculate_consistency_score(&[100, 80]), 80);
    assert_eq!(SessionScorer::calculate_consistency_score(&[100, 0]), 0);
}

#[test]
fn test_trend_needs_three_reps() {
    assert_eq!(
        SessionScorer::calculate_trend(&[10, 100]),
        PerformanceTrend::Stable
    );
    assert_eq!(
        SessionScorer::calculate_trend(&[50, 50, 90, 90]),
        PerformanceTrend::Improving
    );
    assert_eq!(
        SessionScorer::calculate_trend(&[90, 90, 50, 50]),
        PerformanceTrend::Declining
    );
    assert_eq!(
        SessionScorer::calculate_trend(&[80, 82, 84]),
        PerformanceTrend::Stable
    );
}

#[test]
fn test_session_stats() {
    assert_eq!(
        SessionScorer::calculate_session_stats(&[]),
        SessionStats::empty()
    );

    let stats = SessionScorer::calculate_session_stats(&[90, 80, 100]);
    assert_eq!(stats.total_reps, 3);
    assert_eq!(stats.average_score, 90);
    assert_eq!(stats.best_score, 100);
    assert_eq!(stats.worst_score, 80);
    assert_eq!(stats.grade, Grade::A);
    assert_eq!(stats.consistency, 84);
    assert_eq!(stats.trend, PerformanceTrend::Improving);
}
