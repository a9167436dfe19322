// ABOUTME: Scenario tests for the side raise evaluator, viewed from the front
// ABOUTME: Checks shoulder-height and symmetry rules on both arms
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

mod common;

use common::{frames, init_test_logging, run, side_raise_frames};
use formcoach::synthetic::side_raise_pose;
use formcoach_core::models::{FormCheckKind, PoseLandmark, SideRaisePhase};
use formcoach_engine::evaluators::SideRaiseEvaluator;
use formcoach_engine::ExerciseEvaluator;

#[test]
fn test_even_raise_counts_one_rep() {
    init_test_logging();
    let mut evaluator = SideRaiseEvaluator::new();
    let results = run(
        &mut evaluator,
        &side_raise_frames(&[-0.15, -0.06, 0.0, -0.07, -0.15]),
    );

    assert_eq!(results[1].phase, SideRaisePhase::Raising.into());
    assert_eq!(results[2].phase, SideRaisePhase::Top.into());
    assert_eq!(results[3].phase, SideRaisePhase::Lowering.into());
    assert_eq!(results[4].phase, SideRaisePhase::Down.into());
    assert_eq!(evaluator.rep_count(), 1);

    let top = &results[2];
    assert!(top.check(FormCheckKind::ElbowHeight).unwrap().passed);
    assert!(top.check(FormCheckKind::ArmSymmetry).unwrap().passed);
    assert!((top.measurement.unwrap()).abs() < 1e-9);
    assert_eq!(evaluator.overall_score(), 100);
}

#[test]
fn test_lagging_arm_fails_height_and_symmetry() {
    let mut evaluator = SideRaiseEvaluator::new();
    let poses = [
        side_raise_pose(-0.15, -0.15),
        side_raise_pose(-0.06, -0.06),
        side_raise_pose(0.02, -0.06),
    ];
    let results = run(&mut evaluator, &frames(poses));

    let top = &results[2];
    assert_eq!(top.phase, SideRaisePhase::Top.into());
    let height = top.check(FormCheckKind::ElbowHeight).unwrap();
    assert!(!height.passed);
    assert!((height.value - 0.06).abs() < 1e-9);
    let symmetry = top.check(FormCheckKind::ArmSymmetry).unwrap();
    assert!(!symmetry.passed);
    assert!((symmetry.value - 0.08).abs() < 1e-9);
    assert_eq!(top.score, 0);
}

#[test]
fn test_raising_elbows_above_shoulders_fails_height() {
    let mut evaluator = SideRaiseEvaluator::new();
    let results = run(&mut evaluator, &side_raise_frames(&[-0.15, -0.06, 0.08]));

    let top = &results[2];
    assert_eq!(top.phase, SideRaisePhase::Top.into());
    assert!(!top.check(FormCheckKind::ElbowHeight).unwrap().passed);
    assert!(top.check(FormCheckKind::ArmSymmetry).unwrap().passed);
}

#[test]
fn test_symmetry_ignored_while_arms_hang() {
    let mut evaluator = SideRaiseEvaluator::new();
    let results = run(&mut evaluator, &frames([side_raise_pose(-0.15, -0.05)]));

    assert_eq!(results[0].phase, SideRaisePhase::Down.into());
    assert!(results[0].check(FormCheckKind::ArmSymmetry).unwrap().passed);
}

#[test]
fn test_either_arm_missing_skips_frame() {
    let mut evaluator = SideRaiseEvaluator::new();
    let poses = [
        side_raise_pose(-0.15, -0.15),
        side_raise_pose(-0.06, -0.06).hide(PoseLandmark::RightElbow),
    ];
    let results = run(&mut evaluator, &frames(poses));

    assert!(!results[1].landmarks_detected);
    assert_eq!(results[1].phase, SideRaisePhase::Down.into());
    assert_eq!(evaluator.frame_scores().len(), 1);
}
