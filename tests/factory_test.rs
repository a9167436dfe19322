// ABOUTME: Tests for evaluator construction from identifiers and threshold sets
// ABOUTME: Covers aliases, unknown identifiers, and threshold file validation
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

use formcoach_core::config::{ConfigError, EngineConfig};
use formcoach_core::errors::{EngineError, ErrorCode};
use formcoach_core::models::ExerciseType;
use formcoach_engine::{create_evaluator, EvaluatorFactory, ExerciseThresholds};

#[test]
fn test_every_exercise_has_an_evaluator_at_rest() {
    for exercise in ExerciseType::ALL {
        let evaluator = create_evaluator(exercise.as_str()).unwrap();
        assert_eq!(evaluator.exercise(), exercise);
        assert!(evaluator.current_phase().is_rest());
        assert_eq!(evaluator.current_phase().exercise(), exercise);
        assert_eq!(evaluator.rep_count(), 0);
        assert!(!evaluator.required_landmarks().is_empty());
    }
}

#[test]
fn test_aliases_and_case_are_accepted() {
    let cases = [
        ("pushup", ExerciseType::PushUp),
        ("Push-Up", ExerciseType::PushUp),
        ("bicep_curl", ExerciseType::ArmCurl),
        ("lateral_raise", ExerciseType::SideRaise),
        ("overhead_press", ExerciseType::ShoulderPress),
        ("  SQUAT ", ExerciseType::Squat),
    ];
    for (name, exercise) in cases {
        let evaluator = EvaluatorFactory::create(name).unwrap();
        assert_eq!(evaluator.exercise(), exercise, "{name}");
    }
}

#[test]
fn test_unknown_exercise_yields_none() {
    assert!(create_evaluator("burpee").is_none());
    assert!(create_evaluator("").is_none());

    let err = "burpee".parse::<ExerciseType>().unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownExercise);
}

#[test]
fn test_create_with_config_applies_visibility_floor() {
    let config = EngineConfig {
        min_visibility: 0.95,
    };
    let evaluator = EvaluatorFactory::create_with_config("squat", &config).unwrap();
    assert!((evaluator.tracker().min_visibility() - 0.95).abs() < f64::EPSILON);
}

#[test]
fn test_default_thresholds_validate() {
    for exercise in ExerciseType::ALL {
        let thresholds = ExerciseThresholds::defaults(exercise);
        assert_eq!(thresholds.exercise(), exercise);
        thresholds.validate().unwrap();
    }
}

#[test]
fn test_threshold_json_overrides_single_field() {
    let thresholds =
        ExerciseThresholds::from_json(ExerciseType::Squat, r#"{"knee_toe_tolerance": 0.05}"#)
            .unwrap();
    let ExerciseThresholds::Squat(squat) = thresholds else {
        panic!("expected squat thresholds");
    };
    assert!((squat.knee_toe_tolerance - 0.05).abs() < f64::EPSILON);
    assert!((squat.standing_min_angle - 160.0).abs() < f64::EPSILON);

    let evaluator = EvaluatorFactory::with_thresholds(thresholds, &EngineConfig::default())
        .unwrap();
    assert_eq!(evaluator.exercise(), ExerciseType::Squat);
}

#[test]
fn test_threshold_json_rejects_broken_hysteresis() {
    // Ascent trigger below the bottom trigger leaves no hysteresis gap
    let err = ExerciseThresholds::from_json(
        ExerciseType::PushUp,
        r#"{"ascent_start_angle": 95.0}"#,
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::Config(ConfigError::InvalidRange(_))));
    assert_eq!(err.code(), ErrorCode::ConfigInvalid);
}

#[test]
fn test_threshold_json_rejects_malformed_input() {
    let err = ExerciseThresholds::from_json(ExerciseType::ArmCurl, "{not json").unwrap_err();
    assert!(matches!(err, EngineError::Config(ConfigError::Parse(_))));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = EngineConfig {
        min_visibility: 1.5,
    };
    let result = EvaluatorFactory::with_thresholds(
        ExerciseThresholds::defaults(ExerciseType::SideRaise),
        &config,
    );
    assert!(matches!(
        result,
        Err(EngineError::Config(ConfigError::ValueOutOfRange(_)))
    ));
}
