// ABOUTME: Tests for the JSON Lines frame-stream reader and writer
// ABOUTME: Round-trips synthetic sessions through temp files and checks line-numbered errors
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

use formcoach::replay::{read_frames, read_frames_from_path, write_frames, ReplayError};
use formcoach::synthetic::SyntheticSession;
use formcoach::WorkoutSession;
use formcoach_core::errors::EngineError;
use formcoach_core::models::{ExerciseType, Landmark, PoseFrame};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use tempfile::TempDir;

#[test]
fn test_recorded_session_replays_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("press.jsonl");
    let frames = SyntheticSession::new(ExerciseType::ShoulderPress)
        .with_reps(2)
        .frames();

    write_frames(BufWriter::new(File::create(&path).unwrap()), &frames).unwrap();
    let replayed = read_frames_from_path(&path).unwrap();
    assert_eq!(replayed, frames);

    let mut session = WorkoutSession::new("shoulder_press").unwrap();
    for frame in &replayed {
        session.process_frame(frame).unwrap();
    }
    assert_eq!(session.rep_count(), 2);
}

#[test]
fn test_coordinates_decode_bit_for_bit() {
    let tricky = [0.15012817562970943, 0.1 + 0.2, 1.0 / 3.0, 0.49999999999999994];
    let landmarks = (0..33)
        .map(|i| {
            let value = tricky[i % tricky.len()];
            Landmark::new(value, 1.0 - value, value / 7.0, 0.9)
        })
        .collect();
    let frame = PoseFrame::from_vec(33, landmarks).unwrap();

    let mut buffer = Vec::new();
    write_frames(&mut buffer, [&frame]).unwrap();
    let replayed = read_frames(Cursor::new(buffer)).next().unwrap().unwrap();

    for (written, read) in frame.landmarks().iter().zip(replayed.landmarks()) {
        assert_eq!(written.x.to_bits(), read.x.to_bits());
        assert_eq!(written.y.to_bits(), read.y.to_bits());
        assert_eq!(written.z.to_bits(), read.z.to_bits());
    }
}

#[test]
fn test_blank_lines_are_skipped_and_depth_is_optional() {
    let landmark = r#"{"x": 0.5, "y": 0.5, "visibility": 0.9}"#;
    let landmarks = vec![landmark; 33].join(",");
    let input = format!(
        "\n{{\"timestamp_ms\": 10, \"landmarks\": [{landmarks}]}}\n   \n\
         {{\"timestamp_ms\": 20, \"landmarks\": [{landmarks}]}}\n"
    );

    let frames: Vec<_> = read_frames(Cursor::new(input))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].timestamp_ms(), 20);
    assert!(frames[0].landmarks().iter().all(|l| l.z == 0.0));
}

#[test]
fn test_malformed_line_reports_its_number() {
    let input = "\n{\"timestamp_ms\": 0, \"landmarks\": [}\n";
    let err = read_frames(Cursor::new(input)).next().unwrap().unwrap_err();
    assert!(matches!(err, ReplayError::Parse { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2:"));
}

#[test]
fn test_short_frame_is_rejected() {
    let input = r#"{"timestamp_ms": 0, "landmarks": [{"x": 0.5, "y": 0.5, "visibility": 0.9}]}"#;
    let err = read_frames(Cursor::new(input)).next().unwrap().unwrap_err();
    assert!(matches!(
        err,
        ReplayError::InvalidFrame {
            line: 1,
            source: EngineError::InvalidFrame {
                expected: 33,
                actual: 1
            }
        }
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = read_frames_from_path(temp_dir.path().join("absent.jsonl")).unwrap_err();
    assert!(matches!(err, ReplayError::Io(_)));
}
