// ABOUTME: JSON Lines frame-stream reader and writer for recorded or synthetic sessions
// ABOUTME: One PoseFrame per line; errors carry the offending line number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Frame stream format:
//!
//! ```text
//! {"timestamp_ms": 0, "landmarks": [{"x": 0.5, "y": 0.15, "z": 0.0, "visibility": 0.9}, ...]}
//! ```
//!
//! Each line holds exactly 33 landmarks in pose-model index order. Blank lines
//! are skipped; `z` may be omitted.

use formcoach_core::errors::EngineError;
use formcoach_core::models::{Landmark, PoseFrame};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

/// Errors reading or writing a frame stream
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line is not a valid frame object
    #[error("line {line}: invalid JSON: {source}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Parser error
        source: serde_json::Error,
    },

    /// A line parsed but does not hold a complete frame
    #[error("line {line}: {source}")]
    InvalidFrame {
        /// 1-based line number
        line: usize,
        /// Frame validation error
        source: EngineError,
    },

    /// A frame could not be serialized
    #[error("failed to serialize frame: {0}")]
    Serialize(serde_json::Error),
}

#[derive(Deserialize)]
struct FrameLine {
    timestamp_ms: u64,
    landmarks: Vec<Landmark>,
}

/// Lazily decode frames from a JSON Lines reader
pub fn read_frames<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<PoseFrame, ReplayError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| decode_line(index + 1, line).transpose())
}

fn decode_line(line: usize, raw: io::Result<String>) -> Result<Option<PoseFrame>, ReplayError> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let record: FrameLine =
        serde_json::from_str(trimmed).map_err(|source| ReplayError::Parse { line, source })?;
    PoseFrame::from_vec(record.timestamp_ms, record.landmarks)
        .map(Some)
        .map_err(|source| ReplayError::InvalidFrame { line, source })
}

/// Read every frame from a JSON Lines file
///
/// # Errors
///
/// Returns the first I/O, parse, or frame validation error encountered
pub fn read_frames_from_path(path: impl AsRef<Path>) -> Result<Vec<PoseFrame>, ReplayError> {
    let file = File::open(path)?;
    read_frames(BufReader::new(file)).collect()
}

/// Write frames as JSON Lines
///
/// # Errors
///
/// Returns `ReplayError::Serialize` or `ReplayError::Io` on failure
pub fn write_frames<'a, W: Write>(
    mut writer: W,
    frames: impl IntoIterator<Item = &'a PoseFrame>,
) -> Result<(), ReplayError> {
    for frame in frames {
        serde_json::to_writer(&mut writer, frame).map_err(ReplayError::Serialize)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
