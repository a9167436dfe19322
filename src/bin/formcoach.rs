// ABOUTME: Formcoach CLI - evaluate recorded pose streams and generate synthetic ones
// ABOUTME: Replays JSON Lines frame files through a workout session and prints the summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors
//!
//! Usage:
//! ```bash
//! # Generate a synthetic squat session
//! formcoach simulate --exercise squat --reps 5 > squat.jsonl
//!
//! # Evaluate it
//! formcoach evaluate --exercise squat --input squat.jsonl
//!
//! # Machine-readable output with one result per frame
//! formcoach evaluate --exercise squat --input squat.jsonl --format json --per-frame
//!
//! # Override thresholds for one exercise
//! formcoach evaluate --exercise squat --input squat.jsonl --thresholds deep_squat.json
//!
//! # List supported exercises
//! formcoach exercises
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use formcoach::logging::LoggingConfig;
use formcoach::replay::{read_frames, write_frames};
use formcoach::session::{SessionSummary, WorkoutSession};
use formcoach::synthetic::SyntheticSession;
use formcoach_core::config::EngineConfig;
use formcoach_core::models::{ExerciseType, FrameEvaluationResult};
use formcoach_engine::ExerciseThresholds;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "formcoach",
    version,
    about = "Exercise form evaluation from pose-landmark streams",
    long_about = "Counts reps, checks form, and scores sessions from 33-point pose frames \
                  stored as JSON Lines."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a recorded frame stream
    Evaluate {
        /// Exercise type or alias (e.g. squat, push_up, curl)
        #[arg(long, short = 'e')]
        exercise: String,

        /// JSON Lines file with one pose frame per line
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// JSON file overriding the exercise's thresholds
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print the result of every frame before the summary
        #[arg(long)]
        per_frame: bool,
    },

    /// Write a synthetic frame stream to stdout
    Simulate {
        /// Exercise type or alias
        #[arg(long, short = 'e')]
        exercise: String,

        /// Number of repetitions
        #[arg(long, default_value = "5")]
        reps: u32,

        /// Frames per second
        #[arg(long, default_value = "30")]
        fps: u32,

        /// Inject the exercise's typical form fault
        #[arg(long)]
        sloppy: bool,

        /// Landmark noise amplitude (normalized units)
        #[arg(long, default_value = "0.0015")]
        jitter: f64,

        /// Noise seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// List supported exercises and their aliases
    Exercises,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// One JSON document per line
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Evaluate {
            exercise,
            input,
            thresholds,
            format,
            per_frame,
        } => evaluate(&exercise, &input, thresholds.as_deref(), format, per_frame),
        Command::Simulate {
            exercise,
            reps,
            fps,
            sloppy,
            jitter,
            seed,
        } => simulate(&exercise, reps, fps, sloppy, jitter, seed),
        Command::Exercises => {
            list_exercises();
            Ok(())
        }
    }
}

fn parse_exercise(exercise: &str) -> Result<ExerciseType> {
    exercise.parse::<ExerciseType>().map_err(|e| {
        warn!(exercise = %exercise, "unknown exercise type requested");
        anyhow!(e)
    })
}

fn open_session(
    exercise: &str,
    thresholds: Option<&Path>,
    config: &EngineConfig,
) -> Result<WorkoutSession> {
    let Some(path) = thresholds else {
        return Ok(WorkoutSession::with_config(exercise, config)?);
    };
    let exercise = parse_exercise(exercise)?;
    let json = fs::read_to_string(path)
        .map_err(|e| anyhow!("failed to read thresholds {}: {e}", path.display()))?;
    let thresholds = ExerciseThresholds::from_json(exercise, &json)?;
    info!(exercise = %exercise, path = %path.display(), "custom thresholds loaded");
    Ok(WorkoutSession::with_thresholds(thresholds, config)?)
}

fn evaluate(
    exercise: &str,
    input: &Path,
    thresholds: Option<&Path>,
    format: OutputFormat,
    per_frame: bool,
) -> Result<()> {
    let config = EngineConfig::from_env()?;
    let mut session = open_session(exercise, thresholds, &config)?;
    let file = File::open(input)
        .map_err(|e| anyhow!("failed to open {}: {e}", input.display()))?;

    for frame in read_frames(BufReader::new(file)) {
        let result = session.process_frame(&frame?)?;
        if per_frame {
            print_frame(&result, format)?;
        }
    }

    let summary = session.finish();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        OutputFormat::Text => print_summary(&summary),
    }
    Ok(())
}

fn print_frame(result: &FrameEvaluationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
        OutputFormat::Text if !result.landmarks_detected => {
            println!(
                "{:>8}ms  {:<10} reps={:<3} pose not detected",
                result.timestamp_ms, result.phase, result.rep_count
            );
        }
        OutputFormat::Text => {
            println!(
                "{:>8}ms  {:<10} reps={:<3} score={:>3}  {}",
                result.timestamp_ms,
                result.phase,
                result.rep_count,
                result.score,
                result.feedback().join("; ")
            );
        }
    }
    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    let rep_scores = summary
        .rep_scores
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    println!("Session:        {}", summary.session_id);
    println!("Exercise:       {}", summary.exercise.display_name());
    println!(
        "Frames:         {} processed, {} detected ({} ms)",
        summary.frames_processed, summary.frames_detected, summary.stream_duration_ms
    );
    println!("Reps:           {}", summary.total_reps);
    println!("Overall score:  {}", summary.overall_score);
    println!("Rep scores:     {rep_scores}");
    println!(
        "Rep average:    {} (best {}, worst {})",
        summary.stats.average_score, summary.stats.best_score, summary.stats.worst_score
    );
    println!("Grade:          {}", summary.stats.grade);
    println!("Consistency:    {}", summary.stats.consistency);
    println!("Trend:          {}", summary.stats.trend);
}

fn simulate(
    exercise: &str,
    reps: u32,
    fps: u32,
    sloppy: bool,
    jitter: f64,
    seed: u64,
) -> Result<()> {
    let exercise = parse_exercise(exercise)?;
    let frames = SyntheticSession::new(exercise)
        .with_reps(reps)
        .with_fps(fps)
        .with_sloppy_form(sloppy)
        .with_jitter(jitter, seed)
        .frames();
    info!(exercise = %exercise, frames = frames.len(), "synthetic session generated");
    write_frames(io::stdout().lock(), &frames)?;
    Ok(())
}

fn list_exercises() {
    for exercise in ExerciseType::ALL {
        let aliases = exercise.aliases();
        if aliases.is_empty() {
            println!("{:<16}{}", exercise.as_str(), exercise.display_name());
        } else {
            println!(
                "{:<16}{:<16}aliases: {}",
                exercise.as_str(),
                exercise.display_name(),
                aliases.join(", ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_exercise_accepts_aliases() {
        assert_eq!(parse_exercise(" Curl ").unwrap(), ExerciseType::ArmCurl);
        assert_eq!(
            parse_exercise("overhead_press").unwrap(),
            ExerciseType::ShoulderPress
        );
    }

    #[test]
    fn test_parse_exercise_rejects_unknown() {
        let err = parse_exercise("burpee").unwrap_err();
        assert!(err.to_string().contains("burpee"));
    }

    #[test]
    fn test_cli_parses_evaluate_command() {
        let cli = Cli::try_parse_from([
            "formcoach", "evaluate", "-e", "squat", "-i", "squat.jsonl", "--format", "json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Evaluate {
                format: OutputFormat::Json,
                per_frame: false,
                ..
            }
        ));
    }
}
