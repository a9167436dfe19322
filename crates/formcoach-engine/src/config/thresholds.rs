// ABOUTME: Runtime-overridable threshold sets for each exercise evaluator
// ABOUTME: Defaults mirror the compile-time constants; validation rejects broken hysteresis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Exercise Thresholds
//!
//! Each evaluator owns one threshold set. Forward and regression triggers must
//! leave a gap between them (hysteresis) so a noisy joint hovering near one
//! boundary cannot flap between phases.

use formcoach_core::config::ConfigError;
use formcoach_core::constants::thresholds::{arm_curl, push_up, shoulder_press, side_raise, squat};
use formcoach_core::errors::{EngineError, EngineResult};
use formcoach_core::models::ExerciseType;
use serde::{Deserialize, Serialize};

/// Squat thresholds on the hip-knee-ankle angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquatThresholds {
    /// Standing at or above this knee angle
    pub standing_min_angle: f64,
    /// Descent starts below this angle
    pub descent_start_angle: f64,
    /// Bottom reached at or below this angle
    pub bottom_enter_angle: f64,
    /// Ascent starts above this angle
    pub ascent_start_angle: f64,
    /// Lowest acceptable knee angle at the bottom
    pub bottom_min_angle: f64,
    /// Highest acceptable knee angle at the bottom
    pub bottom_max_angle: f64,
    /// Minimum shoulder-hip-knee angle
    pub min_back_angle: f64,
    /// Allowed knee travel past the toe
    pub knee_toe_tolerance: f64,
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self {
            standing_min_angle: squat::STANDING_MIN_ANGLE,
            descent_start_angle: squat::DESCENT_START_ANGLE,
            bottom_enter_angle: squat::BOTTOM_ENTER_ANGLE,
            ascent_start_angle: squat::ASCENT_START_ANGLE,
            bottom_min_angle: squat::BOTTOM_MIN_ANGLE,
            bottom_max_angle: squat::BOTTOM_MAX_ANGLE,
            min_back_angle: squat::MIN_BACK_ANGLE,
            knee_toe_tolerance: squat::KNEE_TOE_TOLERANCE,
        }
    }
}

impl SquatThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cycle triggers overlap or a window is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_decreasing_cycle(
            self.standing_min_angle,
            self.descent_start_angle,
            self.ascent_start_angle,
            self.bottom_enter_angle,
        )?;
        validate_window(self.bottom_min_angle, self.bottom_max_angle)?;
        validate_angle(self.min_back_angle)?;
        validate_tolerance(self.knee_toe_tolerance)
    }
}

/// Push-up thresholds on the shoulder-elbow-wrist angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushUpThresholds {
    /// Up position at or above this elbow angle
    pub up_min_angle: f64,
    /// Descent starts below this angle
    pub descent_start_angle: f64,
    /// Bottom reached at or below this angle
    pub bottom_enter_angle: f64,
    /// Ascent starts above this angle
    pub ascent_start_angle: f64,
    /// Lowest acceptable elbow angle at the bottom
    pub bottom_min_angle: f64,
    /// Highest acceptable elbow angle at the bottom
    pub bottom_max_angle: f64,
    /// Minimum shoulder-hip-ankle angle
    pub min_body_line_angle: f64,
}

impl Default for PushUpThresholds {
    fn default() -> Self {
        Self {
            up_min_angle: push_up::UP_MIN_ANGLE,
            descent_start_angle: push_up::DESCENT_START_ANGLE,
            bottom_enter_angle: push_up::BOTTOM_ENTER_ANGLE,
            ascent_start_angle: push_up::ASCENT_START_ANGLE,
            bottom_min_angle: push_up::BOTTOM_MIN_ANGLE,
            bottom_max_angle: push_up::BOTTOM_MAX_ANGLE,
            min_body_line_angle: push_up::MIN_BODY_LINE_ANGLE,
        }
    }
}

impl PushUpThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cycle triggers overlap or a window is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_decreasing_cycle(
            self.up_min_angle,
            self.descent_start_angle,
            self.ascent_start_angle,
            self.bottom_enter_angle,
        )?;
        validate_window(self.bottom_min_angle, self.bottom_max_angle)?;
        validate_angle(self.min_body_line_angle)
    }
}

/// Arm curl thresholds on the shoulder-elbow-wrist angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmCurlThresholds {
    /// Arm extended at or above this elbow angle
    pub down_min_angle: f64,
    /// Curl starts below this angle
    pub curl_start_angle: f64,
    /// Top reached at or below this angle
    pub top_enter_angle: f64,
    /// Lowering starts above this angle
    pub lower_start_angle: f64,
    /// Lowest acceptable elbow angle at the top
    pub top_min_angle: f64,
    /// Highest acceptable elbow angle at the top
    pub top_max_angle: f64,
    /// Allowed vertical elbow drift from the rep's starting position
    pub elbow_drift_tolerance: f64,
}

impl Default for ArmCurlThresholds {
    fn default() -> Self {
        Self {
            down_min_angle: arm_curl::DOWN_MIN_ANGLE,
            curl_start_angle: arm_curl::CURL_START_ANGLE,
            top_enter_angle: arm_curl::TOP_ENTER_ANGLE,
            lower_start_angle: arm_curl::LOWER_START_ANGLE,
            top_min_angle: arm_curl::TOP_MIN_ANGLE,
            top_max_angle: arm_curl::TOP_MAX_ANGLE,
            elbow_drift_tolerance: arm_curl::ELBOW_DRIFT_TOLERANCE,
        }
    }
}

impl ArmCurlThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cycle triggers overlap or a window is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_decreasing_cycle(
            self.down_min_angle,
            self.curl_start_angle,
            self.lower_start_angle,
            self.top_enter_angle,
        )?;
        validate_window(self.top_min_angle, self.top_max_angle)?;
        validate_tolerance(self.elbow_drift_tolerance)
    }
}

/// Side raise thresholds on the mean shoulder-to-elbow elevation delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideRaiseThresholds {
    /// Arms down at or below this delta
    pub down_max_delta: f64,
    /// Raise starts above this delta
    pub raise_start_delta: f64,
    /// Top reached at or above this delta
    pub top_enter_delta: f64,
    /// Lowering starts below this delta
    pub lower_start_delta: f64,
    /// Allowed distance of each elbow from shoulder height at the top
    pub shoulder_height_tolerance: f64,
    /// Allowed vertical difference between the elbows
    pub symmetry_tolerance: f64,
}

impl Default for SideRaiseThresholds {
    fn default() -> Self {
        Self {
            down_max_delta: side_raise::DOWN_MAX_DELTA,
            raise_start_delta: side_raise::RAISE_START_DELTA,
            top_enter_delta: side_raise::TOP_ENTER_DELTA,
            lower_start_delta: side_raise::LOWER_START_DELTA,
            shoulder_height_tolerance: side_raise::SHOULDER_HEIGHT_TOLERANCE,
            symmetry_tolerance: side_raise::SYMMETRY_TOLERANCE,
        }
    }
}

impl SideRaiseThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cycle triggers overlap or a tolerance is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_increasing_cycle(
            self.down_max_delta,
            self.raise_start_delta,
            self.lower_start_delta,
            self.top_enter_delta,
        )?;
        validate_tolerance(self.shoulder_height_tolerance)?;
        validate_tolerance(self.symmetry_tolerance)
    }
}

/// Shoulder press thresholds on the mean shoulder-elbow-wrist angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoulderPressThresholds {
    /// Racked at or below this elbow angle
    pub down_max_angle: f64,
    /// Press starts above this angle
    pub press_start_angle: f64,
    /// Lockout reached at or above this angle
    pub top_enter_angle: f64,
    /// Lowering starts below this angle
    pub lower_start_angle: f64,
    /// Lowest acceptable lockout angle
    pub top_min_angle: f64,
    /// Highest acceptable lockout angle
    pub top_max_angle: f64,
}

impl Default for ShoulderPressThresholds {
    fn default() -> Self {
        Self {
            down_max_angle: shoulder_press::DOWN_MAX_ANGLE,
            press_start_angle: shoulder_press::PRESS_START_ANGLE,
            top_enter_angle: shoulder_press::TOP_ENTER_ANGLE,
            lower_start_angle: shoulder_press::LOWER_START_ANGLE,
            top_min_angle: shoulder_press::TOP_MIN_ANGLE,
            top_max_angle: shoulder_press::TOP_MAX_ANGLE,
        }
    }
}

impl ShoulderPressThresholds {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cycle triggers overlap or a window is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_increasing_cycle(
            self.down_max_angle,
            self.press_start_angle,
            self.lower_start_angle,
            self.top_enter_angle,
        )?;
        validate_window(self.top_min_angle, self.top_max_angle)
    }
}

/// Threshold set for any exercise, tagged by exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "exercise", rename_all = "snake_case")]
pub enum ExerciseThresholds {
    /// Squat thresholds
    Squat(SquatThresholds),
    /// Push-up thresholds
    PushUp(PushUpThresholds),
    /// Arm curl thresholds
    ArmCurl(ArmCurlThresholds),
    /// Side raise thresholds
    SideRaise(SideRaiseThresholds),
    /// Shoulder press thresholds
    ShoulderPress(ShoulderPressThresholds),
}

impl ExerciseThresholds {
    /// Default thresholds for an exercise
    #[must_use]
    pub fn defaults(exercise: ExerciseType) -> Self {
        match exercise {
            ExerciseType::Squat => Self::Squat(SquatThresholds::default()),
            ExerciseType::PushUp => Self::PushUp(PushUpThresholds::default()),
            ExerciseType::ArmCurl => Self::ArmCurl(ArmCurlThresholds::default()),
            ExerciseType::SideRaise => Self::SideRaise(SideRaiseThresholds::default()),
            ExerciseType::ShoulderPress => {
                Self::ShoulderPress(ShoulderPressThresholds::default())
            }
        }
    }

    /// Parse an untagged JSON threshold object for a known exercise
    ///
    /// Missing fields fall back to the defaults, so a file may override a
    /// single value.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if the JSON does not match the exercise's
    /// threshold fields or the resulting set fails validation
    pub fn from_json(exercise: ExerciseType, json: &str) -> EngineResult<Self> {
        let parse_error = |e: serde_json::Error| {
            EngineError::Config(ConfigError::Parse(format!("{exercise} thresholds: {e}")))
        };
        let thresholds = match exercise {
            ExerciseType::Squat => Self::Squat(serde_json::from_str(json).map_err(parse_error)?),
            ExerciseType::PushUp => {
                Self::PushUp(serde_json::from_str(json).map_err(parse_error)?)
            }
            ExerciseType::ArmCurl => {
                Self::ArmCurl(serde_json::from_str(json).map_err(parse_error)?)
            }
            ExerciseType::SideRaise => {
                Self::SideRaise(serde_json::from_str(json).map_err(parse_error)?)
            }
            ExerciseType::ShoulderPress => {
                Self::ShoulderPress(serde_json::from_str(json).map_err(parse_error)?)
            }
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Exercise these thresholds belong to
    #[must_use]
    pub const fn exercise(&self) -> ExerciseType {
        match self {
            Self::Squat(_) => ExerciseType::Squat,
            Self::PushUp(_) => ExerciseType::PushUp,
            Self::ArmCurl(_) => ExerciseType::ArmCurl,
            Self::SideRaise(_) => ExerciseType::SideRaise,
            Self::ShoulderPress(_) => ExerciseType::ShoulderPress,
        }
    }

    /// Validate the wrapped threshold set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` from the exercise-specific validation
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Squat(t) => t.validate(),
            Self::PushUp(t) => t.validate(),
            Self::ArmCurl(t) => t.validate(),
            Self::SideRaise(t) => t.validate(),
            Self::ShoulderPress(t) => t.validate(),
        }
    }
}

/// Cycle whose measurement falls from rest toward the extremity
fn validate_decreasing_cycle(
    rest: f64,
    leave_rest: f64,
    leave_extremity: f64,
    enter_extremity: f64,
) -> Result<(), ConfigError> {
    if !(enter_extremity < leave_rest && leave_rest < rest) {
        return Err(ConfigError::InvalidRange(
            "extremity trigger < rest-exit trigger < rest trigger is required",
        ));
    }
    if !(enter_extremity < leave_extremity && leave_extremity < rest) {
        return Err(ConfigError::InvalidRange(
            "extremity trigger < extremity-exit trigger < rest trigger is required",
        ));
    }
    Ok(())
}

/// Cycle whose measurement rises from rest toward the extremity
fn validate_increasing_cycle(
    rest: f64,
    leave_rest: f64,
    leave_extremity: f64,
    enter_extremity: f64,
) -> Result<(), ConfigError> {
    validate_decreasing_cycle(-rest, -leave_rest, -leave_extremity, -enter_extremity)
}

fn validate_window(min: f64, max: f64) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidRange("window minimum exceeds maximum"));
    }
    validate_angle(min)?;
    validate_angle(max)
}

fn validate_angle(angle: f64) -> Result<(), ConfigError> {
    if !(0.0..=180.0).contains(&angle) {
        return Err(ConfigError::ValueOutOfRange(
            "angles must be between 0 and 180 degrees",
        ));
    }
    Ok(())
}

fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(ConfigError::ValueOutOfRange(
            "tolerances must be finite and non-negative",
        ));
    }
    Ok(())
}
