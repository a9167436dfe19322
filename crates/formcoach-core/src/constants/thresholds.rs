// ABOUTME: Phase-transition and form-check thresholds for every supported exercise
// ABOUTME: Angles are in degrees, positional deltas in normalized frame units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

/// Squat thresholds, measured on the hip-knee-ankle angle
pub mod squat {
    /// Knee angle at or above which the athlete is standing
    pub const STANDING_MIN_ANGLE: f64 = 160.0;
    /// Knee angle below which a descent starts
    pub const DESCENT_START_ANGLE: f64 = 150.0;
    /// Knee angle at or below which the bottom is reached
    pub const BOTTOM_ENTER_ANGLE: f64 = 110.0;
    /// Knee angle above which the ascent starts
    pub const ASCENT_START_ANGLE: f64 = 120.0;
    /// Lower bound of the acceptable knee angle at the bottom
    pub const BOTTOM_MIN_ANGLE: f64 = 90.0;
    /// Upper bound of the acceptable knee angle at the bottom
    pub const BOTTOM_MAX_ANGLE: f64 = 110.0;
    /// Minimum shoulder-hip-knee angle before the chest is collapsing
    pub const MIN_BACK_ANGLE: f64 = 60.0;
    /// Horizontal distance the knee may travel past the toe
    pub const KNEE_TOE_TOLERANCE: f64 = 0.02;
}

/// Push-up thresholds, measured on the shoulder-elbow-wrist angle
pub mod push_up {
    /// Elbow angle at or above which the athlete is in the up position
    pub const UP_MIN_ANGLE: f64 = 160.0;
    /// Elbow angle below which a descent starts
    pub const DESCENT_START_ANGLE: f64 = 150.0;
    /// Elbow angle at or below which the bottom is reached
    pub const BOTTOM_ENTER_ANGLE: f64 = 100.0;
    /// Elbow angle above which the ascent starts
    pub const ASCENT_START_ANGLE: f64 = 110.0;
    /// Lower bound of the acceptable elbow angle at the bottom
    pub const BOTTOM_MIN_ANGLE: f64 = 80.0;
    /// Upper bound of the acceptable elbow angle at the bottom
    pub const BOTTOM_MAX_ANGLE: f64 = 100.0;
    /// Minimum shoulder-hip-ankle angle for a straight body line
    pub const MIN_BODY_LINE_ANGLE: f64 = 170.0;
}

/// Arm curl thresholds, measured on the shoulder-elbow-wrist angle (smaller is more curled)
pub mod arm_curl {
    /// Elbow angle at or above which the arm is extended
    pub const DOWN_MIN_ANGLE: f64 = 150.0;
    /// Elbow angle below which the curl starts
    pub const CURL_START_ANGLE: f64 = 140.0;
    /// Elbow angle at or below which the top is reached
    pub const TOP_ENTER_ANGLE: f64 = 50.0;
    /// Elbow angle above which lowering starts
    pub const LOWER_START_ANGLE: f64 = 60.0;
    /// Lower bound of the acceptable elbow angle at the top
    pub const TOP_MIN_ANGLE: f64 = 30.0;
    /// Upper bound of the acceptable elbow angle at the top
    pub const TOP_MAX_ANGLE: f64 = 50.0;
    /// Maximum vertical elbow drift from the rep's starting position.
    /// Product-tunable; no biomechanical derivation behind the value.
    pub const ELBOW_DRIFT_TOLERANCE: f64 = 0.05;
}

/// Side raise thresholds, measured on the shoulder-to-elbow elevation delta
/// (`shoulder.y - elbow.y`, positive when the elbow is above the shoulder)
pub mod side_raise {
    /// Delta at or below which the arms are down
    pub const DOWN_MAX_DELTA: f64 = -0.10;
    /// Delta above which the raise starts
    pub const RAISE_START_DELTA: f64 = -0.08;
    /// Delta at or above which the top is reached
    pub const TOP_ENTER_DELTA: f64 = -0.03;
    /// Delta below which lowering starts
    pub const LOWER_START_DELTA: f64 = -0.05;
    /// Allowed distance of each elbow from shoulder height at the top
    pub const SHOULDER_HEIGHT_TOLERANCE: f64 = 0.05;
    /// Allowed vertical difference between left and right elbows.
    /// Product-tunable; no biomechanical derivation behind the value.
    pub const SYMMETRY_TOLERANCE: f64 = 0.05;
}

/// Shoulder press thresholds, measured on the mean shoulder-elbow-wrist angle of both arms
pub mod shoulder_press {
    /// Elbow angle at or below which the weights are racked at the shoulders
    pub const DOWN_MAX_ANGLE: f64 = 100.0;
    /// Elbow angle above which the press starts
    pub const PRESS_START_ANGLE: f64 = 110.0;
    /// Elbow angle at or above which lockout is reached
    pub const TOP_ENTER_ANGLE: f64 = 160.0;
    /// Elbow angle below which lowering starts
    pub const LOWER_START_ANGLE: f64 = 150.0;
    /// Lower bound of the acceptable lockout angle
    pub const TOP_MIN_ANGLE: f64 = 160.0;
    /// Upper bound of the acceptable lockout angle
    pub const TOP_MAX_ANGLE: f64 = 180.0;
}
