// ABOUTME: Pure geometry primitives composed by every exercise evaluator
// ABOUTME: Joint angles, range and symmetry checks, elevation, line straightness, and drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Geometry helpers
//!
//! Deterministic, side-effect-free functions over 2D points in normalized image
//! coordinates. The y axis grows downward, so "above" means a smaller y.

use formcoach_core::models::Point2;
use serde::{Deserialize, Serialize};

/// Pass/fail outcome of a geometric rule with the value it measured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Whether the rule passed
    pub passed: bool,
    /// Measured value (degrees or normalized distance)
    pub value: f64,
}

impl Measurement {
    const fn new(passed: bool, value: f64) -> Self {
        Self { passed, value }
    }
}

/// Vertical position of a joint relative to a reference joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationCheck {
    /// Joint sits level with the reference, within tolerance
    pub level: bool,
    /// `reference.y - joint.y`: positive when the joint is above the reference
    pub delta: f64,
}

/// Angle at `vertex` formed by `a` and `c`, in degrees within [0, 180]
#[must_use]
pub fn calculate_angle(a: Point2, vertex: Point2, c: Point2) -> f64 {
    let radians = (c.y - vertex.y).atan2(c.x - vertex.x) - (a.y - vertex.y).atan2(a.x - vertex.x);
    let angle = radians.to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Inclusive window check
#[must_use]
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&value)
}

/// Vertical symmetry of two corresponding landmarks (e.g. left and right elbow)
#[must_use]
pub fn check_symmetry(left: Point2, right: Point2, tolerance: f64) -> Measurement {
    let difference = (left.y - right.y).abs();
    Measurement::new(difference <= tolerance, difference)
}

/// Signed height of `joint` above `reference`
#[must_use]
pub fn elevation_delta(joint: Point2, reference: Point2) -> f64 {
    reference.y - joint.y
}

/// Whether `joint` sits at the height of `reference`
#[must_use]
pub fn check_elevation(joint: Point2, reference: Point2, tolerance: f64) -> ElevationCheck {
    let delta = elevation_delta(joint, reference);
    ElevationCheck {
        level: delta.abs() <= tolerance,
        delta,
    }
}

/// Straightness of a line through three points that should be colinear
///
/// Passes when the angle at `middle` is at least `min_angle`.
#[must_use]
pub fn check_line_straightness(
    start: Point2,
    middle: Point2,
    end: Point2,
    min_angle: f64,
) -> Measurement {
    let angle = calculate_angle(start, middle, end);
    Measurement::new(angle >= min_angle, angle)
}

/// Vertical drift of a joint away from a reference position
#[must_use]
pub fn check_fixed_position(current: Point2, reference: Point2, tolerance: f64) -> Measurement {
    let drift = (current.y - reference.y).abs();
    Measurement::new(drift <= tolerance, drift)
}

/// Whether the wrist is above the nose; the value is the clearance
#[must_use]
pub fn check_wrist_above_head(wrist: Point2, nose: Point2) -> Measurement {
    let clearance = elevation_delta(wrist, nose);
    Measurement::new(clearance > 0.0, clearance)
}

/// How far the knee travels past the toe along the direction the foot points
///
/// Facing is taken from the ankle-to-toe direction, so the check works for
/// athletes filmed from either side.
#[must_use]
pub fn check_knee_over_toe(
    knee: Point2,
    toe: Point2,
    ankle: Point2,
    tolerance: f64,
) -> Measurement {
    let facing = if toe.x >= ankle.x { 1.0 } else { -1.0 };
    let overshoot = (knee.x - toe.x) * facing;
    Measurement::new(overshoot <= tolerance, overshoot)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn test_colinear_points_are_straight() {
        let angle = calculate_angle(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0));
        assert!((angle - 180.0).abs() < EPSILON, "got {angle}");
    }

    #[test]
    fn test_perpendicular_points_are_right_angle() {
        let angle = calculate_angle(p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5));
        assert!((angle - 90.0).abs() < EPSILON, "got {angle}");
    }

    #[test]
    fn test_angle_symmetric_under_outer_swap() {
        let (a, b, c) = (p(0.1, 0.7), p(0.4, 0.4), p(0.9, 0.55));
        let forward = calculate_angle(a, b, c);
        let swapped = calculate_angle(c, b, a);
        assert!((forward - swapped).abs() < EPSILON);
        assert!((0.0..=180.0).contains(&forward));
    }

    #[test]
    fn test_reflex_angles_fold_into_half_turn() {
        // Rays at +170 and -170 degrees: the raw difference is 340
        let a = p(-0.984_807_753_012_208, 0.173_648_177_666_930);
        let c = p(-0.984_807_753_012_208, -0.173_648_177_666_930);
        let angle = calculate_angle(a, p(0.0, 0.0), c);
        assert!((angle - 20.0).abs() < 1e-6, "got {angle}");
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(is_in_range(90.0, 90.0, 110.0));
        assert!(is_in_range(110.0, 90.0, 110.0));
        assert!(!is_in_range(110.1, 90.0, 110.0));
    }

    #[test]
    fn test_symmetry_within_tolerance() {
        let check = check_symmetry(p(0.3, 0.40), p(0.7, 0.43), 0.05);
        assert!(check.passed);
        assert!((check.value - 0.03).abs() < EPSILON);
        assert!(!check_symmetry(p(0.3, 0.40), p(0.7, 0.50), 0.05).passed);
    }

    #[test]
    fn test_elevation_reports_signed_delta() {
        let level = check_elevation(p(0.2, 0.28), p(0.4, 0.30), 0.05);
        assert!(level.level);
        assert!((level.delta - 0.02).abs() < EPSILON);

        let lowered = check_elevation(p(0.2, 0.45), p(0.4, 0.30), 0.05);
        assert!(!lowered.level);
        assert!((lowered.delta + 0.15).abs() < EPSILON);

        let overhead = check_elevation(p(0.2, 0.20), p(0.4, 0.30), 0.05);
        assert!(!overhead.level);
        assert!(overhead.delta > 0.0);
    }

    #[test]
    fn test_line_straightness_threshold() {
        let straight = check_line_straightness(p(0.2, 0.5), p(0.5, 0.5), p(0.8, 0.5), 170.0);
        assert!(straight.passed);
        let sagging = check_line_straightness(p(0.2, 0.5), p(0.5, 0.6), p(0.8, 0.5), 170.0);
        assert!(!sagging.passed);
    }

    #[test]
    fn test_fixed_position_measures_vertical_drift() {
        let check = check_fixed_position(p(0.52, 0.40), p(0.50, 0.45), 0.03);
        assert!(!check.passed);
        assert!((check.value - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_wrist_above_head() {
        assert!(check_wrist_above_head(p(0.5, 0.05), p(0.5, 0.15)).passed);
        assert!(!check_wrist_above_head(p(0.5, 0.20), p(0.5, 0.15)).passed);
    }

    #[test]
    fn test_knee_over_toe_respects_facing() {
        let ankle = p(0.50, 0.85);
        let toe_right = p(0.58, 0.87);
        assert!(check_knee_over_toe(p(0.55, 0.65), toe_right, ankle, 0.02).passed);
        assert!(!check_knee_over_toe(p(0.62, 0.65), toe_right, ankle, 0.02).passed);

        let toe_left = p(0.42, 0.87);
        assert!(check_knee_over_toe(p(0.45, 0.65), toe_left, ankle, 0.02).passed);
        assert!(!check_knee_over_toe(p(0.38, 0.65), toe_left, ankle, 0.02).passed);
    }
}
