// ABOUTME: Synthetic pose generation for demos, tests, and benchmarks without a camera
// ABOUTME: Builds 33-point frames from joint angles and plays back multi-rep sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

//! Synthetic Poses
//!
//! Pose constructors place the landmarks an evaluator reads so that the
//! measured joint angle (or elevation) equals the requested value exactly.
//! Side-view poses write the same coordinates to both body sides, so either
//! side can be evaluated. Everything else stays at a neutral standing pose.
//!
//! Coordinates are normalized image coordinates with y growing downward.

use formcoach_core::constants::landmarks::POSE_LANDMARK_COUNT;
use formcoach_core::models::{BodySide, ExerciseType, Landmark, Point2, PoseFrame, PoseLandmark};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Visibility assigned to every generated landmark
pub const SYNTHETIC_VISIBILITY: f64 = 0.9;

const NEUTRAL_POSE: [(f64, f64); POSE_LANDMARK_COUNT] = [
    (0.50, 0.15),
    (0.51, 0.13),
    (0.52, 0.13),
    (0.53, 0.13),
    (0.49, 0.13),
    (0.48, 0.13),
    (0.47, 0.13),
    (0.54, 0.14),
    (0.46, 0.14),
    (0.51, 0.17),
    (0.49, 0.17),
    (0.60, 0.30),
    (0.40, 0.30),
    (0.61, 0.45),
    (0.39, 0.45),
    (0.62, 0.58),
    (0.38, 0.58),
    (0.63, 0.61),
    (0.37, 0.61),
    (0.62, 0.62),
    (0.38, 0.62),
    (0.61, 0.60),
    (0.39, 0.60),
    (0.56, 0.55),
    (0.44, 0.55),
    (0.56, 0.70),
    (0.44, 0.70),
    (0.56, 0.85),
    (0.44, 0.85),
    (0.56, 0.87),
    (0.44, 0.87),
    (0.58, 0.90),
    (0.42, 0.90),
];

// Segment lengths in normalized units.
const SHIN: f64 = 0.20;
const THIGH: f64 = 0.22;
const TORSO: f64 = 0.30;
const UPPER_ARM: f64 = 0.13;
const FOREARM: f64 = 0.12;
const RAISE_ARM: f64 = 0.15;

/// Builder for a single 33-landmark frame
#[derive(Debug, Clone, PartialEq)]
pub struct PoseBuilder {
    landmarks: [Landmark; POSE_LANDMARK_COUNT],
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::standing()
    }
}

impl PoseBuilder {
    /// Neutral standing pose, arms at the sides, every landmark visible
    #[must_use]
    pub fn standing() -> Self {
        Self {
            landmarks: NEUTRAL_POSE.map(|(x, y)| Landmark::new(x, y, 0.0, SYNTHETIC_VISIBILITY)),
        }
    }

    /// Move one landmark, keeping its visibility
    #[must_use]
    pub fn set(mut self, landmark: PoseLandmark, point: Point2) -> Self {
        let target = &mut self.landmarks[landmark.index()];
        target.x = point.x;
        target.y = point.y;
        self
    }

    /// Move the left and right instance of a joint to the same point
    #[must_use]
    pub fn set_both(self, joint: fn(BodySide) -> PoseLandmark, point: Point2) -> Self {
        self.set(joint(BodySide::Left), point)
            .set(joint(BodySide::Right), point)
    }

    /// Override the detector confidence of one landmark
    #[must_use]
    pub fn visibility(mut self, landmark: PoseLandmark, visibility: f64) -> Self {
        self.landmarks[landmark.index()].visibility = visibility;
        self
    }

    /// Mark one landmark as undetected
    #[must_use]
    pub fn hide(self, landmark: PoseLandmark) -> Self {
        self.visibility(landmark, 0.0)
    }

    /// Displace every landmark by uniform noise of at most `amplitude`
    #[must_use]
    pub fn jitter<R: Rng>(mut self, rng: &mut R, amplitude: f64) -> Self {
        if amplitude > 0.0 {
            for landmark in &mut self.landmarks {
                landmark.x += rng.gen_range(-amplitude..=amplitude);
                landmark.y += rng.gen_range(-amplitude..=amplitude);
            }
        }
        self
    }

    /// Finish the frame
    #[must_use]
    pub const fn build(self, timestamp_ms: u64) -> PoseFrame {
        PoseFrame::new(timestamp_ms, self.landmarks)
    }
}

fn rotate(v: Point2, degrees: f64) -> Point2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point2::new(v.x.mul_add(cos, -v.y * sin), v.x.mul_add(sin, v.y * cos))
}

fn direction(from: Point2, to: Point2) -> Point2 {
    let length = from.distance_to(to);
    if length == 0.0 {
        return Point2::new(0.0, 1.0);
    }
    Point2::new((to.x - from.x) / length, (to.y - from.y) / length)
}

fn step(from: Point2, dir: Point2, length: f64) -> Point2 {
    Point2::new(dir.x.mul_add(length, from.x), dir.y.mul_add(length, from.y))
}

/// Squat seen from the side, athlete facing +x
///
/// `knee_angle` is hip-knee-ankle, `back_angle` is shoulder-hip-knee, and
/// `shin_lean` tilts the shin forward from vertical, in degrees. The toe sits
/// 0.08 ahead of the ankle, so leans beyond about 30 degrees push the knee
/// past the toe tolerance.
#[must_use]
pub fn squat_pose(knee_angle: f64, back_angle: f64, shin_lean: f64) -> PoseBuilder {
    let ankle = Point2::new(0.5, 0.85);
    let (lean_sin, lean_cos) = shin_lean.to_radians().sin_cos();
    let knee = step(ankle, Point2::new(lean_sin, -lean_cos), SHIN);
    let hip = step(knee, rotate(direction(knee, ankle), knee_angle), THIGH);
    let shoulder = step(hip, rotate(direction(hip, knee), -back_angle), TORSO);
    let toe = Point2::new(ankle.x + 0.08, ankle.y + 0.02);

    PoseBuilder::standing()
        .set_both(PoseLandmark::ankle, ankle)
        .set_both(PoseLandmark::knee, knee)
        .set_both(PoseLandmark::hip, hip)
        .set_both(PoseLandmark::shoulder, shoulder)
        .set_both(PoseLandmark::foot_index, toe)
        .set_both(PoseLandmark::elbow, Point2::new(shoulder.x + 0.12, shoulder.y + 0.04))
        .set_both(PoseLandmark::wrist, Point2::new(shoulder.x + 0.24, shoulder.y + 0.04))
        .set(PoseLandmark::Nose, Point2::new(shoulder.x + 0.03, shoulder.y - 0.12))
}

/// Push-up seen from the side, hands under the shoulders and feet toward -x
///
/// `elbow_angle` is shoulder-elbow-wrist; `hip_sag` bends the shoulder-hip-ankle
/// line away from straight by that many degrees.
#[must_use]
pub fn push_up_pose(elbow_angle: f64, hip_sag: f64) -> PoseBuilder {
    let wrist = Point2::new(0.6, 0.8);
    let elbow = Point2::new(wrist.x, wrist.y - FOREARM);
    let shoulder = step(elbow, rotate(direction(elbow, wrist), elbow_angle), UPPER_ARM);
    let body = direction(Point2::new(0.0, 0.0), Point2::new(-1.0, 0.25));
    let hip = step(shoulder, body, 0.25);
    let ankle = step(hip, rotate(body, hip_sag), 0.30);

    PoseBuilder::standing()
        .set_both(PoseLandmark::wrist, wrist)
        .set_both(PoseLandmark::elbow, elbow)
        .set_both(PoseLandmark::shoulder, shoulder)
        .set_both(PoseLandmark::hip, hip)
        .set_both(PoseLandmark::ankle, ankle)
        .set_both(PoseLandmark::knee, hip.midpoint(ankle))
        .set(PoseLandmark::Nose, Point2::new(shoulder.x + 0.06, shoulder.y + 0.02))
}

/// Arm curl seen from the side, athlete facing +x
///
/// `elbow_angle` is shoulder-elbow-wrist; `elbow_drift` raises the elbow from
/// its resting spot below the shoulder.
#[must_use]
pub fn arm_curl_pose(elbow_angle: f64, elbow_drift: f64) -> PoseBuilder {
    let shoulder = Point2::new(0.5, 0.3);
    let elbow = Point2::new(shoulder.x, shoulder.y + 0.15 - elbow_drift);
    let wrist = step(elbow, rotate(direction(elbow, shoulder), elbow_angle), FOREARM + 0.02);

    PoseBuilder::standing()
        .set_both(PoseLandmark::shoulder, shoulder)
        .set_both(PoseLandmark::elbow, elbow)
        .set_both(PoseLandmark::wrist, wrist)
}

/// Side raise seen from the front
///
/// Each delta is `shoulder.y - elbow.y` for that arm: about -0.15 with the arm
/// hanging, 0 at shoulder height.
#[must_use]
pub fn side_raise_pose(left_delta: f64, right_delta: f64) -> PoseBuilder {
    let left_shoulder = Point2::new(0.6, 0.3);
    let right_shoulder = Point2::new(0.4, 0.3);
    let arm = |shoulder: Point2, delta: f64, outward: f64| {
        let delta = delta.clamp(-RAISE_ARM, RAISE_ARM);
        let reach = RAISE_ARM.mul_add(RAISE_ARM, -delta * delta).sqrt();
        let elbow = Point2::new(outward.mul_add(reach, shoulder.x), shoulder.y - delta);
        let wrist = step(elbow, direction(shoulder, elbow), FOREARM);
        (elbow, wrist)
    };
    let (left_elbow, left_wrist) = arm(left_shoulder, left_delta, 1.0);
    let (right_elbow, right_wrist) = arm(right_shoulder, right_delta, -1.0);

    PoseBuilder::standing()
        .set(PoseLandmark::LeftShoulder, left_shoulder)
        .set(PoseLandmark::RightShoulder, right_shoulder)
        .set(PoseLandmark::LeftElbow, left_elbow)
        .set(PoseLandmark::RightElbow, right_elbow)
        .set(PoseLandmark::LeftWrist, left_wrist)
        .set(PoseLandmark::RightWrist, right_wrist)
}

/// Overhead press seen from the front, forearms vertical
///
/// Each angle is that arm's shoulder-elbow-wrist angle: about 90 with the
/// weights racked at the shoulders, 180 at lockout.
#[must_use]
pub fn shoulder_press_pose(left_elbow_angle: f64, right_elbow_angle: f64) -> PoseBuilder {
    let left_shoulder = Point2::new(0.6, 0.3);
    let right_shoulder = Point2::new(0.4, 0.3);
    let arm = |shoulder: Point2, elbow_angle: f64, outward: f64| {
        let (sin, cos) = (elbow_angle - 90.0).to_radians().sin_cos();
        let elbow = step(shoulder, Point2::new(outward * cos, -sin), UPPER_ARM);
        let wrist = Point2::new(elbow.x, elbow.y - FOREARM);
        (elbow, wrist)
    };
    let (left_elbow, left_wrist) = arm(left_shoulder, left_elbow_angle, 1.0);
    let (right_elbow, right_wrist) = arm(right_shoulder, right_elbow_angle, -1.0);

    PoseBuilder::standing()
        .set(PoseLandmark::LeftShoulder, left_shoulder)
        .set(PoseLandmark::RightShoulder, right_shoulder)
        .set(PoseLandmark::LeftElbow, left_elbow)
        .set(PoseLandmark::RightElbow, right_elbow)
        .set(PoseLandmark::LeftWrist, left_wrist)
        .set(PoseLandmark::RightWrist, right_wrist)
}

/// Multi-rep frame stream for one exercise
///
/// Each rep follows a cosine profile from the rest position to the extremity
/// and back, separated by rest holds. Sloppy form injects the exercise's
/// typical fault, growing with depth into the rep.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSession {
    exercise: ExerciseType,
    reps: u32,
    fps: u32,
    rep_duration_ms: u64,
    rest_duration_ms: u64,
    sloppy: bool,
    jitter: f64,
    seed: u64,
}

impl SyntheticSession {
    /// Five clean reps at 30 fps with light landmark noise
    #[must_use]
    pub const fn new(exercise: ExerciseType) -> Self {
        Self {
            exercise,
            reps: 5,
            fps: 30,
            rep_duration_ms: 2_000,
            rest_duration_ms: 500,
            sloppy: false,
            jitter: 0.0015,
            seed: 42,
        }
    }

    /// Number of repetitions
    #[must_use]
    pub const fn with_reps(mut self, reps: u32) -> Self {
        self.reps = reps;
        self
    }

    /// Frames per second (at least 1)
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Inject the exercise's typical form fault
    #[must_use]
    pub const fn with_sloppy_form(mut self, sloppy: bool) -> Self {
        self.sloppy = sloppy;
        self
    }

    /// Landmark noise amplitude and the seed that makes it reproducible
    #[must_use]
    pub const fn with_jitter(mut self, amplitude: f64, seed: u64) -> Self {
        self.jitter = amplitude;
        self.seed = seed;
        self
    }

    /// Exercise being generated
    #[must_use]
    pub const fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Every frame of the session in capture order
    #[must_use]
    pub fn frames(&self) -> Vec<PoseFrame> {
        let cycle_ms = self.rep_duration_ms + self.rest_duration_ms;
        let total_ms = self.rest_duration_ms + u64::from(self.reps) * cycle_ms;
        let fps = u64::from(self.fps);
        let frame_count = total_ms * fps / 1_000 + 1;
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..frame_count)
            .map(|index| {
                let timestamp_ms = index * 1_000 / fps;
                let depth = self.depth_at(timestamp_ms);
                self.pose_at(depth)
                    .jitter(&mut rng, self.jitter)
                    .build(timestamp_ms)
            })
            .collect()
    }

    /// How far into the rep the athlete is at `timestamp_ms`: 0 at rest, 1 at the extremity
    fn depth_at(&self, timestamp_ms: u64) -> f64 {
        let Some(local) = timestamp_ms.checked_sub(self.rest_duration_ms) else {
            return 0.0;
        };
        let cycle_ms = self.rep_duration_ms + self.rest_duration_ms;
        let rep = local / cycle_ms;
        let within = local % cycle_ms;
        if rep >= u64::from(self.reps) || within >= self.rep_duration_ms {
            return 0.0;
        }
        let progress = within as f64 / self.rep_duration_ms as f64;
        (1.0 - (TAU * progress).cos()) / 2.0
    }

    fn pose_at(&self, depth: f64) -> PoseBuilder {
        let lerp = |rest: f64, extremity: f64| (extremity - rest).mul_add(depth, rest);
        match (self.exercise, self.sloppy) {
            (ExerciseType::Squat, sloppy) => {
                let knee = lerp(175.0, 95.0);
                let lean = if sloppy { lerp(5.0, 40.0) } else { lerp(5.0, 15.0) };
                squat_pose(knee, knee.max(75.0), lean)
            }
            (ExerciseType::PushUp, sloppy) => {
                let sag = if sloppy { lerp(2.0, 20.0) } else { 2.0 };
                push_up_pose(lerp(175.0, 90.0), sag)
            }
            (ExerciseType::ArmCurl, sloppy) => {
                let drift = if sloppy { lerp(0.0, 0.08) } else { 0.0 };
                arm_curl_pose(lerp(170.0, 40.0), drift)
            }
            (ExerciseType::SideRaise, false) => {
                let delta = lerp(-0.15, 0.0);
                side_raise_pose(delta, delta)
            }
            (ExerciseType::SideRaise, true) => {
                side_raise_pose(lerp(-0.15, 0.02), lerp(-0.15, -0.06))
            }
            (ExerciseType::ShoulderPress, false) => {
                let angle = lerp(85.0, 172.0);
                shoulder_press_pose(angle, angle)
            }
            (ExerciseType::ShoulderPress, true) => {
                shoulder_press_pose(lerp(85.0, 172.0), lerp(85.0, 156.0))
            }
        }
    }
}
