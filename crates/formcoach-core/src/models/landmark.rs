// ABOUTME: Pose landmark model: the 33 anatomical indices, body sides, and frame container
// ABOUTME: Frames are read-only inputs produced by the on-device pose detector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use crate::constants::landmarks::POSE_LANDMARK_COUNT;
use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Anatomical landmark indices produced by the pose model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseLandmark {
    /// Nose tip
    Nose = 0,
    /// Inner corner of the left eye
    LeftEyeInner = 1,
    /// Left eye
    LeftEye = 2,
    /// Outer corner of the left eye
    LeftEyeOuter = 3,
    /// Inner corner of the right eye
    RightEyeInner = 4,
    /// Right eye
    RightEye = 5,
    /// Outer corner of the right eye
    RightEyeOuter = 6,
    /// Left ear
    LeftEar = 7,
    /// Right ear
    RightEar = 8,
    /// Left mouth corner
    MouthLeft = 9,
    /// Right mouth corner
    MouthRight = 10,
    /// Left shoulder
    LeftShoulder = 11,
    /// Right shoulder
    RightShoulder = 12,
    /// Left elbow
    LeftElbow = 13,
    /// Right elbow
    RightElbow = 14,
    /// Left wrist
    LeftWrist = 15,
    /// Right wrist
    RightWrist = 16,
    /// Left pinky knuckle
    LeftPinky = 17,
    /// Right pinky knuckle
    RightPinky = 18,
    /// Left index knuckle
    LeftIndex = 19,
    /// Right index knuckle
    RightIndex = 20,
    /// Left thumb
    LeftThumb = 21,
    /// Right thumb
    RightThumb = 22,
    /// Left hip
    LeftHip = 23,
    /// Right hip
    RightHip = 24,
    /// Left knee
    LeftKnee = 25,
    /// Right knee
    RightKnee = 26,
    /// Left ankle
    LeftAnkle = 27,
    /// Right ankle
    RightAnkle = 28,
    /// Left heel
    LeftHeel = 29,
    /// Right heel
    RightHeel = 30,
    /// Left foot index (toe)
    LeftFootIndex = 31,
    /// Right foot index (toe)
    RightFootIndex = 32,
}

impl PoseLandmark {
    /// All landmarks in model index order
    pub const ALL: [Self; POSE_LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    const NAMES: [&'static str; POSE_LANDMARK_COUNT] = [
        "nose",
        "left_eye_inner",
        "left_eye",
        "left_eye_outer",
        "right_eye_inner",
        "right_eye",
        "right_eye_outer",
        "left_ear",
        "right_ear",
        "mouth_left",
        "mouth_right",
        "left_shoulder",
        "right_shoulder",
        "left_elbow",
        "right_elbow",
        "left_wrist",
        "right_wrist",
        "left_pinky",
        "right_pinky",
        "left_index",
        "right_index",
        "left_thumb",
        "right_thumb",
        "left_hip",
        "right_hip",
        "left_knee",
        "right_knee",
        "left_ankle",
        "right_ankle",
        "left_heel",
        "right_heel",
        "left_foot_index",
        "right_foot_index",
    ];

    /// Position of this landmark in a frame
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name, matching the serialized form
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Landmark at a model index, if the index is in range
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Shoulder on the given side
    #[must_use]
    pub const fn shoulder(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftShoulder,
            BodySide::Right => Self::RightShoulder,
        }
    }

    /// Elbow on the given side
    #[must_use]
    pub const fn elbow(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftElbow,
            BodySide::Right => Self::RightElbow,
        }
    }

    /// Wrist on the given side
    #[must_use]
    pub const fn wrist(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftWrist,
            BodySide::Right => Self::RightWrist,
        }
    }

    /// Hip on the given side
    #[must_use]
    pub const fn hip(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftHip,
            BodySide::Right => Self::RightHip,
        }
    }

    /// Knee on the given side
    #[must_use]
    pub const fn knee(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftKnee,
            BodySide::Right => Self::RightKnee,
        }
    }

    /// Ankle on the given side
    #[must_use]
    pub const fn ankle(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftAnkle,
            BodySide::Right => Self::RightAnkle,
        }
    }

    /// Foot index (toe) on the given side
    #[must_use]
    pub const fn foot_index(side: BodySide) -> Self {
        match side {
            BodySide::Left => Self::LeftFootIndex,
            BodySide::Right => Self::RightFootIndex,
        }
    }
}

impl fmt::Display for PoseLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body side evaluated by side-view exercises
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySide {
    /// Athlete's left side
    #[default]
    Left,
    /// Athlete's right side
    Right,
}

/// A single detected body point
///
/// `x` and `y` are normalized to the image (0-1, y grows downward), `z` is
/// relative depth, and `visibility` is the detector's confidence (0-1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized
    pub x: f64,
    /// Vertical position, normalized (grows downward)
    pub y: f64,
    /// Relative depth
    #[serde(default)]
    pub z: f64,
    /// Detection confidence
    pub visibility: f64,
}

impl Landmark {
    /// Create a landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self { x, y, z, visibility }
    }

    /// Whether the detector's confidence in this point is above `min_visibility`
    ///
    /// A point exactly at the floor is not visible.
    #[must_use]
    pub fn is_visible(&self, min_visibility: f64) -> bool {
        self.visibility > min_visibility
    }

    /// 2D projection used by the geometry helpers
    #[must_use]
    pub const fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// 2D point in normalized image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal position
    pub x: f64,
    /// Vertical position (grows downward)
    pub y: f64,
}

impl Point2 {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two points
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<Landmark> for Point2 {
    fn from(landmark: Landmark) -> Self {
        landmark.point()
    }
}

/// One complete set of 33 landmarks captured at a single instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PoseFrameRecord", into = "PoseFrameRecord")]
pub struct PoseFrame {
    timestamp_ms: u64,
    landmarks: [Landmark; POSE_LANDMARK_COUNT],
}

impl PoseFrame {
    /// Create a frame from a complete landmark array
    #[must_use]
    pub const fn new(timestamp_ms: u64, landmarks: [Landmark; POSE_LANDMARK_COUNT]) -> Self {
        Self {
            timestamp_ms,
            landmarks,
        }
    }

    /// Create a frame from a landmark list of unknown length
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidFrame` if the list does not hold exactly 33 landmarks
    pub fn from_vec(timestamp_ms: u64, landmarks: Vec<Landmark>) -> Result<Self, EngineError> {
        let actual = landmarks.len();
        let landmarks: [Landmark; POSE_LANDMARK_COUNT] =
            landmarks
                .try_into()
                .map_err(|_| EngineError::InvalidFrame {
                    expected: POSE_LANDMARK_COUNT,
                    actual,
                })?;
        Ok(Self::new(timestamp_ms, landmarks))
    }

    /// Capture timestamp in milliseconds
    #[must_use]
    pub const fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// All landmarks in model index order
    #[must_use]
    pub const fn landmarks(&self) -> &[Landmark; POSE_LANDMARK_COUNT] {
        &self.landmarks
    }

    /// A single landmark
    #[must_use]
    pub const fn landmark(&self, landmark: PoseLandmark) -> &Landmark {
        &self.landmarks[landmark.index()]
    }

    /// 2D position of a single landmark
    #[must_use]
    pub const fn point(&self, landmark: PoseLandmark) -> Point2 {
        self.landmarks[landmark.index()].point()
    }

    /// Required landmarks whose visibility falls below `min_visibility`
    #[must_use]
    pub fn missing_landmarks(
        &self,
        required: &[PoseLandmark],
        min_visibility: f64,
    ) -> Vec<PoseLandmark> {
        required
            .iter()
            .copied()
            .filter(|landmark| !self.landmark(*landmark).is_visible(min_visibility))
            .collect()
    }

    /// Whether every required landmark is visible enough to evaluate
    #[must_use]
    pub fn has_visible(&self, required: &[PoseLandmark], min_visibility: f64) -> bool {
        required
            .iter()
            .all(|landmark| self.landmark(*landmark).is_visible(min_visibility))
    }
}

/// Wire shape of a frame: landmark count is validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PoseFrameRecord {
    timestamp_ms: u64,
    landmarks: Vec<Landmark>,
}

impl TryFrom<PoseFrameRecord> for PoseFrame {
    type Error = EngineError;

    fn try_from(record: PoseFrameRecord) -> Result<Self, Self::Error> {
        Self::from_vec(record.timestamp_ms, record.landmarks)
    }
}

impl From<PoseFrame> for PoseFrameRecord {
    fn from(frame: PoseFrame) -> Self {
        Self {
            timestamp_ms: frame.timestamp_ms,
            landmarks: frame.landmarks.to_vec(),
        }
    }
}
