// ABOUTME: Exercise identifiers and their per-exercise phase enums
// ABOUTME: ExercisePhase is the sum type carried by results from any evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Contributors

use super::landmark::{BodySide, PoseLandmark};
use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

/// Exercises the engine can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Bodyweight or loaded squat, viewed from the side
    Squat,
    /// Push-up, viewed from the side
    PushUp,
    /// Standing biceps curl, viewed from the side
    ArmCurl,
    /// Lateral (side) raise, viewed from the front
    SideRaise,
    /// Standing overhead press, viewed from the front
    ShoulderPress,
}

impl ExerciseType {
    /// Every supported exercise
    pub const ALL: [Self; 5] = [
        Self::Squat,
        Self::PushUp,
        Self::ArmCurl,
        Self::SideRaise,
        Self::ShoulderPress,
    ];

    /// Canonical identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::PushUp => "push_up",
            Self::ArmCurl => "arm_curl",
            Self::SideRaise => "side_raise",
            Self::ShoulderPress => "shoulder_press",
        }
    }

    /// Alternative identifiers accepted when parsing
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Squat => &[],
            Self::PushUp => &["pushup", "push-up"],
            Self::ArmCurl => &["bicep_curl", "curl"],
            Self::SideRaise => &["lateral_raise"],
            Self::ShoulderPress => &["overhead_press"],
        }
    }

    /// Display name for reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::PushUp => "Push-up",
            Self::ArmCurl => "Arm Curl",
            Self::SideRaise => "Side Raise",
            Self::ShoulderPress => "Shoulder Press",
        }
    }

    /// Landmarks that must be visible for a frame to be evaluated
    ///
    /// Side-view exercises track one body side; frontal exercises ignore `side`
    /// and require both arms.
    #[must_use]
    pub const fn required_landmarks(self, side: BodySide) -> &'static [PoseLandmark] {
        match (self, side) {
            (Self::Squat, BodySide::Left) => &SQUAT_LEFT,
            (Self::Squat, BodySide::Right) => &SQUAT_RIGHT,
            (Self::PushUp, BodySide::Left) => &PUSH_UP_LEFT,
            (Self::PushUp, BodySide::Right) => &PUSH_UP_RIGHT,
            (Self::ArmCurl, BodySide::Left) => &ARM_CURL_LEFT,
            (Self::ArmCurl, BodySide::Right) => &ARM_CURL_RIGHT,
            (Self::SideRaise, _) => &SIDE_RAISE,
            (Self::ShoulderPress, _) => &SHOULDER_PRESS,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|exercise| {
                exercise.as_str() == normalized || exercise.aliases().contains(&normalized.as_str())
            })
            .ok_or_else(|| EngineError::unknown_exercise(s.trim()))
    }
}

use PoseLandmark as L;

const SQUAT_LEFT: [PoseLandmark; 5] = [
    L::LeftShoulder,
    L::LeftHip,
    L::LeftKnee,
    L::LeftAnkle,
    L::LeftFootIndex,
];
const SQUAT_RIGHT: [PoseLandmark; 5] = [
    L::RightShoulder,
    L::RightHip,
    L::RightKnee,
    L::RightAnkle,
    L::RightFootIndex,
];
const PUSH_UP_LEFT: [PoseLandmark; 5] = [
    L::LeftShoulder,
    L::LeftElbow,
    L::LeftWrist,
    L::LeftHip,
    L::LeftAnkle,
];
const PUSH_UP_RIGHT: [PoseLandmark; 5] = [
    L::RightShoulder,
    L::RightElbow,
    L::RightWrist,
    L::RightHip,
    L::RightAnkle,
];
const ARM_CURL_LEFT: [PoseLandmark; 3] = [L::LeftShoulder, L::LeftElbow, L::LeftWrist];
const ARM_CURL_RIGHT: [PoseLandmark; 3] = [L::RightShoulder, L::RightElbow, L::RightWrist];
const SIDE_RAISE: [PoseLandmark; 4] = [
    L::LeftShoulder,
    L::RightShoulder,
    L::LeftElbow,
    L::RightElbow,
];
const SHOULDER_PRESS: [PoseLandmark; 7] = [
    L::Nose,
    L::LeftShoulder,
    L::RightShoulder,
    L::LeftElbow,
    L::RightElbow,
    L::LeftWrist,
    L::RightWrist,
];

/// Position within one repetition cycle of a specific exercise
pub trait Phase: Copy + Eq + Debug + Into<ExercisePhase> {
    /// Rest position the cycle starts from and returns to
    const REST: Self;

    /// Whether this is the extremity (top or bottom) where form is judged
    fn is_extremity(self) -> bool;

    /// Lower-case label for logs and reports
    fn label(self) -> &'static str;
}

macro_rules! exercise_phase {
    (
        $(#[$meta:meta])*
        $name:ident, $variant:ident, rest = $rest:ident, extremity = $extremity:ident,
        [$($phase:ident => $label:literal: $doc:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(
                #[doc = $doc]
                $phase,
            )+
        }

        impl Phase for $name {
            const REST: Self = Self::$rest;

            fn is_extremity(self) -> bool {
                self == Self::$extremity
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$phase => $label,)+
                }
            }
        }

        impl From<$name> for ExercisePhase {
            fn from(phase: $name) -> Self {
                Self::$variant(phase)
            }
        }
    };
}

exercise_phase!(
    /// Squat cycle: Standing -> Descending -> Bottom -> Ascending -> Standing
    SquatPhase, Squat, rest = Standing, extremity = Bottom,
    [
        Standing => "standing": "Upright, knees extended",
        Descending => "descending": "Lowering toward the bottom",
        Bottom => "bottom": "Deepest point of the squat",
        Ascending => "ascending": "Driving back up",
    ]
);

exercise_phase!(
    /// Push-up cycle: Up -> Descending -> Bottom -> Ascending -> Up
    PushUpPhase, PushUp, rest = Up, extremity = Bottom,
    [
        Up => "up": "Arms extended in plank",
        Descending => "descending": "Lowering the chest",
        Bottom => "bottom": "Chest at the lowest point",
        Ascending => "ascending": "Pressing back up",
    ]
);

exercise_phase!(
    /// Arm curl cycle: Down -> Curling -> Top -> Lowering -> Down
    ArmCurlPhase, ArmCurl, rest = Down, extremity = Top,
    [
        Down => "down": "Arm extended at the side",
        Curling => "curling": "Flexing the elbow",
        Top => "top": "Fully curled",
        Lowering => "lowering": "Extending back down",
    ]
);

exercise_phase!(
    /// Side raise cycle: Down -> Raising -> Top -> Lowering -> Down
    SideRaisePhase, SideRaise, rest = Down, extremity = Top,
    [
        Down => "down": "Arms hanging at the sides",
        Raising => "raising": "Lifting the arms outward",
        Top => "top": "Elbows at shoulder height",
        Lowering => "lowering": "Returning the arms down",
    ]
);

exercise_phase!(
    /// Shoulder press cycle: Down -> Pressing -> Top -> Lowering -> Down
    ShoulderPressPhase, ShoulderPress, rest = Down, extremity = Top,
    [
        Down => "down": "Weights racked at the shoulders",
        Pressing => "pressing": "Driving overhead",
        Top => "top": "Arms locked out overhead",
        Lowering => "lowering": "Returning to the shoulders",
    ]
);

/// Current phase of any evaluator, tagged by exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "exercise", content = "phase", rename_all = "snake_case")]
pub enum ExercisePhase {
    /// Squat phase
    Squat(SquatPhase),
    /// Push-up phase
    PushUp(PushUpPhase),
    /// Arm curl phase
    ArmCurl(ArmCurlPhase),
    /// Side raise phase
    SideRaise(SideRaisePhase),
    /// Shoulder press phase
    ShoulderPress(ShoulderPressPhase),
}

impl ExercisePhase {
    /// Exercise this phase belongs to
    #[must_use]
    pub const fn exercise(self) -> ExerciseType {
        match self {
            Self::Squat(_) => ExerciseType::Squat,
            Self::PushUp(_) => ExerciseType::PushUp,
            Self::ArmCurl(_) => ExerciseType::ArmCurl,
            Self::SideRaise(_) => ExerciseType::SideRaise,
            Self::ShoulderPress(_) => ExerciseType::ShoulderPress,
        }
    }

    /// Lower-case phase label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Squat(phase) => phase.label(),
            Self::PushUp(phase) => phase.label(),
            Self::ArmCurl(phase) => phase.label(),
            Self::SideRaise(phase) => phase.label(),
            Self::ShoulderPress(phase) => phase.label(),
        }
    }

    /// Whether this is the exercise's rest position
    #[must_use]
    pub fn is_rest(self) -> bool {
        match self {
            Self::Squat(phase) => phase == SquatPhase::REST,
            Self::PushUp(phase) => phase == PushUpPhase::REST,
            Self::ArmCurl(phase) => phase == ArmCurlPhase::REST,
            Self::SideRaise(phase) => phase == SideRaisePhase::REST,
            Self::ShoulderPress(phase) => phase == ShoulderPressPhase::REST,
        }
    }
}

impl fmt::Display for ExercisePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
