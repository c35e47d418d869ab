use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Handedness;

/// Number of joints tracked per hand
pub const HAND_JOINT_COUNT: usize = 26;

/// The joints of a tracked hand.
///
/// Ordered exactly as `XR_EXT_hand_tracking` orders them, so a joint's [`HandJoint::index`] can be
/// used directly against the array returned by the OpenXR runtime. Serialized using the WebXR joint names.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum HandJoint {
    #[serde(rename = "palm")]
    Palm,
    #[serde(rename = "wrist")]
    Wrist,
    #[serde(rename = "thumb-metacarpal")]
    ThumbMetacarpal,
    #[serde(rename = "thumb-phalanx-proximal")]
    ThumbProximal,
    #[serde(rename = "thumb-phalanx-distal")]
    ThumbDistal,
    #[serde(rename = "thumb-tip")]
    ThumbTip,
    #[serde(rename = "index-finger-metacarpal")]
    IndexMetacarpal,
    #[serde(rename = "index-finger-phalanx-proximal")]
    IndexProximal,
    #[serde(rename = "index-finger-phalanx-intermediate")]
    IndexIntermediate,
    #[serde(rename = "index-finger-phalanx-distal")]
    IndexDistal,
    #[serde(rename = "index-finger-tip")]
    IndexTip,
    #[serde(rename = "middle-finger-metacarpal")]
    MiddleMetacarpal,
    #[serde(rename = "middle-finger-phalanx-proximal")]
    MiddleProximal,
    #[serde(rename = "middle-finger-phalanx-intermediate")]
    MiddleIntermediate,
    #[serde(rename = "middle-finger-phalanx-distal")]
    MiddleDistal,
    #[serde(rename = "middle-finger-tip")]
    MiddleTip,
    #[serde(rename = "ring-finger-metacarpal")]
    RingMetacarpal,
    #[serde(rename = "ring-finger-phalanx-proximal")]
    RingProximal,
    #[serde(rename = "ring-finger-phalanx-intermediate")]
    RingIntermediate,
    #[serde(rename = "ring-finger-phalanx-distal")]
    RingDistal,
    #[serde(rename = "ring-finger-tip")]
    RingTip,
    #[serde(rename = "pinky-finger-metacarpal")]
    LittleMetacarpal,
    #[serde(rename = "pinky-finger-phalanx-proximal")]
    LittleProximal,
    #[serde(rename = "pinky-finger-phalanx-intermediate")]
    LittleIntermediate,
    #[serde(rename = "pinky-finger-phalanx-distal")]
    LittleDistal,
    #[serde(rename = "pinky-finger-tip")]
    LittleTip,
}

impl HandJoint {
    /// Index of this joint in an OpenXR `HandJointLocations` array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of the joint, as used in scripts and logs. Matches the WebXR joint names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Palm => "palm",
            Self::Wrist => "wrist",
            Self::ThumbMetacarpal => "thumb-metacarpal",
            Self::ThumbProximal => "thumb-phalanx-proximal",
            Self::ThumbDistal => "thumb-phalanx-distal",
            Self::ThumbTip => "thumb-tip",
            Self::IndexMetacarpal => "index-finger-metacarpal",
            Self::IndexProximal => "index-finger-phalanx-proximal",
            Self::IndexIntermediate => "index-finger-phalanx-intermediate",
            Self::IndexDistal => "index-finger-phalanx-distal",
            Self::IndexTip => "index-finger-tip",
            Self::MiddleMetacarpal => "middle-finger-metacarpal",
            Self::MiddleProximal => "middle-finger-phalanx-proximal",
            Self::MiddleIntermediate => "middle-finger-phalanx-intermediate",
            Self::MiddleDistal => "middle-finger-phalanx-distal",
            Self::MiddleTip => "middle-finger-tip",
            Self::RingMetacarpal => "ring-finger-metacarpal",
            Self::RingProximal => "ring-finger-phalanx-proximal",
            Self::RingIntermediate => "ring-finger-phalanx-intermediate",
            Self::RingDistal => "ring-finger-phalanx-distal",
            Self::RingTip => "ring-finger-tip",
            Self::LittleMetacarpal => "pinky-finger-metacarpal",
            Self::LittleProximal => "pinky-finger-phalanx-proximal",
            Self::LittleIntermediate => "pinky-finger-phalanx-intermediate",
            Self::LittleDistal => "pinky-finger-phalanx-distal",
            Self::LittleTip => "pinky-finger-tip",
        }
    }
}

/// The position of a single joint this frame, in the reference space, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct JointSample {
    /// Where the joint is
    pub position: Vec3,
    /// Did the tracking source actually know where the joint is?
    pub valid: bool,
}

impl JointSample {
    /// A joint the tracking source was able to locate
    pub fn valid(position: Vec3) -> Self {
        Self {
            position,
            valid: true,
        }
    }

    /// A joint the tracking source reported, but could not locate
    pub fn invalid(position: Vec3) -> Self {
        Self {
            position,
            valid: false,
        }
    }
}

/// Everything the gesture system needs to know about one hand for one frame.
/// Produced by [`crate::systems::hands_system`]; both joints are always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSample {
    /// Which hand this sample came from
    pub handedness: Handedness,
    /// The tip of the thumb
    pub thumb_tip: JointSample,
    /// The tip of the index finger
    pub index_tip: JointSample,
}

impl HandSample {
    /// Distance in meters between the thumb tip and the index finger tip
    pub fn pinch_distance(&self) -> f32 {
        self.thumb_tip.position.distance(self.index_tip.position)
    }
}
