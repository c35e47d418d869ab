use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{HandJoint, Handedness, JointSample};

/// Something that can tell us where the joints of one hand are this frame.
///
/// Implemented by [`SimulatedHand`] for recordings and tests, and by
/// [`crate::contexts::XrHandSource`] for a live OpenXR session.
pub trait HandSource {
    /// Which hand this source represents
    fn handedness(&self) -> Handedness;

    /// Locate `joint` in the reference space. `None` means the joint is not available this frame,
    /// which is perfectly normal and not an error.
    fn locate_joint(&self, joint: HandJoint) -> Option<JointSample>;
}

impl<T: HandSource + ?Sized> HandSource for &T {
    fn handedness(&self) -> Handedness {
        (**self).handedness()
    }

    fn locate_joint(&self, joint: HandJoint) -> Option<JointSample> {
        (**self).locate_joint(joint)
    }
}

/// An input source that lives entirely in memory.
///
/// `joints` is `None` for input sources that carry no hand data at all (eg. a controller).
/// Deserializes from JSON such as:
///
/// ```json
/// { "handedness": "right", "joints": { "thumb-tip": [0.0, 1.2, -0.39], "index-finger-tip": [0.0, 1.2, -0.4] } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulatedHand {
    /// Which hand this is
    pub handedness: Handedness,
    /// Joint positions in the reference space. Missing joints are unavailable this frame.
    #[serde(default)]
    pub joints: Option<HashMap<HandJoint, Vec3>>,
}

impl SimulatedHand {
    /// A hand with hand tracking data, but no joints located yet
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            joints: Some(Default::default()),
        }
    }

    /// An input source with no hand tracking data at all
    pub fn without_hand_data(handedness: Handedness) -> Self {
        Self {
            handedness,
            joints: None,
        }
    }

    /// Builder style helper to place a joint
    pub fn with_joint(mut self, joint: HandJoint, position: Vec3) -> Self {
        self.set_joint(joint, position);
        self
    }

    /// Place a joint, adding hand data to the source if it had none
    pub fn set_joint(&mut self, joint: HandJoint, position: Vec3) {
        self.joints
            .get_or_insert_with(Default::default)
            .insert(joint, position);
    }

    /// Convenience to build a hand with its index tip at `index_tip` and its thumb tip `distance`
    /// meters away along +X.
    pub fn pinching_at(handedness: Handedness, index_tip: Vec3, distance: f32) -> Self {
        Self::new(handedness)
            .with_joint(HandJoint::IndexTip, index_tip)
            .with_joint(HandJoint::ThumbTip, index_tip + Vec3::X * distance)
    }
}

impl HandSource for SimulatedHand {
    fn handedness(&self) -> Handedness {
        self.handedness
    }

    fn locate_joint(&self, joint: HandJoint) -> Option<JointSample> {
        self.joints
            .as_ref()?
            .get(&joint)
            .copied()
            .map(JointSample::valid)
    }
}
