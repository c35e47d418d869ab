use glam::Vec3;
use openxr::{HandJointLocation, Posef, SpaceLocationFlags};

use crate::components::JointSample;

#[inline]
/// Extract the position of a `Posef` from OpenXR as a [`glam::Vec3`]
pub fn vec3_from_posef(pose: &Posef) -> Vec3 {
    mint::Vector3::from(pose.position).into()
}

/// Check to see if the runtime knows where a joint is. Orientation doesn't matter for pinching.
pub fn is_joint_position_valid(location: &HandJointLocation) -> bool {
    location
        .location_flags
        .contains(SpaceLocationFlags::POSITION_VALID)
}

/// Convert an OpenXR joint location into a [`JointSample`]
pub fn joint_sample_from_location(location: &HandJointLocation) -> JointSample {
    JointSample {
        position: vec3_from_posef(&location.pose),
        valid: is_joint_position_valid(location),
    }
}
