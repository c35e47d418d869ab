use log::warn;
use openxr as xr;

use crate::{
    components::{HandJoint, HandSource, HandTable, Handedness, JointSample},
    util::joint_sample_from_location,
    PinchGrabResult,
};

/// The OpenXR extensions needed to read hand joints. Merge these into whatever else your
/// application enables when creating its instance.
pub fn required_extensions() -> xr::ExtensionSet {
    let mut extensions = xr::ExtensionSet::default();
    extensions.ext_hand_tracking = true;
    extensions
}

/// One `XR_EXT_hand_tracking` hand tracker per hand, created from a running session.
pub struct XrHandTrackers {
    trackers: HandTable<xr::HandTracker>,
}

impl XrHandTrackers {
    /// Create a hand tracker for each hand. Requires [`required_extensions`] to have been enabled.
    pub fn new<G: xr::Graphics>(session: &xr::Session<G>) -> PinchGrabResult<Self> {
        let left = session.create_hand_tracker(xr::Hand::LEFT)?;
        let right = session.create_hand_tracker(xr::Hand::RIGHT)?;

        Ok(Self {
            trackers: HandTable::new(left, right),
        })
    }

    /// Locate both hands in `reference_space` at `time`, usually the frame's predicted display time.
    ///
    /// Always returns a source per hand; a hand the runtime isn't tracking simply has no joints.
    pub fn locate(&self, reference_space: &xr::Space, time: xr::Time) -> [XrHandSource; 2] {
        Handedness::ALL.map(|handedness| {
            XrHandSource::locate(
                handedness,
                &self.trackers[handedness],
                reference_space,
                time,
            )
        })
    }
}

/// A hand located through OpenXR for a single frame.
#[derive(Clone)]
pub struct XrHandSource {
    handedness: Handedness,
    locations: Option<xr::HandJointLocations>,
}

impl XrHandSource {
    /// Ask the runtime where every joint of `tracker`'s hand is. Failures are logged and treated
    /// as the hand not being tracked this frame.
    pub fn locate(
        handedness: Handedness,
        tracker: &xr::HandTracker,
        reference_space: &xr::Space,
        time: xr::Time,
    ) -> Self {
        let locations = match reference_space.locate_hand_joints(tracker, time) {
            Ok(locations) => locations,
            Err(e) => {
                warn!(
                    "[PINCHGRAB_XR] Unable to locate {} hand joints: {:?}",
                    handedness.as_str(),
                    e
                );
                None
            }
        };

        Self {
            handedness,
            locations,
        }
    }
}

impl HandSource for XrHandSource {
    fn handedness(&self) -> Handedness {
        self.handedness
    }

    fn locate_joint(&self, joint: HandJoint) -> Option<JointSample> {
        self.locations
            .as_ref()
            .map(|locations| joint_sample_from_location(&locations[joint.index()]))
    }
}
