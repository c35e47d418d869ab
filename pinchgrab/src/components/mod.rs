/// Components for the object being manipulated
pub mod grabbable;
/// Handedness, and per-hand storage
pub mod hand;
/// Sources of tracked hand joints
pub mod hand_source;
/// Joints and per-frame hand samples
pub mod joint;
/// Position of an entity in the reference space
pub mod local_transform;

pub use grabbable::{Grabbable, Grabbed};
pub use hand::{HandTable, Handedness};
pub use hand_source::{HandSource, SimulatedHand};
pub use joint::{HandJoint, HandSample, JointSample, HAND_JOINT_COUNT};
pub use local_transform::LocalTransform;
