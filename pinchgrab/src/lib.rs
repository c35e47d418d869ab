#![deny(missing_docs)]

//! Pinch to grab. 🤏
//!
//! `pinchgrab` turns a per-frame stream of tracked hand joints into a "pinch" gesture per hand, and
//! uses that gesture to pick up and drag a single object around. It has no opinion on how you render
//! anything: feed it hand samples once per frame, read back where the object should be.
//!
//! # Getting started
//! 1. Each frame, run your tracked hands (OpenXR, a recording, a test fixture..) through
//!    [`systems::hands_system`] to get [`components::HandSample`]s.
//! 1. Hand those samples to [`contexts::GestureContext::update`] (or [`systems::grabbing_system`] if
//!    your object lives in a [`hecs::World`]).
//! 1. Move your object to the returned position.
//!
//! ```
//! use pinchgrab::{components::{Handedness, HandJoint, SimulatedHand}, contexts::GestureContext, systems::hands_system};
//!
//! let mut gesture_context = GestureContext::default();
//! let hand = SimulatedHand::new(Handedness::Right)
//!     .with_joint(HandJoint::ThumbTip, [0.0, 1.2, -0.39].into())
//!     .with_joint(HandJoint::IndexTip, [0.0, 1.2, -0.4].into());
//!
//! let position = gesture_context.update(hands_system([&hand]));
//! assert_eq!(position, Some([0.0, 1.2, -0.4].into()));
//! ```

pub use glam;
pub use hecs;
pub use openxr as xr;

pub use pinchgrab_error::PinchGrabError;

/// Components are data attached to hands and to the object being manipulated
pub mod components;
/// Contexts hold the state that survives from one frame to the next
pub mod contexts;
mod pinchgrab_error;
/// Systems are functions called each frame to turn tracking data into object movement
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// pinchgrab result type
pub type PinchGrabResult<T> = std::result::Result<T, PinchGrabError>;

/// Distance (in meters) between the thumb tip and index finger tip below which a hand is pinching
pub const PINCH_THRESHOLD: f32 = 0.02;
