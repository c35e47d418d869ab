#![allow(missing_docs)]
pub mod config;
pub mod gesture_context;
pub mod xr_context;

pub use config::{GestureConfig, LostTrackingPolicy};
pub use gesture_context::{
    pinching, FrameEffects, GestureContext, GestureEvent, GrabState, PinchState, ReleaseReason,
};
pub use xr_context::{required_extensions, XrHandSource, XrHandTrackers};
