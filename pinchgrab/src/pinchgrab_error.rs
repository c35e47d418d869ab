use openxr::sys::Result as OpenXRResult;
use thiserror::Error;

/// Things that can go wrong around the edges of the gesture core: loading configuration and talking to OpenXR.
/// Gesture detection itself never fails.
#[derive(Error, Debug)]
pub enum PinchGrabError {
    /// An OpenXR call failed
    #[error("There was a problem with an OpenXR operation")]
    OpenXRError(#[from] OpenXRResult),
    /// A threshold was NaN, infinite, zero or negative
    #[error("Threshold {name} must be a positive, finite distance but was {value}")]
    InvalidThreshold {
        /// Name of the offending configuration field
        name: &'static str,
        /// The value that was supplied
        value: f32,
    },
    /// The release threshold would let a hand release before it could ever start pinching
    #[error("Release threshold {release} is smaller than pinch threshold {pinch}")]
    ThresholdOrder {
        /// Configured pinch threshold
        pinch: f32,
        /// Configured release threshold
        release: f32,
    },
    /// A configuration or script file could not be parsed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[allow(missing_docs)]
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
