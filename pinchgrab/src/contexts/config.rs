use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{PinchGrabError, PinchGrabResult, PINCH_THRESHOLD};

/// What to do with a grab when the hand holding it stops being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum LostTrackingPolicy {
    /// Keep holding the object where it was until the same hand is seen releasing the pinch.
    #[default]
    Hold,
    /// Release the grab once the holding hand has gone unseen for more than `after_frames` frames.
    /// The hand's pinch state is reset too, so pinching on re-acquisition grabs again.
    Release {
        /// Number of consecutive frames without a sample that are tolerated
        after_frames: u32,
    },
}

/// Tunables for the gesture system.
///
/// The defaults reproduce a bare 2cm pinch threshold with no hysteresis, a "sticky" grab when
/// tracking is lost, and no handoff between hands.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureConfig {
    /// A released hand starts pinching when its thumb and index tips are closer than this (meters)
    pub pinch_threshold: f32,
    /// A pinching hand keeps pinching while its thumb and index tips are closer than this (meters).
    /// Set it above `pinch_threshold` to stop the gesture chattering at the boundary.
    pub release_threshold: f32,
    /// See [`LostTrackingPolicy`]
    pub lost_tracking: LostTrackingPolicy,
    /// When the holding hand lets go while the other hand is already pinching, give the object to
    /// the other hand instead of dropping it.
    pub handoff_on_release: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_THRESHOLD,
            release_threshold: PINCH_THRESHOLD,
            lost_tracking: Default::default(),
            handoff_on_release: false,
        }
    }
}

impl GestureConfig {
    /// Default configuration with separate enter and exit thresholds
    pub fn with_hysteresis(pinch_threshold: f32, release_threshold: f32) -> Self {
        Self {
            pinch_threshold,
            release_threshold,
            ..Default::default()
        }
    }

    /// Is a hand at `distance` pinching, given whether it was pinching last frame?
    pub fn classify(&self, was_pinching: bool, distance: f32) -> bool {
        if was_pinching {
            distance < self.release_threshold
        } else {
            distance < self.pinch_threshold
        }
    }

    /// Check the thresholds make sense
    pub fn validate(&self) -> PinchGrabResult<()> {
        check_threshold("pinch_threshold", self.pinch_threshold)?;
        check_threshold("release_threshold", self.release_threshold)?;

        if self.release_threshold < self.pinch_threshold {
            return Err(PinchGrabError::ThresholdOrder {
                pinch: self.pinch_threshold,
                release: self.release_threshold,
            });
        }

        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> PinchGrabResult<Self> {
        let config: GestureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> PinchGrabResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn check_threshold(name: &'static str, value: f32) -> PinchGrabResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PinchGrabError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GestureConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pinch_threshold, 0.02);
        assert_eq!(config.release_threshold, 0.02);
        assert_eq!(config.lost_tracking, LostTrackingPolicy::Hold);
        assert!(!config.handoff_on_release);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = GestureConfig::from_json(
            r#"{ "release_threshold": 0.03, "lost_tracking": { "policy": "release", "after_frames": 10 } }"#,
        )
        .unwrap();

        assert_eq!(config.pinch_threshold, 0.02);
        assert_eq!(config.release_threshold, 0.03);
        assert_eq!(
            config.lost_tracking,
            LostTrackingPolicy::Release { after_frames: 10 }
        );
        assert!(!config.handoff_on_release);
    }

    #[test]
    fn test_invalid_thresholds_are_rejected() {
        assert!(matches!(
            GestureConfig::with_hysteresis(0.0, 0.02).validate(),
            Err(PinchGrabError::InvalidThreshold {
                name: "pinch_threshold",
                ..
            })
        ));
        assert!(matches!(
            GestureConfig::with_hysteresis(0.02, f32::NAN).validate(),
            Err(PinchGrabError::InvalidThreshold {
                name: "release_threshold",
                ..
            })
        ));
        assert!(matches!(
            GestureConfig::with_hysteresis(0.03, 0.02).validate(),
            Err(PinchGrabError::ThresholdOrder { .. })
        ));
        assert!(matches!(
            GestureConfig::from_json(r#"{ "pinch_threshold": "far" }"#),
            Err(PinchGrabError::Json(_))
        ));
    }

    #[test]
    fn test_classify_with_hysteresis() {
        let config = GestureConfig::with_hysteresis(0.02, 0.03);

        // Released hands need to get under the pinch threshold..
        assert!(!config.classify(false, 0.025));
        assert!(config.classify(false, 0.019));

        // ..but pinching hands hold on until the release threshold.
        assert!(config.classify(true, 0.025));
        assert!(!config.classify(true, 0.03));
    }
}
