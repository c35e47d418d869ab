use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use glam::Vec3;
use pinchgrab::{components::SimulatedHand, contexts::GestureConfig};
use serde::Deserialize;

/// Frame rate used when a script doesn't say otherwise. Quest 2 default.
pub const DEFAULT_FRAME_RATE: f32 = 72.0;

/// A recorded (or hand written) session: where the object starts, and what the hands did each frame.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: Option<GestureConfig>,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    #[serde(default)]
    pub object: Vec3,
    pub frames: Vec<ScriptedFrame>,
}

/// Every input source the tracking runtime reported for one frame
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptedFrame {
    #[serde(default)]
    pub sources: Vec<SimulatedHand>,
}

fn default_frame_rate() -> f32 {
    DEFAULT_FRAME_RATE
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        let script: Script = serde_json::from_str(json)?;
        if let Some(config) = &script.config {
            config.validate()?;
        }
        script.frame_time()?;
        Ok(script)
    }

    /// How long each frame lasts when played back in real time
    pub fn frame_time(&self) -> Result<Duration> {
        anyhow::ensure!(
            self.frame_rate.is_finite() && self.frame_rate > 0.0,
            "Frame rate must be positive, got {}",
            self.frame_rate
        );
        Duration::try_from_secs_f32(1.0 / self.frame_rate)
            .with_context(|| format!("Frame rate {} is too low", self.frame_rate))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read script {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid script {}", path.display()))
    }
}
