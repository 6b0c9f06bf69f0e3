//! Headless demo run configuration.

use std::path::PathBuf;

use crate::waves::WaveError;

/// Settings for the headless frame loop
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Number of frames to simulate
    pub frames: usize,

    /// Simulated frame rate (FPS); each frame advances by `1 / fps` seconds
    pub fps: f32,

    /// Log a stats line every this many frames (0 = never)
    pub report_every: usize,

    /// Optional heightmap PNG written after the last frame
    pub snapshot_path: Option<PathBuf>,

    /// Height mapped to full white in the snapshot (meters)
    pub snapshot_amplitude_m: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600, // Ten seconds at 60 FPS
            fps: 60.0,
            report_every: 60,
            snapshot_path: None,
            snapshot_amplitude_m: 2.0,
        }
    }
}

impl DemoConfig {
    /// Frame delta (seconds)
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps
    }

    pub fn validate(&self) -> Result<(), WaveError> {
        if self.frames == 0 {
            return Err(WaveError::InvalidParams(
                "frame count must be > 0".to_string(),
            ));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "fps must be > 0, got {}",
                self.fps
            )));
        }
        if !(self.snapshot_amplitude_m.is_finite() && self.snapshot_amplitude_m > 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "snapshot amplitude must be > 0, got {}",
                self.snapshot_amplitude_m
            )));
        }
        Ok(())
    }
}
