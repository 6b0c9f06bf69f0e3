//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{DemoConfig, RainSchedule, WaveParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavesim")]
#[command(about = "Headless rain-on-water wave simulation", long_about = None)]
pub struct Args {
    /// Grid rows (samples along z)
    #[arg(long, value_name = "N", default_value = "160")]
    pub rows: usize,

    /// Grid columns (samples along x)
    #[arg(long, value_name = "N", default_value = "160")]
    pub cols: usize,

    /// Distance between samples (meters)
    #[arg(long, value_name = "METERS", default_value = "1.0")]
    pub spatial_step: f32,

    /// Fixed simulation step (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "0.03")]
    pub time_step: f32,

    /// Wave propagation speed (meters per second)
    #[arg(long, value_name = "M/S", default_value = "3.25")]
    pub wave_speed: f32,

    /// Damping coefficient
    #[arg(long, value_name = "RATE", default_value = "0.4")]
    pub damping: f32,

    /// Number of frames to simulate
    #[arg(long, value_name = "N", default_value = "600")]
    pub frames: usize,

    /// Simulated frame rate
    #[arg(long, value_name = "FPS", default_value = "60")]
    pub fps: f32,

    /// Seconds of simulated time between raindrops
    #[arg(long, value_name = "SECONDS", default_value = "0.25")]
    pub rain_interval: f32,

    /// Seed for raindrop placement
    #[arg(long, value_name = "SEED", default_value = "42")]
    pub seed: u64,

    /// Log stats every N frames (0 disables)
    #[arg(long, value_name = "N", default_value = "60")]
    pub report_every: usize,

    /// Write a grayscale heightmap PNG after the last frame
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Height shown as full white in the snapshot (meters)
    #[arg(long, value_name = "METERS", default_value = "2.0")]
    pub snapshot_amplitude: f32,
}

impl Args {
    pub fn wave_params(&self) -> WaveParams {
        WaveParams::new(
            self.rows,
            self.cols,
            self.spatial_step,
            self.time_step,
            self.wave_speed,
            self.damping,
        )
    }

    pub fn rain_schedule(&self) -> RainSchedule {
        RainSchedule {
            interval_s: self.rain_interval,
            seed: self.seed,
            ..RainSchedule::default()
        }
    }

    pub fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            frames: self.frames,
            fps: self.fps,
            report_every: self.report_every,
            snapshot_path: self.snapshot.clone(),
            snapshot_amplitude_m: self.snapshot_amplitude,
        }
    }
}
