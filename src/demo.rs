//! Headless wave demo: the per-frame update a renderer would run.

use crate::mesh::{TextureScroll, WaveMesh};
use crate::params::{DemoConfig, RainSchedule, WaveParams};
use crate::rain::RainDriver;
use crate::snapshot;
use crate::waves::{WaveError, WaveField};

/// Per-frame stats for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame: usize,
    pub time_s: f32,
    pub sweeps: u64,
    pub energy: f32,
    pub max_height_m: f32,
}

/// Wave field plus everything the demos drive alongside it
pub struct WaveDemo {
    pub field: WaveField,
    pub mesh: WaveMesh,
    pub texture: TextureScroll,
    rain: RainDriver,
    config: DemoConfig,
    frame: usize,
    time_s: f32,
}

impl WaveDemo {
    /// Create a ready demo; all configuration is validated up front
    pub fn new(
        params: &WaveParams,
        schedule: RainSchedule,
        config: DemoConfig,
    ) -> Result<Self, WaveError> {
        config.validate()?;
        schedule.validate(params.rows, params.cols)?;

        let mut field = WaveField::new();
        field.initialize(params)?;
        let mesh = WaveMesh::new(field.surface()?)?;

        Ok(Self {
            field,
            mesh,
            texture: TextureScroll::default(),
            rain: RainDriver::new(schedule),
            config,
            frame: 0,
            time_s: 0.0,
        })
    }

    /// Run one frame: rain, simulation step, vertex refresh, texture drift
    pub fn frame(&mut self) -> Result<FrameStats, WaveError> {
        let dt = self.config.frame_dt();
        self.frame += 1;
        self.time_s += dt;

        self.rain.tick(self.time_s, &mut self.field)?;
        self.field.advance(dt)?;

        let surface = self.field.surface()?;
        self.mesh.refresh(surface)?;
        self.texture.advance(dt);

        Ok(FrameStats {
            frame: self.frame,
            time_s: self.time_s,
            sweeps: surface.sweeps(),
            energy: surface.energy(),
            max_height_m: surface.max_abs_height(),
        })
    }

    /// Run all configured frames, logging stats and writing the snapshot
    pub fn run(&mut self) -> Result<FrameStats, WaveError> {
        log::info!(
            "Simulating {} frames at {} FPS",
            self.config.frames,
            self.config.fps
        );

        let mut stats = self.frame()?;
        for _ in 1..self.config.frames {
            if self.config.report_every > 0 && stats.frame % self.config.report_every == 0 {
                log_stats(&stats);
            }
            stats = self.frame()?;
        }
        log_stats(&stats);

        if let Some(path) = &self.config.snapshot_path {
            let amplitude = self.config.snapshot_amplitude_m;
            snapshot::save_heightmap(self.field.surface()?, path, amplitude)?;
        }
        Ok(stats)
    }
}

fn log_stats(stats: &FrameStats) {
    log::info!(
        "frame {:>5} t={:>7.2}s sweeps={:>5} energy={:>10.4} max|h|={:.4}m",
        stats.frame,
        stats.time_s,
        stats.sweeps,
        stats.energy,
        stats.max_height_m
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_demo(frames: usize) -> WaveDemo {
        let params = WaveParams {
            rows: 40,
            cols: 40,
            ..WaveParams::default()
        };
        let config = DemoConfig {
            frames,
            report_every: 0,
            ..DemoConfig::default()
        };
        WaveDemo::new(&params, RainSchedule::default(), config).unwrap()
    }

    #[test]
    fn test_frames_advance_time_and_sweep() {
        let mut demo = small_demo(120);
        let stats = demo.run().unwrap();

        assert_eq!(stats.frame, 120);
        assert!((stats.time_s - 2.0).abs() < 1e-3);
        // 60 FPS frames against a 0.03 s step: one sweep every second frame
        assert_eq!(stats.sweeps, 60);
        assert!(stats.energy > 0.0);
        assert!(stats.max_height_m > 0.0);
    }

    #[test]
    fn test_mesh_follows_field() {
        let mut demo = small_demo(30);
        demo.run().unwrap();

        let surface = demo.field.surface().unwrap();
        for (index, vertex) in demo.mesh.vertices.iter().enumerate() {
            assert_eq!(vertex.position, surface.position_at(index).unwrap().to_array());
        }
    }

    #[test]
    fn test_rejects_rain_margin_on_tiny_grid() {
        let params = WaveParams {
            rows: 8,
            cols: 8,
            ..WaveParams::default()
        };
        assert!(WaveDemo::new(&params, RainSchedule::default(), DemoConfig::default()).is_err());
    }

    #[test]
    fn test_run_writes_snapshot() {
        let path =
            std::env::temp_dir().join(format!("wavesim-demo-{}.png", std::process::id()));
        let params = WaveParams {
            rows: 24,
            cols: 32,
            ..WaveParams::default()
        };
        let config = DemoConfig {
            frames: 20,
            report_every: 0,
            snapshot_path: Some(path.clone()),
            ..DemoConfig::default()
        };
        let mut demo = WaveDemo::new(&params, RainSchedule::default(), config).unwrap();
        demo.run().unwrap();

        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (32, 24));
        std::fs::remove_file(&path).unwrap();
    }
}
