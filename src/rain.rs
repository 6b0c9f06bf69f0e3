//! Raindrop driver: periodically disturbs a wave field at random interior samples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::RainSchedule;
use crate::waves::{WaveError, WaveField};

/// A disturbance applied by the driver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    pub row: usize,
    pub col: usize,
    pub magnitude: f32,
}

/// Fires one raindrop per schedule interval of simulated time
pub struct RainDriver {
    schedule: RainSchedule,
    rng: StdRng,
    /// Time of the last fired interval boundary (seconds)
    t_base: f32,
}

impl RainDriver {
    pub fn new(schedule: RainSchedule) -> Self {
        let rng = StdRng::seed_from_u64(schedule.seed);
        Self {
            schedule,
            rng,
            t_base: 0.0,
        }
    }

    pub fn schedule(&self) -> &RainSchedule {
        &self.schedule
    }

    /// Drop a raindrop if a full interval has passed since the last one
    ///
    /// # Arguments
    /// * `total_time_s` - Total simulated time since start
    /// * `field` - Initialized wave field to disturb
    ///
    /// # Returns
    /// * The applied drop, or `None` when the interval has not elapsed
    pub fn tick(
        &mut self,
        total_time_s: f32,
        field: &mut WaveField,
    ) -> Result<Option<Raindrop>, WaveError> {
        if total_time_s - self.t_base < self.schedule.interval_s {
            return Ok(None);
        }

        let (rows, cols) = {
            let surface = field.surface()?;
            (surface.row_count(), surface.column_count())
        };
        self.schedule.validate(rows, cols)?;
        self.t_base += self.schedule.interval_s;

        let margin = self.schedule.margin;
        let drop = Raindrop {
            row: self.rng.gen_range(margin..rows - margin),
            col: self.rng.gen_range(margin..cols - margin),
            magnitude: self.rng.gen_range(self.schedule.magnitude.clone()),
        };
        field.disturb(drop.row, drop.col, drop.magnitude)?;

        log::debug!(
            "raindrop at ({}, {}) magnitude {:.3}",
            drop.row,
            drop.col,
            drop.magnitude
        );
        Ok(Some(drop))
    }
}
