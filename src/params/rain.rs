//! Raindrop disturbance schedule.

use std::ops::Range;

use crate::waves::WaveError;

/// When and how hard the demo driver disturbs the wave field
#[derive(Debug, Clone, PartialEq)]
pub struct RainSchedule {
    /// Simulated time between drops (seconds)
    pub interval_s: f32,

    /// Minimum distance of a drop from any grid edge (samples, at least 2)
    pub margin: usize,

    /// Drop magnitude range (meters of displacement at the impact sample)
    pub magnitude: Range<f32>,

    /// Seed for the drop position/magnitude generator
    pub seed: u64,
}

impl Default for RainSchedule {
    fn default() -> Self {
        Self {
            interval_s: 0.25, // One drop every quarter second
            margin: 5,
            magnitude: 1.0..2.0,
            seed: 42,
        }
    }
}

impl RainSchedule {
    /// Validate against a `rows x cols` grid
    pub fn validate(&self, rows: usize, cols: usize) -> Result<(), WaveError> {
        if !(self.interval_s.is_finite() && self.interval_s > 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "rain interval must be > 0, got {}",
                self.interval_s
            )));
        }
        if self.margin < 2 {
            return Err(WaveError::InvalidParams(format!(
                "rain margin must be >= 2, got {}",
                self.margin
            )));
        }
        if 2 * self.margin >= rows || 2 * self.margin >= cols {
            return Err(WaveError::InvalidParams(format!(
                "rain margin {} leaves no room on a {}x{} grid",
                self.margin, rows, cols
            )));
        }
        let (start, end) = (self.magnitude.start, self.magnitude.end);
        if self.magnitude.is_empty() || !start.is_finite() || !end.is_finite() {
            return Err(WaveError::InvalidParams(format!(
                "rain magnitude range {:?} is empty",
                self.magnitude
            )));
        }
        Ok(())
    }
}
