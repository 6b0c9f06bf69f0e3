//! Wave simulation parameters and stability helpers.

use crate::waves::WaveError;

/// Wave height-field simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WaveParams {
    /// Grid rows (samples along z, minimum 3)
    pub rows: usize,

    /// Grid columns (samples along x, minimum 3)
    pub cols: usize,

    /// Distance between adjacent samples in world units (meters)
    pub spatial_step_m: f32,

    /// Fixed simulation time increment (seconds)
    pub time_step_s: f32,

    /// Wave propagation speed (meters per second)
    pub wave_speed_m_per_s: f32,

    /// Damping coefficient (1/seconds, 0 = undamped)
    pub damping: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            rows: 160,
            cols: 160,
            spatial_step_m: 1.0,
            time_step_s: 0.03,
            wave_speed_m_per_s: 3.25,
            damping: 0.4,
        }
    }
}

impl WaveParams {
    pub fn new(
        rows: usize,
        cols: usize,
        spatial_step_m: f32,
        time_step_s: f32,
        wave_speed_m_per_s: f32,
        damping: f32,
    ) -> Self {
        Self {
            rows,
            cols,
            spatial_step_m,
            time_step_s,
            wave_speed_m_per_s,
            damping,
        }
    }

    /// Reject configurations the solver cannot represent.
    ///
    /// Unstable but well-formed parameters pass; see [`WaveParams::is_stable`].
    pub fn validate(&self) -> Result<(), WaveError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(WaveError::InvalidParams(format!(
                "grid must be at least 3x3, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.spatial_step_m.is_finite() && self.spatial_step_m > 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "spatial step must be > 0, got {}",
                self.spatial_step_m
            )));
        }
        if !(self.time_step_s.is_finite() && self.time_step_s > 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "time step must be > 0, got {}",
                self.time_step_s
            )));
        }
        if !(self.wave_speed_m_per_s.is_finite() && self.wave_speed_m_per_s >= 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "wave speed must be >= 0, got {}",
                self.wave_speed_m_per_s
            )));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(WaveError::InvalidParams(format!(
                "damping must be >= 0, got {}",
                self.damping
            )));
        }
        Ok(())
    }

    /// Courant-style ratio `c²·dt²/dx²` used by the stencil
    pub fn courant(&self) -> f32 {
        let c = self.wave_speed_m_per_s;
        let dt = self.time_step_s;
        let dx = self.spatial_step_m;
        (c * c) * (dt * dt) / (dx * dx)
    }

    /// Largest wave speed the explicit scheme tolerates for this dx/dt/damping
    ///
    /// Formula: `dx / (2·dt) · sqrt(μ·dt + 2)`
    pub fn max_stable_wave_speed(&self) -> f32 {
        let dt = self.time_step_s;
        self.spatial_step_m / (2.0 * dt) * (self.damping * dt + 2.0).sqrt()
    }

    pub fn is_stable(&self) -> bool {
        self.wave_speed_m_per_s < self.max_stable_wave_speed()
    }

    /// Physical extent along x (meters)
    pub fn width_m(&self) -> f32 {
        self.cols.saturating_sub(1) as f32 * self.spatial_step_m
    }

    /// Physical extent along z (meters)
    pub fn depth_m(&self) -> f32 {
        self.rows.saturating_sub(1) as f32 * self.spatial_step_m
    }
}
