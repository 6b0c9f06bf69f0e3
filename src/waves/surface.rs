//! Finite-difference solver for a damped 2D wave equation on a fixed grid.

use glam::Vec3;

use super::grid::GridShape;
use super::WaveError;
use crate::params::WaveParams;

/// Explicit stencil weights, fixed at initialization
///
/// `new = k1·prev + k2·curr + k3·(sum of the four neighbors in curr)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilCoefficients {
    pub k1: f32,
    pub k2: f32,
    pub k3: f32,
}

impl StencilCoefficients {
    pub fn from_params(params: &WaveParams) -> Self {
        let dt = params.time_step_s;
        let d = params.damping * dt + 2.0;
        let e = params.courant();
        Self {
            k1: (params.damping * dt - 2.0) / d,
            k2: (4.0 - 8.0 * e) / d,
            k3: (2.0 * e) / d,
        }
    }
}

/// A Ready wave grid: two same-shaped sample buffers and the fixed-step clock
///
/// x/z of every sample are set once in [`WaveSurface::new`]; only y evolves.
/// Border samples stay at y = 0.
#[derive(Debug, Clone)]
pub struct WaveSurface {
    shape: GridShape,
    spatial_step: f32,
    time_step: f32,
    coefficients: StencilCoefficients,
    previous: Vec<Vec3>,
    current: Vec<Vec3>,
    /// Time accumulated toward the next sweep (seconds)
    accumulated_s: f32,
    sweeps: u64,
}

impl WaveSurface {
    /// Build a flat grid for `params`
    pub fn new(params: &WaveParams) -> Result<Self, WaveError> {
        params.validate()?;

        let shape = GridShape::new(params.rows, params.cols);
        let dx = params.spatial_step_m;
        let half_width = params.width_m() * 0.5;
        let half_depth = params.depth_m() * 0.5;

        let mut samples = Vec::with_capacity(shape.len());
        for row in 0..shape.rows {
            let z = half_depth - row as f32 * dx;
            for col in 0..shape.cols {
                let x = -half_width + col as f32 * dx;
                samples.push(Vec3::new(x, 0.0, z));
            }
        }

        let coefficients = StencilCoefficients::from_params(params);
        log::debug!(
            "wave grid {}x{} dx={} dt={} k1={} k2={} k3={}",
            shape.rows,
            shape.cols,
            dx,
            params.time_step_s,
            coefficients.k1,
            coefficients.k2,
            coefficients.k3
        );
        if !params.is_stable() {
            log::warn!(
                "wave speed {} exceeds stable limit {} for dx={} dt={}; heights will diverge",
                params.wave_speed_m_per_s,
                params.max_stable_wave_speed(),
                dx,
                params.time_step_s
            );
        }

        Ok(Self {
            shape,
            spatial_step: dx,
            time_step: params.time_step_s,
            coefficients,
            previous: samples.clone(),
            current: samples,
            accumulated_s: 0.0,
            sweeps: 0,
        })
    }

    /// Feed frame time into the fixed-step clock
    ///
    /// Runs at most one sweep per call. Once the accumulator reaches the time
    /// step it resets to zero, so any excess is dropped rather than replayed.
    /// Returns whether a sweep ran.
    pub fn advance(&mut self, elapsed_s: f32) -> Result<bool, WaveError> {
        if !(elapsed_s.is_finite() && elapsed_s >= 0.0) {
            return Err(WaveError::InvalidElapsed(elapsed_s));
        }

        self.accumulated_s += elapsed_s;
        if self.accumulated_s < self.time_step {
            return Ok(false);
        }

        self.sweep();
        self.accumulated_s = 0.0;
        Ok(true)
    }

    /// One stencil application over the interior, then swap buffer roles.
    ///
    /// Each new value only needs the old `previous` at its own slot, so it is
    /// written back over that slot; neighbor reads all come from `current`.
    fn sweep(&mut self) {
        let StencilCoefficients { k1, k2, k3 } = self.coefficients;
        let shape = self.shape;
        let curr = &self.current;
        let prev = &mut self.previous;

        for (row, col) in shape.interior() {
            let i = shape.index(row, col);
            let neighbors = curr[shape.index(row + 1, col)].y
                + curr[shape.index(row - 1, col)].y
                + curr[shape.index(row, col + 1)].y
                + curr[shape.index(row, col - 1)].y;
            prev[i].y = k1 * prev[i].y + k2 * curr[i].y + k3 * neighbors;
        }

        std::mem::swap(&mut self.previous, &mut self.current);
        self.sweeps += 1;
    }

    /// Add an impulse at `(row, col)` and half of it to the four neighbors
    ///
    /// The sample must keep two rings of distance from every edge so the
    /// neighbor spread never lands on the fixed border.
    pub fn disturb(&mut self, row: usize, col: usize, magnitude: f32) -> Result<(), WaveError> {
        if !self.shape.within_margin(row, col, 2) {
            return Err(WaveError::DisturbOutOfRange {
                row,
                col,
                rows: self.shape.rows,
                cols: self.shape.cols,
            });
        }

        let half = 0.5 * magnitude;
        let shape = self.shape;
        self.current[shape.index(row, col)].y += magnitude;
        self.current[shape.index(row, col + 1)].y += half;
        self.current[shape.index(row, col - 1)].y += half;
        self.current[shape.index(row + 1, col)].y += half;
        self.current[shape.index(row - 1, col)].y += half;
        Ok(())
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn row_count(&self) -> usize {
        self.shape.rows
    }

    pub fn column_count(&self) -> usize {
        self.shape.cols
    }

    pub fn vertex_count(&self) -> usize {
        self.shape.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.shape.triangle_count()
    }

    pub fn width(&self) -> f32 {
        (self.shape.cols - 1) as f32 * self.spatial_step
    }

    pub fn depth(&self) -> f32 {
        (self.shape.rows - 1) as f32 * self.spatial_step
    }

    pub fn spatial_step(&self) -> f32 {
        self.spatial_step
    }

    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    pub fn coefficients(&self) -> StencilCoefficients {
        self.coefficients
    }

    /// Number of completed sweeps since initialization
    pub fn sweeps(&self) -> u64 {
        self.sweeps
    }

    /// Current solution, row-major
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    pub fn position_at(&self, index: usize) -> Result<Vec3, WaveError> {
        self.current
            .get(index)
            .copied()
            .ok_or(WaveError::IndexOutOfRange {
                index,
                len: self.current.len(),
            })
    }

    /// Height at `(row, col)` in the current solution
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn height(&self, row: usize, col: usize) -> f32 {
        self.current[self.shape.index(row, col)].y
    }

    /// Slopes `(dh/dx, dh/dz)` from central differences over clamped neighbors
    ///
    /// Row index grows toward -z, hence the reversed z difference.
    fn slopes(&self, row: usize, col: usize) -> (f32, f32) {
        let left = col.saturating_sub(1);
        let right = (col + 1).min(self.shape.cols - 1);
        let up = row.saturating_sub(1);
        let down = (row + 1).min(self.shape.rows - 1);

        let dh_dx = (self.height(row, right) - self.height(row, left))
            / ((right - left) as f32 * self.spatial_step);
        let dh_dz = (self.height(up, col) - self.height(down, col))
            / ((down - up) as f32 * self.spatial_step);
        (dh_dx, dh_dz)
    }

    /// Unit surface normal at `index`
    pub fn normal_at(&self, index: usize) -> Result<Vec3, WaveError> {
        self.check_index(index)?;
        let (row, col) = self.shape.row_col(index);
        let (dh_dx, dh_dz) = self.slopes(row, col);
        Ok(Vec3::new(-dh_dx, 1.0, -dh_dz).normalize())
    }

    /// Unit tangent along +x at `index`
    pub fn tangent_x_at(&self, index: usize) -> Result<Vec3, WaveError> {
        self.check_index(index)?;
        let (row, col) = self.shape.row_col(index);
        let (dh_dx, _) = self.slopes(row, col);
        Ok(Vec3::new(1.0, dh_dx, 0.0).normalize())
    }

    fn check_index(&self, index: usize) -> Result<(), WaveError> {
        if index < self.current.len() {
            Ok(())
        } else {
            Err(WaveError::IndexOutOfRange {
                index,
                len: self.current.len(),
            })
        }
    }

    /// Sum of squared interior heights
    pub fn energy(&self) -> f32 {
        self.shape
            .interior()
            .map(|(row, col)| {
                let h = self.height(row, col);
                h * h
            })
            .sum()
    }

    pub fn max_abs_height(&self) -> f32 {
        self.current.iter().fold(0.0, |acc, p| acc.max(p.y.abs()))
    }
}
