//! Owner-facing wave field with an explicit uninitialized state.

use glam::Vec3;

use super::{WaveError, WaveSurface};
use crate::params::WaveParams;

/// Wave height-field simulation driven once per frame by its owner
///
/// Starts empty; every call other than [`WaveField::initialize`] fails with
/// [`WaveError::Uninitialized`] until the first successful initialize.
#[derive(Debug, Clone, Default)]
pub struct WaveField {
    surface: Option<WaveSurface>,
}

impl WaveField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh flat grid, discarding any previous state
    ///
    /// Parameters are checked before anything is replaced, so a rejected call
    /// leaves the field as it was.
    pub fn initialize(&mut self, params: &WaveParams) -> Result<(), WaveError> {
        let surface = WaveSurface::new(params)?;
        self.surface = Some(surface);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.surface.is_some()
    }

    /// Read-only view of the simulated grid
    pub fn surface(&self) -> Result<&WaveSurface, WaveError> {
        self.surface.as_ref().ok_or(WaveError::Uninitialized)
    }

    fn surface_mut(&mut self) -> Result<&mut WaveSurface, WaveError> {
        self.surface.as_mut().ok_or(WaveError::Uninitialized)
    }

    /// See [`WaveSurface::advance`]
    pub fn advance(&mut self, elapsed_s: f32) -> Result<bool, WaveError> {
        self.surface_mut()?.advance(elapsed_s)
    }

    /// See [`WaveSurface::disturb`]
    pub fn disturb(&mut self, row: usize, col: usize, magnitude: f32) -> Result<(), WaveError> {
        self.surface_mut()?.disturb(row, col, magnitude)
    }

    pub fn row_count(&self) -> Result<usize, WaveError> {
        Ok(self.surface()?.row_count())
    }

    pub fn column_count(&self) -> Result<usize, WaveError> {
        Ok(self.surface()?.column_count())
    }

    pub fn vertex_count(&self) -> Result<usize, WaveError> {
        Ok(self.surface()?.vertex_count())
    }

    pub fn triangle_count(&self) -> Result<usize, WaveError> {
        Ok(self.surface()?.triangle_count())
    }

    pub fn width(&self) -> Result<f32, WaveError> {
        Ok(self.surface()?.width())
    }

    pub fn depth(&self) -> Result<f32, WaveError> {
        Ok(self.surface()?.depth())
    }

    pub fn position_at(&self, index: usize) -> Result<Vec3, WaveError> {
        self.surface()?.position_at(index)
    }

    pub fn normal_at(&self, index: usize) -> Result<Vec3, WaveError> {
        self.surface()?.normal_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_params() -> WaveParams {
        WaveParams::new(5, 5, 1.0, 0.03, 1.0, 0.0)
    }

    #[test]
    fn test_uninitialized_rejects_everything() {
        let mut field = WaveField::new();
        assert!(!field.is_ready());
        assert!(matches!(field.advance(0.1), Err(WaveError::Uninitialized)));
        assert!(matches!(field.disturb(2, 2, 1.0), Err(WaveError::Uninitialized)));
        assert!(matches!(field.row_count(), Err(WaveError::Uninitialized)));
        assert!(matches!(field.column_count(), Err(WaveError::Uninitialized)));
        assert!(matches!(field.vertex_count(), Err(WaveError::Uninitialized)));
        assert!(matches!(field.triangle_count(), Err(WaveError::Uninitialized)));
        assert!(matches!(field.width(), Err(WaveError::Uninitialized)));
        assert!(matches!(field.depth(), Err(WaveError::Uninitialized)));
        assert!(matches!(field.position_at(0), Err(WaveError::Uninitialized)));
        assert!(matches!(field.normal_at(0), Err(WaveError::Uninitialized)));
    }

    #[test]
    fn test_shape_queries() {
        let mut field = WaveField::new();
        field.initialize(&WaveParams::new(4, 6, 2.0, 0.03, 1.0, 0.0)).unwrap();

        assert!(field.is_ready());
        assert_eq!(field.row_count().unwrap(), 4);
        assert_eq!(field.column_count().unwrap(), 6);
        assert_eq!(field.vertex_count().unwrap(), 24);
        assert_eq!(field.triangle_count().unwrap(), 3 * 5 * 2);
        assert_eq!(field.width().unwrap(), 10.0);
        assert_eq!(field.depth().unwrap(), 6.0);
    }

    #[test]
    fn test_example_scenario() {
        let mut field = WaveField::new();
        field.initialize(&example_params()).unwrap();
        assert!((0..25).all(|i| field.position_at(i).unwrap().y == 0.0));

        field.disturb(2, 2, 1.0).unwrap();
        let y = |field: &WaveField, row: usize, col: usize| {
            field.position_at(row * 5 + col).unwrap().y
        };
        assert_eq!(y(&field, 2, 2), 1.0);
        assert_eq!(y(&field, 1, 2), 0.5);
        assert_eq!(y(&field, 3, 2), 0.5);
        assert_eq!(y(&field, 2, 1), 0.5);
        assert_eq!(y(&field, 2, 3), 0.5);

        assert!(field.advance(0.03).unwrap());
        let k = field.surface().unwrap().coefficients();
        let expected = k.k1 * 0.0 + k.k2 * 1.0 + k.k3 * (0.5 + 0.5 + 0.5 + 0.5);
        assert!((y(&field, 2, 2) - expected).abs() < 1e-6);
        for i in 0..5 {
            assert_eq!(y(&field, 0, i), 0.0);
            assert_eq!(y(&field, 4, i), 0.0);
            assert_eq!(y(&field, i, 0), 0.0);
            assert_eq!(y(&field, i, 4), 0.0);
        }
    }

    #[test]
    fn test_disturb_corner_fails() {
        let mut field = WaveField::new();
        field.initialize(&example_params()).unwrap();
        assert!(matches!(
            field.disturb(0, 0, 1.0),
            Err(WaveError::DisturbOutOfRange { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_reinitialize_discards_state() {
        let mut field = WaveField::new();
        field.initialize(&example_params()).unwrap();
        field.disturb(2, 2, 1.0).unwrap();
        field.advance(0.03).unwrap();

        field
            .initialize(&WaveParams::new(12, 10, 0.5, 0.05, 2.0, 0.1))
            .unwrap();

        let surface = field.surface().unwrap();
        assert_eq!(surface.vertex_count(), 120);
        assert_eq!(surface.sweeps(), 0);
        assert!(surface.positions().iter().all(|p| p.y == 0.0));
        // No leftover clock time: a partial step does not sweep
        assert!(!field.advance(0.03).unwrap());
    }

    #[test]
    fn test_rejected_initialize_keeps_previous_grid() {
        let mut field = WaveField::new();
        field.initialize(&example_params()).unwrap();
        field.disturb(2, 2, 1.0).unwrap();

        let bad = WaveParams::new(2, 2, 1.0, 0.03, 1.0, 0.0);
        assert!(matches!(field.initialize(&bad), Err(WaveError::InvalidParams(_))));
        assert_eq!(field.row_count().unwrap(), 5);
        assert_eq!(field.position_at(12).unwrap().y, 1.0);
    }

    #[test]
    fn test_independent_fields_keep_their_own_clock() {
        let params = WaveParams::new(6, 6, 1.0, 0.25, 1.0, 0.0);
        let mut a = WaveField::new();
        let mut b = WaveField::new();
        a.initialize(&params).unwrap();
        b.initialize(&params).unwrap();

        assert!(!a.advance(0.125).unwrap());
        assert!(!b.advance(0.125).unwrap());
        assert!(a.advance(0.125).unwrap());
        assert!(!b.advance(0.0).unwrap());
    }
}
