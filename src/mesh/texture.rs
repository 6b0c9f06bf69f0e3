//! Scrolling water texture transform.

use glam::{Mat3, Vec2};

/// Tiled, drifting texture coordinates for the water surface
#[derive(Debug, Clone)]
pub struct TextureScroll {
    /// Texture repeats across the grid
    pub tiling: Vec2,

    /// Drift rate in UV units per second
    pub velocity: Vec2,

    offset: Vec2,
}

impl Default for TextureScroll {
    fn default() -> Self {
        Self {
            tiling: Vec2::splat(5.0),
            velocity: Vec2::new(0.1, 0.05),
            offset: Vec2::ZERO,
        }
    }
}

impl TextureScroll {
    pub fn advance(&mut self, dt: f32) {
        self.offset += self.velocity * dt;
        // Keep the offset small; the texture wraps every unit anyway
        self.offset = self.offset.fract();
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// UV transform: tile first, then translate
    pub fn transform(&self) -> Mat3 {
        Mat3::from_translation(self.offset) * Mat3::from_scale(self.tiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_drifts() {
        let mut scroll = TextureScroll::default();
        scroll.advance(2.0);
        assert!((scroll.offset() - Vec2::new(0.2, 0.1)).length() < 1e-6);
    }

    #[test]
    fn test_offset_wraps() {
        let mut scroll = TextureScroll::default();
        scroll.advance(15.0);
        let offset = scroll.offset();
        assert!((0.0..1.0).contains(&offset.x));
        assert!((offset.x - 0.5).abs() < 1e-5);
        assert!((offset.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_transform_tiles_then_translates() {
        let mut scroll = TextureScroll::default();
        scroll.advance(1.0);
        let m = scroll.transform();

        let origin = m.transform_point2(Vec2::ZERO);
        let corner = m.transform_point2(Vec2::ONE);
        assert!((origin - Vec2::new(0.1, 0.05)).length() < 1e-6);
        assert!((corner - Vec2::new(5.1, 5.05)).length() < 1e-5);
    }
}
