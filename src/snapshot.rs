//! Heightmap export of the current wave surface.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::waves::{WaveError, WaveSurface};

/// Render heights as an 8-bit grayscale image, one pixel per sample
///
/// `[-amplitude, amplitude]` maps linearly onto `[0, 255]`; anything outside
/// is clamped. Row 0 (the back edge) is the top of the image.
pub fn heightmap(surface: &WaveSurface, amplitude: f32) -> Result<GrayImage, WaveError> {
    if !(amplitude.is_finite() && amplitude > 0.0) {
        return Err(WaveError::InvalidParams(format!(
            "snapshot amplitude must be > 0, got {}",
            amplitude
        )));
    }

    let width = surface.column_count() as u32;
    let height = surface.row_count() as u32;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let h = surface.height(y as usize, x as usize);
        let t = ((h / amplitude) * 0.5 + 0.5).clamp(0.0, 1.0);
        Luma([(t * 255.0).round() as u8])
    }))
}

/// Write [`heightmap`] to `path` (format from the extension, PNG recommended)
pub fn save_heightmap(
    surface: &WaveSurface,
    path: impl AsRef<Path>,
    amplitude: f32,
) -> Result<(), WaveError> {
    let image = heightmap(surface, amplitude)?;
    image.save(path.as_ref())?;
    log::info!(
        "Saved {}x{} heightmap to {}",
        image.width(),
        image.height(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaveParams;

    fn disturbed_surface() -> WaveSurface {
        let mut surface =
            WaveSurface::new(&WaveParams::new(6, 8, 1.0, 0.03, 1.0, 0.0)).unwrap();
        surface.disturb(2, 3, 4.0).unwrap();
        surface
    }

    #[test]
    fn test_heightmap_dimensions_and_levels() {
        let image = heightmap(&disturbed_surface(), 2.0).unwrap();
        assert_eq!(image.dimensions(), (8, 6));

        // Flat border sits at mid gray
        assert_eq!(image.get_pixel(0, 0)[0], 128);
        // 4.0 clamps to white, 2.0 (the half-magnitude neighbor) is exactly white
        assert_eq!(image.get_pixel(3, 2)[0], 255);
        assert_eq!(image.get_pixel(3, 1)[0], 255);
    }

    #[test]
    fn test_negative_heights_go_dark() {
        let mut surface =
            WaveSurface::new(&WaveParams::new(6, 6, 1.0, 0.03, 1.0, 0.0)).unwrap();
        surface.disturb(2, 2, -1.0).unwrap();
        let image = heightmap(&surface, 2.0).unwrap();
        // -1.0 of 2.0 amplitude -> quarter gray
        assert_eq!(image.get_pixel(2, 2)[0], 64);
    }

    #[test]
    fn test_rejects_non_positive_amplitude() {
        assert!(heightmap(&disturbed_surface(), 0.0).is_err());
        assert!(heightmap(&disturbed_surface(), f32::NAN).is_err());
    }

    #[test]
    fn test_save_writes_png() {
        let path = std::env::temp_dir()
            .join(format!("wavesim-snapshot-{}.png", std::process::id()));
        save_heightmap(&disturbed_surface(), &path, 2.0).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(loaded.dimensions(), (8, 6));
        assert_eq!(loaded.get_pixel(3, 2)[0], 255);
        std::fs::remove_file(&path).unwrap();
    }
}
