//! Render-side view of the wave surface, kept free of any GPU API.

mod grid;
mod texture;

// Re-export public types
pub use grid::{grid_indices, WaveMesh, WaveVertex};
pub use texture::TextureScroll;
