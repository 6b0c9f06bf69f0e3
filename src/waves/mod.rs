//! Wave height-field simulation: a damped 2D wave equation on a regular grid.
//!
//! The renderer owns a [`WaveField`], calls `advance(dt)` once per frame,
//! optionally `disturb`s it, and copies positions/normals into a vertex
//! buffer (see [`crate::mesh::WaveMesh`]).

mod error;
mod field;
mod grid;
mod surface;

// Re-export public types
pub use error::WaveError;
pub use field::WaveField;
pub use grid::GridShape;
pub use surface::{StencilCoefficients, WaveSurface};
