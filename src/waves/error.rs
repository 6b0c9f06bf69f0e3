//! Error type shared by the simulation and its collaborators.

/// Failures surfaced by the wave simulation, mesh and snapshot layers
#[derive(Debug, thiserror::Error)]
pub enum WaveError {
    #[error("wave field used before initialize")]
    Uninitialized,

    #[error("invalid wave parameters: {0}")]
    InvalidParams(String),

    #[error("disturbance at ({row}, {col}) touches the border of a {rows}x{cols} grid")]
    DisturbOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("sample index {index} out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("elapsed time must be finite and >= 0, got {0}")]
    InvalidElapsed(f32),

    #[error("mesh is {mesh_rows}x{mesh_cols} but surface is {rows}x{cols}")]
    ShapeMismatch {
        mesh_rows: usize,
        mesh_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("failed to write snapshot: {0}")]
    Snapshot(#[from] image::ImageError),
}
