//! Wave grid mesh: fixed triangle topology plus a per-frame vertex refresh.

use bytemuck::{Pod, Zeroable};

use crate::waves::{WaveError, WaveSurface};

/// Vertex data for the wave mesh (position + normal + UV, 32 bytes)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct WaveVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangle-list indices for a `rows x cols` row-major grid
///
/// Two triangles per cell:
/// `(i,j) (i,j+1) (i+1,j)` and `(i+1,j) (i,j+1) (i+1,j+1)`.
pub fn grid_indices(rows: usize, cols: usize) -> Vec<u32> {
    let cells = rows.saturating_sub(1) * cols.saturating_sub(1);
    let mut indices = Vec::with_capacity(cells * 6);

    for i in 0..rows.saturating_sub(1) {
        for j in 0..cols.saturating_sub(1) {
            let top_left = (i * cols + j) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((i + 1) * cols + j) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[
                top_left,
                top_right,
                bottom_left,
                bottom_left,
                top_right,
                bottom_right,
            ]);
        }
    }

    indices
}

/// CPU-side copy of the wave surface laid out for a dynamic vertex buffer
pub struct WaveMesh {
    pub vertices: Vec<WaveVertex>,
    pub indices: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl WaveMesh {
    /// Build topology once and fill vertices from the current surface
    pub fn new(surface: &WaveSurface) -> Result<Self, WaveError> {
        let rows = surface.row_count();
        let cols = surface.column_count();
        let mut mesh = Self {
            vertices: vec![WaveVertex::default(); surface.vertex_count()],
            indices: grid_indices(rows, cols),
            rows,
            cols,
        };
        mesh.refresh(surface)?;
        Ok(mesh)
    }

    /// Copy positions and normals, and derive UVs in [0, 1] from x/z
    pub fn refresh(&mut self, surface: &WaveSurface) -> Result<(), WaveError> {
        if surface.row_count() != self.rows || surface.column_count() != self.cols {
            return Err(WaveError::ShapeMismatch {
                mesh_rows: self.rows,
                mesh_cols: self.cols,
                rows: surface.row_count(),
                cols: surface.column_count(),
            });
        }

        let width = surface.width();
        let depth = surface.depth();
        for (index, vertex) in self.vertices.iter_mut().enumerate() {
            let position = surface.position_at(index)?;
            let normal = surface.normal_at(index)?;

            vertex.position = position.to_array();
            vertex.normal = normal.to_array();
            vertex.uv = [0.5 + position.x / width, 0.5 - position.z / depth];
        }
        Ok(())
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer contents for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
