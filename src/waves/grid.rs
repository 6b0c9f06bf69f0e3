//! Row-major 2D indexing for the simulation grid.
//!
//! Row 0 is the back edge (maximum z), column 0 the left edge (minimum x).

/// Grid dimensions plus the index arithmetic that goes with them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Linear index of `(row, col)`
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Inverse of [`GridShape::index`]
    #[inline]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols
    }

    /// True when `(row, col)` keeps at least `margin` samples to every edge
    pub fn within_margin(&self, row: usize, col: usize, margin: usize) -> bool {
        row >= margin
            && col >= margin
            && row + margin < self.rows
            && col + margin < self.cols
    }

    /// Interior samples in row-major order
    pub fn interior(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (1..self.rows.saturating_sub(1))
            .flat_map(move |row| (1..cols.saturating_sub(1)).map(move |col| (row, col)))
    }

    pub fn triangle_count(&self) -> usize {
        self.rows.saturating_sub(1) * self.cols.saturating_sub(1) * 2
    }
}
