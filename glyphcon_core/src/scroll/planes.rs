//! The two per-cell byte planes uploaded to the glyph shader.
//!
//! Both planes are dense `rows × cols × 3` arrays in row-major order, so a
//! row is one contiguous slice and scrolling is a single `copy_within`.

use std::ops::Range;

use crate::glyph::PackedGlyph;

/// Bytes per cell in each plane.
pub const TRIPLE: usize = 3;

/// Parallel `bytes_012` / `bytes_345` planes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPlanes {
    rows: usize,
    cols: usize,
    bytes_012: Vec<u8>,
    bytes_345: Vec<u8>,
}

impl CellPlanes {
    /// Zero-filled planes. Dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "planes need at least one cell");
        let len = rows * cols * TRIPLE;
        Self {
            rows,
            cols,
            bytes_012: vec![0; len],
            bytes_345: vec![0; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bytes_012(&self) -> &[u8] {
        &self.bytes_012
    }

    pub fn bytes_345(&self) -> &[u8] {
        &self.bytes_345
    }

    /// Whether every byte of both planes is zero.
    pub fn is_zeroed(&self) -> bool {
        self.bytes_012.iter().chain(&self.bytes_345).all(|&b| b == 0)
    }

    /// The packed glyph stored at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<PackedGlyph> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let at = (row * self.cols + col) * TRIPLE;
        let mut cell = PackedGlyph::EMPTY;
        cell.bytes_012.copy_from_slice(&self.bytes_012[at..at + TRIPLE]);
        cell.bytes_345.copy_from_slice(&self.bytes_345[at..at + TRIPLE]);
        Some(cell)
    }

    pub(super) fn set_cell(&mut self, row: usize, col: usize, cell: PackedGlyph) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let at = (row * self.cols + col) * TRIPLE;
        self.bytes_012[at..at + TRIPLE].copy_from_slice(&cell.bytes_012);
        self.bytes_345[at..at + TRIPLE].copy_from_slice(&cell.bytes_345);
    }

    pub(super) fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let range = self.row_range(row);
        self.bytes_012[range.clone()].fill(0);
        self.bytes_345[range].fill(0);
    }

    pub(super) fn fill_zero(&mut self) {
        self.bytes_012.fill(0);
        self.bytes_345.fill(0);
    }

    /// Move every row one step toward row 0. Row 0 is overwritten; the last
    /// row keeps its old contents until the caller rewrites it.
    pub(super) fn shift_toward_start(&mut self) {
        let stride = self.stride();
        let len = self.bytes_012.len();
        self.bytes_012.copy_within(stride..len, 0);
        self.bytes_345.copy_within(stride..len, 0);
    }

    /// Move every row one step away from row 0. The last row is overwritten;
    /// row 0 keeps its old contents until the caller rewrites it.
    pub(super) fn shift_toward_end(&mut self) {
        let stride = self.stride();
        let len = self.bytes_012.len();
        self.bytes_012.copy_within(0..len - stride, stride);
        self.bytes_345.copy_within(0..len - stride, stride);
    }

    fn stride(&self) -> usize {
        self.cols * TRIPLE
    }

    fn row_range(&self, row: usize) -> Range<usize> {
        let stride = self.stride();
        row * stride..(row + 1) * stride
    }
}
