//! In-memory cell grid built from an RGB raster

use crate::raster::RgbRaster;
use crate::types::HexColor;
use std::collections::HashSet;

/// One hex color per pixel, row-major.
///
/// Cell `(row, column)` (1-indexed) holds the color of pixel
/// `(column - 1, row - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSheet {
    columns: u32,
    rows: u32,
    cells: Vec<HexColor>,
}

impl PixelSheet {
    pub fn from_raster(raster: &RgbRaster) -> Self {
        let (columns, rows) = raster.dimensions();
        Self {
            columns,
            rows,
            cells: raster.pixels().map(HexColor::from).collect(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn cell_count(&self) -> u64 {
        self.cells.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Fill color of a 1-indexed cell, `None` outside the grid
    pub fn cell(&self, row: u32, column: u32) -> Option<HexColor> {
        if row == 0 || column == 0 || row > self.rows || column > self.columns {
            return None;
        }
        let index = (row as usize - 1) * self.columns as usize + (column as usize - 1);
        self.cells.get(index).copied()
    }

    /// Cells as `(row, column, color)`, 0-indexed, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, HexColor)> + '_ {
        let columns = self.columns.max(1) as usize;
        self.cells.iter().enumerate().map(move |(i, color)| {
            ((i / columns) as u32, (i % columns) as u32, *color)
        })
    }

    pub fn distinct_colors(&self) -> usize {
        self.cells.iter().collect::<HashSet<_>>().len()
    }
}
