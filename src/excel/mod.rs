//! Excel export of pixel grids
//!
//! - [`PixelSheet`]: the in-memory cell grid, one hex color per pixel
//! - [`PixelSheetExporter`]: writes the grid to an .xlsx workbook as solid fills

mod exporter;
mod sheet;

pub use exporter::{PixelSheetExporter, COLUMN_WIDTH, MAX_COLUMNS, MAX_ROWS};
pub use sheet::PixelSheet;
