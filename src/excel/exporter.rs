//! Excel exporter implementation

use super::PixelSheet;
use crate::error::{Img2XlError, Img2XlResult};
use crate::types::HexColor;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, Worksheet};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Width applied to every occupied column, keeps cells roughly square
pub const COLUMN_WIDTH: f64 = 3.0;

/// Largest grid an .xlsx worksheet can hold
pub const MAX_ROWS: u32 = 1_048_576;
pub const MAX_COLUMNS: u32 = 16_384;

/// Writes a [`PixelSheet`] to a single-worksheet .xlsx file
pub struct PixelSheetExporter {
    sheet: PixelSheet,
    /// One solid fill format per distinct color
    formats: HashMap<HexColor, Format>,
}

impl PixelSheetExporter {
    /// Create a new exporter, building the fill formats up front
    pub fn new(sheet: PixelSheet) -> Self {
        let mut formats = HashMap::new();
        for (_, _, color) in sheet.iter() {
            formats.entry(color).or_insert_with(|| solid_fill(color));
        }

        Self { sheet, formats }
    }

    pub fn sheet(&self) -> &PixelSheet {
        &self.sheet
    }

    /// Export the sheet to an Excel .xlsx file, overwriting `output_path`
    pub fn export(&self, output_path: &Path) -> Img2XlResult<()> {
        let (rows, columns) = (self.sheet.rows(), self.sheet.columns());
        if rows > MAX_ROWS || columns > MAX_COLUMNS {
            return Err(Img2XlError::InvalidArgument(format!(
                "{}x{} pixels exceed the worksheet limit of {} columns x {} rows",
                columns, rows, MAX_COLUMNS, MAX_ROWS
            )));
        }

        info!(
            output = %output_path.display(),
            rows,
            columns,
            formats = self.formats.len(),
            "Starting export of image to Excel file"
        );

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.write_pixels(worksheet)?;
        self.set_column_widths(worksheet)?;

        // Save workbook to file
        workbook
            .save(output_path)
            .map_err(|e| Img2XlError::Export(format!("Failed to save Excel file: {}", e)))?;

        info!(output = %output_path.display(), "Image exported to Excel file");
        Ok(())
    }

    /// Write one blank, solid-filled cell per pixel
    fn write_pixels(&self, worksheet: &mut Worksheet) -> Img2XlResult<()> {
        for (row, col, color) in self.sheet.iter() {
            let format = self
                .formats
                .get(&color)
                .ok_or_else(|| Img2XlError::Export(format!("No fill prepared for {}", color)))?;

            worksheet
                .write_blank(row, col as u16, format)
                .map_err(|e| Img2XlError::Export(format!("Failed to write cell: {}", e)))?;
        }
        debug!(cells = self.sheet.cell_count(), "Cells written");
        Ok(())
    }

    /// Set each occupied column's width once
    fn set_column_widths(&self, worksheet: &mut Worksheet) -> Img2XlResult<()> {
        if self.sheet.rows() == 0 {
            return Ok(());
        }
        for col in 0..self.sheet.columns() {
            worksheet
                .set_column_width(col as u16, COLUMN_WIDTH)
                .map_err(|e| Img2XlError::Export(format!("Failed to set column width: {}", e)))?;
        }
        Ok(())
    }
}

/// Solid pattern with the same start and end color
fn solid_fill(color: HexColor) -> Format {
    Format::new()
        .set_pattern(FormatPattern::Solid)
        .set_foreground_color(Color::RGB(color.to_u32()))
        .set_background_color(Color::RGB(color.to_u32()))
}
