//! Image → workbook conversion: load, optionally resize, export

use crate::error::{Img2XlError, Img2XlResult};
use crate::excel::{PixelSheet, PixelSheetExporter};
use crate::raster;
use crate::types::{ConversionReport, ConvertOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output path for an image: same directory, same stem, `.xlsx` extension.
///
/// `photos/dog.jpg` → `photos/dog.xlsx`. Only the last extension is replaced,
/// so `a.b.png` → `a.b.xlsx`; everything before the final dot is kept rather
/// than cutting the name at its first dot (which would give `a.xlsx`).
pub fn output_path_for(image_path: &Path) -> Img2XlResult<PathBuf> {
    let stem = image_path.file_stem().ok_or_else(|| {
        Img2XlError::InvalidInput(format!(
            "'{}' is not a path to an image file",
            image_path.display()
        ))
    })?;

    let mut file_name = stem.to_os_string();
    file_name.push(".xlsx");
    Ok(image_path.with_file_name(file_name))
}

/// Convert an image into an .xlsx workbook of colored cells.
///
/// Writes to `options.output` or, by default, next to the image (see
/// [`output_path_for`]), overwriting any existing file.
pub fn convert(image_path: &Path, options: &ConvertOptions) -> Img2XlResult<ConversionReport> {
    let output = match &options.output {
        Some(path) => path.clone(),
        None => output_path_for(image_path)?,
    };

    let image = raster::load_image(image_path, options.alpha)?;
    let source_size = image.dimensions();

    let image = if options.resize {
        raster::resize_image(image, options.factor)?
    } else {
        image
    };

    let sheet = PixelSheet::from_raster(&image);
    drop(image);

    let report = ConversionReport {
        input: image_path.to_path_buf(),
        output: output.clone(),
        source_size,
        sheet_size: (sheet.columns(), sheet.rows()),
        cells: sheet.cell_count(),
        distinct_colors: sheet.distinct_colors(),
    };

    PixelSheetExporter::new(sheet).export(&output)?;

    info!(output = %output.display(), "Process completed");
    Ok(report)
}

/// [`convert`] with `resize = true` and a factor of 0.5
pub fn convert_with_defaults(image_path: &Path) -> Img2XlResult<ConversionReport> {
    convert(image_path, &ConvertOptions::default())
}
