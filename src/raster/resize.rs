//! Resizer: scale both dimensions by a factor, truncating to whole pixels

use super::RgbRaster;
use crate::error::{Img2XlError, Img2XlResult};
use crate::excel::{MAX_COLUMNS, MAX_ROWS};
use image::imageops::{self, FilterType};
use tracing::info;

/// Antialiasing filter used for both shrinking and enlarging
const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Compute `(floor(width * factor), floor(height * factor))`.
///
/// Fails when the factor is not a finite positive number, or when either
/// resulting dimension would be zero or overflow `u32`.
pub fn scaled_dimensions(width: u32, height: u32, factor: f64) -> Img2XlResult<(u32, u32)> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Img2XlError::InvalidArgument(format!(
            "resize factor must be a finite positive number, got {}",
            factor
        )));
    }

    let scale = |dim: u32| -> Img2XlResult<u32> {
        let scaled = (f64::from(dim) * factor).floor();
        if scaled > f64::from(u32::MAX) {
            return Err(Img2XlError::InvalidArgument(format!(
                "resize factor {} makes a dimension of {} too large",
                factor, dim
            )));
        }
        Ok(scaled as u32)
    };

    let (new_width, new_height) = (scale(width)?, scale(height)?);
    if new_width == 0 || new_height == 0 {
        return Err(Img2XlError::InvalidArgument(format!(
            "resize factor {} turns {}x{} into {}x{}; both dimensions must be at least 1",
            factor, width, height, new_width, new_height
        )));
    }

    Ok((new_width, new_height))
}

/// Resample `image` to `scaled_dimensions(.., factor)`.
///
/// Unchanged dimensions return the input as-is, so a factor of 1.0 leaves
/// pixel values untouched. Targets larger than a worksheet are rejected
/// before any pixel buffer is allocated.
pub fn resize_image(image: RgbRaster, factor: f64) -> Img2XlResult<RgbRaster> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = scaled_dimensions(width, height, factor)?;

    if new_width > MAX_COLUMNS || new_height > MAX_ROWS {
        return Err(Img2XlError::InvalidArgument(format!(
            "resize factor {} turns {}x{} into {}x{}, beyond the worksheet limit of {} columns x {} rows",
            factor, width, height, new_width, new_height, MAX_COLUMNS, MAX_ROWS
        )));
    }

    info!(factor, width, height, new_width, new_height, "Resizing image");

    if (new_width, new_height) == (width, height) {
        info!(factor, "Image resized");
        return Ok(image);
    }

    let resized = imageops::resize(image.as_rgb_image(), new_width, new_height, RESIZE_FILTER);
    info!(factor, "Image resized");
    Ok(RgbRaster::new(resized))
}
