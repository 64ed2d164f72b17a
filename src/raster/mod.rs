//! Image loading and resampling
//!
//! Every decoded image is normalized to [`RgbRaster`], an 8-bit RGB bitmap.
//! Downstream stages only ever see this one type, so there is no per-format
//! inspection after the loader.

mod loader;
mod resize;

pub use loader::{load_image, SourceFormat};
pub use resize::{resize_image, scaled_dimensions};

use image::RgbImage;

/// A decoded, RGB-normalized image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    inner: RgbImage,
}

impl RgbRaster {
    pub fn new(inner: RgbImage) -> Self {
        Self { inner }
    }

    /// Build a raster from row-major RGB triples.
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 3]]) -> Option<Self> {
        let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
        RgbImage::from_raw(width, height, raw).map(Self::new)
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.inner.dimensions()
    }

    /// Color at column `x`, row `y` (0-indexed)
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.inner.get_pixel(x, y).0
    }

    /// Pixel colors in row-major order: row 0 left to right, then row 1, ...
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.inner.pixels().map(|p| p.0)
    }

    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.inner
    }

    pub fn into_rgb_image(self) -> RgbImage {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_are_row_major() {
        let raster = RgbRaster::from_pixels(
            2,
            2,
            &[[1, 0, 0], [2, 0, 0], [3, 0, 0], [4, 0, 0]],
        )
        .unwrap();

        assert_eq!(raster.pixel(1, 0), [2, 0, 0]);
        assert_eq!(raster.pixel(0, 1), [3, 0, 0]);
        let reds: Vec<u8> = raster.pixels().map(|p| p[0]).collect();
        assert_eq!(reds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        assert!(RgbRaster::from_pixels(2, 2, &[[0, 0, 0]; 3]).is_none());
    }
}
