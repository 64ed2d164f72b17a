//! Image loader: extension check, decode, RGB normalization

use super::RgbRaster;
use crate::error::{Img2XlError, Img2XlResult};
use crate::types::AlphaPolicy;
use image::{DynamicImage, ImageReader, Rgb, RgbImage, RgbaImage};
use std::path::Path;
use tracing::{debug, info};

/// Input formats accepted by the loader, keyed on the exact file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
}

impl SourceFormat {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 2] = ["jpg", "png"];

    /// Case-sensitive: `photo.JPG` is rejected
    pub fn from_path(path: &Path) -> Img2XlResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("jpg") => Ok(SourceFormat::Jpeg),
            Some("png") => Ok(SourceFormat::Png),
            other => Err(Img2XlError::UnsupportedFormat(format!(
                "'{}' has extension {:?}; only {:?} are supported",
                path.display(),
                other.unwrap_or(""),
                Self::SUPPORTED_EXTENSIONS
            ))),
        }
    }
}

/// Open and decode a `.jpg` or `.png` file into an RGB raster.
///
/// The extension is validated before the file is opened. Images that are not
/// already 8-bit RGB are converted, with transparency flattened per `alpha`.
pub fn load_image(path: &Path, alpha: AlphaPolicy) -> Img2XlResult<RgbRaster> {
    if path.as_os_str().is_empty() || path.file_name().is_none() {
        return Err(Img2XlError::InvalidInput(format!(
            "'{}' is not a path to an image file",
            path.display()
        )));
    }

    let format = SourceFormat::from_path(path)?;
    info!(path = %path.display(), ?format, "Importing image");

    let decoded = ImageReader::open(path)
        .map_err(|e| Img2XlError::Decode(format!("Failed to open '{}': {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| Img2XlError::Decode(format!("Failed to read '{}': {}", path.display(), e)))?
        .decode()
        .map_err(|e| {
            Img2XlError::Decode(format!("Failed to decode '{}': {}", path.display(), e))
        })?;

    let raster = RgbRaster::new(normalize(decoded, alpha));
    info!(
        width = raster.width(),
        height = raster.height(),
        "Image imported"
    );
    Ok(raster)
}

fn normalize(decoded: DynamicImage, alpha: AlphaPolicy) -> RgbImage {
    let color = decoded.color();
    if let DynamicImage::ImageRgb8(rgb) = decoded {
        return rgb;
    }

    debug!(?color, ?alpha, "Converting image to 8-bit RGB");
    if color.has_alpha() && alpha == AlphaPolicy::White {
        composite_over_white(&decoded.into_rgba8())
    } else {
        decoded.into_rgb8()
    }
}

fn composite_over_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([blend(r, a), blend(g, a), blend(b, a)])
    })
}

/// `round((c * a + 255 * (255 - a)) / 255)`
fn blend(channel: u8, alpha: u8) -> u8 {
    let c = u32::from(channel);
    let a = u32::from(alpha);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::path::PathBuf;

    #[test]
    fn test_extension_is_case_sensitive() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a/b.jpg")).unwrap(),
            SourceFormat::Jpeg
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("b.png")).unwrap(),
            SourceFormat::Png
        );
        for bad in ["b.JPG", "b.jpeg", "b.gif", "b", "b.png.bak"] {
            assert!(
                matches!(
                    SourceFormat::from_path(Path::new(bad)),
                    Err(Img2XlError::UnsupportedFormat(_))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_path_is_invalid_input() {
        let result = load_image(&PathBuf::new(), AlphaPolicy::White);
        assert!(matches!(result, Err(Img2XlError::InvalidInput(_))));
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(10, 255), 10);
        assert_eq!(blend(10, 0), 255);
        assert_eq!(blend(0, 128), 127);
    }

    #[test]
    fn test_normalize_rgba_policies() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, Rgba([0, 0, 0, 0]));

        let white = normalize(DynamicImage::ImageRgba8(rgba.clone()), AlphaPolicy::White);
        assert_eq!(white.get_pixel(0, 0).0, [255, 255, 255]);

        let dropped = normalize(DynamicImage::ImageRgba8(rgba), AlphaPolicy::Drop);
        assert_eq!(dropped.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_normalize_grayscale_expands_channels() {
        let gray = image::GrayImage::from_pixel(1, 1, image::Luma([200]));
        let rgb = normalize(DynamicImage::ImageLuma8(gray), AlphaPolicy::White);
        assert_eq!(rgb.get_pixel(0, 0).0, [200, 200, 200]);
    }
}
