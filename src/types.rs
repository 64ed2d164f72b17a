use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

//==============================================================================
// Conversion Options
//==============================================================================

/// Default scale factor applied when resizing is enabled
pub const DEFAULT_FACTOR: f64 = 0.5;

/// How transparent pixels are flattened to RGB when an image is loaded
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AlphaPolicy {
    /// Composite over an opaque white background
    #[default]
    White,
    /// Discard the alpha channel and keep the raw color channels
    Drop,
}

/// Options for a single image → workbook conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Resize the image by `factor` before export
    pub resize: bool,
    /// Scale factor (< 1 shrinks, > 1 enlarges). Ignored when `resize` is false.
    pub factor: f64,
    /// Transparency handling during RGB normalization
    #[serde(default)]
    pub alpha: AlphaPolicy,
    /// Explicit output path. Defaults to `<image dir>/<image stem>.xlsx`.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            resize: true,
            factor: DEFAULT_FACTOR,
            alpha: AlphaPolicy::default(),
            output: None,
        }
    }
}

impl ConvertOptions {
    /// Options that export the image at its original size
    pub fn without_resize() -> Self {
        Self {
            resize: false,
            ..Self::default()
        }
    }

    /// Options that resize by the given factor
    pub fn with_factor(factor: f64) -> Self {
        Self {
            resize: true,
            factor,
            ..Self::default()
        }
    }
}

//==============================================================================
// Colors
//==============================================================================

/// An RGB color rendered as six lowercase hex digits (`00ff10`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.0
    }

    /// Packed `0xRRGGBB` value, the form the xlsx writer takes
    pub fn to_u32(&self) -> u32 {
        let [r, g, b] = self.0;
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }
}

impl From<[u8; 3]> for HexColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{:02x}{:02x}{:02x}", r, g, b)
    }
}

//==============================================================================
// Conversion Report
//==============================================================================

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Dimensions of the decoded image (width, height)
    pub source_size: (u32, u32),
    /// Dimensions of the exported grid (columns, rows)
    pub sheet_size: (u32, u32),
    pub cells: u64,
    pub distinct_colors: usize,
}
