//! img2xl - turn an image into an Excel workbook, one colored cell per pixel
//!
//! This library loads a JPEG or PNG image, optionally rescales it, and writes
//! an .xlsx file whose cells are filled with the colors of the image's pixels.
//!
//! # Pipeline
//!
//! - Load: validate the extension, decode, normalize to 8-bit RGB
//! - Resize (optional): scale both dimensions by a factor with an antialiasing filter
//! - Export: one solid-filled cell per pixel, every column 3 units wide
//!
//! # Example
//!
//! ```no_run
//! use img2xl::{convert, ConvertOptions};
//! use std::path::Path;
//!
//! let report = convert(Path::new("assets/dog.jpg"), &ConvertOptions::with_factor(0.2))?;
//!
//! println!("Wrote {}", report.output.display());
//! println!("Cells: {}", report.cells);
//! # Ok::<(), img2xl::error::Img2XlError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod pipeline;
pub mod raster;
pub mod types;

// Re-export commonly used types
pub use error::{Img2XlError, Img2XlResult};
pub use pipeline::{convert, convert_with_defaults, output_path_for};
pub use types::{AlphaPolicy, ConversionReport, ConvertOptions, HexColor};
