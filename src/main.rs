use anyhow::Context;
use clap::Parser;
use img2xl::cli;
use img2xl::types::{AlphaPolicy, ConvertOptions, DEFAULT_FACTOR};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "img2xl")]
#[command(about = "Turn a JPEG or PNG image into an Excel workbook, one colored cell per pixel.")]
#[command(long_about = "img2xl - Image to Excel pixel art

Every pixel of the image becomes one cell of the worksheet, filled with the
pixel's color. Columns are narrowed to 3 units so the grid keeps the image's
shape. The workbook is written next to the image as <name>.xlsx, replacing
any existing file.

Large images make very large workbooks, so the image is shrunk by 0.5 unless
--no-resize is given.

EXAMPLES:
  img2xl assets/dog.jpg                 # assets/dog.xlsx at half size
  img2xl assets/dog.jpg -f 0.2          # one fifth of the original size
  img2xl logo.png --no-resize           # one cell per original pixel
  img2xl logo.png --alpha drop --json   # keep raw colors, print JSON report

Set RUST_LOG for diagnostics (e.g. RUST_LOG=img2xl=debug).")]
#[command(version)]
struct Cli {
    /// Path to the image (.jpg or .png, lowercase extension)
    image: PathBuf,

    /// Export the image at its original size
    #[arg(long)]
    no_resize: bool,

    /// Scale factor applied before export (< 1 shrinks, > 1 enlarges)
    #[arg(short, long, default_value_t = DEFAULT_FACTOR)]
    factor: f64,

    /// Output workbook path (default: next to the image, with .xlsx extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// How transparent pixels are flattened
    #[arg(long, value_enum, default_value_t = AlphaPolicy::White)]
    alpha: AlphaPolicy,

    /// Print the conversion report as JSON
    #[arg(long)]
    json: bool,

    /// Show verbose conversion steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "img2xl=info" } else { "img2xl=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = ConvertOptions {
        resize: !args.no_resize,
        factor: args.factor,
        alpha: args.alpha,
        output: args.output,
    };

    let image = args.image;
    cli::convert(image.clone(), options, args.json, args.verbose)
        .with_context(|| format!("Failed to convert '{}'", image.display()))?;

    Ok(())
}
