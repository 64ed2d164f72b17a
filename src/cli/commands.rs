use crate::error::Img2XlResult;
use crate::pipeline;
use crate::types::{ConversionReport, ConvertOptions};
use colored::Colorize;
use std::path::PathBuf;

/// Execute the convert command
pub fn convert(
    image: PathBuf,
    options: ConvertOptions,
    json: bool,
    verbose: bool,
) -> Img2XlResult<ConversionReport> {
    if json {
        let report = pipeline::convert(&image, &options)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report);
    }

    println!("{}", "🖼  img2xl - Image to Excel".bold().green());
    println!("   Image: {}", image.display());
    if options.resize {
        println!("   Resize factor: {}", options.factor.to_string().bright_yellow());
    } else {
        println!("   Resize: {}", "off".bright_yellow());
    }
    println!();

    if verbose {
        println!("{}", "📖 Importing image...".cyan());
        if options.resize {
            println!("{}", format!("📐 Resizing by {}...", options.factor).cyan());
        }
        println!("{}", "📊 Exporting to Excel...".cyan());
    }

    let report = pipeline::convert(&image, &options)?;

    if verbose {
        println!(
            "   Source size: {}x{}",
            report.source_size.0, report.source_size.1
        );
        println!("   Distinct colors: {}\n", report.distinct_colors);
    }

    println!("{}", "✅ Export Complete!".bold().green());
    println!("   Excel file: {}", report.output.display());
    println!(
        "   Grid: {} columns x {} rows ({} cells)\n",
        report.sheet_size.0, report.sheet_size.1, report.cells
    );

    Ok(report)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
