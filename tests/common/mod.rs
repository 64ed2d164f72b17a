//! Shared helpers for reading back written .xlsx packages

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read one XML part out of a written .xlsx package
pub fn read_part(xlsx: &Path, name: &str) -> String {
    let file = File::open(xlsx).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Value of `name="..."` inside a single XML element
fn attr(element: &str, name: &str) -> Option<String> {
    let element = format!(" {}", element);
    let needle = format!(" {}=\"", name);
    let start = element.find(&needle)? + needle.len();
    let len = element[start..].find('"')?;
    Some(element[start..start + len].to_string())
}

/// Body of the first `<tag ...>...</tag>` block
fn block<'a>(xml: &'a str, tag: &str) -> &'a str {
    let start = xml.find(&format!("<{}", tag)).unwrap();
    let end = xml[start..].find(&format!("</{}>", tag)).unwrap();
    &xml[start..start + end]
}

/// Solid fill color per cell reference: `"A1" -> "ff0000"`.
///
/// Follows cell `s` → `cellXfs[s].fillId` → `fills[fillId]` fgColor.
pub fn cell_fills(xlsx: &Path) -> BTreeMap<String, String> {
    let styles = read_part(xlsx, "xl/styles.xml");

    let fills: Vec<Option<String>> = block(&styles, "fills")
        .split("<fill>")
        .skip(1)
        .map(|fill| {
            let start = fill.find("<fgColor")?;
            attr(&fill[start + "<fgColor".len()..], "rgb")
        })
        .collect();

    let xf_fills: Vec<usize> = block(&styles, "cellXfs")
        .split("<xf ")
        .skip(1)
        .map(|xf| attr(xf, "fillId").unwrap().parse().unwrap())
        .collect();

    let sheet = read_part(xlsx, "xl/worksheets/sheet1.xml");
    sheet
        .split("<c ")
        .skip(1)
        .map(|cell| {
            let reference = attr(cell, "r").unwrap();
            let style: usize = attr(cell, "s").map_or(0, |s| s.parse().unwrap());
            let argb = fills[xf_fills[style]].clone().unwrap_or_default();
            // ARGB "FFRRGGBB" -> "rrggbb"
            let rgb = argb.get(2..).unwrap_or_default().to_lowercase();
            (reference, rgb)
        })
        .collect()
}

/// `<col .../>` elements of the first worksheet
pub fn column_elements(xlsx: &Path) -> Vec<String> {
    let sheet = read_part(xlsx, "xl/worksheets/sheet1.xml");
    sheet
        .split("<col ")
        .skip(1)
        .map(|col| col[..col.find("/>").unwrap()].to_string())
        .collect()
}

/// Excel's stored form of a column width of 3 characters
pub const STORED_WIDTH_3: &str = "3.7109375";

/// Column `(min, max, width)` spans of the first worksheet
pub fn column_spans(xlsx: &Path) -> Vec<(u32, u32, String)> {
    column_elements(xlsx)
        .iter()
        .map(|col| {
            (
                attr(col, "min").unwrap().parse().unwrap(),
                attr(col, "max").unwrap().parse().unwrap(),
                attr(col, "width").unwrap(),
            )
        })
        .collect()
}
