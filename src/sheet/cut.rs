//! Image loading and strip extraction.
//!
//! This is the I/O half of the cutter: decode the sheet, crop each region
//! planned by [`crate::sheet::plan`], and save the strips as numbered PNGs.

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use super::CutError;
use super::plan::SliceRegion;

/// Opens and decodes a sprite sheet.
pub fn load_sheet(path: &Path) -> Result<DynamicImage, CutError> {
    Ok(ImageReader::open(path)?.decode()?)
}

/// Crops each region out of the sheet and saves it as `<dir>/<index>.png`.
///
/// The directory is created if it does not already exist; an existing
/// directory is reused and its other contents are left alone. Strips are
/// numbered from 0 in region order.
pub fn cut_sheet(
    sheet: &DynamicImage,
    regions: &[SliceRegion],
    dir: &Path,
) -> Result<(), CutError> {
    if !dir.is_dir() {
        fs::create_dir(dir)?;
    }
    for (index, region) in regions.iter().enumerate() {
        let strip = sheet.crop_imm(region.left, 0, region.width, sheet.height());
        strip.save(dir.join(format!("{index}.png")))?;
    }
    Ok(())
}
