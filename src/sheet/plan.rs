//! Pure slice-geometry calculations for sprite sheets.
//!
//! Everything in this module is arithmetic on widths and offsets. No pixels
//! are touched here; [`crate::sheet::cut`] applies the resulting regions to
//! an actual image.

use super::CutError;

/// One vertical strip of a sprite sheet.
///
/// Slices always span the full sheet height, so a region is fully described
/// by its left edge and its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRegion {
    /// Horizontal offset of the strip's left edge, in pixels.
    pub left: u32,
    /// Strip width in pixels.
    pub width: u32,
}

/// Computes the vertical strips that divide a sheet into `frame_count` frames.
///
/// The nominal strip width is `sheet_width / frame_count`, truncated. When
/// the division is not exact the leftover pixels form one extra, narrower
/// strip at the right edge:
///
/// - 400px / 4 frames: four strips of 100px
/// - 100px / 3 frames: strips of 33, 33, 33 and 1px
/// - 0px sheet: no strips at all
///
/// # Errors
///
/// Returns [`CutError::ZeroFrameCount`] for a frame count of zero, and
/// [`CutError::FrameCountExceedsWidth`] when the count is larger than the
/// sheet width (the nominal strip would be 0px wide).
pub fn plan_slices(sheet_width: u32, frame_count: u32) -> Result<Vec<SliceRegion>, CutError> {
    if frame_count == 0 {
        return Err(CutError::ZeroFrameCount);
    }
    let crop_width = sheet_width / frame_count;
    if crop_width == 0 && sheet_width > 0 {
        return Err(CutError::FrameCountExceedsWidth(frame_count, sheet_width));
    }
    // crop_width can still be 0 here only for a 0px sheet, where the range
    // below is empty; max(1) keeps step_by from panicking on that input.
    Ok((0..sheet_width)
        .step_by(crop_width.max(1) as usize)
        .map(|left| SliceRegion {
            left,
            width: crop_width.min(sheet_width - left),
        })
        .collect())
}

/// Derives the output directory name from the sheet path as typed.
///
/// The directory is everything before the first `.` in the path string:
///
/// - `attack.png` becomes `attack`
/// - `sprites/player_idle.png` becomes `sprites/player_idle`
/// - `v1.0/attack.png` becomes `v1` (the first dot wins, wherever it is)
/// - a path with no dot is used unchanged
pub fn output_dir_for(sheet_path: &str) -> &str {
    match sheet_path.find('.') {
        Some(idx) => &sheet_path[..idx],
        None => sheet_path,
    }
}
