//! The `sprite-cutter` tool: slice a sprite sheet into frame strips.
//!
//! A sheet holding N frames side by side is cut into N vertical strips of
//! equal width, written as numbered PNGs inside a directory named after the
//! sheet file:
//!
//! ```text
//! $ sprite-cutter attack.png 8
//! attack/0.png  attack/1.png  ...  attack/7.png
//! ```
//!
//! [`plan`] computes strip geometry and the output directory name without
//! touching any pixels; [`cut`] decodes the sheet and writes the strips.

use std::path::Path;

use clap::Parser;
use thiserror::Error;

pub mod cut;
pub mod plan;

pub use cut::{cut_sheet, load_sheet};
pub use plan::{SliceRegion, output_dir_for, plan_slices};

/// Errors that can occur while cutting a sprite sheet.
#[derive(Error, Debug)]
pub enum CutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid frame count: {0}")]
    FrameCount(#[from] std::num::ParseIntError),

    #[error("Frame count must be at least 1")]
    ZeroFrameCount,

    #[error("Frame count {0} exceeds sheet width {1}px")]
    FrameCountExceedsWidth(u32, u32),
}

/// Command-line arguments for `sprite-cutter`.
///
/// Both operands are optional so that an incomplete invocation reaches
/// [`run`], which answers it with a usage line instead of a parse error.
#[derive(Parser)]
#[command(name = "sprite-cutter", version)]
#[command(about = "Slice a sprite sheet into equal-width frame strips")]
pub struct Cli {
    /// Path to the sprite sheet image
    pub sheet: Option<String>,

    /// Number of frames laid out side by side in the sheet
    pub frame_count: Option<String>,
}

/// Runs the cutter end to end for the given arguments.
///
/// With an operand missing this prints a usage line and returns `Ok`, so the
/// process still exits 0. Real failures (unreadable sheet, malformed count,
/// impossible geometry) surface as [`CutError`].
pub fn run(cli: Cli) -> Result<(), CutError> {
    let (Some(sheet), Some(frame_count)) = (cli.sheet, cli.frame_count) else {
        println!("{}", usage_line(&program_name()));
        return Ok(());
    };

    // The sheet is decoded before the count is parsed, so an unreadable
    // image wins over a malformed count when both arguments are bad.
    let img = cut::load_sheet(Path::new(&sheet))?;
    let frame_count: u32 = frame_count.parse()?;
    let regions = plan::plan_slices(img.width(), frame_count)?;
    cut::cut_sheet(&img, &regions, Path::new(plan::output_dir_for(&sheet)))
}

fn usage_line(program: &str) -> String {
    format!("usage: {program} <sheet.png> <frame_count>")
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "sprite-cutter".to_string())
}
