//! End-to-end tests for the sprite cutter, driving [`gamedev_tools::sheet::run`]
//! exactly as the binary does.

use std::path::Path;

use image::{GenericImageView, RgbImage};
use tempfile::TempDir;

use gamedev_tools::sheet::{Cli, CutError, run};

/// Creates a PNG whose pixel values encode their own coordinates.
fn create_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Temp dir without a `.` anywhere in its path. The output directory is
/// derived from the sheet path as typed, split at the first dot, so a
/// dotted temp dir name would derail it.
fn dot_free_temp_dir() -> TempDir {
    TempDir::with_prefix("sheets-").unwrap()
}

fn cli_for(sheet: &Path, frame_count: &str) -> Cli {
    Cli {
        sheet: Some(sheet.to_string_lossy().into_owned()),
        frame_count: Some(frame_count.to_string()),
    }
}

#[test]
fn cuts_a_sheet_into_equal_strips() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("attack.png");
    create_test_png(&sheet_path, 400, 100);

    run(cli_for(&sheet_path, "4")).unwrap();

    let out_dir = temp.path().join("attack");
    let source = image::open(&sheet_path).unwrap();
    for index in 0u32..4 {
        let strip = image::open(out_dir.join(format!("{index}.png"))).unwrap();
        assert_eq!((strip.width(), strip.height()), (100, 100));
        for x in 0..100 {
            for y in 0..100 {
                assert_eq!(
                    strip.get_pixel(x, y),
                    source.get_pixel(index * 100 + x, y),
                    "pixel mismatch in strip {index} at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn single_frame_reproduces_the_sheet() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("idle.png");
    create_test_png(&sheet_path, 48, 64);

    run(cli_for(&sheet_path, "1")).unwrap();

    let strip = image::open(temp.path().join("idle/0.png")).unwrap();
    let source = image::open(&sheet_path).unwrap();
    assert_eq!((strip.width(), strip.height()), (48, 64));
    for x in 0..48 {
        for y in 0..64 {
            assert_eq!(strip.get_pixel(x, y), source.get_pixel(x, y));
        }
    }
}

#[test]
fn remainder_pixels_become_an_extra_strip() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("jump.png");
    create_test_png(&sheet_path, 100, 20);

    run(cli_for(&sheet_path, "3")).unwrap();

    let out_dir = temp.path().join("jump");
    for index in 0..3 {
        let strip = image::open(out_dir.join(format!("{index}.png"))).unwrap();
        assert_eq!(strip.width(), 33);
    }
    let last = image::open(out_dir.join("3.png")).unwrap();
    assert_eq!(last.width(), 1);
    assert!(!out_dir.join("4.png").exists());
}

#[test]
fn output_directory_is_named_after_the_first_dot() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("walk.cycle.png");
    create_test_png(&sheet_path, 40, 10);

    run(cli_for(&sheet_path, "2")).unwrap();

    let out_dir = temp.path().join("walk");
    assert!(out_dir.join("0.png").exists());
    assert!(out_dir.join("1.png").exists());
}

#[test]
fn zero_frame_count_fails_without_creating_a_directory() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("roll.png");
    create_test_png(&sheet_path, 40, 10);

    let result = run(cli_for(&sheet_path, "0"));

    assert!(matches!(result, Err(CutError::ZeroFrameCount)));
    assert!(!temp.path().join("roll").exists());
}

#[test]
fn oversized_frame_count_fails_without_creating_a_directory() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("dash.png");
    create_test_png(&sheet_path, 10, 10);

    let result = run(cli_for(&sheet_path, "12"));

    assert!(matches!(result, Err(CutError::FrameCountExceedsWidth(12, 10))));
    assert!(!temp.path().join("dash").exists());
}

#[test]
fn non_numeric_frame_count_fails_without_creating_a_directory() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("slide.png");
    create_test_png(&sheet_path, 40, 10);

    let result = run(cli_for(&sheet_path, "eight"));

    assert!(matches!(result, Err(CutError::FrameCount(_))));
    assert!(!temp.path().join("slide").exists());
}

#[test]
fn negative_frame_count_is_a_parse_error() {
    let temp = dot_free_temp_dir();
    let sheet_path = temp.path().join("fall.png");
    create_test_png(&sheet_path, 40, 10);

    let result = run(cli_for(&sheet_path, "-2"));

    assert!(matches!(result, Err(CutError::FrameCount(_))));
}

#[test]
fn missing_sheet_is_an_io_error() {
    let temp = dot_free_temp_dir();

    let result = run(cli_for(&temp.path().join("gone.png"), "4"));

    assert!(matches!(result, Err(CutError::Io(_))));
}

#[test]
fn missing_operands_print_usage_instead_of_failing() {
    let cli = Cli {
        sheet: None,
        frame_count: None,
    };

    assert!(run(cli).is_ok());
    assert!(!Path::new("attack").exists());
}
