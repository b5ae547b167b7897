//! End-to-end tests: image files on disk through to the ANSI stream.

use halfblock_art::pipeline::{render_path, RenderSettings, BANNER};
use halfblock_art::render::{FilterMode, TerminalGeometry, HALF_BLOCK};
use halfblock_art::ArtError;
use std::path::PathBuf;
use tempfile::TempDir;

fn quiet() -> RenderSettings {
    RenderSettings {
        banner: false,
        ..RenderSettings::default()
    }
}

fn write_png(dir: &TempDir, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.path().join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save(&path)
        .unwrap();
    path
}

fn render_to_string(path: &std::path::Path, settings: &RenderSettings) -> (String, halfblock_art::render::RenderPlan) {
    let mut out = Vec::new();
    let plan = render_path(path, settings, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), plan)
}

#[test]
fn test_solid_red_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "red.png", 214, 64, [255, 0, 0]);

    let (text, plan) = render_to_string(&path, &quiet());
    assert_eq!(plan.scale, 2.0);
    assert_eq!(plan.target_width, 107);
    assert_eq!(plan.target_height, 32);
    assert_eq!(plan.out_rows, 16);
    assert_eq!(plan.left_pad, 0);

    let cell = "\x1b[38;2;255;0;0m\x1b[48;2;255;0;0m\u{2580}\x1b[0m";
    let expected_line = cell.repeat(107);
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), 16);
    for line in lines {
        assert_eq!(line, expected_line);
    }
}

#[test]
fn test_small_image_is_centered() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "small.png", 10, 10, [0, 128, 255]);

    let (text, plan) = render_to_string(&path, &quiet());
    assert!(plan.left_pad > 0);
    assert_eq!(plan.supersample_span(), 1);

    let pad = " ".repeat(plan.left_pad);
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), plan.out_rows);
    for line in lines {
        assert!(line.starts_with(&pad));
        assert!(!line[plan.left_pad..].starts_with(' '));
        assert_eq!(line.matches(HALF_BLOCK).count(), plan.target_width);
    }
}

#[test]
fn test_small_image_without_upscale() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "tiny.png", 10, 10, [0, 0, 0]);
    let settings = RenderSettings {
        upscale: false,
        ..quiet()
    };

    let (text, plan) = render_to_string(&path, &settings);
    assert_eq!(plan.target_width, 10);
    assert_eq!(plan.out_rows, 5);
    assert_eq!(plan.left_pad, 48);
    assert_eq!(text.matches(HALF_BLOCK).count(), 50);
}

#[test]
fn test_single_pixel_renders_one_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "dot.png", 1, 1, [10, 200, 30]);
    let settings = RenderSettings {
        upscale: false,
        ..quiet()
    };

    let (text, plan) = render_to_string(&path, &settings);
    assert_eq!(plan.cell_count(), 1);
    assert_eq!(text.matches(HALF_BLOCK).count(), 1);
    assert!(text.contains("\x1b[38;2;10;200;30m"));
    // No source row below the pixel: bottom half falls back to black.
    assert!(text.contains("\x1b[48;2;0;0;0m"));
}

#[test]
fn test_missing_file_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.png");
    let mut out = Vec::new();

    let err = render_path(&path, &RenderSettings::default(), &mut out).unwrap_err();
    assert!(matches!(err, ArtError::Load { .. }));
    assert!(err.is_load_failure());
    assert!(out.is_empty());
}

#[test]
fn test_corrupt_file_is_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let mut out = Vec::new();
    let err = render_path(&path, &RenderSettings::default(), &mut out).unwrap_err();
    assert!(matches!(err, ArtError::Load { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_alpha_channel_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 255, 0, 0]))
        .save(&path)
        .unwrap();

    let (text, _) = render_to_string(&path, &quiet());
    assert!(text.contains("\x1b[38;2;255;255;0m"));
}

#[test]
fn test_banner_and_custom_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "wide.png", 400, 100, [255, 255, 255]);
    let settings = RenderSettings {
        geometry: TerminalGeometry::new(40, 12, 2),
        filter: FilterMode::Exact,
        ..RenderSettings::default()
    };

    let (text, plan) = render_to_string(&path, &settings);
    assert!(text.starts_with(BANNER));
    assert_eq!(plan.scale, 10.0);
    assert_eq!(plan.target_width, 40);
    assert_eq!(plan.out_rows, 5);

    let grid = &text[BANNER.len()..];
    assert_eq!(grid.lines().count(), 5);
    assert!(grid.contains("\x1b[38;2;255;255;255m\x1b[48;2;255;255;255m"));
}
