//! ANSI truecolor emission of half-block cells.

use std::io::{self, Write};

use super::downsample::{CellColor, HalfCell};
use super::plan::RenderPlan;

/// Upper half block. Foreground paints the top half, background the bottom.
pub const HALF_BLOCK: char = '\u{2580}';

/// SGR reset-all-attributes sequence.
pub const RESET: &str = "\x1b[0m";

/// Write one cell: foreground = top, background = bottom, glyph, reset.
pub fn write_cell(out: &mut impl Write, cell: &HalfCell) -> io::Result<()> {
    let CellColor { r, g, b } = cell.top;
    write!(out, "\x1b[38;2;{};{};{}m", r, g, b)?;
    let CellColor { r, g, b } = cell.bottom;
    write!(out, "\x1b[48;2;{};{};{}m", r, g, b)?;
    write!(out, "{}{}", HALF_BLOCK, RESET)
}

/// Write the whole grid, one terminal row per line, left-padded for centering.
///
/// `cells` is row-major with `plan.target_width` cells per row; a trailing
/// partial row is ignored.
pub fn write_grid(out: &mut impl Write, cells: &[HalfCell], plan: &RenderPlan) -> io::Result<()> {
    if plan.target_width == 0 {
        return Ok(());
    }

    let padding = " ".repeat(plan.left_pad);
    for row in cells.chunks_exact(plan.target_width).take(plan.out_rows) {
        out.write_all(padding.as_bytes())?;
        for cell in row {
            write_cell(out, cell)?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(top: (u8, u8, u8), bottom: (u8, u8, u8)) -> HalfCell {
        HalfCell {
            top: CellColor::new(top.0, top.1, top.2),
            bottom: CellColor::new(bottom.0, bottom.1, bottom.2),
        }
    }

    fn plan(width: usize, rows: usize, pad: usize) -> RenderPlan {
        RenderPlan {
            target_width: width,
            target_height: rows * 2,
            out_rows: rows,
            left_pad: pad,
            scale: 1.0,
        }
    }

    #[test]
    fn test_cell_sequence_shape() {
        let mut out = Vec::new();
        write_cell(&mut out, &cell((1, 2, 3), (4, 5, 6))).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[38;2;1;2;3m\x1b[48;2;4;5;6m\u{2580}\x1b[0m"
        );
    }

    #[test]
    fn test_grid_pads_and_breaks_rows() {
        let cells = vec![cell((0, 0, 0), (0, 0, 0)); 4];
        let mut out = Vec::new();
        write_grid(&mut out, &cells, &plan(2, 2, 3)).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with("   \x1b["));
            assert_eq!(line.matches(HALF_BLOCK).count(), 2);
            assert!(line.ends_with(RESET));
        }
    }

    #[test]
    fn test_grid_without_padding() {
        let cells = vec![cell((255, 0, 0), (255, 0, 0))];
        let mut out = Vec::new();
        write_grid(&mut out, &cells, &plan(1, 1, 0)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[38;2;255;0;0m"));
        assert!(text.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_empty_grid_writes_nothing() {
        let mut out = Vec::new();
        write_grid(&mut out, &[], &plan(0, 0, 5)).unwrap();
        assert!(out.is_empty());
    }
}
