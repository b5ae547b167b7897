//! Scale planning: fitting an image onto a fixed terminal grid.
//!
//! Each output row shows two vertically stacked source regions through one
//! half-block glyph, so the usable image height in "sub-rows" is twice the
//! number of terminal rows left after reserving space for chrome.

use crate::error::ArtError;

/// Default terminal width in columns.
pub const DEFAULT_COLS: u16 = 107;

/// Default terminal height in rows.
pub const DEFAULT_ROWS: u16 = 32;

/// Rows kept free below the art (prompt, banner).
pub const DEFAULT_RESERVED_ROWS: u16 = 2;

// W / (W / cols) is not always exactly cols in floating point.
const FLOOR_EPSILON: f64 = 1e-9;

/// Terminal grid the art must fit into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub cols: u16,
    pub rows: u16,
    pub reserved_rows: u16,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            reserved_rows: DEFAULT_RESERVED_ROWS,
        }
    }
}

impl TerminalGeometry {
    pub fn new(cols: u16, rows: u16, reserved_rows: u16) -> Self {
        Self {
            cols,
            rows,
            reserved_rows,
        }
    }

    /// Terminal rows available for art.
    pub fn max_out_rows(&self) -> u16 {
        self.rows.saturating_sub(self.reserved_rows)
    }

    /// Source-pixel rows available for art (two per terminal row).
    pub fn max_image_rows(&self) -> u32 {
        self.max_out_rows() as u32 * 2
    }

    fn validate(&self) -> Result<(), ArtError> {
        if self.cols == 0 || self.max_out_rows() == 0 {
            return Err(ArtError::InvalidGeometry {
                cols: self.cols,
                rows: self.rows,
                reserved_rows: self.reserved_rows,
            });
        }
        Ok(())
    }
}

/// Output layout derived from the image size and terminal geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPlan {
    /// Output width in columns
    pub target_width: usize,
    /// Output height in sub-rows (source-pixel units after scaling)
    pub target_height: usize,
    /// Terminal rows emitted
    pub out_rows: usize,
    /// Spaces written before each row to center the art
    pub left_pad: usize,
    /// Source pixels per output unit, shared by both axes
    pub scale: f64,
}

impl RenderPlan {
    /// Plan the render of a `width` x `height` image.
    ///
    /// The binding dimension decides the scale:
    /// `scale = max(width / cols, height / max_image_rows)`.
    /// With `upscale` disabled the scale never drops below 1, so small images
    /// keep one source pixel per output unit.
    ///
    /// # Errors
    /// * [`ArtError::DegenerateImage`] for a zero width or height
    /// * [`ArtError::InvalidGeometry`] for a grid with no usable cells
    pub fn compute(
        width: u32,
        height: u32,
        geometry: &TerminalGeometry,
        upscale: bool,
    ) -> Result<Self, ArtError> {
        if width == 0 || height == 0 {
            return Err(ArtError::DegenerateImage { width, height });
        }
        geometry.validate()?;

        let w = width as f64;
        let h = height as f64;
        let cols = geometry.cols as usize;

        let scale_x = w / geometry.cols as f64;
        let scale_y = h / geometry.max_image_rows() as f64;
        let mut scale = scale_x.max(scale_y);
        if !upscale {
            scale = scale.max(1.0);
        }

        let target_width = floor_div(w, scale).clamp(1, cols);
        let target_height = floor_div(h, scale).max(1);
        let out_rows = (target_height / 2).max(1);
        let left_pad = cols.saturating_sub(target_width) / 2;

        Ok(Self {
            target_width,
            target_height,
            out_rows,
            left_pad,
            scale,
        })
    }

    /// Source rows sampled per sub-row: `max(1, floor(scale))`.
    pub fn supersample_span(&self) -> usize {
        (self.scale.floor() as usize).max(1)
    }

    /// Number of half-block cells in the output grid.
    pub fn cell_count(&self) -> usize {
        self.out_rows * self.target_width
    }
}

fn floor_div(numerator: f64, denominator: f64) -> usize {
    (numerator / denominator + FLOOR_EPSILON).floor() as usize
}
