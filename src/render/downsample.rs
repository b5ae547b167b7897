//! Box-filter downsampling of linear-light images to half-block cells.

use std::ops::Range;

use super::gamma::Gamma;
use super::linear::LinearImage;
use super::plan::RenderPlan;

/// RGB color for one half of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One terminal character: the top half is drawn in the foreground color,
/// the bottom half in the background color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfCell {
    pub top: CellColor,
    pub bottom: CellColor,
}

/// How source windows are derived from the scale factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Integer windows from truncated bounds; vertical span fixed at
    /// `max(1, floor(scale))` rows. Columns are at least one pixel wide, so
    /// upscaled images (`scale < 1`) never get empty column windows.
    #[default]
    Truncated,
    /// Every pixel weighted by its overlap with the fractional sub-cell rectangle.
    Exact,
}

impl FilterMode {
    pub fn name(&self) -> &'static str {
        match self {
            FilterMode::Truncated => "truncated",
            FilterMode::Exact => "exact",
        }
    }
}

/// Downsample a linear image to the plan's cell grid.
///
/// # Returns
/// `plan.out_rows * plan.target_width` cells in row-major order.
pub fn render_cells(
    image: &LinearImage,
    plan: &RenderPlan,
    mode: FilterMode,
    gamma: &Gamma,
) -> Vec<HalfCell> {
    let mut cells = Vec::new();
    render_cells_into(image, plan, mode, gamma, &mut cells);
    cells
}

/// Allocation-reusing version of [`render_cells`].
///
/// # Returns
/// The number of cells written to the buffer.
pub fn render_cells_into(
    image: &LinearImage,
    plan: &RenderPlan,
    mode: FilterMode,
    gamma: &Gamma,
    buffer: &mut Vec<HalfCell>,
) -> usize {
    buffer.clear();
    buffer.reserve(plan.cell_count());

    for y in 0..plan.out_rows {
        for x in 0..plan.target_width {
            let (top, bottom) = match mode {
                FilterMode::Truncated => truncated_pair(image, plan, x, y),
                FilterMode::Exact => exact_pair(image, plan, x, y),
            };
            buffer.push(HalfCell {
                top: quantize(top, gamma),
                bottom: quantize(bottom, gamma),
            });
        }
    }

    buffer.len()
}

fn quantize(linear: [f32; 3], gamma: &Gamma) -> CellColor {
    CellColor {
        r: gamma.compress(linear[0]),
        g: gamma.compress(linear[1]),
        b: gamma.compress(linear[2]),
    }
}

fn truncated_pair(image: &LinearImage, plan: &RenderPlan, x: usize, y: usize) -> ([f32; 3], [f32; 3]) {
    let scale = plan.scale;
    let span = plan.supersample_span();

    let y_top_start = (y as f64 * 2.0 * scale) as usize;
    let y_bot_start = ((y * 2 + 1) as f64 * scale) as usize;
    let x_start = (x as f64 * scale) as usize;
    // At least one column, like the row span; only matters when scale < 1.
    let x_end = (((x + 1) as f64 * scale) as usize).max(x_start + 1);

    let top = average_window(image, y_top_start..y_top_start + span, x_start..x_end);
    let bottom = average_window(image, y_bot_start..y_bot_start + span, x_start..x_end);
    (top, bottom)
}

/// Mean of the in-bounds samples of a window. Out-of-range rows and columns
/// are skipped; an empty window averages to zero.
fn average_window(image: &LinearImage, rows: Range<usize>, cols: Range<usize>) -> [f32; 3] {
    let rows = rows.start.min(image.height)..rows.end.min(image.height);
    let cols = cols.start.min(image.width)..cols.end.min(image.width);

    let mut sum = [0.0f32; 3];
    let mut count = 0u32;

    for py in rows {
        for px in cols.clone() {
            let s = image.sample(px, py);
            sum[0] += s[0];
            sum[1] += s[1];
            sum[2] += s[2];
            count += 1;
        }
    }

    let divisor = count.max(1) as f32;
    [sum[0] / divisor, sum[1] / divisor, sum[2] / divisor]
}

fn exact_pair(image: &LinearImage, plan: &RenderPlan, x: usize, y: usize) -> ([f32; 3], [f32; 3]) {
    let scale = plan.scale;
    let x0 = x as f64 * scale;
    let x1 = (x + 1) as f64 * scale;
    let top_y0 = (y * 2) as f64 * scale;
    let bot_y0 = (y * 2 + 1) as f64 * scale;

    let top = average_coverage(image, (x0, x1), (top_y0, top_y0 + scale));
    let bottom = average_coverage(image, (x0, x1), (bot_y0, bot_y0 + scale));
    (top, bottom)
}

/// Area-weighted mean over the rectangle `[x0, x1) x [y0, y1)` in source
/// pixel coordinates, clipped to the image.
fn average_coverage(image: &LinearImage, (x0, x1): (f64, f64), (y0, y1): (f64, f64)) -> [f32; 3] {
    let col_weights = axis_weights(x0, x1, image.width);
    let row_weights = axis_weights(y0, y1, image.height);

    let mut sum = [0.0f64; 3];
    let mut total = 0.0f64;

    for &(py, wy) in &row_weights {
        for &(px, wx) in &col_weights {
            let w = wx * wy;
            let s = image.sample(px, py);
            sum[0] += s[0] as f64 * w;
            sum[1] += s[1] as f64 * w;
            sum[2] += s[2] as f64 * w;
            total += w;
        }
    }

    if total <= 0.0 {
        return [0.0; 3];
    }
    [
        (sum[0] / total) as f32,
        (sum[1] / total) as f32,
        (sum[2] / total) as f32,
    ]
}

/// Pixels overlapped by `[start, end)` along one axis, with the overlap length.
fn axis_weights(start: f64, end: f64, limit: usize) -> Vec<(usize, f64)> {
    let end = end.min(limit as f64);
    if end <= start {
        return Vec::new();
    }

    let first = start.floor().max(0.0) as usize;
    let last = (end.ceil() as usize).min(limit);

    (first..last)
        .filter_map(|p| {
            let lo = start.max(p as f64);
            let hi = end.min((p + 1) as f64);
            (hi > lo).then_some((p, hi - lo))
        })
        .collect()
}
