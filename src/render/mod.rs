//! Half-block renderer: converts decoded images into colored terminal art.
//!
//! The pipeline runs in one straight pass:
//!
//! 1. **Gamma expansion** - 8-bit samples to linear light
//! 2. **Scale planning** - fit the image onto the terminal grid
//! 3. **Box filtering** - average top and bottom source windows per cell
//! 4. **Gamma compression** - linear averages back to 8-bit color
//! 5. **Glyph emission** - one `▀` per cell with truecolor SGR sequences
//!
//! # Filter modes
//!
//! [`FilterMode::Truncated`] derives windows from truncated integer bounds.
//! [`FilterMode::Exact`] weights pixels by fractional coverage instead.

mod downsample;
mod emit;
mod gamma;
mod linear;
mod plan;

pub use downsample::{render_cells, render_cells_into, CellColor, FilterMode, HalfCell};
pub use emit::{write_cell, write_grid, HALF_BLOCK, RESET};
pub use gamma::{compress, expand, Gamma, GAMMA};
pub use linear::LinearImage;
pub use plan::{
    RenderPlan, TerminalGeometry, DEFAULT_COLS, DEFAULT_RESERVED_ROWS, DEFAULT_ROWS,
};
