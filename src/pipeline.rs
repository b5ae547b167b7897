//! End-to-end render: load, plan, filter, emit.
//!
//! One run is a single linear pass with no shared state. The decoded RGB
//! buffer is moved into the linear conversion and dropped there.

use std::io::Write;
use std::path::Path;

use crate::error::ArtError;
use crate::render::{self, FilterMode, Gamma, LinearImage, RenderPlan, TerminalGeometry};
use crate::source::{self, SourceImage};

/// Banner written before the art.
pub const BANNER: &str = "\nRendering High-Quality Pixel Art...\n\n";

/// Everything that shapes a render, after merging CLI flags and config.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub geometry: TerminalGeometry,
    pub filter: FilterMode,
    pub gamma: f32,
    pub upscale: bool,
    pub banner: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            geometry: TerminalGeometry::default(),
            filter: FilterMode::default(),
            gamma: render::GAMMA,
            upscale: true,
            banner: true,
        }
    }
}

/// Render an already-decoded image to `out`.
///
/// # Returns
/// The plan that was used, so callers can report dimensions.
pub fn render_image(
    image: SourceImage,
    settings: &RenderSettings,
    out: &mut impl Write,
) -> Result<RenderPlan, ArtError> {
    if image.is_degenerate() {
        return Err(ArtError::DegenerateImage {
            width: image.width,
            height: image.height,
        });
    }
    let expected = image.pixel_count() * 3;
    if image.data.len() != expected {
        return Err(ArtError::BufferSize {
            expected,
            actual: image.data.len(),
        });
    }

    let gamma = Gamma::new(settings.gamma)?;
    let plan = RenderPlan::compute(image.width, image.height, &settings.geometry, settings.upscale)?;
    log::debug!(
        "Plan for {}x{}: {}x{} cells, scale {:.4}, pad {}, filter {}",
        image.width,
        image.height,
        plan.target_width,
        plan.out_rows,
        plan.scale,
        plan.left_pad,
        settings.filter.name()
    );

    let linear = LinearImage::from_source(image, &gamma);
    let cells = render::render_cells(&linear, &plan, settings.filter, &gamma);

    if settings.banner {
        out.write_all(BANNER.as_bytes())?;
    }
    render::write_grid(out, &cells, &plan)?;
    out.flush()?;

    Ok(plan)
}

/// Load the image at `path` and render it to `out`.
///
/// Nothing is written when loading fails.
pub fn render_path(
    path: &Path,
    settings: &RenderSettings,
    out: &mut impl Write,
) -> Result<RenderPlan, ArtError> {
    let image = source::load(path)?;
    log::info!("Rendering {} ({}x{})", path.display(), image.width, image.height);
    render_image(image, settings, out)
}
