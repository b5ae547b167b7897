//! Linear-light planar image buffers.

use super::gamma::Gamma;
use crate::source::SourceImage;

/// Image stored as three linear-light channel planes.
///
/// Each plane holds `width * height` values in row-major order.
#[derive(Debug, Clone)]
pub struct LinearImage {
    pub width: usize,
    pub height: usize,
    pub r: Vec<f32>,
    pub g: Vec<f32>,
    pub b: Vec<f32>,
}

impl LinearImage {
    /// Expand every sample of `source` into linear light.
    ///
    /// Takes the source by value: the decoded RGB buffer is released here,
    /// once, and nothing downstream can fail on its account.
    pub fn from_source(source: SourceImage, gamma: &Gamma) -> Self {
        let width = source.width as usize;
        let height = source.height as usize;
        let pixel_count = width * height;

        let mut r = Vec::with_capacity(pixel_count);
        let mut g = Vec::with_capacity(pixel_count);
        let mut b = Vec::with_capacity(pixel_count);

        for rgb in source.data.chunks_exact(3).take(pixel_count) {
            r.push(gamma.expand(rgb[0]));
            g.push(gamma.expand(rgb[1]));
            b.push(gamma.expand(rgb[2]));
        }

        Self {
            width,
            height,
            r,
            g,
            b,
        }
    }

    /// Linear RGB at `(x, y)`. Caller guarantees the coordinates are in bounds.
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> [f32; 3] {
        let idx = y * self.width + x;
        [self.r[idx], self.g[idx], self.b[idx]]
    }
}
