//! Source image loading.
//!
//! Decoding is delegated to the `image` crate. Whatever the file holds, the
//! result is flattened to 8-bit RGB; alpha is dropped.

use std::path::Path;

use crate::error::ArtError;

/// Decoded image as interleaved 8-bit RGB samples.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// RGB data, 3 bytes per pixel, row-major, origin top-left
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl SourceImage {
    /// Wrap an existing RGB buffer, checking that its length matches the dimensions.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ArtError> {
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(ArtError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build an image where every pixel has the same color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixel_count * 3);
        for _ in 0..pixel_count {
            data.extend_from_slice(&rgb);
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Load and decode an image file.
///
/// # Errors
/// * [`ArtError::Load`] if the file is missing, unsupported or corrupt
/// * [`ArtError::DegenerateImage`] if the decoded image has a zero dimension
pub fn load(path: &Path) -> Result<SourceImage, ArtError> {
    let decoded = image::open(path).map_err(|source| ArtError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("Decoded {}: {}x{}", path.display(), width, height);

    if width == 0 || height == 0 {
        return Err(ArtError::DegenerateImage { width, height });
    }

    Ok(SourceImage {
        data: rgb.into_raw(),
        width,
        height,
    })
}
