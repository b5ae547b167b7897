//! Error types for loading and rendering.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can abort a render.
///
/// A cell whose sample window is empty is not an error; it renders black.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// The image file could not be opened or decoded
    #[error("Cannot decode '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Zero width or height; no scale can be computed
    #[error("Image has a zero dimension ({width}x{height})")]
    DegenerateImage { width: u32, height: u32 },

    #[error("Terminal geometry {cols}x{rows} with {reserved_rows} reserved row(s) leaves no room to draw")]
    InvalidGeometry {
        cols: u16,
        rows: u16,
        reserved_rows: u16,
    },

    #[error("RGB buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Gamma exponent must be a positive number, got {0}")]
    InvalidGamma(f32),

    /// No path was entered at the prompt
    #[error("No image path given")]
    MissingPath,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ArtError {
    /// True for failures to obtain a usable image (load failure or degenerate size).
    pub fn is_load_failure(&self) -> bool {
        matches!(self, ArtError::Load { .. } | ArtError::DegenerateImage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_image_display() {
        let err = ArtError::DegenerateImage {
            width: 0,
            height: 12,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("zero dimension"));
        assert!(msg.contains("0x12"));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_invalid_geometry_display() {
        let err = ArtError::InvalidGeometry {
            cols: 80,
            rows: 2,
            reserved_rows: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("80x2"));
        assert!(msg.contains("2 reserved"));
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_load_error_names_path() {
        let source = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = ArtError::Load {
            path: PathBuf::from("/tmp/cat.png"),
            source,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("/tmp/cat.png"));
        assert!(msg.contains("no such file"));
        assert!(!msg.contains("Failed to load image"));
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_io_error_converts() {
        let err: ArtError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, ArtError::Io(_)));
    }
}
