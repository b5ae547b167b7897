//! halfblock-art library crate.
//!
//! Renders raster images as truecolor half-block terminal art with
//! gamma-correct box filtering. The binary is a thin wrapper around
//! [`pipeline::render_path`].

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod source;

pub use error::ArtError;
pub use pipeline::{render_image, render_path, RenderSettings};
