//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Filter;

/// Render an image as truecolor half-block art in the terminal
#[derive(Parser, Debug)]
#[command(name = "halfblock-art")]
#[command(version, about = "Gamma-correct half-block image renderer", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to render (prompted for when omitted)
    pub image: Option<PathBuf>,

    /// Terminal width in columns
    #[arg(long)]
    pub cols: Option<u16>,

    /// Terminal height in rows
    #[arg(long)]
    pub rows: Option<u16>,

    /// Rows kept free below the art
    #[arg(long)]
    pub reserved_rows: Option<u16>,

    /// Box-filter window strategy
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Gamma exponent used for linearization
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Never scale images up to fill the terminal
    #[arg(long)]
    pub no_upscale: bool,

    /// Skip the banner printed before the art
    #[arg(long)]
    pub no_banner: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Create default config file
    Init,
}
