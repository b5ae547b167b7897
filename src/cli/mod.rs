//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing, the path prompt, settings
//! resolution and the config subcommand handlers.

mod args;
mod commands;
mod enums;
mod prompt;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, resolve_settings, DEFAULT_CONFIG};
pub use enums::Filter;
pub use prompt::{read_image_path, PROMPT};
