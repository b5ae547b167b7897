//! Settings resolution and config subcommand handlers.

use std::io::Write;

use super::args::{Args, ConfigAction};
use super::enums::Filter;
use crate::config::{default_path, Config, ConfigError};
use crate::error::ArtError;
use crate::pipeline::RenderSettings;
use crate::render::{FilterMode, TerminalGeometry};

/// Template written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# halfblock-art configuration

[terminal]
# Grid the art must fit into
cols = 107
rows = 32
# Rows left free below the art
reserved_rows = 2

[render]
# Window strategy: truncated, exact
filter = "truncated"
# Gamma exponent for linear-light averaging
gamma = 2.2
# Scale small images up to fill the grid
upscale = true

[output]
# Print a banner line before the art
banner = true
"#;

/// Merge settings: CLI args > config file > built-in defaults.
pub fn resolve_settings(args: &Args, cfg: &Config) -> Result<RenderSettings, ArtError> {
    let defaults = RenderSettings::default();

    let geometry = TerminalGeometry::new(
        args.cols.or(cfg.terminal.cols).unwrap_or(defaults.geometry.cols),
        args.rows.or(cfg.terminal.rows).unwrap_or(defaults.geometry.rows),
        args.reserved_rows
            .or(cfg.terminal.reserved_rows)
            .unwrap_or(defaults.geometry.reserved_rows),
    );

    let filter: FilterMode = match (args.filter, cfg.render.filter.as_deref()) {
        (Some(f), _) => f.into(),
        (None, Some(name)) => Filter::parse_name(name)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "render.filter",
                value: name.to_string(),
            })?
            .into(),
        (None, None) => defaults.filter,
    };

    let upscale = if args.no_upscale {
        false
    } else {
        cfg.render.upscale.unwrap_or(defaults.upscale)
    };
    let banner = if args.no_banner {
        false
    } else {
        cfg.output.banner.unwrap_or(defaults.banner)
    };

    Ok(RenderSettings {
        geometry,
        filter,
        gamma: args.gamma.or(cfg.render.gamma).unwrap_or(defaults.gamma),
        upscale,
        banner,
    })
}

/// Handle config subcommand actions.
///
/// Acts on the `--config` file when given, the default location otherwise.
pub fn handle_config_action(
    action: ConfigAction,
    args: &Args,
    out: &mut impl Write,
) -> Result<(), ArtError> {
    let path = args.config.clone().unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let cfg = Config::load(Some(&path))?;
            let settings = resolve_settings(args, &cfg)?;

            writeln!(out, "Current configuration:")?;
            writeln!(
                out,
                "  Terminal: {}x{} ({} reserved row(s))",
                settings.geometry.cols, settings.geometry.rows, settings.geometry.reserved_rows
            )?;
            writeln!(out, "  Filter: {}", settings.filter.name())?;
            writeln!(out, "  Gamma: {}", settings.gamma)?;
            writeln!(out, "  Upscale: {}", if settings.upscale { "yes" } else { "no" })?;
            writeln!(out, "  Banner: {}", if settings.banner { "yes" } else { "no" })?;
            writeln!(out)?;

            if path.exists() {
                writeln!(out, "Config file: {} (exists)", path.display())?;
            } else {
                writeln!(out, "Config file: {} (not found)", path.display())?;
            }
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(ArtError::Io(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!(
                        "Config file already exists: {} (use 'halfblock-art config show' to view it)",
                        path.display()
                    ),
                )));
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG)?;
            log::info!("Wrote default config to {}", path.display());

            writeln!(out, "Created config file: {}", path.display())?;
        }
    }

    Ok(())
}
