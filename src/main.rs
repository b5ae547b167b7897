use clap::Parser;
use std::io::{self, BufWriter};

use halfblock_art::cli::{self, Args, Command};
use halfblock_art::config::Config;
use halfblock_art::{pipeline, ArtError};

/// Message shown whenever no usable image could be obtained.
const LOAD_FAILED: &str = "Failed to load image.";

fn load_config(args: &Args) -> Result<Config, ArtError> {
    // --config must exist; the default location may be absent
    match args.config.as_deref() {
        Some(path) => Ok(Config::load_from_explicit(path)?),
        None => match Config::load(None) {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using default settings.", e);
                Ok(Config::default())
            }
        },
    }
}

fn run(args: Args) -> Result<(), ArtError> {
    if let Some(Command::Config { action }) = &args.command {
        let mut stdout = io::stdout().lock();
        return cli::handle_config_action(action.clone(), &args, &mut stdout);
    }

    let cfg = load_config(&args)?;
    let settings = cli::resolve_settings(&args, &cfg)?;

    let path = match args.image.clone() {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout().lock();
            cli::read_image_path(&mut input, &mut stdout)?
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let plan = pipeline::render_path(&path, &settings, &mut out)?;
    log::debug!("Rendered {} cells", plan.cell_count());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        if e.is_load_failure() {
            eprintln!("{}", LOAD_FAILED);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
