//! Host binary for the cave terrain generator.
//!
//! Generates terrain at startup, then regenerates every time a line is read
//! from stdin (press Enter), re-reading `config.ron` first so edits take effect
//! without a restart. Type `q` to quit.
//!
//! Run with `cargo run -p cavegen-demo -- --seed 42 --once` for a single map.

mod export;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use cavegen_config::{CliArgs, Config};
use cavegen_terrain::debug_viz::{render_ascii, render_grid_image};
use cavegen_terrain::{Terrain, TerrainGenerator};
use clap::Parser;
use tracing::{error, info, warn};

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        Config::default_dir().unwrap_or_else(|e| {
            eprintln!("{e}, using the working directory");
            PathBuf::from(".")
        })
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    cavegen_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut generator = TerrainGenerator::new(config.terrain.clone());
    regenerate(&mut generator, &config);

    if args.once {
        return;
    }

    info!("Press Enter to regenerate, q to quit");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {e}");
                break;
            }
        };
        if matches!(line.trim(), "q" | "quit" | "exit") {
            break;
        }

        if let Some(reloaded) = reload_config(&config, &config_dir, &args) {
            config = reloaded;
            generator.set_config(config.terrain.clone());
        }
        regenerate(&mut generator, &config);
    }
}

/// Re-read `config.ron` and re-apply CLI overrides; `Some` only when the
/// effective configuration changed.
fn reload_config(current: &Config, config_dir: &Path, args: &CliArgs) -> Option<Config> {
    match current.reload(config_dir) {
        Ok(Some(mut fresh)) => {
            fresh.apply_cli_overrides(args);
            (fresh != *current).then_some(fresh)
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Keeping previous config: {e}");
            None
        }
    }
}

fn regenerate(generator: &mut TerrainGenerator, config: &Config) {
    match generator.generate() {
        Ok(terrain) => present(terrain, config),
        Err(e) => error!("Terrain generation failed: {e}"),
    }
}

fn present(terrain: &Terrain, config: &Config) {
    info!(
        seed = terrain.seed,
        height_sum = terrain.height_sum(),
        "{}x{} terrain ready",
        terrain.grid.width(),
        terrain.grid.height()
    );

    if config.output.print_ascii {
        print!("{}", render_ascii(&terrain.grid));
    }

    if let Some(ref path) = config.output.image_path {
        match export::write_png(path, &render_grid_image(&terrain.grid)) {
            Ok(()) => info!("Wrote {}", path.display()),
            Err(e) => error!("Image export failed: {e}"),
        }
    }
}
