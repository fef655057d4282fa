//! Command-line argument parsing for the terrain generator host.

use std::path::PathBuf;

use cavegen_terrain::{Seed, SmoothingStrategy};
use clap::{Parser, ValueEnum};

use crate::Config;

/// Smoothing rule as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SmoothingArg {
    /// Synchronous whole-grid pass.
    FullPass,
    /// Randomized in-place cell updates.
    Randomized,
}

impl From<SmoothingArg> for SmoothingStrategy {
    fn from(arg: SmoothingArg) -> Self {
        match arg {
            SmoothingArg::FullPass => SmoothingStrategy::FullPass,
            SmoothingArg::Randomized => SmoothingStrategy::Randomized,
        }
    }
}

/// Terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "cavegen", about = "2D cave terrain generator")]
pub struct CliArgs {
    /// Terrain width in columns.
    #[arg(long)]
    pub width: Option<u32>,

    /// Fixed numeric seed (disables random seeding).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Text seed, hashed to a number (disables random seeding).
    #[arg(long, conflicts_with = "seed")]
    pub seed_text: Option<String>,

    /// Chance in percent that a ground cell is opened as a cave seed.
    #[arg(long)]
    pub cave_percent: Option<u32>,

    /// Number of smoothing passes.
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Smoothing rule.
    #[arg(long, value_enum)]
    pub smoothing: Option<SmoothingArg>,

    /// Write a PNG of the grid to this path.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generate once and exit instead of waiting for regenerate requests.
    #[arg(long)]
    pub once: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.terrain.width = w;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = Seed::Fixed(seed);
        }
        if let Some(ref text) = args.seed_text {
            self.terrain.seed = Seed::Text(text.clone());
        }
        if let Some(percent) = args.cave_percent {
            self.terrain.cave_seed_percent = percent;
        }
        if let Some(iterations) = args.iterations {
            self.terrain.smoothing_iterations = iterations;
        }
        if let Some(smoothing) = args.smoothing {
            self.terrain.smoothing = smoothing.into();
        }
        if let Some(ref path) = args.image {
            self.output.image_path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
