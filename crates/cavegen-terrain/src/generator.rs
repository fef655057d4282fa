//! The generation pipeline: clear, raise hills, seed caves, smooth.

use std::time::Instant;

use tracing::{debug, info};

use crate::cave::CaveCarver;
use crate::config::TerrainConfig;
use crate::error::TerrainError;
use crate::grid::Grid;
use crate::heightmap::{HillSampler, Topography, generate_hills};
use crate::seed::{NoiseSource, hill_noise_seed};

/// Lifecycle of a [`TerrainGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorState {
    /// Nothing has been generated, or the last generation failed.
    Idle,
    /// A generation is running.
    Generating,
    /// [`TerrainGenerator::terrain`] holds a complete result.
    Ready,
}

/// A completed generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terrain {
    /// Final occupancy grid.
    pub grid: Grid,
    /// Surface row of every column, before carving.
    pub topography: Topography,
    /// The seed value the generation actually used.
    pub seed: u64,
}

impl Terrain {
    /// Sum of all column heights; the per-pass trial count of the randomized
    /// smoother.
    pub fn height_sum(&self) -> u64 {
        self.topography.height_sum()
    }
}

/// Owns a [`TerrainConfig`] and produces [`Terrain`] from it on demand.
///
/// `generate` takes `&mut self`, so a generation can never overlap another
/// one on the same generator. Hosts that share a generator across threads
/// must serialize access themselves (e.g. behind a `Mutex`).
pub struct TerrainGenerator {
    config: TerrainConfig,
    state: GeneratorState,
    terrain: Option<Terrain>,
}

impl TerrainGenerator {
    /// Create an idle generator.
    pub fn new(config: TerrainConfig) -> Self {
        Self {
            config,
            state: GeneratorState::Idle,
            terrain: None,
        }
    }

    /// The configuration the next generation will use.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Mutable access to the configuration between generations.
    pub fn config_mut(&mut self) -> &mut TerrainConfig {
        &mut self.config
    }

    /// Replace the configuration for the next generation.
    pub fn set_config(&mut self, config: TerrainConfig) {
        self.config = config;
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// The most recent complete result, if any.
    pub fn terrain(&self) -> Option<&Terrain> {
        self.terrain.as_ref()
    }

    /// Take ownership of the most recent result, returning the generator to idle.
    pub fn take_terrain(&mut self) -> Option<Terrain> {
        self.state = GeneratorState::Idle;
        self.terrain.take()
    }

    /// Generate fresh terrain from the current configuration.
    ///
    /// Always starts from a cleared grid. On error the previous result is
    /// dropped and the generator is idle; nothing partial is ever published.
    pub fn generate(&mut self) -> Result<&Terrain, TerrainError> {
        self.state = GeneratorState::Generating;
        self.terrain = None;

        match generate_terrain(&self.config) {
            Ok(terrain) => {
                self.state = GeneratorState::Ready;
                Ok(&*self.terrain.insert(terrain))
            }
            Err(err) => {
                self.state = GeneratorState::Idle;
                Err(err)
            }
        }
    }
}

/// Run the full pipeline for `config` and return the result.
///
/// The seed is resolved once here; the hill noise and every random draw of
/// the carver and the randomized smoother derive from that single value.
pub fn generate_terrain(config: &TerrainConfig) -> Result<Terrain, TerrainError> {
    let start = Instant::now();
    let resolved = config.resolve()?;
    let seed = config.seed.resolve();
    debug!(
        width = resolved.width,
        height = resolved.height,
        seed,
        deterministic = config.seed.is_deterministic(),
        "generating terrain"
    );

    let mut grid = Grid::new(resolved.width, resolved.height);

    let sampler = HillSampler::new(hill_noise_seed(seed), resolved.x_scale, resolved.y_offset);
    let topography = generate_hills(&mut grid, &resolved, &config.contour, &sampler);
    let height_sum = topography.height_sum();
    debug!(height_sum, "hills raised");

    let mut noise = NoiseSource::new(seed);
    let carved = CaveCarver::new(resolved.cave_seed_percent).seed_caves(
        &mut grid,
        &topography,
        &mut noise,
    );
    debug!(carved, "cave seeds opened");

    for _ in 0..resolved.smoothing_iterations {
        resolved.smoothing.smooth_pass(
            &mut grid,
            &topography,
            &resolved.thresholds,
            &mut noise,
            height_sum,
        );
    }
    debug!(
        iterations = resolved.smoothing_iterations,
        strategy = ?resolved.smoothing,
        "smoothing finished"
    );

    info!(
        width = resolved.width,
        height = resolved.height,
        solid = grid.solid_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "terrain generated"
    );

    Ok(Terrain {
        grid,
        topography,
        seed,
    })
}
