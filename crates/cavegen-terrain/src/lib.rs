//! Procedural 2D cave terrain: hill profile, cave seeding, and cellular-automaton smoothing.
//!
//! [`TerrainGenerator`] runs the pipeline clear → hills → cave seeds →
//! smoothing and publishes a [`Terrain`] holding the occupancy [`Grid`] and the
//! per-column [`Topography`].

mod cave;
mod config;
mod curve;
mod error;
mod generator;
mod grid;
mod heightmap;
mod seed;
mod smoothing;

pub mod debug_viz;

pub use cave::{CaveCarver, FLOOR_BUFFER, SURFACE_BUFFER};
pub use config::{
    MAX_GRID_CELLS, MAX_NEIGHBOR_COUNT, MAX_SMOOTHING_ITERATIONS, ResolvedConfig, SmoothingStrategy,
    TerrainConfig, Thresholds,
};
pub use curve::{CurveKey, ResponseCurve};
pub use error::TerrainError;
pub use generator::{GeneratorState, Terrain, TerrainGenerator, generate_terrain};
pub use grid::{Cell, Grid};
pub use heightmap::{HillSampler, Topography, column_fraction, generate_hills};
pub use seed::{NoiseSource, Seed, hash_text_seed, hill_noise_seed};
pub use smoothing::{full_pass, in_smoothing_region, randomized_pass};
