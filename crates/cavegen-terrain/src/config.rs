//! Generation parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::curve::ResponseCurve;
use crate::error::TerrainError;
use crate::seed::Seed;

/// Upper bound for [`TerrainConfig::smoothing_iterations`].
pub const MAX_SMOOTHING_ITERATIONS: u32 = 20;

/// Upper bound for every neighbor-count threshold.
pub const MAX_NEIGHBOR_COUNT: u8 = 8;

/// Largest grid, in cells, a generation will allocate (256 MiB of cells).
pub const MAX_GRID_CELLS: usize = 1 << 28;

/// Which cellular-automaton rule the smoother runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmoothingStrategy {
    /// Synchronous update of every cell from a snapshot of the previous pass.
    #[default]
    FullPass,
    /// `height_sum` in-place updates of randomly chosen interior cells.
    Randomized,
}

/// Full configuration for one terrain generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Number of columns. Must be at least 1.
    pub width: u32,
    /// Rows of solid ground below the lowest possible hill.
    pub ground_depth: f64,
    /// Maximum hill height above the ground layer.
    pub hill_depth: f64,
    /// Empty rows reserved above the hills.
    pub sky_depth: f64,
    /// Multiplier on the hill noise.
    pub height_scale: f64,
    /// Horizontal frequency of the hill noise across the whole map.
    pub x_scale: f64,
    /// Fixed second coordinate of the hill noise; sliding it changes the profile.
    pub y_offset: f64,
    /// Response curve shaping hill height across the map (sampled at `x / (width - 1)`).
    pub contour: ResponseCurve,
    /// Seed source for the generation.
    pub seed: Seed,
    /// Chance, in percent, that an eligible ground cell is opened as a cave seed.
    /// Clamped to `[0, 100]`.
    pub cave_seed_percent: u32,
    /// Number of smoothing passes. Clamped to `[0, 20]`.
    pub smoothing_iterations: u32,
    /// An empty cell with more solid neighbors than this becomes solid.
    pub birth_limit: u8,
    /// A solid cell with fewer solid neighbors than this becomes empty.
    pub death_limit: u8,
    /// Smoothing rule.
    pub smoothing: SmoothingStrategy,
    /// Randomized rule only: an empty cell with at least this many solid
    /// neighbors is filled regardless of `birth_limit`.
    pub min_count_to_fill: u8,
    /// Randomized rule only: a solid cell with at most this many solid
    /// neighbors is emptied regardless of `death_limit`.
    pub max_count_to_empty: u8,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 128,
            ground_depth: 50.0,
            hill_depth: 20.0,
            sky_depth: 20.0,
            height_scale: 1.0,
            x_scale: 1.0,
            y_offset: 0.0,
            contour: ResponseCurve::linear(),
            seed: Seed::Random,
            cave_seed_percent: 50,
            smoothing_iterations: 5,
            birth_limit: 4,
            death_limit: 5,
            smoothing: SmoothingStrategy::FullPass,
            min_count_to_fill: 8,
            max_count_to_empty: 0,
        }
    }
}

impl TerrainConfig {
    /// Total number of rows, `floor(ground + hill + sky)` after negative depths
    /// are raised to zero.
    pub fn height(&self) -> Result<usize, TerrainError> {
        let depths = [self.ground_depth, self.hill_depth, self.sky_depth];
        let invalid = || TerrainError::InvalidHeight {
            ground: self.ground_depth,
            hill: self.hill_depth,
            sky: self.sky_depth,
        };
        if depths.iter().any(|d| !d.is_finite()) {
            return Err(invalid());
        }
        let total: f64 = depths.iter().map(|d| d.max(0.0)).sum();
        let rows = total.floor();
        if rows < 1.0 {
            return Err(invalid());
        }
        Ok(rows as usize)
    }

    /// Validate dimensions and clamp tunables, producing the parameters a
    /// generation actually runs with.
    ///
    /// Width and height failures, grids above [`MAX_GRID_CELLS`] and
    /// non-finite noise coordinates are errors. Out-of-range aesthetic
    /// parameters are clamped and logged.
    pub fn resolve(&self) -> Result<ResolvedConfig, TerrainError> {
        if self.width == 0 {
            return Err(TerrainError::ZeroWidth);
        }
        let height = self.height()?;
        let cells = (self.width as usize).checked_mul(height);
        if !cells.is_some_and(|cells| cells <= MAX_GRID_CELLS) {
            return Err(TerrainError::GridTooLarge {
                width: self.width,
                height,
                max: MAX_GRID_CELLS,
            });
        }
        for (name, value) in [("x_scale", self.x_scale), ("y_offset", self.y_offset)] {
            if !value.is_finite() {
                return Err(TerrainError::NonFiniteNoise { name, value });
            }
        }

        let cave_seed_percent = clamp_logged("cave_seed_percent", self.cave_seed_percent, 100);
        let smoothing_iterations = clamp_logged(
            "smoothing_iterations",
            self.smoothing_iterations,
            MAX_SMOOTHING_ITERATIONS,
        );
        let thresholds = Thresholds {
            birth_limit: clamp_logged("birth_limit", self.birth_limit, MAX_NEIGHBOR_COUNT),
            death_limit: clamp_logged("death_limit", self.death_limit, MAX_NEIGHBOR_COUNT),
            min_count_to_fill: clamp_logged(
                "min_count_to_fill",
                self.min_count_to_fill,
                MAX_NEIGHBOR_COUNT,
            ),
            max_count_to_empty: clamp_logged(
                "max_count_to_empty",
                self.max_count_to_empty,
                MAX_NEIGHBOR_COUNT,
            ),
        };

        Ok(ResolvedConfig {
            width: self.width as usize,
            height,
            ground_depth: self.ground_depth.max(0.0),
            hill_depth: self.hill_depth.max(0.0),
            height_scale: self.height_scale,
            x_scale: self.x_scale,
            y_offset: self.y_offset,
            cave_seed_percent: cave_seed_percent as i64,
            smoothing_iterations,
            smoothing: self.smoothing,
            thresholds,
        })
    }
}

fn clamp_logged<T>(name: &str, value: T, max: T) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    if value > max {
        tracing::warn!("{name} = {value} is out of range, clamped to {max}");
        max
    } else {
        value
    }
}

/// Neighbor-count thresholds for the smoothing rules, each in `[0, 8]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// Empty → solid when the count exceeds this.
    pub birth_limit: u8,
    /// Solid → empty when the count is below this.
    pub death_limit: u8,
    /// Randomized rule: empty → solid when the count reaches this.
    pub min_count_to_fill: u8,
    /// Randomized rule: solid → empty when the count is at most this.
    pub max_count_to_empty: u8,
}

/// A validated [`TerrainConfig`] with every tunable inside its bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Number of columns, at least 1.
    pub width: usize,
    /// Number of rows, at least 1.
    pub height: usize,
    /// Non-negative ground depth.
    pub ground_depth: f64,
    /// Non-negative hill depth.
    pub hill_depth: f64,
    /// Hill noise multiplier.
    pub height_scale: f64,
    /// Hill noise horizontal frequency.
    pub x_scale: f64,
    /// Hill noise second coordinate.
    pub y_offset: f64,
    /// Cave seed chance in `[0, 100]`.
    pub cave_seed_percent: i64,
    /// Smoothing passes in `[0, 20]`.
    pub smoothing_iterations: u32,
    /// Smoothing rule.
    pub smoothing: SmoothingStrategy,
    /// Smoothing thresholds.
    pub thresholds: Thresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_height_matches_depth_sum() {
        let config = TerrainConfig::default();
        assert_eq!(config.height().unwrap(), 90);
    }

    #[test]
    fn test_fractional_depths_floor() {
        let config = TerrainConfig {
            ground_depth: 2.6,
            hill_depth: 0.6,
            sky_depth: 0.6,
            ..Default::default()
        };
        assert_eq!(config.height().unwrap(), 3);
    }

    #[test]
    fn test_zero_width_is_an_error() {
        let config = TerrainConfig {
            width: 0,
            ..Default::default()
        };
        assert_eq!(config.resolve(), Err(TerrainError::ZeroWidth));
    }

    #[test]
    fn test_zero_height_is_an_error() {
        let config = TerrainConfig {
            ground_depth: 0.0,
            hill_depth: 0.0,
            sky_depth: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(TerrainError::InvalidHeight { .. })
        ));
    }

    #[test]
    fn test_non_finite_depth_is_an_error() {
        let config = TerrainConfig {
            hill_depth: f64::NAN,
            ..Default::default()
        };
        assert!(config.height().is_err());
    }

    #[test]
    fn test_oversized_grid_is_an_error() {
        let config = TerrainConfig {
            width: u32::MAX,
            ground_depth: 1e19,
            ..Default::default()
        };
        assert!(matches!(
            config.resolve(),
            Err(TerrainError::GridTooLarge { width: u32::MAX, .. })
        ));

        let just_over = TerrainConfig {
            width: 1 << 20,
            ground_depth: 256.0,
            hill_depth: 0.0,
            sky_depth: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            just_over.resolve(),
            Err(TerrainError::GridTooLarge { height: 257, .. })
        ));
    }

    #[test]
    fn test_non_finite_noise_coordinates_are_errors() {
        for (x_scale, y_offset, name) in [
            (1.0, f64::NAN, "y_offset"),
            (1.0, f64::INFINITY, "y_offset"),
            (f64::NEG_INFINITY, 0.0, "x_scale"),
        ] {
            let config = TerrainConfig {
                x_scale,
                y_offset,
                ..Default::default()
            };
            match config.resolve() {
                Err(TerrainError::NonFiniteNoise { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected NonFiniteNoise for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_depths_are_raised_to_zero() {
        let config = TerrainConfig {
            ground_depth: 10.0,
            hill_depth: -4.0,
            sky_depth: 2.0,
            ..Default::default()
        };
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.height, 12);
        assert_eq!(resolved.hill_depth, 0.0);
    }

    #[test]
    fn test_tunables_are_clamped() {
        let config = TerrainConfig {
            cave_seed_percent: 250,
            smoothing_iterations: 99,
            birth_limit: 12,
            death_limit: 9,
            min_count_to_fill: 200,
            max_count_to_empty: 10,
            ..Default::default()
        };
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.cave_seed_percent, 100);
        assert_eq!(resolved.smoothing_iterations, MAX_SMOOTHING_ITERATIONS);
        assert_eq!(resolved.thresholds.birth_limit, 8);
        assert_eq!(resolved.thresholds.death_limit, 8);
        assert_eq!(resolved.thresholds.min_count_to_fill, 8);
        assert_eq!(resolved.thresholds.max_count_to_empty, 8);
    }

    #[test]
    fn test_in_range_values_pass_through() {
        let resolved = TerrainConfig::default().resolve().unwrap();
        assert_eq!(resolved.width, 128);
        assert_eq!(resolved.cave_seed_percent, 50);
        assert_eq!(resolved.smoothing_iterations, 5);
        assert_eq!(resolved.thresholds.birth_limit, 4);
        assert_eq!(resolved.thresholds.death_limit, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: TerrainConfig = ron::from_str("(width: 32, smoothing: Randomized)").unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.smoothing, SmoothingStrategy::Randomized);
        assert_eq!(config.birth_limit, 4);
        assert_eq!(config.contour, ResponseCurve::linear());
    }
}
