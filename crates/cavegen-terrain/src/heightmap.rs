//! Hill profile synthesis: per-column surface height from coherent noise.
//!
//! Each column samples a 2D Perlin field along a single horizontal line,
//! shapes it with the configured response curve, and stacks the result on top
//! of a flat ground layer.

use noise::{NoiseFn, Perlin};

use crate::config::ResolvedConfig;
use crate::curve::ResponseCurve;
use crate::grid::{Cell, Grid};

/// Highest solid row of every column, as laid down before carving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topography {
    heights: Vec<usize>,
    height_sum: u64,
}

impl Topography {
    /// Build from per-column heights, computing the running total once.
    pub fn from_heights(heights: Vec<usize>) -> Self {
        let height_sum = heights.iter().map(|&h| h as u64).sum();
        Self {
            heights,
            height_sum,
        }
    }

    /// Surface row of column `x`.
    #[inline]
    pub fn at(&self, x: usize) -> usize {
        self.heights[x]
    }

    /// All column heights, left to right.
    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    /// Sum of all column heights.
    pub fn height_sum(&self) -> u64 {
        self.height_sum
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// Lattice period of the Perlin permutation table. Coordinates are wrapped
/// into `[0, NOISE_PERIOD)` so arbitrarily large finite inputs stay sampleable.
const NOISE_PERIOD: f64 = 256.0;

/// Samples the hill noise line in `[0, 1]`.
pub struct HillSampler {
    noise: Perlin,
    x_scale: f64,
    y_offset: f64,
}

impl HillSampler {
    /// Create a sampler over a Perlin field with permutation seed `seed`.
    pub fn new(seed: u32, x_scale: f64, y_offset: f64) -> Self {
        Self {
            noise: Perlin::new(seed),
            x_scale,
            y_offset,
        }
    }

    /// Noise at normalized column position `xf`, remapped from `[-1, 1]` to `[0, 1]`.
    ///
    /// A non-finite coordinate samples as mid-level `0.5`.
    pub fn sample(&self, xf: f64) -> f64 {
        let x = wrap_coordinate(xf * self.x_scale);
        let y = wrap_coordinate(self.y_offset);
        let (Some(x), Some(y)) = (x, y) else {
            return 0.5;
        };
        let raw = self.noise.get([x, y]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

fn wrap_coordinate(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.rem_euclid(NOISE_PERIOD))
}

/// Normalized position of column `x` across a map of `width` columns.
#[inline]
pub fn column_fraction(x: usize, width: usize) -> f64 {
    if width <= 1 {
        0.0
    } else {
        x as f64 / (width - 1) as f64
    }
}

/// Raise hills into `grid` and return the resulting topography.
///
/// For every column the continuous ground top is
/// `curve(xf) * height_scale * noise(xf) * hill_depth + ground_depth`.
/// Rows up to and including the ground top become solid; rows above are left
/// untouched. The stored topography is the floor of the ground top, kept
/// inside `[0, height)`.
pub fn generate_hills(
    grid: &mut Grid,
    config: &ResolvedConfig,
    curve: &ResponseCurve,
    sampler: &HillSampler,
) -> Topography {
    let width = grid.width();
    let height = grid.height();
    let mut heights = Vec::with_capacity(width);

    for x in 0..width {
        let xf = column_fraction(x, width);
        let mut ground_top = curve.evaluate(xf) * config.height_scale * sampler.sample(xf);
        ground_top *= config.hill_depth;
        ground_top += config.ground_depth;
        if !ground_top.is_finite() {
            ground_top = -1.0;
        }

        let surface = ground_top.floor().clamp(0.0, height.saturating_sub(1) as f64) as usize;
        heights.push(surface);

        for y in 0..height {
            if y as f64 > ground_top {
                break;
            }
            grid.set(x, y, Cell::Solid);
        }
    }

    Topography::from_heights(heights)
}
