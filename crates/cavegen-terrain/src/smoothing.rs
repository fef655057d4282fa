//! Cellular-automaton smoothing that grows scattered cave seeds into caves.
//!
//! Two rules share the birth/death thresholds:
//!
//! - [`SmoothingStrategy::FullPass`] updates every cell from a snapshot of the
//!   previous pass and replaces the grid with the new buffer at the end.
//! - [`SmoothingStrategy::Randomized`] updates `height_sum` randomly chosen
//!   interior cells in place, so later updates see earlier ones.

use crate::cave::SURFACE_BUFFER;
use crate::config::{SmoothingStrategy, Thresholds};
use crate::grid::{Cell, Grid};
use crate::heightmap::Topography;
use crate::seed::NoiseSource;

impl SmoothingStrategy {
    /// Run one smoothing pass with this rule.
    ///
    /// `noise` is only drawn from by the randomized rule. `height_sum` is the
    /// number of cell updates the randomized rule performs per pass.
    pub fn smooth_pass(
        self,
        grid: &mut Grid,
        topography: &Topography,
        thresholds: &Thresholds,
        noise: &mut NoiseSource,
        height_sum: u64,
    ) {
        match self {
            SmoothingStrategy::FullPass => full_pass(grid, topography, thresholds),
            SmoothingStrategy::Randomized => {
                randomized_pass(grid, topography, thresholds, noise, height_sum)
            }
        }
    }
}

/// Returns `true` if `(x, y)` is inside the region the full pass may change:
/// not an edge column, not the bottom row, and below the surface buffer.
#[inline]
pub fn in_smoothing_region(grid: &Grid, topography: &Topography, x: usize, y: usize) -> bool {
    x > 0 && x + 1 < grid.width() && y > 0 && y + SURFACE_BUFFER < topography.at(x)
}

/// Birth/death rule shared by both strategies.
#[inline]
fn birth_death(cell: Cell, solid_neighbors: u8, thresholds: &Thresholds) -> Cell {
    match cell {
        Cell::Solid if solid_neighbors < thresholds.death_limit => Cell::Empty,
        Cell::Empty if solid_neighbors > thresholds.birth_limit => Cell::Solid,
        other => other,
    }
}

/// Randomized rule: birth/death plus independent isolated-cell thresholds.
#[inline]
fn randomized_rule(cell: Cell, solid_neighbors: u8, thresholds: &Thresholds) -> Cell {
    match cell {
        Cell::Empty if solid_neighbors >= thresholds.min_count_to_fill => Cell::Solid,
        Cell::Solid if solid_neighbors <= thresholds.max_count_to_empty => Cell::Empty,
        other => birth_death(other, solid_neighbors, thresholds),
    }
}

/// Synchronous pass over every cell.
///
/// Reads only the pre-pass grid; the shadow buffer is moved into `grid` once
/// every cell has been written.
pub fn full_pass(grid: &mut Grid, topography: &Topography, thresholds: &Thresholds) {
    let (width, height) = (grid.width(), grid.height());
    let mut shadow = Grid::new(width, height);

    for x in 0..width {
        for y in 0..height {
            let Some(cell) = grid.get(x, y) else {
                continue;
            };
            let next = if in_smoothing_region(grid, topography, x, y) {
                birth_death(cell, grid.neighbor_solid_count(x, y), thresholds)
            } else {
                cell
            };
            shadow.set(x, y, next);
        }
    }

    *grid = shadow;
}

/// Asynchronous pass: `trials` in-place updates of random interior cells.
///
/// Each trial picks a column in `[1, width - 2]` and a row in
/// `[1, surface - 2]`. A column too shallow to have such a row consumes the
/// trial without changing anything. Grids narrower than three columns have no
/// interior and are left untouched.
pub fn randomized_pass(
    grid: &mut Grid,
    topography: &Topography,
    thresholds: &Thresholds,
    noise: &mut NoiseSource,
    trials: u64,
) {
    let width = grid.width();
    if width < 3 {
        return;
    }

    for _ in 0..trials {
        let x = noise.next_int(1, width as i64 - 1) as usize;
        let top = topography.at(x) as i64;
        if top < 3 {
            continue;
        }
        let y = noise.next_int(1, top - 1) as usize;

        let Some(cell) = grid.get(x, y) else {
            continue;
        };
        let next = randomized_rule(cell, grid.neighbor_solid_count(x, y), thresholds);
        if next != cell {
            grid.set(x, y, next);
        }
    }
}
