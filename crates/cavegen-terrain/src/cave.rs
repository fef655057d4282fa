//! Cave seeding: scatter open cells through the ground mass.
//!
//! Every eligible ground cell gets one independent roll. The openings have no
//! spatial structure yet; the smoother grows them into caves.

use crate::grid::{Cell, Grid};
use crate::heightmap::Topography;
use crate::seed::NoiseSource;

/// Rows directly below the surface that are never carved or smoothed.
pub const SURFACE_BUFFER: usize = 5;

/// Bottom rows that are never carved.
pub const FLOOR_BUFFER: usize = 3;

/// Opens cave seeds below the surface.
pub struct CaveCarver {
    percent: i64,
}

impl CaveCarver {
    /// Create a carver that opens each eligible cell with `percent` chance.
    pub fn new(percent: i64) -> Self {
        Self {
            percent: percent.clamp(0, 100),
        }
    }

    /// Rows `[FLOOR_BUFFER, surface - SURFACE_BUFFER)` of column `x` that may be carved.
    pub fn carve_rows(topography: &Topography, x: usize) -> std::ops::Range<usize> {
        let end = topography.at(x).saturating_sub(SURFACE_BUFFER);
        FLOOR_BUFFER..end.max(FLOOR_BUFFER)
    }

    /// Carve seeds into `grid`, returning the number of cells opened.
    ///
    /// The two edge columns are skipped so the map keeps solid side walls.
    /// One draw from `noise` is made per solid cell in the carve window.
    pub fn seed_caves(
        &self,
        grid: &mut Grid,
        topography: &Topography,
        noise: &mut NoiseSource,
    ) -> usize {
        let width = grid.width();
        if width < 3 {
            return 0;
        }

        let mut carved = 0;
        for x in 1..width - 1 {
            for y in Self::carve_rows(topography, x) {
                if grid.get(x, y) != Some(Cell::Solid) {
                    continue;
                }
                if noise.next_int(0, 100) < self.percent {
                    grid.set(x, y, Cell::Empty);
                    carved += 1;
                }
            }
        }
        carved
    }
}
