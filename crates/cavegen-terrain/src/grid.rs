//! Two-state occupancy grid for 2D terrain.
//!
//! Cells are addressed by `(column, row)` with row 0 at the bottom of the
//! world. Reads outside the grid are answered as [`Cell::Solid`] by the
//! neighbor counter so that caves never break out through the world edge.

use serde::{Deserialize, Serialize};

/// Occupancy of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    /// Open space (sky or cave).
    #[default]
    Empty = 0,
    /// Ground.
    Solid = 1,
}

impl Cell {
    /// Returns `true` for [`Cell::Solid`].
    #[inline]
    pub fn is_solid(self) -> bool {
        self == Cell::Solid
    }
}

/// A `width × height` array of [`Cell`]s stored column-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell set to [`Cell::Empty`].
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Cell::Empty)
    }

    /// Creates a grid with every cell set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `(x, y)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Sets the cell at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            self.cells[index] = cell;
        }
    }

    /// Resets every cell to [`Cell::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Returns the cells of column `x`, bottom row first.
    pub fn column(&self, x: usize) -> &[Cell] {
        let start = x * self.height;
        &self.cells[start..start + self.height]
    }

    /// Counts solid cells among the eight neighbors of `(x, y)`.
    ///
    /// Neighbors outside the grid count as solid, so a corner cell always
    /// starts with five and an edge cell with three.
    pub fn neighbor_solid_count(&self, x: usize, y: usize) -> u8 {
        let (cx, cy) = (x as i64, y as i64);
        let mut count = 0;
        for nx in cx - 1..=cx + 1 {
            for ny in cy - 1..=cy + 1 {
                if nx == cx && ny == cy {
                    continue;
                }
                if !self.in_bounds(nx, ny) {
                    count += 1;
                } else {
                    count += self.cells[self.index(nx as usize, ny as usize)] as u8;
                }
            }
        }
        count
    }

    /// Total number of solid cells.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_solid()).count()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 6);
        assert_eq!(grid.solid_count(), 0);
    }

    #[test]
    fn test_get_set_addresses_column_and_row() {
        let mut grid = Grid::new(3, 5);
        grid.set(2, 4, Cell::Solid);
        assert_eq!(grid.get(2, 4), Some(Cell::Solid));
        assert_eq!(grid.get(4, 2), None);
        assert_eq!(grid.column(2)[4], Cell::Solid);
        assert_eq!(grid.solid_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_set_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(5, 0, Cell::Solid);
        grid.set(0, 5, Cell::Solid);
        assert_eq!(grid.solid_count(), 0);
    }

    #[test]
    fn test_corner_counts_five_off_grid_neighbors() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbor_solid_count(0, 0), 5);
        assert_eq!(grid.neighbor_solid_count(2, 2), 5);
        assert_eq!(grid.neighbor_solid_count(1, 0), 3);
        assert_eq!(grid.neighbor_solid_count(1, 1), 0);
    }

    #[test]
    fn test_corner_count_independent_of_contents() {
        let mut grid = Grid::filled(3, 3, Cell::Solid);
        assert_eq!(grid.neighbor_solid_count(0, 0), 8);
        grid.set(1, 0, Cell::Empty);
        grid.set(0, 1, Cell::Empty);
        grid.set(1, 1, Cell::Empty);
        assert_eq!(grid.neighbor_solid_count(0, 0), 5);
    }

    #[test]
    fn test_center_cell_not_counted() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, Cell::Solid);
        assert_eq!(grid.neighbor_solid_count(1, 1), 0);
        assert_eq!(grid.neighbor_solid_count(0, 0), 6);
    }

    #[test]
    fn test_single_cell_grid_is_fully_walled() {
        let grid = Grid::new(1, 1);
        assert_eq!(grid.neighbor_solid_count(0, 0), 8);
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut grid = Grid::filled(5, 5, Cell::Solid);
        grid.clear();
        assert_eq!(grid, Grid::new(5, 5));
    }
}
