//! Grid renderers: per-cell color and placement, ASCII, and RGBA image.

use super::image::DebugImage;
use crate::grid::{Cell, Grid};

/// Glyph used for solid cells in [`render_ascii`].
pub const WALL_GLYPH: char = '#';

/// Glyph used for empty cells in [`render_ascii`].
pub const CAVE_GLYPH: char = '.';

/// RGBA color of a cell: black ground, white open space.
pub fn cell_color(cell: Cell) -> [u8; 4] {
    match cell {
        Cell::Solid => [0, 0, 0, 255],
        Cell::Empty => [255, 255, 255, 255],
    }
}

/// Center of the unit square for cell `(x, y)` when the grid is centered on
/// the origin, with `+y` up.
pub fn cell_world_position(grid: &Grid, x: usize, y: usize) -> (f32, f32) {
    let half_w = (grid.width() / 2) as f32;
    let half_h = (grid.height() / 2) as f32;
    (-half_w + x as f32 + 0.5, -half_h + y as f32 + 0.5)
}

/// Render the grid as text, top row first, one line per row.
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            out.push(match grid.get(x, y) {
                Some(Cell::Solid) => WALL_GLYPH,
                _ => CAVE_GLYPH,
            });
        }
        out.push('\n');
    }
    out
}

/// Render the grid to an image with one pixel per cell, flipped so that the
/// bottom row of the grid is the bottom row of the image.
pub fn render_grid_image(grid: &Grid) -> DebugImage {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let mut image = DebugImage::new(width, height);
    for x in 0..grid.width() {
        for (y, &cell) in grid.column(x).iter().enumerate() {
            image.set_pixel(x as u32, height - 1 - y as u32, cell_color(cell));
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 0, Cell::Solid);
        grid.set(1, 0, Cell::Solid);
        grid.set(2, 1, Cell::Solid);
        grid
    }

    #[test]
    fn test_ascii_puts_ground_at_the_bottom() {
        assert_eq!(render_ascii(&sample_grid()), "..#\n##.\n");
    }

    #[test]
    fn test_image_is_flipped_vertically() {
        let image = render_grid_image(&sample_grid());
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(0, 1), Some(cell_color(Cell::Solid)));
        assert_eq!(image.get_pixel(0, 0), Some(cell_color(Cell::Empty)));
        assert_eq!(image.get_pixel(2, 0), Some(cell_color(Cell::Solid)));
    }

    #[test]
    fn test_world_position_centers_grid() {
        let grid = Grid::new(10, 4);
        assert_eq!(cell_world_position(&grid, 0, 0), (-4.5, -1.5));
        assert_eq!(cell_world_position(&grid, 9, 3), (4.5, 1.5));
    }

    #[test]
    fn test_colors_differ() {
        assert_ne!(cell_color(Cell::Solid), cell_color(Cell::Empty));
    }
}
