//! Terrain debug visualization: text and image renderings of a generated grid.
//!
//! The generator only produces occupancy values. These helpers give hosts a
//! quick way to look at them: a color per cell, the world-space center of a
//! cell, an ASCII dump, and an RGBA image.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{
    CAVE_GLYPH, WALL_GLYPH, cell_color, cell_world_position, render_ascii, render_grid_image,
};
