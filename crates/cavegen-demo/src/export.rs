//! PNG export of debug images.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use cavegen_terrain::debug_viz::DebugImage;

/// Errors writing an image to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Creating the output file or its directory failed.
    #[error("failed to create {path}: {source}")]
    Io {
        /// Target path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Write `image` as an 8-bit RGBA PNG.
pub fn write_png(path: &Path, image: &DebugImage) -> Result<(), ExportError> {
    let io_error = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cavegen_terrain::debug_viz::render_grid_image;
    use cavegen_terrain::{Cell, Grid};

    #[test]
    fn test_write_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("grid.png");
        let mut grid = Grid::new(8, 4);
        grid.set(2, 0, Cell::Solid);
        write_png(&path, &render_grid_image(&grid)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
