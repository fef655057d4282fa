//! Terrain generation error types.

/// Configuration errors that prevent a generation from starting.
///
/// These are raised before any buffer is allocated, so a failed
/// [`generate`](crate::TerrainGenerator::generate) never publishes a grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// The configured width was zero.
    #[error("terrain width must be at least 1")]
    ZeroWidth,

    /// The depth parameters do not add up to a positive whole number of rows.
    #[error("derived terrain height must be at least 1 (ground={ground}, hill={hill}, sky={sky})")]
    InvalidHeight {
        /// Configured ground depth.
        ground: f64,
        /// Configured hill depth.
        hill: f64,
        /// Configured sky depth.
        sky: f64,
    },

    /// The grid would exceed [`MAX_GRID_CELLS`](crate::MAX_GRID_CELLS) cells.
    #[error("terrain grid of {width}x{height} cells exceeds the {max} cell limit")]
    GridTooLarge {
        /// Configured width.
        width: u32,
        /// Derived height.
        height: usize,
        /// Cell limit in force.
        max: usize,
    },

    /// A hill noise coordinate parameter was NaN or infinite.
    #[error("hill noise parameter {name} must be finite, got {value}")]
    NonFiniteNoise {
        /// Field name in the configuration.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}
