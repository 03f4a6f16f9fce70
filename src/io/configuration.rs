//! Generation constants and runtime configuration defaults

use clap::ValueEnum;

/// Side length in tiles of the block one macro-cell rasterizes into
pub const CELL_BLOCK_SIZE: usize = 9;

/// Offset of the edge midpoint inside a cell block
pub const CELL_BLOCK_MIDPOINT: usize = CELL_BLOCK_SIZE / 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed tile map dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fraction of each axis counted as a corner band for exit and boss placement
pub const CORNER_REGION_FRACTION: f64 = 0.20;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 1032;

/// Default number of seeds generated in survey mode
pub const DEFAULT_SURVEY_SEEDS: u32 = 100;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Preset square map sizes, measured in cells per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum MapSize {
    /// 5 x 5 cells
    #[default]
    Small,
    /// 11 x 11 cells
    Medium,
    /// 17 x 17 cells
    Large,
    /// 23 x 23 cells
    Huge,
    /// 31 x 31 cells
    Gargantuan,
    /// 63 x 63 cells
    Biblical,
}

impl MapSize {
    /// Cells per side
    pub const fn cells(self) -> usize {
        match self {
            Self::Small => 5,
            Self::Medium => 11,
            Self::Large => 17,
            Self::Huge => 23,
            Self::Gargantuan => 31,
            Self::Biblical => 63,
        }
    }

    /// Tiles per side once rasterized
    pub const fn tiles(self) -> usize {
        self.cells() * CELL_BLOCK_SIZE
    }
}
