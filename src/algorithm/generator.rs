use crate::{
    algorithm::growth::CellGrowth,
    algorithm::markers::{MarkerPlacement, place_markers},
    algorithm::random::{ParkMiller, RandomSource},
    algorithm::raster::rasterize_grid,
    io::configuration::{CELL_BLOCK_SIZE, DEFAULT_SEED, MAX_GRID_DIMENSION, MapSize},
    io::error::{Result, invalid_configuration},
    spatial::{CellGrid, Point, TileMap, TileSink},
};

/// Generation parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Cell grid width
    pub width: usize,
    /// Cell grid height
    pub height: usize,
    /// Seed for the random source
    pub seed: u32,
    /// Whether to run the marker pass after growth
    pub place_markers: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_map_size(MapSize::default(), DEFAULT_SEED)
    }
}

impl GeneratorConfig {
    /// Rectangular grid of `width` by `height` cells
    pub const fn new(width: usize, height: usize, seed: u32) -> Self {
        Self {
            width,
            height,
            seed,
            place_markers: true,
        }
    }

    /// Square grid of `size` cells per side
    pub const fn square(size: usize, seed: u32) -> Self {
        Self::new(size, size, seed)
    }

    /// Square grid from a preset
    pub const fn from_map_size(size: MapSize, seed: u32) -> Self {
        Self::square(size.cells(), seed)
    }

    /// Disable or enable the marker pass
    #[must_use]
    pub const fn with_markers(mut self, place_markers: bool) -> Self {
        self.place_markers = place_markers;
        self
    }

    /// Tile map dimensions `(width, height)` this configuration produces
    pub const fn tile_dimensions(&self) -> (usize, usize) {
        (self.width * CELL_BLOCK_SIZE, self.height * CELL_BLOCK_SIZE)
    }

    /// Check the dimensions before anything is allocated
    ///
    /// # Errors
    ///
    /// Returns an invalid configuration error if either dimension is zero or
    /// the rasterized map would exceed `MAX_GRID_DIMENSION` tiles per side.
    pub fn validate(&self) -> Result<()> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)
    }
}

fn validate_dimension(parameter: &'static str, cells: usize) -> Result<()> {
    if cells == 0 {
        return Err(invalid_configuration(
            parameter,
            &cells,
            &"must be at least one cell",
        ));
    }
    match cells.checked_mul(CELL_BLOCK_SIZE) {
        Some(tiles) if tiles <= MAX_GRID_DIMENSION => Ok(()),
        _ => Err(invalid_configuration(
            parameter,
            &cells,
            &format!("exceeds {MAX_GRID_DIMENSION} tiles once rasterized"),
        )),
    }
}

/// Result of one generation run
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// Rasterized tiles
    pub tiles: TileMap,
    /// Abstract cell grid the tiles were rasterized from
    pub cells: CellGrid,
    /// Location of the four-way start room
    pub start: Point,
    /// Marker locations, default when the marker pass is disabled
    pub markers: MarkerPlacement,
}

/// Runs growth, markers and rasterization with one random source
pub struct DungeonGenerator<R> {
    config: GeneratorConfig,
    random: R,
}

impl DungeonGenerator<ParkMiller> {
    /// Generator using the reference random source seeded from the config
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_source(config, ParkMiller::new(config.seed))
    }
}

impl<R: RandomSource> DungeonGenerator<R> {
    /// Generator drawing from a caller-supplied random source
    ///
    /// The config's seed is ignored; the source is used as given.
    pub const fn with_source(config: GeneratorConfig, random: R) -> Self {
        Self { config, random }
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a dungeon into a freshly allocated tile map
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configured dimensions are invalid
    /// - The random source breaks its contract
    pub fn generate(self) -> Result<Dungeon> {
        self.config.validate()?;
        let (tile_width, tile_height) = self.config.tile_dimensions();
        let mut tiles = TileMap::new(tile_width, tile_height);
        let (cells, start, markers) = self.run(&mut tiles)?;

        Ok(Dungeon {
            tiles,
            cells,
            start,
            markers,
        })
    }

    /// Generate into a caller-owned sink
    ///
    /// The cell grid is `sink.width() / CELL_BLOCK_SIZE` by
    /// `sink.height() / CELL_BLOCK_SIZE`; tiles past the last whole block are
    /// left untouched. The configured width and height are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sink is smaller than one cell block on either axis
    /// - The random source breaks its contract
    pub fn generate_into<S: TileSink + ?Sized>(mut self, sink: &mut S) -> Result<CellGrid> {
        self.config.width = sink.width() / CELL_BLOCK_SIZE;
        self.config.height = sink.height() / CELL_BLOCK_SIZE;
        if self.config.width == 0 || self.config.height == 0 {
            return Err(invalid_configuration(
                "sink",
                &format!("{}x{}", sink.width(), sink.height()),
                &format!("must hold at least one {CELL_BLOCK_SIZE}x{CELL_BLOCK_SIZE} block"),
            ));
        }
        let (cells, _, _) = self.run(sink)?;
        Ok(cells)
    }

    fn run<S: TileSink + ?Sized>(
        mut self,
        sink: &mut S,
    ) -> Result<(CellGrid, Point, MarkerPlacement)> {
        let GeneratorConfig {
            width,
            height,
            seed,
            place_markers: with_markers,
        } = self.config;
        log::debug!("generating {width}x{height} cells with seed {seed}");

        let outcome = CellGrowth::new(width, height, &mut self.random).run()?;
        let mut cells = outcome.grid;

        let markers = if with_markers {
            place_markers(&mut cells, outcome.start, &mut self.random)?
        } else {
            MarkerPlacement::default()
        };

        rasterize_grid(&cells, sink);

        Ok((cells, outcome.start, markers))
    }
}

/// Generate a dungeon of `width` by `height` cells with the reference source
///
/// # Errors
///
/// Returns an invalid configuration error for zero or oversized dimensions.
pub fn generate(width: usize, height: usize, seed: u32) -> Result<Dungeon> {
    DungeonGenerator::new(GeneratorConfig::new(width, height, seed)).generate()
}
