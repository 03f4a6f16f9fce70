//! Concrete tiles and the tile map sink rasterization writes into
//!
//! The generator never owns the tile storage: it writes through [`TileSink`],
//! which [`TileMap`] implements over an `ndarray::Array2`.

use ndarray::Array2;

use crate::spatial::cell::AttributeType;

/// What a tile is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialType {
    /// Outside any generated cell
    #[default]
    Void,
    /// Solid, not traversable
    Wall,
    /// Walkable ground
    Floor,
}

impl MaterialType {
    /// Whether a walker can stand here
    pub const fn is_traversable(self) -> bool {
        matches!(self, Self::Floor)
    }
}

/// One concrete tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    /// Material
    pub material: MaterialType,
    /// Markers copied from the owning cell
    pub attributes: AttributeType,
}

impl Tile {
    /// Unmarked tile of the given material
    pub const fn new(material: MaterialType) -> Self {
        Self {
            material,
            attributes: AttributeType::empty(),
        }
    }
}

/// Indexed tile storage the rasterizer writes into
pub trait TileSink {
    /// Width in tiles
    fn width(&self) -> usize;

    /// Height in tiles
    fn height(&self) -> usize;

    /// Tile at `(x, y)`, `None` when out of bounds
    fn tile(&self, x: usize, y: usize) -> Option<&Tile>;

    /// Overwrite the tile at `(x, y)`; out-of-bounds writes are ignored
    fn set_tile(&mut self, x: usize, y: usize, tile: Tile);
}

/// Owned 2-D tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Array2<Tile>,
}

impl TileMap {
    /// Create a map filled with void tiles
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Array2::default((height, width)),
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Tile>> {
        self.tiles.rows().into_iter().map(|row| row.into_iter())
    }

    /// Count tiles of one material
    pub fn count_material(&self, material: MaterialType) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.material == material)
            .count()
    }
}

impl TileSink for TileMap {
    fn width(&self) -> usize {
        self.tiles.ncols()
    }

    fn height(&self) -> usize {
        self.tiles.nrows()
    }

    fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.tiles.get([y, x])
    }

    fn set_tile(&mut self, x: usize, y: usize, tile: Tile) {
        if let Some(slot) = self.tiles.get_mut([y, x]) {
            *slot = tile;
        }
    }
}
