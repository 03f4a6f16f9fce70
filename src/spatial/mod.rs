//! Spatial data structures for the cell graph and the tile map
//!
//! This module contains:
//! - Compass directions and opening sets
//! - The abstract macro-cell model and its grid
//! - Concrete tiles and the sink they are written into

/// Abstract macro-cell model
pub mod cell;
/// Compass directions and combinable direction sets
pub mod direction;
/// Abstract cell grid and grid coordinates
pub mod grid;
/// Concrete tiles, the tile sink trait and the owned tile map
pub mod tiles;

pub use cell::{AttributeType, Cell, CellType};
pub use direction::{Direction, Directions};
pub use grid::{CellGrid, Point};
pub use tiles::{MaterialType, Tile, TileMap, TileSink};
