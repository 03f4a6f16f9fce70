//! Seeded macro-cell dungeon generation
//!
//! A dungeon is grown as a graph of macro-cells from a four-way room at the
//! grid center, breadth first, with reciprocal openings between neighbors.
//! Each cell is then rasterized into a fixed-size block of tiles whose edge
//! openings line up with the blocks next to it.

#![forbid(unsafe_code)]

/// Growth, marker placement, random sources and rasterization
pub mod algorithm;
/// Topology checks and coverage statistics over generated dungeons
pub mod analysis;
/// Configuration, error handling and the command-line surface
pub mod io;
/// Directions, cells, grids and tiles
pub mod spatial;

pub use algorithm::generator::{Dungeon, DungeonGenerator, GeneratorConfig, generate};
pub use io::error::{DungeonError, Result};
