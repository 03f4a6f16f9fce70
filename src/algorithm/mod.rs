/// Generator facade tying growth, markers and rasterization together
pub mod generator;
/// Breadth-first growth of the abstract cell grid
pub mod growth;
/// Entry, exit, boss and loot placement on a finished grid
pub mod markers;
/// Seeded pseudo-random sources
pub mod random;
/// Cell-to-tile rasterization
pub mod raster;
