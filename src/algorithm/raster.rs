//! Rasterization of abstract cells into fixed-size tile blocks
//!
//! Every cell becomes a `CELL_BLOCK_SIZE` square of tiles. Openings appear as
//! floor at the midpoint of the matching block edge, so reciprocal openings of
//! adjacent cells meet across the block boundary. Floor layouts are looked up
//! in a table keyed by archetype and 4-bit opening pattern, built once.
//!
//! Each table entry is pruned so that only floor reachable from an opening
//! survives; everything else inside the block is wall.

use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::{CELL_BLOCK_MIDPOINT, CELL_BLOCK_SIZE};
use crate::spatial::{
    Cell, CellGrid, CellType, Direction, Directions, MaterialType, Point, Tile, TileSink,
};

/// Number of distinct opening patterns per archetype
pub const OPENING_PATTERNS: usize = 16;

const LAST: usize = CELL_BLOCK_SIZE - 1;

/// Chamber carved by rooms
const ROOM_SPAN: RangeInclusive<usize> = 2..=6;

/// Plaza carved by junctions and great halls
const PLAZA_SPAN: RangeInclusive<usize> = 3..=5;

/// Floor masks indexed by `catalog_index * OPENING_PATTERNS + openings`
static FLOOR_MASKS: LazyLock<Vec<BitVec>> = LazyLock::new(|| {
    CellType::CATALOG
        .iter()
        .flat_map(|&cell_type| {
            (0..OPENING_PATTERNS as u8)
                .map(move |bits| build_floor_mask(cell_type, Directions::from_bits_truncate(bits)))
        })
        .collect()
});

/// Local `(x, y)` of the edge midpoint a direction opens through
pub const fn edge_midpoint(direction: Direction) -> (usize, usize) {
    match direction {
        Direction::North => (CELL_BLOCK_MIDPOINT, 0),
        Direction::East => (LAST, CELL_BLOCK_MIDPOINT),
        Direction::South => (CELL_BLOCK_MIDPOINT, LAST),
        Direction::West => (0, CELL_BLOCK_MIDPOINT),
    }
}

const fn mask_index(x: usize, y: usize) -> usize {
    y * CELL_BLOCK_SIZE + x
}

/// Floor test; coordinates outside the block read as wall
fn is_floor(mask: &BitSlice, x: usize, y: usize) -> bool {
    x < CELL_BLOCK_SIZE
        && y < CELL_BLOCK_SIZE
        && mask.get(mask_index(x, y)).as_deref() == Some(&true)
}

fn carve_rect(mask: &mut BitVec, xs: RangeInclusive<usize>, ys: RangeInclusive<usize>) {
    for y in ys {
        for x in xs.clone() {
            mask.set(mask_index(x, y), true);
        }
    }
}

/// One-wide spur from an edge midpoint to the block center
fn carve_spur(mask: &mut BitVec, direction: Direction) {
    let (x, y) = edge_midpoint(direction);
    let center = CELL_BLOCK_MIDPOINT;
    carve_rect(mask, x.min(center)..=x.max(center), y.min(center)..=y.max(center));
}

/// Three-wide band from just inside an edge to the block center
fn carve_band(mask: &mut BitVec, direction: Direction) {
    let center = CELL_BLOCK_MIDPOINT;
    match direction {
        Direction::North => carve_rect(mask, PLAZA_SPAN, 1..=center),
        Direction::South => carve_rect(mask, PLAZA_SPAN, center..=LAST - 1),
        Direction::West => carve_rect(mask, 1..=center, PLAZA_SPAN),
        Direction::East => carve_rect(mask, center..=LAST - 1, PLAZA_SPAN),
    }
}

/// Clear floor that cannot be reached from any opening
fn prune_unreachable(mask: &BitVec, openings: Directions) -> BitVec {
    let mut reached = bitvec![0; mask.len()];
    let mut queue: VecDeque<(usize, usize)> = openings.directions().map(edge_midpoint).collect();

    for &(x, y) in &queue {
        reached.set(mask_index(x, y), true);
    }

    while let Some((x, y)) = queue.pop_front() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let (Some(nx), Some(ny)) = (
                x.checked_add_signed(dx as isize),
                y.checked_add_signed(dy as isize),
            ) else {
                continue;
            };
            if is_floor(mask, nx, ny) && !is_floor(&reached, nx, ny) {
                reached.set(mask_index(nx, ny), true);
                queue.push_back((nx, ny));
            }
        }
    }

    reached
}

/// Carve and prune the floor layout for one archetype and opening pattern
fn build_floor_mask(cell_type: CellType, openings: Directions) -> BitVec {
    let mut mask = bitvec![0; CELL_BLOCK_SIZE * CELL_BLOCK_SIZE];

    for direction in openings.directions() {
        carve_spur(&mut mask, direction);
    }

    match cell_type {
        CellType::Room => carve_rect(&mut mask, ROOM_SPAN, ROOM_SPAN),
        CellType::GreatHall => {
            carve_rect(&mut mask, PLAZA_SPAN, PLAZA_SPAN);
            for direction in openings.directions() {
                carve_band(&mut mask, direction);
            }
        }
        CellType::Junction => carve_rect(&mut mask, PLAZA_SPAN, PLAZA_SPAN),
        CellType::Corridor | CellType::None => {}
    }

    prune_unreachable(&mask, openings)
}

/// Floor mask for a cell, row-major over the block
///
/// Returns `None` for the vacant sentinel, which has no floor.
pub fn floor_mask(cell_type: CellType, openings: Directions) -> Option<&'static BitSlice> {
    let slot = cell_type.catalog_index()?;
    FLOOR_MASKS
        .get(slot * OPENING_PATTERNS + openings.bits() as usize)
        .map(BitVec::as_bitslice)
}

/// Materials of the block a cell rasterizes into, indexed `[y, x]`
pub fn cell_block(cell_type: CellType, openings: Directions) -> Array2<MaterialType> {
    floor_mask(cell_type, openings).map_or_else(
        || Array2::from_elem((CELL_BLOCK_SIZE, CELL_BLOCK_SIZE), MaterialType::Void),
        |mask| {
            Array2::from_shape_fn((CELL_BLOCK_SIZE, CELL_BLOCK_SIZE), |(y, x)| {
                if is_floor(mask, x, y) {
                    MaterialType::Floor
                } else {
                    MaterialType::Wall
                }
            })
        },
    )
}

/// Write one cell's block at tile origin `(cx * size, cy * size)`
///
/// The cell's attributes land on the block's center tile. Tiles falling
/// outside the sink are skipped.
pub fn rasterize_cell<S: TileSink + ?Sized>(cell: &Cell, location: Point, sink: &mut S) {
    let (Ok(cx), Ok(cy)) = (usize::try_from(location.x), usize::try_from(location.y)) else {
        return;
    };
    let origin_x = cx * CELL_BLOCK_SIZE;
    let origin_y = cy * CELL_BLOCK_SIZE;

    let block = cell_block(cell.cell_type, cell.openings);
    for ((y, x), &material) in block.indexed_iter() {
        let mut tile = Tile::new(material);
        if x == CELL_BLOCK_MIDPOINT && y == CELL_BLOCK_MIDPOINT {
            tile.attributes = cell.attributes;
        }
        sink.set_tile(origin_x + x, origin_y + y, tile);
    }
}

/// Rasterize every cell of the grid in row-major order
pub fn rasterize_grid<S: TileSink + ?Sized>(grid: &CellGrid, sink: &mut S) {
    for (location, cell) in grid.iter() {
        rasterize_cell(cell, location, sink);
    }
}
