//! Semantic markers placed on a completed cell grid
//!
//! Runs after growth and never changes types or openings. The entry sits on
//! the start cell, the exit in a cell near one of the map corners, boss spawns
//! on the remaining corner cells and loot in unmarked dead ends.

use crate::algorithm::random::RandomSource;
use crate::analysis::topology::distances_from;
use crate::io::configuration::CORNER_REGION_FRACTION;
use crate::io::error::{Result, contract_violation};
use crate::spatial::{AttributeType, CellGrid, Point};

/// Where each marker ended up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerPlacement {
    /// Start cell, absent only for an empty grid
    pub entry: Option<Point>,
    /// Exit cell, absent when the start is the only cell
    pub exit: Option<Point>,
    /// Corner cells guarded by bosses
    pub boss_spawns: Vec<Point>,
    /// Dead ends holding loot
    pub loot: Vec<Point>,
}

fn near_edge(coordinate: i32, extent: usize) -> bool {
    let extent = extent as f64;
    let band = extent * CORNER_REGION_FRACTION;
    let coordinate = f64::from(coordinate);
    coordinate <= band || coordinate >= extent - band
}

/// Occupied cells other than `start` lying in a corner band on both axes
///
/// Returned in row-major order.
pub fn corner_candidates(grid: &CellGrid, start: Point) -> Vec<Point> {
    grid.iter()
        .filter(|(point, cell)| {
            !cell.is_vacant()
                && *point != start
                && near_edge(point.x, grid.width())
                && near_edge(point.y, grid.height())
        })
        .map(|(point, _)| point)
        .collect()
}

/// Occupied cell with the greatest graph distance from `start`
///
/// Ties go to the first cell in row-major order. `None` when nothing else is
/// linked to the start.
pub fn farthest_cell(grid: &CellGrid, start: Point) -> Option<Point> {
    let distances = distances_from(grid, start);
    let mut best: Option<(usize, Point)> = None;

    for ((y, x), distance) in distances.indexed_iter() {
        let Some(distance) = *distance else {
            continue;
        };
        if distance > 0 && best.is_none_or(|(best_distance, _)| distance > best_distance) {
            best = Some((distance, Point::new(x as i32, y as i32)));
        }
    }

    best.map(|(_, point)| point)
}

fn mark(grid: &mut CellGrid, point: Point, attribute: AttributeType) {
    if let Some(cell) = grid.get_mut(point) {
        cell.attributes |= attribute;
    }
}

/// Annotate the grid with entry, exit, boss and loot markers
///
/// Consumes one draw from `random` when corner candidates exist.
///
/// # Errors
///
/// Returns a contract violation if the random source draws an index outside
/// the candidate list.
pub fn place_markers<R: RandomSource + ?Sized>(
    grid: &mut CellGrid,
    start: Point,
    random: &mut R,
) -> Result<MarkerPlacement> {
    let mut placement = MarkerPlacement::default();
    if !grid.is_occupied(start) {
        return Ok(placement);
    }

    mark(grid, start, AttributeType::ENTRY);
    placement.entry = Some(start);

    let candidates = corner_candidates(grid, start);
    let exit = if candidates.is_empty() {
        farthest_cell(grid, start)
    } else {
        let bound = candidates.len() as u32;
        let drawn = random.next_below(bound);
        let chosen = candidates.get(drawn as usize).copied().ok_or_else(|| {
            contract_violation(
                "random source",
                &format!("returned {drawn} for bound {bound}"),
            )
        })?;
        Some(chosen)
    };

    if let Some(exit) = exit {
        mark(grid, exit, AttributeType::EXIT);
    }
    placement.exit = exit;

    for &candidate in &candidates {
        if Some(candidate) != exit {
            mark(grid, candidate, AttributeType::BOSS_SPAWN);
            placement.boss_spawns.push(candidate);
        }
    }

    placement.loot = grid
        .iter()
        .filter(|(_, cell)| {
            !cell.is_vacant() && cell.openings.len() == 1 && cell.attributes.is_empty()
        })
        .map(|(point, _)| point)
        .collect();
    for &point in &placement.loot {
        mark(grid, point, AttributeType::LOOT);
    }

    log::debug!(
        "markers placed: exit {:?}, {} boss spawns, {} loot",
        placement.exit,
        placement.boss_spawns.len(),
        placement.loot.len()
    );

    Ok(placement)
}
