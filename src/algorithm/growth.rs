//! Breadth-first growth of the abstract cell grid
//!
//! Growth starts from a four-way room at the grid center and expands a FIFO
//! frontier. Every opening of a dequeued cell proposes a neighbor; a neighbor
//! is created at most once, so the walk terminates after touching each grid
//! location at most once per incoming opening.
//!
//! Openings stay reciprocal: a new cell only opens toward vacant locations or
//! toward cells that already open back at it, always opens back toward its
//! parent, and adopts the reciprocal of any occupied neighbor already facing
//! it.

use std::collections::VecDeque;

use crate::algorithm::random::RandomSource;
use crate::io::error::{Result, contract_violation};
use crate::spatial::{Cell, CellGrid, CellType, Direction, Directions, Point};

/// Connection count at which the draw for extra openings degenerates
const MAX_DRAWN_CONNECTIONS: usize = 4;

/// Directions scanned for outgoing openings per new cell
const SCANNED_DIRECTIONS: usize = 3;

/// Completed growth pass
#[derive(Debug, Clone)]
pub struct GrowthOutcome {
    /// Populated abstract grid
    pub grid: CellGrid,
    /// Seed location of the walk
    pub start: Point,
    /// Every location in the order its cell was created, start first
    pub creation_order: Vec<Point>,
}

/// Frontier-driven cell growth over a fixed-size grid
pub struct CellGrowth<R> {
    grid: CellGrid,
    frontier: VecDeque<Point>,
    creation_order: Vec<Point>,
    start: Point,
    random: R,
}

impl<R: RandomSource> CellGrowth<R> {
    /// Prepare a grid with the four-way room placed at its center
    ///
    /// A zero-sized grid has nowhere to place the room and grows nothing.
    pub fn new(width: usize, height: usize, random: R) -> Self {
        let mut grid = CellGrid::new(width, height);
        let start = grid.center();

        let mut frontier = VecDeque::new();
        let mut creation_order = Vec::with_capacity(grid.len());
        if grid.place(start, Cell::four_way_room()) {
            frontier.push_back(start);
            creation_order.push(start);
        }

        Self {
            grid,
            frontier,
            creation_order,
            start,
            random,
        }
    }

    /// Current grid state
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Locations still waiting to be expanded
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Expand the next frontier location
    ///
    /// Returns `Ok(false)` once the frontier is empty.
    ///
    /// # Errors
    ///
    /// Returns a contract violation if the random source draws a cell type
    /// index outside the catalog.
    pub fn step(&mut self) -> Result<bool> {
        let Some(location) = self.frontier.pop_front() else {
            return Ok(false);
        };

        let openings = self
            .grid
            .get(location)
            .map_or(Directions::empty(), |cell| cell.openings);

        for direction in openings.directions() {
            let neighbor = direction.offset(location);
            if let Some(cell) = self.determine_cell(neighbor, direction)? {
                log::trace!(
                    "created {:?} at ({}, {}) with openings {:?}",
                    cell.cell_type,
                    neighbor.x,
                    neighbor.y,
                    cell.openings
                );
                self.grid.place(neighbor, cell);
                self.creation_order.push(neighbor);
                self.frontier.push_back(neighbor);
            }
        }

        Ok(true)
    }

    /// Drain the frontier and hand back the populated grid
    ///
    /// # Errors
    ///
    /// Propagates contract violations from [`Self::step`].
    pub fn run(mut self) -> Result<GrowthOutcome> {
        while self.step()? {}

        log::debug!(
            "growth finished: {} of {} cells created",
            self.creation_order.len(),
            self.grid.len()
        );

        Ok(GrowthOutcome {
            grid: self.grid,
            start: self.start,
            creation_order: self.creation_order,
        })
    }

    /// Decide which cell, if any, to create at `location`
    ///
    /// `direction` is the way growth travelled to reach `location`. Returns
    /// `None` for out-of-bounds or already occupied locations.
    ///
    /// # Errors
    ///
    /// Returns a contract violation if the random source draws a cell type
    /// index outside the catalog.
    pub fn determine_cell(
        &mut self,
        location: Point,
        direction: Direction,
    ) -> Result<Option<Cell>> {
        match self.grid.get(location) {
            Some(cell) if cell.is_vacant() => {}
            _ => return Ok(None),
        }

        let candidates = candidate_openings(&self.grid, location, direction);

        let catalog_len = CellType::CATALOG.len() as u32;
        let type_index = self.random.next_below(catalog_len);
        let cell_type = CellType::CATALOG
            .get(type_index as usize)
            .copied()
            .ok_or_else(|| {
                contract_violation(
                    "random source",
                    &format!("returned {type_index} for bound {catalog_len}"),
                )
            })?;

        let candidate_count = candidates.len();
        let connections = if candidate_count >= MAX_DRAWN_CONNECTIONS {
            candidate_count
        } else {
            self.random.next_in(
                candidate_count as u32,
                candidate_count.max(MAX_DRAWN_CONNECTIONS) as u32,
            ) as usize
        };

        let openings = candidates
            .into_iter()
            .take(connections)
            .chain(std::iter::once(direction.opposite()))
            .collect::<Directions>()
            | facing_neighbors(&self.grid, location);

        Ok(Some(Cell::new(cell_type, openings)))
    }
}

/// Outgoing openings a new cell at `location` may take
///
/// Scans `direction` and the next two clockwise turns. A side qualifies when
/// the location beyond it is in bounds and either vacant or already opening
/// back toward `location`.
pub fn candidate_openings(grid: &CellGrid, location: Point, direction: Direction) -> Vec<Direction> {
    let mut candidates = Vec::with_capacity(SCANNED_DIRECTIONS);
    let mut scanned = direction;

    for _ in 0..SCANNED_DIRECTIONS {
        if let Some(beyond) = grid.get(scanned.offset(location))
            && (beyond.is_vacant() || beyond.openings.includes(scanned.opposite()))
        {
            candidates.push(scanned);
        }
        scanned = scanned.rotate_right();
    }

    candidates
}

/// Sides of `location` whose occupied neighbor already opens toward it
pub fn facing_neighbors(grid: &CellGrid, location: Point) -> Directions {
    Direction::ALL
        .into_iter()
        .filter(|direction| {
            grid.get(direction.offset(location)).is_some_and(|neighbor| {
                !neighbor.is_vacant() && neighbor.openings.includes(direction.opposite())
            })
        })
        .collect()
}

/// Grow a complete grid of the given dimensions
///
/// # Errors
///
/// Propagates contract violations from the random source.
pub fn grow_cells<R: RandomSource>(width: usize, height: usize, random: R) -> Result<GrowthOutcome> {
    CellGrowth::new(width, height, random).run()
}
