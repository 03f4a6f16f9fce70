//! Graph checks over the abstract cell grid
//!
//! Two cells are linked when both carry the opening toward each other.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::spatial::{CellGrid, Direction, Point};

/// Openings whose in-bounds neighbor lacks the reciprocal opening
///
/// Openings leading off the grid are allowed and never reported.
pub fn reciprocity_violations(grid: &CellGrid) -> Vec<(Point, Direction)> {
    grid.iter()
        .filter(|(_, cell)| !cell.is_vacant())
        .flat_map(|(point, cell)| {
            cell.openings
                .directions()
                .map(move |direction| (point, direction))
        })
        .filter(|&(point, direction)| {
            grid.get(direction.offset(point)).is_some_and(|neighbor| {
                neighbor.is_vacant() || !neighbor.openings.includes(direction.opposite())
            })
        })
        .collect()
}

/// Neighbors linked to `point` by reciprocal openings
pub fn linked_neighbors(grid: &CellGrid, point: Point) -> impl Iterator<Item = Point> + '_ {
    let openings = grid
        .get(point)
        .filter(|cell| !cell.is_vacant())
        .map(|cell| cell.openings)
        .unwrap_or_default();

    openings.directions().filter_map(move |direction| {
        let neighbor = direction.offset(point);
        grid.get(neighbor)
            .is_some_and(|cell| {
                !cell.is_vacant() && cell.openings.includes(direction.opposite())
            })
            .then_some(neighbor)
    })
}

/// Breadth-first graph distance from `start` to every linked cell
///
/// Unreached locations hold `None`. Indexed `[y, x]`.
pub fn distances_from(grid: &CellGrid, start: Point) -> Array2<Option<usize>> {
    let mut distances = Array2::from_elem((grid.height(), grid.width()), None);
    if !grid.is_occupied(start) {
        return distances;
    }

    let index = |point: Point| [point.y as usize, point.x as usize];
    if let Some(slot) = distances.get_mut(index(start)) {
        *slot = Some(0);
    }

    let mut queue = VecDeque::from([(start, 0_usize)]);
    while let Some((point, distance)) = queue.pop_front() {
        for neighbor in linked_neighbors(grid, point) {
            if let Some(slot) = distances.get_mut(index(neighbor))
                && slot.is_none()
            {
                *slot = Some(distance + 1);
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    distances
}

/// Occupied cells with no linked path to `start`
pub fn unreachable_cells(grid: &CellGrid, start: Point) -> Vec<Point> {
    let distances = distances_from(grid, start);
    grid.iter()
        .filter(|(point, cell)| {
            !cell.is_vacant()
                && distances
                    .get([point.y as usize, point.x as usize])
                    .is_some_and(Option::is_none)
        })
        .map(|(point, _)| point)
        .collect()
}
