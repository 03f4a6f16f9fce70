//! Abstract cell grid addressed by integer points
//!
//! Storage is an `ndarray::Array2` indexed `[row, col]`, i.e. `[y, x]`.
//! Points are signed so neighbor offsets past the top or left edge stay
//! representable; such points are simply out of bounds.

use ndarray::Array2;

use crate::spatial::cell::Cell;

/// Integer coordinate on the abstract cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Point {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 2-D array of macro-cells produced by growth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Array2<Cell>,
}

impl CellGrid {
    /// Create a grid with every cell vacant
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::default((height, width)),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Grid center `(w / 2, h / 2)`
    pub fn center(&self) -> Point {
        Point::new((self.width() / 2) as i32, (self.height() / 2) as i32)
    }

    fn index(&self, point: Point) -> Option<[usize; 2]> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width() && y < self.height()).then_some([y, x])
    }

    /// Whether the point lies inside the grid
    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Cell at a point, `None` when out of bounds
    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.index(point).and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at a point, `None` when out of bounds
    pub fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.index(point).and_then(|index| self.cells.get_mut(index))
    }

    /// Whether the point is in bounds and holds a generated cell
    pub fn is_occupied(&self, point: Point) -> bool {
        self.get(point).is_some_and(|cell| !cell.is_vacant())
    }

    /// Store a cell at a vacant, in-bounds point
    ///
    /// Occupied cells are never overwritten; returns whether the cell was stored.
    pub fn place(&mut self, point: Point, cell: Cell) -> bool {
        match self.get_mut(point) {
            Some(slot) if slot.is_vacant() => {
                *slot = cell;
                true
            }
            _ => false,
        }
    }

    /// Iterate all cells with their points in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| (Point::new(x as i32, y as i32), cell))
    }

    /// Count of generated cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_vacant()).count()
    }

    /// Total number of grid locations
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no locations
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
