//! Compass directions and their combinable flag sets
//!
//! A single [`Direction`] names one side of a macro-cell. Sets of sides are
//! carried as [`Directions`] bit flags so an opening pattern fits in four bits
//! and can index lookup tables directly.

use bitflags::bitflags;

use crate::spatial::grid::Point;

bitflags! {
    /// OR-combinable set of cardinal directions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Directions: u8 {
        /// Toward decreasing `y`
        const NORTH = 0b0001;
        /// Toward increasing `x`
        const EAST = 0b0010;
        /// Toward increasing `y`
        const SOUTH = 0b0100;
        /// Toward decreasing `x`
        const WEST = 0b1000;
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up, `y - 1`
    North,
    /// Right, `x + 1`
    East,
    /// Down, `y + 1`
    South,
    /// Left, `x - 1`
    West,
}

impl Direction {
    /// All directions in the fixed iteration order used by growth
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Next direction clockwise
    pub const fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Next direction counter-clockwise
    pub const fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// The reciprocal direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit step `(dx, dy)` for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Coordinate shifted one unit this way
    pub const fn offset(self, point: Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }

    /// Single-bit flag for this direction
    pub const fn flag(self) -> Directions {
        match self {
            Self::North => Directions::NORTH,
            Self::East => Directions::EAST,
            Self::South => Directions::SOUTH,
            Self::West => Directions::WEST,
        }
    }
}

impl From<Direction> for Directions {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, direction| set | direction.flag())
    }
}

impl Directions {
    /// Membership test for a single direction
    pub const fn includes(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Combine a sequence of directions into one set
    pub fn to_set<I: IntoIterator<Item = Direction>>(directions: I) -> Self {
        directions.into_iter().collect()
    }

    /// Iterate the contained directions in N, E, S, W order
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.includes(*direction))
    }

    /// Expand the set into its directions in N, E, S, W order
    pub fn to_sequence(self) -> Vec<Direction> {
        self.directions().collect()
    }

    /// Number of directions in the set
    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}
