//! Abstract macro-cell model
//!
//! A cell is one node of the connectivity graph: an archetype, the sides that
//! open onto neighbors, and semantic markers for downstream consumers.

use bitflags::bitflags;

use crate::spatial::direction::Directions;

/// Macro-cell archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Not yet generated; never stored as an occupied cell
    #[default]
    None,
    /// Open chamber
    Room,
    /// One-wide passage
    Corridor,
    /// Three-wide passage
    GreatHall,
    /// Small plaza where passages meet
    Junction,
}

impl CellType {
    /// Archetypes growth draws from, in draw order
    pub const CATALOG: [Self; 4] = [Self::Room, Self::Corridor, Self::GreatHall, Self::Junction];

    /// Whether this is the unvisited sentinel
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Position in [`Self::CATALOG`], `None` for the sentinel
    pub const fn catalog_index(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Room => Some(0),
            Self::Corridor => Some(1),
            Self::GreatHall => Some(2),
            Self::Junction => Some(3),
        }
    }
}

bitflags! {
    /// Semantic markers attached to cells and tiles
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttributeType: u8 {
        /// Where the player enters the level
        const ENTRY = 0b0000_0001;
        /// Where the player leaves the level
        const EXIT = 0b0000_0010;
        /// Treasure placement
        const LOOT = 0b0000_0100;
        /// Ordinary monster spawn
        const MOB_SPAWN = 0b0000_1000;
        /// Boss monster spawn
        const BOSS_SPAWN = 0b0001_0000;
    }
}

/// One abstract macro-cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Archetype, `CellType::None` when unoccupied
    pub cell_type: CellType,
    /// Sides connecting to neighbors
    pub openings: Directions,
    /// Markers placed after growth
    pub attributes: AttributeType,
}

impl Cell {
    /// Create an unmarked cell
    pub const fn new(cell_type: CellType, openings: Directions) -> Self {
        Self {
            cell_type,
            openings,
            attributes: AttributeType::empty(),
        }
    }

    /// Room open on all four sides, used as the growth seed
    pub const fn four_way_room() -> Self {
        Self::new(CellType::Room, Directions::all())
    }

    /// Whether nothing has been generated here yet
    pub const fn is_vacant(&self) -> bool {
        self.cell_type.is_none()
    }
}
