//! Tests for the abstract cell model

#[cfg(test)]
mod tests {
    use dungeon_cells::spatial::{AttributeType, Cell, CellType, Directions};

    // Tests the seed room is a room open on every side
    // Verified by dropping West from four_way_room
    #[test]
    fn test_four_way_room() {
        let cell = Cell::four_way_room();
        assert_eq!(cell.cell_type, CellType::Room);
        assert_eq!(cell.openings, Directions::all());
        assert!(cell.attributes.is_empty());
        assert!(!cell.is_vacant());
    }

    // Tests the default cell is the vacant sentinel
    // Verified by defaulting CellType to Room
    #[test]
    fn test_default_cell_is_vacant() {
        let cell = Cell::default();
        assert!(cell.is_vacant());
        assert!(cell.openings.is_empty());
    }

    // Tests the catalog excludes the sentinel and indexes match positions
    // Verified by swapping two catalog_index arms
    #[test]
    fn test_catalog_indices() {
        assert!(!CellType::CATALOG.contains(&CellType::None));
        for (position, cell_type) in CellType::CATALOG.iter().enumerate() {
            assert_eq!(cell_type.catalog_index(), Some(position));
        }
        assert_eq!(CellType::None.catalog_index(), None);
    }

    // Tests attribute flags combine independently
    // Verified by giving LOOT the same bit as EXIT
    #[test]
    fn test_attributes_combine() {
        let markers = AttributeType::EXIT | AttributeType::BOSS_SPAWN;
        assert!(markers.contains(AttributeType::EXIT));
        assert!(!markers.contains(AttributeType::LOOT));
        assert_eq!(AttributeType::all().bits().count_ones(), 5);
    }
}
