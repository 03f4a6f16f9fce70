//! Tests for cell block rasterization

#[cfg(test)]
mod tests {
    use dungeon_cells::algorithm::raster::{
        OPENING_PATTERNS, cell_block, edge_midpoint, floor_mask, rasterize_cell, rasterize_grid,
    };
    use dungeon_cells::io::configuration::{CELL_BLOCK_MIDPOINT, CELL_BLOCK_SIZE};
    use dungeon_cells::spatial::{
        AttributeType, Cell, CellGrid, CellType, Direction, Directions, MaterialType, Point,
        TileMap, TileSink,
    };
    use ndarray::Array2;
    use std::collections::VecDeque;

    fn floor_count(block: &Array2<MaterialType>) -> usize {
        block
            .iter()
            .filter(|&&material| material == MaterialType::Floor)
            .count()
    }

    fn all_patterns() -> impl Iterator<Item = Directions> {
        (0..OPENING_PATTERNS as u8).map(Directions::from_bits_truncate)
    }

    // Tests midpoints sit on the matching block edge
    // Verified by swapping the East and West midpoints
    #[test]
    fn test_edge_midpoints() {
        assert_eq!(edge_midpoint(Direction::North), (4, 0));
        assert_eq!(edge_midpoint(Direction::East), (8, 4));
        assert_eq!(edge_midpoint(Direction::South), (4, 8));
        assert_eq!(edge_midpoint(Direction::West), (0, 4));
    }

    // Tests a straight corridor is a single column of floor
    // Verified by carving corridors three tiles wide
    #[test]
    fn test_straight_corridor() {
        let block = cell_block(CellType::Corridor, Directions::NORTH | Directions::SOUTH);
        assert_eq!(floor_count(&block), CELL_BLOCK_SIZE);
        for y in 0..CELL_BLOCK_SIZE {
            assert_eq!(block.get((y, CELL_BLOCK_MIDPOINT)), Some(&MaterialType::Floor));
        }
    }

    // Tests each archetype carves its own footprint
    // Verified by carving junction plazas at room size
    #[test]
    fn test_archetype_footprints() {
        assert_eq!(floor_count(&cell_block(CellType::Room, Directions::NORTH)), 27);
        assert_eq!(floor_count(&cell_block(CellType::Junction, Directions::EAST)), 12);
        assert_eq!(floor_count(&cell_block(CellType::GreatHall, Directions::NORTH)), 16);
        assert_eq!(floor_count(&cell_block(CellType::Corridor, Directions::EAST)), 5);
    }

    // Tests a cell without openings is solid wall
    // Verified by seeding the prune from the block center
    #[test]
    fn test_sealed_cells_are_solid() {
        for cell_type in CellType::CATALOG {
            let block = cell_block(cell_type, Directions::empty());
            assert!(block.iter().all(|&material| material == MaterialType::Wall));
        }
    }

    // Tests the vacant sentinel has no mask and rasterizes to void
    // Verified by mapping None onto the corridor table
    #[test]
    fn test_vacant_cell_is_void() {
        assert!(floor_mask(CellType::None, Directions::all()).is_none());
        let block = cell_block(CellType::None, Directions::all());
        assert!(block.iter().all(|&material| material == MaterialType::Void));
    }

    // Tests borders are wall except at the midpoints of open edges
    // Verified by carving great hall bands to the block edge
    #[test]
    fn test_border_openings_match_pattern() {
        for cell_type in CellType::CATALOG {
            for openings in all_patterns() {
                let block = cell_block(cell_type, openings);
                let open: Vec<(usize, usize)> =
                    openings.directions().map(edge_midpoint).collect();
                for ((y, x), &material) in block.indexed_iter() {
                    let on_border = x == 0
                        || y == 0
                        || x == CELL_BLOCK_SIZE - 1
                        || y == CELL_BLOCK_SIZE - 1;
                    if !on_border {
                        continue;
                    }
                    let expected = if open.contains(&(x, y)) {
                        MaterialType::Floor
                    } else {
                        MaterialType::Wall
                    };
                    assert_eq!(material, expected, "{cell_type:?} {openings:?} at ({x}, {y})");
                }
            }
        }
    }

    // Tests every floor tile connects to an opening
    // Verified by skipping prune_unreachable in build_floor_mask
    #[test]
    fn test_no_unreachable_floor() {
        for cell_type in CellType::CATALOG {
            for openings in all_patterns() {
                let block = cell_block(cell_type, openings);
                let mut reached = Array2::from_elem(block.dim(), false);
                let mut queue: VecDeque<(usize, usize)> = openings
                    .directions()
                    .map(edge_midpoint)
                    .map(|(x, y)| (y, x))
                    .collect();
                for &index in &queue {
                    if let Some(slot) = reached.get_mut(index) {
                        *slot = true;
                    }
                }

                while let Some((y, x)) = queue.pop_front() {
                    for direction in Direction::ALL {
                        let (dx, dy) = direction.delta();
                        let (Some(nx), Some(ny)) = (
                            x.checked_add_signed(dx as isize),
                            y.checked_add_signed(dy as isize),
                        ) else {
                            continue;
                        };
                        if block.get((ny, nx)) == Some(&MaterialType::Floor)
                            && reached.get((ny, nx)) == Some(&false)
                        {
                            if let Some(slot) = reached.get_mut((ny, nx)) {
                                *slot = true;
                            }
                            queue.push_back((ny, nx));
                        }
                    }
                }

                for ((y, x), &material) in block.indexed_iter() {
                    if material == MaterialType::Floor {
                        assert_eq!(
                            reached.get((y, x)),
                            Some(&true),
                            "{cell_type:?} {openings:?} at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    // Tests every table entry has one mask bit per block tile
    // Verified by sizing masks to a single row
    #[test]
    fn test_mask_dimensions() {
        for cell_type in CellType::CATALOG {
            for openings in all_patterns() {
                let mask = floor_mask(cell_type, openings).expect("catalog type has a mask");
                assert_eq!(mask.len(), CELL_BLOCK_SIZE * CELL_BLOCK_SIZE);
            }
        }
    }

    // Tests blocks land at the cell's tile origin with attributes at the center
    // Verified by writing attributes to the block origin
    #[test]
    fn test_rasterize_cell_placement() {
        let mut sink = TileMap::new(CELL_BLOCK_SIZE * 2, CELL_BLOCK_SIZE);
        let mut cell = Cell::new(CellType::Corridor, Directions::WEST);
        cell.attributes = AttributeType::LOOT;
        rasterize_cell(&cell, Point::new(1, 0), &mut sink);

        let center = sink.tile(CELL_BLOCK_SIZE + CELL_BLOCK_MIDPOINT, CELL_BLOCK_MIDPOINT);
        assert_eq!(center.map(|tile| tile.attributes), Some(AttributeType::LOOT));
        assert_eq!(
            sink.tile(CELL_BLOCK_SIZE, CELL_BLOCK_MIDPOINT).map(|tile| tile.material),
            Some(MaterialType::Floor)
        );
        assert_eq!(sink.count_material(MaterialType::Void), CELL_BLOCK_SIZE * CELL_BLOCK_SIZE);
    }

    // Tests negative locations are skipped rather than wrapped
    // Verified by casting the location with `as usize`
    #[test]
    fn test_rasterize_cell_negative_location() {
        let mut sink = TileMap::new(CELL_BLOCK_SIZE, CELL_BLOCK_SIZE);
        rasterize_cell(&Cell::four_way_room(), Point::new(-1, 0), &mut sink);
        assert_eq!(sink.count_material(MaterialType::Void), CELL_BLOCK_SIZE * CELL_BLOCK_SIZE);
    }

    // Tests vacant grid locations stay void while occupied ones get walls
    // Verified by skipping rasterization of the last row
    #[test]
    fn test_rasterize_grid() {
        let mut grid = CellGrid::new(2, 1);
        grid.place(Point::new(0, 0), Cell::new(CellType::Room, Directions::EAST));
        let mut sink = TileMap::new(CELL_BLOCK_SIZE * 2, CELL_BLOCK_SIZE);
        rasterize_grid(&grid, &mut sink);

        assert_eq!(sink.tile(0, 0).map(|tile| tile.material), Some(MaterialType::Wall));
        assert_eq!(
            sink.tile(CELL_BLOCK_SIZE, 0).map(|tile| tile.material),
            Some(MaterialType::Void)
        );
    }
}
