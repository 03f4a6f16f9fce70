//! Plain-text previews of generated dungeons

use std::io::Write;

use crate::io::error::{Result, output_error};
use crate::spatial::{AttributeType, CellGrid, Directions, MaterialType, Tile, TileMap};

/// Box-drawing glyph per opening pattern, indexed by the pattern's bits
const OPENING_GLYPHS: [char; 16] = [
    '·', '╵', '╶', '└', '╷', '│', '┌', '├', '╴', '┘', '─', '┴', '┐', '┤', '┬', '┼',
];

/// Marker glyphs in display priority order
const MARKER_GLYPHS: [(AttributeType, char); 5] = [
    (AttributeType::ENTRY, 'E'),
    (AttributeType::EXIT, 'X'),
    (AttributeType::BOSS_SPAWN, 'B'),
    (AttributeType::LOOT, '$'),
    (AttributeType::MOB_SPAWN, 'M'),
];

/// Character for one tile
pub fn tile_glyph(tile: &Tile) -> char {
    if let Some(&(_, glyph)) = MARKER_GLYPHS
        .iter()
        .find(|(attribute, _)| tile.attributes.contains(*attribute))
    {
        return glyph;
    }
    match tile.material {
        MaterialType::Void => ' ',
        MaterialType::Wall => '#',
        MaterialType::Floor => '.',
    }
}

/// Box-drawing character for an opening pattern
pub fn opening_glyph(openings: Directions) -> char {
    OPENING_GLYPHS
        .get(usize::from(openings.bits()))
        .copied()
        .unwrap_or('?')
}

/// Write the tile map, one text line per tile row
///
/// # Errors
///
/// Returns an output error if writing fails.
pub fn render_tiles<W: Write + ?Sized>(tiles: &TileMap, out: &mut W) -> Result<()> {
    for row in tiles.rows() {
        let line: String = row.map(tile_glyph).collect();
        writeln!(out, "{}", line.trim_end()).map_err(|e| output_error("render tiles", e))?;
    }
    Ok(())
}

/// Write the abstract grid, one character per cell
///
/// Vacant cells print as spaces.
///
/// # Errors
///
/// Returns an output error if writing fails.
pub fn render_cells<W: Write + ?Sized>(cells: &CellGrid, out: &mut W) -> Result<()> {
    let mut line = String::with_capacity(cells.width());
    for (point, cell) in cells.iter() {
        line.push(if cell.is_vacant() {
            ' '
        } else {
            opening_glyph(cell.openings)
        });
        if point.x as usize + 1 == cells.width() {
            writeln!(out, "{line}").map_err(|e| output_error("render cells", e))?;
            line.clear();
        }
    }
    Ok(())
}
