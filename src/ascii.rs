//! ASCII rendering of generated grids.
//!
//! One glyph per tile, with even rows nudged right to suggest the hex
//! offset. Excluded cells render as blanks. Used by the CLI; nothing in the
//! core depends on this.

use std::collections::HashSet;

use crate::coords::HexCoord;
use crate::grid::HexGrid;

/// Glyph palette indexed by biome position; tables longer than the palette
/// reuse the final glyph.
const BIOME_GLYPHS: [char; 8] = ['~', '"', 'T', '^', '#', '%', '&', '@'];

/// Glyph for cells excluded during classification.
const EMPTY_GLYPH: char = ' ';

pub fn biome_glyph(index: usize) -> char {
    BIOME_GLYPHS[index.min(BIOME_GLYPHS.len() - 1)]
}

/// Render the whole grid, one row per line.
pub fn render_map(grid: &HexGrid) -> String {
    render_with_path(grid, &[])
}

/// Render the grid with a path overlaid: `S` and `G` on the endpoints, `*`
/// on the steps between them.
pub fn render_with_path(grid: &HexGrid, path: &[HexCoord]) -> String {
    let on_path: HashSet<HexCoord> = path.iter().copied().collect();
    let endpoints = if path.len() > 1 {
        (path.first().copied(), path.last().copied())
    } else {
        (None, None)
    };

    let mut out = String::with_capacity((grid.width() as usize * 2 + 2) * grid.height() as usize);
    for row in 0..grid.height() {
        if row % 2 == 0 {
            out.push(' '); // even rows sit half a hex to the right
        }
        for col in 0..grid.width() {
            let coord = HexCoord::new(col, row);
            let glyph = if endpoints.0 == Some(coord) {
                'S'
            } else if endpoints.1 == Some(coord) {
                'G'
            } else if on_path.contains(&coord) {
                '*'
            } else {
                match grid.tile(coord) {
                    Some(tile) => biome_glyph(tile.biome),
                    None => EMPTY_GLYPH,
                }
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
