//! The generated tile grid: coordinate-keyed tiles with height and biome.
//!
//! Tiles live in an explicit map keyed by `HexCoord`, so lookups are O(1)
//! and never depend on floating-point position comparisons. A grid that
//! exists is always fully built: `generate` is the only constructor, and
//! regenerating means building a new grid and dropping the old one.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::biomes::{Biome, BiomeTable};
use crate::config::GridConfig;
use crate::coords::HexCoord;
use crate::error::GridError;
use crate::noise_field::NoiseField;

/// One generated tile. Owned by the grid; height and biome may be rewritten
/// later by the island elevation pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub coord: HexCoord,
    pub height: f64,
    /// Index into the grid's biome table.
    pub biome: usize,
    pub has_peak: bool,
    /// Presentation elevation offset; zero unless `has_peak` is set.
    pub peak_offset: f64,
}

pub struct HexGrid {
    width: i32,
    height: i32,
    biomes: BiomeTable,
    tiles: HashMap<HexCoord, Tile>,
}

impl HexGrid {
    /// Build a grid from validated configuration. Each cell samples the
    /// noise field, scales by the height multiplier and classifies against
    /// the biome table; cells whose height clears every threshold get no
    /// tile at all.
    pub fn generate(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;

        let noise = NoiseField::new(config.scale, &config.seed)?;
        let field = noise.generate(config.width as usize, config.height as usize);

        let mut tiles = HashMap::with_capacity((config.width * config.height) as usize);
        for row in 0..config.height {
            for col in 0..config.width {
                let height = field.get(col as usize, row as usize) * config.height_multiplier;
                let Some(biome_index) = config.biomes.classify(height) else {
                    continue; // no biome accepts this height: cell stays empty
                };

                let (has_peak, peak_offset) = match config.biomes.get(biome_index) {
                    Some(biome) if biome.has_peak() => (true, biome.peak_offset),
                    _ => (false, 0.0),
                };

                let coord = HexCoord::new(col, row);
                tiles.insert(
                    coord,
                    Tile {
                        coord,
                        height,
                        biome: biome_index,
                        has_peak,
                        peak_offset,
                    },
                );
            }
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            biomes: config.biomes.clone(),
            tiles,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of tiles actually placed; excluded cells don't count.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn biomes(&self) -> &BiomeTable {
        &self.biomes
    }

    /// The biome record behind a tile's index.
    pub fn biome_of(&self, tile: &Tile) -> Option<&Biome> {
        self.biomes.get(tile.biome)
    }

    pub fn in_bounds(&self, coord: HexCoord) -> bool {
        coord.col >= 0 && coord.col < self.width && coord.row >= 0 && coord.row < self.height
    }

    /// Tile lookup by coordinate. Out-of-bounds and excluded cells both
    /// report absence; nothing is fabricated.
    pub fn tile(&self, coord: HexCoord) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub(crate) fn tile_mut(&mut self, coord: HexCoord) -> Option<&mut Tile> {
        self.tiles.get_mut(&coord)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Rewrite an existing tile's height. Absent coordinates are an error,
    /// not a silent insert.
    pub fn set_height(&mut self, coord: HexCoord, new_height: f64) -> Result<(), GridError> {
        match self.tiles.get_mut(&coord) {
            Some(tile) => {
                tile.height = new_height;
                Ok(())
            }
            None => Err(GridError::TileNotFound(coord)),
        }
    }

    /// Breadth-first collection of the tiles around `center`. Nodes closer
    /// than `radius` keep expanding; the boundary ring is collected but not
    /// expanded. Coordinates without a tile are skipped in the result, and a
    /// visited set keeps the walk from revisiting cells.
    pub fn tiles_within_radius(&self, center: HexCoord, radius: i32) -> Vec<HexCoord> {
        let mut visited: HashSet<HexCoord> = HashSet::new();
        let mut queue: VecDeque<HexCoord> = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(center);
        queue.push_back(center);

        while let Some(current) = queue.pop_front() {
            if self.tiles.contains_key(&current) {
                result.push(current);
            }
            if center.distance(current) < radius {
                for next in current.neighbors(1) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::Biome;

    fn all_land_config(width: i32, height: i32) -> GridConfig {
        let biomes = BiomeTable::new(vec![Biome::new("land", 1.0)]).unwrap();
        GridConfig::new(width, height, 4.0, "grid-tests", biomes)
    }

    fn nothing_classifies_config(width: i32, height: i32) -> GridConfig {
        // Threshold below any possible sample, so every cell is excluded.
        let biomes = BiomeTable::new(vec![Biome::new("void", -1.0)]).unwrap();
        GridConfig::new(width, height, 4.0, "grid-tests", biomes)
    }

    #[test]
    fn test_single_land_biome_fills_every_cell() {
        let grid = HexGrid::generate(&all_land_config(5, 5)).unwrap();
        assert_eq!(grid.tile_count(), 25);
        for row in 0..5 {
            for col in 0..5 {
                assert!(grid.tile(HexCoord::new(col, row)).is_some());
            }
        }
    }

    #[test]
    fn test_classification_miss_excludes_cells() {
        let grid = HexGrid::generate(&nothing_classifies_config(4, 4)).unwrap();
        assert_eq!(grid.tile_count(), 0);
        assert!(grid.tile(HexCoord::new(1, 1)).is_none());
    }

    #[test]
    fn test_lookup_outside_bounds_is_absent() {
        let grid = HexGrid::generate(&all_land_config(3, 3)).unwrap();
        assert!(grid.tile(HexCoord::new(-1, 0)).is_none());
        assert!(grid.tile(HexCoord::new(0, 3)).is_none());
        assert!(grid.tile(HexCoord::new(17, 17)).is_none());
    }

    #[test]
    fn test_peaked_biome_marks_tiles() {
        let biomes = BiomeTable::new(vec![Biome::with_peak("spires", 1.0, 0.5, 0.25)]).unwrap();
        let config = GridConfig::new(3, 3, 4.0, "peaks", biomes);
        let grid = HexGrid::generate(&config).unwrap();

        for tile in grid.tiles() {
            assert!(tile.has_peak);
            assert_eq!(tile.peak_offset, 0.25);
        }
    }

    #[test]
    fn test_set_height_rewrites_existing_tile() {
        let mut grid = HexGrid::generate(&all_land_config(3, 3)).unwrap();
        let coord = HexCoord::new(1, 1);
        grid.set_height(coord, 5.0).unwrap();
        assert_eq!(grid.tile(coord).unwrap().height, 5.0);
    }

    #[test]
    fn test_set_height_on_missing_tile_errors() {
        let mut grid = HexGrid::generate(&all_land_config(3, 3)).unwrap();
        let miss = HexCoord::new(9, 9);
        assert!(matches!(
            grid.set_height(miss, 1.0),
            Err(GridError::TileNotFound(coord)) if coord == miss
        ));
    }

    #[test]
    fn test_radius_zero_is_center_only() {
        let grid = HexGrid::generate(&all_land_config(5, 5)).unwrap();
        let center = HexCoord::new(2, 2);
        assert_eq!(grid.tiles_within_radius(center, 0), vec![center]);
    }

    #[test]
    fn test_radius_one_collects_center_and_ring() {
        let grid = HexGrid::generate(&all_land_config(5, 5)).unwrap();
        let center = HexCoord::new(2, 2);
        let collected = grid.tiles_within_radius(center, 1);

        assert_eq!(collected.len(), 7);
        assert!(collected.contains(&center));
        for neighbor in center.neighbors(1) {
            assert!(collected.contains(&neighbor));
        }
    }

    #[test]
    fn test_radius_query_skips_missing_tiles() {
        let grid = HexGrid::generate(&nothing_classifies_config(5, 5)).unwrap();
        assert!(grid.tiles_within_radius(HexCoord::new(2, 2), 2).is_empty());
    }

    #[test]
    fn test_radius_query_near_border_stays_graceful() {
        let grid = HexGrid::generate(&all_land_config(3, 3)).unwrap();
        let collected = grid.tiles_within_radius(HexCoord::new(0, 0), 2);
        // Off-grid coordinates are walked over but never reported.
        assert!(collected.iter().all(|coord| grid.in_bounds(*coord)));
        assert!(collected.contains(&HexCoord::new(0, 0)));
    }
}
