//! Generation configuration and up-front validation.

use serde::{Deserialize, Serialize};

use crate::biomes::BiomeTable;
use crate::error::GridError;

/// Everything one generation pass needs. `validate` runs before any work so
/// a bad configuration never produces a half-built grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in tiles.
    pub width: i32,
    /// Grid height in tiles.
    pub height: i32,
    /// Noise sample scale; larger values stretch terrain features.
    pub scale: f64,
    /// Arbitrary seed string, hashed for determinism.
    pub seed: String,
    /// Multiplier applied to raw [0, 1] noise samples.
    pub height_multiplier: f64,
    pub biomes: BiomeTable,
    /// Island elevation pass bounds; `None` skips the pass.
    pub islands: Option<IslandConfig>,
}

impl GridConfig {
    pub fn new(width: i32, height: i32, scale: f64, seed: &str, biomes: BiomeTable) -> Self {
        Self {
            width,
            height,
            scale,
            seed: seed.to_string(),
            height_multiplier: 1.0,
            biomes,
            islands: None,
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GridError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.scale > 0.0) || !self.scale.is_finite() {
            return Err(GridError::InvalidScale(self.scale));
        }
        if !(self.height_multiplier > 0.0) || !self.height_multiplier.is_finite() {
            return Err(GridError::InvalidHeightMultiplier(self.height_multiplier));
        }
        if let Some(islands) = &self.islands {
            islands.validate(self.biomes.len())?;
        }
        Ok(())
    }
}

/// Bounds for the randomized island elevation pass.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct IslandConfig {
    pub min_islands: u32,
    pub max_islands: u32,
    /// Smallest island radius, in hex steps.
    pub min_size: i32,
    pub max_size: i32,
    /// Biome index elevated tiles switch to. Index 1 by convention.
    pub land_biome: usize,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            min_islands: 3,
            max_islands: 6,
            min_size: 2,
            max_size: 4,
            land_biome: 1,
        }
    }
}

impl IslandConfig {
    pub fn validate(&self, biome_count: usize) -> Result<(), GridError> {
        if self.min_islands > self.max_islands {
            return Err(GridError::BadIslandCount {
                min: self.min_islands,
                max: self.max_islands,
            });
        }
        if self.min_size <= 0 || self.min_size > self.max_size {
            return Err(GridError::BadIslandSize {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.land_biome >= biome_count {
            return Err(GridError::BadLandBiome(self.land_biome));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> GridConfig {
        GridConfig::new(8, 8, 4.0, "test", BiomeTable::standard())
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut config = base_config();
        config.width = 0;
        assert!(matches!(
            config.validate(),
            Err(GridError::ZeroDimension { .. })
        ));

        let mut config = base_config();
        config.height = -3;
        assert!(matches!(
            config.validate(),
            Err(GridError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_scale() {
        let mut config = base_config();
        config.scale = 0.0;
        assert!(matches!(config.validate(), Err(GridError::InvalidScale(_))));
    }

    #[test]
    fn test_rejects_bad_multiplier() {
        let mut config = base_config();
        config.height_multiplier = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidHeightMultiplier(_))
        ));
    }

    #[test]
    fn test_rejects_reversed_island_counts() {
        let mut config = base_config();
        config.islands = Some(IslandConfig {
            min_islands: 5,
            max_islands: 2,
            ..IslandConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(GridError::BadIslandCount { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_island_sizes() {
        let mut config = base_config();
        config.islands = Some(IslandConfig {
            min_size: 0,
            ..IslandConfig::default()
        });
        assert!(matches!(
            config.validate(),
            Err(GridError::BadIslandSize { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_land_biome() {
        let mut config = base_config();
        config.islands = Some(IslandConfig {
            land_biome: 9,
            ..IslandConfig::default()
        });
        assert!(matches!(config.validate(), Err(GridError::BadLandBiome(9))));
    }
}
