//! Error taxonomy for grid generation and mutation.
//!
//! Configuration problems surface before any generation work starts; lookup
//! misses name the coordinate involved. Per-cell outcomes (classification
//! misses, out-of-bounds neighbors) are not errors and never appear here.

use thiserror::Error;

use crate::coords::HexCoord;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: i32, height: i32 },

    #[error("noise scale must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("height multiplier must be a positive finite number, got {0}")]
    InvalidHeightMultiplier(f64),

    #[error("biome list is empty")]
    EmptyBiomes,

    #[error("biome {name:?} breaks the ascending max_height order")]
    NonMonotonicBiomes { name: String },

    #[error("island count bounds {min}..{max} are reversed")]
    BadIslandCount { min: u32, max: u32 },

    #[error("island size bounds {min}..{max} are not positive and ascending")]
    BadIslandSize { min: i32, max: i32 },

    #[error("land biome index {0} is outside the biome table")]
    BadLandBiome(usize),

    #[error("no tile at {0}")]
    TileNotFound(HexCoord),
}
