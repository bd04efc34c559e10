//! Hex-tile terrain generation and pathfinding.
//!
//! Builds noise-heighted "odd-r" hex grids, classifies tiles into biomes,
//! optionally raises island patches, and runs A*-style searches over the
//! result. Rendering is a consumer concern: the crate hands out tile data
//! (coordinate, position, height, biome) and paths, nothing more.

pub mod ascii;
pub mod biomes;
pub mod config;
pub mod coords;
pub mod error;
pub mod grid;
pub mod islands;
pub mod layout;
pub mod noise_field;
pub mod pathfinding;
pub mod seeds;
