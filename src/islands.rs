//! Island elevation pass: raises patches of tiles and rebadges their biome.
//!
//! Each island clamps the affected heights to zero, adds a coarse noise
//! sample on top and switches the tiles to the configured land biome, so a
//! raised patch reads as one landmass instead of scattered spikes. Placement
//! draws from a caller-supplied RNG, so a fixed ChaCha seed reproduces the
//! same archipelago.

use rand::Rng;

use crate::config::IslandConfig;
use crate::coords::HexCoord;
use crate::error::GridError;
use crate::grid::HexGrid;
use crate::noise_field::NoiseField;

/// Coarse sample scale of the elevation blend field.
pub const ISLAND_NOISE_SCALE: f64 = 4.0;

/// Raise every tile within `radius` of `center`. The center tile must exist;
/// tiles missing inside the radius are skipped. Heights are clamped to a
/// minimum of zero before the blend sample is added, so the pass can never
/// leave a negative height behind. Returns the number of tiles raised.
pub fn elevate_area(
    grid: &mut HexGrid,
    center: HexCoord,
    radius: i32,
    land_biome: usize,
    blend: &NoiseField,
) -> Result<usize, GridError> {
    if grid.tile(center).is_none() {
        return Err(GridError::TileNotFound(center));
    }

    let field = blend.generate(grid.width() as usize, grid.height() as usize);
    let affected = grid.tiles_within_radius(center, radius);

    let mut raised = 0;
    for coord in affected {
        let Some(tile) = grid.tile_mut(coord) else {
            continue;
        };
        let base = tile.height.max(0.0);
        tile.height = base + field.get(coord.col as usize, coord.row as usize);
        tile.biome = land_biome;
        raised += 1;
    }

    Ok(raised)
}

/// Run a randomized batch of elevation passes over the grid. Island count
/// and radii come from the configured bounds; centers keep `radius` clear of
/// the border so the area walk never has to lean on out-of-bounds cells. An
/// island whose drawn radius doesn't fit the grid, or whose center lands on
/// an excluded cell, is skipped and the batch continues. Returns the number
/// of islands actually raised.
pub fn generate_islands<R: Rng>(
    grid: &mut HexGrid,
    config: &IslandConfig,
    blend: &NoiseField,
    rng: &mut R,
) -> usize {
    let count = sample_bounded(rng, config.min_islands as i32, config.max_islands as i32);

    let mut raised = 0;
    for _ in 0..count {
        let radius = sample_bounded(rng, config.min_size, config.max_size);
        let max_col = grid.width() - radius;
        let max_row = grid.height() - radius;
        if radius >= max_col || radius >= max_row {
            continue; // grid too small for an island of this radius
        }

        let col = rng.gen_range(radius..max_col);
        let row = rng.gen_range(radius..max_row);
        let center = HexCoord::new(col, row);

        if elevate_area(grid, center, radius, config.land_biome, blend).is_ok() {
            raised += 1;
        }
    }

    raised
}

/// Draw from [min, max), collapsing to `min` when the range is empty.
fn sample_bounded<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..max)
    }
}
