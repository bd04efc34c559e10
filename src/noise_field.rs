//! Seeded coherent-noise sampling for terrain heights.
//!
//! The seed string is hashed and the hash seeds a ChaCha stream that draws a
//! large pseudo-random sample offset, so different seeds read different
//! regions of the Perlin field. Sampling itself is pure: the same
//! (width, height, scale, seed) always produces a bit-identical field.

use noise::{NoiseFn, Perlin, Seedable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::GridError;
use crate::seeds;

/// Half-width of the integer range the sample offsets are drawn from.
const OFFSET_RANGE: i32 = 100_000;

/// Height samples over a rectangular area, all in [0, 1].
pub struct HeightField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl HeightField {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }
}

/// A seeded noise sampler. Construction validates the scale; sampling never
/// fails.
pub struct NoiseField {
    perlin: Perlin,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl NoiseField {
    pub fn new(scale: f64, seed: &str) -> Result<Self, GridError> {
        if !(scale > 0.0) || !scale.is_finite() {
            return Err(GridError::InvalidScale(scale));
        }

        let hashed = seeds::hash_seed(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(hashed);
        let offset_x = rng.gen_range(-OFFSET_RANGE..=OFFSET_RANGE) as f64;
        let offset_y = rng.gen_range(-OFFSET_RANGE..=OFFSET_RANGE) as f64;

        Ok(Self {
            perlin: Perlin::new(1).set_seed(hashed as u32),
            scale,
            offset_x,
            offset_y,
        })
    }

    /// Sample one cell. Perlin output is in [-1, 1]; remap to the [0, 1]
    /// range the biome thresholds are written against.
    pub fn sample(&self, x: i32, y: i32) -> f64 {
        let sx = x as f64 / self.scale + self.offset_x;
        let sy = y as f64 / self.scale + self.offset_y;
        ((self.perlin.get([sx, sy]) + 1.0) / 2.0).clamp(0.0, 1.0)
    }

    /// Fill a width x height field. Rows are sampled in parallel; cells are
    /// independent, so the result stays deterministic.
    pub fn generate(&self, width: usize, height: usize) -> HeightField {
        let rows: Vec<Vec<f64>> = (0..height)
            .into_par_iter()
            .map(|y| {
                (0..width)
                    .map(|x| self.sample(x as i32, y as i32))
                    .collect()
            })
            .collect();

        HeightField {
            width,
            height,
            data: rows.into_iter().flatten().collect(),
        }
    }
}
