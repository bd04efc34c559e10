//! Biome records and height-threshold classification.
//!
//! Biomes form an ordered list and a height belongs to the first biome whose
//! `max_height` meets or exceeds it, so list order is load-bearing: an
//! out-of-order list silently classifies into the wrong biome. `BiomeTable`
//! enforces ascending thresholds at construction so that hazard cannot reach
//! generation.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A terrain classification bucket keyed by a maximum height threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    /// Largest height this biome accepts.
    pub max_height: f64,
    /// Nonzero marks tiles of this biome as peaked.
    pub peak_height: f64,
    /// Extra elevation presentation layers apply to peaked tiles.
    pub peak_offset: f64,
}

impl Biome {
    pub fn new(name: &str, max_height: f64) -> Self {
        Self {
            name: name.to_string(),
            max_height,
            peak_height: 0.0,
            peak_offset: 0.0,
        }
    }

    pub fn with_peak(name: &str, max_height: f64, peak_height: f64, peak_offset: f64) -> Self {
        Self {
            name: name.to_string(),
            max_height,
            peak_height,
            peak_offset,
        }
    }

    pub fn has_peak(&self) -> bool {
        self.peak_height != 0.0
    }
}

/// Index of the first biome whose threshold meets or exceeds `height`, or
/// `None` when the height clears every threshold. Scans strictly in list
/// order and never sorts.
pub fn classify(height: f64, biomes: &[Biome]) -> Option<usize> {
    biomes.iter().position(|biome| biome.max_height >= height)
}

/// An ordered biome list validated at construction: non-empty with ascending
/// `max_height`, so first-match classification always picks the tightest
/// threshold.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BiomeTable {
    biomes: Vec<Biome>,
}

impl BiomeTable {
    pub fn new(biomes: Vec<Biome>) -> Result<Self, GridError> {
        if biomes.is_empty() {
            return Err(GridError::EmptyBiomes);
        }
        for pair in biomes.windows(2) {
            if pair[1].max_height < pair[0].max_height {
                return Err(GridError::NonMonotonicBiomes {
                    name: pair[1].name.clone(),
                });
            }
        }
        Ok(Self { biomes })
    }

    /// The default four-step palette: water, grassland, forest, peaked
    /// mountains. Grassland at index 1 doubles as the island land biome.
    pub fn standard() -> Self {
        Self {
            biomes: vec![
                Biome::new("deep water", 0.35),
                Biome::new("grassland", 0.6),
                Biome::new("forest", 0.8),
                Biome::with_peak("mountain", 1.0, 0.5, 0.25),
            ],
        }
    }

    pub fn classify(&self, height: f64) -> Option<usize> {
        classify(height, &self.biomes)
    }

    pub fn get(&self, index: usize) -> Option<&Biome> {
        self.biomes.get(index)
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Biome> {
        self.biomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_follows_list_order() {
        // Deliberately descending: a low threshold hidden behind a catch-all.
        let biomes = vec![Biome::new("land", 1.0), Biome::new("deep water", 0.1)];
        // 0.05 fits both; list order wins, so "land" is picked even though
        // "deep water" has the numerically tighter threshold.
        assert_eq!(classify(0.05, &biomes), Some(0));
    }

    #[test]
    fn test_first_match_with_ascending_order() {
        let biomes = vec![Biome::new("deep water", 0.1), Biome::new("land", 1.0)];
        assert_eq!(classify(0.05, &biomes), Some(0));
        assert_eq!(classify(0.5, &biomes), Some(1));
        assert_eq!(classify(0.1, &biomes), Some(0)); // threshold is inclusive
    }

    #[test]
    fn test_monotonic_under_sorted_thresholds() {
        let table = BiomeTable::standard();
        let mut last_index = 0;
        for step in 0..=20 {
            let height = step as f64 * 0.05;
            if let Some(index) = table.classify(height) {
                assert!(
                    index >= last_index,
                    "height {} classified into earlier biome {}",
                    height,
                    index
                );
                last_index = index;
            }
        }
    }

    #[test]
    fn test_none_when_height_clears_all_thresholds() {
        let table = BiomeTable::standard();
        assert_eq!(table.classify(1.5), None);
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(matches!(
            BiomeTable::new(Vec::new()),
            Err(GridError::EmptyBiomes)
        ));
    }

    #[test]
    fn test_rejects_descending_thresholds() {
        let biomes = vec![Biome::new("land", 1.0), Biome::new("deep water", 0.1)];
        assert!(matches!(
            BiomeTable::new(biomes),
            Err(GridError::NonMonotonicBiomes { .. })
        ));
    }
}
