//! World-space hex centers for presentation consumers.
//!
//! The grid itself is purely logical; renderers that turn tiles into
//! geometry need each hex's center position. Pointy-top layouts space rows
//! three quarters of a hex apart and shift alternate rows half a width;
//! flat-top layouts swap the roles of the axes.

use serde::{Deserialize, Serialize};

use crate::coords::HexCoord;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HexLayout {
    /// Circumradius of one hex.
    pub outer_size: f32,
    /// Flat-top orientation instead of the default pointy-top.
    pub flat_top: bool,
}

impl HexLayout {
    pub fn new(outer_size: f32) -> Self {
        Self {
            outer_size,
            flat_top: false,
        }
    }

    /// Center of the hex at `coord`, in the plane of the grid.
    pub fn position_of(&self, coord: HexCoord) -> (f32, f32) {
        let size = self.outer_size;

        if !self.flat_top {
            let width = 3.0_f32.sqrt() * size;
            let height = 2.0 * size;
            let horizontal = width;
            let vertical = height * 0.75;
            let offset = if coord.row % 2 == 0 { width / 2.0 } else { 0.0 };

            (coord.col as f32 * horizontal + offset, coord.row as f32 * vertical)
        } else {
            let width = 2.0 * size;
            let height = 3.0_f32.sqrt() * size;
            let horizontal = width * 0.75;
            let vertical = height;
            let offset = if coord.col % 2 == 0 { height / 2.0 } else { 0.0 };

            (coord.col as f32 * horizontal, coord.row as f32 * vertical - offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pointy_top_offsets_even_rows() {
        let layout = HexLayout::new(1.0);
        let width = 3.0_f32.sqrt();

        let (x0, y0) = layout.position_of(HexCoord::new(0, 0));
        assert_relative_eq!(x0, width / 2.0);
        assert_relative_eq!(y0, 0.0);

        let (x1, y1) = layout.position_of(HexCoord::new(0, 1));
        assert_relative_eq!(x1, 0.0);
        assert_relative_eq!(y1, 1.5);
    }

    #[test]
    fn test_flat_top_offsets_even_columns() {
        let layout = HexLayout {
            outer_size: 1.0,
            flat_top: true,
        };
        let height = 3.0_f32.sqrt();

        let (x0, y0) = layout.position_of(HexCoord::new(0, 0));
        assert_relative_eq!(x0, 0.0);
        assert_relative_eq!(y0, -height / 2.0);

        let (x1, y1) = layout.position_of(HexCoord::new(1, 0));
        assert_relative_eq!(x1, 1.5);
        assert_relative_eq!(y1, 0.0);
    }

    #[test]
    fn test_rows_spread_with_size() {
        let small = HexLayout::new(1.0);
        let large = HexLayout::new(2.0);
        let coord = HexCoord::new(3, 4);

        let (sx, sy) = small.position_of(coord);
        let (lx, ly) = large.position_of(coord);
        assert_relative_eq!(lx, sx * 2.0);
        assert_relative_eq!(ly, sy * 2.0);
    }
}
