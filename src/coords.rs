//! Hex coordinate math for the "odd-r" offset layout.
//!
//! Tiles are addressed by (column, row) with odd rows shifted half a hex.
//! Cube coordinates back the distance metric; neighbor lookup is a pure
//! table indexed by column parity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset coordinate of a hex tile (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub col: i32,
    pub row: i32,
}

/// Cube-space form of a hex coordinate. Invariant: x + y + z == 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Neighbor offsets (dcol, drow) for even columns, in fixed order:
/// top, top-right, bottom-right, bottom, bottom-left, top-left.
const EVEN_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (-1, -1),
];

/// Neighbor offsets for odd columns, same direction order.
const ODD_COL_OFFSETS: [(i32, i32); 6] = [
    (0, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

impl HexCoord {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert to cube coordinates using the odd-r offset formula.
    /// The division truncates toward zero, matching `(row - (row & 1)) / 2`
    /// on negative rows as well.
    pub fn to_cube(self) -> CubeCoord {
        let x = self.col - (self.row - (self.row & 1)) / 2;
        let z = self.row;
        CubeCoord { x, y: -x - z, z }
    }

    /// Hex distance between two coordinates: half the L1 distance in cube
    /// space. Symmetric, and zero exactly on identical coordinates.
    pub fn distance(self, other: HexCoord) -> i32 {
        let a = self.to_cube();
        let b = other.to_cube();
        ((a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()) / 2
    }

    /// The six surrounding coordinates, ordered top, top-right, bottom-right,
    /// bottom, bottom-left, top-left. The offset table is chosen by the
    /// parity of this coordinate's column. `step` scales the offsets for
    /// ring-style queries by area effects.
    pub fn neighbors(self, step: i32) -> [HexCoord; 6] {
        let table = if self.col & 1 == 0 {
            &EVEN_COL_OFFSETS
        } else {
            &ODD_COL_OFFSETS
        };

        let mut out = [self; 6];
        for (slot, &(dcol, drow)) in out.iter_mut().zip(table.iter()) {
            *slot = HexCoord::new(self.col + dcol * step, self.row + drow * step);
        }
        out
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
