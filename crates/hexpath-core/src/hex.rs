//! The six movement directions of the hex map.
//!
//! Rows are sheared so that the hex axes line up with the storage axes:
//! east/west move along x, north-east/south-west along y, and the
//! south-east/north-west pair moves along both at once. The two remaining
//! square-grid diagonals, `(1, -1)` and `(-1, 1)`, are not adjacent.

use crate::geom::Point;

/// A step direction on the hex map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl HexDirection {
    /// Number of directions.
    pub const COUNT: usize = 6;

    /// All directions, clockwise starting at north-east.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NorthEast,
        HexDirection::East,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
    ];

    /// The `(dx, dy)` offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            HexDirection::NorthEast => (0, -1),
            HexDirection::East => (1, 0),
            HexDirection::SouthEast => (1, 1),
            HexDirection::SouthWest => (0, 1),
            HexDirection::West => (-1, 0),
            HexDirection::NorthWest => (-1, -1),
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::East => HexDirection::West,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::NorthWest => HexDirection::SouthEast,
        }
    }

    /// Direction whose offset is exactly `(dx, dy)`, if any.
    #[inline]
    pub const fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(HexDirection::NorthEast),
            (1, 0) => Some(HexDirection::East),
            (1, 1) => Some(HexDirection::SouthEast),
            (0, 1) => Some(HexDirection::SouthWest),
            (-1, 0) => Some(HexDirection::West),
            (-1, -1) => Some(HexDirection::NorthWest),
            _ => None,
        }
    }

    /// Direction of the single step `from → to`, if the tiles are adjacent.
    #[inline]
    pub const fn between(from: Point, to: Point) -> Option<Self> {
        Self::from_delta(to.x - from.x, to.y - from.y)
    }
}

/// Number of hex steps between `a` and `b` on an open map.
///
/// When both axis displacements share a sign the diagonal step covers one
/// unit of each, so the longer axis dominates; otherwise every unit costs a
/// step of its own.
#[inline]
pub fn hex_distance(a: Point, b: Point) -> i32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx.signum() * dy.signum() > 0 {
        dx.abs().max(dy.abs())
    } else {
        dx.abs() + dy.abs()
    }
}
