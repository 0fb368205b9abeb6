//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;

use crate::hex::HexDirection;

/// A tile position. X grows east, Y grows south.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The adjacent tile in direction `dir`.
    #[inline]
    pub const fn neighbor(self, dir: HexDirection) -> Self {
        let (dx, dy) = dir.delta();
        self.shift(dx, dy)
    }

    /// The six hex neighbours, in [`HexDirection::ALL`] order.
    #[inline]
    pub fn hex_neighbors(self) -> [Point; 6] {
        HexDirection::ALL.map(|d| self.neighbor(d))
    }

    /// Whether `other` is exactly one hex step away.
    #[inline]
    pub fn is_hex_adjacent(self, other: Point) -> bool {
        HexDirection::between(self, other).is_some()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The tiles of a `width × height` map anchored at the origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    width: i32,
    height: i32,
}

impl Range {
    /// The `[0, width) × [0, height)` rectangle. Negative sizes are empty.
    #[inline]
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Number of tiles.
    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Row-major iterator over every tile, matching flat index order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            width: self.width,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    width: i32,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let w = self.width as usize;
        let p = Point::new((self.next % w) as i32, (self.next / w) as i32);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
