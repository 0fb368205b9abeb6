use hexpath_core::{Point, Range};

use crate::error::PathError;

/// Fixed `width × height` map extent and its flat index space.
///
/// Tile `(x, y)` lives at index `y * width + x`. Every per-tile buffer in
/// this crate is sized [`len`](Self::len) and addressed this way.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlatGrid {
    width: i32,
    height: i32,
}

impl FlatGrid {
    /// Create the index space for a `width × height` map.
    ///
    /// Fails for negative sizes and for sizes whose tile count does not fit
    /// an index below the `usize::MAX` sentinel.
    pub fn new(width: i32, height: i32) -> Result<Self, PathError> {
        let fits = width >= 0
            && height >= 0
            && (width as usize)
                .checked_mul(height as usize)
                .is_some_and(|n| n < usize::MAX);
        if !fits {
            return Err(PathError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The map rectangle.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Whether `p` lies on the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        0 <= p.x && p.x < self.width && 0 <= p.y && p.y < self.height
    }

    /// Flat index of `p`, or `None` if it is off the map.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Position of flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}
