use hexpath_core::{HexDirection, Point};

/// A found route, consumed step by step by a movement controller.
///
/// The step list excludes the start tile and ends at the target, so
/// [`len`](Self::len) is the number of moves. The steps never change after
/// construction; only the cursor advances.
///
/// Deserializing goes through [`from_steps`](Self::from_steps): the stored
/// directions are recomputed and the cursor must not pass the end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathRepr")
)]
pub struct Path {
    start: Point,
    steps: Vec<Point>,
    directions: Vec<HexDirection>,
    cursor: usize,
}

impl Path {
    /// Build a path from explicit steps.
    ///
    /// Returns `None` if `steps` is empty or some step is not hex-adjacent
    /// to its predecessor.
    pub fn from_steps(start: Point, steps: Vec<Point>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        let mut prev = start;
        for &p in &steps {
            if !prev.is_hex_adjacent(p) {
                return None;
            }
            prev = p;
        }
        Some(Self::compile(start, steps))
    }

    /// Precompute the direction of every step. The steps must form an
    /// adjacent chain starting next to `start`.
    pub(crate) fn compile(start: Point, steps: Vec<Point>) -> Self {
        let mut directions = Vec::with_capacity(steps.len());
        let mut prev = start;
        for &p in &steps {
            if let Some(dir) = HexDirection::between(prev, p) {
                directions.push(dir);
            }
            prev = p;
        }
        debug_assert_eq!(directions.len(), steps.len(), "path steps are not adjacent");
        Self {
            start,
            steps,
            directions,
            cursor: 0,
        }
    }

    /// Tile the path starts from (not part of [`steps`](Self::steps)).
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Final tile.
    #[inline]
    pub fn target(&self) -> Point {
        self.steps.last().copied().unwrap_or(self.start)
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps in walking order, excluding the start.
    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Step `i` (0 is the first move).
    #[inline]
    pub fn step(&self, i: usize) -> Option<Point> {
        self.steps.get(i).copied()
    }

    /// Direction of every move, parallel to [`steps`](Self::steps).
    #[inline]
    pub fn directions(&self) -> &[HexDirection] {
        &self.directions
    }

    /// Index of the next step to walk.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every step has been walked.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// The tile the next move goes to.
    #[inline]
    pub fn next_pos(&self) -> Option<Point> {
        self.step(self.cursor)
    }

    /// Direction of the next move.
    #[inline]
    pub fn next_direction(&self) -> Option<HexDirection> {
        self.directions.get(self.cursor).copied()
    }

    /// Advance the cursor, returning the tile just moved to.
    pub fn go_to_next_step(&mut self) -> Option<Point> {
        let p = self.next_pos()?;
        self.cursor += 1;
        Some(p)
    }

    /// Steps not yet walked.
    #[inline]
    pub fn remaining(&self) -> &[Point] {
        &self.steps[self.cursor.min(self.steps.len())..]
    }

    /// Index of the first not-yet-walked step for which `blocked` holds.
    ///
    /// Movement controllers use this to notice that new blocking has
    /// invalidated the rest of the route.
    pub fn first_blocked_step(&self, mut blocked: impl FnMut(Point) -> bool) -> Option<usize> {
        self.remaining()
            .iter()
            .position(|&p| blocked(p))
            .map(|i| i + self.cursor)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRepr {
    start: Point,
    steps: Vec<Point>,
    #[serde(default)]
    cursor: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = String;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        let mut path = Path::from_steps(repr.start, repr.steps)
            .ok_or("path steps must form a non-empty chain of hex steps")?;
        if repr.cursor > path.len() {
            return Err(format!("cursor {} is past the last step", repr.cursor));
        }
        path.cursor = repr.cursor;
        Ok(path)
    }
}
