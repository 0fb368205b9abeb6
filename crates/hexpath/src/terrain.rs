//! A self-contained map implementing [`PathMap`].

use hexpath_core::Point;

use crate::coords::FlatGrid;
use crate::error::PathError;
use crate::partition::PartitionMap;
use crate::traits::{PathMap, PathRequester};

/// Terrain with per-tile step costs, static walls, dynamic occupancy and
/// player-owned ground.
///
/// Walls are static obstacles and shape the connectivity partitions, so
/// changing them relabels the map. Occupancy (actors, construction sites)
/// blocks tiles without touching partitions.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    grid: FlatGrid,
    cost: Vec<f32>,
    walls: Vec<bool>,
    occupied: Vec<bool>,
    owner: Vec<Option<u8>>,
    partitions: PartitionMap,
    opened: usize,
    closed: usize,
}

impl TerrainGrid {
    /// Create an open map where every step costs 1.
    pub fn new(width: i32, height: i32) -> Result<Self, PathError> {
        let grid = FlatGrid::new(width, height)?;
        let len = grid.len();
        let mut partitions = PartitionMap::new(grid);
        partitions.relabel(|_| false);
        Ok(Self {
            grid,
            cost: vec![1.0; len],
            walls: vec![false; len],
            occupied: vec![false; len],
            owner: vec![None; len],
            partitions,
            opened: 0,
            closed: 0,
        })
    }

    #[inline]
    pub fn grid(&self) -> FlatGrid {
        self.grid
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Set the cost of stepping onto `p`. Off-map positions are ignored.
    pub fn set_cost(&mut self, p: Point, cost: f32) -> Result<(), PathError> {
        if !cost.is_finite() || cost <= 0.0 {
            return Err(PathError::InvalidCost {
                x: p.x,
                y: p.y,
                cost,
            });
        }
        if let Some(i) = self.grid.index(p) {
            self.cost[i] = cost;
        }
        Ok(())
    }

    /// Place or remove a wall and recompute partitions.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Some(i) = self.grid.index(p) {
            if self.walls[i] != wall {
                self.walls[i] = wall;
                self.refresh_partitions();
            }
        }
    }

    /// Place walls on all `points`, recomputing partitions once.
    pub fn add_walls(&mut self, points: impl IntoIterator<Item = Point>) {
        for p in points {
            if let Some(i) = self.grid.index(p) {
                self.walls[i] = true;
            }
        }
        self.refresh_partitions();
    }

    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.grid.index(p).is_some_and(|i| self.walls[i])
    }

    /// Mark `p` as occupied by an actor or construction site.
    pub fn occupy(&mut self, p: Point) {
        if let Some(i) = self.grid.index(p) {
            self.occupied[i] = true;
        }
    }

    /// Clear the occupancy of `p`.
    pub fn vacate(&mut self, p: Point) {
        if let Some(i) = self.grid.index(p) {
            self.occupied[i] = false;
        }
    }

    #[inline]
    pub fn is_occupied(&self, p: Point) -> bool {
        self.grid.index(p).is_some_and(|i| self.occupied[i])
    }

    /// Assign `p` to a player's territory, or make it neutral.
    pub fn set_owner(&mut self, p: Point, player: Option<u8>) {
        if let Some(i) = self.grid.index(p) {
            self.owner[i] = player;
        }
    }

    /// Whether `p` is blocked for an entity without ground restrictions.
    #[inline]
    pub fn is_obstructed(&self, p: Point) -> bool {
        self.grid
            .index(p)
            .is_none_or(|i| self.walls[i] || self.occupied[i])
    }

    /// The partition labelling derived from the walls.
    #[inline]
    pub fn partitions(&self) -> &PartitionMap {
        &self.partitions
    }

    /// Number of `mark_as_open` notifications since the last reset.
    #[inline]
    pub fn opened(&self) -> usize {
        self.opened
    }

    /// Number of `mark_as_closed` notifications since the last reset.
    #[inline]
    pub fn closed(&self) -> usize {
        self.closed
    }

    pub fn reset_counters(&mut self) {
        self.opened = 0;
        self.closed = 0;
    }

    fn refresh_partitions(&mut self) {
        let walls = &self.walls;
        let grid = self.grid;
        self.partitions
            .relabel(|p| grid.index(p).is_some_and(|i| walls[i]));
    }
}

impl<R: PathRequester + ?Sized> PathMap<R> for TerrainGrid {
    #[inline]
    fn cost(&self, _from: Point, to: Point) -> f32 {
        self.grid.index(to).map_or(f32::INFINITY, |i| self.cost[i])
    }

    fn is_blocked(&self, requester: &R, p: Point) -> bool {
        let Some(i) = self.grid.index(p) else {
            return true;
        };
        if self.walls[i] || self.occupied[i] {
            return true;
        }
        requester.needs_players_ground() && self.owner[i] != Some(requester.player())
    }

    #[inline]
    fn blocked_partition(&self, p: Point) -> u32 {
        self.partitions.partition(p).unwrap_or(u32::MAX)
    }

    fn mark_as_open(&mut self, _p: Point) {
        self.opened += 1;
    }

    fn mark_as_closed(&mut self, _p: Point) {
        self.closed += 1;
    }
}
