//! Connectivity partitions for the reachability pre-check.

use hexpath_core::{HexDirection, Point};

use crate::coords::FlatGrid;

const UNLABELLED: u32 = u32::MAX;

/// Labels every tile with a partition id such that two tiles with different
/// ids can never reach each other over open ground.
///
/// Open tiles are labelled by flood fill over the six hex neighbours. A
/// blocked tile takes the label of its first open neighbour, or a label of
/// its own when it has none. A wall between two regions therefore carries
/// only one of their labels; [`HexAStar`](crate::HexAStar) looks past the
/// start tile's label when the search starts on blocked ground.
#[derive(Debug, Clone)]
pub struct PartitionMap {
    grid: FlatGrid,
    labels: Vec<u32>,
    stack: Vec<usize>,
    count: u32,
}

impl PartitionMap {
    /// Create a map for `grid` with every tile in partition 0.
    pub fn new(grid: FlatGrid) -> Self {
        Self {
            grid,
            labels: vec![0; grid.len()],
            stack: Vec::new(),
            count: u32::from(!grid.is_empty()),
        }
    }

    /// Recompute all labels. `blocked` reports the static obstacles.
    pub fn relabel(&mut self, blocked: impl Fn(Point) -> bool) {
        self.labels.fill(UNLABELLED);
        let mut label: u32 = 0;

        for start in 0..self.grid.len() {
            if self.labels[start] != UNLABELLED || blocked(self.grid.point(start)) {
                continue;
            }

            // Iterative DFS over open tiles.
            self.stack.clear();
            self.stack.push(start);
            self.labels[start] = label;

            while let Some(ci) = self.stack.pop() {
                let cp = self.grid.point(ci);
                for dir in HexDirection::ALL {
                    let np = cp.neighbor(dir);
                    let Some(ni) = self.grid.index(np) else {
                        continue;
                    };
                    if self.labels[ni] == UNLABELLED && !blocked(np) {
                        self.labels[ni] = label;
                        self.stack.push(ni);
                    }
                }
            }

            label += 1;
        }

        // Blocked tiles join a neighbouring open partition.
        for i in 0..self.grid.len() {
            if self.labels[i] != UNLABELLED {
                continue;
            }
            let p = self.grid.point(i);
            let adopted = p
                .hex_neighbors()
                .into_iter()
                .filter(|&np| !blocked(np))
                .filter_map(|np| self.grid.index(np))
                .map(|ni| self.labels[ni])
                .find(|&l| l != UNLABELLED);
            self.labels[i] = match adopted {
                Some(l) => l,
                None => {
                    label += 1;
                    label - 1
                }
            };
        }

        self.count = label;
        log::debug!("relabelled {} tiles into {} partitions", self.grid.len(), label);
    }

    /// Partition of `p`, or `None` off the map.
    #[inline]
    pub fn partition(&self, p: Point) -> Option<u32> {
        self.grid.index(p).map(|i| self.labels[i])
    }

    /// Number of distinct partitions after the last [`relabel`](Self::relabel).
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether `a` and `b` are in the same partition.
    pub fn connected(&self, a: Point, b: Point) -> bool {
        match (self.partition(a), self.partition(b)) {
            (Some(pa), Some(pb)) => pa == pb,
            _ => false,
        }
    }
}
