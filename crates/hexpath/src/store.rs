//! Per-node search state as parallel flat buffers.

use crate::heap::{Heapable, NOT_ENQUEUED};

/// Parent of the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Fixed-size bit set over flat indices.
#[derive(Debug, Clone)]
pub(crate) struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    #[inline]
    pub(crate) fn contains(&self, i: usize) -> bool {
        self.words[i / 64] & (1 << (i % 64)) != 0
    }

    #[inline]
    pub(crate) fn insert(&mut self, i: usize) {
        self.words[i / 64] |= 1 << (i % 64);
    }

    #[inline]
    pub(crate) fn remove(&mut self, i: usize) {
        self.words[i / 64] &= !(1 << (i % 64));
    }

    pub(crate) fn clear(&mut self) {
        self.words.fill(0);
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Search state of every tile, one buffer per field.
///
/// Only `open` and `closed` are trusted across searches; the value buffers
/// are written whenever a node is opened, so stale values of untouched
/// nodes are never read.
#[derive(Debug, Clone)]
pub(crate) struct NodeStore {
    pub(crate) open: BitSet,
    pub(crate) closed: BitSet,
    pub(crate) cost: Vec<f32>,
    pub(crate) heuristic: Vec<f32>,
    pub(crate) depth: Vec<u32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) heap_slot: Vec<usize>,
}

impl NodeStore {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            open: BitSet::new(len),
            closed: BitSet::new(len),
            cost: vec![0.0; len],
            heuristic: vec![0.0; len],
            depth: vec![0; len],
            parent: vec![NO_PARENT; len],
            heap_slot: vec![NOT_ENQUEUED; len],
        }
    }

    /// Forget the membership left over from the previous search.
    pub(crate) fn reset(&mut self) {
        self.open.clear();
        self.closed.clear();
    }

    /// Record a freshly discovered node.
    #[inline]
    pub(crate) fn open_node(
        &mut self,
        id: usize,
        cost: f32,
        heuristic: f32,
        depth: u32,
        parent: usize,
    ) {
        self.cost[id] = cost;
        self.heuristic[id] = heuristic;
        self.depth[id] = depth;
        self.parent[id] = parent;
        self.open.insert(id);
    }

    /// Move `id` from the open set to the closed set.
    #[inline]
    pub(crate) fn close(&mut self, id: usize) {
        self.open.remove(id);
        self.closed.insert(id);
    }
}

impl Heapable for NodeStore {
    #[inline]
    fn rank(&self, id: usize) -> f32 {
        self.cost[id] + self.heuristic[id]
    }

    #[inline]
    fn heap_slot(&self, id: usize) -> usize {
        self.heap_slot[id]
    }

    #[inline]
    fn set_heap_slot(&mut self, id: usize, slot: usize) {
        self.heap_slot[id] = slot;
    }
}
