//! Indexable binary min-heap.
//!
//! The heap stores bare node ids. Ranks and each id's current heap slot are
//! kept by the caller (see [`Heapable`]), so a node whose rank improved can
//! be located and sifted up without scanning the heap.

/// Slot value of a node that is not in the heap.
pub const NOT_ENQUEUED: usize = usize::MAX;

/// External per-node storage the heap orders by.
pub trait Heapable {
    /// Current rank of `id`; smaller ranks are extracted first.
    fn rank(&self, id: usize) -> f32;

    /// Heap slot last recorded for `id`.
    fn heap_slot(&self, id: usize) -> usize;

    /// Record that `id` now sits in heap slot `slot`.
    fn set_heap_slot(&mut self, id: usize, slot: usize);
}

/// Array-backed min-heap over node ids.
///
/// The backing vector is reused across [`clear`](Self::clear) calls, so
/// once it has grown to the largest open list seen it never allocates again.
#[derive(Debug, Default, Clone)]
pub struct MinHeap {
    heap: Vec<usize>,
}

impl MinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap that can hold `capacity` ids without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all entries, keeping the allocation.
    ///
    /// Slots recorded in the node store are left stale; callers reset their
    /// own membership bookkeeping alongside.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Add `id`, which must not already be in the heap.
    pub fn insert<H: Heapable>(&mut self, nodes: &mut H, id: usize) {
        let slot = self.heap.len();
        self.heap.push(id);
        nodes.set_heap_slot(id, slot);
        self.sift_up(nodes, slot);
    }

    /// Remove and return the id with the smallest rank.
    pub fn extract_min<H: Heapable>(&mut self, nodes: &mut H) -> Option<usize> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            nodes.set_heap_slot(last, NOT_ENQUEUED);
            return Some(last);
        }
        let min = self.heap[0];
        self.heap[0] = last;
        nodes.set_heap_slot(last, 0);
        nodes.set_heap_slot(min, NOT_ENQUEUED);
        self.sift_down(nodes, 0);
        Some(min)
    }

    /// Restore heap order after the rank of `id` dropped from `old_rank`.
    pub fn decrease_key<H: Heapable>(&mut self, nodes: &mut H, id: usize, old_rank: f32) {
        debug_assert!(nodes.rank(id) <= old_rank, "rank of {id} increased");
        let slot = nodes.heap_slot(id);
        debug_assert_eq!(self.heap.get(slot), Some(&id), "stale heap slot for {id}");
        self.sift_up(nodes, slot);
    }

    fn sift_up<H: Heapable>(&mut self, nodes: &mut H, mut slot: usize) {
        let id = self.heap[slot];
        let rank = nodes.rank(id);
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let parent_id = self.heap[parent];
            if nodes.rank(parent_id) <= rank {
                break;
            }
            self.heap[slot] = parent_id;
            nodes.set_heap_slot(parent_id, slot);
            slot = parent;
        }
        self.heap[slot] = id;
        nodes.set_heap_slot(id, slot);
    }

    fn sift_down<H: Heapable>(&mut self, nodes: &mut H, mut slot: usize) {
        let len = self.heap.len();
        let id = self.heap[slot];
        let rank = nodes.rank(id);
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let right_smaller =
                right < len && nodes.rank(self.heap[right]) < nodes.rank(self.heap[left]);
            let child = if right_smaller { right } else { left };
            let child_id = self.heap[child];
            if rank <= nodes.rank(child_id) {
                break;
            }
            self.heap[slot] = child_id;
            nodes.set_heap_slot(child_id, slot);
            slot = child;
        }
        self.heap[slot] = id;
        nodes.set_heap_slot(id, slot);
    }
}
