//! Min-priority frontier with lazy deletion.
//!
//! A node may be pushed several times with different priorities; the
//! search engine discards entries for nodes it has already finalized.
//! Equal priorities pop in insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::types::Cost;

/// A single frontier entry, ordered by `(priority, seq)`
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub priority: Cost,
    pub seq: u64,
    pub node: N,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority frontier backed by a binary min-heap
#[derive(Debug)]
pub struct Frontier<N> {
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    next_seq: u64,
}

impl<N> Default for Frontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Frontier<N> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert `node` with `priority`. Duplicates are allowed.
    pub fn push(&mut self, priority: Cost, node: N) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry {
            priority,
            seq,
            node,
        }));
    }

    /// Remove and return the minimum-priority entry
    pub fn pop(&mut self) -> Option<HeapEntry<N>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
