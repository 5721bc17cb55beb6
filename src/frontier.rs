//! Frontier structures shared by the solvers: a FIFO queue for breadth-first search and a binary
//! heap for the best-first searches.
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Heap entry. Ordered so that the smallest estimated cost pops first and, among equal
/// estimates, the entry pushed first.
#[derive(Debug)]
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority frontier keyed by `(estimated cost, insertion sequence)`. A cell may be pushed
/// several times when a cheaper route to it is found; the older entries stay in the heap and are
/// returned as well, so callers compare the popped cost against their best-known cost.
#[derive(Debug)]
pub struct PriorityFrontier<K> {
    heap: BinaryHeap<SmallestCostHolder<K>>,
    next_sequence: usize,
}

impl<K: Ord + Copy> PriorityFrontier<K> {
    fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
    /// Schedules `index` with a fresh sequence number.
    pub fn push(&mut self, index: usize, cost: K, estimated_cost: K) {
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.next_sequence,
            index,
        });
        self.next_sequence += 1;
    }
    /// Pops the next `(index, cost)` pair.
    pub fn pop(&mut self) -> Option<(usize, K)> {
        self.heap.pop().map(|h| (h.index, h.cost))
    }
}

impl<K: Ord + Copy + Zero> PriorityFrontier<K> {
    /// A frontier holding only the start cell at cost zero.
    pub fn seeded(start: usize, estimated_cost: K) -> Self {
        let mut frontier = PriorityFrontier::new();
        frontier.push(start, Zero::zero(), estimated_cost);
        frontier
    }
}

/// First-in first-out frontier used by breadth-first search.
#[derive(Debug)]
pub struct FifoFrontier {
    queue: VecDeque<usize>,
}

impl FifoFrontier {
    pub fn seeded(start: usize) -> Self {
        FifoFrontier {
            queue: VecDeque::from([start]),
        }
    }
    pub fn push(&mut self, index: usize) {
        self.queue.push_back(index);
    }
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_estimate_pops_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(1, 5u32, 9);
        frontier.push(2, 1, 3);
        frontier.push(3, 2, 7);
        let order = std::iter::from_fn(|| frontier.pop()).collect::<Vec<_>>();
        assert_eq!(order, vec![(2, 1), (3, 2), (1, 5)]);
    }

    /// Equal estimates leave the heap in the order they were scheduled, regardless of cost.
    #[test]
    fn ties_break_on_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for (index, cost) in [(7, 4u32), (3, 1), (9, 0), (1, 2)] {
            frontier.push(index, cost, 4);
        }
        let order = std::iter::from_fn(|| frontier.pop())
            .map(|(ix, _)| ix)
            .collect::<Vec<_>>();
        assert_eq!(order, vec![7, 3, 9, 1]);
    }

    #[test]
    fn stale_entries_are_kept() {
        let mut frontier = PriorityFrontier::seeded(0, 6u32);
        frontier.push(4, 5, 8);
        frontier.push(4, 3, 6);
        assert_eq!(frontier.pop(), Some((0, 0)));
        assert_eq!(frontier.pop(), Some((4, 3)));
        assert_eq!(frontier.pop(), Some((4, 5)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut frontier = FifoFrontier::seeded(5);
        frontier.push(2);
        frontier.push(8);
        assert_eq!(frontier.pop(), Some(5));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(8));
        assert_eq!(frontier.pop(), None);
    }
}
