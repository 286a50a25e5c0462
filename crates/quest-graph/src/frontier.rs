use core::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Ordered collection of not-yet-finalized search entries.
///
/// One trait, interchangeable backings: the expansion loop in
/// [`crate::search`] is written once against this seam and the discipline
/// (LIFO/FIFO/min-cost) is chosen by the caller. LIFO and FIFO backings
/// ignore the priority argument.
pub trait Frontier<T> {
    fn push(&mut self, item: T, priority: f64);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
}

/// Last-in-first-out frontier (depth-first discipline).
#[derive(Debug)]
pub struct LifoFrontier<T> {
    items: Vec<T>,
}

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out frontier (breadth-first discipline).
#[derive(Debug)]
pub struct FifoFrontier<T> {
    items: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T, _priority: f64) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug)]
struct OpenEntry<T> {
    priority: f64,
    tie: u64,
    item: T,
}

impl<T> OpenEntry<T> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.tie.cmp(&other.tie))
    }
}

impl<T> PartialEq for OpenEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for OpenEntry<T> {}

impl<T> PartialOrd for OpenEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for OpenEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key_cmp(self)
    }
}

/// Lowest-priority-first frontier (uniform-cost and A* disciplines).
///
/// Priorities compare under `f64::total_cmp`; equal priorities pop in
/// insertion order via a monotonic tie counter.
#[derive(Debug)]
pub struct MinCostFrontier<T> {
    heap: BinaryHeap<OpenEntry<T>>,
    tie: u64,
}

impl<T> MinCostFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie: 0,
        }
    }
}

impl<T> Default for MinCostFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for MinCostFrontier<T> {
    fn push(&mut self, item: T, priority: f64) {
        self.heap.push(OpenEntry {
            priority,
            tie: self.tie,
            item,
        });
        self.tie += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_pops_newest_first() {
        let mut f = LifoFrontier::new();
        f.push('a', 0.0);
        f.push('b', 0.0);
        assert_eq!(f.pop(), Some('b'));
        assert_eq!(f.pop(), Some('a'));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn fifo_pops_oldest_first() {
        let mut f = FifoFrontier::new();
        f.push('a', 0.0);
        f.push('b', 0.0);
        assert_eq!(f.pop(), Some('a'));
        assert_eq!(f.pop(), Some('b'));
    }

    #[test]
    fn min_cost_pops_lowest_priority_first() {
        let mut f = MinCostFrontier::new();
        f.push('c', 3.0);
        f.push('a', 1.0);
        f.push('b', 2.0);
        assert_eq!(f.pop(), Some('a'));
        assert_eq!(f.pop(), Some('b'));
        assert_eq!(f.pop(), Some('c'));
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut f = MinCostFrontier::new();
        f.push('a', 1.0);
        f.push('b', 1.0);
        f.push('c', 1.0);
        assert_eq!(f.pop(), Some('a'));
        assert_eq!(f.pop(), Some('b'));
        assert_eq!(f.pop(), Some('c'));
    }
}
