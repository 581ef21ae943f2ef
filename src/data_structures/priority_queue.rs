use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// One queued element. The comparison is inverted so the max-heap
/// underneath surfaces the smallest priority first; equal priorities fall
/// back to the item itself, which gives shortest-path frontiers a
/// deterministic pop order on distance ties.
#[derive(Debug, PartialEq, Eq)]
struct Entry<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    priority: P,
    item: V,
}

impl<V, P> Ord for Entry<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.item.cmp(&self.item))
    }
}

impl<V, P> PartialOrd for Entry<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue over `(item, priority)` pairs, backed by the
/// standard library's binary heap.
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    heap: BinaryHeap<Entry<V, P>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority into the priority queue
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Entry { priority, item });
    }

    /// Removes and returns the item with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: PartialOrd + Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
