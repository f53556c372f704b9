//! A mutable min-priority queue with decrease-key.
//!
//! Plain binary heaps cannot reposition an arbitrary element when its weight
//! drops, so [`MinQueue`] pairs an array heap with an element→slot index and
//! restores the heap shape by sifting on every move.

use std::collections::HashMap;
use std::hash::Hash;

/// An ordered collection of `(element, weight)` pairs.
///
/// The minimum-weight element is readable in O(1); insertion, extraction,
/// and in-place weight reduction are O(log n).
pub struct MinQueue<T> {
    heap: Vec<(T, u32)>,
    slots: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> Default for MinQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> MinQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Number of elements currently queued.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `t` is currently queued.
    #[inline]
    pub fn contains(&self, t: &T) -> bool {
        self.slots.contains_key(t)
    }

    /// Add an element. Each element may be present at most once.
    pub fn insert(&mut self, t: T, weight: u32) {
        debug_assert!(!self.slots.contains_key(&t), "element inserted twice");
        let i = self.heap.len();
        self.heap.push((t, weight));
        self.slots.insert(t, i);
        self.sift_up(i);
    }

    /// The current minimum, without removing it. `None` when empty.
    #[inline]
    pub fn peek_min(&self) -> Option<(T, u32)> {
        self.heap.first().copied()
    }

    /// Remove and return the current minimum. `None` when empty.
    pub fn pop_min(&mut self) -> Option<(T, u32)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let (t, weight) = self.heap.pop()?;
        self.slots.remove(&t);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((t, weight))
    }

    /// Lower the weight of a queued element and restore its position.
    ///
    /// # Panics
    ///
    /// Panics if `t` is not queued, or if `new_weight` is not strictly
    /// lower than its current weight. Either is a caller bug: the caller
    /// is expected to call this only on a proven improvement.
    pub fn decrease_weight(&mut self, t: T, new_weight: u32) {
        let i = match self.slots.get(&t) {
            Some(&i) => i,
            None => panic!("decrease_weight on an element that is not queued"),
        };
        assert!(
            new_weight < self.heap[i].1,
            "decrease_weight from {} to {} is not a decrease",
            self.heap[i].1,
            new_weight
        );
        self.heap[i].1 = new_weight;
        self.sift_up(i);
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].0, a);
        self.slots.insert(self.heap[b].0, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].1 <= self.heap[i].1 {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.heap.len() && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    #[test]
    fn pops_in_weight_order() {
        let mut q = MinQueue::new();
        q.insert('c', 30);
        q.insert('a', 10);
        q.insert('b', 20);
        assert_eq!(q.peek_min(), Some(('a', 10)));
        assert_eq!(q.pop_min(), Some(('a', 10)));
        assert_eq!(q.pop_min(), Some(('b', 20)));
        assert_eq!(q.pop_min(), Some(('c', 30)));
        assert_eq!(q.pop_min(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn decrease_weight_repositions() {
        let mut q = MinQueue::new();
        q.insert('a', 10);
        q.insert('b', 20);
        q.insert('c', 30);
        q.decrease_weight('c', 5);
        assert_eq!(q.peek_min(), Some(('c', 5)));
        assert_eq!(q.pop_min(), Some(('c', 5)));
        assert_eq!(q.pop_min(), Some(('a', 10)));
        // 'b' is still present and still last.
        assert!(q.contains(&'b'));
        assert_eq!(q.pop_min(), Some(('b', 20)));
    }

    #[test]
    fn decrease_weight_within_heap_middle() {
        let mut q = MinQueue::new();
        for (i, w) in [50, 40, 30, 20, 10].into_iter().enumerate() {
            q.insert(i, w);
        }
        q.decrease_weight(0, 15);
        let mut popped = Vec::new();
        while let Some((t, w)) = q.pop_min() {
            popped.push((t, w));
        }
        assert_eq!(popped, vec![(4, 10), (0, 15), (3, 20), (2, 30), (1, 40)]);
    }

    #[test]
    #[should_panic(expected = "not queued")]
    fn decrease_weight_requires_presence() {
        let mut q = MinQueue::new();
        q.insert('a', 10);
        q.decrease_weight('b', 5);
    }

    #[test]
    #[should_panic(expected = "not a decrease")]
    fn decrease_weight_requires_a_lower_weight() {
        let mut q = MinQueue::new();
        q.insert('a', 10);
        q.decrease_weight('a', 25);
    }

    #[test]
    fn random_operations_always_pop_the_global_minimum() {
        let mut rng = rand::rng();
        let mut q: MinQueue<u32> = MinQueue::new();
        // Mirror of the queue contents, checked against every pop.
        let mut mirror: Vec<(u32, u32)> = Vec::new();
        let mut next_key = 0u32;

        for _ in 0..2000 {
            match rng.random_range(0..3u32) {
                0 => {
                    let w = rng.random_range(0..1000);
                    q.insert(next_key, w);
                    mirror.push((next_key, w));
                    next_key += 1;
                }
                1 if !mirror.is_empty() => {
                    let i = rng.random_range(0..mirror.len());
                    let (t, w) = mirror[i];
                    if w > 0 {
                        let new_w = rng.random_range(0..w);
                        q.decrease_weight(t, new_w);
                        mirror[i].1 = new_w;
                    }
                }
                _ => {
                    let popped = q.pop_min();
                    match popped {
                        None => assert!(mirror.is_empty()),
                        Some((t, w)) => {
                            let min = mirror.iter().map(|&(_, w)| w).min().unwrap();
                            assert_eq!(w, min, "pop_min returned a non-minimal weight");
                            let i = mirror.iter().position(|&(mt, _)| mt == t).unwrap();
                            assert_eq!(mirror[i].1, w);
                            mirror.swap_remove(i);
                        }
                    }
                }
            }
            assert_eq!(q.len(), mirror.len());
        }
    }
}
