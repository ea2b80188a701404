//! Bounded binary heap priority queue
//!
//! An array-backed binary min-heap with a fixed capacity. Each stored value
//! is wrapped together with a monotonically increasing sequence number, so
//! equal values come out in the order they went in.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity    |
//! |------------|---------------|
//! | `insert`   | O(log n)      |
//! | `remove`   | O(log n)      |
//! | `peek`     | O(1)          |
//! | `contains` | O(n)          |
//! | `delete`   | O(k · n)      |
//!
//! where `k` is the number of entries matching the deleted value.
//!
//! # Example
//!
//! ```rust
//! use fifo_priority_queues::PriorityQueue;
//! use fifo_priority_queues::binary_heap::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::with_capacity(2);
//! assert!(queue.insert(5));
//! assert!(queue.insert(3));
//! assert!(!queue.insert(1)); // full
//!
//! assert_eq!(queue.remove(), Some(3));
//! assert_eq!(queue.remove(), Some(5));
//! assert_eq!(queue.remove(), None);
//! ```

use crate::entry::Entry;
use crate::traits::{PriorityQueue, DEFAULT_MAX_CAPACITY, PREALLOCATE_LIMIT};
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// A bounded binary min-heap with FIFO tie-breaking
///
/// Slot `i > 0` never orders before its parent `(i - 1) / 2`, comparing
/// entries by value and then by sequence number. The root therefore holds the
/// smallest value, and among equal values the earliest inserted.
#[derive(Debug, Clone)]
pub struct BinaryHeapPriorityQueue<T> {
    /// Populated slots in heap order
    data: Vec<Entry<T>>,
    capacity: usize,
    /// Sequence number handed to the next inserted value
    next_sequence: u64,
    modifications: u64,
}

impl<T: Ord> BinaryHeapPriorityQueue<T> {
    /// Creates an empty heap that holds at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            capacity,
            next_sequence: 0,
            modifications: 0,
        }
    }

    /// Maximum number of values the heap can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the heap, returning its values in removal order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.remove() {
            sorted.push(value);
        }
        sorted
    }

    /// Move entry at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }

    /// Removes the entry at `index`, filling the hole with the last entry
    fn remove_at(&mut self, index: usize) -> T {
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            // The relocated entry came from the bottom of another subtree, so
            // it may belong above or below the hole.
            let moves_up = index > 0 && self.data[index] < self.data[(index - 1) / 2];
            if moves_up {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }
        removed.into_value()
    }

    fn position_of(&self, value: &T) -> Option<usize> {
        self.data
            .iter()
            .position(|entry| entry.value.cmp(value) == Ordering::Equal)
    }

    #[cfg(test)]
    fn assert_heap_order(&self) {
        for index in 1..self.data.len() {
            let parent = (index - 1) / 2;
            assert!(
                self.data[parent] < self.data[index],
                "slot {} orders before its parent {}",
                index,
                parent
            );
        }
    }
}

impl<T: Ord> PriorityQueue<T> for BinaryHeapPriorityQueue<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            log::debug!(
                "binary heap at capacity {}, rejecting insert",
                self.capacity
            );
            return false;
        }

        let entry = Entry::new(value, self.next_sequence);
        self.next_sequence += 1;
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
        self.modifications += 1;
        true
    }

    fn remove(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let value = self.remove_at(0);
        self.modifications += 1;
        Some(value)
    }

    fn delete(&mut self, value: &T) -> bool {
        if self.data.is_empty() {
            return false;
        }

        // Each removal relocates the last entry and may sift it above
        // positions already scanned, so every removal restarts the scan.
        let mut removed = 0usize;
        while let Some(index) = self.position_of(value) {
            self.remove_at(index);
            removed += 1;
        }

        self.modifications += 1;
        log::trace!("binary heap delete removed {} entries", removed);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.data.first().map(|entry| &entry.value)
    }

    fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    fn clear(&mut self) {
        log::trace!("clearing binary heap of {} entries", self.data.len());
        self.data.clear();
        self.modifications += 1;
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        Iter {
            inner: self.data.iter(),
        }
    }

    fn modification_count(&self) -> u64 {
        self.modifications
    }

    fn stored_at(&self, position: usize) -> Option<&T> {
        self.data.get(position).map(|entry| &entry.value)
    }
}

impl<T: Ord> Default for BinaryHeapPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`BinaryHeapPriorityQueue`] in storage order
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|entry| &entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a BinaryHeapPriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter {
            inner: self.data.iter(),
        }
    }
}
