//! Unsorted array priority queue
//!
//! Values stay in insertion order; `remove` and `peek` scan for the minimum.
//! Because the scan keeps the first minimum it meets, equal values leave in
//! the order they arrived.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(1)       |
//! | `remove`   | O(n)       |
//! | `peek`     | O(n)       |
//! | `contains` | O(n)       |
//! | `delete`   | O(n)       |

use crate::traits::{PriorityQueue, DEFAULT_MAX_CAPACITY, PREALLOCATE_LIMIT};
use std::cmp::Ordering;

/// A bounded priority queue backed by an array in insertion order
#[derive(Debug, Clone)]
pub struct UnorderedArrayPriorityQueue<T> {
    data: Vec<T>,
    capacity: usize,
    modifications: u64,
}

impl<T: Ord> UnorderedArrayPriorityQueue<T> {
    /// Creates an empty queue that holds at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            capacity,
            modifications: 0,
        }
    }

    /// Maximum number of values the queue can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the earliest-inserted minimum
    fn min_position(&self) -> Option<usize> {
        // `min_by` keeps the first of several equal minima
        self.data
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cmp(b))
            .map(|(index, _)| index)
    }
}

impl<T: Ord> PriorityQueue<T> for UnorderedArrayPriorityQueue<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            log::debug!(
                "unordered array queue at capacity {}, rejecting insert",
                self.capacity
            );
            return false;
        }

        self.data.push(value);
        self.modifications += 1;
        true
    }

    fn remove(&mut self) -> Option<T> {
        let index = self.min_position()?;
        // Shifting rather than swap_remove keeps arrival order intact
        let value = self.data.remove(index);
        self.modifications += 1;
        Some(value)
    }

    fn delete(&mut self, value: &T) -> bool {
        let before = self.data.len();
        self.data.retain(|stored| stored.cmp(value) != Ordering::Equal);
        let removed = before - self.data.len();
        if removed == 0 {
            return false;
        }

        self.modifications += 1;
        log::trace!("unordered array delete removed {} values", removed);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.min_position().map(|index| &self.data[index])
    }

    fn contains(&self, value: &T) -> bool {
        self.data
            .iter()
            .any(|stored| stored.cmp(value) == Ordering::Equal)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    fn clear(&mut self) {
        self.data.clear();
        self.modifications += 1;
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.data.iter()
    }

    fn modification_count(&self) -> u64 {
        self.modifications
    }

    fn stored_at(&self, position: usize) -> Option<&T> {
        self.data.get(position)
    }
}

impl<T: Ord> Default for UnorderedArrayPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
