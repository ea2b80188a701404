//! Sorted array priority queue
//!
//! Values are kept sorted from lowest to highest priority, so the next value
//! to remove always sits at the end of the array.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(n)       |
//! | `remove`   | O(1)       |
//! | `peek`     | O(1)       |
//! | `contains` | O(log n)   |
//! | `delete`   | O(n)       |

use crate::traits::{PriorityQueue, DEFAULT_MAX_CAPACITY, PREALLOCATE_LIMIT};
use std::cmp::Ordering;

/// A bounded priority queue backed by a sorted array
///
/// Storage order is descending: the smallest value is last. A new value is
/// placed in front of any values equal to it, which keeps equal values in
/// FIFO order at the removal end.
#[derive(Debug, Clone)]
pub struct OrderedArrayPriorityQueue<T> {
    data: Vec<T>,
    capacity: usize,
    modifications: u64,
}

impl<T: Ord> OrderedArrayPriorityQueue<T> {
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
}

impl<T: Ord> PriorityQueue<T> for OrderedArrayPriorityQueue<T> {
    fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    fn insert(&mut self, value: T) -> bool {
        if self.is_full() {
            log::debug!(
                "ordered array queue at capacity {}, rejecting insert",
                self.capacity
            );
            return false;
        }

        let index = self.data.partition_point(|stored| *stored > value);
        self.data.insert(index, value);
        self.modifications += 1;
        true
    }

    fn remove(&mut self) -> Option<T> {
        let value = self.data.pop()?;
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
        log::trace!("ordered array delete removed {} values", removed);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    fn contains(&self, value: &T) -> bool {
        // Descending storage, so the probe comparison is reversed
        self.data
            .binary_search_by(|stored| value.cmp(stored))
            .is_ok()
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

impl<T: Ord> Default for OrderedArrayPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
