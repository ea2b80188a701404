//! Sorted linked-list priority queue
//!
//! An unbounded singly-linked list kept in priority order with the next value
//! to remove at the head. A new value is linked in after every value that
//! orders before or equal to it, so equal values stay in FIFO order.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(n)       |
//! | `remove`   | O(1)       |
//! | `peek`     | O(1)       |
//! | `contains` | O(n)       |
//! | `delete`   | O(n)       |

use crate::linked_list::LinkedList;
use crate::traits::PriorityQueue;
use std::cmp::Ordering;

/// An unbounded priority queue backed by a sorted linked list
#[derive(Debug, Clone)]
pub struct OrderedLinkedListPriorityQueue<T> {
    list: LinkedList<T>,
    modifications: u64,
}

impl<T: Ord> PriorityQueue<T> for OrderedLinkedListPriorityQueue<T> {
    fn new() -> Self {
        Self {
            list: LinkedList::new(),
            modifications: 0,
        }
    }

    fn insert(&mut self, value: T) -> bool {
        let position = self.list.iter().take_while(|stored| **stored <= value).count();
        self.list.insert_at(position, value);
        self.modifications += 1;
        true
    }

    fn remove(&mut self) -> Option<T> {
        let value = self.list.remove_at(0)?;
        self.modifications += 1;
        Some(value)
    }

    fn delete(&mut self, value: &T) -> bool {
        if self.list.is_empty() {
            return false;
        }

        let removed = self
            .list
            .retain(|stored| stored.cmp(value) != Ordering::Equal);
        self.modifications += 1;
        log::trace!("ordered list delete removed {} values", removed);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    fn contains(&self, value: &T) -> bool {
        // Sorted, so the scan can stop at the first larger value
        self.list
            .iter()
            .take_while(|stored| *stored <= value)
            .any(|stored| stored.cmp(value) == Ordering::Equal)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn is_full(&self) -> bool {
        false
    }

    fn clear(&mut self) {
        self.list.clear();
        self.modifications += 1;
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.list.iter()
    }

    fn modification_count(&self) -> u64 {
        self.modifications
    }

    fn stored_at(&self, position: usize) -> Option<&T> {
        self.list.get(position)
    }
}

impl<T: Ord> Default for OrderedLinkedListPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
