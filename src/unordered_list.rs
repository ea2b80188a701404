//! Unsorted linked-list priority queue
//!
//! New values are pushed at the head, so the list runs from newest to oldest.
//! `remove` and `peek` pick the *last* minimal value in list order, which is
//! the earliest inserted among equals.
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

use crate::linked_list::LinkedList;
use crate::traits::PriorityQueue;
use std::cmp::Ordering;

/// An unbounded priority queue backed by an unsorted linked list
#[derive(Debug, Clone)]
pub struct UnorderedLinkedListPriorityQueue<T> {
    list: LinkedList<T>,
    modifications: u64,
}

impl<T: Ord> UnorderedLinkedListPriorityQueue<T> {
    fn min_position(&self) -> Option<(usize, &T)> {
        self.list
            .iter()
            .enumerate()
            .fold(None, |best, (index, value)| match best {
                Some((_, current)) if current < value => best,
                _ => Some((index, value)),
            })
    }
}

impl<T: Ord> PriorityQueue<T> for UnorderedLinkedListPriorityQueue<T> {
    fn new() -> Self {
        Self {
            list: LinkedList::new(),
            modifications: 0,
        }
    }

    fn insert(&mut self, value: T) -> bool {
        self.list.push_front(value);
        self.modifications += 1;
        true
    }

    fn remove(&mut self) -> Option<T> {
        let (index, _) = self.min_position()?;
        let value = self.list.remove_at(index)?;
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
        log::trace!("unordered list delete removed {} values", removed);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.min_position().map(|(_, value)| value)
    }

    fn contains(&self, value: &T) -> bool {
        self.list
            .iter()
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

impl<T: Ord> Default for UnorderedLinkedListPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_is_newest_first() {
        let mut queue = UnorderedLinkedListPriorityQueue::new();
        for value in [2, 9, 4] {
            queue.insert(value);
        }
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![4, 9, 2]);
        assert_eq!(queue.stored_at(1), Some(&9));
    }

    #[test]
    fn test_remove_in_priority_order() {
        let mut queue = UnorderedLinkedListPriorityQueue::new();
        for value in [5, 3, 5, 1, 4] {
            queue.insert(value);
        }

        assert_eq!(queue.peek(), Some(&1));
        let mut removed = Vec::new();
        while let Some(value) = queue.remove() {
            removed.push(value);
        }
        assert_eq!(removed, vec![1, 3, 4, 5, 5]);
    }

    #[test]
    fn test_delete_all_matches() {
        let mut queue = UnorderedLinkedListPriorityQueue::new();
        for value in [2, 4, 2, 2, 7] {
            queue.insert(value);
        }

        assert!(queue.delete(&2));
        assert!(!queue.contains(&2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![7, 4]);
    }
}
