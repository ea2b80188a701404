//! Singly-linked node chain shared by the linked-list queues
//!
//! Positions count from the head. Walking to a position is O(position).

use std::fmt;

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub(crate) fn get(&self, position: usize) -> Option<&T> {
        self.iter().nth(position)
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub(crate) fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `position` (clamped to the tail)
    pub(crate) fn insert_at(&mut self, position: usize, value: T) {
        let link = self.link_at(position);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> Option<T> {
        let link = self.link_at(position);
        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(node.value)
    }

    /// Keeps only the values for which `keep` returns true, preserving order
    ///
    /// Returns the number of values dropped.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        let mut removed = 0;

        while let Some(mut node) = rest {
            rest = node.next.take();
            if keep(&node.value) {
                tail = &mut tail.insert(node).next;
            } else {
                removed += 1;
            }
        }

        self.len -= removed;
        removed
    }

    pub(crate) fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    fn link_at(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Dropping a long chain recursively would overflow the stack
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut cloned = LinkedList::new();
        let mut tail = &mut cloned.head;
        for value in self.iter() {
            let node = Box::new(Node {
                value: value.clone(),
                next: None,
            });
            tail = &mut tail.insert(node).next;
        }
        cloned.len = self.len;
        cloned
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a linked-list queue from head to tail
pub(crate) struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_push_and_insert_positions() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(1);
        list.insert_at(1, 2);
        list.insert_at(10, 4);
        list.insert_at(0, 0);

        assert_eq!(collect(&list), vec![0, 1, 2, 3, 4]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.get(3), Some(&3));
        assert_eq!(list.get(5), None);
    }

    #[test]
    fn test_iter_reports_remaining_length() {
        let mut list = LinkedList::new();
        for value in [3, 2, 1] {
            list.push_front(value);
        }

        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.by_ref().last(), Some(&3));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_remove_at() {
        let mut list = LinkedList::new();
        for value in [4, 3, 2, 1] {
            list.push_front(value);
        }

        assert_eq!(list.remove_at(2), Some(3));
        assert_eq!(list.remove_at(0), Some(1));
        assert_eq!(list.remove_at(5), None);
        assert_eq!(collect(&list), vec![2, 4]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut list = LinkedList::new();
        for value in [5, 2, 4, 2, 1, 2] {
            list.push_front(value);
        }

        assert_eq!(list.retain(|value| *value != 2), 3);
        assert_eq!(collect(&list), vec![1, 4, 5]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_front(1);

        let mut copy = list.clone();
        copy.remove_at(0);
        assert_eq!(collect(&list), vec![1, 2]);
        assert_eq!(collect(&copy), vec![2]);
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let mut list = LinkedList::new();
        for value in 0..200_000 {
            list.push_front(value);
        }
        drop(list);
    }
}
