//! Common traits for priority queue data structures
//!
//! Every queue in this crate implements [`PriorityQueue`], a min-priority
//! contract with FIFO tie-breaking: among values that compare equal, the one
//! inserted first is removed first.
//!
//! Failure modes are split the way callers handle them:
//!
//! - Capacity exhaustion and empty access are ordinary outcomes, reported as
//!   `bool` and `Option` respectively.
//! - Misusing a [`Cursor`](crate::cursor::Cursor) is a programming error at the
//!   call site and is reported as a [`QueueError`].

use crate::cursor::Cursor;

/// Capacity used by [`PriorityQueue::new`] for the bounded variants
pub const DEFAULT_MAX_CAPACITY: usize = 1000;

/// Upper bound on the number of slots reserved up front by bounded variants
///
/// A queue may still grow to its full nominal capacity; this only limits the
/// initial allocation.
pub(crate) const PREALLOCATE_LIMIT: usize = 4096;

/// Error type for cursor traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The queue was structurally modified after the cursor was created
    #[error("queue modified during iteration (expected {expected} modifications, found {found})")]
    ConcurrentModification { expected: u64, found: u64 },
    /// The cursor was advanced past the last element
    #[error("no more elements in queue")]
    NoSuchElement,
}

/// Base trait for priority queue data structures
///
/// Unlike `std::collections::BinaryHeap`, these queues are min-queues and the
/// value itself is the priority. Values are matched by ordering equality
/// (`Ord::cmp` returning `Equal`), not by `PartialEq`.
///
/// # Example
///
/// ```rust
/// use fifo_priority_queues::PriorityQueue;
/// use fifo_priority_queues::binary_heap::BinaryHeapPriorityQueue;
///
/// let mut queue = BinaryHeapPriorityQueue::new();
/// assert!(queue.insert(3));
/// assert!(queue.insert(1));
/// assert!(queue.insert(2));
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.remove(), Some(1));
/// assert_eq!(queue.len(), 2);
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    ///
    /// Bounded variants get [`DEFAULT_MAX_CAPACITY`] slots.
    fn new() -> Self;

    /// Inserts a value, returning `false` if the queue is full
    ///
    /// A rejected value is dropped and the queue is left unchanged.
    fn insert(&mut self, value: T) -> bool;

    /// Removes and returns the highest-priority value
    ///
    /// Among equal values the earliest inserted is returned. Returns `None`
    /// if the queue is empty.
    fn remove(&mut self) -> Option<T>;

    /// Deletes every value ordering-equal to `value`
    ///
    /// Returns `false` when there was nothing to delete. The heap and linked
    /// list variants report `true` for any non-empty queue; the array variants
    /// report `true` only if at least one value matched.
    fn delete(&mut self, value: &T) -> bool;

    /// Returns the value [`remove`](PriorityQueue::remove) would return, without removing it
    fn peek(&self) -> Option<&T>;

    /// Returns true if some stored value is ordering-equal to `value`
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of values in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the queue is at capacity
    ///
    /// Unbounded variants always return `false`.
    fn is_full(&self) -> bool;

    /// Removes every value
    fn clear(&mut self);

    /// Iterates over the values in storage order
    ///
    /// Storage order is neither priority order nor sorted order in general.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Number of structural modifications made so far
    ///
    /// Incremented by every successful insert, remove, delete and clear.
    /// Never decreases.
    fn modification_count(&self) -> u64;

    /// Returns the value at `position` in storage order
    fn stored_at(&self, position: usize) -> Option<&T>;

    /// Creates a fail-fast cursor positioned before the first stored value
    fn cursor(&self) -> Cursor {
        Cursor::new(self.modification_count())
    }
}
