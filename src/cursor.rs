//! Fail-fast traversal that does not borrow the queue
//!
//! [`PriorityQueue::iter`] borrows the queue, so the compiler already rules
//! out mutation while it is alive. A [`Cursor`] instead holds only a position
//! and the modification count observed when it was created, which lets the
//! caller interleave traversal with other work on the queue. Any structural
//! change made in between is detected on the next call and reported as
//! [`QueueError::ConcurrentModification`].
//!
//! # Example
//!
//! ```rust
//! use fifo_priority_queues::{PriorityQueue, QueueError};
//! use fifo_priority_queues::binary_heap::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::new();
//! queue.insert(2);
//! queue.insert(1);
//!
//! let mut cursor = queue.cursor();
//! assert_eq!(cursor.next(&queue), Ok(&1));
//!
//! queue.insert(0);
//! assert!(matches!(
//!     cursor.next(&queue),
//!     Err(QueueError::ConcurrentModification { .. })
//! ));
//! ```

use crate::traits::{PriorityQueue, QueueError};

/// A detached position in a queue's storage order
///
/// A cursor is tied to the modification count of the queue it was created
/// from. Since that count never decreases, a cursor that has observed a
/// modification stays invalid for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    expected_modifications: u64,
}

impl Cursor {
    pub(crate) fn new(expected_modifications: u64) -> Self {
        Self {
            position: 0,
            expected_modifications,
        }
    }

    /// Number of values this cursor has yielded
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns whether another value is available
    ///
    /// # Errors
    /// Returns [`QueueError::ConcurrentModification`] if `queue` changed since
    /// the cursor was created.
    pub fn has_next<T, Q>(&self, queue: &Q) -> Result<bool, QueueError>
    where
        T: Ord,
        Q: PriorityQueue<T>,
    {
        self.check(queue)?;
        Ok(self.position < queue.len())
    }

    /// Advances the cursor and returns the next value in storage order
    ///
    /// # Errors
    /// Returns [`QueueError::ConcurrentModification`] if `queue` changed since
    /// the cursor was created, and [`QueueError::NoSuchElement`] once every
    /// value has been yielded.
    pub fn next<'q, T, Q>(&mut self, queue: &'q Q) -> Result<&'q T, QueueError>
    where
        T: Ord,
        Q: PriorityQueue<T>,
    {
        if !self.has_next(queue)? {
            return Err(QueueError::NoSuchElement);
        }
        let value = queue
            .stored_at(self.position)
            .ok_or(QueueError::NoSuchElement)?;
        self.position += 1;
        Ok(value)
    }

    fn check<T, Q>(&self, queue: &Q) -> Result<(), QueueError>
    where
        T: Ord,
        Q: PriorityQueue<T>,
    {
        let found = queue.modification_count();
        if found != self.expected_modifications {
            log::debug!(
                "cursor invalidated at position {}: expected modification count {}, found {}",
                self.position,
                self.expected_modifications,
                found
            );
            return Err(QueueError::ConcurrentModification {
                expected: self.expected_modifications,
                found,
            });
        }
        Ok(())
    }
}
