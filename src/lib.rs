//! FIFO Priority Queues for Rust
//!
//! This crate provides several classic priority queue implementations behind
//! one [`PriorityQueue`] contract. All of them are min-queues in which the value
//! is its own priority, and all of them break ties in FIFO order: among equal
//! values, the one inserted first is removed first.
//!
//! # Implementations
//!
//! - **Binary Heap**: O(log n) insert and remove; a bounded array-backed min-heap
//!   whose entries carry an insertion sequence number for tie-breaking
//! - **Ordered Array**: O(n) insert, O(1) remove; sorted bounded array
//! - **Unordered Array**: O(1) insert, O(n) remove; bounded array in arrival order
//! - **Ordered Linked List**: O(n) insert, O(1) remove; unbounded
//! - **Unordered Linked List**: O(1) insert, O(n) remove; unbounded
//!
//! # Iteration
//!
//! [`PriorityQueue::iter`] walks values in storage order while borrowing the
//! queue. For traversal that survives across mutable access, use a
//! [`Cursor`], which fails fast with [`QueueError::ConcurrentModification`]
//! once the queue has been structurally modified.
//!
//! # Example
//!
//! ```rust
//! use fifo_priority_queues::PriorityQueue;
//! use fifo_priority_queues::binary_heap::BinaryHeapPriorityQueue;
//!
//! let mut queue = BinaryHeapPriorityQueue::with_capacity(16);
//! for value in [5, 3, 5, 1] {
//!     queue.insert(value);
//! }
//!
//! assert_eq!(queue.remove(), Some(1));
//! assert_eq!(queue.remove(), Some(3));
//! assert!(queue.delete(&5));
//! assert!(queue.is_empty());
//! ```

pub mod binary_heap;
pub mod cursor;
mod entry;
mod linked_list;
pub mod ordered_array;
pub mod ordered_list;
pub mod traits;
pub mod unordered_array;
pub mod unordered_list;

// Re-export the main trait for convenience
pub use cursor::Cursor;
pub use traits::{PriorityQueue, QueueError, DEFAULT_MAX_CAPACITY};
