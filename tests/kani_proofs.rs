//! Kani verification proofs for the binary heap queue
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use fifo_priority_queues::binary_heap::BinaryHeapPriorityQueue;
#[cfg(kani)]
use fifo_priority_queues::{PriorityQueue, QueueError};

/// Proof that a successful insert increments the length by one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len() {
    let mut heap: BinaryHeapPriorityQueue<u8> = BinaryHeapPriorityQueue::with_capacity(4);
    heap.insert(kani::any());
    heap.insert(kani::any());
    let initial_len = heap.len();

    assert!(heap.insert(kani::any()));
    assert!(heap.len() == initial_len + 1);
}

/// Proof that a rejected insert leaves the heap untouched
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_full_insert_is_noop() {
    let mut heap: BinaryHeapPriorityQueue<u8> = BinaryHeapPriorityQueue::with_capacity(2);
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    heap.insert(a);
    heap.insert(b);

    let top = heap.peek().copied();
    let modifications = heap.modification_count();

    assert!(!heap.insert(kani::any()));
    assert!(heap.len() == 2);
    assert!(heap.peek().copied() == top);
    assert!(heap.modification_count() == modifications);
}

/// Proof that remove returns the minimum of three arbitrary values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_returns_minimum() {
    let mut heap: BinaryHeapPriorityQueue<u8> = BinaryHeapPriorityQueue::with_capacity(3);
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    let min = a.min(b).min(c);
    assert!(heap.peek() == Some(&min));
    assert!(heap.remove() == Some(min));
    assert!(heap.len() == 2);
}

/// Proof that removals come out in non-decreasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_removal_order() {
    let mut heap: BinaryHeapPriorityQueue<u8> = BinaryHeapPriorityQueue::with_capacity(4);
    for _ in 0..4 {
        heap.insert(kani::any());
    }

    let mut previous = 0u8;
    for _ in 0..4 {
        let value = heap.remove();
        assert!(value.is_some());
        let value = value.unwrap();
        assert!(value >= previous);
        previous = value;
    }
    assert!(heap.is_empty());
}

/// Proof that a cursor fails after any successful insert
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_cursor_invalidated_by_insert() {
    let mut heap: BinaryHeapPriorityQueue<u8> = BinaryHeapPriorityQueue::with_capacity(2);
    heap.insert(kani::any());

    let mut cursor = heap.cursor();
    heap.insert(kani::any());

    let result = cursor.next(&heap);
    assert!(matches!(
        result,
        Err(QueueError::ConcurrentModification { .. })
    ));
}
