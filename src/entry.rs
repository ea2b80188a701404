//! Sequence-tagged heap entries
//!
//! An [`Entry`] pairs a stored value with the sequence number it was assigned
//! on insertion. Entries order by value first and by sequence number second,
//! so equal values leave the heap in the order they arrived.

use std::cmp::Ordering;

/// A value tagged with its insertion sequence number
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) sequence: u64,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T, sequence: u64) -> Self {
        Self { value, sequence }
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

impl<T: Ord> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Entry<T> {}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}
