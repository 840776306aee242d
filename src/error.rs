//! Error type for heap operations
//!
//! Every fallible operation on [`MinHeap`](crate::MinHeap) returns a
//! [`HeapError`]. No error leaves the heap partially mutated: a rejected
//! insert or a rejected priority change leaves the contents exactly as they
//! were, and the heap stays usable.

use thiserror::Error;

/// Error type for heap operations
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Backing storage for the requested capacity could not be reserved
    #[error("cannot allocate storage for a heap of capacity {capacity}")]
    AllocationFailed { capacity: usize },
    /// The heap already holds `capacity` elements
    #[error("heap is full (capacity {capacity})")]
    Full { capacity: usize },
    /// The operation needs at least one live element
    #[error("heap is empty")]
    Empty,
    /// The index does not name a live slot (live slots are `1..=size`)
    #[error("index {index} is not a live index (size {size})")]
    InvalidIndex { index: usize, size: usize },
}
