//! Bulk construction of a [`MinHeap`] from a slice of priorities
//!
//! Both strategies size the heap to exactly `values.len()` and give the
//! value at position `i` the id `i`. They produce valid heaps that extract
//! the same priority sequence, though the array layouts may differ. With
//! distinct priorities the extracted `(priority, id)` pairs coincide too;
//! equal priorities may come out with their ids in a different order.
//!
//! | Strategy                     | Complexity |
//! |------------------------------|------------|
//! | [`BuildStrategy::TopDown`]   | O(n log n) |
//! | [`BuildStrategy::BottomUp`]  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use fixed_min_heap::{BuildStrategy, MinHeap};
//!
//! let values = [5, 3, 8, 1, 4];
//! let top_down = MinHeap::build(&values, BuildStrategy::TopDown).unwrap();
//! let bottom_up = MinHeap::build(&values, BuildStrategy::BottomUp).unwrap();
//!
//! assert!(top_down.is_heap() && bottom_up.is_heap());
//! assert_eq!(top_down.into_sorted_vec(), bottom_up.into_sorted_vec());
//! ```

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::HeapError;
use crate::min_heap::{parent, MinHeap, Priority};

/// Algorithm used by [`MinHeap::build`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuildStrategy {
    /// Insert each value in order, floating it up
    TopDown,
    /// Place every value, then sift down each internal node from `n / 2` to 1
    #[default]
    BottomUp,
}

impl MinHeap {
    /// Builds a heap from `values` with the given strategy
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailed`] if storage for `values.len()`
    /// nodes cannot be reserved.
    pub fn build(values: &[Priority], strategy: BuildStrategy) -> Result<Self, HeapError> {
        let heap = match strategy {
            BuildStrategy::TopDown => Self::build_top_down(values)?,
            BuildStrategy::BottomUp => Self::build_bottom_up(values)?,
        };
        debug!("built heap of {} nodes using {strategy:?}", heap.len());
        Ok(heap)
    }

    /// Builds a heap by inserting each value in input order
    pub fn build_top_down(values: &[Priority]) -> Result<Self, HeapError> {
        let mut heap = Self::with_capacity(values.len())?;
        for (id, &priority) in values.iter().enumerate() {
            heap.insert(priority, id)?;
        }
        Ok(heap)
    }

    /// Builds a heap by placing all values and sifting down every internal
    /// node, last first
    pub fn build_bottom_up(values: &[Priority]) -> Result<Self, HeapError> {
        let mut heap = Self::with_capacity(values.len())?;
        heap.place_unordered(values);
        for index in (1..=parent(values.len())).rev() {
            heap.heapify(index);
        }
        Ok(heap)
    }
}
