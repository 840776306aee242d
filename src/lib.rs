//! Fixed-Capacity Binary Min-Heap
//!
//! This crate provides an array-backed binary min-heap of `(priority, id)`
//! nodes with a capacity fixed at construction, plus two bulk-construction
//! strategies for comparing build costs.
//!
//! # Features
//!
//! - **Insert / extract-min**: O(log n), failing cleanly on a full or empty heap
//! - **Peek-min**: O(1)
//! - **Change priority at index**: O(log n), floating up or sifting down as needed
//! - **Top-down build**: O(n log n) by repeated insertion
//! - **Bottom-up build**: O(n) by sifting down every internal node
//!
//! Enable the `serde` feature to serialize [`HeapNode`] and [`BuildStrategy`].
//!
//! # Example
//!
//! ```rust
//! use fixed_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::with_capacity(5).unwrap();
//! for (id, priority) in [5, 3, 8, 1, 4].into_iter().enumerate() {
//!     heap.insert(priority, id).unwrap();
//! }
//!
//! heap.change_priority(heap.len(), 0).unwrap();
//! assert_eq!(heap.peek_min().unwrap().priority, 0);
//!
//! let first = heap.extract_min().unwrap();
//! assert_eq!(first.priority, 0);
//! ```

pub mod build;
pub mod error;
pub mod min_heap;

pub use build::BuildStrategy;
pub use error::HeapError;
pub use min_heap::{left_child, parent, right_child, HeapNode, MinHeap, NodeId, Priority};
