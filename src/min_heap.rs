//! Fixed-capacity binary min-heap
//!
//! A binary min-heap stored in a dense array with the tree structure left
//! implicit in the index arithmetic. Slots are numbered from 1: the root is
//! at index 1, the children of `i` are `2i` and `2i + 1`, and its parent is
//! `i / 2`. Slot 0 of the backing storage is reserved and never read.
//!
//! The storage is allocated once by [`MinHeap::with_capacity`] and never
//! grows; [`MinHeap::insert`] fails with [`HeapError::Full`] instead.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `insert`          | O(log n)   |
//! | `extract_min`     | O(log n)   |
//! | `peek_min`        | O(1)       |
//! | `change_priority` | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use fixed_min_heap::MinHeap;
//!
//! let mut heap = MinHeap::with_capacity(3).unwrap();
//! heap.insert(5, 0).unwrap();
//! heap.insert(3, 1).unwrap();
//! heap.insert(8, 2).unwrap();
//! assert!(heap.insert(1, 3).is_err());
//!
//! assert_eq!(heap.extract_min().unwrap().id, 1);
//! assert_eq!(heap.peek_min().unwrap().priority, 5);
//! ```

use std::fmt;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::HeapError;

/// Ordering key of a node; smaller priorities are extracted first
pub type Priority = i32;

/// Opaque payload carried alongside a priority
pub type NodeId = usize;

/// Index of the parent of the node at `index` (1-based)
#[inline]
pub const fn parent(index: usize) -> usize {
    index / 2
}

/// Index of the left child of the node at `index` (1-based)
#[inline]
pub const fn left_child(index: usize) -> usize {
    2 * index
}

/// Index of the right child of the node at `index` (1-based)
#[inline]
pub const fn right_child(index: usize) -> usize {
    2 * index + 1
}

/// A `(priority, id)` pair stored in the heap
///
/// Only `priority` takes part in heap ordering. The derived `Ord` compares
/// `priority` first and `id` second and is not used by the heap itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeapNode {
    pub priority: Priority,
    pub id: NodeId,
}

impl HeapNode {
    pub const fn new(priority: Priority, id: NodeId) -> Self {
        Self { priority, id }
    }
}

/// A binary min-heap with a fixed capacity
///
/// Live elements occupy indices `1..=len()`. Every index `i` in
/// `2..=len()` satisfies `priority(i) >= priority(parent(i))`, so the
/// element at index 1 always has the minimum priority.
///
/// The heap is released when it is dropped.
#[derive(Debug, Clone)]
pub struct MinHeap {
    /// `capacity + 1` slots; slot 0 is reserved
    slots: Box<[HeapNode]>,
    size: usize,
}

impl MinHeap {
    /// Creates an empty heap able to hold `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailed`] if the backing storage cannot
    /// be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let alloc_failed = HeapError::AllocationFailed { capacity };
        let len = capacity.checked_add(1).ok_or(alloc_failed)?;

        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| alloc_failed)?;
        slots.resize(len, HeapNode::default());

        Ok(Self {
            slots: slots.into_boxed_slice(),
            size: 0,
        })
    }

    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the maximum number of elements the heap can hold
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns true if the next insert would fail
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Returns the node at a live index, or `None` outside `1..=len()`
    pub fn get(&self, index: usize) -> Option<&HeapNode> {
        if self.is_live(index) {
            Some(&self.slots[index])
        } else {
            None
        }
    }

    /// Live nodes in index order; element `k` of the slice is index `k + 1`
    pub fn nodes(&self) -> &[HeapNode] {
        &self.slots[1..=self.size]
    }

    /// Iterates over the live nodes in index order
    pub fn iter(&self) -> std::slice::Iter<'_, HeapNode> {
        self.nodes().iter()
    }

    /// Returns the minimum-priority node without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek_min(&self) -> Result<HeapNode, HeapError> {
        self.get(1).copied().ok_or(HeapError::Empty)
    }

    /// Inserts a node with the given priority and id
    ///
    /// # Errors
    /// Returns [`HeapError::Full`] if the heap already holds `capacity`
    /// elements. The heap is left unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, priority: Priority, id: NodeId) -> Result<(), HeapError> {
        if self.is_full() {
            debug!(
                "rejected insert of priority {priority} id {id}: heap full at capacity {}",
                self.capacity()
            );
            return Err(HeapError::Full {
                capacity: self.capacity(),
            });
        }

        self.size += 1;
        self.slots[self.size] = HeapNode::new(priority, id);
        self.float_up(self.size);
        Ok(())
    }

    /// Removes and returns the minimum-priority node
    ///
    /// The last live node takes the root slot and is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_min(&mut self) -> Result<HeapNode, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }

        let min = self.slots[1];
        self.slots[1] = self.slots[self.size];
        self.size -= 1;
        self.heapify(1);
        Ok(min)
    }

    /// Overwrites the priority of the node at a live index
    ///
    /// A smaller priority can only break the heap property towards the root,
    /// so the node floats up; an equal or larger one can only break it
    /// towards the leaves, so the node is sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidIndex`] if `index` is outside `1..=len()`.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn change_priority(&mut self, index: usize, new_priority: Priority) -> Result<(), HeapError> {
        if !self.is_live(index) {
            return Err(HeapError::InvalidIndex {
                index,
                size: self.size,
            });
        }

        let old_priority = self.slots[index].priority;
        self.slots[index].priority = new_priority;
        if new_priority < old_priority {
            trace!("priority at {index} decreased {old_priority} -> {new_priority}, floating up");
            self.float_up(index);
        } else {
            trace!("priority at {index} changed {old_priority} -> {new_priority}, sifting down");
            self.heapify(index);
        }
        Ok(())
    }

    /// Returns true if every live node's priority is at least its parent's
    pub fn is_heap(&self) -> bool {
        (2..=self.size).all(|i| self.slots[i].priority >= self.slots[parent(i)].priority)
    }

    /// Consumes the heap, returning its nodes in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<HeapNode> {
        let mut sorted = Vec::with_capacity(self.size);
        while let Ok(node) = self.extract_min() {
            sorted.push(node);
        }
        sorted
    }

    /// Writes the diagnostic dump produced by `Display` to stdout
    pub fn print_heap(&self) {
        print!("{self}");
    }

    /// Copies `values` into slots `1..=values.len()` with positional ids,
    /// without restoring the heap property
    ///
    /// Callers must follow up with [`heapify`](Self::heapify) passes.
    pub(crate) fn place_unordered(&mut self, values: &[Priority]) {
        debug_assert!(values.len() <= self.capacity());
        for (id, &priority) in values.iter().enumerate() {
            self.slots[id + 1] = HeapNode::new(priority, id);
        }
        self.size = values.len();
    }

    fn is_live(&self, index: usize) -> bool {
        (1..=self.size).contains(&index)
    }

    /// Exchanges two live slots; no effect if either index is not live
    fn swap(&mut self, i: usize, j: usize) {
        if self.is_live(i) && self.is_live(j) {
            self.slots.swap(i, j);
        }
    }

    /// Move the node at `index` towards the root while it is strictly
    /// smaller than its parent
    fn float_up(&mut self, mut index: usize) {
        while index > 1 {
            let parent = parent(index);
            if self.slots[index].priority < self.slots[parent].priority {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the node at `index` towards the leaves while a child is strictly
    /// smaller. On equal children the left one wins.
    pub(crate) fn heapify(&mut self, mut index: usize) {
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let mut smallest = index;

            if left <= self.size && self.slots[left].priority < self.slots[smallest].priority {
                smallest = left;
            }
            if right <= self.size && self.slots[right].priority < self.slots[smallest].priority {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<'a> IntoIterator for &'a MinHeap {
    type Item = &'a HeapNode;
    type IntoIter = std::slice::Iter<'a, HeapNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Diagnostic dump: a size/capacity summary followed by one
/// `index: priority [id]` line per live slot
impl fmt::Display for MinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MinHeap with size: {}", self.size)?;
        writeln!(f, "\tcapacity: {}", self.capacity())?;
        writeln!(f)?;
        writeln!(f, "index: priority [ID]")?;
        for (offset, node) in self.iter().enumerate() {
            writeln!(f, "{}: {} [{}]", offset + 1, node.priority, node.id)?;
        }
        writeln!(f)?;
        writeln!(f)
    }
}
