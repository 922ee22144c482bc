//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait for a min-heap of values (`push`, `peek`, `pop`)
//! - [`RemovableHeap`]: Extended trait adding membership tests and removal of
//!   arbitrary values
//!
//! Unlike handle-based heaps, the value itself is both the priority and the
//! key used to find it again. Callers wanting max-heap behavior wrap values in
//! [`std::cmp::Reverse`].

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// An absent element was offered for insertion
    AbsentElement,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::AbsentElement => {
                write!(f, "cannot insert an absent element into the heap")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap priority queues
///
/// # Example
///
/// ```rust
/// use indexed_min_heap::{Heap, IndexedMinHeap};
///
/// let mut heap = IndexedMinHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(Heap::pop(&mut heap), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Removes every element
    fn clear(&mut self);
}

/// Extended heap trait with removal of arbitrary values
///
/// Heaps implementing this trait keep enough bookkeeping to find any stored
/// value without scanning, which is what schedulers and shortest-path
/// searches need to cancel or replace queued entries.
///
/// # Example
///
/// ```rust
/// use indexed_min_heap::{Heap, IndexedMinHeap, RemovableHeap};
///
/// let mut heap: IndexedMinHeap<u32> = [7, 4, 9].into();
/// assert!(RemovableHeap::contains(&heap, &4));
/// assert!(RemovableHeap::remove(&mut heap, &4));
/// assert_eq!(heap.peek(), Some(&7));
/// ```
pub trait RemovableHeap<T: Ord + Hash>: Heap<T> {
    /// Returns true if at least one element equal to `item` is stored
    ///
    /// # Time Complexity
    /// O(1) expected
    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Removes one element equal to `item`, returning whether one was found
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}
