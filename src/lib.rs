//! Indexed Min-Heap for Rust
//!
//! This crate provides a binary min-heap priority queue that, besides the usual
//! insert / peek / extract-min operations, can find and remove *arbitrary*
//! elements by value in O(log n), including values stored more than once.
//!
//! # Features
//!
//! - **O(1) membership**: `contains` answers from a value-to-position index
//! - **O(log n) removal by value**: no linear scan of the heap array
//! - **Duplicate-aware**: equal values are tracked at every position they occupy
//! - **O(n) bulk construction**: `from_vec` heapifies an existing vector in place
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::from_vec(vec![5, 3, 8, 1, 4]);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! assert!(heap.remove(&3));
//! assert!(!heap.contains(&3));
//!
//! assert_eq!(heap.poll(), Some(1));
//! assert_eq!(heap.poll(), Some(4));
//! ```
//!
//! For max-heap ordering, store [`std::cmp::Reverse`] values.

pub mod indexed;
pub mod traits;

// Re-export the main types for convenience
pub use indexed::IndexedMinHeap;
pub use traits::{Heap, HeapError, RemovableHeap};
