//! Indexed Binary Min-Heap implementation
//!
//! A binary min-heap that additionally keeps a reverse index from each stored
//! value to the set of array positions holding it. The index lets the heap
//! answer `contains` in O(1) and remove an arbitrary value in O(log n),
//! including values stored more than once.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`             | O(log n)   |
//! | `poll`             | O(log n)   |
//! | `peek`             | O(1)       |
//! | `contains`         | O(1)       |
//! | `remove`           | O(log n)   |
//! | `from_vec`         | O(n)       |
//! | `from_collection`  | O(n log n) |
//!
//! # Duplicates
//!
//! Equal values are tracked together. `remove` takes out the copy at the
//! highest array position currently recorded for that value; callers should
//! not rely on which copy goes beyond that.
//!
//! # Example
//!
//! ```rust
//! use indexed_min_heap::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! for value in [5, 3, 8, 1, 4] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert!(heap.remove(&4));
//! assert!(!heap.contains(&4));
//!
//! assert_eq!(heap.poll(), Some(1));
//! assert_eq!(heap.poll(), Some(3));
//! assert_eq!(heap.poll(), Some(5));
//! assert_eq!(heap.poll(), Some(8));
//! assert_eq!(heap.poll(), None);
//! ```

use crate::traits::{Heap, HeapError, RemovableHeap};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

/// Maps every distinct value to the ascending set of positions holding it
#[derive(Clone)]
struct PositionIndex<T> {
    positions: FxHashMap<T, BTreeSet<usize>>,
}

impl<T: Hash + Eq> PositionIndex<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    fn insert(&mut self, value: T, position: usize) {
        self.positions.entry(value).or_default().insert(position);
    }

    /// Drops `position` from the entry for `value`, and the entry itself once empty
    fn remove<Q>(&mut self, value: &Q, position: usize)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(set) = self.positions.get_mut(value) {
            set.remove(&position);
            if set.is_empty() {
                self.positions.remove(value);
            }
        }
    }

    /// Records that `a` moved from `a_pos` to `b_pos` and `b` from `b_pos` to `a_pos`
    fn swap(&mut self, a: &T, b: &T, a_pos: usize, b_pos: usize) {
        // Equal values share one position set, which already holds both positions.
        if a == b {
            return;
        }
        if let Some(set) = self.positions.get_mut(a) {
            set.remove(&a_pos);
            set.insert(b_pos);
        }
        if let Some(set) = self.positions.get_mut(b) {
            set.remove(&b_pos);
            set.insert(a_pos);
        }
    }

    /// Highest position recorded for `value`
    fn last<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(value)
            .and_then(|set| set.last().copied())
    }

    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(value)
    }

    fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(value).map_or(0, BTreeSet::len)
    }

    fn clear(&mut self) {
        self.positions.clear();
    }
}

/// A binary min-heap with a value-to-position index
///
/// Elements must implement `Ord` for heap ordering and `Hash + Eq` so they can
/// key the position index. `Eq` must agree with `Ord`: two values comparing
/// `Equal` must also be `==`. Each stored value is cloned once into the index.
///
/// Use [`std::cmp::Reverse`] for max-heap behavior.
#[derive(Clone)]
pub struct IndexedMinHeap<T> {
    /// Implicit binary tree: children of `k` live at `2k + 1` and `2k + 2`
    heap: Vec<T>,
    index: PositionIndex<T>,
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// The capacity is only a hint to avoid early reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
        }
    }

    /// Builds a heap from a vector in O(n)
    ///
    /// Every element keeps its input position and is indexed there, then the
    /// heap property is restored bottom-up by sinking each internal node from
    /// the last parent down to the root.
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut index = PositionIndex::with_capacity(elements.len());
        for (position, item) in elements.iter().enumerate() {
            index.insert(item.clone(), position);
        }

        let mut heap = Self {
            heap: elements,
            index,
        };
        for position in (0..heap.heap.len() / 2).rev() {
            heap.sink(position);
        }
        heap
    }

    /// Builds a heap by pushing each element in turn, O(n log n)
    pub fn from_collection<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let iter = elements.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0.max(1));
        for item in iter {
            heap.push(item);
        }
        heap
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Returns the minimum element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty
    pub fn poll(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Returns true if at least one element equal to `item` is stored
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(item)
    }

    /// Returns how many elements equal to `item` are stored
    pub fn occurrences<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.count(item)
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        let position = self.heap.len();
        self.index.insert(item.clone(), position);
        self.heap.push(item);
        self.swim(position);
    }

    /// Inserts an element that may be absent
    ///
    /// # Errors
    /// Returns [`HeapError::AbsentElement`] for `None`; the heap is left unchanged.
    ///
    /// ```rust
    /// use indexed_min_heap::{HeapError, IndexedMinHeap};
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// assert_eq!(heap.try_push(Some(4)), Ok(()));
    /// assert_eq!(heap.try_push(None), Err(HeapError::AbsentElement));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn try_push(&mut self, item: Option<T>) -> Result<(), HeapError> {
        let item = item.ok_or(HeapError::AbsentElement)?;
        self.push(item);
        Ok(())
    }

    /// Removes one element equal to `item`, returning whether one was found
    ///
    /// When the value is stored more than once, the copy at the highest
    /// recorded position is removed.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.last(item) {
            Some(position) => self.remove_at(position).is_some(),
            None => false,
        }
    }

    /// Recursively checks the heap property for the subtree rooted at `k`
    ///
    /// Intended for tests and validation; `is_min_heap(0)` checks the whole heap.
    pub fn is_min_heap(&self, k: usize) -> bool {
        let len = self.heap.len();
        if k >= len {
            return true;
        }

        let left = 2 * k + 1;
        let right = 2 * k + 2;

        if left < len && self.heap[k] > self.heap[left] {
            return false;
        }
        if right < len && self.heap[k] > self.heap[right] {
            return false;
        }

        self.is_min_heap(left) && self.is_min_heap(right)
    }

    /// Checks that the position index exactly describes the heap array
    ///
    /// Every indexed position must be live and hold its key, no key may map to
    /// an empty set, and the total number of indexed positions must equal
    /// `len()`. Intended for tests and validation.
    pub fn is_index_consistent(&self) -> bool {
        let len = self.heap.len();
        let mut indexed = 0;

        for (value, positions) in &self.index.positions {
            if positions.is_empty() {
                return false;
            }
            if positions
                .iter()
                .any(|&position| position >= len || self.heap[position] != *value)
            {
                return false;
            }
            indexed += positions.len();
        }

        indexed == len
    }

    /// Removes the element at `position`, O(log n)
    fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.heap.len() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(position, last);

        let removed = self.heap.pop()?;
        self.index.remove(&removed, last);

        if position != last && !self.sink(position) {
            self.swim(position);
        }

        Some(removed)
    }

    /// Moves the element at `k` up while it is smaller than its parent
    ///
    /// Returns true if the element moved.
    fn swim(&mut self, mut k: usize) -> bool {
        let start = k;
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.heap[k] >= self.heap[parent] {
                break;
            }
            self.swap(parent, k);
            k = parent;
        }
        k != start
    }

    /// Moves the element at `k` down while it is larger than its smaller child
    ///
    /// Returns true if the element moved.
    fn sink(&mut self, mut k: usize) -> bool {
        let start = k;
        let len = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let smallest = if right < len && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };

            if self.heap[k] <= self.heap[smallest] {
                break;
            }

            self.swap(smallest, k);
            k = smallest;
        }
        k != start
    }

    /// Swaps two live positions in both the array and the index
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i, j);
        // heap[j] is the element that was at i
        self.index.swap(&self.heap[j], &self.heap[i], i, j);
    }
}

impl<T: Ord + Hash + Clone> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("heap", &self.heap)
            .field("distinct", &self.index.positions.len())
            .finish()
    }
}

impl<T: Ord + Hash + Clone> From<Vec<T>> for IndexedMinHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Ord + Hash + Clone, const N: usize> From<[T; N]> for IndexedMinHeap<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_collection(iter)
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord + Hash + Clone> Heap<T> for IndexedMinHeap<T> {
    fn new() -> Self {
        IndexedMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        IndexedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }

    fn push(&mut self, item: T) {
        IndexedMinHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        IndexedMinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        self.poll()
    }

    fn clear(&mut self) {
        IndexedMinHeap::clear(self)
    }
}

impl<T: Ord + Hash + Clone> RemovableHeap<T> for IndexedMinHeap<T> {
    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        IndexedMinHeap::contains(self, item)
    }

    fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        IndexedMinHeap::remove(self, item)
    }
}
