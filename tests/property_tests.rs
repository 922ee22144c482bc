//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations, replay them against
//! both the heap and a plain multiset model, and verify after every step that
//! the heap property, the position index and the observable contents all
//! agree.

use indexed_min_heap::IndexedMinHeap;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Poll,
    Remove(i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A narrow value range forces plenty of duplicates.
    prop_oneof![
        6 => (-20i32..20).prop_map(Op::Push),
        2 => Just(Op::Poll),
        3 => (-20i32..20).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Multiset of values, mirroring what the heap should hold
#[derive(Default)]
struct Model {
    counts: BTreeMap<i32, usize>,
    len: usize,
}

impl Model {
    fn push(&mut self, value: i32) {
        *self.counts.entry(value).or_default() += 1;
        self.len += 1;
    }

    fn remove(&mut self, value: i32) -> bool {
        match self.counts.get_mut(&value) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&value);
                }
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    fn min(&self) -> Option<i32> {
        self.counts.keys().next().copied()
    }

    fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }
}

fn check_state(heap: &IndexedMinHeap<i32>, model: &Model) -> Result<(), TestCaseError> {
    prop_assert!(heap.is_min_heap(0), "heap property violated");
    prop_assert!(heap.is_index_consistent(), "position index out of sync");
    prop_assert_eq!(heap.len(), model.len);
    prop_assert_eq!(heap.is_empty(), model.len == 0);
    prop_assert_eq!(heap.peek().copied(), model.min());
    for (value, count) in &model.counts {
        prop_assert!(heap.contains(value));
        prop_assert_eq!(heap.occurrences(value), *count);
    }
    Ok(())
}

/// Replay `ops` against the heap and the model, checking after every step
fn run_ops(mut heap: IndexedMinHeap<i32>, mut model: Model, ops: Vec<Op>) -> Result<(), TestCaseError> {
    check_state(&heap, &model)?;

    for op in ops {
        match op {
            Op::Push(value) => {
                heap.push(value);
                model.push(value);
                prop_assert!(heap.contains(&value));
            }
            Op::Poll => {
                let expected = model.min();
                if let Some(value) = expected {
                    model.remove(value);
                }
                prop_assert_eq!(heap.poll(), expected);
            }
            Op::Remove(value) => {
                let expected = model.remove(value);
                prop_assert_eq!(heap.remove(&value), expected);
                prop_assert_eq!(heap.contains(&value), model.counts.contains_key(&value));
            }
            Op::Clear => {
                heap.clear();
                model.clear();
            }
        }
        check_state(&heap, &model)?;
    }

    Ok(())
}

fn model_of(values: &[i32]) -> Model {
    let mut model = Model::default();
    for &value in values {
        model.push(value);
    }
    model
}

proptest! {
    #[test]
    fn test_random_ops_from_empty(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_ops(IndexedMinHeap::new(), Model::default(), ops)?;
    }

    #[test]
    fn test_random_ops_after_heapify(
        initial in prop::collection::vec(-20i32..20, 0..100),
        ops in prop::collection::vec(op_strategy(), 0..100)
    ) {
        let model = model_of(&initial);
        run_ops(IndexedMinHeap::from_vec(initial), model, ops)?;
    }

    #[test]
    fn test_random_ops_after_collection(
        initial in prop::collection::vec(-20i32..20, 0..100),
        ops in prop::collection::vec(op_strategy(), 0..100)
    ) {
        let model = model_of(&initial);
        run_ops(IndexedMinHeap::from_collection(initial), model, ops)?;
    }

    #[test]
    fn test_drain_is_sorted(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = IndexedMinHeap::from_vec(values.clone());
        let drained: Vec<i32> = std::iter::from_fn(|| heap.poll()).collect();

        let mut sorted = values;
        sorted.sort_unstable();
        prop_assert_eq!(drained, sorted);
        prop_assert!(heap.is_empty());
        prop_assert_eq!(heap.poll(), None);
    }

    #[test]
    fn test_heapify_matches_repeated_push(values in prop::collection::vec(-50i32..50, 0..200)) {
        let mut heapified = IndexedMinHeap::from_vec(values.clone());
        let mut pushed = IndexedMinHeap::from_collection(values);

        prop_assert!(heapified.is_min_heap(0));
        prop_assert!(heapified.is_index_consistent());

        let a: Vec<i32> = std::iter::from_fn(|| heapified.poll()).collect();
        let b: Vec<i32> = std::iter::from_fn(|| pushed.poll()).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_round_trip(value in -1000i32..1000, copies in 1usize..30, others in prop::collection::vec(-1000i32..1000, 0..50)) {
        let mut heap = IndexedMinHeap::from_vec(others.clone());
        let base = others.iter().filter(|&&v| v == value).count();

        for _ in 0..copies {
            heap.push(value);
        }
        prop_assert_eq!(heap.occurrences(&value), base + copies);

        let len_before = heap.len();
        for removed in 1..=copies {
            prop_assert!(heap.remove(&value));
            prop_assert_eq!(heap.contains(&value), base + copies - removed > 0);
            prop_assert!(heap.is_min_heap(0));
            prop_assert!(heap.is_index_consistent());
        }
        prop_assert_eq!(heap.len(), len_before - copies);
        prop_assert_eq!(heap.occurrences(&value), base);
    }

    #[test]
    fn test_remove_every_inserted_value(values in prop::collection::vec(-30i32..30, 0..150)) {
        let mut heap = IndexedMinHeap::from_collection(values.clone());

        for (removed, value) in values.iter().enumerate() {
            prop_assert!(heap.remove(value));
            prop_assert_eq!(heap.len(), values.len() - removed - 1);
            prop_assert!(heap.is_min_heap(0));
            prop_assert!(heap.is_index_consistent());
        }
        prop_assert!(heap.is_empty());
    }
}
