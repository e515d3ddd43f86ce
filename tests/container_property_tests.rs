//! Property-based testing for List and Queue
//!
//! Every property checks a container against the `Vec` / `VecDeque` model it
//! is supposed to behave like.

use collectkit::{List, Queue};
use proptest::prelude::*;
use std::collections::VecDeque;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Sequences of queue operations
#[derive(Debug, Clone)]
pub enum QueueOp {
    Enqueue(i32),
    Dequeue,
    Peek,
    RemoveMultiplesOf(i32),
    Clear,
}

fn queue_ops_strategy() -> impl Strategy<Value = Vec<QueueOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => any::<i32>().prop_map(QueueOp::Enqueue),
            2 => Just(QueueOp::Dequeue),
            1 => Just(QueueOp::Peek),
            1 => (2..5i32).prop_map(QueueOp::RemoveMultiplesOf),
            1 => Just(QueueOp::Clear),
        ],
        0..500,
    )
}

fn short_string_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// LIST PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_list_length_invariant(
        elements in prop::collection::vec(any::<i32>(), 0..2000)
    ) {
        let mut list = List::new();
        for &elem in &elements {
            list.push(elem);
        }

        prop_assert_eq!(list.len(), elements.len());
        prop_assert_eq!(list.is_empty(), elements.is_empty());
        prop_assert_eq!(list.to_vec(), elements);
    }

    #[test]
    fn prop_list_remove_where_matches_retain(
        elements in prop::collection::vec(any::<i16>(), 0..1000),
        divisor in 2..7i16
    ) {
        let original_len = elements.len();
        let mut list = List::from(elements.clone());
        let mut model = elements;
        model.retain(|v| v % divisor != 0);

        let removed = list.remove_where(|v| v % divisor == 0);
        prop_assert_eq!(removed, original_len - model.len());
        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(list.as_slice(), model.as_slice());
    }

    #[test]
    fn prop_list_json_round_trip(
        elements in prop::collection::vec(short_string_strategy(), 0..200)
    ) {
        let list = List::from(elements.clone());
        let json = list.to_json().unwrap();
        prop_assert_eq!(&json, &serde_json::to_string(&elements).unwrap());

        let decoded: List<String> = List::from_json(&json).unwrap();
        prop_assert_eq!(decoded, list);
    }

    #[test]
    fn prop_list_sort_is_stable(
        elements in prop::collection::vec((0..10u8, any::<u32>()), 0..500)
    ) {
        let mut list = List::from(elements.clone());
        list.sort_by(|a, b| a.0.cmp(&b.0));

        let mut model = elements;
        model.sort_by(|a, b| a.0.cmp(&b.0));
        prop_assert_eq!(list.into_vec(), model);
    }

    #[test]
    fn prop_list_chunks_concatenate_back(
        elements in prop::collection::vec(any::<u8>(), 1..500),
        size in 1..64usize
    ) {
        let list = List::from(elements.clone());
        let chunks = list.chunk(size);

        prop_assert_eq!(chunks.len(), (elements.len() + size - 1) / size);
        for chunk in chunks.iter().take(chunks.len() - 1) {
            prop_assert_eq!(chunk.len(), size);
        }
        let joined: Vec<u8> = chunks.into_iter().flat_map(List::into_vec).collect();
        prop_assert_eq!(joined, elements);
    }

    #[test]
    fn prop_list_compact_has_no_adjacent_duplicates(
        elements in prop::collection::vec(0..4u8, 0..300)
    ) {
        let mut list = List::from(elements.clone());
        list.compact();

        let mut model = elements;
        model.dedup();
        prop_assert_eq!(list.as_slice(), model.as_slice());
        prop_assert!(list.as_slice().windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn prop_list_extremum_is_first_of_ties(
        elements in prop::collection::vec((0..5u8, any::<u16>()), 1..200)
    ) {
        let list = List::from(elements.clone());
        let min = list.min_by(|a, b| a.0.cmp(&b.0));
        let max = list.max_by(|a, b| a.0.cmp(&b.0));

        let min_key = elements.iter().map(|e| e.0).min().unwrap();
        let max_key = elements.iter().map(|e| e.0).max().unwrap();
        prop_assert_eq!(min, elements.iter().find(|e| e.0 == min_key).unwrap());
        prop_assert_eq!(max, elements.iter().find(|e| e.0 == max_key).unwrap());
    }

    #[test]
    fn prop_list_sub_matches_slice(
        elements in prop::collection::vec(any::<i64>(), 0..300),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>()
    ) {
        let list = List::from(elements.clone());
        let (mut from, mut to) = (a.index(elements.len() + 1), b.index(elements.len() + 1));
        if from > to {
            std::mem::swap(&mut from, &mut to);
        }
        let sub = list.sub(from, to);
        prop_assert_eq!(sub.as_slice(), &elements[from..to]);
    }
}

// =============================================================================
// QUEUE PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_queue_matches_vecdeque(ops in queue_ops_strategy()) {
        let mut queue = Queue::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Enqueue(value) => {
                    prop_assert!(queue.enqueue(value));
                    model.push_back(value);
                }
                QueueOp::Dequeue => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front());
                }
                QueueOp::Peek => {
                    prop_assert_eq!(queue.peek(), model.front());
                }
                QueueOp::RemoveMultiplesOf(divisor) => {
                    let before = model.len();
                    model.retain(|v| v % divisor != 0);
                    prop_assert_eq!(
                        queue.remove_where(|v| v % divisor == 0),
                        before - model.len()
                    );
                }
                QueueOp::Clear => {
                    queue.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        prop_assert_eq!(queue.to_vec(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_queue_enqueue_after_remove_keeps_order(
        elements in prop::collection::vec(0..20u32, 0..300),
        target in 0..20u32,
        tail in prop::collection::vec(any::<u32>(), 0..20)
    ) {
        let mut queue = Queue::from(elements.clone());
        queue.remove(&target);
        queue.enqueue_all(tail.iter().copied());

        let mut model: Vec<u32> = elements.into_iter().filter(|v| *v != target).collect();
        model.extend(tail);
        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.into_iter().collect::<Vec<_>>(), model);
    }

    #[test]
    fn prop_queue_json_round_trip(
        elements in prop::collection::vec(any::<i64>(), 0..300)
    ) {
        let queue = Queue::from(elements.clone());
        let json = queue.to_json().unwrap();
        prop_assert_eq!(&json, &serde_json::to_string(&elements).unwrap());

        let mut decoded: Queue<i64> = Queue::new();
        decoded.load_json(&json).unwrap();
        prop_assert_eq!(decoded.to_vec(), elements);
    }
}
