//! Stress tests that push the heap through large deterministic workloads
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use fixed_min_heap::{BuildStrategy, HeapError, HeapNode, MinHeap, NodeId, Priority};

/// Deterministic pseudo-random priorities (64-bit LCG)
fn lcg_values(seed: u64, n: usize, modulus: i32) -> Vec<Priority> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % modulus as u64) as Priority
        })
        .collect()
}

fn assert_extracts_sorted(heap: MinHeap) {
    let mut last = Priority::MIN;
    for node in heap.into_sorted_vec() {
        assert!(
            node.priority >= last,
            "extracted priority {} after {}",
            node.priority,
            last
        );
        last = node.priority;
    }
}

#[test]
fn test_massive_operations() {
    let mut heap = MinHeap::with_capacity(10_000).unwrap();

    for i in 0..10_000 {
        heap.insert(i, i as NodeId).unwrap();
    }
    assert!(heap.is_full());
    assert!(heap.insert(-1, 0).is_err());

    for i in 0..10_000 {
        assert_eq!(heap.extract_min(), Ok(HeapNode::new(i, i as NodeId)));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_random_insert_extract() {
    let values = lcg_values(0x5eed, 5_000, 1_000);
    let mut heap = MinHeap::with_capacity(values.len()).unwrap();
    for (id, &priority) in values.iter().enumerate() {
        heap.insert(priority, id).unwrap();
    }
    assert!(heap.is_heap());
    assert_extracts_sorted(heap);
}

#[test]
fn test_alternating_ops() {
    let mut heap = MinHeap::with_capacity(256).unwrap();

    // Insert-insert-extract keeps the heap growing by one per round
    for i in 0..200 {
        heap.insert(i * 2, i as NodeId).unwrap();
        heap.insert(i * 2 + 1, i as NodeId + 1000).unwrap();
        assert!(heap.extract_min().is_ok());
        assert!(heap.is_heap());
    }
    assert_eq!(heap.len(), 200);

    assert_extracts_sorted(heap);
}

#[test]
fn test_fill_drain_cycles() {
    let mut heap = MinHeap::with_capacity(64).unwrap();

    for round in 0..50 {
        let values = lcg_values(round, 64, 500);
        for (id, &priority) in values.iter().enumerate() {
            heap.insert(priority, id).unwrap();
        }
        assert_eq!(
            heap.insert(0, 64),
            Err(HeapError::Full { capacity: 64 })
        );

        let mut expected = values.clone();
        expected.sort_unstable();
        for priority in expected {
            assert_eq!(heap.extract_min().map(|n| n.priority), Ok(priority));
        }
        assert_eq!(heap.extract_min(), Err(HeapError::Empty));
    }
}

#[test]
fn test_many_priority_changes() {
    let values = lcg_values(7, 2_000, 10_000);
    let mut heap = MinHeap::build_bottom_up(&values).unwrap();
    let changes = lcg_values(11, 4_000, 20_000);

    for (step, &delta) in changes.iter().enumerate() {
        let index = step % heap.len() + 1;
        heap.change_priority(index, delta - 10_000).unwrap();
        if step % 97 == 0 {
            assert!(heap.is_heap());
        }
    }
    assert!(heap.is_heap());
    assert_extracts_sorted(heap);
}

#[test]
fn test_decrease_every_leaf_to_root() {
    let values: Vec<Priority> = (0..1023).collect();
    let mut heap = MinHeap::build_bottom_up(&values).unwrap();

    for k in 0..512 {
        let last = heap.len();
        heap.change_priority(last, -1 - k).unwrap();
        assert_eq!(heap.peek_min().map(|n| n.priority), Ok(-1 - k));
    }
    assert!(heap.is_heap());
}

#[test]
fn test_large_builds_agree() {
    for (seed, modulus) in [(1, 10), (2, 1_000), (3, i32::MAX)] {
        let values = lcg_values(seed, 20_000, modulus);
        let top_down = MinHeap::build(&values, BuildStrategy::TopDown).unwrap();
        let bottom_up = MinHeap::build(&values, BuildStrategy::BottomUp).unwrap();
        assert!(top_down.is_heap());
        assert!(bottom_up.is_heap());

        let td: Vec<_> = top_down.into_sorted_vec().into_iter().map(|n| n.priority).collect();
        let bu: Vec<_> = bottom_up.into_sorted_vec().into_iter().map(|n| n.priority).collect();
        assert_eq!(td, bu);
    }
}

#[test]
fn test_all_equal_priorities() {
    let values = vec![7; 1000];
    for strategy in [BuildStrategy::TopDown, BuildStrategy::BottomUp] {
        let heap = MinHeap::build(&values, strategy).unwrap();
        // Nothing moves when every priority ties
        let ids: Vec<_> = heap.iter().map(|n| n.id).collect();
        assert_eq!(ids, (0..1000).collect::<Vec<_>>());
        assert!(heap.into_sorted_vec().iter().all(|n| n.priority == 7));
    }
}
