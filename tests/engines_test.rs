// Integration tests for the sorting and partition engines

use algostep::dataset::{Container, InitOrder};
use algostep::engine::bubble::BubbleSort;
use algostep::engine::insertion::InsertionSort;
use algostep::engine::partition::Partition;
use algostep::engine::quick::QuickSort;
use algostep::engine::selection::SelectionSort;
use algostep::engine::shell::{gap_sequence, ShellSort};
use algostep::engine::{build, Counters, EngineError, StepEngine, StepResult, Variant};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SORTS: [Variant; 5] = [
    Variant::Bubble,
    Variant::Selection,
    Variant::Insertion,
    Variant::Shell,
    Variant::Quick,
];

/// Step `engine` to completion, returning every step result
fn run(engine: &mut dyn StepEngine) -> Vec<StepResult> {
    let mut results = Vec::new();
    while !engine.is_done() {
        results.push(engine.step().expect("step before done failed"));
        assert!(results.len() < 1_000_000, "engine never finished");
    }
    results
}

fn sort_engine(variant: Variant, values: &[i32]) -> Box<dyn StepEngine> {
    let data = Container::from_values(values);
    match variant {
        Variant::Bubble => Box::new(BubbleSort::new(data)),
        Variant::Selection => Box::new(SelectionSort::new(data)),
        Variant::Insertion => Box::new(InsertionSort::new(data)),
        Variant::Shell => Box::new(ShellSort::new(data)),
        Variant::Quick => Box::new(QuickSort::new(data)),
        other => panic!("{} is not a sort", other),
    }
}

fn counters_monotone(results: &[StepResult]) -> bool {
    results.windows(2).all(|w| {
        let (a, b): (Counters, Counters) = (w[0].counters, w[1].counters);
        a.comparisons <= b.comparisons && a.swaps <= b.swaps && a.copies <= b.copies
    })
}

#[test]
fn test_every_sort_every_preset() {
    let mut rng = StdRng::seed_from_u64(2024);
    for variant in SORTS {
        for size in [variant.small_size(), variant.large_size()] {
            for order in [InitOrder::Random, InitOrder::ReverseSorted] {
                let mut engine = build(variant, size, order, &mut rng).expect("build failed");
                let before = engine.snapshot();
                let results = run(engine.as_mut());
                let after = engine.snapshot();

                assert!(after.is_sorted(), "{} {} {:?}", variant, size, order);
                assert_eq!(after.occupied(), size);
                let mut expected = before.values();
                expected.sort_unstable();
                assert_eq!(after.values(), expected);
                assert!(counters_monotone(&results));
                assert_eq!(engine.step(), Err(EngineError::Finished));
            }
        }
    }
}

#[test]
fn test_bubble_exact_counts() {
    let mut engine = BubbleSort::new(Container::from_values(&[3, 1, 2]));
    run(&mut engine);
    let counters = engine.snapshot().counters;
    assert_eq!((counters.comparisons, counters.swaps), (3, 2));

    let mut engine = BubbleSort::new(Container::from_values(&[5, 3, 1]));
    run(&mut engine);
    let counters = engine.snapshot().counters;
    assert_eq!((counters.comparisons, counters.swaps), (3, 3));
}

#[test]
fn test_reverse_order_is_strictly_decreasing() {
    let mut rng = StdRng::seed_from_u64(0);
    let engine = build(Variant::Bubble, 100, InitOrder::ReverseSorted, &mut rng).unwrap();
    let values = engine.snapshot().values();
    assert!(values.windows(2).all(|w| w[0] > w[1]));
}

/// Recursive rightmost-pivot quicksort recording each partitioned range
fn reference_quicksort(
    values: &mut [i32],
    left: isize,
    right: isize,
    visited: &mut Vec<(usize, usize)>,
) {
    if right - left <= 0 {
        return;
    }
    visited.push((left as usize, right as usize));
    let pivot = values[right as usize];
    let mut left_scan = left - 1;
    let mut right_scan = right;
    loop {
        loop {
            left_scan += 1;
            if values[left_scan as usize] >= pivot {
                break;
            }
        }
        loop {
            if right_scan <= left {
                break;
            }
            right_scan -= 1;
            if values[right_scan as usize] <= pivot {
                break;
            }
        }
        if left_scan < right_scan {
            values.swap(left_scan as usize, right_scan as usize);
        } else {
            break;
        }
    }
    values.swap(left_scan as usize, right as usize);
    reference_quicksort(values, left, left_scan - 1, visited);
    reference_quicksort(values, left_scan + 1, right, visited);
}

#[test]
fn test_quicksort_matches_recursive_order() {
    let mut rng = StdRng::seed_from_u64(77);
    for size in [2, 5, 12, 100] {
        let data = Container::random(size, &mut rng);
        let mut values = data.values();
        let mut engine = QuickSort::new(data);
        run(&mut engine);

        let mut visited = Vec::new();
        reference_quicksort(&mut values, 0, size as isize - 1, &mut visited);
        assert_eq!(engine.partitions_visited(), visited.as_slice());
        assert_eq!(engine.snapshot().values(), values);
    }
}

#[test]
fn test_shell_visits_expected_gaps() {
    assert_eq!(gap_sequence(100), vec![40, 13, 4, 1]);
    assert_eq!(gap_sequence(10), vec![4, 1]);

    let mut rng = StdRng::seed_from_u64(5);
    let mut engine = ShellSort::new(Container::random(100, &mut rng));
    let mut gaps = vec![engine.gap()];
    while !engine.is_done() {
        engine.step().unwrap();
        if !engine.is_done() && gaps.last() != Some(&engine.gap()) {
            gaps.push(engine.gap());
        }
    }
    assert_eq!(gaps, vec![40, 13, 4, 1]);
}

#[test]
fn test_partition_random_presets() {
    let mut rng = StdRng::seed_from_u64(31);
    for size in [12, 100] {
        for order in [InitOrder::Random, InitOrder::ReverseSorted] {
            let data = Container::generate(size, order, &mut rng);
            let mut engine = Partition::with_random_pivot(data, &mut rng);
            run(&mut engine);
            let values = engine.snapshot().values();
            let split = engine.partition().expect("partition index recorded");
            let pivot = engine.pivot();
            assert!(values[..split].iter().all(|&v| v <= pivot));
            assert!(values[split + 1..].iter().all(|&v| v >= pivot));
        }
    }
}

proptest! {
    #[test]
    fn prop_sorts_sort(values in prop::collection::vec(0i32..200, 1..40), pick in 0usize..5) {
        let variant = SORTS[pick];
        let mut engine = sort_engine(variant, &values);
        let results = run(engine.as_mut());
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(engine.snapshot().values(), expected);
        prop_assert!(counters_monotone(&results));
    }

    #[test]
    fn prop_partition_splits(values in prop::collection::vec(0i32..200, 1..40), pivot in 70i32..130) {
        let mut engine = Partition::new(Container::from_values(&values), pivot);
        run(&mut engine);
        let result = engine.snapshot().values();
        let split = engine.partition().unwrap();
        prop_assert!(result[..split].iter().all(|&v| v <= pivot));
        prop_assert!(result[split + 1..].iter().all(|&v| v >= pivot));
    }
}
