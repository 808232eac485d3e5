// Step-sequence tests for every catalog algorithm

use sortty::SortError;
use sortty::algorithms::bogo::BogoSteps;
use sortty::algorithms::catalog::Catalog;
use sortty::algorithms::{Step, StepKind, is_sorted};

const DETERMINISTIC: [&str; 9] = [
    "bubble",
    "insertion",
    "selection",
    "merge",
    "quick",
    "heap",
    "counting",
    "radix",
    "bucket",
];

fn steps_for(id: &str, input: &[i32]) -> Vec<Step> {
    let catalog = Catalog::builtin();
    catalog
        .lookup(id)
        .expect("registered algorithm")
        .producer(input)
        .expect("producer creation failed")
        .collect()
}

/// Apply every step to a working copy, asserting compare steps change nothing
fn replay(input: &[i32], steps: &[Step]) -> Vec<i32> {
    let mut array = input.to_vec();
    for step in steps {
        let before = array.clone();
        step.apply_to(&mut array);
        match step.kind() {
            StepKind::Compare => {
                assert!(step.array().is_none());
                assert_eq!(array, before, "compare step changed the array");
            }
            StepKind::Set | StepKind::Swap => assert!(step.array().is_some()),
        }
        assert!(matches!(step.indices().len(), 1 | 2));
        assert!(step.indices().iter().all(|&i| i < input.len()));
    }
    array
}

fn count(steps: &[Step], kind: StepKind) -> usize {
    steps.iter().filter(|s| s.kind() == kind).count()
}

fn sorted(input: &[i32]) -> Vec<i32> {
    let mut v = input.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn test_bubble_scenario() {
    let input = [5, 3, 8, 1];
    let steps = steps_for("bubble", &input);

    assert_eq!(steps[0], Step::compare(0, 1));
    assert_eq!(steps[1], Step::swap(0, 1, &[3, 5, 8, 1]));
    assert_eq!(steps[2], Step::compare(1, 2));
    assert_eq!(steps[3], Step::compare(2, 3));
    assert_eq!(steps[4], Step::swap(2, 3, &[3, 5, 1, 8]));

    assert_eq!(replay(&input, &steps), vec![1, 3, 5, 8]);
    // The last pass makes no swap
    assert_eq!(steps.last().map(Step::kind), Some(StepKind::Compare));
}

#[test]
fn test_counting_scenario() {
    let input = [4, 0, 0, 3];
    let steps = steps_for("counting", &input);

    assert!(steps.iter().all(|s| s.kind() == StepKind::Set));
    let written: Vec<i32> = steps
        .iter()
        .map(|s| s.array().unwrap()[s.indices()[0]])
        .collect();
    assert_eq!(written, vec![0, 0, 3, 4]);
    assert_eq!(replay(&input, &steps), vec![0, 0, 3, 4]);
}

#[test]
fn test_equal_values_stay_put() {
    let input = [2, 2, 2];
    for id in DETERMINISTIC {
        let steps = steps_for(id, &input);
        let mut array = input.to_vec();
        for step in &steps {
            step.apply_to(&mut array);
            assert_eq!(array, vec![2, 2, 2], "{} disturbed equal values", id);
        }
    }

    let bubble = steps_for("bubble", &input);
    assert_eq!(count(&bubble, StepKind::Compare), 2);
    assert_eq!(count(&bubble, StepKind::Swap), 0);
}

#[test]
fn test_every_deterministic_algorithm_sorts() {
    let inputs: [&[i32]; 6] = [
        &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        &[0, 1, 2, 3, 4, 5],
        &[80, 0, 80, 0, 40],
        &[17, 3, 66, 3, 25, 80, 1, 49, 12, 12, 0, 71],
        &[1, 0],
        &[42],
    ];

    for id in DETERMINISTIC {
        for input in inputs {
            let steps = steps_for(id, input);
            let result = replay(input, &steps);
            assert_eq!(result, sorted(input), "{} on {:?}", id, input);
        }
    }
}

#[test]
fn test_replay_is_deterministic() {
    let input = [12, 7, 30, 7, 1, 55, 0];
    for id in DETERMINISTIC {
        assert_eq!(steps_for(id, &input), steps_for(id, &input), "{}", id);
    }
}

#[test]
fn test_producers_do_not_touch_the_input() {
    let input = vec![3, 1, 2];
    let catalog = Catalog::builtin();
    for descriptor in catalog.entries() {
        let producer = descriptor.producer(&input).unwrap();
        let _ = producer.take(50).count();
        assert_eq!(input, vec![3, 1, 2]);
    }
}

#[test]
fn test_quadratic_sorts_compare_bound() {
    let input: Vec<i32> = (0..30).rev().collect();
    let n = input.len();
    for id in ["bubble", "insertion", "selection"] {
        let steps = steps_for(id, &input);
        assert!(
            count(&steps, StepKind::Compare) <= n * (n - 1) / 2,
            "{} exceeded n(n-1)/2 comparisons",
            id
        );
    }
}

#[test]
fn test_merge_work_is_n_log_n() {
    let input: Vec<i32> = (0..64).map(|i| (i * 37 + 11) % 81).collect();
    let steps = steps_for("merge", &input);
    let work = count(&steps, StepKind::Compare) + count(&steps, StepKind::Set);

    // 64 elements, 6 levels
    assert_eq!(count(&steps, StepKind::Set), 64 * 6);
    assert!(work <= 2 * 64 * 6);
}

#[test]
fn test_merge_interleaves_across_recursion() {
    let catalog = Catalog::builtin();
    let mut producer = catalog
        .lookup("merge")
        .unwrap()
        .producer(&[8, 7, 6, 5, 4, 3, 2, 1])
        .unwrap();

    // The first merge completes before the right half has been looked at
    let first: Vec<Step> = producer.by_ref().take(3).collect();
    assert_eq!(first[0], Step::compare(0, 1));
    assert!(first.iter().all(|s| s.indices().iter().all(|&i| i < 2)));
    assert_eq!(producer.pulled(), 3);
    assert!(!producer.is_exhausted());
}

#[test]
fn test_negative_input_fails_counting_and_radix() {
    let catalog = Catalog::builtin();
    for id in ["counting", "radix"] {
        let err = catalog.lookup(id).unwrap().producer(&[5, -3]).unwrap_err();
        assert!(matches!(
            err,
            SortError::NegativeValue {
                index: 1,
                value: -3,
                ..
            }
        ));
    }
}

#[test]
fn test_bogo_terminates_sorted() {
    let input = [4, 1, 3, 2];
    for seed in 0..5 {
        let steps: Vec<Step> = BogoSteps::with_seed(&input, seed).collect();
        assert!(steps.iter().all(|s| s.kind() == StepKind::Swap));
        let result = replay(&input, &steps);
        assert!(is_sorted(&result));
        assert_eq!(result, vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_bogo_from_catalog_respects_step_cap() {
    let input: Vec<i32> = (0..40).rev().collect();
    let steps = Catalog::builtin()
        .lookup("bogo")
        .unwrap()
        .producer(&input)
        .unwrap()
        .take(10_000)
        .count();
    assert_eq!(steps, 10_000);
}
