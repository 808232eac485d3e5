//! Step-producing sorting algorithms
//!
//! Every algorithm is written as an explicit state machine implementing
//! `Iterator<Item = Step>`. Each call to `next` performs exactly one unit of
//! work and reports it, so a run can be suspended between any two steps,
//! including in the middle of merge, quick or heap sort's recursion (those
//! keep an explicit work stack instead of recursing).
//!
//! - [`catalog`]: the fixed registry of algorithms and their metadata
//! - one module per algorithm, each exposing a `*Steps` state machine
//!
//! All algorithms operate on a private copy of their input.

pub mod catalog;

pub mod bogo;
pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

use std::fmt;

/// What a step did to the array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Compare,
    Set,
    Swap,
}

impl StepKind {
    /// Whether the step wrote to the array
    pub fn is_access(self) -> bool {
        matches!(self, StepKind::Set | StepKind::Swap)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Compare => write!(f, "compare"),
            StepKind::Set => write!(f, "set"),
            StepKind::Swap => write!(f, "swap"),
        }
    }
}

/// One atomic, reported unit of algorithmic work.
///
/// Mutating steps carry the full array as it looks after the mutation;
/// comparisons never carry an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    kind: StepKind,
    indices: Vec<usize>,
    array: Option<Vec<i32>>,
}

impl Step {
    pub fn compare(i: usize, j: usize) -> Self {
        Step {
            kind: StepKind::Compare,
            indices: vec![i, j],
            array: None,
        }
    }

    pub fn set(indices: &[usize], array: &[i32]) -> Self {
        debug_assert!(matches!(indices.len(), 1 | 2));
        Step {
            kind: StepKind::Set,
            indices: indices.to_vec(),
            array: Some(array.to_vec()),
        }
    }

    pub fn swap(i: usize, j: usize, array: &[i32]) -> Self {
        Step {
            kind: StepKind::Swap,
            indices: vec![i, j],
            array: Some(array.to_vec()),
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Positions involved in this step, in emission order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Array snapshot after the step, if the step mutated it
    pub fn array(&self) -> Option<&[i32]> {
        self.array.as_deref()
    }

    pub fn into_parts(self) -> (StepKind, Vec<usize>, Option<Vec<i32>>) {
        (self.kind, self.indices, self.array)
    }

    /// Replace `array` with this step's snapshot, if it has one
    pub fn apply_to(&self, array: &mut Vec<i32>) {
        if let Some(snapshot) = &self.array {
            array.clone_from(snapshot);
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.kind, self.indices)
    }
}

/// A resumable, pull-based source of steps bound to one algorithm run
pub struct StepProducer {
    algorithm: &'static str,
    steps: Box<dyn Iterator<Item = Step>>,
    pulled: u64,
    exhausted: bool,
}

impl StepProducer {
    pub fn new(algorithm: &'static str, steps: impl Iterator<Item = Step> + 'static) -> Self {
        StepProducer {
            algorithm,
            steps: Box::new(steps),
            pulled: 0,
            exhausted: false,
        }
    }

    /// Id of the algorithm this producer runs
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Number of steps handed out so far
    pub fn pulled(&self) -> u64 {
        self.pulled
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Iterator for StepProducer {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.exhausted {
            return None;
        }
        match self.steps.next() {
            Some(step) => {
                self.pulled += 1;
                Some(step)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for StepProducer {}

impl fmt::Debug for StepProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepProducer")
            .field("algorithm", &self.algorithm)
            .field("pulled", &self.pulled)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Check if a slice is sorted in ascending order
pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_carries_no_array() {
        let step = Step::compare(0, 1);
        assert_eq!(step.kind(), StepKind::Compare);
        assert_eq!(step.indices(), &[0, 1]);
        assert!(step.array().is_none());
        assert!(!step.kind().is_access());
    }

    #[test]
    fn test_apply_to_replaces_snapshot() {
        let mut array = vec![2, 1];
        Step::compare(0, 1).apply_to(&mut array);
        assert_eq!(array, vec![2, 1]);

        Step::swap(0, 1, &[1, 2]).apply_to(&mut array);
        assert_eq!(array, vec![1, 2]);
    }

    #[test]
    fn test_producer_counts_and_fuses() {
        let steps = vec![Step::compare(0, 1), Step::swap(0, 1, &[1, 2])];
        let mut producer = StepProducer::new("test", steps.into_iter());

        assert!(producer.next().is_some());
        assert!(producer.next().is_some());
        assert_eq!(producer.pulled(), 2);
        assert!(!producer.is_exhausted());
        assert!(producer.next().is_none());
        assert!(producer.is_exhausted());
        assert!(producer.next().is_none());
        assert_eq!(producer.pulled(), 2);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
