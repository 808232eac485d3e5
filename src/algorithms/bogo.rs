//! Bogo sort: shuffle the whole array until it happens to be sorted
//!
//! Expected work grows factorially with the length. The sequence is finite
//! only with probability one; callers that need a bound must cap the number
//! of steps they pull.

use super::{Step, is_sorted};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Bogo sort as a resumable step sequence
#[derive(Debug, Clone)]
pub struct BogoSteps {
    a: Vec<i32>,
    rng: SmallRng,
    // Next Fisher-Yates position; 0 means "check before shuffling again"
    i: usize,
}

impl BogoSteps {
    pub fn new(input: &[i32]) -> Self {
        Self::with_rng(input, SmallRng::from_os_rng())
    }

    pub fn with_seed(input: &[i32], seed: u64) -> Self {
        Self::with_rng(input, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(input: &[i32], rng: SmallRng) -> Self {
        BogoSteps {
            a: input.to_vec(),
            rng,
            i: 0,
        }
    }
}

impl Iterator for BogoSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.i == 0 {
            if is_sorted(&self.a) {
                return None;
            }
            self.i = self.a.len() - 1;
        }

        let i = self.i;
        let j = self.rng.random_range(0..=i);
        self.a.swap(i, j);
        self.i -= 1;
        Some(Step::swap(i, j, &self.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::StepKind;

    #[test]
    fn test_sorted_input_terminates_immediately() {
        assert_eq!(BogoSteps::with_seed(&[1, 2, 3], 7).count(), 0);
    }

    #[test]
    fn test_shuffles_whole_array_per_attempt() {
        let steps: Vec<Step> = BogoSteps::with_seed(&[3, 2, 1], 42).collect();
        assert!(steps.iter().all(|s| s.kind() == StepKind::Swap));
        // every attempt is a full pass of n - 1 swaps
        assert_eq!(steps.len() % 2, 0);
        assert_eq!(steps[0].indices()[0], 2);
        assert_eq!(steps[1].indices()[0], 1);
        assert_eq!(steps.last().and_then(|s| s.array()), Some(&[1, 2, 3][..]));
    }
}
