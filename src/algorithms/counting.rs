//! Counting sort for non-negative integers

use super::Step;
use crate::errors::{Result, ensure_non_negative};

/// Counting sort as a resumable step sequence.
///
/// The histogram is built up front without reporting; the visible part of
/// the run is the write-back, one `set` per output position in key order.
#[derive(Debug, Clone)]
pub struct CountingSteps {
    a: Vec<i32>,
    counts: Vec<usize>,
    key: usize,
    k: usize,
}

impl CountingSteps {
    pub fn new(input: &[i32]) -> Result<Self> {
        ensure_non_negative("counting", input)?;

        let max = input.iter().copied().max().unwrap_or(0) as usize;
        let mut counts = vec![0usize; if input.is_empty() { 0 } else { max + 1 }];
        for &v in input {
            counts[v as usize] += 1;
        }

        Ok(CountingSteps {
            a: input.to_vec(),
            counts,
            key: 0,
            k: 0,
        })
    }
}

impl Iterator for CountingSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        while self.key < self.counts.len() && self.counts[self.key] == 0 {
            self.key += 1;
        }
        if self.key == self.counts.len() {
            return None;
        }

        self.counts[self.key] -= 1;
        let k = self.k;
        self.a[k] = self.key as i32;
        self.k += 1;
        Some(Step::set(&[k], &self.a))
    }
}
