//! LSD radix sort, base 10

use super::Step;
use crate::errors::{Result, ensure_non_negative};

const BASE: u64 = 10;

/// Radix sort as a resumable step sequence.
///
/// Each digit pass is a stable counting sort computed in one go; its result
/// is then written back one `set` per position.
#[derive(Debug, Clone)]
pub struct RadixSteps {
    a: Vec<i32>,
    max: u64,
    exp: u64,
    output: Option<Vec<i32>>,
    cursor: usize,
}

impl RadixSteps {
    pub fn new(input: &[i32]) -> Result<Self> {
        ensure_non_negative("radix", input)?;
        Ok(RadixSteps {
            a: input.to_vec(),
            max: input.iter().copied().max().unwrap_or(0) as u64,
            exp: 1,
            output: None,
            cursor: 0,
        })
    }

    fn digit(&self, value: i32) -> usize {
        ((value as u64 / self.exp) % BASE) as usize
    }

    fn digit_pass(&self) -> Vec<i32> {
        let mut count = [0usize; BASE as usize];
        for &v in &self.a {
            count[self.digit(v)] += 1;
        }
        for d in 1..count.len() {
            count[d] += count[d - 1];
        }

        let mut output = vec![0; self.a.len()];
        for &v in self.a.iter().rev() {
            let d = self.digit(v);
            count[d] -= 1;
            output[count[d]] = v;
        }
        output
    }
}

impl Iterator for RadixSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(output) = &self.output {
                if self.cursor < output.len() {
                    let i = self.cursor;
                    self.a[i] = output[i];
                    self.cursor += 1;
                    return Some(Step::set(&[i], &self.a));
                }
                self.output = None;
                self.exp *= BASE;
            }

            if self.max / self.exp == 0 {
                return None;
            }
            self.output = Some(self.digit_pass());
            self.cursor = 0;
        }
    }
}
