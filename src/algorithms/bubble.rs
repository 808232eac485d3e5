//! Bubble sort

use super::Step;

/// Bubble sort as a resumable step sequence.
///
/// Each pass walks `1..end`, comparing neighbours and swapping inversions.
/// `end` shrinks by one per pass; the run ends after a pass without swaps.
#[derive(Debug, Clone)]
pub struct BubbleSteps {
    a: Vec<i32>,
    end: usize,
    i: usize,
    swapped: bool,
    pending_swap: bool,
    done: bool,
}

impl BubbleSteps {
    pub fn new(input: &[i32]) -> Self {
        BubbleSteps {
            a: input.to_vec(),
            end: input.len(),
            i: 1,
            swapped: false,
            pending_swap: false,
            done: false,
        }
    }
}

impl Iterator for BubbleSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if self.done {
                return None;
            }

            if self.pending_swap {
                self.pending_swap = false;
                self.swapped = true;
                let i = self.i;
                self.a.swap(i - 1, i);
                self.i += 1;
                return Some(Step::swap(i - 1, i, &self.a));
            }

            if self.i < self.end {
                let i = self.i;
                if self.a[i - 1] > self.a[i] {
                    self.pending_swap = true;
                } else {
                    self.i += 1;
                }
                return Some(Step::compare(i - 1, i));
            }

            // Pass finished
            self.end = self.end.saturating_sub(1);
            if !self.swapped {
                self.done = true;
                return None;
            }
            self.swapped = false;
            self.i = 1;
        }
    }
}
