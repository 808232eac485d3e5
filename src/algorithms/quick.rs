//! Quick sort with Lomuto partitioning
//!
//! Pending sub-ranges live on an explicit stack; the right range is pushed
//! before the left one so the left side is always sorted first.

use super::Step;

/// One in-progress Lomuto partition of `a[low..=high]` around `a[high]`
#[derive(Debug, Clone)]
struct Partition {
    low: usize,
    high: usize,
    i: usize,
    store: usize,
    pending_swap: bool,
}

/// Quick sort as a resumable step sequence
#[derive(Debug, Clone)]
pub struct QuickSteps {
    a: Vec<i32>,
    // Signed bounds: `store - 1` may fall below zero
    ranges: Vec<(isize, isize)>,
    partition: Option<Partition>,
}

impl QuickSteps {
    pub fn new(input: &[i32]) -> Self {
        QuickSteps {
            a: input.to_vec(),
            ranges: vec![(0, input.len() as isize - 1)],
            partition: None,
        }
    }
}

impl Iterator for QuickSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(p) = self.partition.as_mut() {
                if p.pending_swap {
                    p.pending_swap = false;
                    let (i, store) = (p.i, p.store);
                    self.a.swap(i, store);
                    p.store += 1;
                    p.i += 1;
                    return Some(Step::swap(i, store, &self.a));
                }

                if p.i < p.high {
                    let i = p.i;
                    if self.a[i] < self.a[p.high] {
                        p.pending_swap = true;
                    } else {
                        p.i += 1;
                    }
                    return Some(Step::compare(i, p.high));
                }

                // Place the pivot and queue both sides
                let (low, high, store) = (p.low, p.high, p.store);
                self.partition = None;
                self.a.swap(store, high);
                self.ranges.push((store as isize + 1, high as isize));
                self.ranges.push((low as isize, store as isize - 1));
                return Some(Step::swap(store, high, &self.a));
            }

            let (low, high) = self.ranges.pop()?;
            if low < high {
                self.partition = Some(Partition {
                    low: low as usize,
                    high: high as usize,
                    i: low as usize,
                    store: low as usize,
                    pending_swap: false,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_around_last_element() {
        let steps: Vec<Step> = QuickSteps::new(&[3, 1, 2]).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(0, 2),
                Step::compare(1, 2),
                Step::swap(1, 0, &[1, 3, 2]),
                Step::swap(1, 2, &[1, 2, 3]),
            ]
        );
    }

    #[test]
    fn test_self_exchange_is_still_reported() {
        let steps: Vec<Step> = QuickSteps::new(&[1, 2]).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(0, 1),
                Step::swap(0, 0, &[1, 2]),
                Step::swap(1, 1, &[1, 2]),
            ]
        );
    }
}
