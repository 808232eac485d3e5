//! Insertion sort

use super::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pick up `a[i]` and compare it with its predecessor
    Begin,
    /// Shift `a[j]` right if it is larger than the key
    Shift,
    /// Compare the key with the next predecessor after a shift
    Compare,
    /// Drop the key into the hole at `j + 1`
    Place,
}

/// Insertion sort as a resumable step sequence.
///
/// `j` is signed because the hole can travel past the front of the array.
#[derive(Debug, Clone)]
pub struct InsertionSteps {
    a: Vec<i32>,
    i: usize,
    j: isize,
    key: i32,
    phase: Phase,
}

impl InsertionSteps {
    pub fn new(input: &[i32]) -> Self {
        InsertionSteps {
            a: input.to_vec(),
            i: 1,
            j: 0,
            key: 0,
            phase: Phase::Begin,
        }
    }
}

impl Iterator for InsertionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match self.phase {
                Phase::Begin => {
                    if self.i >= self.a.len() {
                        return None;
                    }
                    self.key = self.a[self.i];
                    self.j = self.i as isize - 1;
                    self.phase = Phase::Shift;
                    return Some(Step::compare(self.i - 1, self.i));
                }
                Phase::Shift => {
                    if self.j >= 0 && self.a[self.j as usize] > self.key {
                        let j = self.j as usize;
                        self.a[j + 1] = self.a[j];
                        self.j -= 1;
                        self.phase = if self.j >= 0 {
                            Phase::Compare
                        } else {
                            Phase::Shift
                        };
                        return Some(Step::set(&[j, j + 1], &self.a));
                    }
                    self.phase = Phase::Place;
                }
                Phase::Compare => {
                    self.phase = Phase::Shift;
                    return Some(Step::compare(self.j as usize, self.i));
                }
                Phase::Place => {
                    let hole = (self.j + 1) as usize;
                    self.a[hole] = self.key;
                    let step = Step::set(&[hole, self.i], &self.a);
                    self.i += 1;
                    self.phase = Phase::Begin;
                    return Some(step);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_then_place() {
        let steps: Vec<Step> = InsertionSteps::new(&[3, 1]).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(0, 1),
                Step::set(&[0, 1], &[3, 3]),
                Step::set(&[0, 1], &[1, 3]),
            ]
        );
    }

    #[test]
    fn test_in_place_element_still_emits_placement() {
        let steps: Vec<Step> = InsertionSteps::new(&[1, 2]).collect();
        assert_eq!(steps, vec![Step::compare(0, 1), Step::set(&[1, 1], &[1, 2])]);
    }

    #[test]
    fn test_compare_follows_each_inner_shift() {
        let steps: Vec<Step> = InsertionSteps::new(&[2, 3, 1]).collect();
        // i = 2: compare(1,2), shift 3, compare(0,2), shift 2, place at 0
        let tail: Vec<String> = steps[2..].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            tail,
            vec!["compare[1, 2]", "set[1, 2]", "compare[0, 2]", "set[0, 1]", "set[0, 2]"]
        );
        assert_eq!(steps.last().and_then(|s| s.array()), Some(&[1, 2, 3][..]));
    }
}
