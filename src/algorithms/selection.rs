//! Selection sort

use super::Step;

/// Selection sort as a resumable step sequence
#[derive(Debug, Clone)]
pub struct SelectionSteps {
    a: Vec<i32>,
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSteps {
    pub fn new(input: &[i32]) -> Self {
        SelectionSteps {
            a: input.to_vec(),
            i: 0,
            j: 1,
            min: 0,
        }
    }
}

impl Iterator for SelectionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let n = self.a.len();
        loop {
            if self.i + 1 >= n {
                return None;
            }

            if self.j < n {
                let step = Step::compare(self.min, self.j);
                if self.a[self.j] < self.a[self.min] {
                    self.min = self.j;
                }
                self.j += 1;
                return Some(step);
            }

            let (i, min) = (self.i, self.min);
            self.i += 1;
            self.j = self.i + 1;
            self.min = self.i;
            if min != i {
                self.a.swap(i, min);
                return Some(Step::swap(i, min, &self.a));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::StepKind;

    #[test]
    fn test_compare_uses_running_minimum() {
        let steps: Vec<Step> = SelectionSteps::new(&[3, 1, 2]).collect();
        assert_eq!(
            steps,
            vec![
                Step::compare(0, 1),
                Step::compare(1, 2),
                Step::swap(0, 1, &[1, 3, 2]),
                Step::compare(1, 2),
                Step::swap(1, 2, &[1, 2, 3]),
            ]
        );
    }

    #[test]
    fn test_no_swap_when_minimum_in_place() {
        let steps: Vec<Step> = SelectionSteps::new(&[1, 2, 3]).collect();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.kind() == StepKind::Compare));
    }
}
