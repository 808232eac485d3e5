//! Top-down merge sort
//!
//! The recursion `sort(start, end) = sort(left); sort(right); merge` is kept
//! on an explicit stack of [`Task`]s. Pushing the merge before the two halves
//! (right half before left) pops them in the same order the recursive version
//! runs them, so the step stream is identical.

use super::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { start: usize, end: usize },
    Merge { start: usize, mid: usize, end: usize },
}

/// One in-progress merge of `a[start..mid]` and `a[mid..end]`
#[derive(Debug, Clone)]
struct MergeRun {
    start: usize,
    mid: usize,
    left: Vec<i32>,
    right: Vec<i32>,
    i: usize,
    j: usize,
    k: usize,
    compared: bool,
}

impl MergeRun {
    fn new(a: &[i32], start: usize, mid: usize, end: usize) -> Self {
        MergeRun {
            start,
            mid,
            left: a[start..mid].to_vec(),
            right: a[mid..end].to_vec(),
            i: 0,
            j: 0,
            k: start,
            compared: false,
        }
    }

    fn step(&mut self, a: &mut [i32]) -> Option<Step> {
        let value = if self.i < self.left.len() && self.j < self.right.len() {
            if !self.compared {
                self.compared = true;
                return Some(Step::compare(self.start + self.i, self.mid + self.j));
            }
            self.compared = false;
            if self.left[self.i] <= self.right[self.j] {
                self.i += 1;
                self.left[self.i - 1]
            } else {
                self.j += 1;
                self.right[self.j - 1]
            }
        } else if self.i < self.left.len() {
            self.i += 1;
            self.left[self.i - 1]
        } else if self.j < self.right.len() {
            self.j += 1;
            self.right[self.j - 1]
        } else {
            return None;
        };

        let k = self.k;
        a[k] = value;
        self.k += 1;
        Some(Step::set(&[k], a))
    }
}

/// Merge sort as a resumable step sequence
#[derive(Debug, Clone)]
pub struct MergeSteps {
    a: Vec<i32>,
    stack: Vec<Task>,
    run: Option<MergeRun>,
}

impl MergeSteps {
    pub fn new(input: &[i32]) -> Self {
        MergeSteps {
            a: input.to_vec(),
            stack: vec![Task::Sort {
                start: 0,
                end: input.len(),
            }],
            run: None,
        }
    }
}

impl Iterator for MergeSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(run) = self.run.as_mut() {
                if let Some(step) = run.step(&mut self.a) {
                    return Some(step);
                }
                self.run = None;
            }

            match self.stack.pop()? {
                Task::Sort { start, end } => {
                    if end - start <= 1 {
                        continue;
                    }
                    let mid = (start + end) / 2;
                    self.stack.push(Task::Merge { start, mid, end });
                    self.stack.push(Task::Sort { start: mid, end });
                    self.stack.push(Task::Sort { start, end: mid });
                }
                Task::Merge { start, mid, end } => {
                    self.run = Some(MergeRun::new(&self.a, start, mid, end));
                }
            }
        }
    }
}
