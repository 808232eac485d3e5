//! Heap sort
//!
//! Both phases run the same sift-down. The sift is tail recursive, so a
//! single [`Sift`] cursor that moves to the swapped child replaces the
//! recursion.

use super::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftStage {
    Left,
    Right,
    Exchange,
}

#[derive(Debug, Clone)]
struct Sift {
    len: usize,
    root: usize,
    largest: usize,
    stage: SiftStage,
}

impl Sift {
    fn new(len: usize, root: usize) -> Self {
        Sift {
            len,
            root,
            largest: root,
            stage: SiftStage::Left,
        }
    }

    fn step(&mut self, a: &mut [i32]) -> Option<Step> {
        loop {
            match self.stage {
                SiftStage::Left => {
                    self.stage = SiftStage::Right;
                    let l = 2 * self.root + 1;
                    if l < self.len {
                        let step = Step::compare(l, self.largest);
                        if a[l] > a[self.largest] {
                            self.largest = l;
                        }
                        return Some(step);
                    }
                }
                SiftStage::Right => {
                    self.stage = SiftStage::Exchange;
                    let r = 2 * self.root + 2;
                    if r < self.len {
                        let step = Step::compare(r, self.largest);
                        if a[r] > a[self.largest] {
                            self.largest = r;
                        }
                        return Some(step);
                    }
                }
                SiftStage::Exchange => {
                    if self.largest == self.root {
                        return None;
                    }
                    let (root, largest) = (self.root, self.largest);
                    a.swap(root, largest);
                    self.root = largest;
                    self.stage = SiftStage::Left;
                    return Some(Step::swap(root, largest, a));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Roots still to sift while building the heap, counting down
    Build { remaining: usize },
    /// Last index of the heap still to extract into
    Extract { end: usize },
}

/// Heap sort as a resumable step sequence
#[derive(Debug, Clone)]
pub struct HeapSteps {
    a: Vec<i32>,
    phase: Phase,
    sift: Option<Sift>,
}

impl HeapSteps {
    pub fn new(input: &[i32]) -> Self {
        HeapSteps {
            a: input.to_vec(),
            phase: Phase::Build {
                remaining: input.len() / 2,
            },
            sift: None,
        }
    }
}

impl Iterator for HeapSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(step) = sift.step(&mut self.a) {
                    return Some(step);
                }
                self.sift = None;
            }

            match self.phase {
                Phase::Build { remaining } if remaining > 0 => {
                    let root = remaining - 1;
                    self.phase = Phase::Build { remaining: root };
                    self.sift = Some(Sift::new(self.a.len(), root));
                }
                Phase::Build { .. } => {
                    self.phase = Phase::Extract {
                        end: self.a.len().saturating_sub(1),
                    };
                }
                Phase::Extract { end } if end > 0 => {
                    self.a.swap(0, end);
                    self.phase = Phase::Extract { end: end - 1 };
                    self.sift = Some(Sift::new(end, 0));
                    return Some(Step::swap(0, end, &self.a));
                }
                Phase::Extract { .. } => return None,
            }
        }
    }
}
