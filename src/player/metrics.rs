//! Step counters shown next to the visualization

use crate::algorithms::{Step, StepKind};

/// Running totals for one playback session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub steps: u64,
    pub comparisons: u64,
    pub accesses: u64,
}

impl Metrics {
    /// Account for one applied step
    pub fn record(&mut self, step: &Step) {
        self.steps += 1;
        match step.kind() {
            StepKind::Compare => self.comparisons += 1,
            StepKind::Set | StepKind::Swap => self.accesses += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Metrics::default();
    }
}
