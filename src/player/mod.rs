//! Playback scheduling
//!
//! [`Player`] owns everything a running visualization mutates: the array
//! snapshot, the highlighted indices, the active [`StepProducer`], the
//! counters and the single pending timer firing.
//!
//! # State machine
//!
//! ```text
//!           start                   pause
//!   Idle ─────────────▶ Running ─────────────▶ Paused
//!    ▲  ◀── stop ──────  │  ▲  ◀──── start ──────  │
//!    │                   │  └──────────────────────┘
//!    │     exhausted     ▼
//!    └──── stop ─── Finished
//! ```
//!
//! `step` pulls one step without changing Running/Paused; from Idle or
//! Finished it opens a new session in Paused. Every transition cancels the
//! pending firing before anything else, and a firing whose token is no longer
//! pending is ignored, so no step is ever applied after `pause` or `stop`.

pub mod metrics;
pub mod timer;

pub use metrics::Metrics;
pub use timer::{DeadlineTimer, ManualTimer, Timer, TimerToken};

use crate::algorithms::catalog::{AlgorithmDescriptor, Catalog};
use crate::algorithms::{Step, StepProducer};
use crate::constants::{DEFAULT_INTERVAL_MS, DEFAULT_SIZE, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::errors::Result;
use crate::source::{ArraySource, validate_size, validate_values};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Where the player is in its run/pause/step/stop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Finished,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Running => "Running",
            PlaybackState::Paused => "Paused",
            PlaybackState::Finished => "Finished",
        }
    }
}

/// Startup settings for a [`Player`]
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub algorithm: String,
    pub size: usize,
    pub interval_ms: u64,
    /// Seed for the array source; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            algorithm: "bubble".to_string(),
            size: DEFAULT_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            seed: None,
        }
    }
}

/// The playback scheduler
pub struct Player<T: Timer> {
    catalog: Catalog,
    algorithm: &'static AlgorithmDescriptor,
    source: ArraySource,

    /// Current array snapshot
    array: Vec<i32>,

    /// Array the current (or last aborted) session started from
    baseline: Vec<i32>,

    highlighted: Vec<usize>,
    producer: Option<StepProducer>,
    state: PlaybackState,
    metrics: Metrics,
    interval: Duration,

    timer: T,
    pending: Option<TimerToken>,
}

impl<T: Timer> Player<T> {
    /// Create an idle player with a freshly generated array
    pub fn new(timer: T, config: PlayerConfig) -> Result<Self> {
        let catalog = Catalog::builtin();
        let algorithm = catalog.lookup(&config.algorithm)?;
        let mut source = match config.seed {
            Some(seed) => ArraySource::seeded(seed),
            None => ArraySource::new(),
        };
        let array = source.generate(config.size)?;

        Ok(Player {
            catalog,
            algorithm,
            source,
            baseline: array.clone(),
            array,
            highlighted: Vec::new(),
            producer: None,
            state: PlaybackState::Idle,
            metrics: Metrics::default(),
            interval: clamp_interval(config.interval_ms),
            timer,
            pending: None,
        })
    }

    // ---- playback ----

    /// Run steps on the timer until paused, stopped or exhausted.
    ///
    /// The first step is applied immediately. Does nothing if already running.
    pub fn start(&mut self) -> Result<()> {
        if self.state == PlaybackState::Running {
            return Ok(());
        }
        self.ensure_producer()?;
        debug!(algorithm = self.algorithm.id, from = ?self.state, "start");
        self.state = PlaybackState::Running;
        self.tick();
        Ok(())
    }

    /// Stop the timer but keep the session so `start` resumes it
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Running {
            return;
        }
        self.cancel_pending();
        self.state = PlaybackState::Paused;
        debug!(pulled = self.pulled(), "pause");
    }

    /// Apply exactly one step now.
    ///
    /// Returns `false` if the session had no steps left (it is now finished).
    pub fn step(&mut self) -> Result<bool> {
        self.ensure_producer()?;
        if matches!(self.state, PlaybackState::Idle | PlaybackState::Finished) {
            self.state = PlaybackState::Paused;
        }
        Ok(self.pull())
    }

    /// Abort the session and restore the array it started from
    pub fn stop(&mut self) {
        self.cancel_pending();
        if self.producer.take().is_some() {
            debug!(algorithm = self.algorithm.id, "session discarded");
        }
        self.highlighted.clear();
        self.array.clone_from(&self.baseline);
        self.state = PlaybackState::Idle;
    }

    /// Deliver a timer firing. Returns whether a step was pulled for it.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.pending != Some(token) || self.state != PlaybackState::Running {
            trace!(?token, "ignoring stale timer firing");
            return false;
        }
        self.pending = None;
        self.tick();
        true
    }

    // ---- settings ----

    /// Set the delay between scheduled steps, clamped to the supported range.
    ///
    /// An already pending firing keeps its delay; the new one applies from the
    /// next scheduling decision on.
    pub fn set_speed(&mut self, interval_ms: u64) {
        self.interval = clamp_interval(interval_ms);
    }

    pub fn set_algorithm(&mut self, id: &str) -> Result<()> {
        let algorithm = self.catalog.lookup(id)?;
        self.stop();
        self.algorithm = algorithm;
        self.metrics.reset();
        debug!(algorithm = id, "algorithm selected");
        Ok(())
    }

    /// Replace the array with a new random one of length `size`
    pub fn set_array_size(&mut self, size: usize) -> Result<()> {
        validate_size(size)?;
        self.stop();
        let array = self.source.generate(size)?;
        self.replace_array(array);
        Ok(())
    }

    /// New random array of the current length
    pub fn regenerate(&mut self) -> Result<()> {
        self.set_array_size(self.array.len())
    }

    /// Shuffle the current array
    pub fn reshuffle(&mut self) {
        self.stop();
        let array = self.source.reshuffle(&self.array);
        self.replace_array(array);
    }

    /// Use `values` as the array.
    ///
    /// The player is left untouched unless the length and every value are in range.
    pub fn load_array(&mut self, values: Vec<i32>) -> Result<()> {
        validate_values(&values)?;
        self.stop();
        self.replace_array(values);
        Ok(())
    }

    /// Abort the session and show the sorted array right away
    pub fn finish(&mut self) {
        self.stop();
        self.array.sort_unstable();
        self.baseline.clone_from(&self.array);
    }

    // ---- observable state ----

    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn highlighted(&self) -> &[usize] {
        &self.highlighted
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn algorithm(&self) -> &'static AlgorithmDescriptor {
        self.algorithm
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether a session (an active producer) exists
    pub fn has_session(&self) -> bool {
        self.producer.is_some()
    }

    /// Steps pulled from the active producer
    pub fn pulled(&self) -> u64 {
        self.producer.as_ref().map_or(0, StepProducer::pulled)
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    // ---- internals ----

    fn ensure_producer(&mut self) -> Result<()> {
        if self.producer.is_some() {
            return Ok(());
        }
        let producer = self.algorithm.producer(&self.array)?;
        self.baseline.clone_from(&self.array);
        self.highlighted.clear();
        self.metrics.reset();
        self.producer = Some(producer);
        debug!(algorithm = self.algorithm.id, len = self.array.len(), "session created");
        Ok(())
    }

    /// Pull one step and keep the timer going while running
    fn tick(&mut self) {
        if self.pull() && self.state == PlaybackState::Running {
            self.cancel_pending();
            self.pending = Some(self.timer.schedule(self.interval));
        }
    }

    /// Pull and apply one step; `false` once the producer is exhausted
    fn pull(&mut self) -> bool {
        let Some(producer) = self.producer.as_mut() else {
            return false;
        };
        match producer.next() {
            Some(step) => {
                self.apply(step);
                true
            }
            None => {
                self.complete();
                false
            }
        }
    }

    fn apply(&mut self, step: Step) {
        self.metrics.record(&step);
        trace!(%step, "apply");
        let (_, indices, array) = step.into_parts();
        self.highlighted = indices;
        if let Some(array) = array {
            self.array = array;
        }
    }

    fn complete(&mut self) {
        self.cancel_pending();
        self.producer = None;
        self.highlighted.clear();
        self.baseline.clone_from(&self.array);
        self.state = PlaybackState::Finished;
        info!(
            algorithm = self.algorithm.id,
            steps = self.metrics.steps,
            comparisons = self.metrics.comparisons,
            accesses = self.metrics.accesses,
            "sort finished"
        );
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.timer.cancel(token);
        }
    }

    fn replace_array(&mut self, array: Vec<i32>) {
        self.baseline.clone_from(&array);
        self.array = array;
        self.highlighted.clear();
        self.metrics.reset();
    }
}

fn clamp_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(values: &[i32]) -> Player<ManualTimer> {
        let mut player = Player::new(
            ManualTimer::new(),
            PlayerConfig {
                seed: Some(5),
                ..PlayerConfig::default()
            },
        )
        .unwrap();
        player.load_array(values.to_vec()).unwrap();
        player
    }

    #[test]
    fn test_start_applies_first_step_and_schedules() {
        let mut p = player(&[2, 1]);
        p.start().unwrap();

        assert_eq!(p.state(), PlaybackState::Running);
        assert_eq!(p.metrics().steps, 1);
        assert_eq!(p.highlighted(), &[0, 1]);
        assert_eq!(p.timer().pending_delay(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut p = player(&[2, 1]);
        p.start().unwrap();
        p.start().unwrap();
        assert_eq!(p.metrics().steps, 1);
        assert_eq!(p.timer().scheduled().len(), 1);
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let mut p = player(&[3, 2, 1]);
        p.start().unwrap();
        let token = p.timer_mut().fire().unwrap();
        p.pause();

        assert!(!p.fire(token));
        assert_eq!(p.metrics().steps, 1);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut p = player(&[2, 1]);
        p.set_speed(0);
        assert_eq!(p.interval(), Duration::from_millis(MIN_INTERVAL_MS));
        p.set_speed(10_000);
        assert_eq!(p.interval(), Duration::from_millis(MAX_INTERVAL_MS));
    }

    #[test]
    fn test_unknown_algorithm_leaves_session_alone() {
        let mut p = player(&[3, 2, 1]);
        p.step().unwrap();
        assert!(p.set_algorithm("stooge").is_err());
        assert!(p.has_session());
        assert_eq!(p.algorithm().id, "bubble");
    }

    #[test]
    fn test_label() {
        assert_eq!(PlaybackState::Finished.label(), "Finished");
    }
}
