//! # Introduction
//!
//! sortty animates classic in-memory sorting algorithms in the terminal.
//! Every algorithm is expressed as a lazy sequence of atomic steps
//! (`compare`, `set`, `swap`) that a timer-driven player pulls one at a time,
//! so a run can be played, paused, single-stepped and restarted at any point.
//! The terminal front-end is built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! ArraySource → Catalog entry → StepProducer → Player → TUI
//! ```
//!
//! 1. [`source`]: random input arrays and reshuffling.
//! 2. [`algorithms`]: the step-producing state machines and the
//!    [`algorithms::catalog::Catalog`] that registers them.
//! 3. [`player`]: the run/pause/step/stop state machine, the counters and
//!    the cancellable [`player::Timer`] it is driven by.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, insertion, selection, merge, quick (Lomuto), heap, counting,
//! radix (base 10), bucket and bogo sort.

pub mod algorithms;
pub mod constants;
pub mod errors;
pub mod player;
pub mod source;
pub mod ui;

pub use errors::{Result, SortError};
