// Constants for the sorting visualizer

/// Smallest value the array source generates
pub const MIN_VAL: i32 = 0;

/// Largest value the array source generates
pub const MAX_VAL: i32 = 80;

/// Array length used when nothing else is requested
pub const DEFAULT_SIZE: usize = 55;

/// Supported array lengths (inclusive)
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 100;

/// Milliseconds between two scheduled steps when nothing else is requested
pub const DEFAULT_INTERVAL_MS: u64 = 100;

/// Supported playback intervals in milliseconds (inclusive)
pub const MIN_INTERVAL_MS: u64 = 1;
pub const MAX_INTERVAL_MS: u64 = 999;

/// Interval change applied by one speed key press
pub const INTERVAL_STEP_MS: u64 = 5;
