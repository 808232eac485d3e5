//! TUI pane rendering modules
//!
//! - [`bars`]: the array as vertical bars, highlighted indices in a second color
//! - [`info`]: algorithm name, description, complexity and counters
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each module exports one `render_*` function that draws from borrowed state
//! and owns nothing.

pub mod bars;
pub mod info;
pub mod status;

pub use bars::{bar_rows, render_bars_pane};
pub use info::render_info_pane;
pub use status::render_status_bar;
