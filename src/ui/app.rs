//! Main TUI application state and logic

use crate::constants::{INTERVAL_STEP_MS, MAX_SIZE, MIN_SIZE};
use crate::errors::SortError;
use crate::player::{DeadlineTimer, PlaybackState, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the event loop blocks waiting for input while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Array length change per `[` / `]` press
const SIZE_STEP: usize = 5;

/// The main application state
pub struct App {
    /// The playback scheduler, driven by the wall clock
    pub player: Player<DeadlineTimer>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(player: Player<DeadlineTimer>) -> Self {
        App {
            player,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Wake up for whichever comes first: a key press or the next step
            let timeout = self
                .player
                .timer()
                .time_until_due(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.fire_due_timer();
        }

        Ok(())
    }

    /// Deliver the pending timer firing to the player if it is due
    fn fire_due_timer(&mut self) {
        if let Some(token) = self.player.timer_mut().poll(Instant::now()) {
            self.player.fire(token);
            if self.player.state() == PlaybackState::Finished {
                self.set_status("Sorted!");
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, info below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_bars_pane(
            frame,
            chunks[0],
            self.player.array(),
            self.player.highlighted(),
        );

        super::panes::render_info_pane(
            frame,
            chunks[1],
            self.player.algorithm(),
            self.player.metrics(),
            self.player.array().len(),
            self.player.interval(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.player.state(),
            self.is_error,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle play/pause (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right | KeyCode::Char('s') => self.step_forward(1),
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                self.step_forward(n);
            }
            KeyCode::Backspace | KeyCode::Char('x') => {
                self.player.stop();
                self.set_status("Stopped");
            }
            KeyCode::Up => self.cycle_algorithm(-1),
            KeyCode::Down | KeyCode::Tab => self.cycle_algorithm(1),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let ms = self.interval_ms().saturating_sub(INTERVAL_STEP_MS);
                self.player.set_speed(ms);
                self.set_status(format!("Speed {} ms/step", self.interval_ms()));
            }
            KeyCode::Char('-') => {
                let ms = self.interval_ms() + INTERVAL_STEP_MS;
                self.player.set_speed(ms);
                self.set_status(format!("Speed {} ms/step", self.interval_ms()));
            }
            KeyCode::Char(']') => {
                let size = (self.player.array().len() + SIZE_STEP).min(MAX_SIZE);
                self.resize(size);
            }
            KeyCode::Char('[') => {
                let size = self
                    .player
                    .array()
                    .len()
                    .saturating_sub(SIZE_STEP)
                    .max(MIN_SIZE);
                self.resize(size);
            }
            KeyCode::Char('u') => {
                self.player.reshuffle();
                self.set_status("Unordered");
            }
            KeyCode::Char('r') => match self.player.regenerate() {
                Ok(()) => self.set_status("New array"),
                Err(e) => self.set_error(e),
            },
            KeyCode::Char('f') => {
                self.player.finish();
                self.set_status("Finished instantly");
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.player.state() == PlaybackState::Running {
            self.player.pause();
            self.set_status("Paused");
            return;
        }
        match self.player.start() {
            Ok(()) if self.player.state() == PlaybackState::Finished => self.set_status("Sorted!"),
            Ok(()) => self.set_status(format!("Sorting with {}...", self.player.algorithm().name)),
            Err(e) => self.set_error(e),
        }
    }

    /// Step forward up to `n` times, stopping early once the run completes
    fn step_forward(&mut self, n: usize) {
        let mut stepped = 0;
        for _ in 0..n {
            match self.player.step() {
                Ok(true) => stepped += 1,
                Ok(false) => break,
                Err(e) => {
                    self.set_error(e);
                    return;
                }
            }
        }
        if self.player.state() == PlaybackState::Finished {
            self.set_status("Sorted!");
        } else {
            self.set_status(format!("Stepped forward {} step(s)", stepped));
        }
    }

    fn cycle_algorithm(&mut self, delta: isize) {
        let catalog = self.player.catalog();
        let len = catalog.len() as isize;
        let current = catalog.position(self.player.algorithm().id).unwrap_or(0) as isize;
        let next = &catalog.entries()[(current + delta).rem_euclid(len) as usize];

        match self.player.set_algorithm(next.id) {
            Ok(()) => self.set_status(format!("Selected {}", next.name)),
            Err(e) => self.set_error(e),
        }
    }

    fn resize(&mut self, size: usize) {
        match self.player.set_array_size(size) {
            Ok(()) => self.set_status(format!("Array size {}", size)),
            Err(e) => self.set_error(e),
        }
    }

    fn interval_ms(&self) -> u64 {
        self.player.interval().as_millis() as u64
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn set_error(&mut self, error: SortError) {
        tracing::warn!(%error, "operation failed");
        self.status_message = format!("Error: {}", error);
        self.is_error = true;
    }
}
