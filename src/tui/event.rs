//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) are polled with crossterm on the main
//! thread. A poll that times out yields a tick.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::error::{TrackerError, TrackerResult};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Polls the terminal for events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> TrackerResult<Event> {
        if event::poll(self.tick_rate).map_err(terminal_error)? {
            match event::read().map_err(terminal_error)? {
                // Ignore key releases reported by some platforms
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(width, height) => {
                    return Ok(Event::Resize(width, height));
                }
                _ => {}
            }
        }
        Ok(Event::Tick)
    }
}

fn terminal_error(err: io::Error) -> TrackerError {
    TrackerError::Tui(format!("Failed to read terminal event: {}", err))
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
