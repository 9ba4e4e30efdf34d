//! Toast notifications
//!
//! Outcomes of the add form and startup notices. The newest one is drawn as
//! a toast in the corner and echoed in the status bar until it expires.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::error::TrackerError;
use crate::models::Transaction;

/// Message shown when the add form holds something that is not a transaction
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid data.";

const DISPLAY_TIME: Duration = Duration::from_secs(3);
const MAX_QUEUED: usize = 3;

/// How a notification should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information
    Notice,
    /// A transaction made it into the ledger
    Recorded,
    /// Input was refused or could not be saved
    Rejected,
}

impl Severity {
    /// Accent color for borders and status text
    pub fn color(&self) -> Color {
        match self {
            Self::Notice => Color::Blue,
            Self::Recorded => Color::Green,
            Self::Rejected => Color::Red,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Notice => " Info ",
            Self::Recorded => " Saved ",
            Self::Rejected => " Error ",
        }
    }
}

/// A message that disappears after a few seconds
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    expires_at: Instant,
}

impl Notification {
    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            expires_at: Instant::now() + DISPLAY_TIME,
        }
    }

    /// Startup notice with the number of loaded records
    pub fn ledger_loaded(count: usize) -> Self {
        Self::new(format!("Loaded {} transactions", count), Severity::Notice)
    }

    /// Confirmation for a transaction that was just appended
    pub fn recorded(txn: &Transaction, currency_symbol: &str) -> Self {
        Self::new(
            format!(
                "Added {} {} ({})",
                txn.kind,
                txn.amount.format_with_symbol(currency_symbol),
                txn.category
            ),
            Severity::Recorded,
        )
    }

    /// The add form did not hold a valid transaction
    pub fn invalid_input() -> Self {
        Self::new(INVALID_INPUT_MESSAGE, Severity::Rejected)
    }

    /// The ledger file could not be rewritten
    pub fn save_failed(err: &TrackerError) -> Self {
        Self::new(format!("Failed to save: {}", err), Severity::Rejected)
    }

    /// Whether the notification is past its display time at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

impl Widget for &Notification {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.severity.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.severity.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .block(block)
            .render(area, buf);
    }
}

/// The few most recent notifications
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, dropping the oldest once the queue is full
    pub fn push(&mut self, notification: Notification) {
        if self.items.len() >= MAX_QUEUED {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Drop notifications whose display time has passed
    pub fn remove_expired(&mut self) {
        self.remove_expired_at(Instant::now());
    }

    fn remove_expired_at(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired_at(now));
    }

    /// The notification to show, if any
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category, Kind};

    #[test]
    fn test_recorded_message() {
        let txn = Transaction::new(
            "2024-01-01",
            Amount::new(1000.0).unwrap(),
            Kind::Income,
            Category::Salary,
            None,
        );

        let n = Notification::recorded(&txn, "$");
        assert_eq!(n.message, "Added Income $1000.00 (Salary)");
        assert_eq!(n.severity, Severity::Recorded);
    }

    #[test]
    fn test_rejections() {
        let n = Notification::invalid_input();
        assert_eq!(n.message, INVALID_INPUT_MESSAGE);
        assert_eq!(n.severity.color(), Color::Red);

        let n = Notification::save_failed(&TrackerError::Io("disk full".into()));
        assert_eq!(n.message, "Failed to save: I/O error: disk full");
    }

    #[test]
    fn test_queue_keeps_latest_few() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        for count in 0..5 {
            queue.push(Notification::ledger_loaded(count));
        }
        assert_eq!(queue.len(), MAX_QUEUED);
        assert_eq!(queue.latest().unwrap().message, "Loaded 4 transactions");
    }

    #[test]
    fn test_queue_expiry() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::invalid_input());

        queue.remove_expired();
        assert_eq!(queue.len(), 1);

        queue.remove_expired_at(Instant::now() + DISPLAY_TIME);
        assert!(queue.is_empty());
    }
}
