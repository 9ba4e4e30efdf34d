//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The ledger is borrowed from `main`; totals and chart data are recomputed
//! from it on every draw.

use tracing::{error, info};

use crate::config::Settings;
use crate::storage::Ledger;

use super::views::add_transaction::TransactionFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    AddTransaction,
    Balance,
    Charts,
}

impl ActiveTab {
    /// Tabs in display order
    pub const ALL: [ActiveTab; 3] = [Self::AddTransaction, Self::Balance, Self::Charts];

    /// Tab title
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddTransaction => "Add transaction",
            Self::Balance => "Balance",
            Self::Charts => "Charts",
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Self::AddTransaction => 0,
            Self::Balance => 1,
            Self::Charts => 2,
        }
    }

    /// The tab to the right, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keys go to the add form
    Editing,
}

/// Main application state
pub struct App<'a> {
    /// The ledger being viewed and appended to
    pub ledger: &'a mut Ledger,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Current input mode
    pub input_mode: InputMode,

    /// Add-transaction form
    pub form: TransactionFormState,

    /// Transient messages
    pub notifications: NotificationQueue,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// First visible row of the balance tab register
    pub register_offset: usize,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings) -> Self {
        let mut notifications = NotificationQueue::new();
        notifications.push(Notification::ledger_loaded(ledger.len()));

        Self {
            ledger,
            settings,
            should_quit: false,
            active_tab: ActiveTab::default(),
            input_mode: InputMode::default(),
            form: TransactionFormState::new(),
            notifications,
            show_help: false,
            register_offset: 0,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a different tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.input_mode = InputMode::Normal;
        self.form.set_focused(false);
    }

    /// Start typing into the add form
    pub fn start_editing(&mut self) {
        self.active_tab = ActiveTab::AddTransaction;
        self.input_mode = InputMode::Editing;
        self.form.set_focused(true);
    }

    /// Leave the add form without submitting
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
        self.form.set_focused(false);
    }

    /// Append the form's contents to the ledger
    ///
    /// Returns true when a transaction was recorded.
    pub fn submit_form(&mut self) -> bool {
        let draft = self.form.to_draft();

        match self.ledger.append(&draft) {
            Ok(txn) => {
                info!(kind = %txn.kind, category = %txn.category, "transaction added from TUI");
                let notification = Notification::recorded(txn, &self.settings.currency_symbol);
                self.form.clear_after_submit();
                self.notify(notification);
                true
            }
            Err(e) if e.is_invalid_input() => {
                self.notify(Notification::invalid_input());
                false
            }
            Err(e) => {
                error!(error = %e, "failed to save transaction");
                self.notify(Notification::save_failed(&e));
                false
            }
        }
    }

    /// Show a transient message
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop expired notifications
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Scroll the balance register up
    pub fn scroll_up(&mut self) {
        self.register_offset = self.register_offset.saturating_sub(1);
    }

    /// Scroll the balance register down
    pub fn scroll_down(&mut self) {
        if self.register_offset + 1 < self.ledger.len() {
            self.register_offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Kind};
    use crate::tui::widgets::{Severity, INVALID_INPUT_MESSAGE};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Ledger, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::load(temp_dir.path().join("finances.csv"));
        (temp_dir, ledger, Settings::default())
    }

    fn last_notification(app: &App) -> (String, Severity) {
        let n = app.notifications.latest().unwrap();
        (n.message.clone(), n.severity)
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ActiveTab::AddTransaction.next(), ActiveTab::Balance);
        assert_eq!(ActiveTab::Charts.next(), ActiveTab::AddTransaction);
        assert_eq!(ActiveTab::AddTransaction.prev(), ActiveTab::Charts);
    }

    #[test]
    fn test_submit_appends_and_clears_fields() {
        let (_temp_dir, mut ledger, settings) = setup();
        let mut app = App::new(&mut ledger, &settings);

        app.form.amount_input.set_value("1000");
        app.form.date_input.set_value("2024-01-01");
        app.form.kind = Kind::Income;
        app.form.category = Category::Salary;
        app.form.description_input.set_value("January");

        assert!(app.submit_form());
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.ledger.balance().value(), 1000.0);
        assert_eq!(app.form.amount_input.value(), "");
        assert_eq!(app.form.description_input.value(), "");
        // Date and selectors are kept for the next entry
        assert_eq!(app.form.date_input.value(), "2024-01-01");
        assert_eq!(app.form.category, Category::Salary);

        let (message, severity) = last_notification(&app);
        assert_eq!(message, "Added Income 1000.00 (Salary)");
        assert_eq!(severity, Severity::Recorded);
    }

    #[test]
    fn test_submit_invalid_amount_keeps_ledger() {
        let (_temp_dir, mut ledger, settings) = setup();
        let mut app = App::new(&mut ledger, &settings);

        app.form.amount_input.set_value("abc");
        assert!(!app.submit_form());
        assert!(app.ledger.is_empty());
        // Fields stay as typed so the user can fix them
        assert_eq!(app.form.amount_input.value(), "abc");

        let (message, severity) = last_notification(&app);
        assert_eq!(message, INVALID_INPUT_MESSAGE);
        assert_eq!(severity, Severity::Rejected);
    }

    #[test]
    fn test_switch_tab_leaves_editing() {
        let (_temp_dir, mut ledger, settings) = setup();
        let mut app = App::new(&mut ledger, &settings);

        app.start_editing();
        assert_eq!(app.input_mode, InputMode::Editing);

        app.switch_tab(ActiveTab::Charts);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.active_tab, ActiveTab::Charts);
    }
}
