//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveTab, App, InputMode};
use super::event::Event;
use super::views::add_transaction;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        // Terminal will redraw automatically
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Any key closes the help overlay
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => {
            add_transaction::handle_key(app, key);
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.switch_tab(app.active_tab.next());
            return;
        }
        KeyCode::BackTab => {
            app.switch_tab(app.active_tab.prev());
            return;
        }
        KeyCode::Char('1') => {
            app.switch_tab(ActiveTab::AddTransaction);
            return;
        }
        KeyCode::Char('2') => {
            app.switch_tab(ActiveTab::Balance);
            return;
        }
        KeyCode::Char('3') => {
            app.switch_tab(ActiveTab::Charts);
            return;
        }
        _ => {}
    }

    // Tab-specific keys
    match app.active_tab {
        ActiveTab::AddTransaction => {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('i')
            ) {
                app.start_editing();
            }
        }
        ActiveTab::Balance => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
            KeyCode::Char('g') | KeyCode::Home => app.register_offset = 0,
            _ => {}
        },
        ActiveTab::Charts => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::Ledger;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_event(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_tab_switching_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(temp_dir.path().join("finances.csv"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        handle_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab, ActiveTab::Balance);
        handle_event(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.active_tab, ActiveTab::AddTransaction);
        handle_event(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.active_tab, ActiveTab::Charts);
        assert!(!app.should_quit);

        handle_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_into_form_and_submitting() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(temp_dir.path().join("finances.csv"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Editing);

        // Replace the initial "0.0"
        for _ in 0..3 {
            handle_event(&mut app, key(KeyCode::Backspace));
        }
        type_text(&mut app, "250");

        // Down to Kind, switch to Expense
        handle_event(&mut app, key(KeyCode::Down));
        handle_event(&mut app, key(KeyCode::Down));
        handle_event(&mut app, key(KeyCode::Right));

        // 'q' is text while editing
        handle_event(&mut app, key(KeyCode::Down));
        handle_event(&mut app, key(KeyCode::Down));
        type_text(&mut app, "q");
        assert!(!app.should_quit);

        handle_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.ledger.len(), 1);
        let txn = &app.ledger.transactions()[0];
        assert_eq!(txn.amount.value(), 250.0);
        assert_eq!(txn.description.as_deref(), Some("q"));
        assert_eq!(app.ledger.balance().value(), -250.0);

        handle_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::load(temp_dir.path().join("finances.csv"));
        let settings = Settings::default();
        let mut app = App::new(&mut ledger, &settings);

        app.start_editing();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }
}
