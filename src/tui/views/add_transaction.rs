//! Add transaction tab
//!
//! Form with amount, date, kind, category and description fields. Text fields
//! take typed input; kind and category are selectors cycled with Left/Right.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, Kind, TransactionDraft};
use crate::tui::app::{App, InputMode};
use crate::tui::widgets::input::TextInput;

/// Initial text of the amount field
pub const DEFAULT_AMOUNT: &str = "0.0";

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Amount,
    Date,
    Kind,
    Category,
    Description,
}

impl TransactionField {
    /// Get the next field
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Kind,
            Self::Kind => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
        }
    }

    /// Get the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Date => Self::Amount,
            Self::Kind => Self::Date,
            Self::Category => Self::Kind,
            Self::Description => Self::Category,
        }
    }

    fn is_selector(self) -> bool {
        matches!(self, Self::Kind | Self::Category)
    }
}

/// State for the add-transaction form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,

    /// Amount input
    pub amount_input: TextInput,

    /// Date input
    pub date_input: TextInput,

    /// Selected kind
    pub kind: Kind,

    /// Selected category
    pub category: Category,

    /// Description input
    pub description_input: TextInput,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: TransactionField::Amount,
            amount_input: TextInput::new()
                .label("Amount")
                .placeholder("e.g. 250.00")
                .content(DEFAULT_AMOUNT),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            kind: Kind::Income,
            category: Category::Food,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Optional note"),
        }
    }

    /// Focus or unfocus the form as a whole
    pub fn set_focused(&mut self, focused: bool) {
        if focused {
            self.update_focus();
        } else {
            self.amount_input.focused = false;
            self.date_input.focused = false;
            self.description_input.focused = false;
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.date_input.focused = self.focused_field == TransactionField::Date;
        self.description_input.focused = self.focused_field == TransactionField::Description;
    }

    /// The focused text field, if the focus is not on a selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Kind | TransactionField::Category => None,
        }
    }

    /// Step the focused selector forwards or backwards
    pub fn cycle_selector(&mut self, forward: bool) {
        match self.focused_field {
            TransactionField::Kind => self.kind = cycle(&Kind::ALL, self.kind, forward),
            TransactionField::Category => {
                self.category = cycle(&Category::ALL, self.category, forward)
            }
            _ => {}
        }
    }

    /// Snapshot the form as an unvalidated draft
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft::new(
            self.date_input.value(),
            self.amount_input.value(),
            self.kind,
            self.category,
        )
        .with_description(self.description_input.value())
    }

    /// Reset the per-entry fields after a successful submit
    pub fn clear_after_submit(&mut self) {
        self.amount_input.clear();
        self.description_input.clear();
        self.focused_field = TransactionField::Amount;
        if self.amount_input.focused || self.date_input.focused || self.description_input.focused
        {
            self.update_focus();
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % all.len()
    } else {
        (pos + all.len() - 1) % all.len()
    };
    all[next]
}

/// Render the add-transaction tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" New transaction ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    frame.render_widget(&form.amount_input, chunks[0]);
    frame.render_widget(&form.date_input, chunks[1]);
    render_selector(
        frame,
        chunks[2],
        "Kind",
        form.kind.label(),
        editing && form.focused_field == TransactionField::Kind,
    );
    render_selector(
        frame,
        chunks[3],
        "Category",
        form.category.label(),
        editing && form.focused_field == TransactionField::Category,
    );
    frame.render_widget(&form.description_input, chunks[4]);

    let hints = if editing {
        Line::from(vec![
            Span::styled("[Up/Down]", Style::default().fg(Color::Yellow)),
            Span::raw(" Field  "),
            Span::styled("[Left/Right]", Style::default().fg(Color::Yellow)),
            Span::raw(" Choose  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Add  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Done"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[Enter/a]", Style::default().fg(Color::Green)),
            Span::raw(" Start entering a transaction"),
        ])
    };
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn render_selector(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let line = Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(format!("< {} >", value), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Handle a key while the form is being edited
///
/// Returns true if the key was consumed.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.stop_editing();
        }
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Down | KeyCode::Tab => app.form.next_field(),
        KeyCode::Up | KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Left if app.form.focused_field.is_selector() => app.form.cycle_selector(false),
        KeyCode::Right if app.form.focused_field.is_selector() => app.form.cycle_selector(true),
        code => {
            let Some(input) = app.form.focused_input() else {
                return false;
            };
            match code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => return false,
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let form = TransactionFormState::new();
        assert_eq!(form.amount_input.value(), DEFAULT_AMOUNT);
        assert_eq!(form.date_input.value().len(), 10);
        assert_eq!(form.description_input.value(), "");
        assert_eq!(form.focused_field, TransactionField::Amount);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = TransactionFormState::new();
        form.prev_field();
        assert_eq!(form.focused_field, TransactionField::Description);
        assert!(form.description_input.focused);

        form.next_field();
        form.next_field();
        assert_eq!(form.focused_field, TransactionField::Date);
        assert!(form.focused_input().is_some());

        form.next_field();
        assert!(form.focused_input().is_none());
    }

    #[test]
    fn test_selectors_cycle() {
        let mut form = TransactionFormState::new();
        form.focused_field = TransactionField::Kind;
        form.cycle_selector(true);
        assert_eq!(form.kind, Kind::Expense);
        form.cycle_selector(true);
        assert_eq!(form.kind, Kind::Income);

        form.focused_field = TransactionField::Category;
        form.cycle_selector(false);
        assert_eq!(form.category, Category::Other);
    }

    #[test]
    fn test_to_draft_copies_fields() {
        let mut form = TransactionFormState::new();
        form.amount_input.set_value("200");
        form.date_input.set_value("2024-01-02");
        form.kind = Kind::Expense;
        form.description_input.set_value("groceries");

        let draft = form.to_draft();
        assert_eq!(
            draft,
            TransactionDraft::new("2024-01-02", "200", Kind::Expense, Category::Food)
                .with_description("groceries")
        );
    }
}
