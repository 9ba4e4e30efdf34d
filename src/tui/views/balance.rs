//! Balance tab
//!
//! Shows the balance, income and expense totals, and the ledger register.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Amount, Kind};
use crate::tui::app::App;

/// Render the balance tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Totals
            Constraint::Min(3),    // Register
        ])
        .split(area);

    render_totals(frame, app, chunks[0]);
    render_register(frame, app, chunks[1]);
}

fn amount_color(amount: Amount) -> Color {
    if amount.is_negative() {
        Color::Red
    } else {
        Color::Green
    }
}

fn render_totals(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let balance = app.ledger.balance();
    let income = app.ledger.total_by_type(Kind::Income);
    let expense = app.ledger.total_by_type(Kind::Expense);

    let block = Block::default()
        .title(" Balance ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::raw("Balance: "),
            Span::styled(
                balance.format_with_symbol(symbol),
                Style::default()
                    .fg(amount_color(balance))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Income:   ", Style::default().fg(Color::White)),
            Span::styled(income.format_with_symbol(symbol), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Expenses: ", Style::default().fg(Color::White)),
            Span::styled(expense.format_with_symbol(symbol), Style::default().fg(Color::Red)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_register(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Transactions ({}) ", app.ledger.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.ledger.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 1 to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Kind"),
        Cell::from("Category"),
        Cell::from("Amount"),
        Cell::from("Description"),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows = app
        .ledger
        .transactions()
        .iter()
        .skip(app.register_offset)
        .map(|txn| {
            let color = if txn.is_income() {
                Color::Green
            } else {
                Color::Red
            };
            Row::new(vec![
                Cell::from(txn.date.clone()),
                Cell::from(txn.kind.label()),
                Cell::from(txn.category.label()),
                Cell::from(txn.amount.to_string()).style(Style::default().fg(color)),
                Cell::from(txn.description_or_empty().to_string()),
            ])
        });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
