//! Status bar view
//!
//! Shows the balance, the mode, the latest notification and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let balance = app.ledger.balance();
    let balance_color = if balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            balance.format_with_symbol(&app.settings.currency_symbol),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
    ];

    let mode = match app.input_mode {
        InputMode::Normal => Span::styled("NORMAL", Style::default().fg(Color::Cyan)),
        InputMode::Editing => Span::styled("EDITING", Style::default().fg(Color::Yellow)),
    };
    spans.push(mode);

    if let Some(notification) = app.notifications.latest() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            notification.message.clone(),
            Style::default().fg(notification.severity.color()),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Normal => " q:Quit  ?:Help  Tab:Next tab ",
        InputMode::Editing => " Enter:Add  Esc:Done ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
