//! Help dialog
//!
//! Shows keyboard shortcuts for the current tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveTab, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app.active_tab))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Get help lines for the current tab
fn get_help_lines(tab: ActiveTab) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q/Esc", "Quit application"),
        key_line("Ctrl+c", "Quit from anywhere"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Next tab"),
        key_line("Shift+Tab", "Previous tab"),
        key_line("1/2/3", "Add / Balance / Charts"),
        Line::from(""),
    ];

    match tab {
        ActiveTab::AddTransaction => {
            lines.push(heading("Add Transaction"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter/a", "Start editing the form"));
            lines.push(key_line("Up/Down", "Move between fields"));
            lines.push(key_line("Left/Right", "Change kind or category"));
            lines.push(key_line("Enter", "Add the transaction"));
            lines.push(key_line("Esc", "Stop editing"));
        }
        ActiveTab::Balance => {
            lines.push(heading("Balance"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Scroll transactions"));
            lines.push(key_line("g", "Go to top"));
        }
        ActiveTab::Charts => {
            lines.push(heading("Charts"));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Charts follow the ledger and update after every addition.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
