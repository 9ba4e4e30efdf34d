//! TUI Views module
//!
//! Contains the three tabs (add transaction, balance, charts) as well as the
//! tab bar and status bar.

pub mod add_transaction;
pub mod balance;
pub mod charts;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveTab, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_tab {
        ActiveTab::AddTransaction => add_transaction::render(frame, app, layout.main),
        ActiveTab::Balance => balance::render(frame, app, layout.main),
        ActiveTab::Charts => charts::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.latest() {
        let width = (notification.message.chars().count() as u16).saturating_add(4).max(24);
        frame.render_widget(notification, toast_rect(width, 3, layout.main));
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Finance Tracker ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    frame.render_widget(tabs, area);
}
