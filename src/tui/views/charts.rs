//! Charts tab
//!
//! "Expenses by category" as horizontal bars labelled with percentage shares,
//! and "Income vs expenses" as totals plus grouped bars per date.
//!
//! Bar widgets only take unsigned integers, so bar lengths are scaled against
//! the largest value on the chart while the labels carry the real totals.
//! Anything not positive is drawn as an empty bar.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_percentage;
use crate::models::{Amount, Kind};
use crate::reports::{CategoryBreakdown, DailyTotals, IncomeExpenseSplit};
use crate::tui::app::App;
use crate::tui::layout::ChartsLayout;

const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Red;

/// Render the charts tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ChartsLayout::new(area);

    render_categories(frame, app, layout.categories);
    render_split(frame, app, layout.split_summary);
    render_daily(frame, app, layout.daily);
}

/// Resolution of a full-length bar
const BAR_SCALE: f64 = 10_000.0;

/// Columns the horizontal chart needs next to its labels to draw anything
const MIN_BAR_COLUMNS: u16 = 12;

/// Largest positive value among `amounts`, or 0
fn chart_max<I: IntoIterator<Item = Amount>>(amounts: I) -> f64 {
    amounts
        .into_iter()
        .map(|a| a.value())
        .fold(0.0_f64, f64::max)
}

fn bar_value(amount: Amount, max: f64) -> u64 {
    if !amount.is_positive() || max <= 0.0 {
        return 0;
    }
    ((amount.value() / max).min(1.0) * BAR_SCALE).round() as u64
}

fn chart_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let breakdown = CategoryBreakdown::for_kind(app.ledger, Kind::Expense);
    let block = chart_block(" Expenses by category ");

    if breakdown.is_empty() {
        let text = Paragraph::new("No expenses recorded.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let label_width = breakdown
        .slices
        .iter()
        .map(|s| s.category.label().chars().count() as u16)
        .max()
        .unwrap_or(0);
    if area.width.saturating_sub(2) < label_width + 1 + MIN_BAR_COLUMNS {
        let lines: Vec<Line> = breakdown
            .slices
            .iter()
            .map(|slice| {
                Line::from(format!(
                    "{} {} ({})",
                    slice.category.label(),
                    slice.total,
                    format_percentage(slice.percentage)
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
        return;
    }

    let max = chart_max(breakdown.slices.iter().map(|s| s.total));
    let bars: Vec<Bar> = breakdown
        .slices
        .iter()
        .map(|slice| {
            Bar::default()
                .value(bar_value(slice.total, max))
                .label(Line::from(slice.category.label()))
                .text_value(format!(
                    "{} ({})",
                    slice.total,
                    format_percentage(slice.percentage)
                ))
                .style(Style::default().fg(EXPENSE_COLOR))
                .value_style(Style::default().fg(Color::White).bg(EXPENSE_COLOR))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_split(frame: &mut Frame, app: &App, area: Rect) {
    let split = IncomeExpenseSplit::from_ledger(app.ledger);
    let symbol = app.settings.currency_symbol.as_str();

    let lines = vec![
        Line::from(vec![
            Span::styled("Income:   ", Style::default().fg(INCOME_COLOR)),
            Span::raw(format!(
                "{:>12}  {}",
                split.income.format_with_symbol(symbol),
                format_percentage(split.income_percentage)
            )),
        ]),
        Line::from(vec![
            Span::styled("Expenses: ", Style::default().fg(EXPENSE_COLOR)),
            Span::raw(format!(
                "{:>12}  {}",
                split.expense.format_with_symbol(symbol),
                format_percentage(split.expense_percentage)
            )),
        ]),
        Line::from(vec![
            Span::styled("Balance:  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:>12}", split.balance.format_with_symbol(symbol))),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(chart_block(" Income vs expenses "));
    frame.render_widget(paragraph, area);
}

fn render_daily(frame: &mut Frame, app: &App, area: Rect) {
    let days = DailyTotals::from_ledger(app.ledger);
    let block = chart_block(" By date ");

    if days.is_empty() {
        let text = Paragraph::new("No transactions yet.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    // Each group takes two bars plus a gap; keep the most recent dates that fit
    let inner_width = area.width.saturating_sub(2) as usize;
    let visible = (inner_width / 8).max(1);
    let start = days.len().saturating_sub(visible);
    let max = chart_max(
        days[start..]
            .iter()
            .flat_map(|day| [day.income, day.expense]),
    );

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);

    for day in &days[start..] {
        let bars = [
            Bar::default()
                .value(bar_value(day.income, max))
                .text_value(String::new())
                .style(Style::default().fg(INCOME_COLOR)),
            Bar::default()
                .value(bar_value(day.expense, max))
                .text_value(String::new())
                .style(Style::default().fg(EXPENSE_COLOR)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(short_date(&day.date)))
                .bars(&bars),
        );
    }

    frame.render_widget(chart, area);
}

/// Trim a date label to fit under a bar group
fn short_date(date: &str) -> String {
    // "2024-01-15" -> "01-15"
    if date.len() == 10 && date.is_char_boundary(5) {
        date[5..].to_string()
    } else {
        date.chars().take(6).collect()
    }
}
