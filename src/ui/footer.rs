use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::model::status::{badge_for, config_for, Severity};
use crate::ui::theme::badge_color;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    spans.push(hint("↑↓", "navigate"));
    spans.push(hint("r", "refresh"));
    spans.push(hint("q", "quit"));

    let items = app.fetcher.items();

    // Badge for the selected row; falls back to the unknown style when the
    // list is empty.
    let selected = items.get(app.selected_item).map(|item| item.health_status);
    let badge = badge_for(selected);
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!(" {} ", badge.label),
        Style::default().fg(badge_color(selected)),
    ));

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("{} of {} items", items.len(), app.fetcher.total()),
        Style::default().fg(ratatui::style::Color::DarkGray),
    ));

    if let Some((page, limit)) = app.fetcher.pagination() {
        spans.push(Span::styled(
            format!("  page {page} ({limit}/page)"),
            Style::default().fg(ratatui::style::Color::DarkGray),
        ));
    }

    let attention = items
        .iter()
        .filter(|item| config_for(item.health_status).severity != Severity::Success)
        .count();
    if attention > 0 {
        spans.push(Span::styled(
            format!("  {attention} need attention"),
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
    }

    if let Some(error) = app.fetcher.error() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            error.to_string(),
            Style::default().fg(ratatui::style::Color::Red),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);
    f.render_widget(paragraph, area);
}

fn hint(key: &str, desc: &str) -> Span<'static> {
    Span::styled(
        format!(" {key}:{desc} "),
        Style::default().fg(ratatui::style::Color::DarkGray),
    )
}
