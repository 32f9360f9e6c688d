use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::model::status::config_for;
use crate::ui::theme::{hex_color, status_color};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["Module", "Owner", "PM", "Team", "Status", "OKR"]).style(
        Style::default()
            .fg(ratatui::style::Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .fetcher
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.selected_item;

            let config = config_for(item.health_status);
            let status_cell = Cell::from(Span::styled(
                config.label,
                Style::default()
                    .fg(status_color(item.health_status))
                    .bg(hex_color(config.background_color)),
            ));

            let row = Row::new(vec![
                Cell::from(item.module_name.as_str()),
                Cell::from(item.owner.as_str()),
                Cell::from(item.pm.as_str()),
                Cell::from(item.team_working.as_str()),
                status_cell,
                Cell::from(item.okr_hierarchy.as_str()),
            ]);

            if selected {
                row.style(
                    Style::default()
                        .fg(ratatui::style::Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect();

    let title = if app.fetcher.loading() {
        " Execution Roadmap (loading...) "
    } else {
        " Execution Roadmap "
    };

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(13),
        Constraint::Percentage(13),
        Constraint::Percentage(14),
        Constraint::Percentage(12),
        Constraint::Percentage(26),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ratatui::style::Color::Cyan))
            .title(title),
    );

    f.render_widget(table, area);
}
