use ratatui::style::Color;

use crate::model::status::{badge_for, config_for, HealthStatus};

/// Parses a `#rrggbb` design-palette value. Malformed input falls back to
/// gray rather than poisoning the frame.
pub fn hex_color(hex: &str) -> Color {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Gray;
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Gray,
    }
}

pub fn status_color(status: HealthStatus) -> Color {
    hex_color(config_for(status).color)
}

pub fn badge_color(status: Option<HealthStatus>) -> Color {
    hex_color(badge_for(status).color)
}
