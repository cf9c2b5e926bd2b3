use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

/// Rectangle of at most `width` x `height` centered in `r`.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

/// Parse `#rrggbb` (or `rrggbb`) into a terminal color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Goal color, falling back to gray for values the backend let through.
pub fn goal_color(hex: &str) -> Color {
    parse_hex_color(hex).unwrap_or(Color::Gray)
}

/// Text progress bar, e.g. `███░░░░░░░` for 30% at width 10.
pub fn progress_bar(percentage: u8, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
