//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
};

use crate::theme::Theme;

/// Paint the whole frame with the theme background
pub fn fill_background(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);
}

/// Split off the one-line command line at the bottom of `area`
pub fn split_command_line(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Border color for a panel
pub fn border_color(theme: &Theme, focused: bool) -> Color {
    if focused { theme.border_focused } else { theme.border }
}
