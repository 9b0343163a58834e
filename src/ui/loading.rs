//! Loading screen shown while the recipe catalogue is fetched

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::layout;
use crate::app::state::LoadingAnimation;
use crate::theme::Theme;

const TITLE: &str = "QUICK RECIPES";
const TAGLINE: &str = "Cook with what you already have";
const STATUS: &str = "Fetching recipes...";

/// Draw the loading screen
pub fn draw(frame: &mut Frame, animation: &LoadingAnimation, theme: &Theme) {
    layout::fill_background(frame, theme);
    let area = frame.area();

    let title_y = area.height / 3;
    let rows = [
        (
            title_y,
            TITLE.to_string(),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        (title_y + 2, TAGLINE.to_string(), Style::default().fg(theme.fg_muted)),
        (
            title_y + 5,
            format!("{} {}", animation.spinner(), STATUS),
            Style::default().fg(theme.fg_secondary),
        ),
    ];

    for (y, text, style) in rows {
        if y >= area.height {
            continue;
        }
        let row = Rect { x: area.x, y: area.y + y, width: area.width, height: 1 };
        let paragraph =
            Paragraph::new(text).style(style.bg(theme.bg_primary)).alignment(Alignment::Center);
        frame.render_widget(paragraph, row);
    }
}
