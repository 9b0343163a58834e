//! Key reference screen

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout;
use crate::theme::Theme;

/// (keys, description) pairs, grouped by screen
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Search",
        &[
            ("type", "edit ingredients, comma separated"),
            ("Enter", "search (blank lists every recipe)"),
            ("Tab / Esc", "move to the result list"),
        ],
    ),
    (
        "Results",
        &[
            ("↑ ↓ / k j", "select a recipe"),
            ("Enter / l", "open recipe"),
            ("/ or i", "edit ingredients"),
        ],
    ),
    (
        "Recipe",
        &[
            ("← / h", "previous step"),
            ("→ / l", "next step"),
            ("f", "add to favorites"),
            ("Esc", "back to results"),
        ],
    ),
    (
        "Anywhere",
        &[
            ("Ctrl-t / t", "toggle dark mode"),
            (":", "commands: search, open, favorites, theme, q"),
            ("Ctrl-c", "quit"),
        ],
    ),
];

/// Draw the help screen
pub fn draw(frame: &mut Frame, theme: &Theme) {
    layout::fill_background(frame, theme);
    let area = frame.area();

    let block = Block::default()
        .title(" Help (any key to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let mut lines = Vec::new();
    for (heading, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(theme.fg_secondary)),
                Span::styled(*description, Style::default().fg(theme.fg_muted)),
            ]));
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
