//! Command line UI component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

/// Draw the command line at the bottom of the screen, showing `hint` when idle
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme, hint: &str) {
    let line = match state.mode {
        CommandMode::Normal => match &state.message {
            Some(msg) => {
                let color = if state.is_error { theme.error } else { theme.fg_secondary };
                Line::from(Span::styled(msg.clone(), Style::default().fg(color)))
            }
            None => Line::from(Span::styled(hint.to_string(), Style::default().fg(theme.fg_muted))),
        },
        CommandMode::Command => {
            let text = format!(":{}", state.input.text);
            // +1 for the ':' prefix
            build_line_with_cursor(
                &text,
                state.input.cursor + 1,
                Style::default().fg(theme.accent_primary),
                theme,
            )
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg_primary));
    frame.render_widget(paragraph, area);
}

/// Build a line with a visible cursor
pub(super) fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();

    // Text before cursor
    if cursor_pos > 0 {
        let before: String = chars.iter().take(cursor_pos).collect();
        spans.push(Span::styled(before, base_style));
    }

    // Cursor character (or space if at end)
    let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);
    spans.push(Span::styled(cursor_char.to_string(), cursor_style));

    // Text after cursor
    if cursor_pos + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor_pos + 1).collect();
        spans.push(Span::styled(after, base_style));
    }

    Line::from(spans)
}
