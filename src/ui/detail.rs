//! Recipe detail screen with step-by-step instructions

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{command_line, layout};
use crate::app::state::AppState;
use crate::recipe::StepNavigator;
use crate::theme::Theme;

const HINT: &str = "← previous  → next  f favorite  Esc back  : commands  ? help";

/// Draw the detail screen for the open recipe
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    layout::fill_background(frame, theme);
    let (main_area, command_area) = layout::split_command_line(frame.area());

    if let Some(nav) = state.detail() {
        let favorited = state.profile().favorites().iter().any(|r| r.id() == nav.recipe().id());
        draw_recipe(frame, main_area, nav, favorited, theme);
    }

    command_line::draw(frame, command_area, &state.command_line, theme, HINT);
}

fn draw_recipe(
    frame: &mut Frame,
    area: Rect,
    nav: &StepNavigator,
    favorited: bool,
    theme: &Theme,
) {
    let recipe = nav.recipe();
    let title = if favorited {
        format!(" ♥ {} ", recipe.name())
    } else {
        format!(" {} ", recipe.name())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(recipe_lines(nav, theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// All lines of the detail body, top to bottom
fn recipe_lines(nav: &StepNavigator, theme: &Theme) -> Vec<Line<'static>> {
    let recipe = nav.recipe();
    let muted = Style::default().fg(theme.fg_muted);

    let mut lines = vec![
        Line::from(Span::styled(format!("[ {} ]", recipe.image()), muted)),
        Line::default(),
        Line::from(Span::styled(
            recipe.name().to_string(),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Ingredients: {}", recipe.ingredients()),
            Style::default().fg(theme.fg_primary),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{} | {} min", recipe.nutrition(), recipe.time_minutes()),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    match nav.progress_label() {
        Some(label) => {
            lines.push(Line::from(Span::styled(label, muted)));
            lines.push(Line::from(Span::styled(
                nav.display_text().to_string(),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                nav.display_text().to_string(),
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(step_buttons(nav, theme));
    lines
}

/// Previous/Next buttons, greyed out when the move is not possible
fn step_buttons(nav: &StepNavigator, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        create_button(" ◀ Previous Step ", nav.can_go_previous(), theme),
        Span::raw("    "),
        create_button(" Next Step ▶ ", nav.can_go_next(), theme),
    ])
}

/// Create a styled button
fn create_button(text: &'static str, enabled: bool, theme: &Theme) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_muted).bg(theme.bg_tertiary)
    };
    Span::styled(text, style)
}
