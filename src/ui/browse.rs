//! Browse screen: welcome header, ingredient field and result cards

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{command_line, layout};
use crate::app::state::{AppState, Focus};
use crate::recipe::Recipe;
use crate::theme::Theme;

const PLACEHOLDER: &str = "Enter ingredients (e.g., Banana, Milk)";
const NO_RESULTS: &str = "No recipes found! Try different ingredients.";

/// Lines taken by one result card (name, summary, spacer)
const CARD_HEIGHT: usize = 3;

/// Draw the browse screen
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    layout::fill_background(frame, theme);
    let (main_area, command_area) = layout::split_command_line(frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(3)])
        .split(main_area);

    draw_header(frame, chunks[0], state, theme);
    draw_query(frame, chunks[1], state, theme);
    draw_results(frame, chunks[2], state, theme);

    let hint = match state.focus {
        Focus::Query => "Enter search  Tab results  Ctrl-t theme  Ctrl-c quit",
        Focus::Results => "Enter open  / edit query  t theme  : commands  ? help  q quit",
    };
    command_line::draw(frame, command_area, &state.command_line, theme, hint);
}

/// Welcome line with favorites count and theme indicator
fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let welcome = format!(" 👩‍🍳 Welcome, {}!", state.profile().name());
    let left = Paragraph::new(Span::styled(
        welcome,
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(left, area);

    let mode = if state.dark_mode() { "☾ dark" } else { "☀ light" };
    let status = format!("♥ {}  {} ", state.profile().favorites().len(), mode);
    let right = Paragraph::new(Span::styled(status, Style::default().fg(theme.accent_secondary)))
        .alignment(Alignment::Right);
    frame.render_widget(right, area);
}

/// Ingredient input box
fn draw_query(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Query;
    let block = Block::default()
        .title(" Ingredients ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(layout::border_color(theme, focused)))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query = &state.query;
    let line = if focused {
        command_line::build_line_with_cursor(
            &query.text,
            query.cursor,
            Style::default().fg(theme.fg_primary),
            theme,
        )
    } else if query.text.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.fg_muted)))
    } else {
        Line::from(Span::styled(query.text.clone(), Style::default().fg(theme.fg_secondary)))
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// Result list, one card per recipe
fn draw_results(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let focused = state.focus == Focus::Results;
    let title = if state.has_searched() {
        format!(" Recipes ({}) ", state.results().len())
    } else {
        " Recipes ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(layout::border_color(theme, focused)))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.results().is_empty() {
        let muted = Style::default().fg(theme.fg_muted);
        let mut lines = vec![Line::from(Span::styled(NO_RESULTS, muted))];
        if !state.has_searched() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Type ingredients and press Enter, or just Enter to see everything",
                muted,
            )));
        }
        let msg = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    // Update visible count for scroll calculations
    state.results_state.visible_items = (inner.height as usize / CARD_HEIGHT).max(1);
    state.results_state.ensure_selection_visible();

    let start = state.results_state.scroll_offset;
    let selected = state.results_state.selected;
    let lines: Vec<Line> = state
        .results()
        .iter()
        .enumerate()
        .skip(start)
        .take(state.results_state.visible_items)
        .flat_map(|(i, recipe)| card_lines(recipe, i == selected, focused, theme))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The lines of one recipe card
fn card_lines(
    recipe: &Recipe,
    selected: bool,
    focused: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let (marker, name_style) = if selected && focused {
        (
            "▌ ",
            Style::default()
                .fg(theme.accent_primary)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        )
    } else if selected {
        ("▌ ", Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD))
    };

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_primary)),
            Span::styled(recipe.name().to_string(), name_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(recipe.summary(), Style::default().fg(theme.info)),
        ]),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Intent;
    use crate::config::Config;
    use crate::recipe::seeded_recipes;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, state, &Theme::default())).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(&Config::default());
        state.finish_loading(seeded_recipes());
        state
    }

    #[test]
    fn header_welcomes_profile() {
        let mut state = loaded_state();
        let text = render(&mut state, 80, 24);
        assert!(text.contains("Welcome, Chef Alex!"));
    }

    #[test]
    fn empty_results_show_message() {
        let mut state = loaded_state();
        let text = render(&mut state, 80, 24);
        assert!(text.contains(NO_RESULTS));
    }

    #[test]
    fn search_results_render_as_cards() {
        let mut state = loaded_state();
        state.apply(Intent::SetIngredientQuery("honey".into()));
        state.apply(Intent::TriggerSearch);

        let text = render(&mut state, 80, 24);
        assert!(text.contains("Recipes (2)"));
        assert!(text.contains("Smoothie"));
        assert!(text.contains("5.0 | 5 min | 150 cal"));
        assert!(text.contains("Fruit Salad"));
        assert!(!text.contains("Pasta Salad"));
    }

    #[test]
    fn short_terminal_scrolls_to_selection() {
        let mut state = loaded_state();
        state.apply(Intent::TriggerSearch);
        state.focus = Focus::Results;
        for _ in 0..4 {
            state.results_state.select_next(5);
        }

        // 14 rows: header, query box, 9-row result box (7 inner), command line
        let text = render(&mut state, 60, 14);
        assert_eq!(state.results_state.visible_items, 2);
        assert!(text.contains("Fruit Salad"));
        assert!(!text.contains("Pasta Salad"));
    }

    #[test]
    fn card_marks_selection() {
        let recipe = seeded_recipes().remove(0);
        let theme = Theme::default();
        let lines = card_lines(&recipe, true, true, &theme);
        assert_eq!(lines.len(), CARD_HEIGHT);
        assert_eq!(lines[0].spans[0].content, "▌ ");
        assert_eq!(card_lines(&recipe, false, true, &theme)[0].spans[0].content, "  ");
    }
}
