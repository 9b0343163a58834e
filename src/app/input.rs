//! Key mapping per screen

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // List navigation
    Up,
    Down,

    // Selection
    Open,
    Back,

    // Browse
    Search,
    FocusQuery,
    FocusResults,

    // Steps
    PreviousStep,
    NextStep,
    Favorite,

    // Global
    ToggleTheme,
    CommandMode,
    Help,
    Quit,
}

/// Keys that work on every screen
fn global_action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        };
    }
    None
}

/// Mapping while the ingredient field has focus.
///
/// Printable keys are not mapped: they edit the query.
pub fn query_key_to_action(key: KeyEvent) -> Option<Action> {
    global_action(&key).or(match key.code {
        KeyCode::Enter => Some(Action::Search),
        KeyCode::Down | KeyCode::Tab | KeyCode::Esc => Some(Action::FocusResults),
        _ => None,
    })
}

/// Mapping while the result list has focus
pub fn results_key_to_action(key: KeyEvent, vim_mode: bool) -> Option<Action> {
    global_action(&key).or(match key.code {
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') if vim_mode => Some(Action::Up),
        KeyCode::Char('j') if vim_mode => Some(Action::Down),
        KeyCode::Char('l') if vim_mode => Some(Action::Open),
        KeyCode::Enter | KeyCode::Right => Some(Action::Open),
        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => Some(Action::FocusQuery),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    })
}

/// Mapping on the recipe detail screen
pub fn detail_key_to_action(key: KeyEvent, vim_mode: bool) -> Option<Action> {
    global_action(&key).or(match key.code {
        KeyCode::Left => Some(Action::PreviousStep),
        KeyCode::Right | KeyCode::Char(' ') => Some(Action::NextStep),
        KeyCode::Char('h') if vim_mode => Some(Action::PreviousStep),
        KeyCode::Char('l') if vim_mode => Some(Action::NextStep),
        KeyCode::Char('f') => Some(Action::Favorite),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Action::Back),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    })
}
