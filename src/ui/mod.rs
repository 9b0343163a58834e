//! UI rendering components

pub mod browse;
pub mod command_line;
pub mod detail;
pub mod help;
pub mod layout;
pub mod loading;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::config::Config;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, config: &Config) {
    let theme = config.theme_for(state.dark_mode());

    match state.screen {
        Screen::Loading => loading::draw(frame, &state.loading, &theme),
        Screen::Browse => browse::draw(frame, state, &theme),
        Screen::Detail => detail::draw(frame, state, &theme),
        Screen::Help => help::draw(frame, &theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Intent;
    use crate::recipe::seeded_recipes;
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    #[test]
    fn theme_toggle_changes_background() {
        let config = Config::default();
        let mut state = AppState::new(&config);
        state.finish_loading(seeded_recipes());
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal.draw(|f| draw(f, &mut state, &config)).unwrap();
        let light_bg = terminal.backend().buffer()[(0, 5)].bg;

        state.apply(Intent::ToggleTheme);
        terminal.draw(|f| draw(f, &mut state, &config)).unwrap();
        let dark_bg = terminal.backend().buffer()[(0, 5)].bg;

        assert_eq!(light_bg, Color::Rgb(225, 226, 231));
        assert_eq!(dark_bg, Color::Rgb(26, 27, 38));
    }
}
