//! Application state and event handling

pub mod command;
pub mod input;
pub mod intent;
pub mod state;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::recipe::{PendingFetch, SeededRecipes};
use crate::ui;
use command::{Command, parse_command};
use input::Action;
pub use intent::Intent;
use state::{AppState, Focus, Screen};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Recipe fetch started at launch
    fetch: PendingFetch,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance and start fetching recipes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let state = AppState::new(&config);
        let fetch = PendingFetch::spawn(SeededRecipes::new(config.fetch_delay()));

        Ok(Self { config, state, fetch, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            if let Some(recipes) = self.fetch.poll() {
                tracing::debug!("Recipes arrived, leaving loading screen");
                self.state.finish_loading(recipes);
            }

            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.config);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && handle_key(&mut self.state, key, self.config.vim_mode)
                    {
                        break;
                    }
                }
            }

            // Update animations
            if self.state.screen == Screen::Loading {
                self.state.loading.tick();
            }

            // Let the fetch task progress on single-threaded runtimes
            tokio::task::yield_now().await;
        }

        tracing::info!(favorites = self.state.profile().favorites().len(), "Exiting");
        self.restore_terminal()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Handle a key press, returns true if the app should exit
pub fn handle_key(state: &mut AppState, key: KeyEvent, vim_mode: bool) -> bool {
    if state.command_line.is_input_mode() {
        return handle_command_line_key(state, key);
    }

    let action = match state.screen {
        Screen::Loading => input::query_key_to_action(key)
            .filter(|a| *a == Action::Quit)
            .or((key.code == KeyCode::Char('q')).then_some(Action::Quit)),
        Screen::Help => {
            state.close_help();
            None
        }
        Screen::Browse => match state.focus {
            Focus::Query => {
                let action = input::query_key_to_action(key);
                if action.is_none() {
                    edit_query(state, key);
                }
                action
            }
            Focus::Results => input::results_key_to_action(key, vim_mode),
        },
        Screen::Detail => input::detail_key_to_action(key, vim_mode),
    };

    action.is_some_and(|action| dispatch(state, action))
}

/// Apply a line-editing key to the ingredient query
fn edit_query(state: &mut AppState, key: KeyEvent) {
    let query = &mut state.query;
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
        KeyCode::Char(c) => query.insert_char(c),
        KeyCode::Backspace => query.delete_char(),
        KeyCode::Delete => query.delete_char_forward(),
        KeyCode::Left => query.move_left(),
        KeyCode::Right => query.move_right(),
        KeyCode::Home => query.move_start(),
        KeyCode::End => query.move_end(),
        _ => {}
    }
}

/// Carry out an action, returns true if the app should exit
fn dispatch(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::Up => state.results_state.select_previous(),
        Action::Down => {
            let len = state.results().len();
            state.results_state.select_next(len);
        }
        Action::Open => {
            if let Some(id) = state.selected_result().map(|r| r.id()) {
                state.command_line.clear_message();
                state.apply(Intent::SelectRecipe(id));
            }
        }
        Action::Back => {
            state.command_line.clear_message();
            state.apply(Intent::CloseRecipe);
        }
        Action::Search => {
            state.apply(Intent::TriggerSearch);
            state.focus = Focus::Results;
            report_matches(state);
        }
        Action::FocusQuery => state.focus = Focus::Query,
        Action::FocusResults => state.focus = Focus::Results,
        Action::PreviousStep => state.apply(Intent::StepPrevious),
        Action::NextStep => state.apply(Intent::StepNext),
        Action::Favorite => {
            if let Some(recipe) = state.detail().map(|nav| nav.recipe().clone()) {
                state.apply(Intent::AddFavorite(recipe.id()));
                let count = state.profile().favorites().len();
                state
                    .command_line
                    .set_message(format!("♥ Added {} to favorites ({count})", recipe.name()));
            }
        }
        Action::ToggleTheme => state.apply(Intent::ToggleTheme),
        Action::CommandMode => state.command_line.enter_command_mode(),
        Action::Help => state.show_help(),
    }
    false
}

fn report_matches(state: &mut AppState) {
    match state.results().len() {
        0 => state.command_line.clear_message(),
        1 => state.command_line.set_message("1 recipe found"),
        n => state.command_line.set_message(format!("{n} recipes found")),
    }
}

/// Handle a key while the : command line is open
fn handle_command_line_key(state: &mut AppState, key: KeyEvent) -> bool {
    let cmd = &mut state.command_line;
    match key.code {
        KeyCode::Esc => cmd.exit_input_mode(),
        KeyCode::Enter => {
            let line = cmd.input.text.clone();
            cmd.add_to_history(line.clone());
            cmd.exit_input_mode();
            return run_command_line(state, &line);
        }
        KeyCode::Backspace if cmd.input.text.is_empty() => cmd.exit_input_mode(),
        KeyCode::Backspace => cmd.input.delete_char(),
        KeyCode::Delete => cmd.input.delete_char_forward(),
        KeyCode::Left => cmd.input.move_left(),
        KeyCode::Right => cmd.input.move_right(),
        KeyCode::Home => cmd.input.move_start(),
        KeyCode::End => cmd.input.move_end(),
        KeyCode::Up => cmd.history_up(),
        KeyCode::Down => cmd.history_down(),
        KeyCode::Char(c) => cmd.input.insert_char(c),
        _ => {}
    }
    false
}

/// Parse and execute a : command line, returns true if the app should exit
pub fn run_command_line(state: &mut AppState, line: &str) -> bool {
    match parse_command(line) {
        Ok(command) => execute_command(state, command),
        Err(e) => {
            state.command_line.set_error(e.to_string());
            false
        }
    }
}

/// Execute a parsed command, returns true if the app should exit
pub fn execute_command(state: &mut AppState, command: Command) -> bool {
    match command {
        Command::Quit => return true,
        Command::Nop => state.command_line.clear_message(),
        Command::Help => state.show_help(),
        Command::Theme => state.apply(Intent::ToggleTheme),
        Command::Search(query) => {
            state.apply(Intent::CloseRecipe);
            state.apply(Intent::SetIngredientQuery(query));
            state.apply(Intent::TriggerSearch);
            state.focus = Focus::Results;
            report_matches(state);
        }
        Command::Favorites => {
            let favorites = state.profile().favorites();
            let message = if favorites.is_empty() {
                "No favorites yet. Press f on a recipe to add it".to_string()
            } else {
                let names: Vec<&str> = favorites.iter().map(|r| r.name()).collect();
                format!("Favorites ({}): {}", names.len(), names.join(", "))
            };
            state.command_line.set_message(message);
        }
        Command::Open(name) => {
            let Some(store) = state.store() else {
                state.command_line.set_error("Recipes are still loading");
                return false;
            };
            let found = store.find_by_name(&name).map(|r| r.id());
            match found {
                Some(id) => {
                    state.command_line.clear_message();
                    state.apply(Intent::SelectRecipe(id));
                }
                None => state.command_line.set_error(format!("No recipe named '{name}'")),
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{StepNavigator, seeded_recipes};
    use pretty_assertions::assert_eq;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(&Config::default());
        state.finish_loading(seeded_recipes());
        state
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE), true)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_then_enter_searches() {
        let mut state = loaded_state();
        type_text(&mut state, "Banana, Milk");
        assert_eq!(state.query.text, "Banana, Milk");
        assert!(state.results().is_empty());

        press(&mut state, KeyCode::Enter);
        let names: Vec<&str> = state.results().iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Smoothie"]);
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(state.command_line.message.as_deref(), Some("1 recipe found"));
    }

    #[test]
    fn q_in_query_is_text_not_quit() {
        let mut state = loaded_state();
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.query.text, "q");
    }

    #[test]
    fn q_in_results_quits() {
        let mut state = loaded_state();
        state.focus = Focus::Results;
        assert!(press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn q_quits_while_loading() {
        let mut state = AppState::new(&Config::default());
        assert!(press(&mut state, KeyCode::Char('q')));
        let mut state = AppState::new(&Config::default());
        assert!(!press(&mut state, KeyCode::Char('x')));
    }

    #[test]
    fn open_and_step_with_keys() {
        let mut state = loaded_state();
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.screen, Screen::Detail);
        assert_eq!(state.detail().map(|n| n.recipe().name()), Some("Grilled Cheese"));

        press(&mut state, KeyCode::Char('l'));
        press(&mut state, KeyCode::Right);
        assert_eq!(state.detail().map(StepNavigator::cursor), Some(1));
        assert_eq!(state.detail().map(StepNavigator::display_text), Some("Grill with cheese"));

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.detail().is_none());
    }

    #[test]
    fn favorite_key_reports_count() {
        let mut state = loaded_state();
        execute_command(&mut state, Command::Open("smoothie".into()));
        press(&mut state, KeyCode::Char('f'));
        press(&mut state, KeyCode::Char('f'));

        assert_eq!(state.profile().favorites().len(), 2);
        assert_eq!(
            state.command_line.message.as_deref(),
            Some("♥ Added Smoothie to favorites (2)")
        );
    }

    #[test]
    fn ctrl_t_toggles_theme_while_typing() {
        let mut state = loaded_state();
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL), true);
        assert!(state.dark_mode());
        assert!(state.query.text.is_empty());
    }

    #[test]
    fn command_line_round_trip() {
        let mut state = loaded_state();
        state.focus = Focus::Results;
        press(&mut state, KeyCode::Char(':'));
        assert!(state.command_line.is_input_mode());

        type_text(&mut state, "search honey");
        press(&mut state, KeyCode::Enter);

        assert!(!state.command_line.is_input_mode());
        assert_eq!(state.query.text, "honey");
        assert_eq!(state.results().len(), 2);
        assert_eq!(state.command_line.history, ["search honey"]);
    }

    #[test]
    fn quit_command_exits() {
        let mut state = loaded_state();
        assert!(run_command_line(&mut state, "q"));
    }

    #[test]
    fn unknown_command_sets_error() {
        let mut state = loaded_state();
        assert!(!run_command_line(&mut state, "bake"));
        assert!(state.command_line.is_error);
        assert_eq!(state.command_line.message.as_deref(), Some("Unknown command: bake"));
    }

    #[test]
    fn open_unknown_recipe_sets_error() {
        let mut state = loaded_state();
        execute_command(&mut state, Command::Open("Lasagna".into()));
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.command_line.is_error);
    }

    #[test]
    fn open_before_loading_sets_error() {
        let mut state = AppState::new(&Config::default());
        execute_command(&mut state, Command::Open("Smoothie".into()));
        assert_eq!(state.command_line.message.as_deref(), Some("Recipes are still loading"));
    }

    #[test]
    fn favorites_command_lists_names() {
        let mut state = loaded_state();
        execute_command(&mut state, Command::Favorites);
        assert!(state.command_line.message.as_deref().unwrap().starts_with("No favorites"));

        execute_command(&mut state, Command::Open("Fruit Salad".into()));
        press(&mut state, KeyCode::Char('f'));
        execute_command(&mut state, Command::Favorites);
        assert_eq!(state.command_line.message.as_deref(), Some("Favorites (1): Fruit Salad"));
    }

    #[test]
    fn search_command_from_detail_returns_to_browse() {
        let mut state = loaded_state();
        execute_command(&mut state, Command::Open("Smoothie".into()));
        execute_command(&mut state, Command::Search(String::new()));
        assert_eq!(state.screen, Screen::Browse);
        assert_eq!(state.results().len(), 5);
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut state = loaded_state();
        state.focus = Focus::Results;
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.screen, Screen::Help);
        press(&mut state, KeyCode::Char('x'));
        assert_eq!(state.screen, Screen::Browse);
    }
}
