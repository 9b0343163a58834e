//! Application state definitions

use std::time::Instant;

use crate::config::Config;
use crate::recipe::{Recipe, RecipeStore, StepNavigator, UserProfile};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the recipe fetch
    #[default]
    Loading,
    /// Query input and result list
    Browse,
    /// One recipe with its steps
    Detail,
    Help,
}

/// Which part of the browse screen receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Query,
    Results,
}

/// Editable single-line text with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Input buffer
    pub text: String,
    /// Cursor position (character index)
    pub cursor: usize,
}

impl TextInput {
    /// Replace the whole buffer and put the cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }

    /// Get the number of characters in input
    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    /// Delete character at cursor
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

/// Selection and scrolling for the result list
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    /// Currently selected result index
    pub selected: usize,
    /// Index of the first visible result
    pub scroll_offset: usize,
    /// How many results fit on screen (updated on render)
    pub visible_items: usize,
}

impl ResultsState {
    /// Move selection down, stopping at the last of `len` results
    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
        self.ensure_selection_visible();
    }

    /// Move selection up, stopping at the first result
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selection_visible();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Ensure the selected item is visible by adjusting scroll offset
    pub fn ensure_selection_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        if self.visible_items > 0 && self.selected >= self.scroll_offset + self.visible_items {
            self.scroll_offset = self.selected + 1 - self.visible_items;
        }
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line hidden or showing status
    #[default]
    Normal,
    /// Accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: TextInput,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 100;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Check if we're in input mode
    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Add to history, skipping empty commands and immediate repeats
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input.set(self.history[index].clone());
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else { return };
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.input.set(self.history[i + 1].clone());
        } else {
            self.history_index = None;
            self.input.clear();
        }
    }
}

/// Spinner shown while recipes are being fetched
#[derive(Debug, Clone)]
pub struct LoadingAnimation {
    /// When the animation started
    pub start_time: Instant,
    /// Current animation frame
    pub current_frame: usize,
}

impl Default for LoadingAnimation {
    fn default() -> Self {
        Self { start_time: Instant::now(), current_frame: 0 }
    }
}

impl LoadingAnimation {
    pub const MS_PER_FRAME: u128 = 80;
    pub const FRAMES: [&'static str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    /// Advance the animation based on elapsed time
    pub fn tick(&mut self) {
        let elapsed_ms = self.start_time.elapsed().as_millis();
        self.current_frame = (elapsed_ms / Self::MS_PER_FRAME) as usize;
    }

    /// Spinner glyph for the current frame
    pub fn spinner(&self) -> &'static str {
        Self::FRAMES[self.current_frame % Self::FRAMES.len()]
    }
}

/// Full application state.
///
/// Domain state (catalogue, results, detail view, profile, theme flag) is
/// private and changes only through [`AppState::apply`] with an
/// [`Intent`](super::intent::Intent). View state is public.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Screen to return to when help is closed
    pub help_return: Screen,

    /// Loading spinner state
    pub loading: LoadingAnimation,

    /// Focused browse widget
    pub focus: Focus,

    /// Raw ingredient query as typed
    pub query: TextInput,

    /// Result list selection
    pub results_state: ResultsState,

    /// Command line state
    pub command_line: CommandLineState,

    pub(super) store: Option<RecipeStore>,
    pub(super) results: Vec<Recipe>,
    pub(super) searched: bool,
    pub(super) detail: Option<StepNavigator>,
    pub(super) dark_mode: bool,
    pub(super) profile: UserProfile,
}

impl AppState {
    /// Fresh session state for a configuration
    pub fn new(config: &Config) -> Self {
        Self {
            dark_mode: config.dark_mode,
            profile: UserProfile::new(config.profile_name.clone()),
            ..Default::default()
        }
    }

    /// Install the fetched catalogue and leave the loading screen
    pub fn finish_loading(&mut self, recipes: Vec<Recipe>) {
        if self.store.is_some() {
            tracing::warn!("Ignoring second recipe delivery");
            return;
        }
        self.store = Some(RecipeStore::new(recipes));
        if self.screen == Screen::Loading {
            self.screen = Screen::Browse;
        }
    }

    /// The loaded catalogue, if the fetch has completed
    pub fn store(&self) -> Option<&RecipeStore> {
        self.store.as_ref()
    }

    /// Results of the most recent search
    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// Whether a search has been run this session
    pub fn has_searched(&self) -> bool {
        self.searched
    }

    /// Result under the list selection
    pub fn selected_result(&self) -> Option<&Recipe> {
        self.results.get(self.results_state.selected)
    }

    /// The recipe detail view, when open
    pub fn detail(&self) -> Option<&StepNavigator> {
        self.detail.as_ref()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Open the help screen, remembering where to go back to
    pub fn show_help(&mut self) {
        if self.screen != Screen::Help {
            self.help_return = self.screen;
            self.screen = Screen::Help;
        }
    }

    pub fn close_help(&mut self) {
        if self.screen == Screen::Help {
            self.screen = self.help_return;
        }
    }
}
