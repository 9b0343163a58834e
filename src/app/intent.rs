//! User intents and how they change the application state

use super::state::{AppState, Screen};
use crate::recipe::{RecipeId, StepNavigator, filter};

/// A discrete user action. Applying an intent never fails; intents that do
/// not fit the current state are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the raw ingredient query (no search yet)
    SetIngredientQuery(String),
    /// Filter the catalogue with the current query
    TriggerSearch,
    /// Open a recipe's detail view at its first step
    SelectRecipe(RecipeId),
    StepNext,
    StepPrevious,
    /// Append a recipe to the profile's favorites
    AddFavorite(RecipeId),
    /// Flip between light and dark display
    ToggleTheme,
    /// Leave the detail view
    CloseRecipe,
}

impl AppState {
    /// Apply an intent to the state
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SetIngredientQuery(text) => self.query.set(text),
            Intent::TriggerSearch => self.run_search(),
            Intent::SelectRecipe(id) => self.open_recipe(id),
            Intent::StepNext => {
                if let Some(nav) = self.detail.as_mut() {
                    nav.next();
                }
            }
            Intent::StepPrevious => {
                if let Some(nav) = self.detail.as_mut() {
                    nav.previous();
                }
            }
            Intent::AddFavorite(id) => self.add_favorite(id),
            Intent::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                tracing::debug!(dark_mode = self.dark_mode, "Toggled theme");
            }
            Intent::CloseRecipe => {
                self.detail = None;
                if self.screen == Screen::Detail {
                    self.screen = Screen::Browse;
                }
            }
        }
    }

    fn run_search(&mut self) {
        let recipes = self.store.as_ref().map(|s| s.all()).unwrap_or_default();
        self.results = filter(recipes, &self.query.text);
        self.searched = true;
        self.results_state.reset();
        tracing::info!(query = %self.query.text, matches = self.results.len(), "Searched recipes");
    }

    fn open_recipe(&mut self, id: RecipeId) {
        let Some(recipe) = self.store.as_ref().and_then(|s| s.get(id)) else {
            tracing::warn!(%id, "Cannot open unknown recipe");
            return;
        };
        tracing::debug!(name = recipe.name(), "Opened recipe");
        self.detail = Some(StepNavigator::new(recipe.clone()));
        self.screen = Screen::Detail;
    }

    fn add_favorite(&mut self, id: RecipeId) {
        if let Some(nav) = self.detail.as_ref().filter(|nav| nav.recipe().id() == id) {
            nav.add_to_favorites(&mut self.profile);
        } else if let Some(recipe) = self.store.as_ref().and_then(|s| s.get(id)) {
            self.profile.add_favorite(recipe.clone());
        } else {
            tracing::warn!(%id, "Cannot favorite unknown recipe");
            return;
        }
        tracing::info!(count = self.profile.favorites().len(), "Added favorite");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::recipe::{COMPLETION_MESSAGE, Recipe, seeded_recipes};
    use pretty_assertions::assert_eq;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(&Config::default());
        state.finish_loading(seeded_recipes());
        state
    }

    fn result_names(state: &AppState) -> Vec<&str> {
        state.results().iter().map(Recipe::name).collect()
    }

    fn id_of(state: &AppState, name: &str) -> RecipeId {
        state.store().and_then(|s| s.find_by_name(name)).map(Recipe::id).unwrap()
    }

    #[test]
    fn query_has_no_effect_until_search() {
        let mut state = loaded_state();
        state.apply(Intent::SetIngredientQuery("Banana, Milk".into()));
        assert!(state.results().is_empty());
        assert!(!state.has_searched());

        state.apply(Intent::TriggerSearch);
        assert_eq!(result_names(&state), ["Smoothie"]);
    }

    #[test]
    fn blank_search_lists_everything() {
        let mut state = loaded_state();
        state.apply(Intent::TriggerSearch);
        assert_eq!(
            result_names(&state),
            ["Pasta Salad", "Smoothie", "Grilled Cheese", "Veggie Stir-Fry", "Fruit Salad"]
        );
    }

    #[test]
    fn search_before_loading_finds_nothing() {
        let mut state = AppState::new(&Config::default());
        state.apply(Intent::TriggerSearch);
        assert!(state.results().is_empty());
        assert!(state.has_searched());
    }

    #[test]
    fn search_resets_selection() {
        let mut state = loaded_state();
        state.apply(Intent::TriggerSearch);
        let len = state.results().len();
        state.results_state.select_next(len);
        state.apply(Intent::SetIngredientQuery("honey".into()));
        state.apply(Intent::TriggerSearch);
        assert_eq!(state.results_state.selected, 0);
        assert_eq!(result_names(&state), ["Smoothie", "Fruit Salad"]);
    }

    #[test]
    fn select_and_step_through_grilled_cheese() {
        let mut state = loaded_state();
        let id = id_of(&state, "Grilled Cheese");
        state.apply(Intent::SelectRecipe(id));
        assert_eq!(state.screen, Screen::Detail);
        assert_eq!(state.detail().map(StepNavigator::cursor), Some(0));

        state.apply(Intent::StepNext);
        state.apply(Intent::StepNext);
        let nav = state.detail().unwrap();
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.display_text(), "Grill with cheese");

        state.apply(Intent::StepPrevious);
        state.apply(Intent::StepPrevious);
        assert_eq!(state.detail().map(StepNavigator::cursor), Some(0));
    }

    #[test]
    fn reselecting_starts_at_first_step() {
        let mut state = loaded_state();
        let id = id_of(&state, "Fruit Salad");
        state.apply(Intent::SelectRecipe(id));
        state.apply(Intent::StepNext);
        state.apply(Intent::CloseRecipe);
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.detail().is_none());

        state.apply(Intent::SelectRecipe(id));
        assert_eq!(state.detail().map(StepNavigator::cursor), Some(0));
    }

    #[test]
    fn unknown_recipe_is_ignored() {
        let mut state = loaded_state();
        state.apply(Intent::SelectRecipe(RecipeId::new()));
        state.apply(Intent::AddFavorite(RecipeId::new()));
        assert_eq!(state.screen, Screen::Browse);
        assert!(state.profile().favorites().is_empty());
    }

    #[test]
    fn favorites_grow_by_one_per_add() {
        let mut state = loaded_state();
        let smoothie = id_of(&state, "Smoothie");
        state.apply(Intent::SelectRecipe(smoothie));
        state.apply(Intent::AddFavorite(smoothie));
        state.apply(Intent::AddFavorite(smoothie));

        let pasta = id_of(&state, "Pasta Salad");
        state.apply(Intent::AddFavorite(pasta));

        let favorites = state.profile().favorites();
        assert_eq!(favorites.len(), 3);
        assert_eq!(favorites[1].name(), "Smoothie");
        assert_eq!(favorites.last().map(Recipe::id), Some(pasta));
    }

    #[test]
    fn step_intents_without_detail_are_noops() {
        let mut state = loaded_state();
        state.apply(Intent::StepNext);
        state.apply(Intent::StepPrevious);
        assert!(state.detail().is_none());
    }

    #[test]
    fn toggle_theme_flips_flag() {
        let mut state = loaded_state();
        assert!(!state.dark_mode());
        state.apply(Intent::ToggleTheme);
        assert!(state.dark_mode());
        state.apply(Intent::ToggleTheme);
        assert!(!state.dark_mode());
    }

    #[test]
    fn stepless_recipe_opens_complete() {
        let mut state = AppState::new(&Config::default());
        let empty = Recipe::new("Ice", "Ice");
        let id = empty.id();
        state.finish_loading(vec![empty]);
        state.apply(Intent::SelectRecipe(id));
        assert_eq!(state.detail().map(StepNavigator::display_text), Some(COMPLETION_MESSAGE));
    }
}
