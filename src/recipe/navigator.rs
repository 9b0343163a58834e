//! Step-by-step navigation through a recipe's preparation steps

use super::model::{Recipe, UserProfile};

/// Shown when the cursor is past the last step
pub const COMPLETION_MESSAGE: &str = "All steps completed! Enjoy your meal 🍽️";

/// Cursor over the steps of the recipe being viewed.
///
/// `next` and `previous` keep the cursor within `0..steps.len()`. The cursor
/// only sits at `steps.len()` when the recipe has no steps at all, in which
/// case the completion message is displayed straight away.
#[derive(Debug, Clone, PartialEq)]
pub struct StepNavigator {
    recipe: Recipe,
    cursor: usize,
}

impl StepNavigator {
    /// Start viewing a recipe at its first step
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe, cursor: 0 }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.recipe.steps().len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.step_count()
    }

    /// Move back one step. Returns false (and does nothing) at the first step.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move forward one step. Returns false (and does nothing) at the last step.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// The step under the cursor, if any
    pub fn current_step(&self) -> Option<&str> {
        self.recipe.steps().get(self.cursor).map(String::as_str)
    }

    /// Whether the cursor is past the last step
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.step_count()
    }

    /// Text to display: the current step or the completion message
    pub fn display_text(&self) -> &str {
        self.current_step().unwrap_or(COMPLETION_MESSAGE)
    }

    /// "Step 2 of 3", or None once complete
    pub fn progress_label(&self) -> Option<String> {
        (!self.is_complete()).then(|| format!("Step {} of {}", self.cursor + 1, self.step_count()))
    }

    /// Append the viewed recipe to the profile's favorites
    pub fn add_to_favorites(&self, profile: &mut UserProfile) {
        profile.add_favorite(self.recipe.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grilled_cheese() -> Recipe {
        Recipe::new("Grilled Cheese", "Bread, Cheese, Butter")
            .with_steps(["Butter bread", "Grill with cheese"])
    }

    fn recipe_with_steps(count: usize) -> Recipe {
        Recipe::new("Test", "x").with_steps((0..count).map(|i| format!("step {i}")))
    }

    #[test]
    fn starts_at_first_step() {
        let nav = StepNavigator::new(grilled_cheese());
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.display_text(), "Butter bread");
        assert!(!nav.can_go_previous());
        assert!(nav.can_go_next());
    }

    #[test]
    fn next_stops_at_last_step() {
        let mut nav = StepNavigator::new(grilled_cheese());
        assert!(nav.next());
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.display_text(), "Grill with cheese");

        assert!(!nav.next());
        assert_eq!(nav.cursor(), 1);
        assert!(!nav.can_go_next());
        assert!(!nav.is_complete());
    }

    #[test]
    fn previous_is_noop_at_start() {
        let mut nav = StepNavigator::new(grilled_cheese());
        assert!(!nav.previous());
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn empty_steps_show_completion_immediately() {
        let mut nav = StepNavigator::new(Recipe::new("Water", "Water"));
        assert!(nav.is_complete());
        assert_eq!(nav.display_text(), COMPLETION_MESSAGE);
        assert_eq!(nav.progress_label(), None);
        assert!(!nav.can_go_next());
        assert!(!nav.can_go_previous());
        assert!(!nav.next());
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn progress_label_is_one_based() {
        let mut nav = StepNavigator::new(grilled_cheese());
        assert_eq!(nav.progress_label().as_deref(), Some("Step 1 of 2"));
        nav.next();
        assert_eq!(nav.progress_label().as_deref(), Some("Step 2 of 2"));
    }

    #[test]
    fn add_to_favorites_appends_exactly_one() {
        let nav = StepNavigator::new(grilled_cheese());
        let mut profile = UserProfile::new("Chef Alex");
        nav.add_to_favorites(&mut profile);
        nav.add_to_favorites(&mut profile);

        assert_eq!(profile.favorites().len(), 2);
        assert_eq!(profile.favorites().last(), Some(nav.recipe()));
    }

    proptest! {
        #[test]
        fn cursor_stays_in_bounds(count in 1usize..8, moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut nav = StepNavigator::new(recipe_with_steps(count));
            for forward in moves {
                if forward { nav.next(); } else { nav.previous(); }
                prop_assert!(nav.cursor() < count);
                prop_assert!(!nav.is_complete());
            }
        }

        #[test]
        fn next_then_previous_round_trips(count in 3usize..10, start in 1usize..8) {
            let start = start.min(count - 2);
            let mut nav = StepNavigator::new(recipe_with_steps(count));
            for _ in 0..start {
                nav.next();
            }
            prop_assert_eq!(nav.cursor(), start);
            prop_assert!(nav.next());
            prop_assert!(nav.previous());
            prop_assert_eq!(nav.cursor(), start);
        }
    }
}
