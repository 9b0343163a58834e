//! Recipe sources and the loaded recipe store
//!
//! The bundled catalogue is served by [`SeededRecipes`], which waits a fixed
//! delay before handing back its list to mimic a network fetch. The fetch is
//! started once as a background task and delivered over a oneshot channel.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot::{self, error::TryRecvError};

use super::model::{Recipe, RecipeId};

/// Something that can produce the recipe catalogue. Fetching never fails.
pub trait RecipeSource {
    fn fetch(&self) -> impl Future<Output = Vec<Recipe>> + Send;
}

/// The built-in catalogue, served after a simulated network delay
#[derive(Debug, Clone, Copy)]
pub struct SeededRecipes {
    delay: Duration,
}

impl SeededRecipes {
    /// Delay used by the interactive app
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SeededRecipes {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl RecipeSource for SeededRecipes {
    async fn fetch(&self) -> Vec<Recipe> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        seeded_recipes()
    }
}

/// The five bundled recipes, in display order
pub fn seeded_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Pasta Salad", "Pasta, Tomato, Olive Oil")
            .with_time(10)
            .with_calories(300)
            .with_rating(4.5)
            .with_image("pasta")
            .with_steps(["Boil pasta", "Chop vegetables", "Mix with dressing"]),
        Recipe::new("Smoothie", "Banana, Milk, Honey")
            .with_time(5)
            .with_calories(150)
            .with_rating(5.0)
            .with_image("smoothie")
            .with_steps(["Peel banana", "Blend all ingredients"]),
        Recipe::new("Grilled Cheese", "Bread, Cheese, Butter")
            .with_time(7)
            .with_calories(250)
            .with_rating(4.0)
            .with_image("grilled_cheese")
            .with_steps(["Butter bread", "Grill with cheese"]),
        Recipe::new("Veggie Stir-Fry", "Carrot, Broccoli, Soy Sauce")
            .with_time(12)
            .with_calories(200)
            .with_rating(4.8)
            .with_image("veggie_stirfry")
            .with_steps(["Chop vegetables", "Stir-fry in a pan", "Add soy sauce"]),
        Recipe::new("Fruit Salad", "Apple, Orange, Grapes, Honey")
            .with_time(6)
            .with_calories(120)
            .with_rating(4.7)
            .with_image("fruit_salad")
            .with_steps(["Chop fruits", "Mix with honey", "Serve chilled"]),
    ]
}

/// The loaded, read-only recipe catalogue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Await a source and wrap its result
    pub async fn load<S: RecipeSource>(source: &S) -> Self {
        Self::new(source.fetch().await)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id() == id)
    }

    /// Find a recipe by name, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let name = name.trim();
        self.recipes.iter().find(|r| r.name().eq_ignore_ascii_case(name))
    }
}

/// A fetch running in the background, delivered to the UI loop exactly once
#[derive(Debug)]
pub struct PendingFetch {
    receiver: Option<oneshot::Receiver<Vec<Recipe>>>,
}

impl PendingFetch {
    /// Spawn `source.fetch()` on the tokio runtime
    pub fn spawn<S>(source: S) -> Self
    where
        S: RecipeSource + Send + Sync + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            tracing::debug!("Fetching recipes");
            let recipes = source.fetch().await;
            tracing::info!("Fetched {} recipes", recipes.len());
            // The receiver is gone only if the app already shut down
            let _ = tx.send(recipes);
        });
        Self { receiver: Some(rx) }
    }

    /// Whether the result has not been taken yet
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Non-blocking check. Yields the recipes on the first call after the
    /// fetch resolves and `None` on every other call.
    pub fn poll(&mut self) -> Option<Vec<Recipe>> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(recipes) => {
                self.receiver = None;
                Some(recipes)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                tracing::error!("Recipe fetch task ended without a result");
                self.receiver = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_catalogue_order() {
        let names: Vec<String> = seeded_recipes().iter().map(|r| r.name().to_string()).collect();
        assert_eq!(
            names,
            ["Pasta Salad", "Smoothie", "Grilled Cheese", "Veggie Stir-Fry", "Fruit Salad"]
        );
    }

    #[test]
    fn seeded_grilled_cheese_has_two_steps() {
        let store = RecipeStore::new(seeded_recipes());
        let recipe = store.find_by_name("grilled cheese").unwrap();
        assert_eq!(recipe.steps(), ["Butter bread", "Grill with cheese"]);
        assert_eq!(recipe.rating(), 4.0);
    }

    #[test]
    fn store_lookup_by_id() {
        let store = RecipeStore::new(seeded_recipes());
        let smoothie = store.all()[1].clone();
        assert_eq!(store.get(smoothie.id()), Some(&smoothie));
        assert_eq!(store.get(RecipeId::new()), None);
    }

    #[test]
    fn find_by_name_misses_unknown() {
        let store = RecipeStore::new(seeded_recipes());
        assert!(store.find_by_name("Lasagna").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_fetch_waits_for_delay() {
        let source = SeededRecipes::default();
        let start = tokio::time::Instant::now();
        let store = RecipeStore::load(&source).await;

        assert_eq!(store.len(), 5);
        assert!(start.elapsed() >= SeededRecipes::DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn pending_fetch_delivers_once() {
        let mut pending = PendingFetch::spawn(SeededRecipes::new(Duration::from_millis(500)));
        assert!(pending.poll().is_none());
        assert!(pending.is_pending());

        tokio::time::sleep(Duration::from_millis(600)).await;

        let recipes = pending.poll().unwrap();
        assert_eq!(recipes.len(), 5);
        assert!(!pending.is_pending());
        assert!(pending.poll().is_none());
    }
}
