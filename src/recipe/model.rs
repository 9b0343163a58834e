//! Recipe and user profile model
//!
//! Recipes are immutable once built: fields are private and only the `with_*`
//! builder methods (which consume the value) can set them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recipe within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A dish with its ingredients, facts and preparation steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    /// Free text, terms separated by commas (e.g. "Banana, Milk, Honey")
    ingredients: String,
    time_minutes: u32,
    calories: u32,
    /// 0.0 to 5.0 by convention, not validated
    rating: f64,
    /// Image asset key (e.g. "grilled_cheese")
    image: String,
    steps: Vec<String>,
}

impl Recipe {
    /// Create a recipe with no facts, no image and no steps
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            id: RecipeId::new(),
            name: name.into(),
            ingredients: ingredients.into(),
            time_minutes: 0,
            calories: 0,
            rating: 0.0,
            image: String::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_time(mut self, minutes: u32) -> Self {
        self.time_minutes = minutes;
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the ordered preparation steps
    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn time_minutes(&self) -> u32 {
        self.time_minutes
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Card subtitle: rating, time and calories
    pub fn summary(&self) -> String {
        format!("⭐ {:.1} | {} min | {} cal", self.rating, self.time_minutes, self.calories)
    }

    /// Detail view headline: rating and calories
    pub fn nutrition(&self) -> String {
        format!("⭐ {:.1} | {} calories", self.rating, self.calories)
    }
}

/// The session's user, with the recipes they have favorited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    name: String,
    favorites: Vec<Recipe>,
}

impl UserProfile {
    /// Create a profile with an empty favorites list
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), favorites: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Favorites in the order they were added (duplicates allowed)
    pub fn favorites(&self) -> &[Recipe] {
        &self.favorites
    }

    /// Append a recipe to favorites. Always succeeds, never deduplicates.
    pub fn add_favorite(&mut self, recipe: Recipe) {
        self.favorites.push(recipe);
    }
}
