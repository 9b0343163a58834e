//! Recipe catalogue, ingredient filtering and step navigation

pub mod filter;
pub mod model;
pub mod navigator;
pub mod store;

pub use filter::{FilterQuery, filter};
pub use model::{Recipe, RecipeId, UserProfile};
pub use navigator::{COMPLETION_MESSAGE, StepNavigator};
pub use store::{PendingFetch, RecipeSource, RecipeStore, SeededRecipes, seeded_recipes};
