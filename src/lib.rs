//! Quick Recipes - find something to cook from the ingredients you have
//!
//! Type a comma-separated list of ingredients, pick a matching recipe and
//! walk through its preparation one step at a time.

pub mod app;
pub mod config;
pub mod recipe;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use recipe::{Recipe, RecipeStore, StepNavigator, UserProfile};
pub use theme::Theme;
