pub mod config;
pub mod recipe;

pub use config::{AppConfig, ThemeMode};
pub use recipe::{DIETARY_TAGS, Recipe, RecipeId};
