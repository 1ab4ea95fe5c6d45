use crate::domain::entities::Recipe;
use anyhow::Result;

/// Source of the fixed dataset. Called once at startup.
pub trait RecipeRepository: Send + Sync {
    fn load_recipes(&self) -> Result<Vec<Recipe>>;
}
