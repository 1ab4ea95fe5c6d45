use crate::domain::entities::Recipe;
use crate::domain::repositories::RecipeRepository;
use crate::domain::services::RecipeValidator;
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

pub struct LoadRecipes {
    repository: Arc<dyn RecipeRepository>,
}

impl LoadRecipes {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Loads the dataset, keeping the first recipe for any repeated id.
    pub fn execute(&self) -> Result<Vec<Recipe>> {
        let loaded = self.repository.load_recipes()?;
        let mut seen = HashSet::with_capacity(loaded.len());
        let mut recipes = Vec::with_capacity(loaded.len());

        for recipe in loaded {
            if !seen.insert(recipe.id) {
                tracing::warn!(
                    "Skipping recipe {:?}: id {} already used",
                    recipe.name,
                    recipe.id
                );
                continue;
            }

            if let Err(e) = RecipeValidator::validate_recipe(&recipe) {
                tracing::warn!("{}", e);
            }

            recipes.push(recipe);
        }

        tracing::info!("Loaded {} recipes", recipes.len());
        Ok(recipes)
    }
}
