use crate::domain::entities::Recipe;

pub struct RecipeValidator;

impl RecipeValidator {
    pub fn validate_recipe(recipe: &Recipe) -> Result<(), String> {
        if recipe.name.trim().is_empty() {
            return Err(format!("Recipe {} has no name", recipe.id));
        }
        if let Some(tag) = recipe.dietary.iter().find(|t| t.trim().is_empty()) {
            return Err(format!("Recipe {} has a blank dietary tag {:?}", recipe.id, tag));
        }
        Ok(())
    }
}
