use crate::domain::{
    entities::{Recipe, RecipeId},
    repositories::RecipeRepository,
};
use anyhow::Result;
use serde::Deserialize;
use thiserror::Error;

const BUNDLED_RECIPES: &str = include_str!("../../assets/recipes.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("recipe dataset is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("recipe dataset must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// One entry as it appears in the dataset file. Every display field is
/// optional so a partially filled record still shows up.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: Option<u64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    image_name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    dietary: Vec<String>,
}

impl RecipeRecord {
    fn into_recipe(self) -> Option<Recipe> {
        let id = self.id?;
        Some(
            Recipe::new(RecipeId(id), self.name)
                .with_description(self.description)
                .with_time(self.time)
                .with_image_name(self.image_name)
                .with_ingredients(self.ingredients)
                .with_dietary(self.dietary),
        )
    }
}

/// Serves the recipe list compiled into the binary.
pub struct EmbeddedRecipeRepository {
    source: &'static str,
}

impl EmbeddedRecipeRepository {
    pub fn new() -> Self {
        Self {
            source: BUNDLED_RECIPES,
        }
    }

    #[cfg(test)]
    pub fn from_static(source: &'static str) -> Self {
        Self { source }
    }

    fn parse_recipes(&self) -> Result<Vec<Recipe>, DatasetError> {
        let value: serde_json::Value = serde_json::from_str(self.source)?;

        let entries = match value {
            serde_json::Value::Array(entries) => entries,
            serde_json::Value::Object(_) => return Err(DatasetError::NotAnArray("an object")),
            serde_json::Value::String(_) => return Err(DatasetError::NotAnArray("a string")),
            serde_json::Value::Number(_) => return Err(DatasetError::NotAnArray("a number")),
            serde_json::Value::Bool(_) => return Err(DatasetError::NotAnArray("a boolean")),
            serde_json::Value::Null => return Err(DatasetError::NotAnArray("null")),
        };

        let mut recipes = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let record = match serde_json::from_value::<RecipeRecord>(entry) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping recipe entry {}: {}", index, e);
                    continue;
                }
            };

            match record.into_recipe() {
                Some(recipe) => recipes.push(recipe),
                None => tracing::warn!("Skipping recipe entry {}: missing id", index),
            }
        }

        Ok(recipes)
    }
}

impl Default for EmbeddedRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeRepository for EmbeddedRecipeRepository {
    fn load_recipes(&self) -> Result<Vec<Recipe>> {
        let recipes = self.parse_recipes()?;
        tracing::debug!("Parsed {} recipes from bundled dataset", recipes.len());
        Ok(recipes)
    }
}
