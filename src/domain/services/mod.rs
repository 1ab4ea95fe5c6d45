pub mod recipe_filter;
pub mod validation;

pub use recipe_filter::RecipeFilter;
pub use validation::RecipeValidator;
