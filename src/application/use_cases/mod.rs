pub mod load_recipes;

pub use load_recipes::LoadRecipes;
