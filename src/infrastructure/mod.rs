pub mod config_repository;
pub mod embedded_recipe_repository;

pub use config_repository::ConfigRepository;
pub use embedded_recipe_repository::EmbeddedRecipeRepository;
