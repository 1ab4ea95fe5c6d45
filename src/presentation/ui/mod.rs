pub mod app;
pub mod panels;

pub use app::RecipeBookApp;
