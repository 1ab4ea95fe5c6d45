pub mod book_state;
pub mod dto;
pub mod recipe_book;
pub mod use_cases;

pub use book_state::BookState;
pub use recipe_book::{BookEvent, RecipeBook};
