pub mod control_bar;
pub mod log_manager;
pub mod recipe_card;

pub use control_bar::ControlBar;
pub use log_manager::{LogEntry, LogLevel, LogManager};
pub use recipe_card::RecipeCard;
