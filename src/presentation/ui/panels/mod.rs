pub mod book;
pub mod log;

pub use book::BookPanel;
pub use log::{LogAction, LogPanel};
