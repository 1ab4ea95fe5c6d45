pub mod log_capture;

pub use log_capture::init_log_capture;
