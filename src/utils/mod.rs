//! Shared helpers: time stamps, decimal parsing/formatting and logging setup.

mod decimal;
mod logger;
mod time;


pub use decimal::{format_decimal, is_positive, safe_decimal};
pub use logger::setup_logger;
pub use time::current_time_millis;
