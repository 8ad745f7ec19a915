//! Countdown Ticker - a timer-driven countdown for a text display
//!
//! A countdown writes its remaining seconds into a display target once per
//! tick, then a completion message, and fires an optional callback exactly
//! once when it reaches zero. The HTTP API serves a page that renders the
//! countdown in its `timeLeft` element.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::CountdownError;
pub use state::{AppState, CountdownOptions, TextDisplay};
pub use api::create_router;
pub use tasks::{run_countdown, start_countdown};
pub use utils::signals::shutdown_signal;
