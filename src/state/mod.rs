//! State management module
//!
//! The countdown counter, the display targets it writes into, and the
//! application state the HTTP handlers share.

pub mod countdown;
pub mod display;
pub mod status;
pub mod app_state;

// Re-export main types
pub use countdown::{Countdown, CountdownOptions, Tick, DEFAULT_MESSAGE};
pub use display::{DisplayRegistry, LineDisplay, TextBuffer, TextDisplay, TIME_LEFT};
pub use status::CountdownStatus;
pub use app_state::AppState;
