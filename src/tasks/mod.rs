//! Background tasks module
//!
//! This module contains the countdown ticker that runs alongside the HTTP server.

pub mod countdown;

// Re-export main functions
pub use countdown::{run_countdown, start_countdown, start_countdown_in, OnComplete};
