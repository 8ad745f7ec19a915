//! Utility functions module
//!
//! Process-level helpers shared by the server and terminal modes.

pub mod signals;

pub use signals::shutdown_signal;
