//! Countdown status snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the page currently shows and whether a countdown is ticking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownStatus {
    /// Text currently in the display target
    pub display: String,
    pub running: bool,
    /// Starting value of the latest countdown
    pub seconds: Option<u64>,
    pub target: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    /// Countdowns that have reached zero since startup
    pub completions: u64,
}

impl CountdownStatus {
    /// Status of a page that has never run a countdown
    pub fn idle(display: String, completions: u64) -> Self {
        Self {
            display,
            running: false,
            seconds: None,
            target: None,
            started_at: None,
            completions,
        }
    }
}
