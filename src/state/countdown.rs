//! Countdown counter and per-tick rule

use std::time::Duration;

use crate::error::{CountdownError, Result};

/// Completion text used when none is configured
pub const DEFAULT_MESSAGE: &str = "Time's up!";

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Show this value; the counter has already been decremented past it
    Remaining(u64),
    /// The counter hit zero on this tick
    Finished,
    /// The countdown finished on an earlier tick
    Idle,
}

/// Remaining-seconds counter owned by a running ticker
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u64,
    finished: bool,
}

impl Countdown {
    /// Create a countdown starting from `seconds`
    pub fn new(seconds: u64) -> Self {
        Self {
            remaining: seconds,
            finished: false,
        }
    }

    /// Create a countdown from untrusted signed input
    pub fn from_signed(seconds: i64) -> Result<Self> {
        u64::try_from(seconds)
            .map(Self::new)
            .map_err(|_| CountdownError::NegativeStart(seconds))
    }

    /// Advance the countdown by one tick
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Idle;
        }
        if self.remaining == 0 {
            self.finished = true;
            return Tick::Finished;
        }

        let shown = self.remaining;
        self.remaining -= 1;
        Tick::Remaining(shown)
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// How a ticker paces itself and what it shows at zero
#[derive(Debug, Clone)]
pub struct CountdownOptions {
    period: Duration,
    message: String,
}

impl CountdownOptions {
    /// Build options, rejecting a zero tick period
    pub fn new(period: Duration, message: impl Into<String>) -> Result<Self> {
        if period.is_zero() {
            return Err(CountdownError::ZeroPeriod);
        }
        Ok(Self {
            period,
            message: message.into(),
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the completion message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for CountdownOptions {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}
