//! Main application state management

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::info;

use crate::{
    error::{CountdownError, Result},
    tasks::{start_countdown, OnComplete},
};
use super::{
    Countdown, CountdownOptions, CountdownStatus, DisplayRegistry, TextBuffer, TextDisplay,
    TIME_LEFT,
};

/// Countdown currently (or most recently) driven by the page
struct RunningCountdown {
    handle: JoinHandle<()>,
    display: Arc<dyn TextDisplay>,
    seconds: u64,
    target: String,
    started_at: DateTime<Utc>,
}

impl RunningCountdown {
    fn display_text(&self) -> String {
        self.display.text().unwrap_or_default()
    }
}

impl std::fmt::Debug for RunningCountdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunningCountdown")
            .field("seconds", &self.seconds)
            .field("target", &self.target)
            .field("started_at", &self.started_at)
            .finish()
    }
}

/// Main application state shared by the HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// Display targets the page exposes
    pub displays: DisplayRegistry,
    /// The page's `timeLeft` element
    pub time_left: Arc<TextBuffer>,
    pub options: CountdownOptions,
    current: Mutex<Option<RunningCountdown>>,
    completions: Arc<AtomicU64>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with the `timeLeft` display registered
    pub fn new(port: u16, host: String, options: CountdownOptions) -> Self {
        let time_left = Arc::new(TextBuffer::new());
        let mut displays = DisplayRegistry::new();
        displays.register(TIME_LEFT, time_left.clone());

        Self {
            displays,
            time_left,
            options,
            current: Mutex::new(None),
            completions: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a countdown into `target` (default `timeLeft`).
    ///
    /// Refuses while a previous countdown is still ticking.
    pub fn start(&self, seconds: i64, target: Option<&str>) -> Result<CountdownStatus> {
        let countdown = Countdown::from_signed(seconds)?;
        let target = target.unwrap_or(TIME_LEFT);
        // fail on a bad target before touching the running slot
        let display = self.displays.resolve(target)?;

        let mut current = self.current.lock()
            .map_err(|e| CountdownError::StatePoisoned(format!("countdown state: {}", e)))?;

        if current.as_ref().is_some_and(|c| !c.handle.is_finished()) {
            return Err(CountdownError::AlreadyRunning);
        }

        let handle = start_countdown(
            countdown.remaining(),
            Arc::clone(&display),
            self.options.clone(),
            Some(self.completion_callback()),
        );

        info!("Countdown started: {} seconds into '{}'", countdown.remaining(), target);
        *current = Some(RunningCountdown {
            handle,
            display,
            seconds: countdown.remaining(),
            target: target.to_string(),
            started_at: Utc::now(),
        });
        drop(current);

        self.record_action("start");
        self.status()
    }

    /// Snapshot of the display and the latest countdown
    pub fn status(&self) -> Result<CountdownStatus> {
        let current = self.current.lock()
            .map_err(|e| CountdownError::StatePoisoned(format!("countdown state: {}", e)))?;
        let completions = self.completions();

        Ok(match current.as_ref() {
            Some(c) => CountdownStatus {
                display: c.display_text(),
                running: !c.handle.is_finished(),
                seconds: Some(c.seconds),
                target: Some(c.target.clone()),
                started_at: Some(c.started_at),
                completions,
            },
            None => CountdownStatus::idle(self.time_left.text(), completions),
        })
    }

    pub fn completions(&self) -> u64 {
        self.completions.load(Ordering::SeqCst)
    }

    fn completion_callback(&self) -> OnComplete {
        let completions = Arc::clone(&self.completions);
        let last_action = Arc::clone(&self.last_action);
        let last_action_time = Arc::clone(&self.last_action_time);

        Box::new(move || {
            let total = completions.fetch_add(1, Ordering::SeqCst) + 1;
            info!("Countdown completed ({} total)", total);
            if let Ok(mut action) = last_action.lock() {
                *action = Some("time-up".to_string());
            }
            if let Ok(mut time) = last_action_time.lock() {
                *time = Some(Utc::now());
            }
        })
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
