//! Countdown ticker task

use std::sync::Arc;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    error::Result,
    state::{Countdown, CountdownOptions, DisplayRegistry, TextDisplay, Tick},
};

/// Callback fired once when a countdown reaches zero
pub type OnComplete = Box<dyn FnOnce() + Send + 'static>;

/// Drive a countdown to completion, writing each tick into `display`.
///
/// The first tick fires one period after the call. Returns after the
/// completion message has been written and `on_complete` has run.
pub async fn run_countdown(
    seconds: u64,
    display: Arc<dyn TextDisplay>,
    options: CountdownOptions,
    on_complete: Option<OnComplete>,
) {
    info!("Starting countdown from {} seconds", seconds);

    let mut countdown = Countdown::new(seconds);
    let mut on_complete = on_complete;
    let mut interval = interval_at(Instant::now() + options.period(), options.period());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        match countdown.tick() {
            Tick::Remaining(value) => {
                debug!("Countdown tick: {} seconds left", value);
                display.set_text(&value.to_string());
            }
            Tick::Finished => {
                info!("Countdown reached zero");
                display.set_text(options.message());
                if let Some(callback) = on_complete.take() {
                    callback();
                }
                break;
            }
            Tick::Idle => break,
        }
    }
}

/// Spawn a countdown on the runtime.
///
/// The handle can only be awaited; the task stops on its own at zero.
pub fn start_countdown(
    seconds: u64,
    display: Arc<dyn TextDisplay>,
    options: CountdownOptions,
    on_complete: Option<OnComplete>,
) -> JoinHandle<()> {
    tokio::spawn(run_countdown(seconds, display, options, on_complete))
}

/// Spawn a countdown into the display registered as `target`
pub fn start_countdown_in(
    registry: &DisplayRegistry,
    target: &str,
    seconds: u64,
    options: CountdownOptions,
    on_complete: Option<OnComplete>,
) -> Result<JoinHandle<()>> {
    let display = registry.resolve(target)?;
    debug!("Resolved display target '{}'", target);
    Ok(start_countdown(seconds, display, options, on_complete))
}
