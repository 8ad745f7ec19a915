//! Countdown Ticker - serve a countdown page or run a countdown in the terminal
//!
//! This is the main entry point for the countdown-ticker application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_ticker::{
    api::create_router,
    config::Config,
    state::{AppState, LineDisplay},
    tasks::run_countdown,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_ticker={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown-ticker v{}", env!("CARGO_PKG_VERSION"));

    if let Some(seconds) = config.run {
        return run_in_terminal(&config, seconds).await;
    }

    info!("Configuration: host={}, port={}, tick={}ms",
          config.host, config.port, config.tick_ms);

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.countdown_options()?,
    ));

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /          - Countdown page");
    info!("  POST /countdown - Start a countdown");
    info!("  GET  /status    - Current display and countdown state");
    info!("  GET  /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        signal = shutdown_signal() => {
            signal?;
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Run one countdown on stdout, stopping early on SIGINT/SIGTERM
async fn run_in_terminal(config: &Config, seconds: u64) -> anyhow::Result<()> {
    let countdown = run_countdown(
        seconds,
        Arc::new(LineDisplay::stdout()),
        config.countdown_options()?,
        Some(Box::new(|| info!("Countdown finished"))),
    );

    tokio::select! {
        _ = countdown => {}
        signal = shutdown_signal() => {
            signal?;
            info!("Countdown interrupted");
        }
    }

    Ok(())
}
