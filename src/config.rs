//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{
    error::Result,
    state::{CountdownOptions, DEFAULT_MESSAGE},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-ticker")]
#[command(about = "Serve a countdown page, or run a countdown in the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Text shown when the countdown reaches zero
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Tick period in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Run a single countdown of this many seconds in the terminal and exit
    #[arg(long, value_name = "SECONDS")]
    pub run: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Countdown options derived from the CLI flags
    pub fn countdown_options(&self) -> Result<CountdownOptions> {
        CountdownOptions::new(self.tick_period(), self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["countdown-ticker"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.message, "Time's up!");
        assert!(config.run.is_none());
    }

    #[test]
    fn test_terminal_run_with_custom_message() {
        let config = Config::try_parse_from([
            "countdown-ticker",
            "--run",
            "5",
            "-m",
            "Süre Doldu!",
            "--tick-ms",
            "250",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.run, Some(5));
        assert_eq!(config.log_level(), "debug");

        let options = config.countdown_options().unwrap();
        assert_eq!(options.message(), "Süre Doldu!");
        assert_eq!(options.period(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Config::try_parse_from(["countdown-ticker", "--tick-ms", "0"]).is_err());
    }
}
