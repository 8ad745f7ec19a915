//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::CountdownStatus;

/// Body of POST /countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    /// Starting value; signed so negative input can be rejected explicitly
    pub seconds: i64,
    /// Display target id, `timeLeft` when omitted
    #[serde(default)]
    pub target: Option<String>,
}

/// API response structure for the start endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub countdown: Option<CountdownStatus>,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, countdown: Option<CountdownStatus>) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            countdown,
        }
    }

    /// Create a response for a countdown that just started
    pub fn started(message: String, countdown: CountdownStatus) -> Self {
        Self::new("started".to_string(), message, Some(countdown))
    }

    /// Create an error response
    pub fn error(message: String) -> Self {
        Self::new("error".to_string(), message, None)
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub countdown: CountdownStatus,
    pub message: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
