//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use tracing::{error, info, warn};

use crate::{error::CountdownError, state::AppState};
use super::responses::{ApiResponse, HealthResponse, StartRequest, StatusResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

type ApiError = (StatusCode, Json<ApiResponse>);

fn api_error(e: CountdownError) -> ApiError {
    let code = e.status_code();
    if code.is_server_error() {
        error!("Countdown request failed: {}", e);
    } else {
        warn!("Countdown request rejected: {}", e);
    }
    (code, Json(ApiResponse::error(e.to_string())))
}

/// Handle GET / - Serve the countdown page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handle POST /countdown - Start a countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartRequest>,
) -> Result<Json<ApiResponse>, ApiError> {
    let status = state
        .start(request.seconds, request.target.as_deref())
        .map_err(api_error)?;

    info!("Countdown endpoint called - {} seconds", request.seconds);
    Ok(Json(ApiResponse::started(
        format!("Countdown started from {} seconds", request.seconds),
        status,
    )))
}

/// Handle GET /status - Return the display and countdown state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let countdown = state.status().map_err(api_error)?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        countdown,
        message: state.options.message().to_string(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
