use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use countdown_ticker::{
    api::responses::{ApiResponse, HealthResponse, StatusResponse},
    create_router, AppState, CountdownOptions,
};
use tower::ServiceExt;

fn app_with(options: CountdownOptions) -> Router {
    let state = Arc::new(AppState::new(20554, "127.0.0.1".to_string(), options));
    create_router(state)
}

fn app() -> Router {
    app_with(CountdownOptions::default())
}

fn start_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/countdown")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let resp = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: HealthResponse = json(resp).await;
    assert_eq!(body.status, "ok");
}

#[tokio::test]
async fn test_index_serves_time_left_element() {
    let resp = app().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains(r#"id="timeLeft""#));
}

#[tokio::test]
async fn test_negative_start_rejected() {
    let resp = app().oneshot(start_request(r#"{"seconds": -1}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse = json(resp).await;
    assert_eq!(body.status, "error");
    assert!(body.countdown.is_none());
}

#[tokio::test]
async fn test_unknown_target_rejected() {
    let resp = app()
        .oneshot(start_request(r#"{"seconds": 5, "target": "clock"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_second_start_conflicts() {
    let app = app();
    let resp = app.clone().oneshot(start_request(r#"{"seconds": 10}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(start_request(r#"{"seconds": 3}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test(start_paused = true)]
async fn test_countdown_visible_through_status() {
    let app = app_with(CountdownOptions::default().with_message("Süre Doldu!"));

    let resp = app.clone().oneshot(start_request(r#"{"seconds": 3}"#)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ApiResponse = json(resp).await;
    assert_eq!(body.status, "started");
    assert!(body.countdown.unwrap().running);

    tokio::time::sleep(Duration::from_millis(1500)).await;
    let status: StatusResponse = json(app.clone().oneshot(get("/status")).await.unwrap()).await;
    assert_eq!(status.countdown.display, "3");
    assert!(status.countdown.running);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let status: StatusResponse = json(app.oneshot(get("/status")).await.unwrap()).await;
    assert_eq!(status.countdown.display, "Süre Doldu!");
    assert!(!status.countdown.running);
    assert_eq!(status.countdown.completions, 1);
    assert_eq!(status.last_action.as_deref(), Some("time-up"));
}
