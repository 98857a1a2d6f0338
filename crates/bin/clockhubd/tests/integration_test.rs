//! End-to-end smoke tests for the full clockhubd stack.
//!
//! Each test spins up the complete application (virtual device, real
//! services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use clockhub_adapter_device_virtual::{VirtualClockDevice, demo_state};
use clockhub_adapter_http_axum::router;
use clockhub_adapter_http_axum::state::AppState;
use clockhub_domain::state::DeviceState;

/// Build a fully-wired router backed by the virtual device.
fn app() -> Router {
    let mut state = demo_state();
    state.date = "20221108T102641Z".parse().expect("seed date");
    router::build(AppState::new(VirtualClockDevice::seeded(state)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

async fn send_json(app: Router, method: &str, uri: &str, body: &str) -> StatusCode {
    let resp = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    resp.status()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Device state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_the_device_state_document() {
    let (status, body) = get(app(), "/api/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timezone"], 3);
    assert_eq!(body["daylight"], 0);
    assert_eq!(body["ntpenabled"], true);
    assert_eq!(body["ntpserver1"], "0.pool.ntp.org");
    assert_eq!(body["ntpserver3"], "time.nist.gov");
    assert_eq!(body["brightness"], 25);
    assert_eq!(body["colors"], "0808220000443333AAFF0000001100");

    let state: DeviceState = serde_json::from_value(body).unwrap();
    assert!(state.date.to_string().starts_with("202211"));
}

#[tokio::test]
async fn should_report_a_ticking_clock() {
    let (status, body) = get(app(), "/api/clock").await;

    assert_eq!(status, StatusCode::OK);
    let token = body["date"].as_str().unwrap();
    assert_eq!(token.len(), 16);
    assert!(token.starts_with("20221108T"));
}

// ---------------------------------------------------------------------------
// Setting the date
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_set_the_device_date() {
    let app = app();

    let status = send_json(
        app.clone(),
        "PUT",
        "/api/date",
        r#"{"date":"20240229T120000Z"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(app, "/api/clock").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["date"].as_str().unwrap().starts_with("20240229T12"));
}

#[tokio::test]
async fn should_reject_a_date_that_does_not_match_the_token_layout() {
    let status = send_json(app(), "PUT", "/api/date", r#"{"date":"bad-input"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_an_impossible_calendar_date() {
    let status = send_json(
        app(),
        "PUT",
        "/api/date",
        r#"{"date":"20221332T102641Z"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// NTP synchronization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_synchronize_and_return_fresh_state() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/synchronize")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let state: DeviceState = serde_json::from_slice(&bytes).unwrap();
    // the virtual device snaps to host time, leaving the seed year behind
    assert!(state.date.0 > "20221108T102641Z".parse::<clockhub_domain::time::DeviceTime>().unwrap().0);
}

// ---------------------------------------------------------------------------
// Display settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_apply_display_settings() {
    let app = app();

    let status = send_json(
        app.clone(),
        "PUT",
        "/api/display",
        r#"{"brightness":200,"colors":"000000111111222222333333444444"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get(app, "/api/state").await;
    assert_eq!(body["brightness"], 200);
    assert_eq!(body["colors"], "000000111111222222333333444444");
}

#[tokio::test]
async fn should_reject_a_malformed_color_scheme() {
    let status = send_json(
        app(),
        "PUT",
        "/api/display",
        r#"{"brightness":200,"colors":"00FF00"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Configuration persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_persist_settings_on_the_device() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/config/save")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
