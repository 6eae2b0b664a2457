//! # Integration Tests for sgate-api
//!
//! Drives the assembled router end to end: institution creation with
//! policy bootstrap, student registration with credential issuance,
//! restriction listing and bulk update, presence verification, error
//! mapping, health probes, and OpenAPI generation.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use sgate_api::AppState;

/// Helper: build the test app over a fresh in-memory registry.
fn test_app() -> axum::Router {
    sgate_api::app(AppState::new())
}

/// Helper: read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Helper: send a JSON request.
async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: &Value,
) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Helper: GET a URI.
async fn get(app: &axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Helper: create the sample school and return its identifier string.
async fn create_sample_school(app: &axum::Router) -> String {
    let response = send_json(
        app,
        "POST",
        "/api/schools",
        &json!({
            "name": "Sample High School",
            "address": "123 Education Street, Learning City",
            "latitude": 40.7128,
            "longitude": -74.0060,
            "wifi_ssid": "School-WiFi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["default_restrictions"], 7);
    body["school_id"].as_str().unwrap().to_string()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let app = test_app();
    let response = get(&app, "/health/liveness").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let app = test_app();
    let response = get(&app, "/health/readiness").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Institution Creation -----------------------------------------------------

#[tokio::test]
async fn test_create_school_bootstraps_default_policies() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;

    let response = get(&app, &format!("/api/restrictions/{school_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 7);

    let names: Vec<&str> = entries
        .iter()
        .map(|e| e["app_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Google Classroom",
            "Notes",
            "Calculator",
            "WhatsApp",
            "Instagram",
            "YouTube",
            "Games",
        ]
    );
    assert_eq!(
        entries[0]["package_name"],
        "com.google.android.apps.classroom"
    );
    assert_eq!(entries[0]["is_allowed"], true);
    assert_eq!(entries[5]["is_allowed"], false);
}

#[tokio::test]
async fn test_create_school_rejects_empty_name() {
    let app = test_app();
    let response = send_json(&app, "POST", "/api/schools", &json!({"name": "  "})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_school_rejects_partial_coordinates() {
    let app = test_app();
    let response = send_json(
        &app,
        "POST",
        "/api/schools",
        &json!({"name": "Half Anchored", "latitude": 40.7128}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_school_rejects_out_of_range_coordinates() {
    let app = test_app();
    let response = send_json(
        &app,
        "POST",
        "/api/schools",
        &json!({"name": "Nowhere", "latitude": 95.0, "longitude": 0.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- Student Registration -----------------------------------------------------

#[tokio::test]
async fn test_register_student_issues_credential() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;

    let response = send_json(
        &app,
        "POST",
        "/api/students/register",
        &json!({"name": "Alex", "school_id": school_id, "device_id": "TABLET-042"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    let token = body["qr_code"].as_str().unwrap();
    assert!(token.starts_with("sgq1:"));
    assert!(token.is_ascii());
    uuid::Uuid::parse_str(body["student_id"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn test_register_student_unknown_school() {
    let app = test_app();
    let response = send_json(
        &app,
        "POST",
        "/api/students/register",
        &json!({
            "name": "Alex",
            "school_id": "00000000-0000-0000-0000-000000000001",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_register_student_rejects_blank_name() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;
    let response = send_json(
        &app,
        "POST",
        "/api/students/register",
        &json!({"name": "", "school_id": school_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_duplicate_device_id_conflicts_without_corrupting_tables() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;

    let first = send_json(
        &app,
        "POST",
        "/api/students/register",
        &json!({"name": "Alex", "school_id": school_id, "device_id": "TABLET-042"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = send_json(
        &app,
        "POST",
        "/api/students/register",
        &json!({"name": "Sam", "school_id": school_id, "device_id": "TABLET-042"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["error"]["code"], "CONFLICT");

    // Policy and institution tables are untouched by the failed
    // registration.
    let response = get(&app, &format!("/api/restrictions/{school_id}")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 7);

    // A different device id still registers.
    let third = send_json(
        &app,
        "POST",
        "/api/students/register",
        &json!({"name": "Kit", "school_id": school_id, "device_id": "TABLET-043"}),
    )
    .await;
    assert_eq!(third.status(), StatusCode::CREATED);
}

// -- Restrictions -------------------------------------------------------------

#[tokio::test]
async fn test_restrictions_empty_for_unknown_school() {
    let app = test_app();
    let response = get(
        &app,
        "/api/restrictions/00000000-0000-0000-0000-000000000001",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_restrictions_is_best_effort() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/restrictions/{school_id}"),
        &json!([
            {"app_name": "YouTube", "is_allowed": true},
            {"app_name": "TikTok", "is_allowed": true},
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["updated"], 1);

    let entries = body_json(get(&app, &format!("/api/restrictions/{school_id}")).await).await;
    let entries = entries.as_array().unwrap();
    let youtube = entries
        .iter()
        .find(|e| e["app_name"] == "YouTube")
        .unwrap();
    assert_eq!(youtube["is_allowed"], true);
    // No entry was invented for the unknown name.
    assert_eq!(entries.len(), 7);
}

#[tokio::test]
async fn test_update_restrictions_rejects_malformed_batch() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/restrictions/{school_id}"),
        &json!([
            {"app_name": "YouTube", "is_allowed": true},
            {"app_name": "", "is_allowed": false},
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The malformed batch mutated nothing.
    let entries = body_json(get(&app, &format!("/api/restrictions/{school_id}")).await).await;
    let youtube = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["app_name"] == "YouTube")
        .unwrap()
        .clone();
    assert_eq!(youtube["is_allowed"], false);
}

#[tokio::test]
async fn test_update_restrictions_rejects_malformed_json() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/restrictions/{school_id}"))
                .header("content-type", "application/json")
                .body(Body::from("[{\"app_name\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// -- Presence Verification ----------------------------------------------------

#[tokio::test]
async fn test_verify_location_decision_matrix() {
    let app = test_app();
    let school_id = create_sample_school(&app).await;

    let cases = [
        // Exact anchor match.
        (json!({"latitude": 40.7128, "longitude": -74.0060}), true),
        // Near match: lat diff 0.0072 inside the window.
        (json!({"latitude": 40.7200, "longitude": -74.0060}), true),
        // Far: lat diff 0.1872, no network supplied.
        (json!({"latitude": 40.9000, "longitude": -74.0060}), false),
        // Trusted network match.
        (json!({"wifi_ssid": "School-WiFi"}), true),
        // Case differs — exact match only.
        (json!({"wifi_ssid": "school-wifi"}), false),
        // Partial coordinate pair falls through to the matching network.
        (json!({"latitude": 40.7128, "wifi_ssid": "School-WiFi"}), true),
        // Far coordinates but the network still matches.
        (
            json!({"latitude": 40.9000, "longitude": -74.0060, "wifi_ssid": "School-WiFi"}),
            true,
        ),
        // Nothing claimed.
        (json!({}), false),
    ];

    for (claim, expected) in cases {
        let mut body = claim.clone();
        body["school_id"] = json!(school_id);
        let response = send_json(&app, "POST", "/api/verify-location", &body).await;
        assert_eq!(response.status(), StatusCode::OK, "claim: {claim}");
        let decision = body_json(response).await;
        assert_eq!(decision["is_on_campus"], expected, "claim: {claim}");
    }
}

#[tokio::test]
async fn test_verify_location_unknown_school() {
    let app = test_app();
    let response = send_json(
        &app,
        "POST",
        "/api/verify-location",
        &json!({
            "school_id": "00000000-0000-0000-0000-000000000001",
            "wifi_ssid": "School-WiFi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Cross-Cutting ------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec_generation() {
    let app = test_app();
    let response = get(&app, "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let spec = body_json(response).await;
    assert!(spec["paths"]["/api/schools"].is_object());
    assert!(spec["paths"]["/api/verify-location"].is_object());
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .header("origin", "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
