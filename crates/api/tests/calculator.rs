//! Integration tests for the budget-total AJAX endpoint.
//!
//! The calculator never touches the database, so every path here runs
//! end to end without a PostgreSQL server.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{auth_token, body_json, build_test_app, post_json, post_json_auth};
use serde_json::json;
use sirius_core::types::UserRole;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: authenticated sum with two decimals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sums_subtotal_and_tax_to_two_decimals() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({ "subtotal": 100.0, "iva": 19.0 });
    let response = post_json_auth(app, "/ajax/calcular-total/", &token, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], "119.00");
}

// ---------------------------------------------------------------------------
// Test: absent fields count as zero
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_fields_default_to_zero() {
    let app = build_test_app();
    let token = auth_token(UserRole::Client, false);

    let response = post_json_auth(app, "/ajax/calcular-total/", &token, json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], "0.00");
}

// ---------------------------------------------------------------------------
// Test: fractional amounts stay exact in the formatted output
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fractional_amounts_format_cleanly() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({ "subtotal": 0.1, "iva": 0.2 });
    let response = post_json_auth(app, "/ajax/calcular-total/", &token, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total"], "0.30");
}

// ---------------------------------------------------------------------------
// Test: the endpoint requires authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymous_request_returns_401() {
    let app = build_test_app();

    let body = json!({ "subtotal": 100.0, "iva": 19.0 });
    let response = post_json(app, "/ajax/calcular-total/", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: only POST is routed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_method_returns_405() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let response = common::get_auth(app, "/ajax/calcular-total/", &token).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: a well-formed body with wrong field types is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_numeric_subtotal_returns_422() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({ "subtotal": "not-a-number", "iva": 19.0 });
    let response = post_json_auth(app, "/ajax/calcular-total/", &token, body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: malformed JSON is rejected as a bad request
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    // The JSON helpers only send valid bodies, so build this one by hand.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/ajax/calcular-total/")
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from("{\"subtotal\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
