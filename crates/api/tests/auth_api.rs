//! HTTP-level tests for authentication, authorization and input
//! validation.
//!
//! Everything here asserts behaviour that resolves before the first
//! database query: token rejection, the staff gate, field validation
//! and the anonymous dashboard. Flows that need real rows (login,
//! lookups, inserts) live with the database-backed tests.

mod common;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Method, Request, StatusCode};
use common::{auth_token, body_json, build_test_app, get, get_auth, post_json, post_json_auth};
use serde_json::json;
use sirius_api::auth::jwt::{generate_access_token, JwtConfig};
use sirius_core::identity::Identity;
use sirius_core::types::UserRole;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Mint a token with a custom JWT configuration, for expiry and
/// wrong-secret cases the normal helper cannot produce.
fn token_with_config(config: &JwtConfig) -> String {
    let identity = Identity {
        user_id: 1,
        username: "tester".to_string(),
        email: "tester@example.com".to_string(),
        staff: false,
        role: UserRole::Employee,
    };
    generate_access_token(&identity, config).expect("token generation should succeed")
}

/// Collect the `field` names out of a validation error body.
fn error_fields(json: &serde_json::Value) -> Vec<String> {
    json["fields"]
        .as_array()
        .expect("validation body should carry a fields array")
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Token rejection
// ---------------------------------------------------------------------------

/// A protected route without an Authorization header returns 401.
#[tokio::test]
async fn missing_authorization_header_returns_401() {
    let app = build_test_app();
    let response = get(app, "/clientes/").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

/// An Authorization header without the Bearer scheme returns 401.
#[tokio::test]
async fn non_bearer_authorization_returns_401() {
    let app = build_test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/clientes/")
        .header(AUTHORIZATION, "Token abc123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}

/// A Bearer token that is not a JWT at all returns 401.
#[tokio::test]
async fn garbage_token_returns_401() {
    let app = build_test_app();
    let response = get_auth(app, "/clientes/", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

/// A token past its expiry returns 401. Five minutes in the past clears
/// the validator's default sixty-second leeway.
#[tokio::test]
async fn expired_token_returns_401() {
    let app = build_test_app();

    let mut jwt = common::test_config().jwt;
    jwt.access_token_expiry_mins = -5;
    let token = token_with_config(&jwt);

    let response = get_auth(app, "/clientes/", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A token signed with a different secret returns 401.
#[tokio::test]
async fn token_with_wrong_secret_returns_401() {
    let app = build_test_app();

    let jwt = JwtConfig {
        secret: "some-other-secret".to_string(),
        access_token_expiry_mins: 60,
    };
    let token = token_with_config(&jwt);

    let response = get_auth(app, "/clientes/", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Staff gate
// ---------------------------------------------------------------------------

/// Service creation rejects authenticated non-staff callers with 403.
#[tokio::test]
async fn non_staff_cannot_create_service() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "name": "Cableado estructurado",
        "kind": "electrical",
        "description": "Tendido de red en oficinas",
        "base_price": 250000.0
    });
    let response = post_json_auth(app, "/servicios/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], "Staff privileges required");
}

/// Client removal rejects non-staff callers with 403. The profile role
/// plays no part; only the staff flag elevates.
#[tokio::test]
async fn non_staff_cannot_remove_client() {
    let app = build_test_app();
    let token = auth_token(UserRole::Admin, false);

    let response = post_json_auth(app, "/clientes/1/eliminar/", &token, json!({})).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A staff caller passes the gate; an invalid payload then fails field
/// validation instead of authorization.
#[tokio::test]
async fn staff_service_payload_is_validated() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, true);

    let body = json!({
        "name": "",
        "kind": "electrical",
        "description": "",
        "base_price": -10.0
    });
    let response = post_json_auth(app, "/servicios/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields = error_fields(&json);
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"description".to_string()));
    assert!(fields.contains(&"base_price".to_string()));
}

// ---------------------------------------------------------------------------
// Registration validation
// ---------------------------------------------------------------------------

/// Registration reports every rejected field in one response.
#[tokio::test]
async fn register_rejects_invalid_fields() {
    let app = build_test_app();

    let body = json!({
        "username": "bad user!",
        "email": "not-an-email",
        "password": "12345678",
        "password_confirm": "12345678",
        "first_name": "",
        "last_name": "Soto"
    });
    let response = post_json(app, "/registro/", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields = error_fields(&json);
    assert!(fields.contains(&"username".to_string()), "username alphabet");
    assert!(fields.contains(&"email".to_string()), "email shape");
    assert!(fields.contains(&"first_name".to_string()), "required name");
    assert!(fields.contains(&"password".to_string()), "numeric password");
}

/// Mismatched password confirmation is the only error in an otherwise
/// valid payload; strength is not checked until the pair matches.
#[tokio::test]
async fn register_rejects_password_mismatch() {
    let app = build_test_app();

    let body = json!({
        "username": "psoto",
        "email": "psoto@example.com",
        "password": "correct-horse-battery",
        "password_confirm": "different-entirely",
        "first_name": "Paula",
        "last_name": "Soto"
    });
    let response = post_json(app, "/registro/", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;

    let fields = error_fields(&json);
    assert_eq!(fields, vec!["password_confirm".to_string()]);
    assert_eq!(json["fields"][0]["message"], "Passwords do not match");
}

// ---------------------------------------------------------------------------
// Anonymous dashboard
// ---------------------------------------------------------------------------

/// The landing dashboard serves anonymous callers a zeroed payload
/// instead of a 401.
#[tokio::test]
async fn anonymous_dashboard_returns_zeroed_shape() {
    let app = build_test_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_projects"], 0);
    assert_eq!(json["active_projects"], 0);
    assert_eq!(json["total_clients"], 0);
    assert_eq!(json["open_incidents"], 0);
    assert_eq!(json["recent_projects"], json!([]));
    assert_eq!(json["services"], json!([]));
}
