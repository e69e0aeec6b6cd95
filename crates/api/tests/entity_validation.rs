//! HTTP-level tests for per-entity field validation.
//!
//! Every handler validates its payload before touching the database, so
//! these cases resolve without a PostgreSQL server. Each one asserts
//! the 400 envelope and the exact set of rejected fields.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, build_test_app, post_json_auth};
use serde_json::json;
use sirius_core::types::UserRole;

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
// Clients
// ---------------------------------------------------------------------------

/// A malformed RUT is rejected with a field-level message.
#[tokio::test]
async fn client_with_malformed_rut_is_rejected() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "name": "Constructora Andes",
        "rut": "12.345.678-9",
        "email": "contacto@andes.cl",
        "phone": "+56912345678",
        "address": "Av. Providencia 1234",
        "client_type": "company"
    });
    let response = post_json_auth(app, "/clientes/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(error_fields(&json), vec!["rut".to_string()]);
}

/// An empty payload reports every missing client field at once.
#[tokio::test]
async fn client_with_all_fields_blank_reports_each_one() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "name": "",
        "rut": "",
        "email": "",
        "phone": "",
        "address": "",
        "client_type": "individual"
    });
    let response = post_json_auth(app, "/clientes/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = error_fields(&body_json(response).await);
    for expected in ["name", "rut", "email", "phone", "address"] {
        assert!(fields.contains(&expected.to_string()), "missing {expected}");
    }
}

/// An unknown client_type wire value never reaches the validator; the
/// typed payload rejects it at deserialization.
#[tokio::test]
async fn client_with_unknown_type_fails_deserialization() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "name": "Acme",
        "rut": "12345678-9",
        "email": "a@acme.cl",
        "phone": "1",
        "address": "x",
        "client_type": "empresa"
    });
    let response = post_json_auth(app, "/clientes/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// A negative total budget is a field error, not a silent clamp.
#[tokio::test]
async fn project_with_negative_budget_is_rejected() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "name": "Wiring Job",
        "client_id": 1,
        "description": "Obra menor",
        "start_date": "2026-09-01",
        "estimated_end_date": "2026-12-15",
        "total_budget": -500000.0
    });
    let response = post_json_auth(app, "/proyectos/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(error_fields(&json), vec!["total_budget".to_string()]);
}

/// Edit payloads run through the same validator as create.
#[tokio::test]
async fn project_edit_validates_like_create() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "name": "",
        "client_id": 1,
        "description": "",
        "start_date": "2026-09-01",
        "estimated_end_date": "2026-12-15",
        "total_budget": 0.0
    });
    let response = post_json_auth(app, "/proyectos/1/editar/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = error_fields(&body_json(response).await);
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"description".to_string()));
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

/// Zero validity days and a negative amount are both reported.
#[tokio::test]
async fn budget_with_bad_amount_and_validity_reports_both() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "client_id": 1,
        "description": "Presupuesto obra gruesa",
        "total_amount": -1.0,
        "issue_date": "2026-08-30",
        "validity_days": 0
    });
    let response = post_json_auth(app, "/presupuestos/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = error_fields(&body_json(response).await);
    assert_eq!(
        fields,
        vec!["total_amount".to_string(), "validity_days".to_string()]
    );
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

/// A whitespace-only title counts as missing.
#[tokio::test]
async fn incident_with_blank_title_is_rejected() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({
        "project_id": 1,
        "title": "   ",
        "description": "Falla en tablero principal",
        "kind": "technical"
    });
    let response = post_json_auth(app, "/incidencias/crear/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(error_fields(&json), vec!["title".to_string()]);
}

/// The resolution form only accepts the four known statuses.
#[tokio::test]
async fn resolve_with_unknown_status_fails_deserialization() {
    let app = build_test_app();
    let token = auth_token(UserRole::Employee, false);

    let body = json!({ "status": "done", "resolution": "Listo" });
    let response = post_json_auth(app, "/incidencias/1/resolver/", &token, body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Over-long profile fields are rejected with their lengths named.
#[tokio::test]
async fn profile_update_caps_field_lengths() {
    let app = build_test_app();
    let token = auth_token(UserRole::Client, false);

    let body = json!({
        "phone": "1".repeat(16),
        "company": "",
        "rut": "1".repeat(13),
        "address": ""
    });
    let response = post_json_auth(app, "/perfil/", &token, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fields = error_fields(&body_json(response).await);
    assert_eq!(fields, vec!["phone".to_string(), "rut".to_string()]);
}
