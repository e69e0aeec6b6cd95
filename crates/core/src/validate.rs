//! Explicit field validation for entity inputs.
//!
//! Each entity has a `validate_*` function returning `Ok(())` or the full
//! list of field violations, so a response can report every bad field at
//! once. Database-backed rules (unique RUT, unique username, foreign keys)
//! are not duplicated here; constraint violations surface through the
//! repository layer.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Chilean RUT: 7-8 digits, a dash, then a digit or verifier `k`/`K`.
/// Only the shape is checked; verifier arithmetic is not.
pub static RUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,8}-[0-9kK]$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Username alphabet: letters, digits and `@ . + - _`.
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.@+-]+$").expect("valid regex"));

/// Maximum length of entity names and incident titles.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a stored RUT.
pub const MAX_RUT_LEN: usize = 12;

/// Maximum length of a phone number.
pub const MAX_PHONE_LEN: usize = 15;

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 150;

/// Maximum length of a person's first or last name.
pub const MAX_PERSON_NAME_LEN: usize = 30;

/// One rejected field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating one incoming payload: ok, or every violation found.
pub type ValidationResult = Result<(), Vec<FieldError>>;

fn finish(errors: Vec<FieldError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "This field is required"));
        false
    } else {
        true
    }
}

fn limit(errors: &mut Vec<FieldError>, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("Must not exceed {max} characters"),
        ));
    }
}

// ---------------------------------------------------------------------------
// Entity validators
// ---------------------------------------------------------------------------

/// Validate a client create/edit payload.
pub fn validate_client(
    name: &str,
    rut: &str,
    email: &str,
    phone: &str,
    address: &str,
) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "name", name);
    limit(&mut errors, "name", name, MAX_NAME_LEN);
    if require(&mut errors, "rut", rut) && !RUT_RE.is_match(rut) {
        errors.push(FieldError::new(
            "rut",
            "RUT must look like 12345678-9 (7-8 digits, dash, verifier)",
        ));
    }
    if require(&mut errors, "email", email) && !EMAIL_RE.is_match(email) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    require(&mut errors, "phone", phone);
    limit(&mut errors, "phone", phone, MAX_PHONE_LEN);
    require(&mut errors, "address", address);
    finish(errors)
}

/// Validate a service create/edit payload.
pub fn validate_service(name: &str, description: &str, base_price: f64) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "name", name);
    limit(&mut errors, "name", name, MAX_NAME_LEN);
    require(&mut errors, "description", description);
    if !(base_price >= 0.0) {
        errors.push(FieldError::new(
            "base_price",
            "Must be zero or a positive amount",
        ));
    }
    finish(errors)
}

/// Validate a project create/edit payload.
pub fn validate_project(name: &str, description: &str, total_budget: f64) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "name", name);
    limit(&mut errors, "name", name, MAX_NAME_LEN);
    require(&mut errors, "description", description);
    if !(total_budget >= 0.0) {
        errors.push(FieldError::new(
            "total_budget",
            "Must be zero or a positive amount",
        ));
    }
    finish(errors)
}

/// Validate a budget create payload.
pub fn validate_budget(description: &str, total_amount: f64, validity_days: i32) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "description", description);
    if !(total_amount >= 0.0) {
        errors.push(FieldError::new(
            "total_amount",
            "Must be zero or a positive amount",
        ));
    }
    if validity_days < 1 {
        errors.push(FieldError::new("validity_days", "Must be at least 1 day"));
    }
    finish(errors)
}

/// Validate an incident create payload.
pub fn validate_incident(title: &str, description: &str) -> ValidationResult {
    let mut errors = Vec::new();
    require(&mut errors, "title", title);
    limit(&mut errors, "title", title, MAX_NAME_LEN);
    require(&mut errors, "description", description);
    finish(errors)
}

/// Validate a profile update payload. All fields are optional; the RUT
/// here is free-form text (length-capped only), unlike the client RUT.
pub fn validate_profile(phone: &str, company: &str, rut: &str) -> ValidationResult {
    let mut errors = Vec::new();
    limit(&mut errors, "phone", phone, MAX_PHONE_LEN);
    limit(&mut errors, "company", company, MAX_NAME_LEN);
    limit(&mut errors, "rut", rut, MAX_RUT_LEN);
    finish(errors)
}

/// Validate the account part of a registration payload.
pub fn validate_registration(
    username: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
) -> ValidationResult {
    let mut errors = Vec::new();
    if require(&mut errors, "username", username) && !USERNAME_RE.is_match(username) {
        errors.push(FieldError::new(
            "username",
            "Only letters, digits and @ . + - _ are allowed",
        ));
    }
    limit(&mut errors, "username", username, MAX_USERNAME_LEN);
    if require(&mut errors, "email", email) && !EMAIL_RE.is_match(email) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    require(&mut errors, "first_name", first_name);
    limit(&mut errors, "first_name", first_name, MAX_PERSON_NAME_LEN);
    require(&mut errors, "last_name", last_name);
    limit(&mut errors, "last_name", last_name, MAX_PERSON_NAME_LEN);
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(result: ValidationResult) -> Vec<&'static str> {
        result.unwrap_err().into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_client_passes() {
        assert!(validate_client(
            "Constructora Andes",
            "12345678-9",
            "contacto@andes.cl",
            "+56912345678",
            "Av. Providencia 1234"
        )
        .is_ok());
    }

    #[test]
    fn rut_accepts_k_verifier_both_cases() {
        assert!(validate_client("A", "1234567-k", "a@b.cl", "1", "x").is_ok());
        assert!(validate_client("A", "1234567-K", "a@b.cl", "1", "x").is_ok());
    }

    #[test]
    fn rut_rejects_wrong_shapes() {
        for bad in ["123456-9", "123456789-1", "12345678", "12.345.678-9", "12345678-x"] {
            let err = validate_client("A", bad, "a@b.cl", "1", "x").unwrap_err();
            assert!(err.iter().any(|e| e.field == "rut"), "accepted {bad}");
        }
    }

    #[test]
    fn all_client_fields_required() {
        let got = fields(validate_client("", "", "", "", ""));
        assert_eq!(got, vec!["name", "rut", "email", "phone", "address"]);
    }

    #[test]
    fn collects_every_violation_not_just_first() {
        let err = validate_client("Ok", "bad-rut", "not-an-email", "1", "x").unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn negative_amounts_rejected() {
        assert!(fields(validate_service("S", "d", -0.01)).contains(&"base_price"));
        assert!(fields(validate_project("P", "d", -1.0)).contains(&"total_budget"));
        assert!(fields(validate_budget("d", -1.0, 30)).contains(&"total_amount"));
    }

    #[test]
    fn nan_amount_rejected() {
        assert!(fields(validate_service("S", "d", f64::NAN)).contains(&"base_price"));
    }

    #[test]
    fn zero_amounts_allowed() {
        assert!(validate_service("S", "d", 0.0).is_ok());
        assert!(validate_budget("d", 0.0, 1).is_ok());
    }

    #[test]
    fn validity_days_must_be_positive() {
        assert!(fields(validate_budget("d", 10.0, 0)).contains(&"validity_days"));
        assert!(validate_budget("d", 10.0, 1).is_ok());
    }

    #[test]
    fn name_length_capped_at_200() {
        let long = "x".repeat(201);
        assert!(fields(validate_project(&long, "d", 0.0)).contains(&"name"));
        assert!(validate_project(&"x".repeat(200), "d", 0.0).is_ok());
    }

    #[test]
    fn profile_rut_is_free_form() {
        // No pattern check, only length: "12.345.678-9" is 12 chars, fine.
        assert!(validate_profile("", "", "12.345.678-9").is_ok());
        assert!(fields(validate_profile("", "", &"1".repeat(13))).contains(&"rut"));
    }

    #[test]
    fn username_alphabet_enforced() {
        assert!(validate_registration("ana.perez+x", "a@b.cl", "Ana", "Pérez").is_ok());
        assert!(fields(validate_registration("ana perez", "a@b.cl", "Ana", "P")).contains(&"username"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert!(fields(validate_incident("   ", "d")).contains(&"title"));
    }
}
