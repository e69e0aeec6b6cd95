//! Domain error type shared by the repository and HTTP layers.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup by primary key found nothing (or the row is soft-deleted).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A field-rule failure not tied to a specific field list; the
    /// per-field variant lives in [`crate::validate::FieldError`].
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unique-constraint style conflicts (duplicate RUT, username, budget number).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or unusable credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (staff-only gates).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
