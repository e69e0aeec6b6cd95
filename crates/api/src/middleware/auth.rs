//! JWT-based authentication extractors for Axum handlers.

use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sirius_core::error::CoreError;
use sirius_core::identity::Identity;
use sirius_core::types::UserRole;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(AuthUser(identity): AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = identity.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let role = UserRole::from_str(&claims.role).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser(Identity {
            user_id: claims.sub,
            username: claims.username,
            email: claims.email,
            staff: claims.staff,
            role,
        }))
    }
}

/// Like [`AuthUser`] but yields `None` instead of rejecting, for routes that
/// serve both authenticated and anonymous callers (the dashboard).
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<Identity>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = AuthUser::from_request_parts(parts, state)
            .await
            .ok()
            .map(|AuthUser(identity)| identity);
        Ok(OptionalUser(identity))
    }
}
