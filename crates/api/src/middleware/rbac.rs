//! Authorization extractors layered on top of [`AuthUser`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sirius_core::error::CoreError;
use sirius_core::identity::Identity;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the account staff flag. Rejects with 403 Forbidden otherwise.
///
/// Gates the destructive operations (client/service removal) and service
/// creation. The profile role plays no part here; only the staff flag
/// elevates.
///
/// ```ignore
/// async fn staff_only(RequireStaff(identity): RequireStaff) -> AppResult<Json<()>> {
///     // identity.staff is guaranteed true here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub Identity);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        if !identity.is_elevated() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff privileges required".into(),
            )));
        }
        Ok(RequireStaff(identity))
    }
}
