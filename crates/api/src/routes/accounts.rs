//! Route definitions for registration, login and the own profile.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// POST /registro/  -> register (public)
/// POST /login/     -> login (public)
/// GET  /perfil/    -> profile_show
/// POST /perfil/    -> profile_update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registro/", post(accounts::register))
        .route("/login/", post(accounts::login))
        .route(
            "/perfil/",
            get(accounts::profile_show).post(accounts::profile_update),
        )
}
