//! Handlers for accounts: registration, login and the own-profile page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sirius_core::error::CoreError;
use sirius_core::identity::Identity;
use sirius_core::types::UserRole;
use sirius_core::validate::{validate_profile, validate_registration, FieldError};
use sirius_db::models::user::{CreateUser, ProfileInput, UserInfo, UserProfile};
use sirius_db::repositories::{ProfileRepo, UserRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /registro/`. Account and profile fields travel
/// flat in one payload, the way the combined signup form submits them.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub profile: ProfileInput,
}

/// Request body for `POST /login/`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Profile role baked into the token claims.
    pub role: UserRole,
    pub user: UserInfo,
}

/// An account with its profile, returned by registration and the
/// profile routes.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub user: UserInfo,
    pub profile: UserProfile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /registro/
///
/// Open registration. New accounts never carry the staff flag; the
/// profile role defaults to `client` when absent.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    // 1. Validate account and profile fields, collecting every violation.
    let mut errors = match validate_registration(
        &input.username,
        &input.email,
        &input.first_name,
        &input.last_name,
    ) {
        Ok(()) => Vec::new(),
        Err(errors) => errors,
    };
    if input.password != input.password_confirm {
        errors.push(FieldError::new("password_confirm", "Passwords do not match"));
    } else if let Err(reason) = validate_password_strength(&input.password) {
        errors.push(FieldError::new("password", reason));
    }
    if let Err(profile_errors) = validate_profile(
        &input.profile.phone,
        &input.profile.company,
        &input.profile.rut,
    ) {
        errors.extend(profile_errors);
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // 2. Hash the password.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // 3. Insert account and profile in one transaction. A taken username
    //    surfaces as a unique violation (409).
    let account = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
        first_name: input.first_name,
        last_name: input.last_name,
    };
    let (user, profile) = UserRepo::register(&state.pool, &account, &input.profile).await?;

    tracing::info!(user_id = user.id, username = %user.username, "Account registered");
    Ok((
        StatusCode::CREATED,
        Json(AccountResponse {
            user: UserInfo::from(&user),
            profile,
        }),
    ))
}

/// POST /login/
///
/// Authenticate with username + password and mint an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 2. Check if the account is active.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 3. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 4. Load the profile for the role claim, creating the default one
    //    for accounts that have never touched theirs.
    let profile = ProfileRepo::get_or_create(&state.pool, user.id).await?;

    // 5. Mint the token.
    let identity = Identity {
        user_id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        staff: user.is_staff,
        role: profile.role,
    };
    let access_token = generate_access_token(&identity, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    tracing::info!(user_id = user.id, username = %user.username, "Login succeeded");
    Ok(Json(LoginResponse {
        access_token,
        expires_in,
        role: profile.role,
        user: UserInfo::from(&user),
    }))
}

/// GET /perfil/
///
/// The caller's own account and profile. A profile row is created on
/// first visit.
pub async fn profile_show(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> AppResult<Json<AccountResponse>> {
    let user = find_account(&state, &identity).await?;
    let profile = ProfileRepo::get_or_create(&state.pool, identity.user_id).await?;
    Ok(Json(AccountResponse {
        user: UserInfo::from(&user),
        profile,
    }))
}

/// POST /perfil/
///
/// Full-field profile update, creating the row when the caller has none
/// yet. The role is editable by the profile owner.
pub async fn profile_update(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(input): Json<ProfileInput>,
) -> AppResult<Json<AccountResponse>> {
    validate_profile(&input.phone, &input.company, &input.rut)?;
    let user = find_account(&state, &identity).await?;
    let profile = ProfileRepo::upsert(&state.pool, identity.user_id, &input).await?;
    tracing::info!(user_id = identity.user_id, "Profile updated");
    Ok(Json(AccountResponse {
        user: UserInfo::from(&user),
        profile,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The account row behind a validated token. Deleted accounts turn the
/// token stale.
async fn find_account(
    state: &AppState,
    identity: &Identity,
) -> Result<sirius_db::models::user::User, AppError> {
    UserRepo::find_by_id(&state.pool, identity.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))
}
