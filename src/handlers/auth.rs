use axum::{Json, extract::State};
use axum_extra::TypedHeader;
use chrono::{Duration, Utc};
use headers::{Authorization, authorization::Bearer};
use subtle::ConstantTimeEq;
use tracing::info;
use uuid::Uuid;

use crate::error::StudioError;
use crate::middleware::AdminSession;
use crate::router::StudioState;
use crate::types::auth::{
    AdminIdentity, LoginRequest, LoginResponse, LogoutResponse, VerifyResponse,
};

/// POST /api/auth/login -> issues a session token on credential match.
///
/// Credentials come from configuration, never from source; comparison is
/// constant-time on both halves so neither leaks through timing.
pub async fn login_handler(
    State(state): State<StudioState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StudioError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(StudioError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    if state.login_limiter.check().is_err() {
        return Err(StudioError::TooManyLoginAttempts);
    }

    let username_ok = req.username.as_bytes().ct_eq(state.admin.username.as_bytes());
    let password_ok = req.password.as_bytes().ct_eq(state.admin.password.as_bytes());
    if !bool::from(username_ok & password_ok) {
        return Err(StudioError::InvalidCredentials);
    }

    let token = generate_token();
    let now = Utc::now();
    let expires_at = now + Duration::hours(state.session_ttl_hours);
    state
        .storage
        .insert_session(&token, &state.admin.username, expires_at, now)
        .await?;

    info!(username = %state.admin.username, "admin login");

    Ok(Json(LoginResponse {
        success: true,
        token,
        expires_at: expires_at.timestamp_millis(),
        admin: AdminIdentity {
            username: state.admin.username.clone(),
            role: "admin",
        },
    }))
}

/// Two v4 UUIDs worth of entropy, hex-encoded to 64 chars.
fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// POST /api/auth/verify -> 200 with the admin identity when the bearer
/// token names a live session; the extractor rejects otherwise.
pub async fn verify_handler(session: AdminSession) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        success: true,
        admin: AdminIdentity {
            username: session.username,
            role: "admin",
        },
    })
}

/// POST /api/auth/logout -> always succeeds; removes the session when the
/// bearer token names one.
pub async fn logout_handler(
    State(state): State<StudioState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<LogoutResponse>, StudioError> {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        state.storage.delete_session(bearer.token()).await?;
    }
    Ok(Json(LogoutResponse {
        success: true,
        message: "Logged out successfully",
    }))
}
