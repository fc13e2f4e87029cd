use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::VERIFY_CODE_COOKIE;
use crate::schema::users;
use crate::services::{auth_service, token_service};
use crate::types::auth::AuthUser;
use crate::types::ApiResponse;
use crate::AppState;

/// POST /verify/send
///
/// Generates a 6-digit code, emails it, and parks a signed copy in a
/// short-lived cookie. Nothing is persisted; the cookie's token is the
/// only record of the pending code.
pub async fn send_verification(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> AppResult<(StatusCode, CookieJar, Json<ApiResponse<&'static str>>)> {
    let code = auth_service::generate_verification_code();

    let token = token_service::create_verify_token(
        user.id,
        &user.email,
        &code,
        &state.config.jwt_secret,
        state.config.jwt_verify_ttl,
    )?;

    state.email.send_verification_code(&user.email, &code).await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %user.id, "failed to send verification email");
            AppError::new(ErrorCode::EmailSendFailed, "failed to send verification email")
        })?;

    let cookie = Cookie::build((VERIFY_CODE_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(ApiResponse::ok("verification code sent, please check your email")),
    ))
}

#[derive(Debug, Deserialize)]
pub struct VerifyCodeRequest {
    pub verify_code: String,
}

/// POST /verify
pub async fn verify_code(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<VerifyCodeRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<&'static str>>)> {
    if req.verify_code.is_empty() {
        return Err(AppError::bad_request("verification code is required"));
    }

    let cookie = jar
        .get(VERIFY_CODE_COOKIE)
        .ok_or_else(|| AppError::new(ErrorCode::TokenInvalid, "invalid or expired token"))?;

    let claims = token_service::decode_token(cookie.value(), &state.config.jwt_secret)?;

    if claims.verify_code.as_deref() != Some(req.verify_code.as_str()) {
        return Err(AppError::new(ErrorCode::VerificationCodeInvalid, "invalid verification code"));
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;
    diesel::update(users::table.filter(users::id.eq(claims.sub)))
        .set((users::is_verified.eq(true), users::updated_at.eq(chrono::Utc::now())))
        .execute(&mut conn)?;

    tracing::info!(user_id = %user.id, "email verified");

    let removal = Cookie::build((VERIFY_CODE_COOKIE, "")).path("/").build();
    Ok((
        jar.remove(removal),
        Json(ApiResponse::ok("email verified successfully")),
    ))
}
