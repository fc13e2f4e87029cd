use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::ACCESS_TOKEN_COOKIE;
use crate::models::User;
use crate::schema::users;
use crate::services::{auth_service, token_service};
use crate::types::{ApiResponse, TokenResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<TokenResponse>>)> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::new(ErrorCode::InvalidCredentials, "invalid email or password"));
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    // The same message for every failure path; whether the email exists is
    // never revealed.
    let user: User = users::table
        .filter(users::email.eq(req.email.to_lowercase()))
        .first(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::InvalidCredentials, "invalid email or password"))?;

    let hash = user
        .password_hash
        .as_deref()
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials, "invalid email or password"))?;

    if !auth_service::verify_password(&req.password, hash)? {
        return Err(AppError::new(ErrorCode::InvalidCredentials, "invalid email or password"));
    }

    let token = token_service::create_access_token(
        user.id,
        &user.email,
        &state.config.jwt_secret,
        state.config.jwt_access_ttl,
    )?;

    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    tracing::info!(user_id = %user.id, "user logged in");

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(TokenResponse::new(token, state.config.jwt_access_ttl))),
    ))
}
