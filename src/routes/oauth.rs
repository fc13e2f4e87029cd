use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::ACCESS_TOKEN_COOKIE;
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::services::token_service;
use crate::types::{ApiResponse, TokenResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct OAuthResponse {
    #[serde(flatten)]
    pub tokens: TokenResponse,
    pub is_new_user: bool,
}

pub async fn google_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<GoogleLoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<OAuthResponse>>)> {
    if req.token.is_empty() {
        return Err(AppError::bad_request("token is required"));
    }

    let identity = state.google.verify(&req.token).await
        .map_err(|e| AppError::new(ErrorCode::OAuthError, e))?;

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;
    let email = identity.email.to_lowercase();

    let existing = users::table
        .filter(users::email.eq(&email))
        .first::<User>(&mut conn)
        .optional()
        .map_err(AppError::Database)?;

    let (user, is_new_user) = match existing {
        Some(user) if user.google_sub.is_none() => {
            // First Google login on an email that registered with a
            // password: link the subject without touching the password.
            let linked: User = diesel::update(users::table.filter(users::id.eq(user.id)))
                .set((
                    users::google_sub.eq(Some(identity.subject.as_str())),
                    users::provider.eq(Some("google")),
                    users::updated_at.eq(chrono::Utc::now()),
                ))
                .get_result(&mut conn)?;
            (linked, false)
        }
        Some(user) => (user, false),
        None => {
            let created: User = diesel::insert_into(users::table)
                .values(&NewUser::from_google(email, identity.subject.clone()))
                .get_result(&mut conn)?;
            (created, true)
        }
    };

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

    tracing::info!(user_id = %user.id, is_new = is_new_user, "google login");

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(OAuthResponse {
            tokens: TokenResponse::new(token, state.config.jwt_access_ttl),
            is_new_user,
        })),
    ))
}
