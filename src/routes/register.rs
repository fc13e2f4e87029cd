use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::services::auth_service;
use crate::types::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    req.validate()
        .map_err(|e| AppError::new(ErrorCode::ValidationError, e.to_string()))?;

    if req.password.is_empty() {
        return Err(AppError::new(ErrorCode::ValidationError, "password is required"));
    }

    let password_hash = auth_service::hash_password(&req.password)?;
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let email = req.email.to_lowercase();
    let exists: bool = users::table
        .filter(users::email.eq(&email))
        .count()
        .get_result::<i64>(&mut conn)
        .map(|c| c > 0)
        .unwrap_or(false);

    if exists {
        return Err(AppError::new(ErrorCode::EmailAlreadyExists, "email already registered"));
    }

    let user: User = diesel::insert_into(users::table)
        .values(&NewUser::with_password(email, password_hash))
        .get_result(&mut conn)?;

    tracing::info!(user_id = %user.id, email = %user.email, "user registered");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}
