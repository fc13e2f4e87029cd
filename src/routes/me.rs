use axum::extract::State;
use axum::Json;
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::schema::users;
use crate::types::auth::AuthUser;
use crate::types::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: uuid::Uuid,
    pub email: String,
    pub is_verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn me(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<MeResponse>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let record = users::table
        .find(user.id)
        .first::<crate::models::User>(&mut conn)
        .map_err(|_| AppError::unauthorized("user not found"))?;

    Ok(Json(ApiResponse::ok(MeResponse {
        id: record.id,
        email: record.email,
        is_verified: record.is_verified,
        created_at: record.created_at,
    })))
}
