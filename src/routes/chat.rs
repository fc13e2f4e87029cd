use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::ProfileUser;
use crate::models::{NewSavedChat, SavedChat};
use crate::schema::saved_chats;
use crate::types::ApiResponse;
use crate::AppState;

/// GET /chat — newest first.
pub async fn get_history(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<SavedChat>>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let history = saved_chats::table
        .filter(saved_chats::user_id.eq(gate.user.id))
        .order(saved_chats::created_at.desc())
        .load::<SavedChat>(&mut conn)?;

    Ok(Json(ApiResponse::ok(history)))
}

/// GET /chat/:id — scoped by owner, so someone else's id reads as absent.
pub async fn get_detail(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<SavedChat>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let chat = saved_chats::table
        .filter(saved_chats::id.eq(id))
        .filter(saved_chats::user_id.eq(gate.user.id))
        .first::<SavedChat>(&mut conn)
        .optional()
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::new(ErrorCode::ChatNotFound, "chat not found"))?;

    Ok(Json(ApiResponse::ok(chat)))
}

#[derive(Debug, Deserialize)]
pub struct SaveChatRequest {
    pub text: String,
}

/// POST /chat
pub async fn save_chat(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveChatRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SavedChat>>)> {
    if req.text.is_empty() {
        return Err(AppError::bad_request("text is required"));
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let chat: SavedChat = diesel::insert_into(saved_chats::table)
        .values(&NewSavedChat { user_id: gate.user.id, text: req.text })
        .get_result(&mut conn)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(chat, "chat saved successfully")),
    ))
}

/// DELETE /chat/:id
pub async fn delete_chat(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let deleted = diesel::delete(
        saved_chats::table
            .filter(saved_chats::id.eq(id))
            .filter(saved_chats::user_id.eq(gate.user.id)),
    )
    .execute(&mut conn)?;

    if deleted == 0 {
        return Err(AppError::new(ErrorCode::ChatNotFound, "chat not found"));
    }

    Ok(Json(ApiResponse::ok("chat deleted successfully")))
}
