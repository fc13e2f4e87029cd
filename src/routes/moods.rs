use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::middleware::ProfileUser;
use crate::models::MoodLog;
use crate::schema::mood_logs;
use crate::services::mood_service::{self, MoodKind, MoodStatus};
use crate::types::ApiResponse;
use crate::AppState;

/// GET /moods
pub async fn get_moods(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<MoodLog>>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let moods = mood_logs::table
        .filter(mood_logs::user_id.eq(gate.user.id))
        .order(mood_logs::day.desc())
        .load::<MoodLog>(&mut conn)?;

    Ok(Json(ApiResponse::ok(moods)))
}

#[derive(Debug, Deserialize)]
pub struct SubmitMoodRequest {
    pub mood: String,
}

/// POST /moods — first submission of the UTC day creates the tally row,
/// every later one bumps the named counter.
pub async fn create_mood(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitMoodRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<MoodLog>>)> {
    let kind: MoodKind = req.mood.parse()?;

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;
    let (row, status) = mood_service::submit_mood(&mut conn, gate.user.id, kind)?;

    tracing::debug!(user_id = %gate.user.id, mood = kind.as_str(), ?status, "mood submitted");

    let (code, message) = match status {
        MoodStatus::Created => (StatusCode::CREATED, "mood created"),
        MoodStatus::Updated => (StatusCode::OK, "mood updated"),
    };

    Ok((code, Json(ApiResponse::ok_with_message(row, message))))
}
