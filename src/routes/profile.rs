use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::{ProfileUser, VerifiedUser};
use crate::models::{NewProfile, Profile, UpdateProfile};
use crate::schema::profiles;
use crate::types::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub display_name: String,
    pub age: String,
    pub country: String,
    pub city: String,
    pub personality: String,
    pub hobbies: String,
    pub interests: String,
    pub fav_music: String,
    pub fav_music_genre: String,
    pub activity_level: String,
    pub status: String,
    pub field: String,
}

/// POST /profile — verification gate only; this is how a fresh account
/// earns its way past the profile gate.
pub async fn create_profile(
    VerifiedUser(user): VerifiedUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProfileRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Profile>>)> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let new_profile = NewProfile {
        user_id: user.id,
        display_name: req.display_name,
        age: req.age,
        country: req.country,
        city: req.city,
        personality: req.personality,
        hobbies: req.hobbies,
        interests: req.interests,
        fav_music: req.fav_music,
        fav_music_genre: req.fav_music_genre,
        activity_level: req.activity_level,
        status: req.status,
        field: req.field,
    };

    let profile: Profile = diesel::insert_into(profiles::table)
        .values(&new_profile)
        .get_result(&mut conn)?;

    tracing::info!(user_id = %user.id, profile_id = %profile.id, "profile created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(profile, "profile created successfully")),
    ))
}

/// GET /profile
pub async fn get_profile(gate: ProfileUser) -> Json<ApiResponse<Profile>> {
    Json(ApiResponse::ok(gate.profile))
}

/// PUT /profile
pub async fn update_profile(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateProfile>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let updated = diesel::update(profiles::table.filter(profiles::user_id.eq(gate.user.id)))
        .set((&payload, profiles::updated_at.eq(chrono::Utc::now())))
        .get_result::<Profile>(&mut conn)
        .map_err(|_| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

    Ok(Json(ApiResponse::ok_with_message(updated, "profile updated successfully")))
}

/// DELETE /profile
pub async fn delete_profile(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<&'static str>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    diesel::delete(profiles::table.filter(profiles::user_id.eq(gate.user.id)))
        .execute(&mut conn)?;

    tracing::info!(user_id = %gate.user.id, "profile deleted");

    Ok(Json(ApiResponse::ok("profile deleted successfully")))
}
