use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::ProfileUser;
use crate::models::Profile;
use crate::types::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
    pub date: String,
}

/// POST /ai — one completion call per request, nothing persisted. Saving
/// the result is the caller's job via POST /chat.
pub async fn generate(
    gate: ProfileUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<GenerateResponse>>)> {
    if req.mood.is_empty() {
        return Err(AppError::new(
            ErrorCode::MoodOptionNotFound,
            "please select the option that suits your current mood",
        ));
    }
    if req.message.is_empty() {
        return Err(AppError::new(
            ErrorCode::MessageRequired,
            "please enter any request message",
        ));
    }

    let prompt = build_prompt(&gate.profile, &req.mood, &req.message);

    let text = state.completion.complete(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, user_id = %gate.user.id, "completion call failed");
        AppError::new(ErrorCode::CompletionFailed, "completion service unavailable")
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(GenerateResponse {
            text,
            date: Utc::now().date_naive().to_string(),
        })),
    ))
}

fn build_prompt(profile: &Profile, mood: &str, message: &str) -> String {
    format!(
        r#"---
[CONTEXT FOR AI]

You are WeiMood, a friendly, warm, and relatable assistant giving a one-time, personalized response. This chat has no memory, so make it count and don't ask the user any questions. Keep your response under 3000 characters.

[USER PROFILE]
name: {display_name}
personality: {personality}
hobby: {hobbies}
favMusic: {fav_music}
favMusicGenre: {fav_music_genre}
age: {age}
country: {country}
city: {city}
interests: {interests}
activityLevel: {activity_level}
field: {field}
status: {status}

[USER'S CURRENT SITUATION]
- Current Mood: {mood}
- User's Message: "{message}"

[YOUR TASK]
Your top priority is to fully understand and fulfill the user's message. If they ask something specific, focus on that first.
Then, if there's room to add value:
1. Acknowledge their mood with empathy.
2. If relevant, suggest 1-2 things they could do right now, based on their hobbies or vibe.
3. If it fits, recommend a few songs that match their current mood.

Keep your tone chill, comforting, and human. Skip greetings, introductions, and sign-offs."#,
        display_name = profile.display_name,
        personality = profile.personality,
        hobbies = profile.hobbies,
        fav_music = profile.fav_music,
        fav_music_genre = profile.fav_music_genre,
        age = profile.age,
        country = profile.country,
        city = profile.city,
        interests = profile.interests,
        activity_level = profile.activity_level,
        field = profile.field,
        status = profile.status,
        mood = mood,
        message = message,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            display_name: "Wei".into(),
            age: "24".into(),
            country: "Indonesia".into(),
            city: "Jakarta".into(),
            personality: "introvert".into(),
            hobbies: "reading".into(),
            interests: "music".into(),
            fav_music: "lo-fi".into(),
            fav_music_genre: "jazz".into(),
            activity_level: "low".into(),
            status: "student".into(),
            field: "design".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn prompt_embeds_profile_mood_and_message() {
        let prompt = build_prompt(&sample_profile(), "calm", "recommend a playlist");
        assert!(prompt.contains("name: Wei"));
        assert!(prompt.contains("favMusicGenre: jazz"));
        assert!(prompt.contains("Current Mood: calm"));
        assert!(prompt.contains("\"recommend a playlist\""));
    }
}
