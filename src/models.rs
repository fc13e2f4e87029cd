use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{mood_logs, profiles, saved_chats, users};

// --- Users ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = users)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
    pub provider: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: Option<String>,
    pub google_sub: Option<String>,
    pub provider: Option<String>,
    pub is_verified: bool,
}

impl NewUser {
    /// A password account starts unverified; verification happens by code.
    pub fn with_password(email: String, password_hash: String) -> Self {
        Self {
            email,
            password_hash: Some(password_hash),
            google_sub: None,
            provider: None,
            is_verified: false,
        }
    }

    /// A Google account has no local password and arrives pre-verified.
    pub fn from_google(email: String, google_sub: String) -> Self {
        Self {
            email,
            password_hash: None,
            google_sub: Some(google_sub),
            provider: Some("google".to_string()),
            is_verified: true,
        }
    }
}

// --- Profiles ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = profiles)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub user_id: Uuid,
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

#[derive(Debug, AsChangeset, Deserialize)]
#[diesel(table_name = profiles)]
pub struct UpdateProfile {
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

// --- Mood logs ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = mood_logs)]
pub struct MoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub day: NaiveDate,
    pub happy: i32,
    pub sad: i32,
    pub overwhelmed: i32,
    pub fear: i32,
    pub calm: i32,
    pub bored: i32,
    pub excited: i32,
    pub lonely: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = mood_logs)]
pub struct NewMoodLog {
    pub user_id: Uuid,
    pub day: NaiveDate,
    pub happy: i32,
    pub sad: i32,
    pub overwhelmed: i32,
    pub fear: i32,
    pub calm: i32,
    pub bored: i32,
    pub excited: i32,
    pub lonely: i32,
}

// --- Saved chats ---

#[derive(Debug, Queryable, Identifiable, Serialize, Clone)]
#[diesel(table_name = saved_chats)]
pub struct SavedChat {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = saved_chats)]
pub struct NewSavedChat {
    pub user_id: Uuid,
    pub text: String,
}
