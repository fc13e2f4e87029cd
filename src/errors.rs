use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::types::ApiErrorResponse;

/// Application error codes following the pattern E{area}{sequence}
///
/// Ranges:
/// - E0xxx: Shared/infrastructure errors
/// - E1xxx: Auth errors
/// - E2xxx: Profile errors
/// - E3xxx: Mood errors
/// - E4xxx: Chat errors
/// - E5xxx: Generation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Shared (E0xxx)
    InternalError,
    ValidationError,
    NotFound,
    Unauthorized,
    Forbidden,
    BadRequest,

    // Auth (E1xxx)
    InvalidCredentials,
    EmailAlreadyExists,
    EmailNotVerified,
    TokenExpired,
    TokenInvalid,
    OAuthError,
    VerificationCodeInvalid,
    EmailSendFailed,

    // Profile (E2xxx)
    ProfileNotFound,

    // Mood (E3xxx)
    MoodOptionNotFound,
    MessageRequired,

    // Chat (E4xxx)
    ChatNotFound,

    // Generation (E5xxx)
    CompletionFailed,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            // Shared
            Self::InternalError => "E0001",
            Self::ValidationError => "E0002",
            Self::NotFound => "E0003",
            Self::Unauthorized => "E0004",
            Self::Forbidden => "E0005",
            Self::BadRequest => "E0006",

            // Auth
            Self::InvalidCredentials => "E1001",
            Self::EmailAlreadyExists => "E1002",
            Self::EmailNotVerified => "E1003",
            Self::TokenExpired => "E1004",
            Self::TokenInvalid => "E1005",
            Self::OAuthError => "E1006",
            Self::VerificationCodeInvalid => "E1007",
            Self::EmailSendFailed => "E1008",

            // Profile
            Self::ProfileNotFound => "E2001",

            // Mood
            Self::MoodOptionNotFound => "E3001",
            Self::MessageRequired => "E3002",

            // Chat
            Self::ChatNotFound => "E4001",

            // Generation
            Self::CompletionFailed => "E5001",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationError | Self::BadRequest | Self::EmailAlreadyExists
            | Self::OAuthError | Self::VerificationCodeInvalid => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::ProfileNotFound | Self::ChatNotFound
            | Self::MoodOptionNotFound | Self::MessageRequired => StatusCode::NOT_FOUND,
            Self::Unauthorized | Self::InvalidCredentials | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::Forbidden | Self::EmailNotVerified => StatusCode::FORBIDDEN,
            Self::EmailSendFailed | Self::CompletionFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Known {
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::Known { code, message, details } => {
                let status = code.status_code();
                let mut resp = ApiErrorResponse::new(code.code(), message);
                if let Some(d) = details {
                    resp = resp.with_details(d.clone());
                }
                (status, resp)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse::new("E0001", "internal server error"),
                )
            }
            AppError::Database(err) => match err {
                diesel::result::Error::NotFound => (
                    StatusCode::NOT_FOUND,
                    ApiErrorResponse::new("E0003", "resource not found"),
                ),
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    info,
                ) => (
                    StatusCode::BAD_REQUEST,
                    ApiErrorResponse::new("E0002", info.message()),
                ),
                _ => {
                    tracing::error!(error = %err, "database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiErrorResponse::new("E0001", "database error"),
                    )
                }
            },
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ApiErrorResponse::new("E0002", msg),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness_failures_map_to_400() {
        assert_eq!(ErrorCode::EmailAlreadyExists.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ValidationError.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unverified_maps_to_403_and_missing_resources_to_404() {
        assert_eq!(ErrorCode::EmailNotVerified.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::ProfileNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ChatNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::MoodOptionNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn token_failures_map_to_401() {
        assert_eq!(ErrorCode::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn error_codes_are_unique() {
        let codes = [
            ErrorCode::InternalError, ErrorCode::ValidationError, ErrorCode::NotFound,
            ErrorCode::Unauthorized, ErrorCode::Forbidden, ErrorCode::BadRequest,
            ErrorCode::InvalidCredentials, ErrorCode::EmailAlreadyExists,
            ErrorCode::EmailNotVerified, ErrorCode::TokenExpired, ErrorCode::TokenInvalid,
            ErrorCode::OAuthError, ErrorCode::VerificationCodeInvalid,
            ErrorCode::EmailSendFailed, ErrorCode::ProfileNotFound,
            ErrorCode::MoodOptionNotFound, ErrorCode::MessageRequired,
            ErrorCode::ChatNotFound, ErrorCode::CompletionFailed,
        ];
        let mut seen: Vec<&str> = codes.iter().map(|c| c.code()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), codes.len());
    }
}
