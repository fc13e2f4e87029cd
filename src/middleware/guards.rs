use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use diesel::prelude::*;

use crate::errors::{AppError, ErrorCode};
use crate::models::{Profile, User};
use crate::schema::{profiles, users};
use crate::services::token_service;
use crate::types::auth::AuthUser;
use crate::AppState;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const VERIFY_CODE_COOKIE: &str = "verify_code";

/// Gate 1: token decode plus a live user lookup. The gates are predicates
/// over persisted state rather than the token payload, so verification and
/// profile creation take effect without reissuing tokens.
#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers)?;
        let claims = token_service::decode_token(&token, &state.config.jwt_secret)?;

        let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;
        let user = users::table
            .find(claims.sub)
            .first::<User>(&mut conn)
            .optional()
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::unauthorized("user not found"))?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
        })
    }
}

/// Gate 2: re-fetches the user so a token issued before verification
/// cannot bypass the check.
pub struct VerifiedUser(pub AuthUser);

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for VerifiedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;

        let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;
        let user = users::table
            .find(auth.id)
            .first::<User>(&mut conn)
            .optional()
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::unauthorized("user not found"))?;

        if !user.is_verified {
            return Err(AppError::new(ErrorCode::EmailNotVerified, "user not verified"));
        }

        Ok(VerifiedUser(auth))
    }
}

/// Gate 3: verification first, then profile presence. Ordering matters: an
/// unverified caller on a profile route must see 403, not 404.
pub struct ProfileUser {
    pub user: AuthUser,
    pub profile: Profile,
}

#[axum::async_trait]
impl FromRequestParts<Arc<AppState>> for ProfileUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let VerifiedUser(user) = VerifiedUser::from_request_parts(parts, state).await?;

        let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;
        let profile = profiles::table
            .filter(profiles::user_id.eq(user.id))
            .first::<Profile>(&mut conn)
            .optional()
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

        Ok(ProfileUser { user, profile })
    }
}

/// Pulls the bearer token from the `access_token` cookie or the
/// `Authorization` header; the cookie wins when both are present.
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        return Ok(cookie.value().to_string());
    }

    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::unauthorized("no token provided, please login"))?
        .to_str()
        .map_err(|_| AppError::unauthorized("invalid authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.to_string())
        .ok_or_else(|| AppError::unauthorized("authorization header must use Bearer scheme"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{AUTHORIZATION, COOKIE};
    use axum::http::HeaderValue;

    #[test]
    fn cookie_takes_precedence_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("access_token=from-cookie"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(extract_token(&headers).unwrap(), "from-cookie");
    }

    #[test]
    fn bearer_header_is_used_without_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        assert_eq!(extract_token(&headers).unwrap(), "from-header");
    }

    #[test]
    fn missing_token_is_rejected() {
        let headers = HeaderMap::new();
        let err = extract_token(&headers).unwrap_err();
        assert!(err.to_string().contains("no token provided"));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(extract_token(&headers).is_err());
    }

    #[test]
    fn unrelated_cookies_fall_through_to_header() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(extract_token(&headers).unwrap(), "tok");
    }
}
