use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::errors::{AppError, ErrorCode};
use crate::types::auth::Claims;

pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, AppError> {
    sign(Claims::new(user_id, email, ttl_secs), secret)
}

/// Verification tokens are short-lived and additionally carry the 6-digit
/// code so the verify endpoint has something to compare against.
pub fn create_verify_token(
    user_id: Uuid,
    email: &str,
    code: &str,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, AppError> {
    sign(Claims::new(user_id, email, ttl_secs).with_verify_code(code), secret)
}

fn sign(claims: Claims, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("JWT encoding failed: {e}")))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::new(ErrorCode::TokenExpired, "invalid or expired token")
        }
        _ => AppError::new(ErrorCode::TokenInvalid, "invalid or expired token"),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn access_token_round_trips() {
        let id = Uuid::new_v4();
        let token = create_access_token(id, "a@b.com", SECRET, 3600).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.verify_code.is_none());
    }

    #[test]
    fn verify_token_carries_the_code() {
        let token = create_verify_token(Uuid::new_v4(), "a@b.com", "493027", SECRET, 3600).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.verify_code.as_deref(), Some("493027"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_access_token(Uuid::new_v4(), "a@b.com", SECRET, 3600).unwrap();
        let err = decode_token(&token, "other-secret").unwrap_err();
        assert!(matches!(
            err,
            AppError::Known { code: ErrorCode::TokenInvalid, .. }
        ));
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        // jsonwebtoken allows 60s leeway by default, so back-date well past it
        let token = create_access_token(Uuid::new_v4(), "a@b.com", SECRET, -300).unwrap();
        let err = decode_token(&token, SECRET).unwrap_err();
        assert!(matches!(
            err,
            AppError::Known { code: ErrorCode::TokenExpired, .. }
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not-a-jwt", SECRET).is_err());
    }
}
