use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claim set carried by both login and verification tokens.
///
/// Login tokens omit `verify_code`; verification tokens carry the 6-digit
/// code that was emailed out-of-band so the verify endpoint can compare
/// against it without persisting anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_code: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, email: impl Into<String>, duration_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id,
            email: email.into(),
            verify_code: None,
            iat: now,
            exp: now + duration_secs,
        }
    }

    pub fn with_verify_code(mut self, code: impl Into<String>) -> Self {
        self.verify_code = Some(code.into());
        self
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Identity context attached by the first authorization gate.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_claims_are_not_expired() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com", 3600);
        assert!(!claims.is_expired());
        assert!(claims.verify_code.is_none());
    }

    #[test]
    fn past_expiry_is_detected() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com", -10);
        assert!(claims.is_expired());
    }

    #[test]
    fn verify_code_rides_in_claims() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com", 3600).with_verify_code("123456");
        assert_eq!(claims.verify_code.as_deref(), Some("123456"));
    }
}
