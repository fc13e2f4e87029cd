use reqwest::Client;
use serde::Deserialize;

/// Verifies Google ID tokens against the tokeninfo endpoint and returns the
/// asserted identity. Signature checking stays on Google's side; we only
/// confirm the token was minted for our client id.
#[derive(Clone)]
pub struct GoogleVerifier {
    client: Client,
    client_id: String,
}

#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    pub email: String,
    pub subject: String,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    sub: String,
    email: String,
}

impl GoogleVerifier {
    pub fn new(client_id: &str) -> Self {
        Self {
            client: Client::new(),
            client_id: client_id.to_string(),
        }
    }

    pub async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, String> {
        let response = self.client
            .get("https://oauth2.googleapis.com/tokeninfo")
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| format!("google tokeninfo request failed: {e}"))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("google rejected the token: {body}"));
        }

        let info: TokenInfo = response.json().await
            .map_err(|e| format!("invalid tokeninfo response: {e}"))?;

        if info.aud != self.client_id {
            return Err("token audience does not match client id".to_string());
        }

        Ok(GoogleIdentity {
            email: info.email,
            subject: info.sub,
        })
    }
}
