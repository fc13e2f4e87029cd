use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Single-turn client for an OpenRouter-compatible chat completions API.
/// One request per call, no retry, no streaming. The per-request timeout
/// bounds the only slow external dependency on the request path.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

impl CompletionClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
        };

        let response = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("completion request failed: {e}"))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("completion API error: {body}"));
        }

        let completion: ChatCompletion = response.json().await
            .map_err(|e| format!("invalid completion response: {e}"))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| "completion returned no choices".to_string())
    }
}
