//! Language-model inference capability
//!
//! One trait seam plus the Hugging Face chat-completions client behind it.
//! Every failure mode maps onto `InferenceError`; the enricher absorbs all
//! of them with the deterministic fallback.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use types::errors::InferenceError;

/// Default chat-completions endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co";

/// Bound on one completion request. A stalled endpoint must not wedge a
/// scan that is holding a browser process and a concurrency permit; a
/// timed-out call degrades to the fallback like any other failure.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Default instruct model used for remediation suggestions.
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Generation settings for one completion call.
///
/// Defaults bias toward concise, low-randomness output: suggestions should
/// be short and stable, not creative.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 100,
            temperature: 0.3,
        }
    }
}

/// Text-completion capability: given a prompt, return generated text or fail.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, InferenceError>;
}

/// Hugging Face chat-completions client.
pub struct HfClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl HfClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self::with_request_timeout(api_key, model, base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a client with an explicit per-request timeout.
    pub fn with_request_timeout(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Self {
        // Same failure mode as reqwest::Client::new: only panics when the
        // TLS backend cannot be initialized.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl InferenceClient for HfClient {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, InferenceError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InferenceError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::MalformedResponse("no choices in response".into()))?;

        let content = choice
            .message
            .content
            .unwrap_or_default()
            .trim()
            .to_string();
        if content.is_empty() {
            return Err(InferenceError::EmptyCompletion);
        }

        debug!(model = %self.model, chars = content.len(), "completion received");
        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        let client = HfClient::new(
            "key".into(),
            DEFAULT_MODEL.into(),
            "https://router.huggingface.co/".into(),
        );
        assert_eq!(
            client.endpoint(),
            "https://router.huggingface.co/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_response_parsing() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Add alt text."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Add alt text.")
        );
    }

    #[test]
    fn test_chat_response_null_content() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, None);
    }

    #[test]
    fn test_default_options_bound_generation() {
        let options = CompletionOptions::default();
        assert_eq!(options.max_tokens, 100);
        assert!((options.temperature - 0.3).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_stalled_endpoint_fails_within_request_timeout() {
        // Endpoint that accepts the connection and never responds.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without writing a response.
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let client = HfClient::with_request_timeout(
            "key".into(),
            DEFAULT_MODEL.into(),
            format!("http://{addr}"),
            Duration::from_millis(200),
        );

        // The call must resolve with an error instead of pending forever.
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            client.complete("prompt", &CompletionOptions::default()),
        )
        .await
        .expect("completion call should resolve within its request timeout");

        assert!(matches!(result, Err(InferenceError::Http(_))));
    }
}
