//! Chat-completion client for the OpenRouter-compatible API.

use reqwest::Client;
use serde_json::json;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

use super::handle_response;

/// Client for the hosted chat-completion service.
///
/// Holds the bearer credential read once at startup; an unconfigured key
/// turns every call into [`ClientError::MissingApiKey`] before any network
/// I/O, so callers can degrade without misreading failure text as a reply.
#[derive(Clone)]
pub struct CompletionClient {
    /// HTTP client with timeouts configured.
    client: Client,

    /// Bearer credential (optional).
    api_key: Option<String>,

    /// Completion model identifier.
    model: String,

    /// Completion API base URL.
    base_url: String,
}

impl CompletionClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.completion_api_url.clone(),
        })
    }

    /// Check if a bearer credential is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send a single-turn chat prompt and return the trimmed reply text.
    ///
    /// One blocking request, no retries. The response is read from
    /// `choices[0].message.content`; anything else is a malformed response.
    ///
    /// # Errors
    ///
    /// Returns error when the credential is missing, on transport failure,
    /// on a non-success status, or on an unreadable body.
    pub async fn complete(&self, prompt: &str) -> ClientResult<String> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ClientError::MissingApiKey);
        };

        let url = format!("{}/chat/completions", self.base_url);
        let payload = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}]
        });

        let response = self.client.post(&url).bearer_auth(key).json(&payload).send().await?;
        let response = handle_response(response).await?;

        let body: serde_json::Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ClientError::malformed("missing choices[0].message.content"))?;

        Ok(content.trim().to_string())
    }
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("model", &self.model)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}
