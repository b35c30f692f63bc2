//! Configuration for the research assistant.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenRouter-compatible chat-completion API.
    pub const COMPLETION_API: &str = "https://openrouter.ai/api/v1";

    /// Base URL for the OpenAlex works API.
    pub const OPENALEX_API: &str = "https://api.openalex.org";

    /// Default completion model.
    pub const DEFAULT_MODEL: &str = "meta-llama/llama-3-8b-instruct";

    /// Request timeout. A stalled upstream call becomes a reported failure
    /// instead of hanging the whole request.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Pipeline limits shared by the adapters.
pub mod limits {
    /// Minimum accepted query length (trimmed).
    pub const MIN_QUERY_LEN: usize = 5;

    /// Works fetched per query by the HTTP API.
    pub const PER_PAGE_API: usize = 10;

    /// Works fetched per query by the terminal front-end.
    pub const PER_PAGE_TERMINAL: usize = 5;

    /// Works included in the synthesis context.
    pub const SUMMARY_MAX_WORKS: usize = 5;

    /// Abstract word limit inside the synthesis context.
    pub const ABSTRACT_WORDS_SUMMARY: usize = 80;

    /// Abstract word limit in HTTP API responses.
    pub const ABSTRACT_WORDS_API: usize = 100;

    /// Abstract word limit in terminal output.
    pub const ABSTRACT_WORDS_TERMINAL: usize = 60;
}

/// Service configuration.
///
/// Threaded into both clients at construction time; there is no ambient
/// global credential state.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key (optional; completion calls fail typed without it).
    pub api_key: Option<String>,

    /// Completion model identifier.
    pub model: String,

    /// Base URL for the completion API (for testing with mock servers).
    pub completion_api_url: String,

    /// Base URL for the OpenAlex API (for testing with mock servers).
    pub openalex_api_url: String,

    /// Contact address for the OpenAlex polite pool.
    pub mailto: Option<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>, mailto: Option<String>) -> Self {
        Self {
            api_key,
            model: api::DEFAULT_MODEL.to_string(),
            completion_api_url: api::COMPLETION_API.to_string(),
            openalex_api_url: api::OPENALEX_API.to_string(),
            mailto,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing both services at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            model: api::DEFAULT_MODEL.to_string(),
            completion_api_url: format!("{base_url}/api/v1"),
            openalex_api_url: base_url.to_string(),
            mailto: None,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `OPENROUTER_API_KEY` supplies the completion credential; its absence
    /// is not an error so the service stays usable for search-only use.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY").ok();
        let mailto = std::env::var("OPENALEX_MAILTO").ok();
        Ok(Self::new(api_key, mailto))
    }

    /// Check if a completion API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Override the completion model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
