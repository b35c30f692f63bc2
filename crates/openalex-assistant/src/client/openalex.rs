//! OpenAlex works-search client.

use reqwest::Client;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{Work, WorksPage};

use super::handle_response;

/// Client for the OpenAlex works API.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client with timeouts configured.
    client: Client,

    /// OpenAlex API base URL.
    base_url: String,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// The user agent carries an optional `mailto:` contact, which routes
    /// requests through the OpenAlex polite pool.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let user_agent = match config.mailto {
            Some(ref email) => {
                format!("openalex-assistant/{} (mailto:{email})", env!("CARGO_PKG_VERSION"))
            }
            None => format!("openalex-assistant/{}", env!("CARGO_PKG_VERSION")),
        };

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.openalex_api_url.clone() })
    }

    /// Run one free-text works search and return the raw results page.
    ///
    /// A single GET with `search` and `per-page` parameters; no multi-page
    /// aggregation. An empty `results` array is a legitimate zero-hit
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn search_works(&self, search: &str, per_page: usize) -> ClientResult<Vec<Work>> {
        let url = format!("{}/works", self.base_url);
        let params = [("search", search.to_string()), ("per-page", per_page.to_string())];

        let response = self.client.get(&url).query(&params).send().await?;
        let response = handle_response(response).await?;

        let value: serde_json::Value = response.json().await?;
        let page: WorksPage = serde_json::from_value(value).map_err(ClientError::from)?;

        Ok(page.results)
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient").field("base_url", &self.base_url).finish()
    }
}
