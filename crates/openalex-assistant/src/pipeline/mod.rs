//! The four-stage research pipeline.
//!
//! Keyword extraction, corpus search, abstract reconstruction, and summary
//! synthesis composed strictly in sequence. This module is the single shared
//! implementation behind both front-ends; the HTTP and terminal adapters own
//! only request/response shaping.

pub mod abstracts;
mod keywords;
mod summary;

pub use keywords::sanitize_keywords;

use crate::client::{CompletionClient, OpenAlexClient};
use crate::config::{Config, limits};
use crate::error::{ClientResult, PipelineError, PipelineResult};
use crate::models::Work;

/// Canned summary when the search returns nothing.
pub const NO_RESULTS_MESSAGE: &str =
    "No relevant papers found for your query. Try different keywords.";

/// Canned summary when no completion credential is configured.
pub const NO_COMPLETION_MESSAGE: &str =
    "Summary unavailable: no completion API key is configured. Showing search results only.";

/// The shared research pipeline.
pub struct ResearchPipeline {
    /// Chat-completion client (keyword extraction, synthesis).
    completion: CompletionClient,

    /// OpenAlex works-search client.
    openalex: OpenAlexClient,
}

/// Result of one full pipeline run. Request-scoped; dropped after rendering.
#[derive(Debug, Clone)]
pub struct ResearchOutcome {
    /// The validated, trimmed research question.
    pub query: String,

    /// The keyword string used for the search.
    pub keywords: String,

    /// Raw works in the order OpenAlex returned them.
    pub works: Vec<Work>,

    /// Synthesized summary, or a canned message when synthesis was skipped.
    pub summary: String,
}

impl ResearchPipeline {
    /// Create a pipeline with both clients built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            completion: CompletionClient::new(config)?,
            openalex: OpenAlexClient::new(config)?,
        })
    }

    /// Check if a completion credential is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.completion.has_api_key()
    }

    /// Validate a research question before any outbound call.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or too-short query.
    pub fn validate_query(query: &str) -> PipelineResult<&str> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::validation("Query is required"));
        }
        if trimmed.len() < limits::MIN_QUERY_LEN {
            return Err(PipelineError::validation(
                "Query too short. Please provide more details.",
            ));
        }
        Ok(trimmed)
    }

    /// Distill a research question into a comma-separated keyword string.
    ///
    /// Single attempt; the sanitized first line of the reply is the result.
    ///
    /// # Errors
    ///
    /// Returns error on completion-service failure.
    pub async fn extract_keywords(&self, query: &str) -> ClientResult<String> {
        let reply = self.completion.complete(&keywords::extraction_prompt(query)).await?;
        Ok(sanitize_keywords(&reply))
    }

    /// Synthesize a structured summary over the top works.
    ///
    /// # Errors
    ///
    /// Returns error on completion-service failure.
    pub async fn synthesize(&self, query: &str, works: &[Work]) -> ClientResult<String> {
        self.completion.complete(&summary::synthesis_prompt(query, works)).await
    }

    /// Run the full pipeline for one research question.
    ///
    /// Validation happens before any outbound call. When no completion
    /// credential is configured, the sanitized raw query becomes the search
    /// string and synthesis is skipped with a canned notice, keeping
    /// search-only deployments working. A zero-hit search short-circuits
    /// before the second completion call.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, or a client error when an
    /// upstream service fails.
    pub async fn run(&self, query: &str, per_page: usize) -> PipelineResult<ResearchOutcome> {
        let query = Self::validate_query(query)?;

        let (search_terms, synthesis_available) = match self.extract_keywords(query).await {
            Ok(keywords) => (keywords, true),
            Err(err) if err.is_missing_api_key() => {
                tracing::warn!("no completion API key; searching with the raw query");
                (sanitize_keywords(query), false)
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!(keywords = %search_terms, "extracted search keywords");

        let works = self.openalex.search_works(&search_terms, per_page).await?;
        tracing::info!(count = works.len(), "corpus search complete");

        if works.is_empty() {
            return Ok(ResearchOutcome {
                query: query.to_string(),
                keywords: search_terms,
                works,
                summary: NO_RESULTS_MESSAGE.to_string(),
            });
        }

        let summary = if synthesis_available {
            self.synthesize(query, &works).await?
        } else {
            NO_COMPLETION_MESSAGE.to_string()
        };
        tracing::info!(chars = summary.len(), "summary ready");

        Ok(ResearchOutcome {
            query: query.to_string(),
            keywords: search_terms,
            works,
            summary,
        })
    }
}

impl std::fmt::Debug for ResearchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchPipeline").field("has_api_key", &self.has_api_key()).finish()
    }
}
