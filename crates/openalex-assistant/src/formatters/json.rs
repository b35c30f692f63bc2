//! JSON projections for the HTTP API.

use serde::Serialize;

use crate::models::Work;
use crate::pipeline::abstracts;

/// One work shaped for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct WorkView {
    /// Work title, defaulted when absent.
    pub title: String,

    /// Author display names in authorship order.
    pub authors: Vec<String>,

    /// Publication year.
    pub publication_year: Option<i32>,

    /// Publication date (YYYY-MM-DD).
    pub publication_date: Option<String>,

    /// Human-readable work type.
    pub r#type: String,

    /// Reconstructed, word-limited abstract.
    pub r#abstract: String,

    /// DOI URL.
    pub doi: Option<String>,

    /// Landing-page URL.
    pub url: Option<String>,

    /// Open-access PDF URL.
    pub pdf_url: Option<String>,

    /// Citation count, defaulted to 0.
    pub citation_count: i64,
}

/// Project a raw work into its API shape.
#[must_use]
pub fn work_view(work: &Work, word_limit: usize) -> WorkView {
    WorkView {
        title: work.title_or_default().to_string(),
        authors: work.author_list(),
        publication_year: work.publication_year,
        publication_date: work.publication_date.clone(),
        r#type: abstracts::normalize_work_type(work.r#type.as_deref()),
        r#abstract: abstracts::reconstruct(work.abstract_inverted_index.as_ref(), word_limit),
        doi: work.doi.clone(),
        url: work.landing_page_url().map(str::to_string),
        pdf_url: work.pdf_url().map(str::to_string),
        citation_count: work.citations(),
    }
}
