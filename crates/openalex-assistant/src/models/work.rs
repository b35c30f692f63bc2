//! Work data model matching the OpenAlex works-search API schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Inverted-index abstract representation: word to token positions.
pub type InvertedIndex = HashMap<String, Vec<u32>>;

/// A scholarly work returned by the OpenAlex works search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// OpenAlex ID, which doubles as the work's landing URL.
    #[serde(default)]
    pub id: Option<String>,

    /// Work title.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Authorships in the order OpenAlex lists them.
    #[serde(default)]
    pub authorships: Vec<Authorship>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Work-type URI (e.g. "https://openalex.org/journal-article").
    #[serde(default)]
    pub r#type: Option<String>,

    /// Abstract as an inverted index; absent for many works.
    #[serde(default)]
    pub abstract_inverted_index: Option<InvertedIndex>,

    /// DOI URL.
    #[serde(default)]
    pub doi: Option<String>,

    /// Best-known hosting location.
    #[serde(default)]
    pub primary_location: Option<PrimaryLocation>,

    /// Number of citing works.
    #[serde(default)]
    pub cited_by_count: Option<i64>,
}

impl Work {
    /// Get the work title, falling back to "No Title" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("No Title")
    }

    /// Author display names in authorship order.
    #[must_use]
    pub fn author_list(&self) -> Vec<String> {
        self.authorships
            .iter()
            .filter_map(|a| a.author.display_name.clone())
            .collect()
    }

    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.author_list().join(", ")
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.cited_by_count.unwrap_or(0)
    }

    /// Landing-page URL of the primary location, if any.
    #[must_use]
    pub fn landing_page_url(&self) -> Option<&str> {
        self.primary_location.as_ref()?.landing_page_url.as_deref()
    }

    /// PDF URL of the primary location, if any.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.primary_location.as_ref()?.pdf_url.as_deref()
    }

    /// Best link for a reader: landing page, falling back to the OpenAlex URL.
    #[must_use]
    pub fn fulltext_url(&self) -> Option<&str> {
        self.landing_page_url().or(self.id.as_deref())
    }
}

/// One authorship entry on a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// The author behind this authorship.
    #[serde(default)]
    pub author: Author,
}

/// Author reference inside an authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    /// Author display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Hosting location of a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrimaryLocation {
    /// Landing page URL.
    #[serde(default)]
    pub landing_page_url: Option<String>,

    /// Direct PDF URL, when open access.
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// One page of works-search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorksPage {
    /// Works in this page.
    #[serde(default)]
    pub results: Vec<Work>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_deserialize_minimal() {
        let json = r#"{"id": "https://openalex.org/W1"}"#;
        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.id.as_deref(), Some("https://openalex.org/W1"));
        assert_eq!(work.title_or_default(), "No Title");
        assert!(work.authorships.is_empty());
        assert_eq!(work.citations(), 0);
    }

    #[test]
    fn test_work_deserialize_full() {
        let json = r#"{
            "id": "https://openalex.org/W2741809807",
            "display_name": "The state of OA",
            "authorships": [
                {"author": {"display_name": "Heather Piwowar"}},
                {"author": {"display_name": "Jason Priem"}}
            ],
            "publication_year": 2018,
            "publication_date": "2018-02-13",
            "type": "https://openalex.org/journal-article",
            "abstract_inverted_index": {"Despite": [0], "growing": [1]},
            "doi": "https://doi.org/10.7717/peerj.4375",
            "primary_location": {
                "landing_page_url": "https://doi.org/10.7717/peerj.4375",
                "pdf_url": "https://peerj.com/articles/4375.pdf"
            },
            "cited_by_count": 1456
        }"#;

        let work: Work = serde_json::from_str(json).unwrap();
        assert_eq!(work.title_or_default(), "The state of OA");
        assert_eq!(work.author_names(), "Heather Piwowar, Jason Priem");
        assert_eq!(work.citations(), 1456);
        assert_eq!(work.pdf_url(), Some("https://peerj.com/articles/4375.pdf"));
        assert_eq!(work.fulltext_url(), Some("https://doi.org/10.7717/peerj.4375"));
        assert_eq!(work.abstract_inverted_index.unwrap().len(), 2);
    }

    #[test]
    fn test_fulltext_url_falls_back_to_openalex_id() {
        let work = Work {
            id: Some("https://openalex.org/W1".to_string()),
            ..Default::default()
        };
        assert_eq!(work.fulltext_url(), Some("https://openalex.org/W1"));
    }

    #[test]
    fn test_works_page_defaults_to_empty() {
        let page: WorksPage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
    }
}
