//! Markdown output for the terminal front-end.

use crate::config::limits;
use crate::models::Work;
use crate::pipeline::{ResearchOutcome, abstracts};

/// Render a full pipeline outcome: summary first, then the work cards.
#[must_use]
pub fn format_outcome(outcome: &ResearchOutcome) -> String {
    let mut output = String::new();

    output.push_str(&format!("**Keywords**: {}\n\n", outcome.keywords));

    if outcome.works.is_empty() {
        output.push_str("No results found for the extracted keywords.\n");
        return output;
    }

    output.push_str("## Summary\n\n");
    output.push_str(&outcome.summary);
    output.push_str("\n\n---\n\n## Related Works from OpenAlex\n\n");

    for work in &outcome.works {
        output.push_str(&format_work(work));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single work as a markdown card.
#[must_use]
pub fn format_work(work: &Work) -> String {
    let mut output = String::new();

    let title = work.title_or_default();
    match work.fulltext_url() {
        Some(url) => output.push_str(&format!("### [{title}]({url})\n")),
        None => output.push_str(&format!("### {title}\n")),
    }

    output.push_str(&format!(
        "**Type**: `{}` | **Published**: {}\n",
        abstracts::normalize_work_type(work.r#type.as_deref()),
        work.publication_date.as_deref().unwrap_or("Unknown")
    ));

    let authors = work.author_names();
    output.push_str(&format!(
        "**Authors**: {}\n",
        if authors.is_empty() { "Unknown" } else { authors.as_str() }
    ));

    let abstract_text = abstracts::reconstruct(
        work.abstract_inverted_index.as_ref(),
        limits::ABSTRACT_WORDS_TERMINAL,
    );
    if !abstract_text.is_empty() {
        output.push_str(&format!("{abstract_text}\n"));
    }

    let mut links = Vec::new();
    if let Some(pdf_url) = work.pdf_url() {
        links.push(format!("[PDF Download]({pdf_url})"));
    }
    if let Some(id) = work.id.as_deref() {
        links.push(format!("[OpenAlex]({id})"));
    }
    if !links.is_empty() {
        output.push_str(&format!("{}\n", links.join(" | ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Authorship, PrimaryLocation};

    fn sample_work() -> Work {
        Work {
            id: Some("https://openalex.org/W1".to_string()),
            display_name: Some("Attention Is All You Need".to_string()),
            authorships: vec![Authorship {
                author: Author { display_name: Some("Ashish Vaswani".to_string()) },
            }],
            publication_date: Some("2017-06-12".to_string()),
            r#type: Some("https://openalex.org/journal-article".to_string()),
            primary_location: Some(PrimaryLocation {
                landing_page_url: Some("https://arxiv.org/abs/1706.03762".to_string()),
                pdf_url: Some("https://arxiv.org/pdf/1706.03762".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_work_card() {
        let card = format_work(&sample_work());
        assert!(card.contains("### [Attention Is All You Need](https://arxiv.org/abs/1706.03762)"));
        assert!(card.contains("**Type**: `Journal article` | **Published**: 2017-06-12"));
        assert!(card.contains("**Authors**: Ashish Vaswani"));
        assert!(card.contains("[PDF Download](https://arxiv.org/pdf/1706.03762)"));
        assert!(card.contains("[OpenAlex](https://openalex.org/W1)"));
    }

    #[test]
    fn test_format_work_unknown_fallbacks() {
        let card = format_work(&Work::default());
        assert!(card.contains("### No Title"));
        assert!(card.contains("**Type**: `Unknown` | **Published**: Unknown"));
        assert!(card.contains("**Authors**: Unknown"));
    }

    #[test]
    fn test_format_outcome_empty_results() {
        let outcome = ResearchOutcome {
            query: "anything at all".to_string(),
            keywords: "anything".to_string(),
            works: vec![],
            summary: crate::pipeline::NO_RESULTS_MESSAGE.to_string(),
        };
        let rendered = format_outcome(&outcome);
        assert!(rendered.contains("No results found for the extracted keywords."));
        assert!(!rendered.contains("## Summary"));
    }

    #[test]
    fn test_format_outcome_orders_summary_before_works() {
        let outcome = ResearchOutcome {
            query: "transformers in nlp".to_string(),
            keywords: "transformers, nlp".to_string(),
            works: vec![sample_work()],
            summary: "A synthesized answer.".to_string(),
        };
        let rendered = format_outcome(&outcome);
        let summary_at = rendered.find("## Summary").unwrap();
        let works_at = rendered.find("## Related Works").unwrap();
        assert!(summary_at < works_at);
    }
}
