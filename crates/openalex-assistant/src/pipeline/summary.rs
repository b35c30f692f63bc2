//! Summary synthesis prompt construction.

use crate::config::limits;
use crate::models::Work;

use super::abstracts;

/// Render the numbered context block: ordinal, title, authors, abstract.
pub(crate) fn context_block(works: &[Work]) -> String {
    let mut context = String::new();
    for (idx, work) in works.iter().take(limits::SUMMARY_MAX_WORKS).enumerate() {
        let abstract_text = abstracts::reconstruct(
            work.abstract_inverted_index.as_ref(),
            limits::ABSTRACT_WORDS_SUMMARY,
        );
        context.push_str(&format!(
            "{}. Title: {}\nAuthors: {}\nAbstract: {}\n\n",
            idx + 1,
            work.title_or_default(),
            work.author_names(),
            abstract_text
        ));
    }
    context
}

/// Build the fixed five-point synthesis prompt around the context block.
pub(crate) fn synthesis_prompt(query: &str, works: &[Work]) -> String {
    let context = context_block(works);

    format!(
        r#"You are an expert academic assistant. Summarize the impact of the topic in a professional, structured way using the information provided in academic paper abstracts and metadata.

Instructions:
1. Start with a brief overview paragraph summarizing the answer.
2. Follow with 2-4 clearly titled sections that explain specific mechanisms or effects related to the topic.
3. For each section, provide concrete evidence from the abstracts, including author names and publication years in parentheses (e.g., Alshehab, 2024).
4. End with a short conclusion about the significance or implication of the findings.
5. Keep your tone academic, concise, and easy to read for a research audience.

User Research Question:
"{query}"

Relevant Papers:
{context}
Answer:"#
    )
}
