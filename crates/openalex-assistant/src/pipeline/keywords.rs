//! Keyword extraction from a research question.

use std::sync::LazyLock;

use regex::Regex;

/// Fixed instruction sent ahead of the user's question.
const INSTRUCTION: &str = "Extract 2-5 academic search keywords from this research question. \
                           Respond ONLY with a comma-separated list:";

/// Everything that may not appear in a keyword string.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9,\- ]+").expect("valid keyword regex"));

/// Build the single-turn extraction prompt.
pub(crate) fn extraction_prompt(query: &str) -> String {
    format!("{INSTRUCTION}\n\n{query}")
}

/// Reduce a raw completion reply to a clean keyword string.
///
/// Only the first line is kept (the model may ignore "ONLY" and append
/// explanation); every character outside alphanumerics, comma, hyphen, and
/// space is stripped, then surrounding whitespace is trimmed. The result may
/// legitimately be empty.
#[must_use]
pub fn sanitize_keywords(raw: &str) -> String {
    let first_line = raw.lines().next().unwrap_or("");
    DISALLOWED.replace_all(first_line, "").trim().to_string()
}
