//! Abstract reconstruction from inverted indexes.
//!
//! OpenAlex stores abstracts as a word-to-positions mapping instead of flat
//! text. Reconstruction must not depend on the mapping's iteration order:
//! only the numeric positions define the output order.

use crate::models::InvertedIndex;

/// Marker appended when a reconstruction was truncated.
const ELLIPSIS: &str = "...";

/// Prefix stripped from work-type URIs.
const OPENALEX_URI_PREFIX: &str = "https://openalex.org/";

/// Rebuild display text from an inverted-index abstract.
///
/// Flattens the mapping into one `(position, word)` pair per occurrence,
/// sorts ascending by position, and joins with single spaces. At most
/// `word_limit` words are kept; `"..."` is appended only when words were
/// actually dropped. An empty or absent index yields an empty string.
#[must_use]
pub fn reconstruct(index: Option<&InvertedIndex>, word_limit: usize) -> String {
    let Some(index) = index else {
        return String::new();
    };

    let mut pairs: Vec<(u32, &str)> = index
        .iter()
        .flat_map(|(word, positions)| positions.iter().map(move |&pos| (pos, word.as_str())))
        .collect();

    if pairs.is_empty() {
        return String::new();
    }

    pairs.sort_unstable();

    let truncated = pairs.len() > word_limit;
    let mut text = pairs
        .iter()
        .take(word_limit)
        .map(|&(_, word)| word)
        .collect::<Vec<_>>()
        .join(" ");

    if truncated {
        text.push_str(ELLIPSIS);
    }
    text
}

/// Turn a work-type URI into a human label.
///
/// Strips the OpenAlex URI prefix, replaces hyphens with spaces, and
/// uppercases the first letter. `None` or empty input yields `"Unknown"`.
#[must_use]
pub fn normalize_work_type(type_uri: Option<&str>) -> String {
    let Some(uri) = type_uri.filter(|s| !s.is_empty()) else {
        return "Unknown".to_string();
    };

    let label = uri.strip_prefix(OPENALEX_URI_PREFIX).unwrap_or(uri).replace('-', " ");
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Unknown".to_string(),
    }
}
