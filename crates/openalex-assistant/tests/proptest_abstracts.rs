//! Property-based tests for abstract reconstruction.

use proptest::prelude::*;

use openalex_assistant::models::InvertedIndex;
use openalex_assistant::pipeline::abstracts::reconstruct;

/// Build an inverted index from a token list, the way OpenAlex would.
fn invert(tokens: &[String]) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for (pos, token) in tokens.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        index.entry(token.clone()).or_default().push(pos as u32);
    }
    index
}

proptest! {
    /// Reconstruction with an unbounded limit recovers the original text.
    #[test]
    fn reconstruct_round_trips(tokens in proptest::collection::vec("[a-z]{1,10}", 1..60)) {
        let index = invert(&tokens);
        prop_assert_eq!(reconstruct(Some(&index), usize::MAX), tokens.join(" "));
    }

    /// The limit bounds the word count; the ellipsis appears exactly when
    /// words were dropped.
    #[test]
    fn reconstruct_respects_word_limit(
        tokens in proptest::collection::vec("[a-z]{1,10}", 1..60),
        limit in 1usize..80,
    ) {
        let index = invert(&tokens);
        let text = reconstruct(Some(&index), limit);

        let truncated = tokens.len() > limit;
        prop_assert_eq!(text.ends_with("..."), truncated);

        let words = text.trim_end_matches("...").split_whitespace().count();
        prop_assert_eq!(words, tokens.len().min(limit));
    }

    /// Pure function: repeated calls agree.
    #[test]
    fn reconstruct_is_idempotent(tokens in proptest::collection::vec("[a-z]{1,10}", 0..40)) {
        let index = invert(&tokens);
        prop_assert_eq!(reconstruct(Some(&index), 60), reconstruct(Some(&index), 60));
    }
}
