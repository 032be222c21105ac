//! Tokenized document representation.
//!
//! A [`TokenizedDocument`] is the bridge between the analysis pipeline and
//! the classification core: raw text goes through an analyzer once, and the
//! resulting tokens are folded into a term-count table. Documents are
//! transient; train, untrain, and classify each build a fresh one.

use crate::analysis::analyzer::Analyzer;
use crate::classification::term_counts::TermCounts;
use crate::error::Result;

/// A multiset of normalized terms extracted from a piece of text.
///
/// Same raw text and same analyzer configuration always produce the same
/// term-count table. Empty text produces an empty table. Tokens the
/// analyzer marked as stopped are skipped.
///
/// # Examples
///
/// ```
/// use taxon::analysis::analyzer::standard::StandardAnalyzer;
/// use taxon::document::TokenizedDocument;
///
/// let analyzer = StandardAnalyzer::new().unwrap();
/// let doc = TokenizedDocument::from_text("good movie good plot", &analyzer).unwrap();
///
/// assert_eq!(doc.count("good"), 2);
/// assert_eq!(doc.count("plot"), 1);
/// assert_eq!(doc.count("never_seen"), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenizedDocument {
    counts: TermCounts,
}

impl TokenizedDocument {
    /// Build a document by running the analyzer over the given text.
    pub fn from_text(text: &str, analyzer: &dyn Analyzer) -> Result<Self> {
        let mut counts = TermCounts::new();
        for token in analyzer.analyze(text)? {
            if token.is_stopped() {
                continue;
            }
            counts.add(&token.text, 1);
        }

        Ok(TokenizedDocument { counts })
    }

    /// Get the count recorded for a term; 0 for terms not in the document.
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term)
    }

    /// Iterate over every (term, count) pair exactly once.
    pub fn terms(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter()
    }

    /// Number of distinct terms in the document.
    pub fn unique_terms(&self) -> usize {
        self.counts.unique_terms()
    }

    /// Total number of term occurrences in the document.
    pub fn total_terms(&self) -> u64 {
        self.counts.total()
    }

    /// Check whether the document contains no terms.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::standard::StandardAnalyzer;

    #[test]
    fn test_document_from_text() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let doc = TokenizedDocument::from_text("Ruby ruby RAILS", &analyzer).unwrap();

        // Lowercasing happens before counting
        assert_eq!(doc.count("ruby"), 2);
        assert_eq!(doc.count("rails"), 1);
        assert_eq!(doc.unique_terms(), 2);
        assert_eq!(doc.total_terms(), 3);
    }

    #[test]
    fn test_empty_text_gives_empty_document() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let doc = TokenizedDocument::from_text("", &analyzer).unwrap();

        assert!(doc.is_empty());
        assert_eq!(doc.total_terms(), 0);
        assert_eq!(doc.terms().count(), 0);
    }

    #[test]
    fn test_stop_words_do_not_reach_counts() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let doc = TokenizedDocument::from_text("the cat and the hat", &analyzer).unwrap();

        assert_eq!(doc.count("the"), 0);
        assert_eq!(doc.count("cat"), 1);
        assert_eq!(doc.count("hat"), 1);
    }

    #[test]
    fn test_unknown_term_is_zero_not_error() {
        let analyzer = StandardAnalyzer::new().unwrap();
        let doc = TokenizedDocument::from_text("something", &analyzer).unwrap();

        assert_eq!(doc.count("absent"), 0);
    }
}
