//! Per-category term-frequency accounting and probability model.

use serde::{Deserialize, Serialize};

use crate::classification::term_counts::TermCounts;
use crate::document::TokenizedDocument;

/// How a category scores a term it has never been trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnseenTermPolicy {
    /// Use the configured default probability directly as the likelihood.
    #[default]
    FixedProbability,
    /// Treat the default probability as a fractional pseudo-count over the
    /// category's training volume, i.e. `default_prob / total_terms`.
    ///
    /// Penalizes high-volume categories for unseen terms the same way
    /// additive smoothing does.
    PseudoCount,
}

/// A class label together with its learned term-frequency distribution.
///
/// The name is fixed at construction; the frequency table is mutated only
/// through [`train`](Category::train) and [`untrain`](Category::untrain).
/// Counts never go negative: untraining clamps at zero.
///
/// # Examples
///
/// ```
/// use taxon::analysis::analyzer::standard::StandardAnalyzer;
/// use taxon::classification::category::Category;
/// use taxon::document::TokenizedDocument;
///
/// let analyzer = StandardAnalyzer::new().unwrap();
/// let doc = TokenizedDocument::from_text("ruby on rails", &analyzer).unwrap();
///
/// let mut category = Category::new("interesting");
/// category.train(&doc);
///
/// assert_eq!(category.term_frequency("ruby"), 1);
/// // "on" is a stop word, so only "ruby" and "rails" are counted
/// assert_eq!(category.total_terms(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    name: String,
    term_frequencies: TermCounts,
}

impl Category {
    /// Create a new category with an empty term-frequency table.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Category {
            name: name.into(),
            term_frequencies: TermCounts::new(),
        }
    }

    /// The category's immutable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fold a document's term counts into this category's table.
    ///
    /// Safe to call repeatedly; counts accumulate.
    pub fn train(&mut self, doc: &TokenizedDocument) {
        for (term, count) in doc.terms() {
            self.term_frequencies.add(term, count);
        }
    }

    /// Remove a document's term counts from this category's table.
    ///
    /// Each count decreases by `min(count, current)`: never negative, and
    /// terms the category has no record of are skipped. Untraining is
    /// therefore not a perfect inverse of training once counts have been
    /// reduced by other untraining; the clamp is intentional underflow
    /// protection.
    pub fn untrain(&mut self, doc: &TokenizedDocument) {
        for (term, count) in doc.terms() {
            self.term_frequencies.subtract_clamped(term, count);
        }
    }

    /// The recorded frequency of a term; 0 for unknown terms.
    pub fn term_frequency(&self, term: &str) -> u64 {
        self.term_frequencies.get(term)
    }

    /// Total number of term occurrences trained into this category.
    pub fn total_terms(&self) -> u64 {
        self.term_frequencies.total()
    }

    /// Number of distinct terms ever trained into this category.
    pub fn unique_terms(&self) -> usize {
        self.term_frequencies.unique_terms()
    }

    /// This category's prior: its share of total training volume.
    ///
    /// `corpus_volume` is the sum of every category's [`total_terms`]
    /// (the classifier computes it and raises `UndefinedPrior` when it is
    /// zero, so this method assumes `corpus_volume > 0`).
    ///
    /// [`total_terms`]: Category::total_terms
    pub fn prior(&self, corpus_volume: u64) -> f64 {
        self.total_terms() as f64 / corpus_volume as f64
    }

    /// Natural logarithm of the prior.
    pub fn log_prior(&self, corpus_volume: u64) -> f64 {
        self.prior(corpus_volume).ln()
    }

    /// Likelihood of a single term under this category.
    ///
    /// `freq / total_terms` for trained terms; for unseen terms the result
    /// is determined by `default_prob` and `policy`.
    pub fn term_likelihood(&self, term: &str, default_prob: f64, policy: UnseenTermPolicy) -> f64 {
        self.term_likelihood_with_total(term, self.total_terms(), default_prob, policy)
    }

    fn term_likelihood_with_total(
        &self,
        term: &str,
        total: u64,
        default_prob: f64,
        policy: UnseenTermPolicy,
    ) -> f64 {
        let frequency = self.term_frequencies.get(term);
        if frequency > 0 {
            frequency as f64 / total as f64
        } else {
            match policy {
                UnseenTermPolicy::FixedProbability => default_prob,
                UnseenTermPolicy::PseudoCount => default_prob / total.max(1) as f64,
            }
        }
    }

    /// Plain-space likelihood of a whole document under this category:
    /// the product of `term_likelihood ^ count` over every term.
    ///
    /// Underflows to 0 for long documents; prefer
    /// [`log_probability_of_document`](Category::log_probability_of_document)
    /// for decision-making. Retained for API parity with small inputs.
    pub fn probability_of_document(
        &self,
        doc: &TokenizedDocument,
        default_prob: f64,
        policy: UnseenTermPolicy,
    ) -> f64 {
        let total = self.total_terms();
        doc.terms()
            .map(|(term, count)| {
                self.term_likelihood_with_total(term, total, default_prob, policy)
                    .powf(count as f64)
            })
            .product()
    }

    /// Log-space likelihood of a whole document under this category:
    /// `Σ count · ln(term_likelihood)`.
    ///
    /// Computed directly in log space, never as the log of the plain-space
    /// product, so long documents do not underflow.
    pub fn log_probability_of_document(
        &self,
        doc: &TokenizedDocument,
        default_prob: f64,
        policy: UnseenTermPolicy,
    ) -> f64 {
        let total = self.total_terms();
        doc.terms()
            .map(|(term, count)| {
                count as f64
                    * self
                        .term_likelihood_with_total(term, total, default_prob, policy)
                        .ln()
            })
            .sum()
    }
}
