//! Naive Bayes classification engine.
//!
//! The [`BayesClassifier`] owns a fixed set of categories (declared at
//! construction), a corpus-wide term-frequency table, and the analyzer that
//! turns raw text into terms. Training folds a document into the corpus
//! table and the named category's table together; classification scores a
//! document against every category and picks the arg-max.
//!
//! # Examples
//!
//! ```
//! use taxon::classification::bayes::BayesClassifier;
//!
//! let mut classifier = BayesClassifier::new(["spam", "ham"]).unwrap();
//! classifier.train("spam", "buy cheap pills now").unwrap();
//! classifier.train("ham", "meeting notes attached for review").unwrap();
//!
//! assert_eq!(classifier.classify("cheap pills").unwrap(), "spam");
//! assert_eq!(classifier.count_term("pills"), 1);
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::classification::category::{Category, UnseenTermPolicy};
use crate::classification::term_counts::TermCounts;
use crate::document::TokenizedDocument;
use crate::error::{Result, TaxonError};

/// Default likelihood assigned to a term a category has never seen.
pub const DEFAULT_PROB: f64 = 0.05;

/// Which category wins when several attain the maximum score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// The first category in declaration order wins.
    First,
    /// The last category in declaration order wins.
    #[default]
    Last,
}

/// A labeled training example, loadable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Raw example text.
    pub text: String,
    /// Category label.
    pub category: String,
}

/// A naive Bayes text classifier over a fixed category set.
///
/// Categories are declared once at construction and never grow or shrink.
/// Declaration order is significant: it is the output order of
/// [`classifications`](BayesClassifier::classifications) and the order the
/// tie-break policy refers to.
pub struct BayesClassifier {
    /// Categories in declaration order.
    categories: Vec<Category>,
    /// Corpus-wide term-frequency table, the union of all training activity.
    term_frequencies: TermCounts,
    /// Analyzer that turns raw text into terms.
    analyzer: Arc<dyn Analyzer>,
    tie_break: TieBreak,
    unseen: UnseenTermPolicy,
}

impl BayesClassifier {
    /// Create a classifier over the given category names with the default
    /// [`StandardAnalyzer`].
    ///
    /// Fails with `InvalidConfiguration` if the set is empty or contains
    /// duplicates.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_analyzer(names, Arc::new(StandardAnalyzer::new()?))
    }

    /// Create a classifier with a caller-supplied analyzer.
    pub fn with_analyzer<I, S>(names: I, analyzer: Arc<dyn Analyzer>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for name in names {
            let name = name.into();
            if categories.iter().any(|c| c.name() == name) {
                return Err(TaxonError::invalid_configuration(format!(
                    "duplicate category: {name}"
                )));
            }
            categories.push(Category::new(name));
        }

        if categories.is_empty() {
            return Err(TaxonError::invalid_configuration(
                "at least one category is required",
            ));
        }

        Ok(BayesClassifier {
            categories,
            term_frequencies: TermCounts::new(),
            analyzer,
            tie_break: TieBreak::default(),
            unseen: UnseenTermPolicy::default(),
        })
    }

    /// Set the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the unseen-term policy.
    pub fn with_unseen_term_policy(mut self, policy: UnseenTermPolicy) -> Self {
        self.unseen = policy;
        self
    }

    /// The analyzer this classifier tokenizes with.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Train the named category on a piece of text.
    ///
    /// The document's counts are folded into the corpus-wide table and the
    /// category's table together; an unknown name fails before either table
    /// is touched, so a failed call leaves no partial state.
    pub fn train(&mut self, category: &str, text: &str) -> Result<()> {
        let doc = TokenizedDocument::from_text(text, self.analyzer.as_ref())?;
        let index = self.category_index(category)?;

        for (term, count) in doc.terms() {
            self.term_frequencies.add(term, count);
        }
        self.categories[index].train(&doc);

        Ok(())
    }

    /// Reverse a previous training of the named category.
    ///
    /// Counts are clamp-subtracted from the corpus-wide table and the
    /// category's table; terms that were never trained are skipped. Same
    /// atomicity as [`train`](BayesClassifier::train).
    pub fn untrain(&mut self, category: &str, text: &str) -> Result<()> {
        let doc = TokenizedDocument::from_text(text, self.analyzer.as_ref())?;
        let index = self.category_index(category)?;

        for (term, count) in doc.terms() {
            self.term_frequencies.subtract_clamped(term, count);
        }
        self.categories[index].untrain(&doc);

        Ok(())
    }

    /// Train from a batch of labeled samples.
    pub fn train_samples(&mut self, samples: &[TrainingSample]) -> Result<()> {
        for sample in samples {
            self.train(&sample.category, &sample.text)?;
        }
        Ok(())
    }

    /// Load training samples from a JSON file: an array of
    /// `{"text": ..., "category": ...}` objects.
    pub fn load_training_samples<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
        let content = std::fs::read_to_string(path)?;
        let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
        Ok(samples)
    }

    /// Plain-space scores for every category with the default unseen-term
    /// probability, in declaration order.
    pub fn classifications(&self, text: &str) -> Result<Vec<(f64, &str)>> {
        self.classifications_with_prob(text, DEFAULT_PROB)
    }

    /// Plain-space scores for every category: `prior × likelihood`.
    ///
    /// Subject to underflow for long documents; prefer the log-space
    /// variant for decision-making.
    pub fn classifications_with_prob(
        &self,
        text: &str,
        default_prob: f64,
    ) -> Result<Vec<(f64, &str)>> {
        let doc = TokenizedDocument::from_text(text, self.analyzer.as_ref())?;
        let volume = self.training_volume()?;

        Ok(self
            .categories
            .iter()
            .map(|category| {
                let score = category.prior(volume)
                    * category.probability_of_document(&doc, default_prob, self.unseen);
                (score, category.name())
            })
            .collect())
    }

    /// Log-space scores for every category with the default unseen-term
    /// probability, in declaration order.
    pub fn log_classifications(&self, text: &str) -> Result<Vec<(f64, &str)>> {
        self.log_classifications_with_prob(text, DEFAULT_PROB)
    }

    /// Log-space scores for every category: `ln(prior) + Σ count·ln(likelihood)`.
    pub fn log_classifications_with_prob(
        &self,
        text: &str,
        default_prob: f64,
    ) -> Result<Vec<(f64, &str)>> {
        let doc = TokenizedDocument::from_text(text, self.analyzer.as_ref())?;
        let volume = self.training_volume()?;

        Ok(self
            .categories
            .iter()
            .map(|category| {
                let score = category.log_prior(volume)
                    + category.log_probability_of_document(&doc, default_prob, self.unseen);
                (score, category.name())
            })
            .collect())
    }

    /// Classify text, returning the winning category name.
    ///
    /// Decides on the log-space scores: folds from `(-∞, none)`, replacing
    /// the running best whenever it is not strictly greater than the
    /// candidate. Under the default [`TieBreak::Last`] the winner is the
    /// last category in declaration order attaining the maximum score;
    /// [`TieBreak::First`] flips the comparison.
    ///
    /// Fails with `UndefinedPrior` if no category has ever been trained.
    pub fn classify(&self, text: &str) -> Result<&str> {
        let scored = self.log_classifications(text)?;

        let mut best: (f64, Option<&str>) = (f64::NEG_INFINITY, None);
        for (score, name) in scored {
            let replace = best.1.is_none()
                || match self.tie_break {
                    TieBreak::Last => best.0 <= score,
                    TieBreak::First => best.0 < score,
                };
            if replace {
                best = (score, Some(name));
            }
        }

        best.1.ok_or(TaxonError::UndefinedPrior)
    }

    /// The named category's prior: its share of total training volume.
    pub fn prior(&self, category: &str) -> Result<f64> {
        let volume = self.training_volume()?;
        Ok(self.category(category)?.prior(volume))
    }

    /// Natural logarithm of the named category's prior.
    pub fn log_prior(&self, category: &str) -> Result<f64> {
        let volume = self.training_volume()?;
        Ok(self.category(category)?.log_prior(volume))
    }

    /// Corpus-wide count for a term; 0 for terms never trained.
    pub fn count_term(&self, term: &str) -> u64 {
        self.term_frequencies.get(term)
    }

    /// Sum of all counts in the corpus-wide table.
    pub fn count_terms(&self) -> u64 {
        self.term_frequencies.total()
    }

    /// Number of distinct terms ever observed corpus-wide, including terms
    /// whose count untraining has clamped down to 0.
    pub fn count_unique_terms(&self) -> usize {
        self.term_frequencies.unique_terms()
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|category| category.name() == name)
            .ok_or_else(|| TaxonError::unknown_category(name))
    }

    /// Iterate over the categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Category names in declaration order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name()).collect()
    }

    /// Total training volume across all categories; the prior denominator.
    fn training_volume(&self) -> Result<u64> {
        let volume: u64 = self.categories.iter().map(|c| c.total_terms()).sum();
        if volume == 0 {
            return Err(TaxonError::UndefinedPrior);
        }
        Ok(volume)
    }

    fn category_index(&self, name: &str) -> Result<usize> {
        self.categories
            .iter()
            .position(|category| category.name() == name)
            .ok_or_else(|| TaxonError::unknown_category(name))
    }
}

impl std::fmt::Debug for BayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesClassifier")
            .field("categories", &self.category_names())
            .field("unique_terms", &self.count_unique_terms())
            .field("analyzer", &self.analyzer.name())
            .field("tie_break", &self.tie_break)
            .field("unseen", &self.unseen)
            .finish()
    }
}
