//! Naive Bayes classification for taxon.
//!
//! This module contains the classification core: the term-count table
//! abstraction, per-category frequency accounting, and the Bayes engine
//! that turns per-category scores into a single label.

pub mod bayes;
pub mod category;
pub mod term_counts;

// Re-export commonly used types
pub use bayes::{BayesClassifier, DEFAULT_PROB, TieBreak, TrainingSample};
pub use category::{Category, UnseenTermPolicy};
pub use term_counts::TermCounts;
