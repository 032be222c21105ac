//! # Taxon
//!
//! A lightweight naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Incremental, reversible training (train/untrain)
//! - Plain-space and log-space scoring
//! - Flexible text analysis pipeline with pluggable tokenizers and filters
//! - Explicit, configurable tie-break and unseen-term policies
//!
//! ## Quick start
//!
//! ```
//! use taxon::classification::bayes::BayesClassifier;
//!
//! let mut classifier = BayesClassifier::new(["interesting", "uninteresting"]).unwrap();
//! classifier
//!     .train("interesting", "here is some interesting text about Ruby and rails")
//!     .unwrap();
//! classifier
//!     .train("uninteresting", "here is some text about financial stuff")
//!     .unwrap();
//!
//! assert_eq!(classifier.classify("i love rails").unwrap(), "interesting");
//! ```

pub mod analysis;
pub mod classification;
pub mod document;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer, StandardAnalyzer};
    pub use crate::classification::bayes::{BayesClassifier, DEFAULT_PROB, TieBreak, TrainingSample};
    pub use crate::classification::category::{Category, UnseenTermPolicy};
    pub use crate::classification::term_counts::TermCounts;
    pub use crate::document::TokenizedDocument;
    pub use crate::error::{Result, TaxonError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
