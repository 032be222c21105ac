//! Analyzer implementations that combine tokenizers and filters.
//!
//! An [`Analyzer`] is the complete text processing pipeline the classifier
//! consumes: raw text goes in, a stream of normalized tokens comes out.
//! The classification core treats the analyzer as an opaque collaborator,
//! so any implementation of the trait (including a fake deterministic one
//! in tests) can stand in.
//!
//! # Available Implementations
//!
//! - [`standard::StandardAnalyzer`] - Good defaults: regex tokenizer,
//!   lowercasing, English stop words
//! - [`english::EnglishAnalyzer`] - Standard pipeline plus suffix stemming
//! - [`pipeline::PipelineAnalyzer`] - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use taxon::analysis::analyzer::Analyzer;
//! use taxon::analysis::token::TokenStream;
//! use taxon::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         // Custom analysis logic here
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// thread boundaries; the classifier stores one behind an `Arc`.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// Must be deterministic: the same text and the same configuration
    /// produce the same token stream. Empty text produces an empty stream.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual analyzer modules
pub mod english;
pub mod pipeline;
pub mod standard;

// Re-export all analyzers for convenient access
pub use english::EnglishAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
