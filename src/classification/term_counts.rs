//! Term-count table abstraction.
//!
//! Every frequency table in the classifier, per-category and corpus-wide,
//! goes through this type instead of a bare hash map, so the "absent key
//! means zero" rule is an explicit accessor rather than an ambient default
//! value mechanism.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A mapping from term to a non-negative occurrence count.
///
/// Lookups of unknown terms return 0 and never fail. Keys are never
/// deleted: subtracting clamps a count at 0 but keeps the key, so the set
/// of distinct terms ever observed is preserved.
///
/// # Examples
///
/// ```
/// use taxon::classification::term_counts::TermCounts;
///
/// let mut counts = TermCounts::new();
/// counts.add("ruby", 2);
/// counts.subtract_clamped("ruby", 5);
///
/// assert_eq!(counts.get("ruby"), 0);
/// assert_eq!(counts.unique_terms(), 1); // the key survives at zero
/// assert_eq!(counts.get("never_added"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermCounts {
    counts: AHashMap<String, u64>,
}

impl TermCounts {
    /// Create an empty table.
    pub fn new() -> Self {
        TermCounts {
            counts: AHashMap::new(),
        }
    }

    /// Get the count for a term, or 0 if the term was never observed.
    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Increase the count for a term.
    pub fn add(&mut self, term: &str, count: u64) {
        *self.counts.entry(term.to_string()).or_insert(0) += count;
    }

    /// Decrease the count for a term by `min(count, current)`.
    ///
    /// Never goes negative. A term absent from the table is left absent
    /// (the subtraction is a no-op, not an error).
    pub fn subtract_clamped(&mut self, term: &str, count: u64) {
        if let Some(current) = self.counts.get_mut(term) {
            *current -= count.min(*current);
        }
    }

    /// Sum of all counts in the table.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct terms ever observed, including terms whose count
    /// has been clamped down to 0.
    pub fn unique_terms(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over every (term, count) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Check whether the table has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
