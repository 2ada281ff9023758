//! Morphological analysis of inflected word forms.
//!
//! The pipeline runs in three stages: the [`SuffixDecomposer`] recursively
//! partitions a suffix string into known sub-suffixes, the
//! [`CandidateScorer`] ranks competing partitions, and the [`MorphAnalyzer`]
//! drives both over the lexicon to produce per-word analysis records.

pub mod analyzer;
pub mod decompose;
pub mod score;

// Re-export commonly used types
pub use analyzer::*;
pub use decompose::*;
pub use score::*;
