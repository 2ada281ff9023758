//! # Turkmorph
//!
//! Morphological analysis of Turkish word forms over Hunspell-style
//! dictionaries.
//!
//! Given a `.dic` word list and a `.aff` suffix-rule file, the analyzer
//! decomposes an inflected word into a dictionary root plus an ordered chain
//! of suffixes, and scores competing decompositions against the rule table.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Hunspell-style dictionary and suffix-rule loading
//! - Recursive suffix-chain decomposition with per-rule conditions
//! - Candidate scoring with granularity tie-breaking
//! - Read-only tables after construction, safe for parallel analysis
//!
//! ## Example
//!
//! ```
//! use turkmorph::lexicon::{Lexicon, RuleSet};
//! use turkmorph::morphology::MorphAnalyzer;
//!
//! let lexicon = Lexicon::parse_str("1\ngör/F1\n");
//! let rules = RuleSet::parse_str("SFX F1 0 dim .\n");
//! let analyzer = MorphAnalyzer::from_parts(lexicon, rules, false);
//!
//! let analyses = analyzer.analyze("gördim");
//! assert_eq!(analyses.len(), 1);
//! ```

pub mod error;
pub mod lexicon;
pub mod morphology;

pub mod prelude {
    pub use crate::error::{Result, TurkmorphError};
    pub use crate::lexicon::{AffixRule, Condition, Lexicon, RuleIndex, RuleSet};
    pub use crate::morphology::{Analysis, AnalysisRecord, AnalyzerConfig, MorphAnalyzer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
