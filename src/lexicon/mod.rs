//! Lexicon and affix-rule tables backing morphological analysis.
//!
//! This module loads Hunspell-style `.dic` and `.aff` sources into in-memory
//! tables: a [`Lexicon`] mapping roots to their flag sets, a [`RuleSet`]
//! mapping flags to suffix rules, and a [`RuleIndex`] keyed by literal suffix
//! text for direct lookup during decomposition.

pub mod dictionary;
pub mod index;
pub mod rules;

// Re-export commonly used types
pub use dictionary::*;
pub use index::*;
pub use rules::*;
