//! Morphological analyzer tying lexicon lookup, suffix decomposition and
//! candidate scoring together.

use std::fmt;
use std::path::PathBuf;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::dictionary::Lexicon;
use crate::lexicon::index::RuleIndex;
use crate::lexicon::rules::RuleSet;
use crate::morphology::decompose::SuffixDecomposer;
use crate::morphology::score::CandidateScorer;

/// Configuration for the morphological analyzer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Path to the `.dic` dictionary file.
    pub dictionary_path: PathBuf,
    /// Path to the `.aff` suffix-rule file.
    pub affix_path: PathBuf,
    /// Emit only the scorer's top-scoring decompositions instead of every
    /// decomposition candidate.
    pub best_only: bool,
}

impl AnalyzerConfig {
    /// Create a configuration from the two dictionary source paths.
    pub fn new<P: Into<PathBuf>>(dictionary_path: P, affix_path: P) -> Self {
        AnalyzerConfig {
            dictionary_path: dictionary_path.into(),
            affix_path: affix_path.into(),
            best_only: false,
        }
    }

    /// Restrict emission to the scorer's top-scoring decompositions.
    pub fn best_only(mut self, best_only: bool) -> Self {
        self.best_only = best_only;
        self
    }
}

/// One accepted decomposition of a word into a root and a suffix chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// The dictionary root the word was derived from.
    pub root: String,
    /// The full suffix text matched between the root and the word.
    pub stem: String,
    /// One decomposition of `stem`; concatenated in order it equals `stem`.
    pub suffixes: Vec<String>,
    /// The affix flag whose rule produced the match.
    pub flag: String,
}

/// One analysis output entry: a successful record, or a per-word diagnostic
/// for a word no root/rule combination could explain.
///
/// The diagnostic carries the offending word as data and renders its message
/// only at the display boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Analysis {
    /// A valid root-plus-suffix-chain decomposition.
    Match(AnalysisRecord),
    /// No analysis was found for this word.
    NoMatch {
        /// The word that could not be analyzed.
        word: String,
    },
}

impl Analysis {
    /// The record, when this entry is a match.
    pub fn record(&self) -> Option<&AnalysisRecord> {
        match self {
            Analysis::Match(record) => Some(record),
            Analysis::NoMatch { .. } => None,
        }
    }

    /// True when this entry is a successful analysis.
    pub fn is_match(&self) -> bool {
        matches!(self, Analysis::Match(_))
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Match(record) => write!(
                f,
                "{} + {} ({})",
                record.root,
                record.suffixes.join("-"),
                record.flag
            ),
            Analysis::NoMatch { word } => {
                write!(f, "No analysis found for '{word}'")
            }
        }
    }
}

/// Morphological analyzer over a lexicon and a suffix-rule table.
///
/// Both tables are built once at construction and read-only afterwards, so
/// one analyzer may serve any number of concurrent `analyze` calls.
pub struct MorphAnalyzer {
    lexicon: Lexicon,
    rules: RuleSet,
    index: RuleIndex,
    scorer: CandidateScorer,
    best_only: bool,
    load_diagnostics: Vec<String>,
}

impl MorphAnalyzer {
    /// Create an analyzer from the configured file paths, best-effort.
    ///
    /// An unreadable source degrades to an empty table and is recorded as a
    /// load diagnostic rather than failing construction; the analyzer still
    /// runs, returning only per-word diagnostics. Use [`MorphAnalyzer::strict`]
    /// to fail on I/O errors instead.
    pub fn new(config: &AnalyzerConfig) -> Self {
        let mut load_diagnostics = Vec::new();

        let lexicon = match Lexicon::load_from_file(&config.dictionary_path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                load_diagnostics.push(format!(
                    "dictionary '{}' unavailable: {e}",
                    config.dictionary_path.display()
                ));
                Lexicon::new()
            }
        };

        let rules = match RuleSet::load_from_file(&config.affix_path) {
            Ok(rules) => rules,
            Err(e) => {
                load_diagnostics.push(format!(
                    "affix rules '{}' unavailable: {e}",
                    config.affix_path.display()
                ));
                RuleSet::new()
            }
        };

        Self::assemble(lexicon, rules, config.best_only, load_diagnostics)
    }

    /// Create an analyzer from the configured file paths, propagating I/O
    /// failures.
    ///
    /// An empty-but-readable source is valid data, not a failure.
    pub fn strict(config: &AnalyzerConfig) -> Result<Self> {
        let lexicon = Lexicon::load_from_file(&config.dictionary_path)?;
        let rules = RuleSet::load_from_file(&config.affix_path)?;
        Ok(Self::assemble(lexicon, rules, config.best_only, Vec::new()))
    }

    /// Create an analyzer from already-built tables.
    pub fn from_parts(lexicon: Lexicon, rules: RuleSet, best_only: bool) -> Self {
        Self::assemble(lexicon, rules, best_only, Vec::new())
    }

    fn assemble(
        lexicon: Lexicon,
        rules: RuleSet,
        best_only: bool,
        load_diagnostics: Vec<String>,
    ) -> Self {
        let index = RuleIndex::build(&rules);
        let scorer = CandidateScorer::from_rules(&rules);
        MorphAnalyzer {
            lexicon,
            rules,
            index,
            scorer,
            best_only,
            load_diagnostics,
        }
    }

    /// The loaded lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The loaded rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Diagnostics collected while loading the dictionary sources, if any.
    pub fn load_diagnostics(&self) -> &[String] {
        &self.load_diagnostics
    }

    /// Analyze a string of space-separated words.
    ///
    /// Every token is lower-cased (a plain case fold; no locale-aware
    /// dotted/dotless-I handling). The result is a flat sequence, one group
    /// of entries per input word in input order: each word contributes
    /// either its analysis records or a single no-match diagnostic. Never
    /// fails and never panics, whatever the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use turkmorph::lexicon::{Lexicon, RuleSet};
    /// use turkmorph::morphology::MorphAnalyzer;
    ///
    /// let lexicon = Lexicon::parse_str("1\ngör/F1\n");
    /// let rules = RuleSet::parse_str("SFX F1 0 dim .\n");
    /// let analyzer = MorphAnalyzer::from_parts(lexicon, rules, false);
    ///
    /// let analyses = analyzer.analyze("gördim");
    /// let record = analyses[0].record().unwrap();
    /// assert_eq!(record.root, "gör");
    /// assert_eq!(record.stem, "dim");
    /// ```
    pub fn analyze(&self, text: &str) -> Vec<Analysis> {
        text.split(' ')
            .flat_map(|word| self.analyze_word(&word.to_lowercase()))
            .collect()
    }

    /// Analyze a string of space-separated words across rayon worker threads.
    ///
    /// Same contract and output order as [`MorphAnalyzer::analyze`]; the
    /// shared tables are read-only, so words are processed in parallel with
    /// no locking.
    pub fn analyze_parallel(&self, text: &str) -> Vec<Analysis> {
        let words: Vec<String> = text.split(' ').map(|word| word.to_lowercase()).collect();
        words
            .par_iter()
            .map(|word| self.analyze_word(word))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Analyze a single lower-cased word.
    fn analyze_word(&self, word: &str) -> Vec<Analysis> {
        let decomposer = SuffixDecomposer::new(&self.index);
        let mut analyses = Vec::new();

        for (root, entry) in self.lexicon.iter() {
            // Only roots that are proper prefixes of the word can match.
            if root.len() >= word.len() || !word.starts_with(root.as_str()) {
                continue;
            }

            for flag in &entry.flags {
                // A flag with no rules is silently ignored.
                let Some(rules) = self.rules.get(flag) else {
                    continue;
                };

                for rule in rules {
                    if !rule.cond.accepts(root) {
                        continue;
                    }

                    let stripped = rule.strip_root(root);
                    let expected = format!("{stripped}{}", rule.add);
                    if expected != word {
                        continue;
                    }

                    let candidates = decomposer.decompose(&stripped, &rule.add);
                    let emitted = if self.best_only {
                        self.scorer.select_best(&candidates)
                    } else {
                        candidates
                    };

                    for suffixes in emitted {
                        analyses.push(Analysis::Match(AnalysisRecord {
                            root: root.clone(),
                            stem: rule.add.clone(),
                            suffixes,
                            flag: flag.clone(),
                        }));
                    }
                }
            }
        }

        if analyses.is_empty() {
            analyses.push(Analysis::NoMatch {
                word: word.to_string(),
            });
        }
        analyses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(dic: &str, aff: &str) -> MorphAnalyzer {
        MorphAnalyzer::from_parts(Lexicon::parse_str(dic), RuleSet::parse_str(aff), false)
    }

    #[test]
    fn test_single_rule_match() {
        let analyzer = analyzer("1\ngör/F1\n", "SFX F1 0 dim .\n");
        let analyses = analyzer.analyze("gördim");

        assert_eq!(analyses.len(), 1);
        let record = analyses[0].record().unwrap();
        assert_eq!(record.root, "gör");
        assert_eq!(record.stem, "dim");
        assert_eq!(record.suffixes, vec!["dim".to_string()]);
        assert_eq!(record.flag, "F1");
    }

    #[test]
    fn test_input_is_lowercased() {
        let analyzer = analyzer("1\ngör/F1\n", "SFX F1 0 dim .\n");
        assert!(analyzer.analyze("GÖRDIM")[0].is_match());
    }

    #[test]
    fn test_no_match_diagnostic() {
        let analyzer = analyzer("1\ngör/F1\n", "SFX F1 0 dim .\n");
        let analyses = analyzer.analyze("zzz");

        assert_eq!(analyses.len(), 1);
        assert!(!analyses[0].is_match());
        assert_eq!(analyses[0].to_string(), "No analysis found for 'zzz'");
    }

    #[test]
    fn test_diagnostics_are_per_word_in_input_order() {
        let analyzer = analyzer("1\ngör/F1\n", "SFX F1 0 dim .\n");
        let analyses = analyzer.analyze("zzz gördim qqq");

        assert_eq!(analyses.len(), 3);
        assert_eq!(analyses[0].to_string(), "No analysis found for 'zzz'");
        assert!(analyses[1].is_match());
        assert_eq!(analyses[2].to_string(), "No analysis found for 'qqq'");
    }

    #[test]
    fn test_word_equal_to_root_does_not_match() {
        // Roots must be strictly shorter than the word.
        let analyzer = analyzer("1\ngör/F1\n", "SFX F1 0 dim .\n");
        assert!(!analyzer.analyze("gör")[0].is_match());
    }

    #[test]
    fn test_flag_without_rules_is_ignored() {
        let analyzer = analyzer("1\ngör/F1,F9\n", "SFX F1 0 dim .\n");
        let analyses = analyzer.analyze("gördim");
        assert_eq!(analyses.len(), 1);
    }

    #[test]
    fn test_rule_condition_gates_on_root() {
        // "lar" requires a root starting with "kitap"; "gör" cannot take it.
        let analyzer = analyzer(
            "2\nkitap/F1\ngör/F1\n",
            "SFX F1 0 lar kitap\n",
        );
        assert!(analyzer.analyze("kitaplar")[0].is_match());
        assert!(!analyzer.analyze("görlar")[0].is_match());
    }

    #[test]
    fn test_strip_rule_match() {
        // Strip "k" matches the start of "kitap" and removes its final char;
        // the add text then restores the "p" so the word still carries the
        // full root as a prefix.
        let analyzer = analyzer("1\nkitap/F3\n", "SFX F3 k pler .\n");
        let analyses = analyzer.analyze("kitapler");

        let record = analyses[0].record().unwrap();
        assert_eq!(record.root, "kitap");
        assert_eq!(record.stem, "pler");
        assert_eq!(record.suffixes, vec!["pler".to_string()]);
    }

    #[test]
    fn test_empty_add_rule_cannot_match() {
        // An empty add can only produce words no longer than the root, and
        // roots must be strictly shorter than the word, so nothing matches.
        let analyzer = analyzer("1\nkitap/F1\n", "SFX F1 k 0 .\n");
        assert!(!analyzer.analyze("kita")[0].is_match());
        assert!(!analyzer.analyze("kitap")[0].is_match());
    }

    #[test]
    fn test_all_candidates_emitted_by_default() {
        let aff = "SFX 19944 0 emedim .\nSFX A1 0 e .\nSFX A2 0 me .\nSFX A3 0 di .\nSFX A4 0 m .\n";
        let analyzer = analyzer("1\ngör/19944\n", aff);
        let analyses = analyzer.analyze("göremedim");

        // Every decomposition candidate is emitted, not only the winners.
        assert_eq!(analyses.len(), 3);
        for analysis in &analyses {
            let record = analysis.record().unwrap();
            assert_eq!(record.root, "gör");
            assert_eq!(record.stem, "emedim");
            assert_eq!(record.flag, "19944");
            assert_eq!(record.suffixes.concat(), record.stem);
        }
    }

    #[test]
    fn test_best_only_emits_top_scorers() {
        let aff = "SFX 19944 0 emedim .\nSFX A1 0 e .\nSFX A2 0 me .\nSFX A3 0 di .\nSFX A4 0 m .\n";
        let analyzer = MorphAnalyzer::from_parts(
            Lexicon::parse_str("1\ngör/19944\n"),
            RuleSet::parse_str(aff),
            true,
        );
        let analyses = analyzer.analyze("göremedim");

        // The finest fully-known split wins on the granularity bonus.
        assert_eq!(analyses.len(), 1);
        let record = analyses[0].record().unwrap();
        assert_eq!(record.suffixes, vec!["e", "m", "e", "di", "m"]);
    }

    #[test]
    fn test_empty_tables_always_diagnose() {
        let analyzer = MorphAnalyzer::from_parts(Lexicon::new(), RuleSet::new(), false);
        let analyses = analyzer.analyze("gördim");
        assert_eq!(analyses.len(), 1);
        assert!(!analyses[0].is_match());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let analyzer = analyzer("2\ngör/F1\nev/F2\n", "SFX F1 0 dim .\nSFX F2 0 ler .\n");
        let text = "gördim evler zzz gördim";
        assert_eq!(analyzer.analyze(text), analyzer.analyze_parallel(text));
    }

    #[test]
    fn test_display_formats() {
        let record = AnalysisRecord {
            root: "gör".to_string(),
            stem: "dim".to_string(),
            suffixes: vec!["di".to_string(), "m".to_string()],
            flag: "F1".to_string(),
        };
        assert_eq!(Analysis::Match(record).to_string(), "gör + di-m (F1)");
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = AnalysisRecord {
            root: "gör".to_string(),
            stem: "dim".to_string(),
            suffixes: vec!["dim".to_string()],
            flag: "F1".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AnalysisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
