//! Scoring and selection of decomposition candidates.

use ahash::AHashSet;

use crate::lexicon::rules::RuleSet;
use crate::morphology::decompose::Candidate;

/// Single-character buffering consonants and vowels common in Turkish
/// suffixation, treated as known even when no rule lists them explicitly.
const BUFFER_LETTERS: &[&str] = &["y", "n", "s", "m", "k", "z", "l"];

const KNOWN_SUFFIX_REWARD: f64 = 10.0;
const SINGLE_LETTER_PENALTY: f64 = -1.0;
const UNKNOWN_FRAGMENT_PENALTY: f64 = -5.0;
const GRANULARITY_BONUS: f64 = 0.5;

/// Ranks competing suffix decompositions of the same suffix string.
///
/// A candidate part scores high when it is a known suffix, slightly negative
/// when it is an unrecognized single letter, and strongly negative when it is
/// an unrecognized multi-character fragment (a likely bad split). Among
/// otherwise equal candidates a small per-part bonus favors the
/// finer-grained split.
#[derive(Debug, Clone)]
pub struct CandidateScorer {
    known_suffixes: AHashSet<String>,
}

impl CandidateScorer {
    /// Build a scorer whose known-suffix set is every non-empty rule `add`
    /// text plus the single-letter buffers.
    pub fn from_rules(rules: &RuleSet) -> Self {
        let mut known_suffixes: AHashSet<String> = rules
            .iter_rules()
            .filter(|rule| !rule.add.is_empty())
            .map(|rule| rule.add.clone())
            .collect();
        known_suffixes.extend(BUFFER_LETTERS.iter().map(|s| s.to_string()));

        CandidateScorer { known_suffixes }
    }

    /// Score one candidate.
    pub fn score(&self, candidate: &[String]) -> f64 {
        let mut score = 0.0;
        for part in candidate {
            if self.known_suffixes.contains(part.as_str()) {
                score += KNOWN_SUFFIX_REWARD;
            } else if part.chars().count() == 1 {
                score += SINGLE_LETTER_PENALTY;
            } else {
                score += UNKNOWN_FRAGMENT_PENALTY;
            }
        }
        score + candidate.len() as f64 * GRANULARITY_BONUS
    }

    /// Return every candidate achieving the maximum score.
    ///
    /// Ties are preserved rather than broken arbitrarily; empty input yields
    /// empty output.
    pub fn select_best(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        let scored: Vec<(f64, &Candidate)> = candidates
            .iter()
            .map(|candidate| (self.score(candidate), candidate))
            .collect();

        let Some(best_score) = scored
            .iter()
            .map(|(score, _)| *score)
            .fold(None, |best: Option<f64>, score| match best {
                Some(b) if b >= score => Some(b),
                _ => Some(score),
            })
        else {
            return Vec::new();
        };

        scored
            .into_iter()
            .filter(|(score, _)| *score == best_score)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}
