//! Recursive decomposition of a suffix string into known sub-suffixes.

use crate::lexicon::index::RuleIndex;

/// One possible split of a suffix string: an ordered sequence of sub-suffix
/// texts whose concatenation equals the original suffix.
pub type Candidate = Vec<String>;

/// Decomposes suffix strings against a pre-built rule index.
#[derive(Debug, Clone, Copy)]
pub struct SuffixDecomposer<'a> {
    index: &'a RuleIndex,
}

impl<'a> SuffixDecomposer<'a> {
    /// Create a decomposer over the given rule index.
    pub fn new(index: &'a RuleIndex) -> Self {
        SuffixDecomposer { index }
    }

    /// Decompose `suffix` into every sequence of known sub-suffixes valid in
    /// the context of `stem`.
    ///
    /// The empty suffix yields exactly one candidate, the empty sequence.
    /// Otherwise every non-empty character prefix of `suffix` that is a rule
    /// index key, and whose indexed rules contain at least one condition
    /// satisfied by `stem`, branches the search: the prefix is consumed, the
    /// stem grows by it, and the remainder is decomposed recursively.
    ///
    /// Worst case exponential in suffix length, which is acceptable here:
    /// Turkish suffix chains are short and branching is bounded to prefixes
    /// that are literal known suffixes.
    pub fn decompose(&self, stem: &str, suffix: &str) -> Vec<Candidate> {
        if suffix.is_empty() {
            return vec![Vec::new()];
        }

        let mut results = Vec::new();

        // Split points after each character, not each byte.
        let boundaries = suffix
            .char_indices()
            .map(|(i, _)| i)
            .skip(1)
            .chain(std::iter::once(suffix.len()));

        for end in boundaries {
            let part = &suffix[..end];
            let rest = &suffix[end..];

            let Some(rules) = self.index.get(part) else {
                continue;
            };
            if !rules.iter().any(|rule| rule.cond.accepts(stem)) {
                continue;
            }

            let grown = format!("{stem}{part}");
            for sub in self.decompose(&grown, rest) {
                let mut candidate = Vec::with_capacity(sub.len() + 1);
                candidate.push(part.to_string());
                candidate.extend(sub);
                results.push(candidate);
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::rules::RuleSet;

    fn index_from(text: &str) -> RuleIndex {
        RuleIndex::build(&RuleSet::parse_str(text))
    }

    #[test]
    fn test_empty_suffix_yields_one_empty_candidate() {
        let index = index_from("SFX F1 0 lar .\n");
        let decomposer = SuffixDecomposer::new(&index);
        assert_eq!(decomposer.decompose("ev", ""), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_single_known_suffix() {
        let index = index_from("SFX F1 0 lar .\n");
        let decomposer = SuffixDecomposer::new(&index);
        assert_eq!(decomposer.decompose("ev", "lar"), vec![vec!["lar".to_string()]]);
    }

    #[test]
    fn test_branching_decomposition() {
        let index = index_from("SFX F1 0 emedim .\nSFX A1 0 e .\nSFX A2 0 me .\nSFX A3 0 di .\nSFX A4 0 m .\n");
        let decomposer = SuffixDecomposer::new(&index);

        let candidates = decomposer.decompose("gör", "emedim");
        let as_strs: Vec<Vec<&str>> = candidates
            .iter()
            .map(|c| c.iter().map(|s| s.as_str()).collect())
            .collect();

        assert!(as_strs.contains(&vec!["e", "me", "di", "m"]));
        assert!(as_strs.contains(&vec!["e", "m", "e", "di", "m"]));
        assert!(as_strs.contains(&vec!["emedim"]));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_every_candidate_concatenates_to_suffix() {
        let index = index_from("SFX F1 0 emedim .\nSFX A1 0 e .\nSFX A2 0 me .\nSFX A3 0 di .\nSFX A4 0 m .\n");
        let decomposer = SuffixDecomposer::new(&index);

        for candidate in decomposer.decompose("gör", "emedim") {
            assert_eq!(candidate.concat(), "emedim");
        }
    }

    #[test]
    fn test_condition_gates_on_stem_context() {
        // "lar" only attaches to stems starting with "kitap".
        let index = index_from("SFX F1 0 lar kitap\n");
        let decomposer = SuffixDecomposer::new(&index);

        assert_eq!(decomposer.decompose("kitap", "lar").len(), 1);
        assert!(decomposer.decompose("ev", "lar").is_empty());
    }

    #[test]
    fn test_unknown_suffix_yields_no_candidates() {
        let index = index_from("SFX F1 0 lar .\n");
        let decomposer = SuffixDecomposer::new(&index);
        assert!(decomposer.decompose("ev", "xyz").is_empty());
    }

    #[test]
    fn test_multibyte_suffix_prefixes() {
        let index = index_from("SFX F1 0 ü .\nSFX F2 0 şü .\n");
        let decomposer = SuffixDecomposer::new(&index);

        // Prefix enumeration must respect char boundaries in "şü".
        let candidates = decomposer.decompose("gör", "şü");
        let as_strs: Vec<Vec<&str>> = candidates
            .iter()
            .map(|c| c.iter().map(|s| s.as_str()).collect())
            .collect();
        assert_eq!(as_strs, vec![vec!["şü"]]);
    }
}
