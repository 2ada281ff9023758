//! Reverse index of affix rules keyed by their literal suffix text.

use ahash::AHashMap;

use crate::lexicon::rules::{AffixRule, RuleSet};

/// Index mapping each rule's `add` text to the rules carrying it.
///
/// Built once from a [`RuleSet`] and immutable afterwards, this lets the
/// decomposer test a suffix fragment with one lookup instead of rescanning
/// every rule under every flag.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    by_add: AHashMap<String, Vec<AffixRule>>,
}

impl RuleIndex {
    /// Build the index by iterating every rule under every flag.
    ///
    /// O(total rule count); must be rebuilt whenever the rule data changes.
    pub fn build(rules: &RuleSet) -> Self {
        let mut by_add: AHashMap<String, Vec<AffixRule>> = AHashMap::new();
        for rule in rules.iter_rules() {
            by_add.entry(rule.add.clone()).or_default().push(rule.clone());
        }
        RuleIndex { by_add }
    }

    /// Rules whose `add` text equals `suffix`, if any.
    pub fn get(&self, suffix: &str) -> Option<&[AffixRule]> {
        self.by_add.get(suffix).map(|rules| rules.as_slice())
    }

    /// Check whether any rule carries this `add` text.
    pub fn contains(&self, suffix: &str) -> bool {
        self.by_add.contains_key(suffix)
    }

    /// Number of distinct `add` texts.
    pub fn len(&self) -> usize {
        self.by_add.len()
    }

    /// True when the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_add.is_empty()
    }
}
