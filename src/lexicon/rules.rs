//! Affix-rule loading and representation.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use regex::Regex;

use crate::error::{Result, TurkmorphError};

/// Marker token opening a suffix-rule line. Prefix (`PFX`) rules are not
/// supported and are ignored along with every other line kind.
const SUFFIX_MARKER: &str = "SFX";

/// Token denoting an empty strip or add field in `.aff` sources.
const EMPTY_FIELD: &str = "0";

/// A condition a stem must satisfy before a rule applies.
#[derive(Debug, Clone)]
pub enum Condition {
    /// The literal condition `"."`: always satisfied.
    Always,
    /// A pattern tested at the start of the stem.
    Pattern(Regex),
}

impl Condition {
    /// Parse a condition token into its compiled form.
    pub fn parse(text: &str) -> Result<Self> {
        if text == "." {
            return Ok(Condition::Always);
        }
        let regex = Regex::new(&format!("^(?:{text})")).map_err(|e| {
            TurkmorphError::rule(format!("invalid condition pattern '{text}': {e}"))
        })?;
        Ok(Condition::Pattern(regex))
    }

    /// Check whether `stem` satisfies this condition.
    pub fn accepts(&self, stem: &str) -> bool {
        match self {
            Condition::Always => true,
            Condition::Pattern(regex) => regex.is_match(stem),
        }
    }
}

/// A single suffix rule under a flag.
#[derive(Debug, Clone)]
pub struct AffixRule {
    /// The flag this rule is grouped under.
    pub flag: String,
    /// Text removed from the stem end before the suffix is applied; empty
    /// means none.
    pub strip: String,
    /// The literal suffix text appended.
    pub add: String,
    /// Condition on the stem for this rule to apply.
    pub cond: Condition,
    /// Start-anchored test deciding whether `strip` applies to a root.
    strip_cond: Option<Condition>,
}

impl AffixRule {
    /// Build a rule from raw `.aff` tokens, compiling the condition and
    /// strip patterns.
    pub fn new(flag: &str, strip: &str, add: &str, cond: &str) -> Result<Self> {
        let strip_cond = if strip.is_empty() {
            None
        } else {
            Some(Condition::parse(strip)?)
        };
        Ok(AffixRule {
            flag: flag.to_string(),
            strip: strip.to_string(),
            add: add.to_string(),
            cond: Condition::parse(cond)?,
            strip_cond,
        })
    }

    /// Apply this rule's strip to a root.
    ///
    /// The strip text is tested as a start-anchored pattern against the root
    /// and, when it matches, strip-many characters are removed from the
    /// root's end. This mirrors the reference dictionaries' semantics, where
    /// the strip field doubles as a pattern on the root.
    pub fn strip_root(&self, root: &str) -> String {
        match &self.strip_cond {
            Some(cond) if cond.accepts(root) => {
                let keep = root
                    .chars()
                    .count()
                    .saturating_sub(self.strip.chars().count());
                root.chars().take(keep).collect()
            }
            _ => root.to_string(),
        }
    }
}

/// Suffix rules grouped by flag, in source order within each flag.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: AHashMap<String, Vec<AffixRule>>,
    skipped_lines: usize,
}

impl RuleSet {
    /// Create a new empty rule set.
    pub fn new() -> Self {
        RuleSet {
            rules: AHashMap::new(),
            skipped_lines: 0,
        }
    }

    /// Append a rule under its flag, preserving insertion order.
    pub fn insert(&mut self, rule: AffixRule) {
        self.rules.entry(rule.flag.clone()).or_default().push(rule);
    }

    /// Get the rules for a flag, if any.
    pub fn get(&self, flag: &str) -> Option<&[AffixRule]> {
        self.rules.get(flag).map(|rules| rules.as_slice())
    }

    /// Check whether a flag has rules.
    pub fn contains_flag(&self, flag: &str) -> bool {
        self.rules.contains_key(flag)
    }

    /// Total number of rules across all flags.
    pub fn total_rules(&self) -> usize {
        self.rules.values().map(|rules| rules.len()).sum()
    }

    /// True when no rules are present.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over every rule under every flag.
    pub fn iter_rules(&self) -> impl Iterator<Item = &AffixRule> {
        self.rules.values().flatten()
    }

    /// Number of suffix-marker lines that were skipped as malformed (too few
    /// tokens, or an uncompilable pattern).
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Parse affix text in Hunspell `.aff` format.
    ///
    /// Lines are whitespace-tokenized. Only lines whose first token is the
    /// suffix-rule marker are consumed; a valid rule line carries flag,
    /// strip, add and condition tokens (at least 5 tokens total), with the
    /// literal `0` denoting an empty strip or add. All other lines, header
    /// and prefix-rule lines included, are ignored. Malformed suffix lines
    /// are skipped and counted rather than aborting the parse.
    pub fn parse_str(text: &str) -> Self {
        let mut rule_set = RuleSet::new();

        for line in text.lines() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.first() != Some(&SUFFIX_MARKER) {
                continue;
            }
            if tokens.len() < 5 {
                rule_set.skipped_lines += 1;
                continue;
            }

            let flag = tokens[1];
            let strip = if tokens[2] == EMPTY_FIELD { "" } else { tokens[2] };
            let add = if tokens[3] == EMPTY_FIELD { "" } else { tokens[3] };

            match AffixRule::new(flag, strip, add, tokens[4]) {
                Ok(rule) => rule_set.insert(rule),
                Err(_) => rule_set.skipped_lines += 1,
            }
        }

        rule_set
    }

    /// Load suffix rules from a `.aff` file.
    ///
    /// An unreadable path is an error; an empty-but-readable file yields a
    /// valid empty rule set. Callers decide whether to degrade or abort.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse_str(&text))
    }
}
