//! Dictionary (lexicon) loading for morphological analysis.

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::Result;

/// A single dictionary entry: a root word plus the affix flags attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The base word form, not itself further decomposable.
    pub root: String,
    /// Symbolic tags linking this root to its applicable affix rules.
    pub flags: AHashSet<String>,
}

/// The in-memory dictionary mapping roots to their entries.
///
/// Built once at analyzer construction and read-only afterwards, which makes
/// it safe to share across analysis threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: AHashMap<String, DictionaryEntry>,
}

impl Lexicon {
    /// Create a new empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            entries: AHashMap::new(),
        }
    }

    /// Insert a root with its flag set. Duplicate roots overwrite earlier
    /// entries (last-write-wins).
    pub fn insert(&mut self, root: String, flags: AHashSet<String>) {
        self.entries.insert(
            root.clone(),
            DictionaryEntry { root, flags },
        );
    }

    /// Look up the entry for a root.
    pub fn get(&self, root: &str) -> Option<&DictionaryEntry> {
        self.entries.get(root)
    }

    /// Check whether a root is present.
    pub fn contains(&self, root: &str) -> bool {
        self.entries.contains_key(root)
    }

    /// Number of distinct roots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(root, entry)` pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DictionaryEntry)> {
        self.entries.iter()
    }

    /// Parse dictionary text in Hunspell `.dic` format.
    ///
    /// The first line is a word-count header and is skipped. Each remaining
    /// non-blank line is `root` or `root/flag1,flag2,...`; a root without a
    /// flag suffix gets an empty flag set. Parsing never fails: there is no
    /// malformed shape a line can take beyond being blank.
    pub fn parse_str(text: &str) -> Self {
        let mut lexicon = Lexicon::new();

        for line in text.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.split_once('/') {
                Some((root, flag_list)) => {
                    let flags = flag_list.split(',').map(|f| f.to_string()).collect();
                    lexicon.insert(root.to_string(), flags);
                }
                None => {
                    lexicon.insert(line.to_string(), AHashSet::new());
                }
            }
        }

        lexicon
    }

    /// Load a dictionary from a `.dic` file.
    ///
    /// An unreadable path is an error; an empty-but-readable file yields a
    /// valid empty lexicon. Callers decide whether to degrade or abort.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse_str(&text))
    }
}
