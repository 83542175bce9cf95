// Word store: the custom word list loaded once at startup.
//
// A membership set over lowercased words. The store is built once and
// read-only afterwards; lookups take `&self`, so a fully constructed
// store can be shared across threads without synchronization.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;

use redpen_core::error::CorrectorError;

/// Membership set of known words, all stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: HashSet<String>,
}

impl WordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, lowercased. Inserting a duplicate is a no-op.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Exact membership test against the stored (already lowercased)
    /// entries. Callers lowercase the query first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words in the store.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the store holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build a store from lines of text, one word per line. Blank
    /// lines are skipped; surrounding whitespace is trimmed.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for line in lines {
            let word = line.as_ref().trim();
            if !word.is_empty() {
                store.insert(word);
            }
        }
        store
    }

    /// Build a store from a word-list reader.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut store = Self::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                store.insert(word);
            }
        }
        Ok(store)
    }

    /// Build a store from a word-list file. An unreadable file is the
    /// fatal load error; there is no fallback.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorrectorError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| CorrectorError::load(path.display().to_string(), e))?;
        Self::from_reader(BufReader::new(file))
            .map_err(|e| CorrectorError::load(path.display().to_string(), e))
    }
}
