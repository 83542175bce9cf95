// Levenshtein-automaton spell engine.
//
// Backed by a character-level DAWG over the lexicon and a
// transposition-aware Levenshtein transducer. Suggestions come back
// ordered by ascending edit distance, then lexicographically, and are
// truncated to a fixed cap.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use liblevenshtein::dictionary::dynamic_dawg_char::DynamicDawgChar;
use liblevenshtein::transducer::{Candidate, Transducer};

use redpen_core::error::CorrectorError;

use crate::speller::SpellEngine;

/// Default maximum edit distance for suggestion queries. Distance 2
/// covers the common typo classes (dropped letter, doubled letter,
/// adjacent transposition, fat-fingered neighbor).
const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default cap on the number of suggestions returned.
const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Spell engine over a lexicon file, one word per line.
#[derive(Debug)]
pub struct LevenshteinEngine {
    dict: DynamicDawgChar<()>,
    max_distance: usize,
    max_suggestions: usize,
}

impl LevenshteinEngine {
    /// Build an engine from an iterator of lexicon words.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        // The lexicon is built once and never modified afterwards, so
        // automatic re-minimization is disabled; the bloom filter is
        // sized to the term count for fast negative lookups.
        let bloom_capacity = if terms.is_empty() {
            None
        } else {
            Some(terms.len())
        };
        let dict = DynamicDawgChar::with_config(f32::INFINITY, bloom_capacity);
        for term in &terms {
            dict.insert(term);
        }

        Self {
            dict,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Build an engine from a lexicon reader, skipping blank lines.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut terms = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                terms.push(word.to_string());
            }
        }
        Ok(Self::from_terms(terms))
    }

    /// Build an engine from a lexicon file. An unreadable lexicon is
    /// the fatal load error; the run must not start without an engine.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorrectorError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| CorrectorError::load(path.display().to_string(), e))?;
        Self::from_reader(BufReader::new(file))
            .map_err(|e| CorrectorError::load(path.display().to_string(), e))
    }

    /// Set the maximum edit distance used for suggestion queries.
    pub fn set_max_distance(&mut self, max_distance: usize) {
        self.max_distance = max_distance;
    }

    /// Set the cap on the number of suggestions returned.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.max_suggestions = max_suggestions;
    }

    /// Number of words in the engine lexicon.
    pub fn lexicon_len(&self) -> usize {
        self.dict.term_count()
    }
}

impl SpellEngine for LevenshteinEngine {
    fn spell(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }
        if self.dict.contains(word) {
            return true;
        }
        // Lexicons are stored lowercased by convention; accept "The"
        // when "the" is present.
        let lower = word.to_lowercase();
        lower != word && self.dict.contains(&lower)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let query = word.to_lowercase();
        let transducer = Transducer::with_transposition(self.dict.clone());

        let mut candidates: Vec<(String, usize)> = transducer
            .query_with_distance(&query, self.max_distance)
            .map(|candidate: Candidate| (candidate.term, candidate.distance))
            .collect();

        // Closest matches first, ties broken alphabetically.
        candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        candidates.truncate(self.max_suggestions);

        candidates.into_iter().map(|(term, _)| term).collect()
    }
}
