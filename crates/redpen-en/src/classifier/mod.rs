// Word classification: the layered lookup that decides whether a core
// word is known, and when it is not, what the engine thinks of it.

use crate::speller::SpellEngine;
use crate::stemmer;
use crate::wordstore::WordStore;

/// Outcome of classifying one core word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The word or its stem is in the word store, or the core is empty.
    Known,
    /// Not in the word store, but the engine accepts the spelling.
    EngineAccepted,
    /// Misspelled by every layer; candidates kept in engine order.
    Misspelled { suggestions: Vec<String> },
}

/// Layered lookup over the word store, the stemmer, and the engine.
///
/// Borrows both collaborators; per-line classifiers are cheap to
/// construct.
pub struct Classifier<'a> {
    store: &'a WordStore,
    engine: &'a dyn SpellEngine,
}

impl<'a> Classifier<'a> {
    pub fn new(store: &'a WordStore, engine: &'a dyn SpellEngine) -> Self {
        Self { store, engine }
    }

    /// Word-store membership for the lowercased core or its stem.
    ///
    /// An empty core (a token that was all punctuation) is always
    /// known; it must never reach the engine.
    pub fn is_known(&self, core: &str) -> bool {
        if core.is_empty() {
            return true;
        }
        let lower = core.to_lowercase();
        self.store.contains(&lower) || self.store.contains(&stemmer::stem(&lower))
    }

    /// Classify a core word. The engine is only consulted when the
    /// store lookup fails, and it sees the original casing.
    pub fn classify(&self, core: &str) -> Classification {
        if self.is_known(core) {
            return Classification::Known;
        }
        if self.engine.spell(core) {
            return Classification::EngineAccepted;
        }
        Classification::Misspelled {
            suggestions: self.engine.suggest(core),
        }
    }
}
