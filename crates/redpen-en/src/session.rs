// Corrector session: the top-level handle owning the word store, the
// spell engine, and the run-wide options, driving whole lines and
// documents through the pipeline.
//
// Processing is strictly sequential: one line at a time, one token at
// a time, in input order. The only blocking point is an interactive
// pick. The word store is read-only once the session exists, so
// lookups are safe to share; the engine is consulted serially.

use std::io::{BufRead, Write};

use redpen_core::enums::CorrectMode;
use redpen_core::error::CorrectorError;
use redpen_core::token::{CorrectionResult, Token};

use crate::classifier::Classifier;
use crate::policy::{CorrectionPolicy, Interaction};
use crate::renderer;
use crate::speller::SpellEngine;
use crate::tokenizer;
use crate::wordstore::WordStore;

/// Options fixed when a run starts.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// How misspellings with suggestions are resolved.
    pub mode: CorrectMode,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            mode: CorrectMode::Auto,
        }
    }
}

/// Both renderings of one corrected line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedLine {
    /// Diff-annotated fragment ending in `<br>` and a newline.
    pub diff: String,
    /// Plain corrected text ending in a newline.
    pub plain: String,
}

/// Top-level handle that owns all correction components.
pub struct CorrectorSession {
    store: WordStore,
    engine: Box<dyn SpellEngine>,
    options: SessionOptions,
}

impl CorrectorSession {
    /// Create a session from a built word store and an initialized
    /// engine. Both resources must already be loaded; load failures
    /// are fatal before a session ever exists.
    pub fn new(store: WordStore, engine: Box<dyn SpellEngine>, options: SessionOptions) -> Self {
        Self {
            store,
            engine,
            options,
        }
    }

    /// Set the correction mode for subsequent lines.
    pub fn set_mode(&mut self, mode: CorrectMode) {
        self.options.mode = mode;
    }

    pub fn mode(&self) -> CorrectMode {
        self.options.mode
    }

    /// Layered correctness check: word store (directly or via stem),
    /// then the engine.
    pub fn spell(&self, word: &str) -> bool {
        let classifier = Classifier::new(&self.store, self.engine.as_ref());
        classifier.is_known(word) || self.engine.spell(word)
    }

    /// Ranked engine suggestions for a word.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.engine.suggest(word)
    }

    /// Run one whitespace-delimited word through split, classify and
    /// resolve.
    pub fn correct_token(
        &self,
        word: &str,
        interaction: &mut dyn Interaction,
    ) -> (Token, CorrectionResult) {
        let token = tokenizer::split(word);
        let classifier = Classifier::new(&self.store, self.engine.as_ref());
        let policy = CorrectionPolicy::new(self.options.mode);
        let classification = classifier.classify(&token.core);
        let result = policy.resolve(&token.core, classification, interaction);
        (token, result)
    }

    /// Correct one line of input, producing both renderings. Tokens
    /// are whitespace-delimited and rejoined with single spaces.
    pub fn correct_line(&self, line: &str, interaction: &mut dyn Interaction) -> CorrectedLine {
        let mut diff_fragments = Vec::new();
        let mut plain_fragments = Vec::new();

        for word in line.split_whitespace() {
            let (token, result) = self.correct_token(word, interaction);
            diff_fragments.push(renderer::render_diff(&token, &result));
            plain_fragments.push(renderer::render_plain(&token, &result));
        }

        CorrectedLine {
            diff: renderer::join_diff_line(&diff_fragments),
            plain: renderer::join_plain_line(&plain_fragments),
        }
    }

    /// Correct a whole document, writing the annotated rendering and
    /// the plain corrected text line by line in input order.
    ///
    /// Any stream failure aborts the run; nothing beyond the bytes
    /// already flushed is guaranteed to be on disk.
    pub fn correct_document(
        &self,
        input: impl BufRead,
        html_out: &mut dyn Write,
        plain_out: &mut dyn Write,
        interaction: &mut dyn Interaction,
    ) -> Result<(), CorrectorError> {
        html_out.write_all(renderer::HTML_PROLOGUE.as_bytes())?;

        for line in input.lines() {
            let line = line?;
            let corrected = self.correct_line(&line, interaction);
            html_out.write_all(corrected.diff.as_bytes())?;
            plain_out.write_all(corrected.plain.as_bytes())?;
        }

        html_out.write_all(renderer::HTML_EPILOGUE.as_bytes())?;
        html_out.flush()?;
        plain_out.flush()?;
        Ok(())
    }
}
